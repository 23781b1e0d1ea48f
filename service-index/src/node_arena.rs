use core::convert::TryInto;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::ptr::NonNull;

use alloc::alloc::{alloc as allocate, dealloc, handle_alloc_error, Layout};
use alloc::vec::Vec;

const MAX_ARENA_SIZE: usize = 8192; // 2 pages

/// A single fixed-size block of element slots.
/// Only the slots below the owning list's length are initialized.
#[derive(Debug)]
#[repr(transparent)]
struct Arena<T> {
    data: NonNull<T>,
}

impl<T> Arena<T> {
    fn new() -> Arena<T> {
        let layout = Arena::<T>::layout();

        unsafe {
            let p = allocate(layout);
            if let Some(p) = NonNull::new(p) {
                Arena { data: p.cast() }
            } else {
                handle_alloc_error(layout);
            }
        }
    }

    const fn layout() -> Layout {
        let alloc_sz = Arena::<T>::padded_elem_sz() * Arena::<T>::capacity();

        // This is safe:
        // - The alignment returned by mem::align_of::<T>() is a power of two.
        // - alloc_sz is a multiple of that alignment (see padded_elem_sz) and
        //     is at most one padded element larger than MAX_ARENA_SIZE.
        // ZSTs are rejected by ArenaList::new().
        unsafe { Layout::from_size_align_unchecked(alloc_sz, mem::align_of::<T>()) }
    }

    /// Round up the size of T to the nearest multiple of its alignment.
    const fn padded_elem_sz() -> usize {
        let align = mem::align_of::<T>();
        let sz = mem::size_of::<T>();
        sz.wrapping_add(align).wrapping_sub(1) & !align.wrapping_sub(1)
    }

    /// Get the number of elements within this arena type.
    /// Oversized elements get an arena of their own.
    const fn capacity() -> usize {
        let sz = Arena::<T>::padded_elem_sz();
        if sz >= MAX_ARENA_SIZE {
            1
        } else {
            MAX_ARENA_SIZE / sz
        }
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        unsafe {
            // Only the memory block is released here; ArenaList drops the
            // initialized elements before its arenas go away.
            let p = self.data.as_ptr() as *mut u8;
            dealloc(p, Arena::<T>::layout());
        }
    }
}

/// An append-only list of elements stored in fixed-size arenas.
///
/// Elements never move once pushed, so an element's index stays valid for as
/// long as the list is not cleared. Allocation failure is fatal.
#[derive(Debug)]
pub struct ArenaList<T> {
    arenas: Vec<Arena<T>>,
    len: usize,
}

impl<T> ArenaList<T> {
    pub fn new() -> ArenaList<T> {
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized arena elements are not supported"
        );

        ArenaList {
            arenas: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        Arena::<T>::capacity() * self.arenas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the index of the arena, and the offset within that arena, that
    /// should be used to access the given element.
    const fn arena_index(element_index: usize) -> (usize, usize) {
        let offset = element_index % Arena::<T>::capacity();
        let arena = element_index / Arena::<T>::capacity();
        (arena, offset)
    }

    fn element_pointer(&self, index: usize) -> *mut T {
        if index >= self.len {
            panic!(
                "index out of bounds (the len is {} but the index is {})",
                self.len, index
            );
        }

        let (arena, offset) = Self::arena_index(index);
        unsafe { self.arenas[arena].data.as_ptr().add(offset) }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        Some(unsafe { &*self.element_pointer(index) })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        Some(unsafe { &mut *self.element_pointer(index) })
    }

    /// Append an element, returning its index.
    pub fn push(&mut self, value: T) -> usize {
        let (arena, offset) = Self::arena_index(self.len);
        debug_assert!(arena <= self.arenas.len(), "list length corrupted");

        if arena == self.arenas.len() {
            /* Need to add a new arena. */
            self.arenas.push(Arena::new());
        }

        unsafe {
            let p = self.arenas[arena].data.as_ptr();
            ptr::write(p.add(offset), value);
        }

        self.len += 1;
        self.len - 1
    }

    /// Drop every element and release all arenas.
    pub fn clear(&mut self) {
        self.drop_elements();
        self.arenas.clear();
    }

    fn drop_elements(&mut self) {
        // Zero the length first: a panicking destructor must not lead to the
        // remaining elements being dropped twice.
        let len = self.len;
        self.len = 0;

        for i in 0..len {
            let (arena, offset) = Self::arena_index(i);
            unsafe {
                ptr::drop_in_place(self.arenas[arena].data.as_ptr().add(offset));
            }
        }
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArenaList<T> {
    fn drop(&mut self) {
        // each Arena's drop impl will handle deallocating memory
        self.drop_elements();
    }
}

impl<T, I: TryInto<usize>> Index<I> for ArenaList<T> {
    type Output = T;

    fn index(&self, index: I) -> &T {
        let index: usize = match index.try_into() {
            Ok(x) => x,
            Err(_) => panic!("could not convert index to usize"),
        };

        unsafe { &*self.element_pointer(index) }
    }
}

impl<T, I: TryInto<usize>> IndexMut<I> for ArenaList<T> {
    fn index_mut(&mut self, index: I) -> &mut T {
        let index: usize = match index.try_into() {
            Ok(x) => x,
            Err(_) => panic!("could not convert index to usize"),
        };

        unsafe { &mut *self.element_pointer(index) }
    }
}

unsafe impl<T: Send> Send for ArenaList<T> {}
unsafe impl<T: Sync> Sync for ArenaList<T> {}
