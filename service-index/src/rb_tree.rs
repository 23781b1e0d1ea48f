use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::node_arena::ArenaList;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A broken tree property, as reported by [`RBIndex::validate`].
/// Node numbers are arena indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvariantViolation {
    RedRoot(usize),
    RootHasParent(usize),
    /// A child whose parent link does not point back at its parent.
    BrokenLink { parent: usize, child: usize },
    /// A node reachable along more than one path.
    SharedNode(usize),
    /// A node whose key falls outside the range implied by an ancestor.
    OutOfOrder { node: usize, ancestor: usize },
    RedRed { parent: usize, child: usize },
    BlackHeight { node: usize, left: usize, right: usize },
    /// Nodes allocated in the arena but not reachable from the root.
    Unreachable { reached: usize, len: usize },
}

#[derive(Debug)]
struct Node<K, V> {
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
    color: Color,
    key: K,
    val: V,
}

impl<K, V> Node<K, V> {
    fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<usize> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// An insert-only red-black tree index.
///
/// Keys are compared with their `Ord` implementation, which for `str`, `[u8]`
/// and byte-string wrappers is unsigned byte-lexicographic ordering. Equal keys
/// are allowed: a key equal to an existing one is always placed after it in key
/// order, and `search` returns whichever equal entry it meets first on the
/// lookup path.
///
/// Nodes live in an [`ArenaList`] and refer to each other by index.
#[derive(Debug)]
pub struct RBIndex<K, V> {
    nodes: ArenaList<Node<K, V>>,
    root: Option<usize>,
}

impl<K, V> RBIndex<K, V> {
    pub fn new() -> RBIndex<K, V> {
        RBIndex {
            nodes: ArenaList::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|r| self.nodes[r].color)
    }

    /// Release every node and return to the empty tree.
    /// Calling this on an empty tree does nothing.
    pub fn destroy(&mut self) {
        self.root = None;
        self.nodes.clear();
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            let node = &self.nodes[idx];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }

        max_depth
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn child(&self, node: usize, side: Side) -> Option<usize> {
        self.nodes[node].child(side)
    }

    fn set_child(&mut self, parent: usize, side: Side, child: Option<usize>) {
        *self.nodes[parent].child_mut(side) = child;
        if let Some(c) = child {
            self.nodes[c].parent = Some(parent);
        }
    }

    fn side_of(&self, parent: usize, child: usize) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(
                self.nodes[parent].right,
                Some(child),
                "broken parent/child link between nodes {} and {}",
                parent,
                child
            );
            Side::Right
        }
    }

    /// Put `new` in the slot that currently holds `old`: either a child slot
    /// of `old`'s parent, or the root.
    fn replace_in_parent(&mut self, old: usize, new: usize) {
        match self.parent(old) {
            Some(p) => {
                let side = self.side_of(p, old);
                self.set_child(p, side, Some(new));
            }
            None => {
                self.nodes[new].parent = None;
                self.root = Some(new);
            }
        }
    }

    /// Rotate `node` down towards `dir`.
    ///
    /// The child on the opposite side (the pivot) takes `node`'s place, `node`
    /// becomes the pivot's `dir` child, and the pivot's former `dir` subtree
    /// moves into the slot the pivot vacated.
    fn rotate(&mut self, dir: Side, node: usize) {
        let pivot = self
            .child(node, dir.opposite())
            .expect("attempted to rotate without a pivot");
        let inner = self.child(pivot, dir);

        self.replace_in_parent(node, pivot);
        self.set_child(node, dir.opposite(), inner);
        self.set_child(pivot, dir, Some(node));
    }

    fn repair_insert(&mut self, mut node: usize) {
        while let Some(mut parent) = self.parent(node) {
            if self.nodes[parent].color == Color::Black {
                break;
            }

            /* Parent is red, so it is not the root and we must have a grandparent. */
            let gp = self.parent(parent).expect("red node at the root");
            let parent_side = self.side_of(gp, parent);
            let uncle = self
                .child(gp, parent_side.opposite())
                .filter(|&u| self.nodes[u].color == Color::Red);

            if let Some(uncle) = uncle {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[gp].color = Color::Red;
                node = gp;
                continue;
            }

            if self.side_of(parent, node) != parent_side {
                /* Inner child: turn it into an outer one. */
                self.rotate(parent_side, parent);
                parent = node;
            }

            self.nodes[parent].color = Color::Black;
            self.nodes[gp].color = Color::Red;
            self.rotate(parent_side.opposite(), gp);
            break;
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }
}

impl<K: Ord, V> RBIndex<K, V> {
    /// Insert a record under `key`. Duplicate keys are kept.
    pub fn insert(&mut self, key: K, val: V) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;

        while let Some(idx) = cur {
            parent = Some(idx);
            side = if key < self.nodes[idx].key {
                Side::Left
            } else {
                Side::Right
            };
            cur = self.child(idx, side);
        }

        let node = self.nodes.push(Node {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            key,
            val,
        });

        match parent {
            Some(p) => self.set_child(p, side, Some(node)),
            None => self.root = Some(node),
        }

        self.repair_insert(node);
    }

    fn find_node<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;

        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            cur = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.find_node(key)?;
        Some(&self.nodes[idx].val)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Check every structural and red-black property of the tree.
    ///
    /// Returns the black height of the tree: the number of black nodes on any
    /// path from the root down to an absent child (0 for an empty tree).
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let len = self.nodes.len();
        let root = match self.root {
            Some(root) => root,
            None if len == 0 => return Ok(0),
            None => return Err(InvariantViolation::Unreachable { reached: 0, len }),
        };

        if self.nodes[root].parent.is_some() {
            return Err(InvariantViolation::RootHasParent(root));
        }

        if self.nodes[root].color == Color::Red {
            return Err(InvariantViolation::RedRoot(root));
        }

        /* Top-down pass. Each entry carries the ancestors bounding its key. */
        let mut seen = alloc::vec![false; len];
        let mut preorder = Vec::with_capacity(len);
        let mut stack: Vec<(usize, Option<usize>, Option<usize>)> = alloc::vec![(root, None, None)];

        while let Some((idx, lower, upper)) = stack.pop() {
            if seen[idx] {
                return Err(InvariantViolation::SharedNode(idx));
            }

            seen[idx] = true;
            preorder.push(idx);

            let node = &self.nodes[idx];
            if let Some(lo) = lower.filter(|&lo| node.key < self.nodes[lo].key) {
                return Err(InvariantViolation::OutOfOrder { node: idx, ancestor: lo });
            }

            if let Some(hi) = upper.filter(|&hi| node.key > self.nodes[hi].key) {
                return Err(InvariantViolation::OutOfOrder { node: idx, ancestor: hi });
            }

            for (side, child) in [(Side::Left, node.left), (Side::Right, node.right)] {
                let child = match child {
                    Some(c) => c,
                    None => continue,
                };

                if self.nodes[child].parent != Some(idx) {
                    return Err(InvariantViolation::BrokenLink { parent: idx, child });
                }

                if node.color == Color::Red && self.nodes[child].color == Color::Red {
                    return Err(InvariantViolation::RedRed { parent: idx, child });
                }

                match side {
                    Side::Left => stack.push((child, lower, Some(idx))),
                    Side::Right => stack.push((child, Some(idx), upper)),
                }
            }
        }

        if preorder.len() != len {
            return Err(InvariantViolation::Unreachable {
                reached: preorder.len(),
                len,
            });
        }

        /* Bottom-up pass: reversed preorder visits children before parents. */
        let mut black_heights = alloc::vec![0usize; len];
        for &idx in preorder.iter().rev() {
            let node = &self.nodes[idx];
            let left = node.left.map_or(0, |c| black_heights[c]);
            let right = node.right.map_or(0, |c| black_heights[c]);

            if left != right {
                return Err(InvariantViolation::BlackHeight { node: idx, left, right });
            }

            black_heights[idx] = left + usize::from(node.color == Color::Black);
        }

        Ok(black_heights[root])
    }
}

impl<K, V> Default for RBIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, InvariantViolation, RBIndex, Side};
    use core::fmt::Debug;
    use quickcheck::TestResult;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;
    use std::prelude::v1::*;
    use std::rc::Rc;

    const TEST_SEED: u64 = 0x4B616E6174614368;

    #[allow(dead_code)]
    fn print_recursive<K: Debug, V: Debug>(tree: &RBIndex<K, V>, node: usize, level: usize) {
        let n = &tree.nodes[node];
        if let Some(right) = n.right {
            print_recursive(tree, right, level + 1);
        }

        for _ in 0..level {
            print!("       ");
        }

        match n.color {
            Color::Red => println!("{:?}: {:?} (R)", n.key, n.val),
            Color::Black => println!("{:?}: {:?} (B)", n.key, n.val),
        }

        if let Some(left) = n.left {
            print_recursive(tree, left, level + 1);
        }
    }

    fn in_order<K: Clone, V: Clone>(tree: &RBIndex<K, V>) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(tree.len());
        let mut stack = Vec::new();
        let mut cur = tree.root;

        loop {
            while let Some(idx) = cur {
                stack.push(idx);
                cur = tree.nodes[idx].left;
            }

            match stack.pop() {
                Some(idx) => {
                    let node = &tree.nodes[idx];
                    out.push((node.key.clone(), node.val.clone()));
                    cur = node.right;
                }
                None => break,
            }
        }

        out
    }

    fn assert_link<K, V>(tree: &RBIndex<K, V>, parent: usize, child: Option<usize>, side: Side) {
        assert_eq!(
            tree.nodes[parent].child(side),
            child,
            "incorrect {:?} child for node {}",
            side,
            parent
        );

        if let Some(child) = child {
            assert_eq!(
                tree.nodes[child].parent,
                Some(parent),
                "incorrect parent for node {}",
                child
            );
        }
    }

    #[test]
    fn test_insert() {
        let keys: Vec<u64> = vec![1, 5, 3, 6, 4, 2];
        let vals: Vec<u64> = vec![1, 2, 3, 4, 5, 6];
        let mut tree = RBIndex::new();

        for (k, v) in keys.iter().copied().zip(vals.iter().copied()) {
            tree.insert(k, v);
            tree.validate().expect("invalid tree after insert");
        }

        for (k, v) in keys.iter().copied().zip(vals.iter().copied()) {
            assert_eq!(tree.search(&k).copied(), Some(v));
        }

        assert_eq!(tree.len(), keys.len());
        assert!(tree.search(&7).is_none());
    }

    #[test]
    fn test_empty_tree() {
        let mut tree: RBIndex<String, u32> = RBIndex::new();

        assert!(tree.is_empty());
        assert_eq!(tree.search("anything"), None);
        assert!(!tree.contains(""));
        assert_eq!(tree.root_color(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.validate(), Ok(0));

        tree.destroy();
        tree.destroy();
        assert!(tree.is_empty());
        assert_eq!(tree.validate(), Ok(0));
    }

    #[test]
    fn test_short_string_keys() {
        let mut tree = RBIndex::new();
        for (i, key) in ["M", "C", "T", "A", "H"].iter().enumerate() {
            tree.insert(String::from(*key), i);
        }

        assert_eq!(tree.root_color(), Some(Color::Black));
        assert_eq!(tree.search("T"), Some(&2));
        assert_eq!(tree.search("Z"), None);
        assert_eq!(tree.validate(), Ok(2));

        for (i, key) in ["M", "C", "T", "A", "H"].iter().enumerate() {
            assert_eq!(tree.search(*key), Some(&i), "lookup of {} failed", key);
        }
    }

    #[test]
    fn test_outer_rotation_links() {
        let mut tree = RBIndex::new();
        tree.insert(1, 1);
        tree.insert(2, 2);
        tree.insert(3, 3);

        // 1 rotated down to the left of 2.
        assert_eq!(tree.root, Some(1), "invalid root index");
        assert_eq!(tree.nodes[1].parent, None);
        assert_link(&tree, 1, Some(0), Side::Left);
        assert_link(&tree, 1, Some(2), Side::Right);
        assert_link(&tree, 0, None, Side::Left);
        assert_link(&tree, 0, None, Side::Right);

        assert_eq!(tree.nodes[1].color, Color::Black);
        assert_eq!(tree.nodes[0].color, Color::Red);
        assert_eq!(tree.nodes[2].color, Color::Red);
    }

    #[test]
    fn test_outer_rotation_links_mirrored() {
        let mut tree = RBIndex::new();
        tree.insert(3, 3);
        tree.insert(2, 2);
        tree.insert(1, 1);

        assert_eq!(tree.root, Some(1), "invalid root index");
        assert_link(&tree, 1, Some(2), Side::Left);
        assert_link(&tree, 1, Some(0), Side::Right);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn test_inner_rotation_links() {
        let mut tree = RBIndex::new();
        tree.insert(30, ());
        tree.insert(10, ());
        tree.insert(20, ());

        // The inner grandchild ends up on top.
        assert_eq!(tree.root, Some(2), "invalid root index");
        assert_eq!(tree.nodes[2].parent, None);
        assert_link(&tree, 2, Some(1), Side::Left);
        assert_link(&tree, 2, Some(0), Side::Right);
        assert_link(&tree, 1, None, Side::Right);
        assert_link(&tree, 0, None, Side::Left);
        assert_eq!(tree.validate(), Ok(1));

        let mut tree = RBIndex::new();
        tree.insert(10, ());
        tree.insert(30, ());
        tree.insert(20, ());

        assert_eq!(tree.root, Some(2), "invalid root index");
        assert_link(&tree, 2, Some(0), Side::Left);
        assert_link(&tree, 2, Some(1), Side::Right);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn test_recolor_propagates_to_root() {
        let mut tree = RBIndex::new();
        for k in [50, 25, 75, 10] {
            tree.insert(k, ());
        }

        // 10's uncle (75) was red: both children of the root turn black.
        assert_eq!(tree.root, Some(0));
        assert_eq!(tree.nodes[0].color, Color::Black);
        assert_eq!(tree.nodes[1].color, Color::Black);
        assert_eq!(tree.nodes[2].color, Color::Black);
        assert_eq!(tree.nodes[3].color, Color::Red);
        assert_eq!(tree.validate(), Ok(2));
    }

    #[test]
    fn test_seeded_keys_valid_after_every_insert() {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);
        let mut tree = RBIndex::new();
        let mut inserted: HashMap<Vec<u8>, Vec<u32>> = HashMap::new();

        for i in 0..1000u32 {
            let len = rng.random_range(1..=3);
            let key: Vec<u8> = (0..len).map(|_| rng.random_range(b'A'..b'Z')).collect();

            tree.insert(key.clone(), i);
            inserted.entry(key).or_default().push(i);

            if let Err(e) = tree.validate() {
                panic!("invalid tree after insert {}: {:?}", i, e);
            }
        }

        assert_eq!(tree.len(), 1000);
        for (key, vals) in inserted.iter() {
            let found = tree.search(key.as_slice()).expect("inserted key not found");
            assert!(vals.contains(found), "value {} was not inserted under {:?}", found, key);
        }
    }

    #[test]
    fn test_duplicate_keys() {
        let mut tree = RBIndex::new();
        tree.insert(String::from("B"), 0);
        tree.insert(String::from("K"), 1);
        tree.insert(String::from("A"), 0);
        tree.insert(String::from("K"), 2);

        let found = *tree.search("K").expect("could not find duplicated key");
        assert!(found == 1 || found == 2);

        let keys: Vec<String> = in_order(&tree).into_iter().map(|kv| kv.0).collect();
        assert_eq!(keys.iter().filter(|k| k.as_str() == "K").count(), 2);
        assert_eq!(keys, vec!["A", "B", "K", "K"]);
        tree.validate().expect("invalid tree with duplicates");
    }

    #[test]
    fn test_many_duplicates() {
        let mut tree = RBIndex::new();
        for i in 0..200 {
            tree.insert(7u8, i);
        }

        tree.validate().expect("invalid tree of equal keys");
        assert!(tree.search(&7u8).is_some());

        // Equal keys stay in insertion order.
        let vals: Vec<i32> = in_order(&tree).into_iter().map(|kv| kv.1).collect();
        assert_eq!(vals, (0..200).collect::<Vec<i32>>());
    }

    #[test]
    fn test_increasing_keys_height() {
        let mut tree = RBIndex::new();
        for n in 1..=4096u128 {
            tree.insert(n, ());

            // height <= 2 * log2(n + 1)  <=>  2^height <= (n + 1)^2
            let height = tree.height() as u32;
            assert!(
                1u128 << height <= (n + 1) * (n + 1),
                "height {} too large for {} nodes",
                height,
                n
            );
        }

        tree.validate().expect("invalid tree after sequential inserts");
    }

    #[test]
    fn test_decreasing_keys_height() {
        let mut tree = RBIndex::new();
        for n in (0..4096u32).rev() {
            tree.insert(n, n);
        }

        // 2 * log2(4097) < 24.01
        assert!(tree.height() <= 24, "height {} too large", tree.height());
        assert_eq!(tree.search(&0), Some(&0));
        assert_eq!(tree.search(&4095), Some(&4095));
        tree.validate().expect("invalid tree after sequential inserts");
    }

    #[test]
    fn test_byte_ordering() {
        let mut tree: RBIndex<Vec<u8>, ()> = RBIndex::new();
        let keys: [&[u8]; 7] = [b"a", b"B", b"\xff", b"AB", b"A", b"AA", b"\x00"];
        for k in keys.iter() {
            tree.insert(k.to_vec(), ());
        }

        let sorted: Vec<Vec<u8>> = in_order(&tree).into_iter().map(|kv| kv.0).collect();
        let expected: [&[u8]; 7] = [b"\x00", b"A", b"AA", b"AB", b"B", b"a", b"\xff"];
        let expected: Vec<Vec<u8>> = expected.iter().map(|k| k.to_vec()).collect();

        assert_eq!(sorted, expected);
        for k in keys.iter() {
            assert!(tree.contains(*k));
        }

        assert!(!tree.contains(&b"AAA"[..]));
    }

    #[test]
    fn test_destroy_and_reuse() {
        let mut tree = RBIndex::new();
        for k in 0..100 {
            tree.insert(k, k);
        }

        tree.destroy();
        assert!(tree.is_empty());
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.height(), 0);

        tree.insert(5, 50);
        assert_eq!(tree.search(&5), Some(&50));
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn test_destroy_releases_records() {
        let record = Rc::new(());
        let mut tree = RBIndex::new();
        for k in 0..500 {
            tree.insert(k, Rc::clone(&record));
        }

        assert_eq!(Rc::strong_count(&record), 501);
        tree.destroy();
        assert_eq!(Rc::strong_count(&record), 1);

        for k in 0..10 {
            tree.insert(k, Rc::clone(&record));
        }

        drop(tree);
        assert_eq!(Rc::strong_count(&record), 1);
    }

    #[test]
    fn test_validate_detects_corruption() {
        let mut tree = RBIndex::new();
        for k in [50, 25, 75, 10] {
            tree.insert(k, ());
        }

        tree.nodes[0].color = Color::Red;
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot(0)));
        tree.nodes[0].color = Color::Black;

        tree.nodes[1].color = Color::Red;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::RedRed { parent: 1, child: 3 })
        );
        tree.nodes[1].color = Color::Black;

        tree.nodes[2].color = Color::Red;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeight { node: 0, left: 1, right: 0 })
        );
        tree.nodes[2].color = Color::Black;

        tree.nodes[3].key = 60;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::OutOfOrder { node: 3, ancestor: 1 })
        );
        tree.nodes[3].key = 10;

        tree.nodes[3].parent = Some(2);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BrokenLink { parent: 1, child: 3 })
        );
        tree.nodes[3].parent = Some(1);

        assert_eq!(tree.validate(), Ok(2));
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_insert_search(vals: Vec<(u8, u32)>) -> TestResult {
        let mut tree = RBIndex::new();
        let mut model: HashMap<u8, Vec<u32>> = HashMap::new();

        for (k, v) in vals.iter().copied() {
            tree.insert(k, v);
            model.entry(k).or_default().push(v);

            if tree.validate().is_err() {
                return TestResult::failed();
            }
        }

        if tree.len() != vals.len() {
            return TestResult::failed();
        }

        for (k, vs) in model.iter() {
            match tree.search(k) {
                Some(v) if vs.contains(v) => (),
                _ => return TestResult::failed(),
            }
        }

        for k in 0..=u8::MAX {
            if tree.contains(&k) != model.contains_key(&k) {
                return TestResult::failed();
            }
        }

        TestResult::passed()
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_byte_keys_sorted(keys: Vec<Vec<u8>>) -> bool {
        let mut tree = RBIndex::new();
        for (i, k) in keys.iter().enumerate() {
            tree.insert(k.clone(), i);
        }

        let mut expected = keys.clone();
        expected.sort();

        let actual: Vec<Vec<u8>> = in_order(&tree).into_iter().map(|kv| kv.0).collect();
        actual == expected && tree.validate().is_ok()
    }

    #[cfg_attr(miri, ignore)]
    #[quickcheck]
    fn quickcheck_height_bound(keys: Vec<u32>) -> bool {
        let mut tree = RBIndex::new();
        for k in keys.iter().copied() {
            tree.insert(k, ());
        }

        let n = keys.len() as u128;
        1u128 << tree.height() <= (n + 1) * (n + 1)
    }
}
