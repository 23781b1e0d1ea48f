//! Comparison structures for the benchmark.
use super::service::Service;

/// Find the first service in `services` with the given name.
pub fn linear_search<'a>(services: &'a [Service], key: &[u8]) -> Option<&'a Service> {
    services.iter().find(|s| s.service_name.as_bytes() == key)
}

struct BinaryNode<'a> {
    service: &'a Service,
    left: Option<Box<BinaryNode<'a>>>,
    right: Option<Box<BinaryNode<'a>>>,
}

/// An unbalanced binary search tree over borrowed services, keyed by name.
///
/// Equal names descend right, like [`service_index::RBIndex`].
#[derive(Default)]
pub struct BinaryTree<'a> {
    root: Option<Box<BinaryNode<'a>>>,
    len: usize,
}

impl<'a> BinaryTree<'a> {
    pub fn new() -> BinaryTree<'a> {
        BinaryTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, service: &'a Service) {
        let key = service.service_name.as_bytes();
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            if key < node.service.service_name.as_bytes() {
                slot = &mut node.left;
            } else {
                slot = &mut node.right;
            }
        }

        *slot = Some(Box::new(BinaryNode {
            service,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    pub fn search(&self, key: &[u8]) -> Option<&'a Service> {
        let mut cur = self.root.as_deref();

        while let Some(node) = cur {
            let name = node.service.service_name.as_bytes();
            if key == name {
                return Some(node.service);
            }

            cur = if key < name {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        None
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&BinaryNode<'a>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        max
    }
}

impl<'a> Drop for BinaryTree<'a> {
    fn drop(&mut self) {
        // Sorted input degenerates into a list; unlink nodes one at a time so
        // dropping never recurses.
        let mut stack: Vec<Box<BinaryNode<'a>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
