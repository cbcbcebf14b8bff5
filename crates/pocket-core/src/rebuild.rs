use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexSet;

use crate::ids::RootId;

/// Roots that need a rebuild before the next frame.
///
/// Listeners add their root synchronously during notification; the app shell
/// consumes the entry once per loop iteration. Insertion order is kept so
/// rebuilds happen in a deterministic order.
#[derive(Clone, Default)]
pub struct RebuildQueue {
    roots: Rc<RefCell<IndexSet<RootId>>>,
}

impl RebuildQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self, root: RootId) {
        if self.roots.borrow_mut().insert(root) {
            log::trace!("{root} queued for rebuild");
        }
    }

    pub fn contains(&self, root: RootId) -> bool {
        self.roots.borrow().contains(&root)
    }

    /// Removes `root` from the queue, returning whether it was queued.
    pub fn take(&self, root: RootId) -> bool {
        self.roots.borrow_mut().shift_remove(&root)
    }

    pub fn drain(&self) -> Vec<RootId> {
        self.roots.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.roots.borrow().len()
    }
}

impl std::fmt::Debug for RebuildQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.roots.borrow().iter()).finish()
    }
}
