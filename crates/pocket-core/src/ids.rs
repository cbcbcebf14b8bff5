use std::cell::Cell;
use std::fmt;

thread_local! {
    static NEXT_WIDGET_ID: Cell<u64> = const { Cell::new(1) };
    static NEXT_ROOT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Identity of a constructed widget. Unique per thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn next() -> Self {
        NEXT_WIDGET_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            WidgetId(id)
        })
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a rebuildable root (one per installed view).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RootId(u32);

impl RootId {
    pub fn next() -> Self {
        NEXT_ROOT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            RootId(id)
        })
    }
}

impl fmt::Display for RootId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root{}", self.0)
    }
}
