use pocket_core::{Error, RebuildQueue, RootId};

use crate::node::BuiltNode;
use crate::view::View;
use crate::widget::{MountScope, Widget};

/// Owns a view and the widget tree currently mounted for it.
///
/// Each rebuild asks the view for a new tree, mounts it, builds it and only
/// then unmounts the previous tree, so a failed rebuild leaves the last good
/// tree in place.
pub struct ViewRoot {
    id: RootId,
    view: Box<dyn View>,
    scope: MountScope,
    mounted: Option<Widget>,
    rebuilds: u64,
}

impl ViewRoot {
    pub fn new(view: Box<dyn View>, queue: RebuildQueue) -> Self {
        let id = RootId::next();
        Self {
            id,
            view,
            scope: MountScope::new(id, queue),
            mounted: None,
            rebuilds: 0,
        }
    }

    pub fn id(&self) -> RootId {
        self.id
    }

    pub fn view_mut(&mut self) -> &mut dyn View {
        self.view.as_mut()
    }

    pub fn widget(&self) -> Option<&Widget> {
        self.mounted.as_ref()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// True before the first build and whenever a watched observable changed.
    pub fn needs_rebuild(&self) -> bool {
        self.mounted.is_none() || self.scope.queue().contains(self.id)
    }

    pub fn rebuild(&mut self) -> Result<BuiltNode, Error> {
        self.scope.queue().take(self.id);
        let mut widget = self.view.body()?;
        if let Err(err) = widget.mount(&self.scope) {
            widget.unmount();
            return Err(err.into());
        }
        let built = widget.build();
        if let Some(mut previous) = self.mounted.replace(widget) {
            previous.unmount();
        }
        self.rebuilds += 1;
        log::debug!(
            "rebuilt {} ({} nodes, rebuild #{})",
            self.id,
            built.node_count(),
            self.rebuilds
        );
        Ok(built)
    }

    /// Unmounts the current tree. The root can be rebuilt afterwards.
    pub fn teardown(&mut self) {
        if let Some(mut widget) = self.mounted.take() {
            widget.unmount();
        }
        self.scope.queue().take(self.id);
    }
}

impl Drop for ViewRoot {
    fn drop(&mut self) {
        self.teardown();
    }
}
