use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use pocket_core::{
    Binding, CallbackError, InvalidStateError, Observable, RebuildQueue, RootId, Subscription,
    Watchable, WidgetId,
};
use pocket_ui_graphics::Color;

use crate::node::{BuiltNode, NodeKind};
use crate::press::PressHandler;
use crate::style::{Alignment, Style};

/// Where a mounted widget reports that it needs rebuilding.
#[derive(Clone, Debug)]
pub struct MountScope {
    root: RootId,
    queue: RebuildQueue,
}

impl MountScope {
    pub fn new(root: RootId, queue: RebuildQueue) -> Self {
        Self { root, queue }
    }

    pub fn root(&self) -> RootId {
        self.root
    }

    pub fn queue(&self) -> &RebuildQueue {
        &self.queue
    }
}

/// Observable lifecycle state of a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Unmounted,
    Clean,
    Dirty,
    Detached,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Unmounted,
    Mounted,
    Detached,
}

pub(crate) enum WidgetKind {
    Label {
        text: Binding<String>,
        font_size: f32,
        text_align: Alignment,
    },
    Button {
        text: Binding<String>,
        font_size: f32,
        on_press: Option<PressHandler>,
        disabled: bool,
        hover: Color,
    },
    VBox {
        spacing: f32,
        alignment: Alignment,
    },
    HBox {
        spacing: f32,
        alignment: Alignment,
    },
    Card,
    Spacer,
}

impl WidgetKind {
    fn name(&self) -> &'static str {
        match self {
            WidgetKind::Label { .. } => "Label",
            WidgetKind::Button { .. } => "Button",
            WidgetKind::VBox { .. } => "VBox",
            WidgetKind::HBox { .. } => "HBox",
            WidgetKind::Card => "Card",
            WidgetKind::Spacer => "Spacer",
        }
    }

    fn sources(&self) -> Option<Rc<dyn Watchable>> {
        match self {
            WidgetKind::Label { text, .. } | WidgetKind::Button { text, .. } => text.source(),
            _ => None,
        }
    }

    fn resolve(&self) -> NodeKind {
        match self {
            WidgetKind::Label {
                text,
                font_size,
                text_align,
            } => NodeKind::Label {
                text: text.resolve(),
                font_size: *font_size,
                text_align: *text_align,
            },
            WidgetKind::Button {
                text,
                font_size,
                on_press,
                disabled,
                hover,
            } => NodeKind::Button {
                text: text.resolve(),
                font_size: *font_size,
                on_press: on_press.clone(),
                disabled: *disabled,
                hover: *hover,
            },
            WidgetKind::VBox { spacing, alignment } => NodeKind::VBox {
                spacing: *spacing,
                alignment: *alignment,
            },
            WidgetKind::HBox { spacing, alignment } => NodeKind::HBox {
                spacing: *spacing,
                alignment: *alignment,
            },
            WidgetKind::Card => NodeKind::Card,
            WidgetKind::Spacer => NodeKind::Spacer,
        }
    }
}

/// A node of a declared UI tree.
///
/// Widgets are created unmounted by the constructors in
/// [`widgets`](crate::widgets), mounted once by their view root, built into
/// a [`BuiltNode`] every frame the root is rebuilt, and unmounted when the
/// next tree replaces them. Unmounting removes every listener the widget
/// registered.
pub struct Widget {
    id: WidgetId,
    kind: WidgetKind,
    style: Style,
    children: Vec<Widget>,
    watched: Vec<Rc<dyn Watchable>>,
    lifecycle: Lifecycle,
    dirty: Rc<Cell<bool>>,
    subscriptions: Vec<Subscription>,
}

impl Widget {
    pub(crate) fn new(kind: WidgetKind, style: Style, children: Vec<Widget>) -> Self {
        Self {
            id: WidgetId::next(),
            kind,
            style,
            children,
            watched: Vec::new(),
            lifecycle: Lifecycle::Unmounted,
            dirty: Rc::new(Cell::new(false)),
            subscriptions: Vec::new(),
        }
    }

    /// Also mark this widget dirty whenever `source` changes, in addition to
    /// the observables bound to its attributes.
    pub fn watching<T: 'static>(mut self, source: &Observable<T>) -> Self {
        self.watched.push(source.watchable());
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn state(&self) -> WidgetState {
        match self.lifecycle {
            Lifecycle::Unmounted => WidgetState::Unmounted,
            Lifecycle::Detached => WidgetState::Detached,
            Lifecycle::Mounted if self.dirty.get() => WidgetState::Dirty,
            Lifecycle::Mounted => WidgetState::Clean,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Live listener registrations held by this widget (not its children).
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.iter().filter(|sub| sub.is_active()).count()
    }

    /// Subscribes to every watched observable and mounts the children.
    pub fn mount(&mut self, scope: &MountScope) -> Result<(), InvalidStateError> {
        self.mount_under(scope, &[])
    }

    /// `ancestors` holds the dirty flags of every enclosing widget up to the
    /// root; a notification marks all of them together with this widget.
    fn mount_under(
        &mut self,
        scope: &MountScope,
        ancestors: &[Rc<Cell<bool>>],
    ) -> Result<(), InvalidStateError> {
        match self.lifecycle {
            Lifecycle::Mounted => return Err(InvalidStateError::AlreadyMounted(self.id)),
            Lifecycle::Detached => return Err(InvalidStateError::Detached(self.id)),
            Lifecycle::Unmounted => {}
        }
        let sources: Vec<Rc<dyn Watchable>> = self
            .kind
            .sources()
            .into_iter()
            .chain(self.watched.iter().cloned())
            .collect();
        let mut path = ancestors.to_vec();
        path.push(Rc::clone(&self.dirty));
        if !sources.is_empty() {
            let path: Rc<[Rc<Cell<bool>>]> = path.iter().cloned().collect();
            for source in sources {
                let listener = self.dirty_listener(scope, Rc::clone(&path));
                self.subscriptions.push(Subscription::new(source, listener));
            }
        }
        self.lifecycle = Lifecycle::Mounted;
        self.dirty.set(false);
        for child in &mut self.children {
            child.mount_under(scope, &path)?;
        }
        Ok(())
    }

    fn dirty_listener(
        &self,
        scope: &MountScope,
        path: Rc<[Rc<Cell<bool>>]>,
    ) -> Rc<dyn Fn() -> Result<(), CallbackError>> {
        let queue = scope.queue.clone();
        let root = scope.root;
        let id = self.id;
        Rc::new(move || {
            log::trace!("widget {id} dirty");
            for dirty in path.iter() {
                dirty.set(true);
            }
            queue.mark(root);
            Ok(())
        })
    }

    /// Resolves bindings and produces the render description of this subtree.
    ///
    /// Callable in any state. A detached widget holds no subscriptions, since
    /// [`unmount`](Self::unmount) cancels them before detaching.
    pub fn build(&self) -> BuiltNode {
        let children = self.children.iter().map(Widget::build).collect();
        self.dirty.set(false);
        BuiltNode {
            id: self.id,
            kind: self.kind.resolve(),
            style: self.style.clone(),
            children,
        }
    }

    /// Removes every listener in this subtree. Idempotent.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Detached {
            return;
        }
        for subscription in &mut self.subscriptions {
            subscription.cancel();
        }
        self.subscriptions.clear();
        for child in &mut self.children {
            child.unmount();
        }
        self.lifecycle = Lifecycle::Detached;
        self.dirty.set(false);
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.kind.name())
            .field("id", &self.id)
            .field("state", &self.state())
            .field("children", &self.children)
            .finish()
    }
}
