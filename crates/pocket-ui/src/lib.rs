//! Widgets, layout and view roots for Pocket UI.
//!
//! Application code declares a tree with the constructors in [`widgets`],
//! binding text to [`Observable`]s. A [`ViewRoot`] mounts that tree, which
//! subscribes each widget to the observables it reads; a change marks the
//! root in the shared [`RebuildQueue`] and the next frame rebuilds it.

pub mod attrs;
mod debug;
pub mod layout;
mod node;
mod press;
mod root;
mod style;
mod view;
mod widget;
pub mod widgets;

pub use attrs::{AttrValue, Attrs};
pub use debug::{format_layout_tree, log_layout_tree};
pub use layout::{
    measure_text, LayoutBox, LayoutEngine, LayoutTree, CHAR_WIDTH_FACTOR, LINE_HEIGHT_FACTOR,
};
pub use node::{BuiltNode, NodeKind};
pub use press::{press, PressHandler};
pub use root::ViewRoot;
pub use style::{Alignment, Style};
pub use view::View;
pub use widget::{MountScope, Widget, WidgetState};
pub use widgets::{Button, Card, HBox, Label, Spacer, VBox};

pub use pocket_core::{Binding, Observable, RebuildQueue, StopHandle};
pub use pocket_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod widget_tests;

#[cfg(test)]
#[path = "tests/attrs_tests.rs"]
mod attrs_tests;

#[cfg(test)]
#[path = "tests/root_tests.rs"]
mod root_tests;
