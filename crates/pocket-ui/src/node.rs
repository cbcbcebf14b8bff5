use pocket_core::WidgetId;
use pocket_ui_graphics::Color;

use crate::press::PressHandler;
use crate::style::{Alignment, Style};

/// What a widget resolved to at build time.
#[derive(Clone, Debug)]
pub enum NodeKind {
    Label {
        text: String,
        font_size: f32,
        text_align: Alignment,
    },
    Button {
        text: String,
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

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Label { .. } => "Label",
            NodeKind::Button { .. } => "Button",
            NodeKind::VBox { .. } => "VBox",
            NodeKind::HBox { .. } => "HBox",
            NodeKind::Card => "Card",
            NodeKind::Spacer => "Spacer",
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            NodeKind::Label { text, .. } | NodeKind::Button { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn font_size(&self) -> Option<f32> {
        match self {
            NodeKind::Label { font_size, .. } | NodeKind::Button { font_size, .. } => {
                Some(*font_size)
            }
            _ => None,
        }
    }

    /// Only enabled buttons with a handler receive presses.
    pub fn press_handler(&self) -> Option<&PressHandler> {
        match self {
            NodeKind::Button {
                on_press: Some(handler),
                disabled: false,
                ..
            } => Some(handler),
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.press_handler().is_some()
    }
}

/// Handlers compare by presence, not identity, so two builds of the same
/// view compare equal.
impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                NodeKind::Label {
                    text: a,
                    font_size: fa,
                    text_align: ta,
                },
                NodeKind::Label {
                    text: b,
                    font_size: fb,
                    text_align: tb,
                },
            ) => a == b && fa == fb && ta == tb,
            (
                NodeKind::Button {
                    text: a,
                    font_size: fa,
                    on_press: pa,
                    disabled: da,
                    hover: ha,
                },
                NodeKind::Button {
                    text: b,
                    font_size: fb,
                    on_press: pb,
                    disabled: db,
                    hover: hb,
                },
            ) => a == b && fa == fb && pa.is_some() == pb.is_some() && da == db && ha == hb,
            (
                NodeKind::VBox {
                    spacing: sa,
                    alignment: aa,
                },
                NodeKind::VBox {
                    spacing: sb,
                    alignment: ab,
                },
            )
            | (
                NodeKind::HBox {
                    spacing: sa,
                    alignment: aa,
                },
                NodeKind::HBox {
                    spacing: sb,
                    alignment: ab,
                },
            ) => sa == sb && aa == ab,
            (NodeKind::Card, NodeKind::Card) | (NodeKind::Spacer, NodeKind::Spacer) => true,
            _ => false,
        }
    }
}

/// Output of [`Widget::build`](crate::Widget::build): a plain description of
/// the tree with every binding resolved.
#[derive(Clone, Debug)]
pub struct BuiltNode {
    pub id: WidgetId,
    pub kind: NodeKind,
    pub style: Style,
    pub children: Vec<BuiltNode>,
}

impl BuiltNode {
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(BuiltNode::node_count).sum::<usize>()
    }
}
