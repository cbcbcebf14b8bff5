//! Measure and place pass turning a [`BuiltNode`] tree into screen geometry.

use pocket_core::WidgetId;
use pocket_ui_graphics::{EdgeInsets, Point, Rect, Size};

use crate::node::{BuiltNode, NodeKind};
use crate::press::PressHandler;
use crate::style::{Alignment, Style};

/// Width of one character as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.5;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.25;

/// Font-independent text metrics; each line is as wide as its character
/// count allows.
pub fn measure_text(text: &str, font_size: f32) -> Size {
    let mut lines = 0usize;
    let mut widest = 0usize;
    for line in text.split('\n') {
        lines += 1;
        widest = widest.max(line.chars().count());
    }
    Size::new(
        widest as f32 * font_size * CHAR_WIDTH_FACTOR,
        lines as f32 * font_size * LINE_HEIGHT_FACTOR,
    )
}

/// Result of placing a node: its border box in surface coordinates.
#[derive(Clone, Debug)]
pub struct LayoutBox {
    pub node_id: WidgetId,
    pub rect: Rect,
    pub kind: NodeKind,
    pub style: Style,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(self.style.padding)
    }

    pub fn text(&self) -> Option<&str> {
        self.kind.text()
    }

    pub fn press_handler(&self) -> Option<&PressHandler> {
        self.kind.press_handler()
    }

    pub fn is_interactive(&self) -> bool {
        self.kind.is_interactive()
    }

    fn visit<'a>(&'a self, out: &mut Vec<&'a LayoutBox>) {
        out.push(self);
        for child in &self.children {
            child.visit(out);
        }
    }

    fn hit(&self, x: f32, y: f32) -> Option<&LayoutBox> {
        for child in self.children.iter().rev() {
            if let Some(hit) = child.hit(x, y) {
                return Some(hit);
            }
        }
        if self.is_interactive() && self.rect.contains(x, y) {
            Some(self)
        } else {
            None
        }
    }
}

/// Widget ids are fresh on every build, so equality looks at geometry and
/// content only.
impl PartialEq for LayoutBox {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect
            && self.kind == other.kind
            && self.style == other.style
            && self.children == other.children
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTree {
    root: LayoutBox,
    viewport: Size,
}

impl LayoutTree {
    pub fn new(root: LayoutBox, viewport: Size) -> Self {
        Self { root, viewport }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn into_root(self) -> LayoutBox {
        self.root
    }

    /// Every box in depth-first pre-order (parents before children, earlier
    /// siblings first), i.e. paint order.
    pub fn boxes(&self) -> Vec<&LayoutBox> {
        let mut out = Vec::new();
        self.root.visit(&mut out);
        out
    }

    pub fn node_count(&self) -> usize {
        self.boxes().len()
    }

    /// The deepest, topmost interactive box containing `(x, y)`.
    ///
    /// Children are tried before their parent and later siblings before
    /// earlier ones. Labels and containers never match.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&LayoutBox> {
        self.root.hit(x, y)
    }

    pub fn find(&self, predicate: impl Fn(&LayoutBox) -> bool) -> Option<&LayoutBox> {
        self.boxes().into_iter().find(|node| predicate(node))
    }

    pub fn find_by_text(&self, text: &str) -> Option<&LayoutBox> {
        self.find(|node| node.text() == Some(text))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.boxes().into_iter().filter_map(LayoutBox::text).collect()
    }
}

struct Measured<'a> {
    node: &'a BuiltNode,
    size: Size,
    children: Vec<Measured<'a>>,
}

impl Measured<'_> {
    fn outer(&self) -> Size {
        let margin = self.node.style.margin;
        Size::new(
            self.size.width + margin.horizontal_sum(),
            self.size.height + margin.vertical_sum(),
        )
    }
}

/// Lays out a built tree against a viewport.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine {
    viewport: Size,
}

impl LayoutEngine {
    pub fn new(viewport: Size) -> Self {
        Self { viewport }
    }

    /// The root fills the viewport (less its margin) unless it declares an
    /// explicit size.
    pub fn layout(&self, root: &BuiltNode) -> LayoutTree {
        let measured = measure(root);
        let style = &root.style;
        let size = Size::new(
            style.width.unwrap_or_else(|| {
                (self.viewport.width - style.margin.horizontal_sum()).max(measured.size.width)
            }),
            style.height.unwrap_or_else(|| {
                (self.viewport.height - style.margin.vertical_sum()).max(measured.size.height)
            }),
        );
        let origin = Point::new(style.margin.left, style.margin.top);
        LayoutTree::new(place(&measured, origin, size), self.viewport)
    }
}

fn measure(node: &BuiltNode) -> Measured<'_> {
    let children: Vec<Measured<'_>> = node.children.iter().map(measure).collect();
    let content = match &node.kind {
        NodeKind::Label {
            text, font_size, ..
        }
        | NodeKind::Button {
            text, font_size, ..
        } => measure_text(text, *font_size),
        NodeKind::VBox { spacing, .. } => {
            let (width, height) = children.iter().map(Measured::outer).fold(
                (0.0f32, 0.0f32),
                |(width, height), child| (width.max(child.width), height + child.height),
            );
            Size::new(width, height + gaps(children.len(), *spacing))
        }
        NodeKind::HBox { spacing, .. } => {
            let (width, height) = children.iter().map(Measured::outer).fold(
                (0.0f32, 0.0f32),
                |(width, height), child| (width + child.width, height.max(child.height)),
            );
            Size::new(width + gaps(children.len(), *spacing), height)
        }
        NodeKind::Card => children
            .iter()
            .map(Measured::outer)
            .fold(Size::ZERO, |acc, child| {
                Size::new(acc.width.max(child.width), acc.height.max(child.height))
            }),
        NodeKind::Spacer => Size::ZERO,
    };
    let padding = node.style.padding;
    let size = Size::new(
        node.style
            .width
            .unwrap_or(content.width + padding.horizontal_sum()),
        node.style
            .height
            .unwrap_or(content.height + padding.vertical_sum()),
    );
    Measured {
        node,
        size,
        children,
    }
}

fn gaps(count: usize, spacing: f32) -> f32 {
    count.saturating_sub(1) as f32 * spacing
}

/// Places `measured` with its border box at `origin` (before its own x/y
/// offset) and the given size.
fn place(measured: &Measured<'_>, origin: Point, size: Size) -> LayoutBox {
    let node = measured.node;
    let offset = node.style.offset;
    let rect = Rect::from_origin_size(origin.offset(offset.x, offset.y), size);
    let content = rect.inset(node.style.padding);
    let children = match &node.kind {
        NodeKind::VBox { spacing, alignment } => {
            let mut cursor = content.y;
            measured
                .children
                .iter()
                .map(|child| {
                    let margin = child.node.style.margin;
                    let size = cross_size(child, *alignment, content.width, margin, Axis::Vertical);
                    let x = content.x
                        + margin.left
                        + alignment.offset(content.width, size.width + margin.horizontal_sum());
                    let placed = place(child, Point::new(x, cursor + margin.top), size);
                    cursor += size.height + margin.vertical_sum() + spacing;
                    placed
                })
                .collect()
        }
        NodeKind::HBox { spacing, alignment } => {
            let mut cursor = content.x;
            measured
                .children
                .iter()
                .map(|child| {
                    let margin = child.node.style.margin;
                    let size =
                        cross_size(child, *alignment, content.height, margin, Axis::Horizontal);
                    let y = content.y
                        + margin.top
                        + alignment.offset(content.height, size.height + margin.vertical_sum());
                    let placed = place(child, Point::new(cursor + margin.left, y), size);
                    cursor += size.width + margin.horizontal_sum() + spacing;
                    placed
                })
                .collect()
        }
        NodeKind::Card => measured
            .children
            .iter()
            .map(|child| {
                let margin = child.node.style.margin;
                let origin = Point::new(content.x + margin.left, content.y + margin.top);
                place(child, origin, child.size)
            })
            .collect(),
        NodeKind::Label { .. } | NodeKind::Button { .. } | NodeKind::Spacer => Vec::new(),
    };
    LayoutBox {
        node_id: node.id,
        rect,
        kind: node.kind.clone(),
        style: node.style.clone(),
        children,
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

/// A stretched child without an explicit cross size fills the container's
/// content box along the cross axis.
fn cross_size(
    child: &Measured<'_>,
    alignment: Alignment,
    available: f32,
    margin: EdgeInsets,
    axis: Axis,
) -> Size {
    if alignment != Alignment::Stretch {
        return child.size;
    }
    let style = &child.node.style;
    match axis {
        Axis::Vertical if style.width.is_none() => Size::new(
            (available - margin.horizontal_sum()).max(0.0),
            child.size.height,
        ),
        Axis::Horizontal if style.height.is_none() => Size::new(
            child.size.width,
            (available - margin.vertical_sum()).max(0.0),
        ),
        _ => child.size,
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
