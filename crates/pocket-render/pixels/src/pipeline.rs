use pocket_render_common::HitTarget;
use pocket_ui::{measure_text, Alignment, LayoutBox, LayoutTree, NodeKind};
use pocket_ui_graphics::{Point, Rect};

use crate::scene::Scene;

/// How far a disabled button's background is washed towards white.
const DISABLED_LIGHTEN: f32 = 0.45;

/// Flattens `tree` into `scene`. `cursor` selects the hover colour of the
/// button under the pointer.
pub(crate) fn render_layout_tree(tree: &LayoutTree, cursor: Option<Point>, scene: &mut Scene) {
    scene.clear();
    render_layout_node(tree.root(), cursor, scene);
}

fn render_layout_node(layout: &LayoutBox, cursor: Option<Point>, scene: &mut Scene) {
    let style = &layout.style;
    let background = match &layout.kind {
        NodeKind::Button {
            disabled: true, ..
        } => style.background.map(|color| color.lighten(DISABLED_LIGHTEN)),
        NodeKind::Button { hover, .. }
            if layout.is_interactive()
                && cursor.is_some_and(|point| layout.rect.contains(point.x, point.y)) =>
        {
            Some(*hover)
        }
        _ => style.background,
    };
    if let Some(color) = background {
        scene.push_shape(layout.rect, color, style.corner_radius);
    }
    match &layout.kind {
        NodeKind::Label {
            text,
            font_size,
            text_align,
        } => render_text(layout, text, *font_size, *text_align, Alignment::Start, scene),
        NodeKind::Button {
            text, font_size, ..
        } => render_text(
            layout,
            text,
            *font_size,
            Alignment::Center,
            Alignment::Center,
            scene,
        ),
        _ => {}
    }
    if let Some(target) = HitTarget::from_box(layout) {
        scene.push_hit(target);
    }
    for child in &layout.children {
        render_layout_node(child, cursor, scene);
    }
}

fn render_text(
    layout: &LayoutBox,
    text: &str,
    font_size: f32,
    horizontal: Alignment,
    vertical: Alignment,
    scene: &mut Scene,
) {
    if text.is_empty() {
        return;
    }
    let content = layout.content_rect();
    let metrics = measure_text(text, font_size);
    let rect = Rect::new(
        content.x + horizontal.offset(content.width, metrics.width),
        content.y + vertical.offset(content.height, metrics.height),
        metrics.width,
        metrics.height,
    );
    scene.push_text(rect, text.to_string(), layout.style.foreground, font_size);
}
