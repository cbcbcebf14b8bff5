use super::*;
use crate::widgets::{Button, Card, HBox, Label, Spacer, VBox};
use crate::{attrs, press, Widget};

fn layout(widget: Widget, width: f32, height: f32) -> LayoutTree {
    let built = widget.build();
    LayoutEngine::new(Size::new(width, height)).layout(&built)
}

fn small_label(text: &str) -> Widget {
    Label(attrs! { text: text, font_size: 10 }).expect("label")
}

#[test]
fn text_metrics_scale_with_font_size() {
    assert_eq!(measure_text("Count: 0", 24.0), Size::new(96.0, 30.0));
    assert_eq!(measure_text("", 14.0), Size::new(0.0, 17.5));
    assert_eq!(measure_text("ab\nabcd", 10.0), Size::new(20.0, 25.0));
}

#[test]
fn button_uses_default_padding() {
    let button = Button(attrs! { text: "+" }).expect("button");
    let root = VBox(attrs! { children: vec![button] }).expect("vbox");
    let tree = layout(root, 400.0, 300.0);
    let rect = tree.root().children[0].rect;
    assert_eq!(rect, Rect::new(0.0, 0.0, 47.0, 37.5));
}

#[test]
fn root_fills_viewport() {
    let tree = layout(VBox(attrs! {}).expect("vbox"), 400.0, 300.0);
    assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 400.0, 300.0));
    assert_eq!(tree.viewport(), Size::new(400.0, 300.0));
}

#[test]
fn vbox_stacks_children_with_spacing_inside_padding() {
    let root = VBox(attrs! {
        padding: 10,
        spacing: 5,
        children: vec![small_label("ab"), small_label("abcd")],
    })
    .expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    let children = &tree.root().children;
    assert_eq!(children[0].rect, Rect::new(10.0, 10.0, 10.0, 12.5));
    assert_eq!(children[1].rect, Rect::new(10.0, 27.5, 20.0, 12.5));
}

#[test]
fn hbox_places_children_left_to_right() {
    let root = HBox(attrs! {
        spacing: 4,
        children: vec![small_label("ab"), small_label("abcd")],
    })
    .expect("hbox");
    let tree = layout(root, 200.0, 100.0);
    let children = &tree.root().children;
    assert_eq!(children[0].rect, Rect::new(0.0, 0.0, 10.0, 12.5));
    assert_eq!(children[1].rect, Rect::new(14.0, 0.0, 20.0, 12.5));
}

#[test]
fn cross_axis_alignment() {
    let centered = VBox(attrs! {
        padding: 10,
        alignment: "center",
        children: vec![small_label("ab")],
    })
    .expect("vbox");
    let tree = layout(centered, 200.0, 100.0);
    assert_eq!(tree.root().children[0].rect.x, 95.0);

    let end = HBox(attrs! { alignment: "end", children: vec![small_label("ab")] }).expect("hbox");
    let tree = layout(end, 200.0, 100.0);
    assert_eq!(tree.root().children[0].rect.y, 87.5);

    let stretched = VBox(attrs! {
        padding: 10,
        alignment: "stretch",
        children: vec![small_label("ab")],
    })
    .expect("vbox");
    let tree = layout(stretched, 200.0, 100.0);
    assert_eq!(tree.root().children[0].rect, Rect::new(10.0, 10.0, 180.0, 12.5));
}

#[test]
fn margin_and_offset_move_the_widget() {
    let shifted = Label(attrs! { text: "ab", font_size: 10, margin: 5, x: 3, y: -2 }).expect("label");
    let root = VBox(attrs! { children: vec![shifted, small_label("cd")] }).expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    let children = &tree.root().children;
    assert_eq!(children[0].rect, Rect::new(8.0, 3.0, 10.0, 12.5));
    // The margin enlarges the slot; the offset does not.
    assert_eq!(children[1].rect.y, 22.5);
}

#[test]
fn explicit_size_overrides_measurement() {
    let spacer = Spacer(attrs! { width: 30, height: 40 }).expect("spacer");
    let label = Label(attrs! { text: "long text", width: 12 }).expect("label");
    let root = VBox(attrs! { children: vec![spacer, label] }).expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    let children = &tree.root().children;
    assert_eq!(children[0].rect.size(), Size::new(30.0, 40.0));
    assert_eq!(children[1].rect.width, 12.0);
}

#[test]
fn card_overlays_children_at_content_origin() {
    let card = Card(attrs! { children: vec![small_label("ab"), small_label("abcd")] }).expect("card");
    let root = VBox(attrs! { children: vec![card] }).expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    let card = &tree.root().children[0];
    assert_eq!(card.rect, Rect::new(0.0, 0.0, 52.0, 44.5));
    assert_eq!(card.children[0].rect.origin(), Point::new(16.0, 16.0));
    assert_eq!(card.children[1].rect.origin(), Point::new(16.0, 16.0));
}

#[test]
fn later_sibling_wins_overlapping_hit() {
    let first = Button(attrs! { text: "A", width: 100, height: 40, on_press: press(|| {}) })
        .expect("button");
    let second = Button(attrs! { text: "B", width: 100, height: 40, on_press: press(|| {}) })
        .expect("button");
    let root = Card(attrs! { padding: 0, children: vec![first, second] }).expect("card");
    let tree = layout(root, 200.0, 100.0);
    let hit = tree.hit_test(50.0, 20.0).expect("hit");
    assert_eq!(hit.text(), Some("B"));
}

#[test]
fn only_enabled_buttons_with_handlers_are_hit() {
    let label = Label(attrs! { text: "label", width: 50, height: 20 }).expect("label");
    let inert = Button(attrs! { text: "inert", width: 50, height: 20 }).expect("button");
    let disabled = Button(attrs! {
        text: "off",
        width: 50,
        height: 20,
        disabled: true,
        on_press: press(|| {}),
    })
    .expect("button");
    let root = VBox(attrs! { children: vec![label, inert, disabled] }).expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    for y in [10.0, 30.0, 50.0] {
        assert!(tree.hit_test(10.0, y).is_none(), "nothing interactive at y={y}");
    }
}

#[test]
fn hit_bounds_are_half_open() {
    let button = Button(attrs! { text: "go", width: 40, height: 20, on_press: press(|| {}) })
        .expect("button");
    let root = VBox(attrs! { padding: 10, children: vec![button] }).expect("vbox");
    let tree = layout(root, 200.0, 100.0);
    assert!(tree.hit_test(10.0, 10.0).is_some());
    assert!(tree.hit_test(49.9, 29.9).is_some());
    assert!(tree.hit_test(50.0, 15.0).is_none());
    assert!(tree.hit_test(15.0, 30.0).is_none());
    assert!(tree.hit_test(9.9, 15.0).is_none());
}

#[test]
fn deepest_interactive_box_is_returned() {
    let inner = Button(attrs! { text: "inner", on_press: press(|| {}) }).expect("button");
    let card = Card(attrs! { children: vec![inner] }).expect("card");
    let root = VBox(attrs! { padding: 8, children: vec![card] }).expect("vbox");
    let tree = layout(root, 300.0, 200.0);
    let hit = tree.hit_test(30.0, 30.0).expect("hit");
    assert_eq!(hit.text(), Some("inner"));
    assert!(tree.hit_test(9.0, 9.0).is_none());
}

#[test]
fn equal_builds_produce_equal_trees() {
    let make = || {
        VBox(attrs! {
            spacing: 10,
            children: vec![
                Label(attrs! { text: "Count: 0", font_size: 24 }).expect("label"),
                Button(attrs! { text: "+", on_press: press(|| {}) }).expect("button"),
            ],
        })
        .expect("vbox")
    };
    let first = layout(make(), 400.0, 300.0);
    let second = layout(make(), 400.0, 300.0);
    assert_ne!(first.root().node_id, second.root().node_id);
    assert_eq!(first, second);
    assert_eq!(first.texts(), vec!["Count: 0", "+"]);
    assert_eq!(first.node_count(), 3);
}

#[test]
fn repeated_hit_tests_return_the_same_box() {
    let first = Button(attrs! { text: "A", width: 100, height: 40, on_press: press(|| {}) })
        .expect("button");
    let second = Button(attrs! { text: "B", width: 60, height: 40, on_press: press(|| {}) })
        .expect("button");
    let root = Card(attrs! { padding: 0, children: vec![first, second] }).expect("card");
    let tree = layout(root, 200.0, 100.0);
    for (x, expected) in [(30.0, Some("B")), (80.0, Some("A")), (150.0, None)] {
        let hits: Vec<_> = (0..3)
            .map(|_| tree.hit_test(x, 20.0).map(|node| node.node_id))
            .collect();
        assert!(hits.windows(2).all(|pair| pair[0] == pair[1]), "x={x}");
        let text = tree.hit_test(x, 20.0).and_then(LayoutBox::text);
        assert_eq!(text, expected, "x={x}");
    }
}
