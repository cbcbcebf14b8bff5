use super::*;
use crate::pipeline::render_layout_tree;
use pocket_ui::{attrs, press, Button, Card, Color, Label, LayoutEngine, Rect, VBox, Widget};

fn tree_of(widget: Widget) -> LayoutTree {
    let built = widget.build();
    LayoutEngine::new(Size::new(200.0, 100.0)).layout(&built)
}

fn overlapping_buttons() -> LayoutTree {
    let first = Button(attrs! { text: "A", width: 100, height: 40, on_press: press(|| {}) })
        .expect("button");
    let second = Button(attrs! { text: "B", width: 100, height: 40, on_press: press(|| {}) })
        .expect("button");
    tree_of(Card(attrs! { padding: 0, children: vec![first, second] }).expect("card"))
}

#[test]
fn scene_hit_test_agrees_with_layout_tree() {
    let tree = overlapping_buttons();
    let mut scene = Scene::new();
    render_layout_tree(&tree, None, &mut scene);
    assert_eq!(scene.hits().len(), 2);
    for (x, y) in [(50.0, 20.0), (99.0, 39.0), (150.0, 50.0), (0.0, 0.0)] {
        let from_scene = scene.hit_test(x, y).map(|target| target.widget_id);
        let from_tree = tree.hit_test(x, y).map(|node| node.node_id);
        assert_eq!(from_scene, from_tree, "at ({x}, {y})");
    }
    let top = tree.hit_test(50.0, 20.0).expect("hit");
    assert_eq!(top.text(), Some("B"));
}

#[test]
fn hovered_button_uses_hover_colour() {
    let button = Button(attrs! {
        text: "go",
        width: 80,
        height: 30,
        hover_color: "#112233",
        on_press: press(|| {}),
    })
    .expect("button");
    let tree = tree_of(VBox(attrs! { children: vec![button] }).expect("vbox"));
    let mut scene = Scene::new();

    render_layout_tree(&tree, Some(Point::new(10.0, 10.0)), &mut scene);
    assert_eq!(scene.shapes()[0].color, Color::from_hex("#112233").unwrap());

    render_layout_tree(&tree, Some(Point::new(150.0, 80.0)), &mut scene);
    assert_eq!(scene.shapes()[0].color, Color::from_hex("#007AFF").unwrap());
}

#[test]
fn disabled_button_is_washed_out_and_not_hittable() {
    let button = Button(attrs! { text: "off", disabled: true, on_press: press(|| {}) })
        .expect("button");
    let tree = tree_of(VBox(attrs! { children: vec![button] }).expect("vbox"));
    let mut scene = Scene::new();
    render_layout_tree(&tree, Some(Point::new(5.0, 5.0)), &mut scene);
    let base = Color::from_hex("#007AFF").unwrap();
    assert_ne!(scene.shapes()[0].color, base);
    assert!(scene.shapes()[0].color.0 > base.0);
    assert!(scene.hit_test(5.0, 5.0).is_none());
}

#[test]
fn button_text_is_centred() {
    let button = Button(attrs! { text: "ok", width: 100, height: 50 }).expect("button");
    let tree = tree_of(VBox(attrs! { children: vec![button] }).expect("vbox"));
    let mut scene = Scene::new();
    render_layout_tree(&tree, None, &mut scene);
    // "ok" at 14px is 14 x 17.5 inside the 60 x 30 content box at (20, 10).
    assert_eq!(scene.texts()[0].rect, Rect::new(43.0, 16.25, 14.0, 17.5));
}

#[test]
fn later_boxes_paint_above_earlier_text() {
    let label = Label(attrs! { text: "under" }).expect("label");
    let card = Card(attrs! { width: 50, height: 50 }).expect("card");
    let root = pocket_ui::Card(attrs! { padding: 0, children: vec![label, card] }).expect("card");
    let tree = tree_of(root);
    let mut scene = Scene::new();
    render_layout_tree(&tree, None, &mut scene);
    let text_z = scene.texts()[0].z_index;
    let covering = scene.shapes().last().expect("card shape");
    assert!(covering.z_index > text_z);
}
