use super::*;
use crate::{attrs, press, Button, LayoutEngine, Size, VBox};

#[test]
fn formats_one_line_per_box() {
    let root = VBox(attrs! {
        children: vec![
            Button(attrs! { text: "+", on_press: press(|| {}) }).expect("button"),
            Button(attrs! { text: "-" }).expect("button"),
        ],
    })
    .expect("vbox");
    let built = root.build();
    let tree = LayoutEngine::new(Size::new(100.0, 50.0)).layout(&built);
    let text = format_layout_tree(&tree);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "VBox [0.0, 0.0, 100.0 x 50.0]",
            "  Button [0.0, 0.0, 47.0 x 37.5] \"+\" *",
            "  Button [0.0, 37.5, 47.0 x 37.5] \"-\"",
        ]
    );
}
