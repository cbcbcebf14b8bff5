//! Textual dumps of layout trees for logs and the console backend.

use std::fmt::Write;

use crate::layout::{LayoutBox, LayoutTree};

/// Renders one line per box, indented by depth:
/// `Button [10.0, 20.0, 47.0 x 37.5] "+" *` (`*` marks interactive boxes).
pub fn format_layout_tree(tree: &LayoutTree) -> String {
    let mut out = String::new();
    format_box(&mut out, tree.root(), 0);
    out
}

fn format_box(out: &mut String, node: &LayoutBox, depth: usize) {
    let rect = node.rect;
    let _ = write!(
        out,
        "{:indent$}{} [{:.1}, {:.1}, {:.1} x {:.1}]",
        "",
        node.kind.name(),
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        indent = depth * 2
    );
    if let Some(text) = node.text() {
        let _ = write!(out, " {text:?}");
    }
    if node.is_interactive() {
        out.push_str(" *");
    }
    out.push('\n');
    for child in &node.children {
        format_box(out, child, depth + 1);
    }
}

pub fn log_layout_tree(tree: &LayoutTree) {
    if log::log_enabled!(log::Level::Trace) {
        log::trace!("layout tree:\n{}", format_layout_tree(tree));
    }
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
