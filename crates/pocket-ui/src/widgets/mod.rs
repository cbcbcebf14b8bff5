//! Built-in widget constructors.
//!
//! Each constructor takes named attributes and validates them up front, so a
//! misspelt or misplaced attribute fails where the tree is declared.

#![allow(non_snake_case)]

mod button;
mod card;
mod container;
mod label;
mod spacer;

pub use button::Button;
pub use card::Card;
pub use container::{HBox, VBox};
pub use label::Label;
pub use spacer::Spacer;

use pocket_core::ConfigurationError;
use pocket_ui_graphics::Point;

use crate::attrs::AttrReader;
use crate::style::Style;

pub(crate) const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Reads the attributes every widget kind accepts.
fn read_common(reader: &mut AttrReader, style: &mut Style) -> Result<(), ConfigurationError> {
    let x = reader.number("x")?.unwrap_or(0.0);
    let y = reader.number("y")?.unwrap_or(0.0);
    style.offset = Point::new(x, y);
    style.width = reader.length("width")?;
    style.height = reader.length("height")?;
    if let Some(margin) = reader.insets("margin")? {
        style.margin = margin;
    }
    if let Some(background) = reader.color("background_color")? {
        style.background = Some(background);
    }
    Ok(())
}

/// Padding and corner radius, accepted by every widget that draws a box.
fn read_box(reader: &mut AttrReader, style: &mut Style) -> Result<(), ConfigurationError> {
    if let Some(padding) = reader.insets("padding")? {
        style.padding = padding;
    }
    if let Some(radius) = reader.length("corner_radius")? {
        style.corner_radius = radius;
    }
    Ok(())
}
