use pocket_core::ConfigurationError;
use pocket_ui_graphics::{Color, EdgeInsets};

use super::{read_box, read_common};
use crate::attrs::{AttrReader, Attrs};
use crate::style::Style;
use crate::widget::{Widget, WidgetKind};

/// A rounded white panel that overlays its children at its content origin,
/// later children on top.
pub fn Card(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let mut reader = AttrReader::new("Card", attrs)?;
    let mut style = Style {
        padding: EdgeInsets::uniform(16.0),
        background: Some(Color::WHITE),
        corner_radius: 12.0,
        ..Style::default()
    };
    read_common(&mut reader, &mut style)?;
    read_box(&mut reader, &mut style)?;
    let children = reader.children("children")?;
    reader.finish()?;
    Ok(Widget::new(WidgetKind::Card, style, children))
}
