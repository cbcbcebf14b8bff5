//! Label widget implementation

use pocket_core::{Binding, ConfigurationError};

use super::{read_box, read_common, DEFAULT_FONT_SIZE};
use crate::attrs::{AttrReader, Attrs};
use crate::style::Style;
use crate::widget::{Widget, WidgetKind};

/// Displays a line of text, either literal or bound to an observable.
///
/// Accepts `text`, `font_size`, `color`, `text_align`, `padding`,
/// `corner_radius` and the common geometry attributes.
pub fn Label(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let mut reader = AttrReader::new("Label", attrs)?;
    let mut style = Style::default();
    read_common(&mut reader, &mut style)?;
    read_box(&mut reader, &mut style)?;
    if let Some(color) = reader.color("color")? {
        style.foreground = color;
    }
    let text = reader
        .text("text")?
        .unwrap_or_else(|| Binding::literal(String::new()));
    let font_size = reader.positive("font_size")?.unwrap_or(DEFAULT_FONT_SIZE);
    let text_align = reader.alignment("text_align")?.unwrap_or_default();
    reader.finish()?;
    Ok(Widget::new(
        WidgetKind::Label {
            text,
            font_size,
            text_align,
        },
        style,
        Vec::new(),
    ))
}
