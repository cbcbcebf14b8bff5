//! Button widget implementation

use pocket_core::{Binding, ConfigurationError};
use pocket_ui_graphics::{Color, EdgeInsets};

use super::{read_box, read_common, DEFAULT_FONT_SIZE};
use crate::attrs::{AttrReader, Attrs};
use crate::style::Style;
use crate::widget::{Widget, WidgetKind};

const BACKGROUND: Color = Color(0.0, 122.0 / 255.0, 1.0, 1.0);
const HOVER: Color = Color(0.0, 81.0 / 255.0, 213.0 / 255.0, 1.0);
const CORNER_RADIUS: f32 = 8.0;

/// A pressable text button.
///
/// Defaults: white text on `#007AFF`, `#0051D5` under the pointer, font size
/// 14 and padding of 10 vertical by 20 horizontal. A button is interactive
/// only while it has an `on_press` handler and is not `disabled`.
pub fn Button(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let mut reader = AttrReader::new("Button", attrs)?;
    let mut style = Style {
        padding: EdgeInsets::symmetric(10.0, 20.0),
        background: Some(BACKGROUND),
        foreground: Color::WHITE,
        corner_radius: CORNER_RADIUS,
        ..Style::default()
    };
    read_common(&mut reader, &mut style)?;
    read_box(&mut reader, &mut style)?;
    if let Some(color) = reader.color("color")? {
        style.foreground = color;
    }
    let hover = reader.color("hover_color")?.unwrap_or(HOVER);
    let text = reader
        .text("text")?
        .unwrap_or_else(|| Binding::literal("Button".to_string()));
    let font_size = reader.positive("font_size")?.unwrap_or(DEFAULT_FONT_SIZE);
    let on_press = reader.press("on_press")?;
    let disabled = reader.flag("disabled")?.unwrap_or(false);
    reader.finish()?;
    Ok(Widget::new(
        WidgetKind::Button {
            text,
            font_size,
            on_press,
            disabled,
            hover,
        },
        style,
        Vec::new(),
    ))
}
