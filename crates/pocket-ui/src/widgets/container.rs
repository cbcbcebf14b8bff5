//! Linear containers: VBox and HBox.

use pocket_core::ConfigurationError;

use super::{read_box, read_common};
use crate::attrs::{AttrReader, Attrs};
use crate::style::{Alignment, Style};
use crate::widget::{Widget, WidgetKind};

struct Linear {
    spacing: f32,
    alignment: Alignment,
    style: Style,
    children: Vec<Widget>,
}

fn read_linear(widget: &'static str, attrs: Attrs) -> Result<Linear, ConfigurationError> {
    let mut reader = AttrReader::new(widget, attrs)?;
    let mut style = Style::default();
    read_common(&mut reader, &mut style)?;
    read_box(&mut reader, &mut style)?;
    let spacing = reader.length("spacing")?.unwrap_or(0.0);
    let alignment = reader.alignment("alignment")?.unwrap_or_default();
    let children = reader.children("children")?;
    reader.finish()?;
    Ok(Linear {
        spacing,
        alignment,
        style,
        children,
    })
}

/// Stacks `children` top to bottom, `spacing` apart, aligned horizontally
/// by `alignment`.
pub fn VBox(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let linear = read_linear("VBox", attrs)?;
    Ok(Widget::new(
        WidgetKind::VBox {
            spacing: linear.spacing,
            alignment: linear.alignment,
        },
        linear.style,
        linear.children,
    ))
}

/// Places `children` left to right, `spacing` apart, aligned vertically by
/// `alignment`.
pub fn HBox(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let linear = read_linear("HBox", attrs)?;
    Ok(Widget::new(
        WidgetKind::HBox {
            spacing: linear.spacing,
            alignment: linear.alignment,
        },
        linear.style,
        linear.children,
    ))
}
