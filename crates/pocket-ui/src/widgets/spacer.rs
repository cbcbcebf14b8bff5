use pocket_core::ConfigurationError;

use super::read_common;
use crate::attrs::{AttrReader, Attrs};
use crate::style::Style;
use crate::widget::{Widget, WidgetKind};

/// Empty space of an explicit `width` and `height`.
pub fn Spacer(attrs: Attrs) -> Result<Widget, ConfigurationError> {
    let mut reader = AttrReader::new("Spacer", attrs)?;
    let mut style = Style::default();
    read_common(&mut reader, &mut style)?;
    reader.finish()?;
    Ok(Widget::new(WidgetKind::Spacer, style, Vec::new()))
}
