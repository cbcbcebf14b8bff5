//! Named widget attributes and their validation.

use std::fmt;

use indexmap::IndexMap;
use pocket_core::{Binding, ConfigurationError, Observable};
use pocket_ui_graphics::{Color, EdgeInsets};

use crate::press::PressHandler;
use crate::style::Alignment;
use crate::widget::Widget;

/// Every attribute name understood by at least one widget kind.
///
/// A name in this list that a widget does not accept is reported as
/// unsupported; any other name is unknown.
pub const KNOWN_ATTRIBUTES: &[&str] = &[
    "text",
    "x",
    "y",
    "width",
    "height",
    "padding",
    "margin",
    "spacing",
    "font_size",
    "corner_radius",
    "color",
    "background_color",
    "hover_color",
    "alignment",
    "text_align",
    "children",
    "on_press",
    "disabled",
];

/// A single attribute value before it is checked against the widget kind.
pub enum AttrValue {
    Str(String),
    Number(f32),
    Bool(bool),
    Text(Binding<String>),
    Insets(EdgeInsets),
    Color(Color),
    Align(Alignment),
    Children(Vec<Widget>),
    Press(PressHandler),
}

impl AttrValue {
    fn describe(&self) -> &'static str {
        match self {
            AttrValue::Str(_) => "string",
            AttrValue::Number(_) => "number",
            AttrValue::Bool(_) => "bool",
            AttrValue::Text(_) => "text binding",
            AttrValue::Insets(_) => "insets",
            AttrValue::Color(_) => "colour",
            AttrValue::Align(_) => "alignment",
            AttrValue::Children(_) => "children",
            AttrValue::Press(_) => "press handler",
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(value) => f.debug_tuple("Str").field(value).finish(),
            AttrValue::Number(value) => f.debug_tuple("Number").field(value).finish(),
            AttrValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            AttrValue::Text(value) => f.debug_tuple("Text").field(value).finish(),
            AttrValue::Insets(value) => f.debug_tuple("Insets").field(value).finish(),
            AttrValue::Color(value) => f.debug_tuple("Color").field(value).finish(),
            AttrValue::Align(value) => f.debug_tuple("Align").field(value).finish(),
            AttrValue::Children(value) => f.debug_tuple("Children").field(&value.len()).finish(),
            AttrValue::Press(_) => f.write_str("Press(..)"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

macro_rules! number_attr {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Number(value as f32)
                }
            }
        )*
    };
}

number_attr!(f32, f64, i32, i64, u32, u64, usize);

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// `(vertical, horizontal)` insets.
impl From<(f32, f32)> for AttrValue {
    fn from((vertical, horizontal): (f32, f32)) -> Self {
        AttrValue::Insets(EdgeInsets::symmetric(vertical, horizontal))
    }
}

impl From<(i32, i32)> for AttrValue {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        AttrValue::Insets(EdgeInsets::symmetric(vertical as f32, horizontal as f32))
    }
}

impl From<EdgeInsets> for AttrValue {
    fn from(value: EdgeInsets) -> Self {
        AttrValue::Insets(value)
    }
}

impl From<Color> for AttrValue {
    fn from(value: Color) -> Self {
        AttrValue::Color(value)
    }
}

impl From<Alignment> for AttrValue {
    fn from(value: Alignment) -> Self {
        AttrValue::Align(value)
    }
}

impl From<Vec<Widget>> for AttrValue {
    fn from(value: Vec<Widget>) -> Self {
        AttrValue::Children(value)
    }
}

impl From<PressHandler> for AttrValue {
    fn from(value: PressHandler) -> Self {
        AttrValue::Press(value)
    }
}

impl From<Binding<String>> for AttrValue {
    fn from(value: Binding<String>) -> Self {
        AttrValue::Text(value)
    }
}

impl<T: fmt::Display + 'static> From<&Observable<T>> for AttrValue {
    fn from(value: &Observable<T>) -> Self {
        AttrValue::Text(Binding::from(value))
    }
}

impl<T: fmt::Display + 'static> From<Observable<T>> for AttrValue {
    fn from(value: Observable<T>) -> Self {
        AttrValue::Text(Binding::from(value))
    }
}

/// Ordered list of named attributes handed to a widget constructor.
///
/// Usually built with the [`attrs!`](crate::attrs!) macro.
#[derive(Debug, Default)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Builds an [`Attrs`] list from `name: value` pairs.
///
/// ```ignore
/// Label(attrs! { text: "Hello", font_size: 24 })?
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $(
            attrs.push(stringify!($name), $value);
        )+
        attrs
    }};
}

/// Consumes an [`Attrs`] list on behalf of one widget kind.
///
/// Each typed getter removes the attribute it reads; [`finish`](Self::finish)
/// rejects whatever the widget did not ask for.
pub(crate) struct AttrReader {
    widget: &'static str,
    values: IndexMap<String, AttrValue>,
}

impl AttrReader {
    pub(crate) fn new(widget: &'static str, attrs: Attrs) -> Result<Self, ConfigurationError> {
        let mut values = IndexMap::with_capacity(attrs.entries.len());
        for (name, value) in attrs.entries {
            if values.contains_key(&name) {
                return Err(ConfigurationError::DuplicateAttribute {
                    widget,
                    attribute: name,
                });
            }
            values.insert(name, value);
        }
        Ok(Self { widget, values })
    }

    fn invalid(&self, attribute: &str, expected: &'static str) -> ConfigurationError {
        ConfigurationError::InvalidValue {
            widget: self.widget,
            attribute: attribute.to_string(),
            expected,
        }
    }

    fn take(&mut self, name: &str) -> Option<AttrValue> {
        self.values.shift_remove(name)
    }

    /// Any finite number.
    pub(crate) fn number(&mut self, name: &str) -> Result<Option<f32>, ConfigurationError> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Number(value)) if value.is_finite() => Ok(Some(value)),
            Some(_) => Err(self.invalid(name, "a finite number")),
        }
    }

    /// A finite number that is zero or greater.
    pub(crate) fn length(&mut self, name: &str) -> Result<Option<f32>, ConfigurationError> {
        match self.number(name) {
            Ok(Some(value)) if value < 0.0 => Err(self.invalid(name, "a non-negative number")),
            Err(_) => Err(self.invalid(name, "a non-negative number")),
            other => other,
        }
    }

    pub(crate) fn positive(&mut self, name: &str) -> Result<Option<f32>, ConfigurationError> {
        match self.number(name) {
            Ok(Some(value)) if value <= 0.0 => Err(self.invalid(name, "a positive number")),
            Err(_) => Err(self.invalid(name, "a positive number")),
            other => other,
        }
    }

    /// A uniform number or explicit insets, none of them negative.
    pub(crate) fn insets(&mut self, name: &str) -> Result<Option<EdgeInsets>, ConfigurationError> {
        let insets = match self.take(name) {
            None => return Ok(None),
            Some(AttrValue::Number(value)) if value.is_finite() => EdgeInsets::uniform(value),
            Some(AttrValue::Insets(insets)) => insets,
            Some(_) => return Err(self.invalid(name, "a number or (vertical, horizontal) pair")),
        };
        if insets.is_non_negative() {
            Ok(Some(insets))
        } else {
            Err(self.invalid(name, "non-negative insets"))
        }
    }

    pub(crate) fn color(&mut self, name: &str) -> Result<Option<Color>, ConfigurationError> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Color(color)) => Ok(Some(color)),
            Some(AttrValue::Str(hex)) => Color::from_hex(&hex)
                .map(Some)
                .map_err(|_| self.invalid(name, "a #RRGGBB colour")),
            Some(_) => Err(self.invalid(name, "a #RRGGBB colour")),
        }
    }

    pub(crate) fn alignment(&mut self, name: &str) -> Result<Option<Alignment>, ConfigurationError> {
        const EXPECTED: &str = "one of start, center, end, stretch";
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Align(alignment)) => Ok(Some(alignment)),
            Some(AttrValue::Str(value)) => value
                .parse()
                .map(Some)
                .map_err(|_| self.invalid(name, EXPECTED)),
            Some(_) => Err(self.invalid(name, EXPECTED)),
        }
    }

    pub(crate) fn text(&mut self, name: &str) -> Result<Option<Binding<String>>, ConfigurationError> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Str(value)) => Ok(Some(Binding::literal(value))),
            Some(AttrValue::Text(binding)) => Ok(Some(binding)),
            Some(AttrValue::Number(value)) => Ok(Some(Binding::literal(value.to_string()))),
            Some(_) => Err(self.invalid(name, "a string or observable")),
        }
    }

    pub(crate) fn flag(&mut self, name: &str) -> Result<Option<bool>, ConfigurationError> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Bool(value)) => Ok(Some(value)),
            Some(_) => Err(self.invalid(name, "a bool")),
        }
    }

    pub(crate) fn children(&mut self, name: &str) -> Result<Vec<Widget>, ConfigurationError> {
        match self.take(name) {
            None => Ok(Vec::new()),
            Some(AttrValue::Children(children)) => Ok(children),
            Some(_) => Err(self.invalid(name, "a list of widgets")),
        }
    }

    pub(crate) fn press(&mut self, name: &str) -> Result<Option<PressHandler>, ConfigurationError> {
        match self.take(name) {
            None => Ok(None),
            Some(AttrValue::Press(handler)) => Ok(Some(handler)),
            Some(other) => {
                log::debug!("{} got {} for `{name}`", self.widget, other.describe());
                Err(self.invalid(name, "a press handler"))
            }
        }
    }

    /// Fails on the first attribute nobody consumed.
    pub(crate) fn finish(self) -> Result<(), ConfigurationError> {
        match self.values.into_iter().next() {
            None => Ok(()),
            Some((attribute, _)) if KNOWN_ATTRIBUTES.contains(&attribute.as_str()) => {
                Err(ConfigurationError::UnsupportedAttribute {
                    widget: self.widget,
                    attribute,
                })
            }
            Some((attribute, _)) => Err(ConfigurationError::UnknownAttribute {
                widget: self.widget,
                attribute,
            }),
        }
    }
}
