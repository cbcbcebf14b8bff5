use std::fmt;
use std::str::FromStr;

use pocket_ui_graphics::{Color, EdgeInsets, Point};

/// Cross-axis placement of a child inside a container, or of text inside
/// its widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
            Alignment::Stretch => "stretch",
        }
    }

    /// Offset of a child of size `child` inside `available` along one axis.
    pub fn offset(self, available: f32, child: f32) -> f32 {
        match self {
            Alignment::Start | Alignment::Stretch => 0.0,
            Alignment::Center => ((available - child) / 2.0).max(0.0),
            Alignment::End => (available - child).max(0.0),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" | "left" | "top" => Ok(Alignment::Start),
            "center" => Ok(Alignment::Center),
            "end" | "right" | "bottom" => Ok(Alignment::End),
            "stretch" => Ok(Alignment::Stretch),
            _ => Err(()),
        }
    }
}

/// Geometry and colour attributes shared by every widget kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub offset: Point,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub background: Option<Color>,
    pub foreground: Color,
    pub corner_radius: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            width: None,
            height: None,
            padding: EdgeInsets::ZERO,
            margin: EdgeInsets::ZERO,
            background: None,
            foreground: Color::BLACK,
            corner_radius: 0.0,
        }
    }
}
