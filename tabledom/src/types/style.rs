use std::fmt;

use super::Px;

/// Inline style declarations written by layout synchronizers.
///
/// Only the measurement-dependent properties live here; everything else
/// about an element is structural and set at creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub width: Option<Px>,
    pub min_width: Option<Px>,
    pub height: Option<Px>,
    pub min_height: Option<Px>,
    pub transform: Option<Transform>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Px) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, min_width: Px) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn height(mut self, height: Px) -> Self {
        self.height = Some(height);
        self
    }

    pub fn min_height(mut self, min_height: Px) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Look up a declaration by its CSS property name, rendered as CSS text.
    pub fn get(&self, property: &str) -> Option<String> {
        match property {
            "width" => self.width.map(|v| v.to_string()),
            "min-width" => self.min_width.map(|v| v.to_string()),
            "height" => self.height.map(|v| v.to_string()),
            "min-height" => self.min_height.map(|v| v.to_string()),
            "transform" => self.transform.map(|v| v.to_string()),
            _ => None,
        }
    }
}

/// A visual transform. Never affects layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate { x: Px, y: Px },
}

impl Transform {
    pub fn translate_x(x: f32) -> Self {
        Transform::Translate {
            x: Px(x),
            y: Px::ZERO,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate { x, y } if *y == Px::ZERO => write!(f, "translate({x}, 0)"),
            Transform::Translate { x, y } => write!(f, "translate({x}, {y})"),
        }
    }
}
