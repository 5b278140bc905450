use std::str::FromStr;

use crate::expression::vm::Environment;
use crate::foundation::error::{ScriptError, ScriptResult};

/// Variable names resolved by [`Geometry`].
pub const GEOMETRY_VARIABLES: [&str; 8] = [
    "screen.width",
    "screen.height",
    "screen.x",
    "screen.y",
    "window.width",
    "window.height",
    "window.x",
    "window.y",
];

/// A position in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }
}

impl FromStr for Rect {
    type Err = ScriptError;

    /// Parse `x,y,width,height`.
    fn from_str(s: &str) -> ScriptResult<Self> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScriptError::config(format!("invalid rect '{s}': {e}")))?;
        match parts.as_slice() {
            [x, y, w, h] => Ok(Self::new(*x, *y, *w, *h)),
            _ => Err(ScriptError::config(format!(
                "invalid rect '{s}': expected x,y,width,height"
            ))),
        }
    }
}

/// Screen and focused-window geometry captured when an action fires.
///
/// Window fields the host could not read resolve to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    /// Visible bounds of the window's screen.
    pub screen: Rect,
    pub window_origin: Option<Point>,
    pub window_size: Option<Size>,
}

impl Geometry {
    pub fn new(screen: Rect, window: Option<Rect>) -> Self {
        Self {
            screen,
            window_origin: window.map(|w| w.origin),
            window_size: window.map(|w| w.size),
        }
    }
}

impl Environment for Geometry {
    fn resolve(&self, name: &str) -> Option<f64> {
        let value = match name {
            "screen.width" => self.screen.size.width,
            "screen.height" => self.screen.size.height,
            "screen.x" => self.screen.origin.x,
            "screen.y" => self.screen.origin.y,
            "window.width" => self.window_size.map_or(0.0, |s| s.width),
            "window.height" => self.window_size.map_or(0.0, |s| s.height),
            "window.x" => self.window_origin.map_or(0.0, |p| p.x),
            "window.y" => self.window_origin.map_or(0.0, |p| p.y),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
