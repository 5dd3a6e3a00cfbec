//! Diagram geometry for class shapes.
//!
//! The engine never interprets these values. They are read from the
//! snapshot and written back out as diagram bounds in the interchange
//! document.

/// Top-left corner of a shape, in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Width and height of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Left/top/right/bottom edges of a shape
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Bounds {
    /// Bounds of a shape placed at `position` with the given `size`
    pub fn from_shape(position: Point, size: Size) -> Self {
        Self {
            left: position.x,
            top: position.y,
            right: position.x + size.width,
            bottom: position.y + size.height,
        }
    }

    /// Render as an Enterprise Architect geometry string,
    /// e.g. `Left=30;Top=30;Right=220;Bottom=140;`
    pub fn to_geometry(&self) -> String {
        format!(
            "Left={};Top={};Right={};Bottom={};",
            format_coord(self.left),
            format_coord(self.top),
            format_coord(self.right),
            format_coord(self.bottom)
        )
    }
}

/// Integral coordinates print without a fractional part.
fn format_coord(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
