//! Trait objects and plain value types: the object-oriented section.

use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};

use crate::console::Console;
use crate::error::{Result, TourError};

// =============================================================================
// Shape trait
// =============================================================================

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn name(&self) -> &'static str;
    fn description(&self) -> String;

    fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Drawing a {}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Fails unless `radius` is strictly positive. NaN is rejected as well.
    pub fn new(radius: f64) -> Result<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(TourError::invalid_argument(
                "radius",
                "Radius must be positive",
            ));
        }
        Ok(Self { radius })
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }

    fn description(&self) -> String {
        format!("Circle with radius {}", self.radius)
    }
}

// =============================================================================
// Point
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Object-Oriented Programming")?;

    let shape: Box<dyn Shape> = Box::new(Circle::new(5.0)?);
    console.field("Circle Area", format!("{:.2}", shape.area()))?;
    console.field("Circle Perimeter", format!("{:.2}", shape.perimeter()))?;
    console.line(shape.description())?;
    shape.draw(console.writer())?;

    match Circle::new(-1.0) {
        Ok(circle) => console.line(format!("Unexpected circle: {}", circle.description()))?,
        Err(e) => console.field("Rejected circle", e)?,
    }

    let origin = Point::new(0, 0);
    let target = Point::new(3, 4);
    console.line(format!(
        "Distance between {origin} and {target}: {:.2}",
        origin.distance_to(&target)
    ))?;
    console.blank()?;
    Ok(())
}
