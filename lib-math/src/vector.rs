use core::ops::Mul;

use crate::*;

/// One tri-axial accelerometer reading.
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Are all three components finite numbers?
    ///
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Per-axis absolute difference between two readings.
    ///
    pub fn abs_diff(&self, other: &Vector) -> Vector {
        Vector {
            x: abs_diff(self.x, other.x),
            y: abs_diff(self.y, other.y),
            z: abs_diff(self.z, other.z),
        }
    }

    /// Squared length of the in-plane (x, y) part of the vector, signed by the y component. This
    /// keeps the direction of the y axis without paying for a square root.
    ///
    pub fn signed_planar_energy(&self) -> f32 {
        (self.x * self.x + self.y * self.y) * sign(self.y)
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        approx_eq(self.x, other.x, tol)
            && approx_eq(self.y, other.y, tol)
            && approx_eq(self.z, other.z, tol)
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
