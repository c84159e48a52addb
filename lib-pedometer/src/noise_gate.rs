use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis
{
    X,
    Y,
    Z,
}

impl Axis {
    pub fn of(&self, sample: &Vector) -> f32 {
        match self {
            Self::X => sample.x,
            Self::Y => sample.y,
            Self::Z => sample.z,
        }
    }
}

/// Per-axis change between two consecutive samples after noise gating.
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisDeltas
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Zeroes per-axis changes that are too small to be anything other than sensor jitter.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseGate
{
    /// In amplified units.
    pub floor: f32,
}

impl NoiseGate
{
    pub const fn new(floor: f32) -> Self {
        NoiseGate { floor }
    }

    /// Returns `|prev - new|` or 0.0 when that is below the noise floor. A NaN delta is gated
    /// away as well.
    ///
    #[inline]
    pub fn gate_value(&self, prev: f32, new: f32) -> f32 {
        self.gate_delta(abs_diff(prev, new))
    }

    /// Passes an already computed absolute delta through the gate.
    ///
    #[inline]
    pub fn gate_delta(&self, delta: f32) -> f32 {
        if delta >= self.floor {
            delta
        } else {
            0.0
        }
    }

    pub fn gate(&self, prev: &Vector, new: &Vector, axis: Axis) -> f32 {
        self.gate_value(axis.of(prev), axis.of(new))
    }

    /// Gates all three axes at once.
    ///
    pub fn gate_sample(&self, prev: &Vector, new: &Vector) -> AxisDeltas {
        let delta = prev.abs_diff(new);
        AxisDeltas {
            x: self.gate_delta(delta.x),
            y: self.gate_delta(delta.y),
            z: self.gate_delta(delta.z),
        }
    }
}
