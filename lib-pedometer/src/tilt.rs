use crate::*;

/// Orientation deviation of the device, derived from which in-plane axis changed the most. This
/// is advisory only and never influences step counting.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tilt
{
    /// Both gated deltas are equal, usually because both are zero.
    #[default]
    None,

    /// Left-right deviation, the y axis moved more than the x axis.
    Horizontal,

    /// Up-down deviation, the x axis moved more than the y axis.
    Vertical,
}

impl Tilt
{
    pub fn classify(deltas: &AxisDeltas) -> Tilt {
        if deltas.y > deltas.x {
            Tilt::Horizontal
        } else if deltas.x > deltas.y {
            Tilt::Vertical
        } else {
            Tilt::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tilt::None => "none",
            Tilt::Horizontal => "horizontal",
            Tilt::Vertical => "vertical",
        }
    }
}
