use crate::*;

/// What the step detector made of a single sample.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome
{
    /// No zero crossing.
    Idle,

    /// Still resting after a previous event, the signal was not looked at.
    Refractory,

    /// Zero crossing with enough energy, counted as a step.
    Step,

    /// Zero crossing retracted because the magnitude barely changed. These mostly show up when
    /// the user decelerates to a stop.
    Suppressed,
}

impl StepOutcome {

    /// The step pulse emitted for this sample, either 0 or 1.
    ///
    pub fn pulse(&self) -> u64 {
        match self {
            Self::Step => 1,
            _ => 0,
        }
    }

    pub fn is_step(&self) -> bool {
        *self == Self::Step
    }
}

/// Do two consecutive filtered values have strictly opposite signs? Zero, NaN and infinite values
/// have no sign, so they never take part in a crossing.
///
#[inline]
pub fn is_zero_crossing(current: f32, previous: f32) -> bool {
    sign(current) * sign(previous) == -1.0
}

/// Zero-crossing step detector with a refractory window and an energy floor.
///
#[derive(Debug, Clone)]
pub struct StepDetection
{
    /// Samples left before a new step can be registered.
    refractory: u32,

    refractory_samples: u32,
    energy_floor: f32,
}

impl StepDetection
{
    #[inline]
    pub fn new(refractory_samples: u32, energy_floor: f32) -> Self {
        StepDetection {
            refractory: 0,
            refractory_samples,
            energy_floor,
        }
    }

    /// Compute one time step of the detector.
    ///
    /// `current` and `previous` are the two most recent filtered values, `energy_delta` is the
    /// absolute change in magnitude between the current sample and the one before it.
    ///
    pub fn update(&mut self, current: f32, previous: f32, energy_delta: f32) -> StepOutcome {
        if self.refractory > 0 {
            self.refractory -= 1;
            return StepOutcome::Refractory;
        }

        if !is_zero_crossing(current, previous) {
            return StepOutcome::Idle;
        }

        // Both counted and retracted crossings use up the refractory window.
        self.refractory = self.refractory_samples;

        // Written so a NaN energy delta is retracted too.
        if !(energy_delta >= self.energy_floor) {
            log::debug!("Zero crossing retracted, magnitude delta {} below {}", energy_delta, self.energy_floor);
            return StepOutcome::Suppressed;
        }

        StepOutcome::Step
    }

    /// Samples left in the current refractory window.
    ///
    pub fn refractory_remaining(&self) -> u32 {
        self.refractory
    }

    pub fn reset(&mut self) {
        self.refractory = 0;
    }
}
