use crate::*;

/// Tunable parameters of the step detection pipeline.
///
/// `N` is the window size, which also fixes the number of kernel taps. The defaults reproduce the
/// empirically tuned detector for `N = 7`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PedometerConfig<const N: usize>
{
    /// Amplification applied to every raw accelerometer axis.
    pub gain: f32,

    /// In amplified units; per-axis deltas below this are zeroed before tilt classification.
    pub noise_floor: f32,

    /// Zero crossings with a magnitude delta below this are retracted instead of counted.
    pub energy_floor: f32,

    /// Convolution weights applied to the magnitude window, oldest sample first.
    pub kernel: [f32; N],

    /// Number of samples after an emitted (or retracted) step during which no new step can be
    /// registered. At least `N - 1`, so two steps are always a full window apart.
    pub refractory_samples: u32,
}

impl Default for PedometerConfig<WINDOW_SIZE> {
    fn default() -> Self {
        PedometerConfig {
            gain: DEFAULT_GAIN,
            noise_floor: DEFAULT_NOISE_FLOOR,
            energy_floor: DEFAULT_ENERGY_FLOOR,
            kernel: LOG_KERNEL,
            refractory_samples: WINDOW_SIZE as u32,
        }
    }
}

impl<const N: usize> PedometerConfig<N>
{
    /// Builds a configuration around a custom kernel, every other parameter gets its default value
    /// and the refractory window is as long as the kernel.
    ///
    pub fn with_kernel(kernel: [f32; N]) -> Self {
        PedometerConfig {
            gain: DEFAULT_GAIN,
            noise_floor: DEFAULT_NOISE_FLOOR,
            energy_floor: DEFAULT_ENERGY_FLOOR,
            kernel,
            refractory_samples: N as u32,
        }
    }

    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn noise_floor(mut self, noise_floor: f32) -> Self {
        self.noise_floor = noise_floor;
        self
    }

    pub fn energy_floor(mut self, energy_floor: f32) -> Self {
        self.energy_floor = energy_floor;
        self
    }

    pub fn refractory_samples(mut self, samples: u32) -> Self {
        self.refractory_samples = samples;
        self
    }

    /// Checks that every parameter is usable. The pipeline itself never fails, so this is the
    /// only place bad numbers get caught.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if N < 2 {
            return Err(ConfigError::WindowTooSmall(N));
        }
        if !self.gain.is_finite() || self.gain == 0.0 {
            return Err(ConfigError::InvalidGain(self.gain));
        }
        if !self.noise_floor.is_finite() || self.noise_floor < 0.0 {
            return Err(ConfigError::InvalidNoiseFloor(self.noise_floor));
        }
        if !self.energy_floor.is_finite() || self.energy_floor < 0.0 {
            return Err(ConfigError::InvalidEnergyFloor(self.energy_floor));
        }
        if (self.refractory_samples as usize) < N - 1 {
            return Err(ConfigError::RefractoryTooShort { samples: self.refractory_samples, minimum: (N - 1) as u32 });
        }
        if let Some((index, value)) = self.kernel.iter().enumerate().find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::InvalidKernelWeight { index, value: *value });
        }
        Ok(())
    }
}
