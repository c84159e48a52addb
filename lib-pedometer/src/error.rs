use core::{error::Error, fmt};


/// Reasons a [`PedometerConfig`](crate::PedometerConfig) can be rejected.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError
{
    InvalidGain(f32),
    InvalidNoiseFloor(f32),
    InvalidEnergyFloor(f32),
    InvalidKernelWeight { index: usize, value: f32 },
    WindowTooSmall(usize),
    RefractoryTooShort { samples: u32, minimum: u32 },
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidGain(gain) => write!(f, "Gain must be finite and non-zero, got {}", gain),
            Self::InvalidNoiseFloor(floor) => write!(f, "Noise floor must be finite and >= 0, got {}", floor),
            Self::InvalidEnergyFloor(floor) => write!(f, "Energy floor must be finite and >= 0, got {}", floor),
            Self::InvalidKernelWeight { index, value } => write!(f, "Kernel weight {} is not finite: {}", index, value),
            Self::WindowTooSmall(size) => write!(f, "Window needs at least 2 samples, got {}", size),
            Self::RefractoryTooShort { samples, minimum } => write!(f, "Refractory window must be at least {} samples, got {}", minimum, samples),
        }
    }
}
