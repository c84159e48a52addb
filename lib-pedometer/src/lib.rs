#![cfg_attr(not(any(test, feature = "csv")), no_std)]

use math::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod sample_window;
pub use sample_window::*;

pub mod noise_gate;
pub use noise_gate::*;

pub mod filter;
pub use filter::*;

pub mod step_detection;
pub use step_detection::*;

pub mod tilt;
pub use tilt::*;

pub mod pedometer;
pub use pedometer::*;

/// Number of samples in the moving window, this is also the number of taps in the convolution
/// kernel and the default length of the refractory window.
///
pub const WINDOW_SIZE: usize = 7;

/// Laplacian of Gaussian approximation built on a zero-mean gaussian. Convolving the magnitude
/// signal with it both smooths the signal and approximates its second derivative, so its sign
/// changes line up with foot strikes.
///
pub const LOG_KERNEL: [f32; WINDOW_SIZE] = [0.005, 0.05, 0.245, -0.6, 0.245, 0.05, 0.005];

/// Amplification applied to every raw accelerometer axis before anything else.
///
pub const DEFAULT_GAIN: f32 = 10.0;

/// In amplified units; per-axis deltas below this are treated as sensor jitter.
///
pub const DEFAULT_NOISE_FLOOR: f32 = 10.0;

/// Empirically derived, and a bit oversensitive. Zero crossings whose magnitude delta stays below
/// this are not counted as steps.
///
pub const DEFAULT_ENERGY_FLOOR: f32 = 180.0;

#[cfg(test)]
pub mod tests;
