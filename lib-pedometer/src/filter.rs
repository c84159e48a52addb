use window::{CircularWindow, WindowCursor};
use crate::*;

/// Magnitude of a sample as used by the step detector: squared length of the x/y plane, signed
/// by the y axis. This assumes the device is held with its y axis perpendicular to the walking
/// surface.
///
#[inline]
pub fn magnitude(sample: &Vector) -> f32 {
    sample.signed_planar_energy()
}

/// Circular convolution of a fixed kernel over the magnitude window. Every result is kept in a
/// parallel output window so consecutive filtered values can be compared.
///
#[derive(Debug, Clone)]
pub struct ConvolutionFilter<const N: usize>
{
    kernel: [f32; N],
    filtered: CircularWindow<f32, N>,
}

impl<const N: usize> ConvolutionFilter<N>
{
    pub fn new(kernel: [f32; N]) -> Self {
        ConvolutionFilter {
            kernel,
            filtered: CircularWindow::new(),
        }
    }

    pub fn kernel(&self) -> &[f32; N] {
        &self.kernel
    }

    /// `sum(kernel[k] * signal[(index + k) mod N])` for `k` in `0..N`. With `index` at the write
    /// cursor this lines the first weight up with the oldest sample.
    ///
    pub fn convolve(&self, signal: &CircularWindow<f32, N>, index: usize) -> f32 {
        self.kernel
            .iter()
            .zip(signal.iter_from(index))
            .map(|(weight, value)| weight * value)
            .sum()
    }

    /// Convolves the signal at `index`, stores the result in the output window at that same
    /// index and returns it together with the value stored one slot earlier.
    ///
    pub fn apply(&mut self, signal: &CircularWindow<f32, N>, index: usize) -> (f32, f32) {
        let current = self.convolve(signal, index);
        self.filtered.set(index, current);
        (current, self.filtered.get(WindowCursor::<N>::before(index)))
    }

    /// Filtered value stored in the given slot.
    ///
    pub fn filtered(&self, index: usize) -> f32 {
        self.filtered.get(index)
    }

    pub fn clear(&mut self) {
        self.filtered.clear();
    }
}
