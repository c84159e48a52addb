use window::{CircularWindow, WindowCursor};
use crate::*;

/// Slots touched by a single [`SampleWindow::push`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSlots
{
    /// Slot holding the sample that was pushed before this one, i.e. `(written - 1) mod N`.
    pub previous: usize,

    /// Slot the new sample was written to.
    pub written: usize,

    /// Did this push complete the first full pass over the window?
    pub filled_now: bool,
}

/// The last `N` amplified accelerometer readings, split into one circular buffer per axis, plus
/// the magnitude derived from each of them. All four channels share a single write index.
///
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize>
{
    pub(crate) x: CircularWindow<f32, N>,
    pub(crate) y: CircularWindow<f32, N>,
    pub(crate) z: CircularWindow<f32, N>,
    pub(crate) magnitude: CircularWindow<f32, N>,
    pub(crate) cursor: WindowCursor<N>,
}

impl<const N: usize> SampleWindow<N>
{
    pub fn new() -> Self {
        SampleWindow {
            x: CircularWindow::new(),
            y: CircularWindow::new(),
            z: CircularWindow::new(),
            magnitude: CircularWindow::new(),
            cursor: WindowCursor::new(),
        }
    }

    /// Stores an (already amplified) sample and its magnitude at the current write index, then
    /// advances the index, wrapping to 0 at `N`.
    ///
    pub fn push(&mut self, sample: &Vector) -> WindowSlots {
        let written = self.cursor.current();
        let previous = self.cursor.previous();

        self.x.set(written, sample.x);
        self.y.set(written, sample.y);
        self.z.set(written, sample.z);
        self.magnitude.set(written, magnitude(sample));

        let filled_now = self.cursor.advance();
        WindowSlots { previous, written, filled_now }
    }

    /// Reads the three axes stored in the given slot back as a single sample.
    ///
    pub fn sample(&self, index: usize) -> Vector {
        Vector::new(self.x.get(index), self.y.get(index), self.z.get(index))
    }

    /// Magnitude stored in the given slot.
    ///
    #[inline]
    pub fn magnitude(&self, index: usize) -> f32 {
        self.magnitude.get(index)
    }

    pub fn magnitudes(&self) -> &CircularWindow<f32, N> {
        &self.magnitude
    }

    pub fn cursor(&self) -> &WindowCursor<N> {
        &self.cursor
    }

    /// Has every slot been written at least once since the last clear?
    ///
    pub fn is_filled(&self) -> bool {
        self.cursor.is_filled()
    }

    /// Zeroes every channel and rewinds the write index, in place.
    ///
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.z.clear();
        self.magnitude.clear();
        self.cursor.reset();
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
