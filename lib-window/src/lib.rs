#![cfg_attr(not(test), no_std)]

use core::fmt;

/// Fixed-capacity circular storage for the last `SIZE` values of a signal.
///
/// The window never grows or reallocates, all slots live inline and are addressed modulo `SIZE`.
/// It does not track its own write position; several parallel channels usually share a single
/// [`WindowCursor`] so that slot `i` of every channel belongs to the same sample.
///
#[derive(Clone, Copy, PartialEq)]
pub struct CircularWindow<T: Copy + Default, const SIZE: usize> {
    pub(crate) data: [T; SIZE],
}

impl<T: Copy + Default, const SIZE: usize> CircularWindow<T, SIZE> {
    pub fn new() -> CircularWindow<T, SIZE> {
        CircularWindow {
            data: [T::default(); SIZE],
        }
    }

    /// Capacity of the window.
    ///
    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Reads the value in the given slot, the index wraps around so it can never be out of
    /// bounds.
    ///
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.data[index % SIZE]
    }

    /// Overwrites the value in the given slot, the index wraps around like in `get()`.
    ///
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.data[index % SIZE] = value;
    }

    /// Resets every slot to `T::default()` in place.
    ///
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }

    /// Iterates over all `SIZE` slots starting at `start` and wrapping around, i.e. the order
    /// `start, start + 1, ..., start + SIZE - 1` (mod `SIZE`).
    ///
    pub fn iter_from(&self, start: usize) -> impl Iterator<Item = T> + '_ {
        (0..SIZE).map(move |offset| self.data[(start + offset) % SIZE])
    }
}

impl<T: Copy + Default, const SIZE: usize> Default for CircularWindow<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default + fmt::Debug, const SIZE: usize> fmt::Debug for CircularWindow<T, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CircularWindow {:?}", self.data)
    }
}

/// Single write index shared by a set of parallel [`CircularWindow`]s.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCursor<const SIZE: usize> {
    /// Slot the next value will be written to.
    pub(crate) index: usize,

    /// Has the index wrapped around at least once since the last reset?
    pub(crate) wrapped: bool,
}

impl<const SIZE: usize> WindowCursor<SIZE> {
    pub const fn new() -> WindowCursor<SIZE> {
        WindowCursor { index: 0, wrapped: false }
    }

    /// Slot the next value will be written to.
    ///
    #[inline]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Slot just before the current one, i.e. `(index - 1) mod SIZE`.
    ///
    #[inline]
    pub fn previous(&self) -> usize {
        Self::before(self.index)
    }

    /// Slot just before `index`, wrapping to `SIZE - 1` at zero.
    ///
    #[inline]
    pub fn before(index: usize) -> usize {
        (index % SIZE + SIZE - 1) % SIZE
    }

    /// Has the window been filled completely at least once?
    ///
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.wrapped
    }

    /// Moves the cursor one slot forward. Returns `true` exactly when this call completed the
    /// first full wrap since the last reset.
    ///
    pub fn advance(&mut self) -> bool {
        self.index = (self.index + 1) % SIZE;
        if self.index == 0 && !self.wrapped {
            self.wrapped = true;
            return true;
        }
        false
    }

    /// Moves the cursor back to slot zero and forgets that it ever wrapped.
    ///
    pub fn reset(&mut self) {
        self.index = 0;
        self.wrapped = false;
    }
}
