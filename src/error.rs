use std::{error::Error, fmt};

/// Error returned when converting a slice of the wrong length into a [`Vec3`], [`Mat3`], or
/// [`Quat`].
///
/// [`Vec3`]: crate::Vec3
/// [`Mat3`]: crate::Mat3
/// [`Quat`]: crate::Quat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthError {
    expected: usize,
    actual: usize,
}

impl LengthError {
    pub(crate) fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    /// The number of elements the target type needs.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The length of the slice that was passed in.
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a slice of {} elements, got {}",
            self.expected, self.actual
        )
    }
}

impl Error for LengthError {}
