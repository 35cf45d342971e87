// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Error returned by the bounds-checked accessors and slice constructors.
///
/// Numeric degeneracies (division by zero, singular matrices, zero-length
/// normalization) are never reported here; they produce sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Component index outside `0..len`.
    #[error("index {index} out of range for {len} components")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of components in the value.
        len: usize,
    },
    /// Source or destination slice cannot hold `required` values at `offset`.
    #[error("buffer of length {len} too short for {required} values at offset {offset}")]
    BufferTooShort {
        /// Number of scalars the value needs.
        required: usize,
        /// Starting offset into the buffer.
        offset: usize,
        /// Actual buffer length.
        len: usize,
    },
}

/// Returns the `required`-long window of `buf` starting at `offset`.
pub(crate) fn window(buf: &[f64], offset: usize, required: usize) -> Result<&[f64], MathError> {
    offset
        .checked_add(required)
        .and_then(|end| buf.get(offset..end))
        .ok_or(MathError::BufferTooShort {
            required,
            offset,
            len: buf.len(),
        })
}

/// Mutable counterpart of [`window`].
pub(crate) fn window_mut(
    buf: &mut [f64],
    offset: usize,
    required: usize,
) -> Result<&mut [f64], MathError> {
    let len = buf.len();
    offset
        .checked_add(required)
        .and_then(move |end| buf.get_mut(offset..end))
        .ok_or(MathError::BufferTooShort {
            required,
            offset,
            len,
        })
}

/// Checks `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), MathError> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len })
    }
}
