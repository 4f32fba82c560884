use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every marshalling and unmarshalling operation validates its arguments against the caller's
/// buffer before touching a single byte, and reports the failure through one of these variants.
/// A failing call never performs a partial transfer: the buffer is left byte-for-byte as it was.
///
/// # Error Categories
///
/// ## Buffer Errors
/// - [`Error::OutOfBounds`] - The requested byte range does not fit the buffer
///
/// ## Argument Errors
/// - [`Error::InvalidNumBytes`] - A transfer length outside the primitive's width
///
/// # Examples
///
/// ```rust
/// use bytemarshal::{marshal::write_int, Error};
///
/// let mut buffer = [0u8; 2];
/// match write_int(0x1234_5678, &mut buffer, 0, true) {
///     Err(Error::OutOfBounds) => {} // four bytes cannot fit a two byte buffer
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An out of bound access was attempted on the caller's buffer.
    ///
    /// This error occurs when `offset` plus the number of bytes the operation would
    /// transfer exceeds the buffer length, including the case where that sum overflows
    /// `usize`. It is a safety check performed up front, which is what guarantees that
    /// a failing write never mutates the buffer.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,

    /// The requested transfer length is not valid for the primitive being transferred.
    ///
    /// Variable-length integer transfers accept at most the primitive's natural width
    /// (2 bytes for a short, 4 for an int, 8 for a long). Writers reject a longer count
    /// before looking at the buffer at all; readers only reach this rejection once the
    /// requested range has been found to fit the buffer. See the crate documentation on
    /// check ordering.
    ///
    /// # Fields
    ///
    /// * `num_bytes` - The transfer length the caller asked for
    /// * `max` - The widest transfer the primitive supports
    #[error("Invalid number of bytes {num_bytes}; this primitive transfers at most {max}")]
    InvalidNumBytes {
        /// The transfer length the caller asked for
        num_bytes: usize,
        /// The widest transfer the primitive supports
        max: usize,
    },
}
