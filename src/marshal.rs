//! Marshalling of numeric primitives into caller-owned byte buffers.
//!
//! This module provides the write half of the codec: stateless functions that serialize
//! `i16`, `i32`, `i64`, `f32` and `f64` values into a mutable byte slice at an arbitrary
//! offset, in either byte order. Integer primitives additionally support truncated
//! transfers that store only the low-order bytes of the value.
//!
//! # Architecture
//!
//! All functions follow the same validate-then-copy shape. Argument checks run first
//! (transfer length, then bounds, in that order), and only when every check passes is
//! the buffer touched, with a single `copy_from_slice`. A failed call therefore leaves
//! the buffer untouched, no matter which argument was bad.
//!
//! Floating-point writes reuse the integer path: the value is converted to its IEEE-754
//! bit pattern via [`crate::marshal::float_to_bits`] or [`crate::marshal::double_to_bits`]
//! and stored as an integer of the same width. Those conversions collapse every NaN to a
//! single canonical pattern, so the bytes produced for a NaN are deterministic regardless
//! of which NaN the caller held.
//!
//! # Key Components
//!
//! - [`crate::marshal::write_short`] / [`crate::marshal::write_short_dyn`] - 16-bit integer writes
//! - [`crate::marshal::write_int`] / [`crate::marshal::write_int_dyn`] - 32-bit integer writes
//! - [`crate::marshal::write_long`] / [`crate::marshal::write_long_dyn`] - 64-bit integer writes
//! - [`crate::marshal::write_float`] / [`crate::marshal::write_double`] - IEEE-754 writes
//! - [`crate::marshal::float_to_bits`] / [`crate::marshal::double_to_bits`] - NaN-canonical bit conversions
//!
//! # Usage Examples
//!
//! ```rust
//! use bytemarshal::marshal::{write_int, write_short_dyn};
//!
//! let mut buffer = [0u8; 8];
//!
//! // Full-width write, big-endian, at offset 2
//! write_int(0x1234_5678, &mut buffer, 2, true)?;
//! assert_eq!(buffer[2..6], [0x12, 0x34, 0x56, 0x78]);
//!
//! // Truncated write: only the low byte of the value is stored
//! write_short_dyn(0x61a8, &mut buffer, 0, true, 1)?;
//! assert_eq!(buffer[0], 0xa8);
//! # Ok::<(), bytemarshal::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Functions return [`crate::Error::InvalidNumBytes`] when a truncated transfer asks for
//! more bytes than the primitive holds, and [`crate::Error::OutOfBounds`] when the
//! requested range does not fit the buffer. On the write path the length check always
//! runs before the bounds check.
//!
//! # Thread Safety
//!
//! All functions are pure: they hold no state and touch nothing but their arguments.
//! They are safe to call from any number of threads as long as the usual Rust aliasing
//! rules for the `&mut [u8]` buffer are upheld.
//!
//! # Integration
//!
//! The read-side counterparts live in [`crate::unmarshal`], which mirrors these
//! functions byte layout for byte layout.

use crate::{
    Error::{InvalidNumBytes, OutOfBounds},
    Result,
};

/// Bit pattern every `f32` NaN collapses to when marshalled.
const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;
/// Bit pattern every `f64` NaN collapses to when marshalled.
const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Convert an `f32` to its IEEE-754 bit pattern, collapsing every NaN to `0x7fc0_0000`.
///
/// For non-NaN values this is identical to [`f32::to_bits`]. NaN payloads are not
/// preserved: all NaNs (quiet or signalling, any sign, any payload) map to the single
/// canonical pattern, so marshalled output is deterministic.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::float_to_bits;
///
/// assert_eq!(float_to_bits(1.0), 0x3f80_0000);
/// assert_eq!(float_to_bits(f32::NAN), 0x7fc0_0000);
/// assert_eq!(float_to_bits(f32::from_bits(0xffc0_1234)), 0x7fc0_0000);
/// ```
#[must_use]
pub fn float_to_bits(value: f32) -> u32 {
    if value.is_nan() {
        CANONICAL_NAN_F32
    } else {
        value.to_bits()
    }
}

/// Convert an `f64` to its IEEE-754 bit pattern, collapsing every NaN to
/// `0x7ff8_0000_0000_0000`.
///
/// For non-NaN values this is identical to [`f64::to_bits`]. NaN payloads are not
/// preserved, matching [`crate::marshal::float_to_bits`].
#[must_use]
pub fn double_to_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_F64
    } else {
        value.to_bits()
    }
}

/// Write an `i16` into `buffer` at `offset` as 2 bytes in the requested byte order.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 2` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_short;
///
/// let mut buffer = [0u8; 4];
/// write_short(0x1234, &mut buffer, 1, true)?;
/// assert_eq!(buffer, [0x00, 0x12, 0x34, 0x00]);
///
/// write_short(0x1234, &mut buffer, 1, false)?;
/// assert_eq!(buffer, [0x00, 0x34, 0x12, 0x00]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_short(value: i16, buffer: &mut [u8], offset: usize, big_endian: bool) -> Result<()> {
    let Some(end) = offset.checked_add(2) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let bytes = if big_endian {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    };

    buffer[offset..end].copy_from_slice(&bytes);
    Ok(())
}

/// Write the low-order `num_bytes` bytes of an `i16` into `buffer` at `offset`.
///
/// A truncated write stores the least significant `num_bytes` bytes of the value's
/// two's-complement representation. In big-endian order the most significant stored
/// byte goes at `offset`; in little-endian order the least significant does. High-order
/// bytes of the value are silently discarded, so the same low bytes are stored whether
/// the value fits `num_bytes` or not.
///
/// A `num_bytes` of `0` is a valid no-op that stores nothing (as long as `offset` is
/// within the buffer).
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes of the value to store, `0..=2`
///
/// # Errors
///
/// Returns [`crate::Error::InvalidNumBytes`] if `num_bytes` exceeds 2. This check runs
/// before the bounds check. Returns [`crate::Error::OutOfBounds`] if
/// `offset + num_bytes` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_short_dyn;
///
/// let mut buffer = [0u8; 2];
/// write_short_dyn(0x61a8, &mut buffer, 0, true, 1)?;
/// assert_eq!(buffer, [0xa8, 0x00]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_short_dyn(
    value: i16,
    buffer: &mut [u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
) -> Result<()> {
    if num_bytes > 2 {
        return Err(InvalidNumBytes { num_bytes, max: 2 });
    }
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    if big_endian {
        let bytes = value.to_be_bytes();
        buffer[offset..end].copy_from_slice(&bytes[2 - num_bytes..]);
    } else {
        let bytes = value.to_le_bytes();
        buffer[offset..end].copy_from_slice(&bytes[..num_bytes]);
    }
    Ok(())
}

/// Write an `i32` into `buffer` at `offset` as 4 bytes in the requested byte order.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 4` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_int;
///
/// let mut buffer = [0u8; 4];
/// write_int(0x1234_5678, &mut buffer, 0, false)?;
/// assert_eq!(buffer, [0x78, 0x56, 0x34, 0x12]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_int(value: i32, buffer: &mut [u8], offset: usize, big_endian: bool) -> Result<()> {
    let Some(end) = offset.checked_add(4) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let bytes = if big_endian {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    };

    buffer[offset..end].copy_from_slice(&bytes);
    Ok(())
}

/// Write the low-order `num_bytes` bytes of an `i32` into `buffer` at `offset`.
///
/// Truncation semantics match [`crate::marshal::write_short_dyn`], with a maximum
/// transfer of 4 bytes.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes of the value to store, `0..=4`
///
/// # Errors
///
/// Returns [`crate::Error::InvalidNumBytes`] if `num_bytes` exceeds 4 (checked before
/// bounds), or [`crate::Error::OutOfBounds`] if `offset + num_bytes` exceeds the buffer
/// length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_int_dyn;
///
/// let mut buffer = [0u8; 3];
/// write_int_dyn(0x0012_3456, &mut buffer, 0, true, 3)?;
/// assert_eq!(buffer, [0x12, 0x34, 0x56]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_int_dyn(
    value: i32,
    buffer: &mut [u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
) -> Result<()> {
    if num_bytes > 4 {
        return Err(InvalidNumBytes { num_bytes, max: 4 });
    }
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    if big_endian {
        let bytes = value.to_be_bytes();
        buffer[offset..end].copy_from_slice(&bytes[4 - num_bytes..]);
    } else {
        let bytes = value.to_le_bytes();
        buffer[offset..end].copy_from_slice(&bytes[..num_bytes]);
    }
    Ok(())
}

/// Write an `i64` into `buffer` at `offset` as 8 bytes in the requested byte order.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 8` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_long;
///
/// let mut buffer = [0u8; 8];
/// write_long(i64::MIN, &mut buffer, 0, true)?;
/// assert_eq!(buffer, [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_long(value: i64, buffer: &mut [u8], offset: usize, big_endian: bool) -> Result<()> {
    let Some(end) = offset.checked_add(8) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let bytes = if big_endian {
        value.to_be_bytes()
    } else {
        value.to_le_bytes()
    };

    buffer[offset..end].copy_from_slice(&bytes);
    Ok(())
}

/// Write the low-order `num_bytes` bytes of an `i64` into `buffer` at `offset`.
///
/// Truncation semantics match [`crate::marshal::write_short_dyn`], with a maximum
/// transfer of 8 bytes.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes of the value to store, `0..=8`
///
/// # Errors
///
/// Returns [`crate::Error::InvalidNumBytes`] if `num_bytes` exceeds 8 (checked before
/// bounds), or [`crate::Error::OutOfBounds`] if `offset + num_bytes` exceeds the buffer
/// length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_long_dyn;
///
/// let mut buffer = [0u8; 8];
/// write_long_dyn(0x0102_0304_0506_0708, &mut buffer, 0, false, 5)?;
/// assert_eq!(buffer, [0x08, 0x07, 0x06, 0x05, 0x04, 0x00, 0x00, 0x00]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_long_dyn(
    value: i64,
    buffer: &mut [u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
) -> Result<()> {
    if num_bytes > 8 {
        return Err(InvalidNumBytes { num_bytes, max: 8 });
    }
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    if big_endian {
        let bytes = value.to_be_bytes();
        buffer[offset..end].copy_from_slice(&bytes[8 - num_bytes..]);
    } else {
        let bytes = value.to_le_bytes();
        buffer[offset..end].copy_from_slice(&bytes[..num_bytes]);
    }
    Ok(())
}

/// Write an `f32` into `buffer` at `offset` as its 4 IEEE-754 bytes in the requested
/// byte order.
///
/// The value is converted with [`crate::marshal::float_to_bits`], so every NaN input
/// produces the canonical NaN bytes. There is no truncated variant for floating-point
/// values; the transfer is always 4 bytes.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 4` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_float;
///
/// let mut buffer = [0u8; 4];
/// write_float(1.0, &mut buffer, 0, true)?;
/// assert_eq!(buffer, [0x3f, 0x80, 0x00, 0x00]);
///
/// write_float(f32::NAN, &mut buffer, 0, true)?;
/// assert_eq!(buffer, [0x7f, 0xc0, 0x00, 0x00]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_float(value: f32, buffer: &mut [u8], offset: usize, big_endian: bool) -> Result<()> {
    write_int(float_to_bits(value) as i32, buffer, offset, big_endian)
}

/// Write an `f64` into `buffer` at `offset` as its 8 IEEE-754 bytes in the requested
/// byte order.
///
/// The value is converted with [`crate::marshal::double_to_bits`], so every NaN input
/// produces the canonical NaN bytes. The transfer is always 8 bytes.
///
/// # Arguments
///
/// * `value` - The value to store
/// * `buffer` - The destination byte buffer
/// * `offset` - Position of the first byte to store
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 8` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_double;
///
/// let mut buffer = [0u8; 8];
/// write_double(1.0, &mut buffer, 0, false)?;
/// assert_eq!(buffer, [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn write_double(value: f64, buffer: &mut [u8], offset: usize, big_endian: bool) -> Result<()> {
    write_long(double_to_bits(value) as i64, buffer, offset, big_endian)
}
