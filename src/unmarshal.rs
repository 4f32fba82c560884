//! Unmarshalling of numeric primitives out of caller-owned byte buffers.
//!
//! This module provides the read half of the codec: stateless functions that decode
//! `i16`, `i32`, `i64`, `f32` and `f64` values from a byte slice at an arbitrary offset,
//! in either byte order. Integer primitives additionally support truncated transfers
//! that consume fewer bytes than the primitive's width and widen the result, either by
//! sign extension or by zero extension, at the caller's choice.
//!
//! # Architecture
//!
//! All functions validate before they decode. The read path checks bounds first: the
//! requested range `offset..offset + num_bytes` is validated against the buffer as
//! given, before the transfer length is compared against the primitive's width. The
//! write path in [`crate::marshal`] uses the opposite order. The practical consequence
//! is that an oversized `num_bytes` reports [`crate::Error::OutOfBounds`] when the
//! range already falls outside the buffer, and [`crate::Error::InvalidNumBytes`] only
//! when the buffer is large enough to contain it.
//!
//! Truncated reads assemble the full-width value in a zeroed scratch array: the stored
//! window lands in the low-order byte positions for the requested byte order, the
//! scratch array is decoded as an unsigned integer, and the sign bit of the stored
//! window is propagated upward when `sign_extend` is set.
//!
//! Floating-point reads reinterpret the integer bit pattern with [`f32::from_bits`] /
//! [`f64::from_bits`]. No NaN canonicalization happens on the read path; whatever bits
//! are in the buffer come back as-is.
//!
//! # Key Components
//!
//! - [`crate::unmarshal::read_short`] / [`crate::unmarshal::read_short_dyn`] - 16-bit integer reads
//! - [`crate::unmarshal::read_int`] / [`crate::unmarshal::read_int_dyn`] - 32-bit integer reads
//! - [`crate::unmarshal::read_long`] / [`crate::unmarshal::read_long_dyn`] - 64-bit integer reads
//! - [`crate::unmarshal::read_float`] / [`crate::unmarshal::read_double`] - IEEE-754 reads
//!
//! # Usage Examples
//!
//! ```rust
//! use bytemarshal::unmarshal::{read_int, read_short_dyn};
//!
//! let buffer = [0x12, 0x34, 0x56, 0x78];
//! assert_eq!(read_int(&buffer, 0, true)?, 0x1234_5678);
//! assert_eq!(read_int(&buffer, 0, false)?, 0x7856_3412);
//!
//! // One stored byte widened into a short, with and without sign extension
//! let tail = [0xa8];
//! assert_eq!(read_short_dyn(&tail, 0, true, 1, false)?, 0x00a8);
//! assert_eq!(read_short_dyn(&tail, 0, true, 1, true)?, -88);
//! # Ok::<(), bytemarshal::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Functions return [`crate::Error::OutOfBounds`] when the requested range does not
//! fit the buffer, and [`crate::Error::InvalidNumBytes`] when an in-bounds transfer
//! asks for more bytes than the primitive holds.
//!
//! # Thread Safety
//!
//! All functions are pure and read-only; any number of threads may decode from shared
//! buffers concurrently.
//!
//! # Integration
//!
//! The write-side counterparts live in [`crate::marshal`], which produces exactly the
//! byte layouts these functions consume.

use crate::{
    Error::{InvalidNumBytes, OutOfBounds},
    Result,
};

/// Read an `i16` from 2 bytes of `buffer` at `offset` in the requested byte order.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 2` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_short;
///
/// let buffer = [0x12, 0x34];
/// assert_eq!(read_short(&buffer, 0, true)?, 0x1234);
/// assert_eq!(read_short(&buffer, 0, false)?, 0x3412);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_short(buffer: &[u8], offset: usize, big_endian: bool) -> Result<i16> {
    let Some(end) = offset.checked_add(2) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let Ok(bytes) = buffer[offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    Ok(if big_endian {
        i16::from_be_bytes(bytes)
    } else {
        i16::from_le_bytes(bytes)
    })
}

/// Read `num_bytes` bytes of `buffer` at `offset` and widen them into an `i16`.
///
/// The stored bytes are taken as the low-order bytes of the result. With `sign_extend`
/// set, the most significant bit of the stored window is propagated through the
/// remaining high-order bits, recovering negative values that were stored truncated.
/// Without it, the high-order bits are zero.
///
/// A `num_bytes` of `0` is a valid no-op that reads nothing and returns `0` (as long
/// as `offset` is within the buffer).
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes to read, `0..=2`
/// * `sign_extend` - Whether the stored window's sign bit fills the high-order bits
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + num_bytes` exceeds the buffer
/// length. This check runs first, against `num_bytes` as given. Returns
/// [`crate::Error::InvalidNumBytes`] if the range fits the buffer but `num_bytes`
/// exceeds 2.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_short_dyn;
///
/// let buffer = [0xff, 0x80];
/// assert_eq!(read_short_dyn(&buffer, 1, true, 1, true)?, -128);
/// assert_eq!(read_short_dyn(&buffer, 1, true, 1, false)?, 0x0080);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_short_dyn(
    buffer: &[u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
    sign_extend: bool,
) -> Result<i16> {
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }
    if num_bytes > 2 {
        return Err(InvalidNumBytes { num_bytes, max: 2 });
    }

    let mut raw = [0u8; 2];
    let mut assembled = if big_endian {
        raw[2 - num_bytes..].copy_from_slice(&buffer[offset..end]);
        u16::from_be_bytes(raw)
    } else {
        raw[..num_bytes].copy_from_slice(&buffer[offset..end]);
        u16::from_le_bytes(raw)
    };

    if sign_extend && num_bytes > 0 && num_bytes < 2 {
        let shift = 8 * num_bytes;
        if assembled & (1 << (shift - 1)) != 0 {
            assembled |= u16::MAX << shift;
        }
    }

    Ok(assembled as i16)
}

/// Read an `i32` from 4 bytes of `buffer` at `offset` in the requested byte order.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 4` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_int;
///
/// let buffer = [0x00, 0xff, 0xff, 0xff, 0xfe];
/// assert_eq!(read_int(&buffer, 1, true)?, -2);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_int(buffer: &[u8], offset: usize, big_endian: bool) -> Result<i32> {
    let Some(end) = offset.checked_add(4) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let Ok(bytes) = buffer[offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    Ok(if big_endian {
        i32::from_be_bytes(bytes)
    } else {
        i32::from_le_bytes(bytes)
    })
}

/// Read `num_bytes` bytes of `buffer` at `offset` and widen them into an `i32`.
///
/// Widening semantics match [`crate::unmarshal::read_short_dyn`], with a maximum
/// transfer of 4 bytes.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes to read, `0..=4`
/// * `sign_extend` - Whether the stored window's sign bit fills the high-order bits
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + num_bytes` exceeds the buffer
/// length (checked first), or [`crate::Error::InvalidNumBytes`] if the range fits the
/// buffer but `num_bytes` exceeds 4.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_int_dyn;
///
/// let buffer = [0xff, 0x00];
/// assert_eq!(read_int_dyn(&buffer, 0, true, 2, false)?, 0xff00);
/// assert_eq!(read_int_dyn(&buffer, 0, true, 2, true)?, -256);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_int_dyn(
    buffer: &[u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
    sign_extend: bool,
) -> Result<i32> {
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }
    if num_bytes > 4 {
        return Err(InvalidNumBytes { num_bytes, max: 4 });
    }

    let mut raw = [0u8; 4];
    let mut assembled = if big_endian {
        raw[4 - num_bytes..].copy_from_slice(&buffer[offset..end]);
        u32::from_be_bytes(raw)
    } else {
        raw[..num_bytes].copy_from_slice(&buffer[offset..end]);
        u32::from_le_bytes(raw)
    };

    if sign_extend && num_bytes > 0 && num_bytes < 4 {
        let shift = 8 * num_bytes;
        if assembled & (1 << (shift - 1)) != 0 {
            assembled |= u32::MAX << shift;
        }
    }

    Ok(assembled as i32)
}

/// Read an `i64` from 8 bytes of `buffer` at `offset` in the requested byte order.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 8` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_long;
///
/// let buffer = [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// assert_eq!(read_long(&buffer, 0, true)?, i64::MIN);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_long(buffer: &[u8], offset: usize, big_endian: bool) -> Result<i64> {
    let Some(end) = offset.checked_add(8) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }

    let Ok(bytes) = buffer[offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    Ok(if big_endian {
        i64::from_be_bytes(bytes)
    } else {
        i64::from_le_bytes(bytes)
    })
}

/// Read `num_bytes` bytes of `buffer` at `offset` and widen them into an `i64`.
///
/// Widening semantics match [`crate::unmarshal::read_short_dyn`], with a maximum
/// transfer of 8 bytes.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
/// * `num_bytes` - How many bytes to read, `0..=8`
/// * `sign_extend` - Whether the stored window's sign bit fills the high-order bits
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + num_bytes` exceeds the buffer
/// length (checked first), or [`crate::Error::InvalidNumBytes`] if the range fits the
/// buffer but `num_bytes` exceeds 8.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_long_dyn;
///
/// let buffer = [0x00, 0x80];
/// assert_eq!(read_long_dyn(&buffer, 0, false, 2, true)?, -32768);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_long_dyn(
    buffer: &[u8],
    offset: usize,
    big_endian: bool,
    num_bytes: usize,
    sign_extend: bool,
) -> Result<i64> {
    let Some(end) = offset.checked_add(num_bytes) else {
        return Err(OutOfBounds);
    };
    if end > buffer.len() {
        return Err(OutOfBounds);
    }
    if num_bytes > 8 {
        return Err(InvalidNumBytes { num_bytes, max: 8 });
    }

    let mut raw = [0u8; 8];
    let mut assembled = if big_endian {
        raw[8 - num_bytes..].copy_from_slice(&buffer[offset..end]);
        u64::from_be_bytes(raw)
    } else {
        raw[..num_bytes].copy_from_slice(&buffer[offset..end]);
        u64::from_le_bytes(raw)
    };

    if sign_extend && num_bytes > 0 && num_bytes < 8 {
        let shift = 8 * num_bytes;
        if assembled & (1 << (shift - 1)) != 0 {
            assembled |= u64::MAX << shift;
        }
    }

    Ok(assembled as i64)
}

/// Read an `f32` from 4 bytes of `buffer` at `offset` in the requested byte order.
///
/// The bit pattern is reinterpreted as-is; a NaN pattern in the buffer comes back with
/// its payload intact rather than being collapsed to the canonical NaN. There is no
/// truncated variant for floating-point values; the transfer is always 4 bytes.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 4` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_float;
///
/// let buffer = [0x3f, 0x80, 0x00, 0x00];
/// assert_eq!(read_float(&buffer, 0, true)?, 1.0);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_float(buffer: &[u8], offset: usize, big_endian: bool) -> Result<f32> {
    Ok(f32::from_bits(read_int(buffer, offset, big_endian)? as u32))
}

/// Read an `f64` from 8 bytes of `buffer` at `offset` in the requested byte order.
///
/// The bit pattern is reinterpreted as-is, matching [`crate::unmarshal::read_float`].
/// The transfer is always 8 bytes.
///
/// # Arguments
///
/// * `buffer` - The source byte buffer
/// * `offset` - Position of the first byte to read
/// * `big_endian` - `true` for big-endian byte order, `false` for little-endian
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + 8` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_double;
///
/// let buffer = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f];
/// assert_eq!(read_double(&buffer, 0, false)?, 1.0);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub fn read_double(buffer: &[u8], offset: usize, big_endian: bool) -> Result<f64> {
    Ok(f64::from_bits(read_long(buffer, offset, big_endian)? as u64))
}
