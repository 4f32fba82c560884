// Copyright 2025 The bytemarshal Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # bytemarshal
//!
//! [![Crates.io](https://img.shields.io/crates/v/bytemarshal.svg)](https://crates.io/crates/bytemarshal)
//! [![Documentation](https://docs.rs/bytemarshal/badge.svg)](https://docs.rs/bytemarshal)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/bytemarshal/bytemarshal/blob/main/LICENSE-APACHE)
//!
//! Endian-aware marshalling of numeric primitives to and from byte buffers. `bytemarshal`
//! converts `i16`, `i32`, `i64`, `f32` and `f64` values into raw bytes at any offset of a
//! caller-owned buffer and back, with the byte order selected per call, plus truncated
//! integer transfers that store or recover only part of a value's width.
//!
//! The functions are deliberately low-level building blocks for record-oriented binary
//! formats: no streams, no framing, no allocation. The caller owns the buffer and the
//! offsets; the library owns the byte layout and the argument validation.
//!
//! ## Features
//!
//! - **🔀 Per-call byte order** - Every function takes `big_endian: bool`; one buffer can mix both orders
//! - **✂️ Truncated transfers** - Store the low `num_bytes` bytes of an integer, recover them with sign or zero extension
//! - **🛡️ No partial writes** - All argument validation happens before the first byte moves
//! - **🎯 Deterministic NaN** - Every NaN marshals to one canonical bit pattern per width
//! - **🧵 Stateless** - Plain functions over caller-owned slices, safe from any thread
//! - **📦 No unsafe, no dependencies beyond error derivation**
//!
//! ## Quick Start
//!
//! Add `bytemarshal` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bytemarshal = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to every operation, import the prelude:
//!
//! ```rust
//! use bytemarshal::prelude::*;
//!
//! let mut record = [0u8; 16];
//! write_int(1969, &mut record, 0, true)?;
//! write_double(6.02e23, &mut record, 4, true)?;
//!
//! assert_eq!(read_int(&record, 0, true)?, 1969);
//! assert_eq!(read_double(&record, 4, true)?, 6.02e23);
//! # Ok::<(), bytemarshal::Error>(())
//! ```
//!
//! ### Truncated Transfers
//!
//! Integer values can be stored in fewer bytes than their natural width and widened
//! again on the way out:
//!
//! ```rust
//! use bytemarshal::{marshal::write_int_dyn, unmarshal::read_int_dyn};
//!
//! // Three-byte field holding a small negative number
//! let mut field = [0u8; 3];
//! write_int_dyn(-5, &mut field, 0, true, 3)?;
//! assert_eq!(field, [0xff, 0xff, 0xfb]);
//!
//! // Sign extension recovers the value; zero extension keeps the raw bits
//! assert_eq!(read_int_dyn(&field, 0, true, 3, true)?, -5);
//! assert_eq!(read_int_dyn(&field, 0, true, 3, false)?, 0x00ff_fffb);
//! # Ok::<(), bytemarshal::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `bytemarshal` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of every operation
//! - [`marshal`] - The write half: values into buffers
//! - [`unmarshal`] - The read half: buffers into values
//! - [`Error`] and [`Result`] - Error handling for both halves
//!
//! ## Check Ordering
//!
//! Both halves validate everything before touching any data, but they order their checks
//! differently, and callers that distinguish error kinds can rely on it:
//!
//! - **Writes** check `num_bytes` against the primitive's width first, then bounds. An
//!   absurd transfer length reports [`Error::InvalidNumBytes`] even when it also falls
//!   far outside the buffer.
//! - **Reads** check bounds first, against `num_bytes` exactly as given. An oversized
//!   length reports [`Error::OutOfBounds`] when the range misses the buffer, and
//!   [`Error::InvalidNumBytes`] only when the buffer is big enough to hold the range.
//!
//! Either way a failing call transfers nothing.
//!
//! ## Floating-Point Semantics
//!
//! Writes go through [`marshal::float_to_bits`] / [`marshal::double_to_bits`], which
//! collapse every NaN to one canonical pattern (`0x7fc0_0000` for `f32`,
//! `0x7ff8_0000_0000_0000` for `f64`). Reads reinterpret the stored bits without
//! canonicalization, so foreign NaN payloads pass through unchanged. Zeroes keep their
//! sign; infinities round-trip exactly.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bytemarshal::{marshal::write_long_dyn, Error};
//!
//! let mut buffer = [0u8; 4];
//! match write_long_dyn(-1, &mut buffer, 0, true, 60) {
//!     Err(Error::InvalidNumBytes { num_bytes, max }) => {
//!         println!("asked for {num_bytes} bytes, limit is {max}");
//!     }
//!     Err(Error::OutOfBounds) => println!("range misses the buffer"),
//!     Ok(()) => unreachable!(),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! The crate includes fuzzing support for robustness:
//!
//! ### Fuzzing
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Run fuzzer
//! cargo +nightly fuzz run codec --release
//!
//! # Multi-core fuzzing
//! cargo +nightly fuzz run codec --release -- -jobs=4 -fork=1
//! ```
//!
//! ### Testing
//!
//! The test suite covers byte layouts, truncation, extension and validation ordering:
//!
//! ```bash
//! cargo test
//! ```

pub(crate) mod error;

/// Convenient re-exports of every operation and the error types.
///
/// This module provides everything needed to marshal and unmarshal primitives through
/// a single glob import.
///
/// # Example
///
/// ```rust
/// use bytemarshal::prelude::*;
///
/// let mut buffer = [0u8; 2];
/// write_short(-1, &mut buffer, 0, true)?;
/// assert_eq!(read_short(&buffer, 0, true)?, -1);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub mod prelude;

/// Marshalling of numeric primitives into caller-owned byte buffers.
///
/// The write half of the codec. Each primitive has a full-width writer taking the byte
/// order per call; integers additionally have a `_dyn` variant that stores only the
/// low-order `num_bytes` bytes of the value.
///
/// # Key Functions
///
/// - [`marshal::write_short`], [`marshal::write_int`], [`marshal::write_long`] - full-width integer writes
/// - [`marshal::write_short_dyn`], [`marshal::write_int_dyn`], [`marshal::write_long_dyn`] - truncated integer writes
/// - [`marshal::write_float`], [`marshal::write_double`] - IEEE-754 writes with canonical NaN
///
/// # Examples
///
/// ```rust
/// use bytemarshal::marshal::write_long;
///
/// let mut buffer = [0u8; 8];
/// write_long(-2, &mut buffer, 0, false)?;
/// assert_eq!(buffer, [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub mod marshal;

/// Unmarshalling of numeric primitives out of caller-owned byte buffers.
///
/// The read half of the codec. Each primitive has a full-width reader taking the byte
/// order per call; integers additionally have a `_dyn` variant that consumes `num_bytes`
/// bytes and widens them with sign or zero extension.
///
/// # Key Functions
///
/// - [`unmarshal::read_short`], [`unmarshal::read_int`], [`unmarshal::read_long`] - full-width integer reads
/// - [`unmarshal::read_short_dyn`], [`unmarshal::read_int_dyn`], [`unmarshal::read_long_dyn`] - widening integer reads
/// - [`unmarshal::read_float`], [`unmarshal::read_double`] - IEEE-754 reads without canonicalization
///
/// # Examples
///
/// ```rust
/// use bytemarshal::unmarshal::read_long;
///
/// let buffer = [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
/// assert_eq!(read_long(&buffer, 0, false)?, -2);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub mod unmarshal;

/// `bytemarshal` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible
/// operations.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::{unmarshal::read_int, Result};
///
/// fn record_id(record: &[u8]) -> Result<i32> {
///     read_int(record, 0, true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `bytemarshal` Error type
///
/// The error type for all operations in this crate, distinguishing bad transfer lengths
/// from ranges that miss the buffer.
///
/// # Examples
///
/// ```rust
/// use bytemarshal::{unmarshal::read_long, Error};
///
/// match read_long(&[0u8; 4], 0, true) {
///     Err(Error::OutOfBounds) => {} // eight bytes cannot come out of four
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
pub use error::Error;

/// Marshalling entry points re-exported at the crate root.
///
/// See [`marshal`] for the full write-side documentation.
///
/// # Example
///
/// ```rust
/// let mut buffer = [0u8; 4];
/// bytemarshal::write_int(7, &mut buffer, 0, true)?;
/// assert_eq!(buffer, [0x00, 0x00, 0x00, 0x07]);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub use marshal::{
    double_to_bits, float_to_bits, write_double, write_float, write_int, write_int_dyn,
    write_long, write_long_dyn, write_short, write_short_dyn,
};

/// Unmarshalling entry points re-exported at the crate root.
///
/// See [`unmarshal`] for the full read-side documentation.
///
/// # Example
///
/// ```rust
/// let buffer = [0x00, 0x00, 0x00, 0x07];
/// assert_eq!(bytemarshal::read_int(&buffer, 0, true)?, 7);
/// # Ok::<(), bytemarshal::Error>(())
/// ```
pub use unmarshal::{
    read_double, read_float, read_int, read_int_dyn, read_long, read_long_dyn, read_short,
    read_short_dyn,
};
