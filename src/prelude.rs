//! # bytemarshal Prelude
//!
//! This module provides a convenient prelude for the full operation surface of the
//! bytemarshal library. Import this module to get quick access to every marshalling
//! and unmarshalling function along with the error types.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bytemarshal operations
pub use crate::Error;

/// The result type used throughout bytemarshal
pub use crate::Result;

// ================================================================================================
// Marshalling
// ================================================================================================

/// Full-width integer writes
pub use crate::marshal::{write_int, write_long, write_short};

/// Truncated integer writes
pub use crate::marshal::{write_int_dyn, write_long_dyn, write_short_dyn};

/// IEEE-754 writes and the NaN-canonical bit conversions behind them
pub use crate::marshal::{double_to_bits, float_to_bits, write_double, write_float};

// ================================================================================================
// Unmarshalling
// ================================================================================================

/// Full-width integer reads
pub use crate::unmarshal::{read_int, read_long, read_short};

/// Widening integer reads
pub use crate::unmarshal::{read_int_dyn, read_long_dyn, read_short_dyn};

/// IEEE-754 reads
pub use crate::unmarshal::{read_double, read_float};
