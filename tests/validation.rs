//! Integration tests for argument validation and failure behavior.
//!
//! Writers check the transfer length before bounds; readers check bounds before the
//! transfer length. Both report distinct error kinds and leave the buffer untouched
//! when they fail. These tests pin that contract, including the boundary cases right
//! at the end of the buffer and the overflow cases near `usize::MAX`.

use bytemarshal::prelude::*;

#[test]
fn write_rejects_range_past_end() {
    let mut buffer = [0u8; 8];

    assert!(matches!(
        write_short(1, &mut buffer, 7, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_int(1, &mut buffer, 5, false),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_long(1, &mut buffer, 1, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_float(1.0, &mut buffer, 6, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_double(1.0, &mut buffer, 2, false),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn read_rejects_range_past_end() {
    let buffer = [0u8; 8];

    assert!(matches!(read_short(&buffer, 7, true), Err(Error::OutOfBounds)));
    assert!(matches!(read_int(&buffer, 5, false), Err(Error::OutOfBounds)));
    assert!(matches!(read_long(&buffer, 1, true), Err(Error::OutOfBounds)));
    assert!(matches!(read_float(&buffer, 6, true), Err(Error::OutOfBounds)));
    assert!(matches!(read_double(&buffer, 2, false), Err(Error::OutOfBounds)));
}

#[test]
fn writer_checks_length_before_bounds() {
    // Both the length and the bounds are bad here; the length wins on the write path,
    // even when the buffer is empty.
    let mut buffer = [0u8; 4];
    assert!(matches!(
        write_short_dyn(1, &mut buffer, 0, true, 60),
        Err(Error::InvalidNumBytes { num_bytes: 60, max: 2 })
    ));
    assert!(matches!(
        write_int_dyn(1, &mut buffer, 0, false, 60),
        Err(Error::InvalidNumBytes { num_bytes: 60, max: 4 })
    ));
    assert!(matches!(
        write_long_dyn(1, &mut buffer, 0, true, 60),
        Err(Error::InvalidNumBytes { num_bytes: 60, max: 8 })
    ));

    let mut empty: [u8; 0] = [];
    assert!(matches!(
        write_int_dyn(1, &mut empty, 0, true, 5),
        Err(Error::InvalidNumBytes { num_bytes: 5, max: 4 })
    ));
    assert!(matches!(
        write_long_dyn(1, &mut empty, 0, true, usize::MAX),
        Err(Error::InvalidNumBytes { num_bytes: usize::MAX, max: 8 })
    ));
}

#[test]
fn reader_checks_bounds_before_length() {
    // The same oversized count reports differently depending on the buffer size.
    let small = [0u8; 16];
    assert!(matches!(
        read_short_dyn(&small, 0, true, 60, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_int_dyn(&small, 0, false, 60, false),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_long_dyn(&small, 0, true, 60, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_long_dyn(&small, 0, true, usize::MAX, false),
        Err(Error::OutOfBounds)
    ));

    let large = [0u8; 256];
    assert!(matches!(
        read_short_dyn(&large, 0, true, 3, true),
        Err(Error::InvalidNumBytes { num_bytes: 3, max: 2 })
    ));
    assert!(matches!(
        read_int_dyn(&large, 0, false, 5, false),
        Err(Error::InvalidNumBytes { num_bytes: 5, max: 4 })
    ));
    assert!(matches!(
        read_long_dyn(&large, 0, true, 9, true),
        Err(Error::InvalidNumBytes { num_bytes: 9, max: 8 })
    ));
}

#[test]
fn valid_length_can_still_miss_the_buffer() {
    let mut buffer = [0u8; 2];
    assert!(matches!(
        write_int_dyn(1, &mut buffer, 0, true, 4),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_int_dyn(&buffer, 1, true, 2, false),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn offset_overflow_is_out_of_bounds() {
    let mut buffer = [0u8; 8];

    assert!(matches!(
        write_short(1, &mut buffer, usize::MAX, true),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_long_dyn(1, &mut buffer, usize::MAX, true, 8),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_double(&buffer, usize::MAX - 7, false),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        read_short_dyn(&buffer, usize::MAX, true, 1, true),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn failed_writes_leave_buffer_untouched() {
    let mut buffer: Vec<u8> = (0..16).collect();
    let before = buffer.clone();

    assert!(write_short(-1, &mut buffer, 15, true).is_err());
    assert!(write_int(-1, &mut buffer, 13, false).is_err());
    assert!(write_long(-1, &mut buffer, 9, true).is_err());
    assert!(write_float(f32::NAN, &mut buffer, 14, true).is_err());
    assert!(write_double(f64::MAX, &mut buffer, 12, false).is_err());
    assert!(write_short_dyn(-1, &mut buffer, 0, true, 60).is_err());
    assert!(write_int_dyn(-1, &mut buffer, 15, true, 4).is_err());
    assert!(write_long_dyn(-1, &mut buffer, usize::MAX, false, 2).is_err());

    assert_eq!(buffer, before);
}

#[test]
fn empty_buffer_edge_cases() {
    let mut empty: [u8; 0] = [];

    assert!(matches!(read_short(&empty, 0, true), Err(Error::OutOfBounds)));
    assert!(matches!(
        write_short(0, &mut empty, 0, true),
        Err(Error::OutOfBounds)
    ));

    // Zero-length transfers at offset zero are valid even on an empty buffer
    write_long_dyn(-1, &mut empty, 0, true, 0).unwrap();
    assert_eq!(read_long_dyn(&empty, 0, true, 0, true).unwrap(), 0);

    // One step past the end is not
    assert!(matches!(
        read_int_dyn(&empty, 1, true, 0, false),
        Err(Error::OutOfBounds)
    ));
    assert!(matches!(
        write_int_dyn(0, &mut empty, 1, true, 0),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn boundary_transfers_succeed() {
    let mut buffer = [0u8; 8];

    write_short(0x0102, &mut buffer, 6, true).unwrap();
    assert_eq!(buffer[6..], [0x01, 0x02]);

    write_long_dyn(0x0304, &mut buffer, 6, true, 2).unwrap();
    assert_eq!(buffer[6..], [0x03, 0x04]);
    assert_eq!(read_long_dyn(&buffer, 6, true, 2, false).unwrap(), 0x0304);

    write_double(f64::MAX, &mut buffer, 0, true).unwrap();
    assert_eq!(read_double(&buffer, 0, true).unwrap(), f64::MAX);
}

#[test]
fn error_messages_name_the_problem() {
    let err = write_int_dyn(0, &mut [0u8; 4], 0, true, 9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of bytes 9; this primitive transfers at most 4"
    );

    let err = read_short(&[0u8; 1], 0, true).unwrap_err();
    assert_eq!(err.to_string(), "Out of Bound access would have occurred!");
}
