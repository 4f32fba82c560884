//! Integration tests for truncated writes and widening reads.
//!
//! Truncated transfers store only the low-order bytes of a value's two's-complement
//! representation and recover them with sign or zero extension. These tests pin the
//! stored layouts byte for byte, check the extension arithmetic against literal
//! expectations, and round-trip every value that fits the narrowed width.

use bytemarshal::prelude::*;

#[test]
fn single_byte_stores_low_byte_in_both_orders() {
    // 25000 = 0x61a8; only 0xa8 survives a one byte transfer
    let mut be = [0u8; 2];
    let mut le = [0u8; 2];
    write_short_dyn(25000, &mut be, 0, true, 1).unwrap();
    write_short_dyn(25000, &mut le, 0, false, 1).unwrap();

    assert_eq!(be, [0xa8, 0x00]);
    assert_eq!(le, [0xa8, 0x00]);
}

#[test]
fn short_partial_layouts() {
    let mut buffer = [0u8; 2];

    write_short_dyn(0x6dcd, &mut buffer, 0, true, 2).unwrap();
    assert_eq!(buffer, [0x6d, 0xcd]);

    write_short_dyn(0x6dcd, &mut buffer, 0, false, 2).unwrap();
    assert_eq!(buffer, [0xcd, 0x6d]);
}

#[test]
fn int_partial_layouts_per_count() {
    let value = 0x7654_3210;

    let mut buffer = [0xeeu8; 4];
    write_int_dyn(value, &mut buffer, 0, true, 1).unwrap();
    assert_eq!(buffer, [0x10, 0xee, 0xee, 0xee]);

    let mut buffer = [0xeeu8; 4];
    write_int_dyn(value, &mut buffer, 0, true, 2).unwrap();
    assert_eq!(buffer, [0x32, 0x10, 0xee, 0xee]);

    let mut buffer = [0xeeu8; 4];
    write_int_dyn(value, &mut buffer, 0, true, 3).unwrap();
    assert_eq!(buffer, [0x54, 0x32, 0x10, 0xee]);

    let mut buffer = [0xeeu8; 4];
    write_int_dyn(value, &mut buffer, 0, true, 4).unwrap();
    assert_eq!(buffer, [0x76, 0x54, 0x32, 0x10]);

    let mut buffer = [0xeeu8; 4];
    write_int_dyn(value, &mut buffer, 0, false, 3).unwrap();
    assert_eq!(buffer, [0x10, 0x32, 0x54, 0xee]);
}

#[test]
fn long_extreme_truncations() {
    // The low half of i64::MIN is all zero
    let mut buffer = [0xeeu8; 4];
    write_long_dyn(i64::MIN, &mut buffer, 0, true, 4).unwrap();
    assert_eq!(buffer, [0x00, 0x00, 0x00, 0x00]);

    // -1 stores all ones at every count
    for num_bytes in 0..=8usize {
        let mut buffer = [0u8; 8];
        write_long_dyn(-1, &mut buffer, 0, true, num_bytes).unwrap();
        let (ones, zeros) = buffer.split_at(num_bytes);
        assert!(ones.iter().all(|&b| b == 0xff));
        assert!(zeros.iter().all(|&b| b == 0x00));
    }
}

#[test]
fn same_low_bytes_store_identically() {
    // High-order bytes of the value never reach the buffer
    let mut a = [0u8; 2];
    let mut b = [0u8; 2];
    write_int_dyn(0x1122_3344, &mut a, 0, true, 2).unwrap();
    write_int_dyn(0x5566_3344u32 as i32, &mut b, 0, true, 2).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, [0x33, 0x44]);
}

#[test]
fn widening_reads_zero_vs_sign() {
    let buffer = [0xff];
    assert_eq!(read_short_dyn(&buffer, 0, true, 1, false).unwrap(), 255);
    assert_eq!(read_short_dyn(&buffer, 0, true, 1, true).unwrap(), -1);
    assert_eq!(read_int_dyn(&buffer, 0, false, 1, false).unwrap(), 255);
    assert_eq!(read_int_dyn(&buffer, 0, false, 1, true).unwrap(), -1);
    assert_eq!(read_long_dyn(&buffer, 0, true, 1, false).unwrap(), 255);
    assert_eq!(read_long_dyn(&buffer, 0, true, 1, true).unwrap(), -1);

    // Sign bit clear: both modes agree
    let buffer = [0x7f];
    assert_eq!(read_short_dyn(&buffer, 0, true, 1, true).unwrap(), 127);
    assert_eq!(read_short_dyn(&buffer, 0, true, 1, false).unwrap(), 127);

    let buffer = [0x80, 0x00];
    assert_eq!(read_int_dyn(&buffer, 0, true, 2, false).unwrap(), 32768);
    assert_eq!(read_int_dyn(&buffer, 0, true, 2, true).unwrap(), -32768);
}

#[test]
fn three_byte_negative_roundtrip() {
    let mut field = [0u8; 3];
    write_int_dyn(-5, &mut field, 0, true, 3).unwrap();
    assert_eq!(field, [0xff, 0xff, 0xfb]);

    assert_eq!(read_int_dyn(&field, 0, true, 3, true).unwrap(), -5);
    assert_eq!(read_int_dyn(&field, 0, true, 3, false).unwrap(), 0x00ff_fffb);
}

#[test]
fn short_fits_roundtrip_with_sign_extension() {
    let mut buffer = [0u8; 2];
    for num_bytes in 1..=2usize {
        let lo = -(1i128 << (8 * num_bytes - 1));
        let hi = (1i128 << (8 * num_bytes - 1)) - 1;
        for value in [lo, lo + 1, -1, 0, 1, hi - 1, hi] {
            let value = value as i16;
            for big_endian in [true, false] {
                write_short_dyn(value, &mut buffer, 0, big_endian, num_bytes).unwrap();
                assert_eq!(
                    read_short_dyn(&buffer, 0, big_endian, num_bytes, true).unwrap(),
                    value,
                    "value {value} through {num_bytes} bytes"
                );
            }
        }
    }
}

#[test]
fn int_fits_roundtrip_with_sign_extension() {
    let mut buffer = [0u8; 4];
    for num_bytes in 1..=4usize {
        let lo = -(1i128 << (8 * num_bytes - 1));
        let hi = (1i128 << (8 * num_bytes - 1)) - 1;
        for value in [lo, lo + 1, -1, 0, 1, hi - 1, hi] {
            let value = value as i32;
            for big_endian in [true, false] {
                write_int_dyn(value, &mut buffer, 0, big_endian, num_bytes).unwrap();
                assert_eq!(
                    read_int_dyn(&buffer, 0, big_endian, num_bytes, true).unwrap(),
                    value,
                    "value {value} through {num_bytes} bytes"
                );
            }
        }
    }
}

#[test]
fn long_fits_roundtrip_with_sign_extension() {
    let mut buffer = [0u8; 8];
    for num_bytes in 1..=8usize {
        let lo = -(1i128 << (8 * num_bytes - 1));
        let hi = (1i128 << (8 * num_bytes - 1)) - 1;
        for value in [lo, lo + 1, -1, 0, 1, hi - 1, hi] {
            let value = value as i64;
            for big_endian in [true, false] {
                write_long_dyn(value, &mut buffer, 0, big_endian, num_bytes).unwrap();
                assert_eq!(
                    read_long_dyn(&buffer, 0, big_endian, num_bytes, true).unwrap(),
                    value,
                    "value {value} through {num_bytes} bytes"
                );
            }
        }
    }
}

#[test]
fn nonnegative_fits_roundtrip_with_zero_extension() {
    let mut buffer = [0u8; 8];
    for num_bytes in 1..=8usize {
        let hi = (1i128 << (8 * num_bytes - 1)) - 1;
        for value in [0, 1, hi / 2, hi] {
            let value = value as i64;
            write_long_dyn(value, &mut buffer, 0, true, num_bytes).unwrap();
            assert_eq!(
                read_long_dyn(&buffer, 0, true, num_bytes, false).unwrap(),
                value
            );
        }
    }
}

#[test]
fn full_width_dyn_matches_fixed() {
    let mut fixed = [0u8; 8];
    let mut dynamic = [0u8; 8];

    write_long(-987_654_321, &mut fixed, 0, true).unwrap();
    write_long_dyn(-987_654_321, &mut dynamic, 0, true, 8).unwrap();
    assert_eq!(fixed, dynamic);

    assert_eq!(
        read_long(&fixed, 0, true).unwrap(),
        read_long_dyn(&fixed, 0, true, 8, false).unwrap()
    );
}

#[test]
fn zero_count_transfers_nothing() {
    let mut buffer = [0xee; 4];
    write_short_dyn(i16::MAX, &mut buffer, 4, true, 0).unwrap();
    write_int_dyn(i32::MIN, &mut buffer, 0, false, 0).unwrap();
    write_long_dyn(-1, &mut buffer, 2, true, 0).unwrap();
    assert_eq!(buffer, [0xee; 4]);

    assert_eq!(read_short_dyn(&buffer, 4, true, 0, true).unwrap(), 0);
    assert_eq!(read_int_dyn(&buffer, 0, false, 0, false).unwrap(), 0);
    assert_eq!(read_long_dyn(&buffer, 2, true, 0, true).unwrap(), 0);
}
