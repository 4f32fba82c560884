#![no_main]

use bytemarshal::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 11 {
        return;
    }

    let offset = data[0] as usize;
    let num_bytes = data[1] as usize;
    let big_endian = data[2] & 1 != 0;
    let sign_extend = data[2] & 2 != 0;

    let mut value = [0u8; 8];
    value.copy_from_slice(&data[3..11]);
    let value = i64::from_le_bytes(value);

    let mut buffer = data[11..].to_vec();
    let before = buffer.clone();

    let _ = read_short(&buffer, offset, big_endian);
    let _ = read_int(&buffer, offset, big_endian);
    let _ = read_long(&buffer, offset, big_endian);
    let _ = read_float(&buffer, offset, big_endian);
    let _ = read_double(&buffer, offset, big_endian);
    let _ = read_short_dyn(&buffer, offset, big_endian, num_bytes, sign_extend);
    let _ = read_int_dyn(&buffer, offset, big_endian, num_bytes, sign_extend);
    let _ = read_long_dyn(&buffer, offset, big_endian, num_bytes, sign_extend);

    // A failing write must leave the buffer untouched
    if write_long_dyn(value, &mut buffer, offset, big_endian, num_bytes).is_err() {
        assert_eq!(buffer, before);
    }

    // A full-width write that succeeds must read back identically
    if write_long(value, &mut buffer, offset, big_endian).is_ok() {
        assert_eq!(read_long(&buffer, offset, big_endian).unwrap(), value);
    }
    if write_int(value as i32, &mut buffer, offset, big_endian).is_ok() {
        assert_eq!(read_int(&buffer, offset, big_endian).unwrap(), value as i32);
    }
    if write_short(value as i16, &mut buffer, offset, big_endian).is_ok() {
        assert_eq!(read_short(&buffer, offset, big_endian).unwrap(), value as i16);
    }
});
