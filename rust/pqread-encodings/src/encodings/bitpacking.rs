//! Unpacking of fixed-width unsigned integers packed LSB-first across byte
//! boundaries, in groups of 8 values.

use super::MAX_BIT_WIDTH;
use crate::cursor::ByteCursor;
use pqread_common::{error::Error, verify_arg};

/// Number of values in one bit-packed group.
pub const GROUP_SIZE: usize = 8;

/// Decodes one bit-packed run given its raw hybrid header.
///
/// The header's bits above bit 0 hold the number of 8-value groups, so the run
/// yields `(header >> 1) * 8` values and consumes `(header >> 1) * bit_width`
/// bytes. Bit 0 is the run-kind flag and is ignored here.
pub fn decode_bit_packed_run(
    cursor: &mut ByteCursor,
    header: u32,
    bit_width: u8,
) -> pqread_common::Result<Vec<i64>> {
    unpack_groups(cursor, (header >> 1) as usize, bit_width)
}

/// Unpacks `num_groups * 8` values of `bit_width` bits each.
///
/// A zero bit width yields zeros without consuming any bytes.
pub fn unpack_groups(
    cursor: &mut ByteCursor,
    num_groups: usize,
    bit_width: u8,
) -> pqread_common::Result<Vec<i64>> {
    verify_arg!(bit_width, bit_width <= MAX_BIT_WIDTH);
    let count = num_groups
        .checked_mul(GROUP_SIZE)
        .ok_or_else(|| Error::invalid_arg("num_groups", "run length overflows usize"))?;
    if bit_width == 0 {
        let mut values = Vec::new();
        values.try_reserve_exact(count).map_err(|_| {
            let message = format!("{count} values exceed available memory");
            Error::invalid_format("bit-packed run", message)
        })?;
        values.resize(count, 0);
        return Ok(values);
    }

    // count * bit_width / 8, exact since count is a multiple of 8.
    let byte_count = num_groups
        .checked_mul(bit_width as usize)
        .ok_or_else(|| Error::invalid_arg("num_groups", "run size overflows usize"))?;
    let packed = cursor.read_bytes(byte_count)?;

    let mut values = Vec::with_capacity(count);
    unpack_into(packed, bit_width, &mut values);
    debug_assert_eq!(values.len(), count);
    Ok(values)
}

/// Unpacks every complete `bit_width`-bit value found in `packed` and appends
/// it to `target`.
///
/// Bit `i` of value `v` is bit `(v * bit_width + i) % 8` of byte
/// `(v * bit_width + i) / 8`. Bytes are fed into the accumulator one at a
/// time, so a value may straddle any number of bytes; trailing bits that do
/// not complete a value are discarded.
pub(crate) fn unpack_into(packed: &[u8], bit_width: u8, target: &mut Vec<i64>) {
    debug_assert!(bit_width > 0 && bit_width <= MAX_BIT_WIDTH);
    let width = bit_width as u32;
    let mask = (1u64 << width) - 1;

    // Holds fewer than `width` pending bits before each byte is added,
    // so at most 39 bits are ever live.
    let mut acc = 0u64;
    let mut acc_bits = 0u32;
    for &byte in packed {
        acc |= u64::from(byte) << acc_bits;
        acc_bits += 8;
        while acc_bits >= width {
            target.push((acc & mask) as i64);
            acc >>= width;
            acc_bits -= width;
        }
    }
}
