//! Page value encodings: PLAIN, RLE runs, bit-packed runs, the hybrid stream
//! combining the two, and the varints framing it.

pub mod bitpacking;
pub mod hybrid;
pub mod plain;
pub mod run_length;
pub mod varint;

/// Widest integer the RLE and bit-packed paths decode.
pub const MAX_BIT_WIDTH: u8 = 32;

/// Number of bits needed to store values in `0..=max`, i.e.
/// `ceil(log2(max + 1))`.
///
/// Used to derive the level bit width from the maximum repetition or
/// definition level, and the index bit width from the dictionary size.
pub fn bit_width_from_max(max: u32) -> u8 {
    (u32::BITS - max.leading_zeros()) as u8
}
