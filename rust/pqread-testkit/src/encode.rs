//! Encoders for building page fixtures.
//!
//! These mirror the on-disk layouts the decoders read, so tests can
//! round-trip arbitrary values instead of hand-assembling bytes.

/// Appends `value` as an unsigned LEB128 varint.
pub fn encode_unsigned_varint(mut value: u32, target: &mut Vec<u8>) {
    while value >= 0x80 {
        target.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    target.push(value as u8);
}

/// Packs `values` LSB-first at `bit_width` bits each.
///
/// The input is zero-padded to a multiple of 8 values, so the output is
/// always `ceil(len / 8) * bit_width` bytes. Bits of a value above
/// `bit_width` are discarded.
pub fn pack_bits(values: &[u32], bit_width: u8) -> Vec<u8> {
    assert!(bit_width <= 32);
    let num_groups = values.len().div_ceil(8);
    let mut packed = Vec::with_capacity(num_groups * bit_width as usize);
    if bit_width == 0 {
        return packed;
    }

    let width = bit_width as u32;
    let mask = (1u64 << width) - 1;
    let padding = num_groups * 8 - values.len();
    let mut acc = 0u64;
    let mut acc_bits = 0u32;
    for value in values
        .iter()
        .copied()
        .chain(std::iter::repeat_n(0, padding))
    {
        acc |= (u64::from(value) & mask) << acc_bits;
        acc_bits += width;
        while acc_bits >= 8 {
            packed.push(acc as u8);
            acc >>= 8;
            acc_bits -= 8;
        }
    }
    debug_assert_eq!(acc_bits, 0);
    packed
}

/// Builds the body of one RLE / bit-packing hybrid stream, run by run.
#[derive(Debug, Clone)]
pub struct HybridEncoder {
    bit_width: u8,
    buffer: Vec<u8>,
}

impl HybridEncoder {
    pub fn new(bit_width: u8) -> Self {
        assert!(bit_width <= 32);
        Self {
            bit_width,
            buffer: Vec::new(),
        }
    }

    /// Appends an RLE run of `count` copies of `value`.
    pub fn rle_run(&mut self, value: u32, count: usize) -> &mut Self {
        let header = u32::try_from(count << 1).expect("run too long");
        encode_unsigned_varint(header, &mut self.buffer);
        let width = (self.bit_width as usize).div_ceil(8);
        self.buffer.extend_from_slice(&value.to_le_bytes()[..width]);
        self
    }

    /// Appends a bit-packed run, zero-padding `values` to whole groups of 8.
    pub fn bit_packed_run(&mut self, values: &[u32]) -> &mut Self {
        let num_groups = values.len().div_ceil(8);
        let header = u32::try_from((num_groups << 1) | 1).expect("run too long");
        encode_unsigned_varint(header, &mut self.buffer);
        self.buffer.extend(pack_bits(values, self.bit_width));
        self
    }

    /// Appends runs encoding `values`: repeats of 8 or more become RLE runs,
    /// everything else is bit-packed.
    ///
    /// Only the final bit-packed run can be padded, so the decoded stream is
    /// `values` followed by at most 7 zeros.
    pub fn encode_all(&mut self, values: &[u32]) -> &mut Self {
        let mut pending: Vec<u32> = Vec::new();
        let mut pos = 0;
        while pos < values.len() {
            let mut end = pos + 1;
            while end < values.len() && values[end] == values[pos] {
                end += 1;
            }
            // Top up pending literals to a whole group from the repeat
            // before flushing them, so no padding lands mid-stream.
            let fill = (8 - pending.len() % 8) % 8;
            if end - pos >= fill + 8 {
                pending.extend(std::iter::repeat_n(values[pos], fill));
                if !pending.is_empty() {
                    self.bit_packed_run(&pending);
                    pending.clear();
                }
                self.rle_run(values[pos], end - pos - fill);
            } else {
                pending.extend_from_slice(&values[pos..end]);
            }
            pos = end;
        }
        if !pending.is_empty() {
            self.bit_packed_run(&pending);
        }
        self
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }
}

/// Prepends the 4-byte little-endian length of `body`.
pub fn with_length_prefix(body: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(body.len() + 4);
    framed.extend_from_slice(&(body.len() as u32).to_le_bytes());
    framed.extend_from_slice(body);
    framed
}

pub fn encode_plain_i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn encode_plain_i64s(values: &[i64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn encode_plain_f32s(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn encode_plain_f64s(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// PLAIN booleans: one bit per value, LSB-first, last byte zero-padded.
pub fn encode_plain_booleans(values: &[bool]) -> Vec<u8> {
    let bits: Vec<u32> = values.iter().map(|&b| b as u32).collect();
    let mut packed = pack_bits(&bits, 1);
    packed.truncate(values.len().div_ceil(8));
    packed
}

pub fn encode_plain_byte_arrays(values: &[Vec<u8>]) -> Vec<u8> {
    let mut encoded = Vec::new();
    for value in values {
        encoded.extend_from_slice(&(value.len() as u32).to_le_bytes());
        encoded.extend_from_slice(value);
    }
    encoded
}
