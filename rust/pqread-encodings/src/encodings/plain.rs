//! PLAIN decoding: values stored back to back with no framing.

use super::bitpacking::{self, GROUP_SIZE};
use crate::{
    cursor::ByteCursor,
    types::{ColumnValues, PhysicalType},
};
use log::debug;
use num_traits::FromBytes;
use pqread_common::{error::Error, verify_arg};

/// Fixed-size little-endian value that can be read from a PLAIN page.
pub trait PlainValue: Copy + Send + Sync + 'static {
    const SIZE: usize;

    fn read_from(src: &[u8]) -> Self;
}

macro_rules! impl_plain_value {
    ($T:ty) => {
        impl PlainValue for $T {
            const SIZE: usize = std::mem::size_of::<$T>();

            fn read_from(src: &[u8]) -> $T {
                let mut b = [0u8; Self::SIZE];
                b.copy_from_slice(&src[..Self::SIZE]);
                <$T as FromBytes>::from_le_bytes(&b)
            }
        }
    };
}

impl_plain_value!(i32);
impl_plain_value!(i64);
impl_plain_value!(f32);
impl_plain_value!(f64);

pub fn read_plain_value<T: PlainValue>(cursor: &mut ByteCursor) -> pqread_common::Result<T> {
    Ok(T::read_from(cursor.read_bytes(T::SIZE)?))
}

/// Reads `count` fixed-size values.
pub fn decode_plain_values<T: PlainValue>(
    cursor: &mut ByteCursor,
    count: usize,
) -> pqread_common::Result<Vec<T>> {
    let byte_count = count
        .checked_mul(T::SIZE)
        .ok_or_else(|| Error::invalid_arg("count", "byte size overflows usize"))?;
    let bytes = cursor.read_bytes(byte_count)?;
    Ok(bytes.chunks_exact(T::SIZE).map(T::read_from).collect())
}

/// Reads `count` booleans through the bit-packed decoder at width 1.
///
/// PLAIN booleans are a single bit-packed run without a header of its own, so
/// one is synthesized here. The header carries the number of 8-value groups,
/// not the boolean count: `ceil(count / 8)` groups are unpacked and the
/// padding bits of the last group are dropped.
pub fn decode_plain_booleans(
    cursor: &mut ByteCursor,
    count: usize,
) -> pqread_common::Result<Vec<bool>> {
    let num_groups = count.div_ceil(GROUP_SIZE);
    verify_arg!(count, num_groups <= (u32::MAX >> 1) as usize);
    let header = ((num_groups as u32) << 1) | 1;

    let mut bits = bitpacking::decode_bit_packed_run(cursor, header, 1)?;
    bits.truncate(count);
    Ok(bits.into_iter().map(|bit| bit != 0).collect())
}

/// Reads `count` byte arrays, each prefixed with its 4-byte little-endian
/// length.
pub fn decode_plain_byte_arrays(
    cursor: &mut ByteCursor,
    count: usize,
) -> pqread_common::Result<Vec<Vec<u8>>> {
    let mut values = Vec::with_capacity(count.min(cursor.remaining() / 4));
    for _ in 0..count {
        let len = cursor.read_u32_le()? as usize;
        values.push(cursor.read_bytes(len)?.to_vec());
    }
    Ok(values)
}

/// Reads a single FIXED_LEN_BYTE_ARRAY element of `fixed_length` bytes.
///
/// This is what [`decode_plain`] does for `FixedLenByteArray`: the requested
/// count is taken as the element byte length and exactly one element is
/// returned. Use [`decode_plain_fixed_len`] to read a run of elements.
pub fn decode_plain_fixed_len_single(
    cursor: &mut ByteCursor,
    fixed_length: usize,
) -> pqread_common::Result<Vec<u8>> {
    Ok(cursor.read_bytes(fixed_length)?.to_vec())
}

/// Reads `count` FIXED_LEN_BYTE_ARRAY elements of `type_length` bytes each.
pub fn decode_plain_fixed_len(
    cursor: &mut ByteCursor,
    type_length: usize,
    count: usize,
) -> pqread_common::Result<Vec<Vec<u8>>> {
    let byte_count = type_length
        .checked_mul(count)
        .ok_or_else(|| Error::invalid_arg("count", "byte size overflows usize"))?;
    let bytes = cursor.read_bytes(byte_count)?;
    if type_length == 0 {
        return Ok(vec![Vec::new(); count]);
    }
    Ok(bytes.chunks_exact(type_length).map(<[u8]>::to_vec).collect())
}

/// Decodes `count` PLAIN values of the given physical type.
///
/// For `FixedLenByteArray`, `count` is the element byte length and the result
/// holds one element (see [`decode_plain_fixed_len_single`]).
pub fn decode_plain(
    cursor: &mut ByteCursor,
    physical_type: PhysicalType,
    count: usize,
) -> pqread_common::Result<ColumnValues> {
    let values = match physical_type {
        PhysicalType::Boolean => ColumnValues::Boolean(decode_plain_booleans(cursor, count)?),
        PhysicalType::Int32 => ColumnValues::Int32(decode_plain_values(cursor, count)?),
        PhysicalType::Int64 => ColumnValues::Int64(decode_plain_values(cursor, count)?),
        PhysicalType::Float => ColumnValues::Float(decode_plain_values(cursor, count)?),
        PhysicalType::Double => ColumnValues::Double(decode_plain_values(cursor, count)?),
        PhysicalType::ByteArray => {
            ColumnValues::ByteArray(decode_plain_byte_arrays(cursor, count)?)
        }
        PhysicalType::FixedLenByteArray => ColumnValues::FixedLenByteArray(vec![
            decode_plain_fixed_len_single(cursor, count)?,
        ]),
        PhysicalType::Int96 => {
            debug!("no plain decoder for physical type {physical_type}");
            return Err(Error::unsupported_type(physical_type.name()));
        }
    };
    Ok(values)
}
