//! RLE / bit-packing hybrid stream.
//!
//! A stream is a sequence of runs, each introduced by an unsigned varint
//! header. Header bit 0 selects the run kind:
//!
//! - `0`: RLE run, `header >> 1` repetitions of one value stored in
//!   `ceil(bit_width / 8)` bytes;
//! - `1`: bit-packed run, `header >> 1` groups of 8 values, `bit_width` bytes
//!   per group.
//!
//! When the stream length is not known from the enclosing page, it is framed
//! by a 4-byte little-endian length prefix.

use super::{
    MAX_BIT_WIDTH,
    bitpacking::{self, GROUP_SIZE},
    plain, run_length,
    varint::read_unsigned_varint,
};
use crate::cursor::ByteCursor;
use log::trace;
use pqread_common::{error::Error, verify_arg, verify_data, yield_on_err};

/// One decoded run of a hybrid stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HybridRun {
    Rle { value: i64, count: usize },
    BitPacked(Vec<i64>),
}

impl HybridRun {
    pub fn len(&self) -> usize {
        match self {
            HybridRun::Rle { count, .. } => *count,
            HybridRun::BitPacked(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends at most `limit` values of the run to `target` and returns how
    /// many were appended.
    ///
    /// An RLE run header can claim billions of repeats from a handful of
    /// bytes; failing to reserve room for them is an error, not an abort.
    pub fn append_up_to(
        self,
        target: &mut Vec<i64>,
        limit: usize,
    ) -> pqread_common::Result<usize> {
        let take = self.len().min(limit);
        target.try_reserve(take).map_err(|_| {
            Error::invalid_format("hybrid run", format!("{take} values exceed available memory"))
        })?;
        match self {
            HybridRun::Rle { value, .. } => target.resize(target.len() + take, value),
            HybridRun::BitPacked(mut values) => {
                values.truncate(take);
                target.append(&mut values);
            }
        }
        Ok(take)
    }
}

/// Iterator over the runs of one framed hybrid stream.
///
/// Yields runs until the framed bytes are exhausted. After an error the
/// iterator is fused and yields nothing further.
///
/// A bit-packed run at bit width 0 carries no payload and is yielded as
/// `HybridRun::Rle { value: 0, .. }`, so its zeros are never materialized.
#[derive(Debug)]
pub struct HybridRuns<'a> {
    cursor: ByteCursor<'a>,
    bit_width: u8,
    failed: bool,
}

impl<'a> HybridRuns<'a> {
    /// Creates a run iterator over exactly the bytes of `cursor`.
    pub fn new(cursor: ByteCursor<'a>, bit_width: u8) -> pqread_common::Result<Self> {
        verify_arg!(bit_width, bit_width <= MAX_BIT_WIDTH);
        Ok(Self {
            cursor,
            bit_width,
            failed: false,
        })
    }

    fn read_run(&mut self) -> pqread_common::Result<HybridRun> {
        let header = read_unsigned_varint(&mut self.cursor)?;
        trace!("hybrid run header {header:#x}, bit width {}", self.bit_width);
        if header & 1 == 0 {
            let (value, count) =
                run_length::read_rle_run(&mut self.cursor, header, self.bit_width)?;
            Ok(HybridRun::Rle { value, count })
        } else if self.bit_width == 0 {
            let count = ((header >> 1) as usize).saturating_mul(GROUP_SIZE);
            Ok(HybridRun::Rle { value: 0, count })
        } else {
            let values =
                bitpacking::decode_bit_packed_run(&mut self.cursor, header, self.bit_width)?;
            Ok(HybridRun::BitPacked(values))
        }
    }
}

impl Iterator for HybridRuns<'_> {
    type Item = pqread_common::Result<HybridRun>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_empty() {
            return None;
        }
        let run = yield_on_err!(self.read_run(), fuse = self.failed);
        Some(Ok(run))
    }
}

/// Slices the next hybrid stream out of `cursor`.
///
/// With `length` given, the stream spans exactly that many bytes. Otherwise a
/// 4-byte little-endian length prefix is read first.
pub fn frame_hybrid<'a>(
    cursor: &mut ByteCursor<'a>,
    length: Option<usize>,
) -> pqread_common::Result<ByteCursor<'a>> {
    let length = match length {
        Some(length) => length,
        None => {
            let prefix = plain::read_plain_value::<i32>(cursor)?;
            verify_data!(prefix, prefix >= 0);
            prefix as usize
        }
    };
    trace!("hybrid stream length {length}");
    cursor.split_to(length)
}

/// Reads one hybrid stream, appending at most `limit` of its values to
/// `target`.
///
/// The whole stream is consumed and validated regardless of `limit`. Returns
/// the number of values the stream encodes, which may exceed what was
/// appended.
pub fn read_hybrid_into(
    cursor: &mut ByteCursor,
    bit_width: u8,
    length: Option<usize>,
    target: &mut Vec<i64>,
    limit: usize,
) -> pqread_common::Result<usize> {
    let frame = frame_hybrid(cursor, length)?;
    let mut encoded = 0usize;
    let mut appended = 0usize;
    for run in HybridRuns::new(frame, bit_width)? {
        let run = run?;
        encoded = encoded.saturating_add(run.len());
        appended += run.append_up_to(target, limit - appended)?;
    }
    Ok(encoded)
}

/// Decodes one hybrid stream into the concatenation of all its runs.
pub fn decode_hybrid(
    cursor: &mut ByteCursor,
    bit_width: u8,
    length: Option<usize>,
) -> pqread_common::Result<Vec<i64>> {
    let mut values = Vec::new();
    read_hybrid_into(cursor, bit_width, length, &mut values, usize::MAX)?;
    Ok(values)
}
