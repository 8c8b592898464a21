use crate::{
    cursor::ByteCursor,
    encodings::{MAX_BIT_WIDTH, bit_width_from_max, hybrid, plain},
    page_decoder::PageDecoder,
    types::{ColumnValues, Encoding, PhysicalType},
};
use log::debug;
use pqread_common::{error::Error, verify_data};

/// Parameters of one page-values decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRequest {
    /// Physical type of the column. Only consulted for PLAIN pages.
    pub physical_type: PhysicalType,
    pub encoding: Encoding,
    /// Number of values to decode. For PLAIN `FixedLenByteArray` this is the
    /// element byte length.
    pub value_count: usize,
    /// Bit width of RLE / bit-packed values. Ignored for PLAIN pages.
    pub bit_width: u8,
}

impl DecodeRequest {
    pub fn new(
        physical_type: PhysicalType,
        encoding: Encoding,
        value_count: usize,
        bit_width: u8,
    ) -> Self {
        Self {
            physical_type,
            encoding,
            value_count,
            bit_width,
        }
    }

    /// PLAIN values of the given physical type.
    pub fn plain(physical_type: PhysicalType, value_count: usize) -> Self {
        Self::new(physical_type, Encoding::Plain, value_count, 0)
    }

    /// RLE-encoded repetition or definition levels in `0..=max_level`.
    pub fn levels(max_level: u32, value_count: usize) -> Self {
        Self::new(
            PhysicalType::Int32,
            Encoding::Rle,
            value_count,
            bit_width_from_max(max_level),
        )
    }
}

/// Values decoded from a page, plus the number of bytes they occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPage {
    pub values: ColumnValues,
    pub bytes_consumed: usize,
}

/// Decodes hybrid-encoded integers (levels or indices) until `count` values
/// are collected.
///
/// Only `Encoding::Rle` is supported: the hybrid stream is read as a sequence
/// of length-prefixed frames until `count` values accumulate or a frame
/// yields nothing. Every frame read is consumed in full, but values past
/// `count` are never materialized. The result is shorter than `count` only
/// when the stream ends early.
pub fn decode_data(
    cursor: &mut ByteCursor,
    encoding: Encoding,
    count: usize,
    bit_width: u8,
) -> pqread_common::Result<Vec<i64>> {
    match encoding {
        Encoding::Rle => {
            let mut values = Vec::new();
            while values.len() < count {
                let limit = count - values.len();
                let encoded =
                    hybrid::read_hybrid_into(cursor, bit_width, None, &mut values, limit)?;
                if encoded == 0 {
                    break;
                }
            }
            Ok(values)
        }
        _ => {
            debug!("no hybrid decoder for encoding {encoding}");
            Err(Error::unsupported_encoding(encoding.name()))
        }
    }
}

/// Decodes `count` values of a page with the given encoding.
///
/// PLAIN pages decode as `physical_type`; RLE pages decode as 64-bit integers
/// through [`decode_data`]. Every other encoding is rejected.
pub fn decode_values(
    cursor: &mut ByteCursor,
    request: &DecodeRequest,
) -> pqread_common::Result<ColumnValues> {
    match request.encoding {
        Encoding::Plain => plain::decode_plain(cursor, request.physical_type, request.value_count),
        encoding => decode_data(cursor, encoding, request.value_count, request.bit_width)
            .map(ColumnValues::Int64),
    }
}

/// Decodes a page's values starting at `offset` within `data`.
pub fn decode_page_values(
    data: &[u8],
    offset: usize,
    request: &DecodeRequest,
) -> pqread_common::Result<DecodedPage> {
    let mut cursor = ByteCursor::with_offset(data, offset)?;
    let values = decode_values(&mut cursor, request)?;
    Ok(DecodedPage {
        values,
        bytes_consumed: cursor.position() - offset,
    })
}

/// Reads `count` raw dictionary indices from a dictionary-encoded data page.
///
/// The page body is a single bit-width byte followed by a hybrid stream that
/// runs to the end of the page, with no length prefix. Indices are returned
/// as stored; resolving them against the dictionary is up to the caller.
pub fn decode_dictionary_indices(
    cursor: &mut ByteCursor,
    count: usize,
) -> pqread_common::Result<Vec<i64>> {
    let bit_width = cursor.read_u8()?;
    verify_data!(bit_width, bit_width <= MAX_BIT_WIDTH);
    let stream_len = cursor.remaining();
    let mut indices = Vec::new();
    let encoded =
        hybrid::read_hybrid_into(cursor, bit_width, Some(stream_len), &mut indices, count)?;
    if encoded < count {
        return Err(Error::truncated("dictionary indices", count, encoded));
    }
    Ok(indices)
}

/// Decoder for pages sharing one set of [`DecodeRequest`] parameters.
#[derive(Debug, Clone)]
pub struct ValuesDecoder {
    request: DecodeRequest,
}

impl ValuesDecoder {
    pub fn new(request: DecodeRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &DecodeRequest {
        &self.request
    }
}

impl PageDecoder for ValuesDecoder {
    fn decode(&self, encoded: &[u8], offset: usize) -> pqread_common::Result<DecodedPage> {
        decode_page_values(encoded, offset, &self.request)
    }
}
