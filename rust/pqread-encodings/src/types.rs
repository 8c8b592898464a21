use pqread_common::error::Error;
use std::fmt;

/// Physical (storage) type of a column, as tagged in the column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PhysicalType {
    Boolean = 0,
    Int32 = 1,
    Int64 = 2,
    Int96 = 3,
    Float = 4,
    Double = 5,
    ByteArray = 6,
    FixedLenByteArray = 7,
}

impl PhysicalType {
    pub fn name(&self) -> &'static str {
        match self {
            PhysicalType::Boolean => "BOOLEAN",
            PhysicalType::Int32 => "INT32",
            PhysicalType::Int64 => "INT64",
            PhysicalType::Int96 => "INT96",
            PhysicalType::Float => "FLOAT",
            PhysicalType::Double => "DOUBLE",
            PhysicalType::ByteArray => "BYTE_ARRAY",
            PhysicalType::FixedLenByteArray => "FIXED_LEN_BYTE_ARRAY",
        }
    }
}

impl TryFrom<i32> for PhysicalType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PhysicalType::Boolean),
            1 => Ok(PhysicalType::Int32),
            2 => Ok(PhysicalType::Int64),
            3 => Ok(PhysicalType::Int96),
            4 => Ok(PhysicalType::Float),
            5 => Ok(PhysicalType::Double),
            6 => Ok(PhysicalType::ByteArray),
            7 => Ok(PhysicalType::FixedLenByteArray),
            _ => Err(Error::unsupported_type(format!("tag {value}"))),
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encoding tag of a page's values or levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Encoding {
    Plain = 0,
    PlainDictionary = 2,
    Rle = 3,
    BitPacked = 4,
    DeltaBinaryPacked = 5,
    DeltaLengthByteArray = 6,
    DeltaByteArray = 7,
    RleDictionary = 8,
    ByteStreamSplit = 9,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Plain => "PLAIN",
            Encoding::PlainDictionary => "PLAIN_DICTIONARY",
            Encoding::Rle => "RLE",
            Encoding::BitPacked => "BIT_PACKED",
            Encoding::DeltaBinaryPacked => "DELTA_BINARY_PACKED",
            Encoding::DeltaLengthByteArray => "DELTA_LENGTH_BYTE_ARRAY",
            Encoding::DeltaByteArray => "DELTA_BYTE_ARRAY",
            Encoding::RleDictionary => "RLE_DICTIONARY",
            Encoding::ByteStreamSplit => "BYTE_STREAM_SPLIT",
        }
    }
}

impl TryFrom<i32> for Encoding {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Encoding::Plain),
            2 => Ok(Encoding::PlainDictionary),
            3 => Ok(Encoding::Rle),
            4 => Ok(Encoding::BitPacked),
            5 => Ok(Encoding::DeltaBinaryPacked),
            6 => Ok(Encoding::DeltaLengthByteArray),
            7 => Ok(Encoding::DeltaByteArray),
            8 => Ok(Encoding::RleDictionary),
            9 => Ok(Encoding::ByteStreamSplit),
            _ => Err(Error::unsupported_encoding(format!("tag {value}"))),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decoded element.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    FixedLenByteArray(Vec<u8>),
}

/// A decoded sequence of values, one variant per physical result kind.
///
/// Hybrid (RLE / bit-packed) decoding always produces `Int64`: levels and
/// dictionary indices are widened to 64 bits regardless of the column type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Boolean(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<u8>>),
    FixedLenByteArray(Vec<Vec<u8>>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Boolean(v) => v.len(),
            ColumnValues::Int32(v) => v.len(),
            ColumnValues::Int64(v) => v.len(),
            ColumnValues::Float(v) => v.len(),
            ColumnValues::Double(v) => v.len(),
            ColumnValues::ByteArray(v) => v.len(),
            ColumnValues::FixedLenByteArray(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical type whose result kind this sequence holds.
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            ColumnValues::Boolean(_) => PhysicalType::Boolean,
            ColumnValues::Int32(_) => PhysicalType::Int32,
            ColumnValues::Int64(_) => PhysicalType::Int64,
            ColumnValues::Float(_) => PhysicalType::Float,
            ColumnValues::Double(_) => PhysicalType::Double,
            ColumnValues::ByteArray(_) => PhysicalType::ByteArray,
            ColumnValues::FixedLenByteArray(_) => PhysicalType::FixedLenByteArray,
        }
    }

    pub fn get(&self, index: usize) -> Option<DecodedValue> {
        match self {
            ColumnValues::Boolean(v) => v.get(index).copied().map(DecodedValue::Boolean),
            ColumnValues::Int32(v) => v.get(index).copied().map(DecodedValue::Int32),
            ColumnValues::Int64(v) => v.get(index).copied().map(DecodedValue::Int64),
            ColumnValues::Float(v) => v.get(index).copied().map(DecodedValue::Float),
            ColumnValues::Double(v) => v.get(index).copied().map(DecodedValue::Double),
            ColumnValues::ByteArray(v) => v.get(index).cloned().map(DecodedValue::ByteArray),
            ColumnValues::FixedLenByteArray(v) => {
                v.get(index).cloned().map(DecodedValue::FixedLenByteArray)
            }
        }
    }

    pub fn into_values(self) -> Vec<DecodedValue> {
        match self {
            ColumnValues::Boolean(v) => v.into_iter().map(DecodedValue::Boolean).collect(),
            ColumnValues::Int32(v) => v.into_iter().map(DecodedValue::Int32).collect(),
            ColumnValues::Int64(v) => v.into_iter().map(DecodedValue::Int64).collect(),
            ColumnValues::Float(v) => v.into_iter().map(DecodedValue::Float).collect(),
            ColumnValues::Double(v) => v.into_iter().map(DecodedValue::Double).collect(),
            ColumnValues::ByteArray(v) => v.into_iter().map(DecodedValue::ByteArray).collect(),
            ColumnValues::FixedLenByteArray(v) => v
                .into_iter()
                .map(DecodedValue::FixedLenByteArray)
                .collect(),
        }
    }
}
