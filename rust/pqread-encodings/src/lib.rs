//! Decoding of column page values from their on-disk encodings: PLAIN,
//! RLE / bit-packing hybrid streams and the varints that frame them.

pub mod cursor;
pub mod encodings;
pub mod page_decoder;
pub mod types;
pub mod values_decoder;

pub use cursor::ByteCursor;
pub use encodings::bit_width_from_max;
pub use types::{ColumnValues, DecodedValue, Encoding, PhysicalType};
pub use values_decoder::{
    DecodeRequest, DecodedPage, ValuesDecoder, decode_data, decode_dictionary_indices,
    decode_page_values, decode_values,
};
