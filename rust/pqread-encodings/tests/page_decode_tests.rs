use pqread_common::error::ErrorKind;
use pqread_encodings::{
    ByteCursor, ColumnValues, DecodeRequest, DecodedValue, Encoding, PhysicalType,
    decode_data, decode_page_values, decode_values,
};
use pqread_testkit::{
    data_gen,
    encode::{self, HybridEncoder},
};

#[test]
fn test_plain_round_trip_all_types() {
    let count = 257;

    let i32s = data_gen::random_i32s(count);
    let i64s = data_gen::random_i64s(count);
    let f32s = data_gen::random_f32s(count);
    let f64s = data_gen::random_f64s(count);
    let bools = data_gen::random_booleans(count);
    let arrays = data_gen::random_byte_arrays(count, 40);

    let cases = [
        (
            PhysicalType::Int32,
            encode::encode_plain_i32s(&i32s),
            ColumnValues::Int32(i32s),
        ),
        (
            PhysicalType::Int64,
            encode::encode_plain_i64s(&i64s),
            ColumnValues::Int64(i64s),
        ),
        (
            PhysicalType::Float,
            encode::encode_plain_f32s(&f32s),
            ColumnValues::Float(f32s),
        ),
        (
            PhysicalType::Double,
            encode::encode_plain_f64s(&f64s),
            ColumnValues::Double(f64s),
        ),
        (
            PhysicalType::Boolean,
            encode::encode_plain_booleans(&bools),
            ColumnValues::Boolean(bools),
        ),
        (
            PhysicalType::ByteArray,
            encode::encode_plain_byte_arrays(&arrays),
            ColumnValues::ByteArray(arrays),
        ),
    ];

    for (physical_type, encoded, expected) in cases {
        let page =
            decode_page_values(&encoded, 0, &DecodeRequest::plain(physical_type, count)).unwrap();
        assert_eq!(page.values.len(), count, "{physical_type}");
        assert_eq!(page.values, expected, "{physical_type}");
        assert_eq!(page.bytes_consumed, encoded.len(), "{physical_type}");
    }
}

#[test]
fn test_consecutive_plain_pages_share_buffer() {
    let mut buffer = encode::encode_plain_i64s(&[10, 20]);
    buffer.extend(encode::encode_plain_byte_arrays(&[b"xyz".to_vec()]));

    let first = decode_page_values(&buffer, 0, &DecodeRequest::plain(PhysicalType::Int64, 2))
        .unwrap();
    let second = decode_page_values(
        &buffer,
        first.bytes_consumed,
        &DecodeRequest::plain(PhysicalType::ByteArray, 1),
    )
    .unwrap();
    assert_eq!(
        second.values.into_values(),
        vec![DecodedValue::ByteArray(b"xyz".to_vec())]
    );
    assert_eq!(first.bytes_consumed + second.bytes_consumed, buffer.len());
}

#[test]
fn test_levels_round_trip() {
    for max_level in [0u32, 1, 3, 7, 200, 70000] {
        let levels = data_gen::random_levels(1000, max_level, 30);
        let request = DecodeRequest::levels(max_level, levels.len());
        let body = HybridEncoder::new(request.bit_width)
            .encode_all(&levels)
            .finish();
        let encoded = encode::with_length_prefix(&body);

        let page = decode_page_values(&encoded, 0, &request).unwrap();
        let expected: Vec<i64> = levels.iter().map(|&l| l as i64).collect();
        assert_eq!(page.values, ColumnValues::Int64(expected), "max level {max_level}");
        assert_eq!(page.bytes_consumed, encoded.len());
    }
}

#[test]
fn test_levels_across_frames() {
    let levels = data_gen::random_levels(1000, 5, 40);
    let bit_width = 3;

    // One frame per group of RLE runs, so every frame decodes to exactly
    // the levels it was built from.
    let mut encoded = Vec::new();
    let mut encoder = HybridEncoder::new(bit_width);
    for (i, run) in levels.chunk_by(|a, b| a == b).enumerate() {
        encoder.rle_run(run[0], run.len());
        if i % 5 == 4 {
            encoded.extend(encode::with_length_prefix(&encoder.finish()));
        }
    }
    encoded.extend(encode::with_length_prefix(&encoder.finish()));

    let mut cursor = ByteCursor::new(&encoded);
    let decoded = decode_data(&mut cursor, Encoding::Rle, levels.len(), bit_width).unwrap();
    let expected: Vec<i64> = levels.iter().map(|&l| l as i64).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn test_rle_page_values_widened_to_int64() {
    let body = HybridEncoder::new(1).rle_run(1, 5).finish();
    let encoded = encode::with_length_prefix(&body);
    let page = decode_page_values(&encoded, 0, &DecodeRequest::levels(1, 5)).unwrap();
    assert_eq!(page.values.physical_type(), PhysicalType::Int64);
    assert_eq!(page.values.get(4), Some(DecodedValue::Int64(1)));
    assert_eq!(page.bytes_consumed, encoded.len());
}

#[test]
fn test_unsupported_encoding_is_an_error() {
    let request = DecodeRequest::new(PhysicalType::Int32, Encoding::BitPacked, 8, 1);
    let mut cursor = ByteCursor::new(&[0xFF; 8]);
    let err = decode_values(&mut cursor, &request).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedEncoding { .. }));

    let request = DecodeRequest::new(PhysicalType::Int32, Encoding::PlainDictionary, 8, 1);
    let err = decode_page_values(&[0xFF; 8], 0, &request).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedEncoding { .. }));
}

#[test]
fn test_truncated_page_is_an_error() {
    let encoded = encode::encode_plain_i32s(&[1, 2, 3]);
    let err = decode_page_values(&encoded, 4, &DecodeRequest::plain(PhysicalType::Int32, 3))
        .unwrap_err();
    assert!(err.is_truncated());

    assert!(
        decode_page_values(&encoded, 13, &DecodeRequest::plain(PhysicalType::Int32, 0))
            .unwrap_err()
            .is_truncated()
    );
}

#[test]
fn test_tags_from_metadata() {
    let physical_type = PhysicalType::try_from(1).unwrap();
    let encoding = Encoding::try_from(0).unwrap();
    let request = DecodeRequest::new(physical_type, encoding, 1, 0);
    let page = decode_page_values(&42i32.to_le_bytes(), 0, &request).unwrap();
    assert_eq!(page.values, ColumnValues::Int32(vec![42]));

    assert!(matches!(
        Encoding::try_from(42).unwrap_err().kind(),
        ErrorKind::UnsupportedEncoding { .. }
    ));
}
