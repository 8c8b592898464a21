use crate::cursor::ByteCursor;
use pqread_common::error::Error;

/// Reads one unsigned LEB128 integer.
///
/// Each byte contributes its low 7 bits at the current shift; the high bit
/// marks continuation. The value must fit in 32 bits, i.e. take at most five
/// bytes. Longer encodings are not rejected: bits shifted past bit 31 are
/// dropped.
pub fn read_unsigned_varint(cursor: &mut ByteCursor) -> pqread_common::Result<u32> {
    let mut result = 0u32;
    let mut shift = 0u32;
    loop {
        let byte = cursor
            .read_u8()
            .map_err(|_| Error::truncated("varint", 1, 0))?;
        result |= u32::from(byte & 0x7F).checked_shl(shift).unwrap_or(0);
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift = shift.saturating_add(7);
    }
}

#[cfg(test)]
mod tests {
    use super::read_unsigned_varint;
    use crate::cursor::ByteCursor;
    use pqread_testkit::encode::encode_unsigned_varint;

    #[test]
    fn test_known_values() {
        let mut cursor = ByteCursor::new(&[0x80, 0x01, 0x00, 0x7F, 0xE5, 0x8E, 0x26]);
        assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), 128);
        assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), 0);
        assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), 127);
        assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), 624485);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut values: Vec<u32> = (0..10_000).map(|_| fastrand::u32(0..1 << 28)).collect();
        values.extend([0, 1, 127, 128, 16383, 16384, (1 << 28) - 1]);
        let mut encoded = Vec::new();
        for &v in &values {
            encode_unsigned_varint(v, &mut encoded);
        }
        let mut cursor = ByteCursor::new(&encoded);
        for &v in &values {
            assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), v);
        }
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_five_byte_value() {
        let mut encoded = Vec::new();
        encode_unsigned_varint(u32::MAX, &mut encoded);
        assert_eq!(encoded.len(), 5);
        let mut cursor = ByteCursor::new(&encoded);
        assert_eq!(read_unsigned_varint(&mut cursor).unwrap(), u32::MAX);
    }

    #[test]
    fn test_unterminated() {
        let mut cursor = ByteCursor::new(&[0x80, 0x80]);
        assert!(read_unsigned_varint(&mut cursor).unwrap_err().is_truncated());

        let mut cursor = ByteCursor::new(&[]);
        assert!(read_unsigned_varint(&mut cursor).unwrap_err().is_truncated());
    }

    #[test]
    fn test_overlong_does_not_panic() {
        let mut data = vec![0xFF; 9];
        data.push(0x01);
        let mut cursor = ByteCursor::new(&data);
        assert!(read_unsigned_varint(&mut cursor).is_ok());
        assert!(cursor.is_empty());
    }
}
