use super::MAX_BIT_WIDTH;
use crate::cursor::ByteCursor;
use byteorder::{ByteOrder, LittleEndian};
use pqread_common::verify_arg;

/// Reads the repeated value of one RLE run given its raw hybrid header.
///
/// The value occupies `ceil(bit_width / 8)` bytes, little-endian, and is
/// zero-extended to 32 bits. Returns the value and the repeat count
/// `header >> 1`. A zero count is valid and still consumes the value bytes.
pub fn read_rle_run(
    cursor: &mut ByteCursor,
    header: u32,
    bit_width: u8,
) -> pqread_common::Result<(i64, usize)> {
    verify_arg!(bit_width, bit_width <= MAX_BIT_WIDTH);
    let count = (header >> 1) as usize;
    let width = (bit_width as usize).div_ceil(8);

    let mut padded = [0u8; 4];
    padded[..width].copy_from_slice(cursor.read_bytes(width)?);
    let value = LittleEndian::read_u32(&padded);
    Ok((i64::from(value), count))
}

/// Decodes one RLE run into `header >> 1` copies of its value.
pub fn decode_rle_run(
    cursor: &mut ByteCursor,
    header: u32,
    bit_width: u8,
) -> pqread_common::Result<Vec<i64>> {
    let (value, count) = read_rle_run(cursor, header, bit_width)?;
    Ok(vec![value; count])
}

#[cfg(test)]
mod tests {
    use super::{decode_rle_run, read_rle_run};
    use crate::cursor::ByteCursor;

    #[test]
    fn test_single_byte_value() {
        let mut cursor = ByteCursor::new(&[0x05]);
        assert_eq!(decode_rle_run(&mut cursor, 6, 8).unwrap(), vec![5, 5, 5]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_value_width_rounds_up() {
        // 9 bits -> 2 value bytes.
        let mut cursor = ByteCursor::new(&[0x01, 0x01, 0xFF]);
        assert_eq!(read_rle_run(&mut cursor, 4, 9).unwrap(), (257, 2));
        assert_eq!(cursor.remaining(), 1);

        let mut cursor = ByteCursor::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            read_rle_run(&mut cursor, 2, 32).unwrap(),
            (u32::MAX as i64, 1)
        );
    }

    #[test]
    fn test_zero_count_consumes_value() {
        let mut cursor = ByteCursor::new(&[0x07, 0x00]);
        assert!(decode_rle_run(&mut cursor, 0, 16).unwrap().is_empty());
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_zero_width() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(decode_rle_run(&mut cursor, 8, 0).unwrap(), vec![0; 4]);
    }

    #[test]
    fn test_truncated_value() {
        let mut cursor = ByteCursor::new(&[0x01]);
        assert!(decode_rle_run(&mut cursor, 2, 16).unwrap_err().is_truncated());
    }
}
