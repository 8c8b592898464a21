//! Forward-only byte cursor used by all decoders.

use byteorder::{ByteOrder, LittleEndian};
use pqread_common::error::Error;

/// A forward-only, position-tracking view over an encoded byte buffer.
///
/// Every read either returns exactly the requested number of bytes and
/// advances the position, or fails with a truncation error and leaves the
/// position untouched. There are no short reads.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a cursor positioned at `offset` within `data`.
    pub fn with_offset(data: &'a [u8], offset: usize) -> pqread_common::Result<Self> {
        if offset > data.len() {
            return Err(Error::truncated("page offset", offset, data.len()));
        }
        Ok(Self { data, pos: offset })
    }

    /// Current read offset from the start of the underlying buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> pqread_common::Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::truncated("bytes", len, self.remaining()));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    pub fn read_u8(&mut self) -> pqread_common::Result<u8> {
        let byte = *self
            .data
            .get(self.pos)
            .ok_or_else(|| Error::truncated("byte", 1, 0))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_array<const N: usize>(&mut self) -> pqread_common::Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u32_le(&mut self) -> pqread_common::Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Splits off the next `len` bytes into a separate cursor and advances
    /// this one past them.
    pub fn split_to(&mut self, len: usize) -> pqread_common::Result<ByteCursor<'a>> {
        Ok(ByteCursor::new(self.read_bytes(len)?))
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;

    #[test]
    fn test_reads_advance_position() {
        let data = [1u8, 2, 3, 4, 5, 6, 7];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[2, 3]);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x0706_0504);
        assert_eq!(cursor.position(), 7);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_short_read_fails_without_advancing() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u8().unwrap();
        let err = cursor.read_u32_le().unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.read_array::<2>().unwrap(), [2, 3]);
        assert!(cursor.read_u8().unwrap_err().is_truncated());
    }

    #[test]
    fn test_zero_length_read() {
        let mut cursor = ByteCursor::new(&[]);
        assert!(cursor.read_bytes(0).unwrap().is_empty());
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_split_to() {
        let data = [9u8, 8, 7, 6];
        let mut cursor = ByteCursor::with_offset(&data, 1).unwrap();
        let mut sub = cursor.split_to(2).unwrap();
        assert_eq!(cursor.position(), 3);
        assert_eq!(sub.remaining(), 2);
        assert_eq!(sub.read_u8().unwrap(), 8);
        assert!(cursor.split_to(2).unwrap_err().is_truncated());
        assert!(ByteCursor::with_offset(&data, 5).is_err());
    }
}
