use crate::values_decoder::DecodedPage;

pub trait PageDecoder: Send + Sync + 'static {
    /// Decodes the values of one page.
    ///
    /// # Arguments
    ///
    /// - `encoded` - The page's encoded bytes.
    /// - `offset` - Position in `encoded` at which the values start.
    ///
    /// # Returns
    ///
    /// The decoded values together with the number of bytes consumed from
    /// `offset`, so the caller can advance past them.
    fn decode(&self, encoded: &[u8], offset: usize) -> pqread_common::Result<DecodedPage>;
}
