use core::mem::size_of;

use crate::error::Error;

/// Bounds checked little endian view over an image
#[derive(Copy, Clone, Debug)]
pub(crate) struct ByteReader<'a>(&'a [u8]);

macro_rules! define {
    ($name:ident, $type:ty) => {
        #[inline]
        #[allow(dead_code)]
        pub fn $name(&self, offset: usize) -> Result<$type, Error> {
            let mut array = [0u8; size_of::<$type>()];
            array.copy_from_slice(self.bytes(offset, size_of::<$type>())?);
            Ok(<$type>::from_le_bytes(array))
        }
    };
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn bytes(&self, offset: usize, width: usize) -> Result<&'a [u8], Error> {
        match offset.checked_add(width) {
            Some(end) if end <= self.0.len() => Ok(&self.0[offset..end]),
            _ => Err(Error::OutOfRange { offset, width, length: self.0.len() }),
        }
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, Error> {
        Ok(self.bytes(offset, 1)?[0])
    }

    define!(read_i16, i16);
    define!(read_u16, u16);
    define!(read_i32, i32);
    define!(read_u32, u32);

    /// Padding is kept, callers trim for display
    pub fn read_fixed_string(&self, offset: usize, length: usize) -> Result<&'a str, Error> {
        let bytes = self.bytes(offset, length)?;
        core::str::from_utf8(bytes).map_err(|_| Error::InvalidEncoding { offset })
    }

    pub fn read_fixed<const N: usize>(&self, offset: usize) -> Result<heapless::String<N>, Error> {
        let mut string = heapless::String::new();
        let text = self.read_fixed_string(offset, N)?;
        string.push_str(text).map_err(|_| Error::InvalidEncoding { offset })?;
        Ok(string)
    }
}
