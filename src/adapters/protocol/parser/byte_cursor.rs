use crate::adapters::protocol::error::DecodeError;
use bytes::{Buf, Bytes};

use super::varint::MAX_UVARINT_BYTES;

/// 페이로드 위를 이동하는 커서
///
/// Every read goes through [`ByteCursor::take`], so running off the end of the
/// payload is always a [`DecodeError::BufferUnderrun`] and never a panic.
#[derive(Debug, Clone, Default)]
pub struct ByteCursor {
    buf: Bytes,
}

impl ByteCursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Splits off the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<Bytes, DecodeError> {
        if self.buf.remaining() < n {
            return Err(DecodeError::BufferUnderrun {
                needed: n,
                remaining: self.buf.remaining(),
            });
        }
        Ok(self.buf.split_to(n))
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    pub fn get_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn get_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_be_bytes(self.take_array()?))
    }

    pub fn get_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.take_array()?))
    }

    pub fn get_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn get_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn get_uvarint(&mut self) -> Result<u32, DecodeError> {
        let mut value: u32 = 0;
        for i in 0..MAX_UVARINT_BYTES {
            let byte = self.get_u8()?;
            value |= u32::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::InvalidVarint)
    }

    /// COMPACT 길이 필드: 0 = null, 그 외에는 실제 길이 + 1
    pub fn get_compact_length(&mut self) -> Result<Option<usize>, DecodeError> {
        match self.get_uvarint()? {
            0 => Ok(None),
            n => Ok(Some(n as usize - 1)),
        }
    }

    pub fn get_compact_string(
        &mut self,
        field: &'static str,
    ) -> Result<Option<String>, DecodeError> {
        match self.get_compact_length()? {
            None => Ok(None),
            Some(len) => self.take_string(len, field).map(Some),
        }
    }

    /// NULLABLE_STRING: i16 length, negative means null.
    pub fn get_nullable_string(
        &mut self,
        field: &'static str,
    ) -> Result<Option<String>, DecodeError> {
        let len = self.get_i16()?;
        if len < 0 {
            return Ok(None);
        }
        self.take_string(len as usize, field).map(Some)
    }

    pub fn get_compact_array<T, F>(&mut self, mut parse: F) -> Result<Option<Vec<T>>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let Some(len) = self.get_compact_length()? else {
            return Ok(None);
        };

        // 선언된 길이를 그대로 믿고 할당하지 않음
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(parse(self)?);
        }
        Ok(Some(items))
    }

    /// Tagged fields are consumed but not decoded.
    pub fn skip_tag_buffer(&mut self) -> Result<(), DecodeError> {
        self.get_u8()?;
        Ok(())
    }

    pub fn into_remaining(self) -> Bytes {
        self.buf
    }

    fn take_string(&mut self, len: usize, field: &'static str) -> Result<String, DecodeError> {
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
    }
}
