use bytes::{BufMut, BytesMut};

use super::byte_cursor::ByteCursor;
use super::varint::PutVarint;
use crate::adapters::protocol::constants::TAG_BUFFER;
use crate::adapters::protocol::error::DecodeError;

/// 바이트 커서로부터 역직렬화하는 trait
pub trait Deserialize: Sized {
    fn deserialize(src: &mut ByteCursor) -> Result<Self, DecodeError>;
}

/// 바이트로 직렬화하는 trait. 인코딩은 실패하지 않음
pub trait Serialize {
    fn serialize(&self, dst: &mut BytesMut);
}

/// Compact and nullable encodings layered over `BufMut`.
pub trait PutCompact: BufMut + Sized {
    fn put_compact_array_len(&mut self, len: usize) {
        self.put_uvarint((len + 1) as u32);
    }

    fn put_compact_string(&mut self, value: &str) {
        self.put_compact_array_len(value.len());
        self.put_slice(value.as_bytes());
    }

    fn put_nullable_string(&mut self, value: Option<&str>) {
        match value {
            Some(value) => {
                self.put_i16(value.len() as i16);
                self.put_slice(value.as_bytes());
            }
            None => self.put_i16(-1),
        }
    }

    fn put_tag_buffer(&mut self) {
        self.put_u8(TAG_BUFFER);
    }
}

impl<B: BufMut> PutCompact for B {}
