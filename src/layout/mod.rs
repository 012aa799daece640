//! Fixed-width layout primitives.
//!
//! Every encodable kind declares its span in bytes up front. A record's span
//! is the sum of its fields' spans in declared order, and the buffer it is
//! encoded into is allocated at exactly that size before anything is written.
//! All integers are little-endian.
//!
//! Arguments are validated when the layout value is constructed (see
//! [`FixedSeq::from_slice`], [`FixedUtf16String::new`], [`checked_u8`]), so a
//! value that exists can always be encoded.

mod scalar;
mod seq;
mod utf16;

pub use scalar::{checked_u16, checked_u8, decimal_to_u64, number_to_u16, number_to_u8};
pub use seq::FixedSeq;
pub use utf16::FixedUtf16String;

use crate::command::Command;

/// A value with a fixed encoded width.
pub trait Layout {
    /// Encoded width in bytes.
    const SPAN: usize;

    /// Write exactly `SPAN` bytes at the writer's cursor.
    fn write(&self, w: &mut LayoutWriter<'_>);
}

/// Sequential writer over a pre-sized, zeroed buffer.
pub struct LayoutWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> LayoutWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        LayoutWriter { buf, offset: 0 }
    }

    /// Number of bytes written so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn put<T: Layout + ?Sized>(&mut self, value: &T) {
        let start = self.offset;
        value.write(self);
        debug_assert_eq!(self.offset - start, T::SPAN, "layout wrote past its span");
    }

    pub fn put_bytes(&mut self, src: &[u8]) {
        let end = self.offset + src.len();
        self.buf[self.offset..end].copy_from_slice(src);
        self.offset = end;
    }

    /// Zero `len` bytes; unused slots must never carry stale data.
    pub fn put_zeros(&mut self, len: usize) {
        let end = self.offset + len;
        self.buf[self.offset..end].fill(0);
        self.offset = end;
    }
}

/// Encode a value into a freshly allocated buffer of exactly `T::SPAN` bytes.
pub fn encode<T: Layout>(value: &T) -> Vec<u8> {
    let mut data = vec![0u8; T::SPAN];
    let mut w = LayoutWriter::new(&mut data);
    w.put(value);
    data
}

/// Encode a command payload: the command ordinal followed by the record.
pub fn pack_tagged<T: Layout>(command: Command, record: &T) -> Vec<u8> {
    let mut data = vec![0u8; 1 + T::SPAN];
    let mut w = LayoutWriter::new(&mut data);
    w.put(&command.ordinal());
    w.put(record);
    debug_assert_eq!(w.offset(), data.len());
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: u8,
        b: u16,
    }

    impl Layout for Pair {
        const SPAN: usize = u8::SPAN + u16::SPAN;

        fn write(&self, w: &mut LayoutWriter<'_>) {
            w.put(&self.a);
            w.put(&self.b);
        }
    }

    #[test]
    fn test_record_fields_in_declared_order() {
        let data = encode(&Pair { a: 0xAA, b: 0x0102 });
        assert_eq!(data, vec![0xAA, 0x02, 0x01]);
    }

    #[test]
    fn test_pack_tagged_prefixes_ordinal() {
        let data = pack_tagged(Command::PickPlayer, &Pair { a: 1, b: 2 });
        assert_eq!(data, vec![8, 1, 2, 0]);
    }

    #[test]
    fn test_put_zeros_overwrites() {
        let mut buf = [0xFFu8; 4];
        let mut w = LayoutWriter::new(&mut buf);
        w.put_bytes(&[1]);
        w.put_zeros(3);
        assert_eq!(w.offset(), 4);
        assert_eq!(buf, [1, 0, 0, 0]);
    }
}
