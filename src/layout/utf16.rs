use super::{Layout, LayoutWriter};
use crate::error::{SfsError, ShapeViolation};

/// A string stored as exactly `N` UTF-16 code units.
///
/// Shorter strings are zero-filled; longer strings are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUtf16String<const N: usize> {
    units: [u16; N],
    len: usize,
}

impl<const N: usize> FixedUtf16String<N> {
    pub fn new(field: &'static str, value: &str) -> Result<Self, SfsError> {
        let len = value.encode_utf16().count();
        if len > N {
            return Err(SfsError::shape(
                field,
                ShapeViolation::StringTooLong { len, max: N },
            ));
        }

        let mut units = [0u16; N];
        for (slot, unit) in units.iter_mut().zip(value.encode_utf16()) {
            *slot = unit;
        }
        Ok(FixedUtf16String { units, len })
    }

    /// Number of code units in use.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Layout for FixedUtf16String<N> {
    const SPAN: usize = 2 * N;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        for unit in &self.units {
            w.put_bytes(&unit.to_le_bytes());
        }
    }
}
