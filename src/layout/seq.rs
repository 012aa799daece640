use super::{Layout, LayoutWriter};
use crate::error::{SfsError, ShapeViolation};

/// A homogeneous sequence with room for exactly `N` elements on the wire.
///
/// The program always reads `N * T::SPAN` bytes, so unused slots are encoded
/// as zero bytes. The used length is tracked separately from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeq<T, const N: usize> {
    slots: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedSeq<T, N> {
    pub fn from_slice(field: &'static str, items: &[T]) -> Result<Self, SfsError> {
        if items.len() > N {
            return Err(SfsError::shape(
                field,
                ShapeViolation::OverCapacity {
                    len: items.len(),
                    capacity: N,
                },
            ));
        }

        let mut slots = [T::default(); N];
        slots[..items.len()].copy_from_slice(items);
        Ok(FixedSeq {
            slots,
            len: items.len(),
        })
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    pub const CAPACITY: usize = N;

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }
}

impl<T: Layout, const N: usize> Layout for FixedSeq<T, N> {
    const SPAN: usize = N * T::SPAN;

    fn write(&self, w: &mut LayoutWriter<'_>) {
        for item in self.as_slice() {
            w.put(item);
        }
        w.put_zeros((N - self.len) * T::SPAN);
    }
}
