//! Per-packet scratch memory.

use std::fmt;
use std::ops::Range;

/// Round `value` up to the nearest multiple of `alignment`.
///
/// `alignment` must be > 0.
pub(crate) fn align_up(value: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment > 0);
    Some(value.checked_add(alignment - 1)? / alignment * alignment)
}

/// Offset and length of one allocation inside a [`ScratchPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSlice {
    pub offset: usize,
    pub len: usize,
}

impl PoolSlice {
    fn range(self) -> Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// A linear allocator for transient bytes, reset at every packet boundary.
///
/// Unlike a fixed arena it grows on demand; capacity is kept across resets so steady-state
/// decoding does not reallocate.
#[derive(Clone, Default)]
pub struct ScratchPool {
    buf: Vec<u8>,
    cursor: usize,
    high_water: usize,
}

impl ScratchPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Releases every allocation.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.buf.clear();
    }

    /// Bytes handed out since the last reset.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Largest `used()` ever observed.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Allocate `size` zeroed bytes with `alignment`. Returns `None` only on address overflow.
    pub fn alloc(&mut self, size: usize, alignment: usize) -> Option<PoolSlice> {
        let offset = align_up(self.cursor, alignment.max(1))?;
        let end = offset.checked_add(size)?;
        self.buf.resize(end, 0);
        self.cursor = end;
        self.high_water = self.high_water.max(end);
        Some(PoolSlice { offset, len: size })
    }

    /// Copies `bytes` into a fresh allocation.
    pub fn stage(&mut self, bytes: &[u8]) -> Option<PoolSlice> {
        let slice = self.alloc(bytes.len(), 1)?;
        self.get_mut(slice).copy_from_slice(bytes);
        Some(slice)
    }

    pub fn get(&self, slice: PoolSlice) -> &[u8] {
        &self.buf[slice.range()]
    }

    pub fn get_mut(&mut self, slice: PoolSlice) -> &mut [u8] {
        &mut self.buf[slice.range()]
    }
}

impl fmt::Debug for ScratchPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchPool")
            .field("used", &self.cursor)
            .field("capacity", &self.buf.capacity())
            .field("high_water", &self.high_water)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_up_rounds_to_multiple() {
        assert_eq!(align_up(0, 8), Some(0));
        assert_eq!(align_up(1, 8), Some(8));
        assert_eq!(align_up(16, 8), Some(16));
        assert_eq!(align_up(usize::MAX, 2), None);
    }

    #[test]
    fn allocations_are_aligned_and_disjoint() {
        let mut pool = ScratchPool::new();
        let a = pool.stage(b"abc").unwrap();
        let b = pool.alloc(4, 8).unwrap();
        assert_eq!(a, PoolSlice { offset: 0, len: 3 });
        assert_eq!(b, PoolSlice { offset: 8, len: 4 });
        pool.get_mut(b).copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(pool.get(a), b"abc");
        assert_eq!(pool.used(), 12);
    }

    #[test]
    fn reset_reuses_space_and_keeps_high_water() {
        let mut pool = ScratchPool::with_capacity(4);
        pool.alloc(32, 1).unwrap();
        pool.reset();
        assert_eq!(pool.used(), 0);
        assert_eq!(pool.alloc(8, 4).unwrap().offset, 0);
        assert_eq!(pool.high_water(), 32);
    }
}
