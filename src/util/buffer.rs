//! Read buffer allocation
//!
//! The executor reads every record into one buffer allocated up front. For
//! O_DIRECT the buffer address must be aligned to the target's logical block
//! size, so the allocation goes through `std::alloc` with an explicit
//! layout instead of a `Vec`.

use crate::error::BenchError;
use crate::Result;
use std::alloc::{alloc_zeroed, dealloc, Layout};

/// Memory-aligned buffer suitable for O_DIRECT operations
///
/// Freed when dropped. Contents start zeroed and are overwritten by every
/// read.
pub struct AlignedBuffer {
    ptr: *mut u8,
    size: usize,
    layout: Layout,
}

impl AlignedBuffer {
    /// Allocate a zeroed buffer with the specified size and alignment
    ///
    /// # Errors
    ///
    /// Returns `BufferAllocation` if `size` is 0, `alignment` is not a power
    /// of 2, or the allocator fails.
    pub fn new(size: usize, alignment: usize) -> Result<Self> {
        if size == 0 {
            return Err(BenchError::BufferAllocation { size });
        }

        let layout = Layout::from_size_align(size, alignment)
            .map_err(|_| BenchError::BufferAllocation { size })?;

        // SAFETY: layout has non-zero size
        let ptr = unsafe { alloc_zeroed(layout) };
        if ptr.is_null() {
            return Err(BenchError::BufferAllocation { size });
        }

        Ok(AlignedBuffer {
            ptr,
            size,
            layout,
        })
    }

    /// Get the buffer as a mutable slice
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr is a live allocation of `size` bytes owned by self
        unsafe { std::slice::from_raw_parts_mut(self.ptr, self.size) }
    }

    /// Get the size of the buffer in bytes
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    fn alignment(&self) -> usize {
        self.layout.align()
    }

    #[cfg(test)]
    fn is_aligned(&self) -> bool {
        (self.ptr as usize) % self.layout.align() == 0
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        // SAFETY: ptr was allocated with this exact layout
        unsafe {
            dealloc(self.ptr, self.layout);
        }
    }
}

// AlignedBuffer is Send because it owns its memory
unsafe impl Send for AlignedBuffer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_buffer_creation() {
        let buffer = AlignedBuffer::new(4096, 4096).unwrap();
        assert_eq!(buffer.size(), 4096);
        assert_eq!(buffer.alignment(), 4096);
        assert!(buffer.is_aligned());
    }

    #[test]
    fn test_aligned_buffer_unaligned_size() {
        let mut buffer = AlignedBuffer::new(1000, 512).unwrap();
        assert!(buffer.is_aligned());
        assert_eq!(buffer.as_mut_slice().len(), 1000);
    }

    #[test]
    fn test_aligned_buffer_starts_zeroed() {
        let mut buffer = AlignedBuffer::new(512, 512).unwrap();
        assert!(buffer.as_mut_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_aligned_buffer_zero_size() {
        assert!(matches!(
            AlignedBuffer::new(0, 512),
            Err(BenchError::BufferAllocation { size: 0 })
        ));
    }

    #[test]
    fn test_aligned_buffer_bad_alignment() {
        assert!(AlignedBuffer::new(4096, 3).is_err());
    }
}
