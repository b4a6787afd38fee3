//! Allocation strategy for buffer blocks
//!
//! Every growing buffer operation has a form taking `&mut impl BufferAllocator`
//! so callers can substitute arenas or instrumented allocators. The default
//! forms use [`Global`].

/// Source of heap blocks for [`Buffer`](super::Buffer)
pub trait BufferAllocator {
    /// Allocate a zeroed block of exactly `capacity` bytes
    ///
    /// Returning `None` signals allocation failure; the caller reports
    /// `BufferError::OutOfMemory` and never touches the result.
    fn allocate(&mut self, capacity: usize) -> Option<Box<[u8]>>;

    /// Take back a block previously handed out by `allocate`
    fn release(&mut self, block: Box<[u8]>) {
        drop(block);
    }
}

/// The process heap
///
/// Uses `try_reserve_exact`, so an impossible request is reported as a
/// failure instead of aborting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Global;

impl BufferAllocator for Global {
    fn allocate(&mut self, capacity: usize) -> Option<Box<[u8]>> {
        let mut block = Vec::new();
        block.try_reserve_exact(capacity).ok()?;
        block.resize(capacity, 0);
        Some(block.into_boxed_slice())
    }
}

impl<A: BufferAllocator + ?Sized> BufferAllocator for &mut A {
    fn allocate(&mut self, capacity: usize) -> Option<Box<[u8]>> {
        (**self).allocate(capacity)
    }

    fn release(&mut self, block: Box<[u8]>) {
        (**self).release(block)
    }
}
