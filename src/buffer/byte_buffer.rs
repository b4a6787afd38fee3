//! Growable NUL-terminated byte buffer

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::alloc::{BufferAllocator, Global};
use super::error::BufferError;
use super::utf8;

/// Capacity used by [`Buffer::new`]
pub const DEFAULT_CAPACITY: usize = 24;

/// Growable byte sequence with a trailing NUL slot
///
/// ## Invariants
/// - `len < capacity` after every successful mutation
/// - `block[len] == 0`
/// - capacity never shrinks over the lifetime of a buffer
pub struct Buffer {
    /// Backing block; its length is the capacity
    block: Box<[u8]>,

    /// Content length in bytes (terminator excluded)
    len: usize,
}

impl Buffer {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create an empty buffer with [`DEFAULT_CAPACITY`]
    pub fn new() -> Result<Self, BufferError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer holding at least `capacity` bytes (terminator included)
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        Self::with_capacity_in(capacity, &mut Global)
    }

    /// Create an empty buffer through `alloc`
    ///
    /// A capacity of 0 is raised to 1 so the terminator always has a slot.
    pub fn with_capacity_in<A: BufferAllocator>(
        capacity: usize,
        alloc: &mut A,
    ) -> Result<Self, BufferError> {
        let capacity = capacity.max(1);
        let mut block = alloc.allocate(capacity).ok_or(BufferError::OutOfMemory)?;
        if block.len() < capacity {
            alloc.release(block);
            return Err(BufferError::OutOfMemory);
        }
        block[0] = 0;
        Ok(Self { block, len: 0 })
    }

    /// Copy `bytes` into a new buffer sized to fit
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BufferError> {
        Self::from_bytes_in(bytes, &mut Global)
    }

    /// Copy `bytes` into a new buffer allocated through `alloc`
    pub fn from_bytes_in<A: BufferAllocator>(
        bytes: &[u8],
        alloc: &mut A,
    ) -> Result<Self, BufferError> {
        let capacity = bytes.len().checked_add(1).ok_or(BufferError::Overflow)?;
        let mut buffer = Self::with_capacity_in(capacity, alloc)?;
        buffer.block[..bytes.len()].copy_from_slice(bytes);
        buffer.block[bytes.len()] = 0;
        buffer.len = bytes.len();
        Ok(buffer)
    }

    /// Copy UTF-8 text into a new buffer
    pub fn from_text(text: &str) -> Result<Self, BufferError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Copy a NUL-terminated run (everything before the first 0 byte)
    pub fn from_terminated(bytes: &[u8]) -> Result<Self, BufferError> {
        Self::from_bytes(until_nul(bytes))
    }

    /// Copy this buffer into a new one sized to fit
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        self.try_clone_in(&mut Global)
    }

    /// Copy this buffer into a new one allocated through `alloc`
    pub fn try_clone_in<A: BufferAllocator>(&self, alloc: &mut A) -> Result<Self, BufferError> {
        Self::from_bytes_in(self.as_bytes(), alloc)
    }

    /// Hand the backing block back to the allocator it came from
    pub fn release_in<A: BufferAllocator>(self, alloc: &mut A) {
        alloc.release(self.block);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes, terminator slot included
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Content without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.block[..self.len]
    }

    /// Content followed by its NUL terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.block[..=self.len]
    }

    /// Content as `&str`, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Number of code points
    pub fn char_count(&self) -> usize {
        utf8::sequences(self.as_bytes()).count()
    }

    /// True if some code point of the content equals `code`
    pub fn contains_code_point(&self, code: u32) -> bool {
        let mut seq = [0u8; 4];
        let Some(n) = utf8::encode(code, &mut seq) else {
            return false;
        };
        utf8::sequences(self.as_bytes()).any(|s| s == &seq[..n])
    }

    /// ASCII case-insensitive ordinal comparison
    ///
    /// A shorter buffer that is a prefix of the longer one sorts first, so the
    /// empty buffer sorts before everything else.
    pub fn cmp_ignore_ascii_case(&self, other: &Buffer) -> Ordering {
        cmp_bytes_ignore_ascii_case(self.as_bytes(), other.as_bytes())
    }

    // =========================================================================
    // Growth
    // =========================================================================

    /// Make room for `n` more bytes
    pub fn ensure_space(&mut self, n: usize) -> Result<(), BufferError> {
        self.ensure_space_in(n, &mut Global)
    }

    /// Make room for `n` more bytes, reallocating through `alloc`
    ///
    /// Doubles the current capacity until it exceeds `len + n`.
    pub fn ensure_space_in<A: BufferAllocator>(
        &mut self,
        n: usize,
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        let capacity = self.grown_capacity(n)?;
        if capacity == self.capacity() {
            return Ok(());
        }
        self.reallocate_in(capacity, alloc)
    }

    /// Capacity needed to hold `n` more bytes
    fn grown_capacity(&self, n: usize) -> Result<usize, BufferError> {
        if usize::MAX - self.len - 1 <= n {
            return Err(BufferError::Overflow);
        }
        let needed = self.len + n;
        let mut capacity = self.capacity();
        while capacity <= needed {
            if usize::MAX - capacity <= capacity {
                capacity = usize::MAX;
                break;
            }
            capacity *= 2;
        }
        Ok(capacity)
    }

    fn reallocate_in<A: BufferAllocator>(
        &mut self,
        capacity: usize,
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        let mut block = alloc.allocate(capacity).ok_or(BufferError::OutOfMemory)?;
        if block.len() < capacity {
            alloc.release(block);
            return Err(BufferError::OutOfMemory);
        }
        block[..=self.len].copy_from_slice(self.as_bytes_with_nul());
        let old = std::mem::replace(&mut self.block, block);
        alloc.release(old);
        Ok(())
    }

    // =========================================================================
    // Append
    // =========================================================================

    /// Append a raw byte run
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.append_bytes_in(bytes, &mut Global)
    }

    pub fn append_bytes_in<A: BufferAllocator>(
        &mut self,
        bytes: &[u8],
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.ensure_space_in(bytes.len(), alloc)?;
        let end = self.len + bytes.len();
        self.block[self.len..end].copy_from_slice(bytes);
        self.block[end] = 0;
        self.len = end;
        Ok(())
    }

    /// Append UTF-8 text
    pub fn append_str(&mut self, text: &str) -> Result<(), BufferError> {
        self.append_bytes(text.as_bytes())
    }

    /// Append everything before the first NUL of `bytes`
    pub fn append_terminated(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.append_bytes(until_nul(bytes))
    }

    /// Append one encoded code point
    pub fn append_code_point(&mut self, code: u32) -> Result<(), BufferError> {
        self.append_code_point_in(code, &mut Global)
    }

    pub fn append_code_point_in<A: BufferAllocator>(
        &mut self,
        code: u32,
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        let mut seq = [0u8; 4];
        let n = utf8::encode(code, &mut seq).ok_or(BufferError::InvalidCodePoint(code))?;
        self.append_bytes_in(&seq[..n], alloc)
    }

    /// Append one `char`; `'\0'` is rejected like code point 0
    pub fn append_char(&mut self, c: char) -> Result<(), BufferError> {
        self.append_code_point(u32::from(c))
    }

    /// Append the whole content of `other`
    pub fn concat(&mut self, other: &Buffer) -> Result<(), BufferError> {
        self.concat_in(other, &mut Global)
    }

    pub fn concat_in<A: BufferAllocator>(
        &mut self,
        other: &Buffer,
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        self.append_bytes_in(other.as_bytes(), alloc)
    }

    /// Append `other`, reporting `NullArgument` when it is absent
    pub fn concat_optional(&mut self, other: Option<&Buffer>) -> Result<(), BufferError> {
        let other = other.ok_or(BufferError::NullArgument)?;
        self.concat(other)
    }

    // =========================================================================
    // Prepend
    // =========================================================================

    /// Insert a raw byte run at the front
    pub fn prepend_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.prepend_bytes_in(bytes, &mut Global)
    }

    pub fn prepend_bytes_in<A: BufferAllocator>(
        &mut self,
        bytes: &[u8],
        alloc: &mut A,
    ) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let n = bytes.len();
        self.ensure_space_in(n, alloc)?;
        // Shift content and terminator right by n
        self.block.copy_within(..=self.len, n);
        self.block[..n].copy_from_slice(bytes);
        self.len += n;
        Ok(())
    }

    pub fn prepend_str(&mut self, text: &str) -> Result<(), BufferError> {
        self.prepend_bytes(text.as_bytes())
    }

    pub fn prepend_terminated(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.prepend_bytes(until_nul(bytes))
    }

    pub fn prepend_code_point(&mut self, code: u32) -> Result<(), BufferError> {
        let mut seq = [0u8; 4];
        let n = utf8::encode(code, &mut seq).ok_or(BufferError::InvalidCodePoint(code))?;
        self.prepend_bytes(&seq[..n])
    }

    pub fn prepend_char(&mut self, c: char) -> Result<(), BufferError> {
        self.prepend_code_point(u32::from(c))
    }

    // =========================================================================
    // In-place Edits
    // =========================================================================

    /// Drop exactly one trailing byte
    ///
    /// Meant for stripping a line terminator. It does not look at code point
    /// boundaries, so calling it on a multi-byte tail leaves a partial sequence.
    pub fn truncate_last_byte(&mut self) {
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        self.block[self.len] = 0;
    }

    /// Strip a trailing `\n`, then a trailing `\r`
    pub fn trim_line_ending(&mut self) {
        if self.as_bytes().last() == Some(&b'\n') {
            self.truncate_last_byte();
        }
        if self.as_bytes().last() == Some(&b'\r') {
            self.truncate_last_byte();
        }
    }

    /// Drop all content, keeping the capacity
    pub fn clear(&mut self) {
        self.len = 0;
        self.block[0] = 0;
    }

    /// Reverse the content by code point
    pub fn reverse(&mut self) -> Result<(), BufferError> {
        self.reverse_in(&mut Global)
    }

    /// Reverse the content by code point using a scratch block from `alloc`
    ///
    /// Sequences are copied whole, last first, so no code point is split.
    pub fn reverse_in<A: BufferAllocator>(&mut self, alloc: &mut A) -> Result<(), BufferError> {
        if self.len == 0 {
            return Ok(());
        }
        let mut scratch = alloc.allocate(self.len).ok_or(BufferError::OutOfMemory)?;
        if scratch.len() < self.len {
            alloc.release(scratch);
            return Err(BufferError::OutOfMemory);
        }

        let content = self.as_bytes();
        let mut end = content.len();
        let mut out = 0;
        while end > 0 {
            let start = utf8::prev_boundary(content, end);
            let seq = &content[start..end];
            scratch[out..out + seq.len()].copy_from_slice(seq);
            out += seq.len();
            end = start;
        }

        let len = self.len;
        self.block[..len].copy_from_slice(&scratch[..len]);
        alloc.release(scratch);
        Ok(())
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Compare possibly-absent buffers; `None` behaves as an empty buffer
pub fn compare(a: Option<&Buffer>, b: Option<&Buffer>) -> Ordering {
    let a = a.map(Buffer::as_bytes).unwrap_or_default();
    let b = b.map(Buffer::as_bytes).unwrap_or_default();
    cmp_bytes_ignore_ascii_case(a, b)
}

/// Length of a possibly-absent buffer
pub fn length(buffer: Option<&Buffer>) -> usize {
    buffer.map_or(0, Buffer::len)
}

fn cmp_bytes_ignore_ascii_case(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_uppercase)
        .cmp(b.iter().map(u8::to_ascii_uppercase))
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

// =============================================================================
// Trait Impls
// =============================================================================

impl Clone for Buffer {
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
            len: self.len,
        }
    }
}

/// Byte-wise content equality; capacity is ignored
impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buffer {}

impl PartialEq<str> for Buffer {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Buffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl FromStr for Buffer {
    type Err = BufferError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("content", &String::from_utf8_lossy(self.as_bytes()))
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
