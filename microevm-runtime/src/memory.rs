//! Byte-addressable memory

use std::fmt;

use microevm_spec::DEFAULT_MEMORY_LIMIT;

use crate::error::{Result, VmError};

/// Auto-expanding byte memory
///
/// Reads past the written region observe zeros; writes grow the backing
/// buffer, zero-filling the gap. The machine's nominal address space is
/// 2^256 bytes; the `limit` ceiling stands in for it, and offsets at or
/// beyond the ceiling fail as resource exhaustion.
#[derive(Debug, Clone)]
pub struct Memory {
    data: Vec<u8>,
    limit: usize,
}

impl Memory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MEMORY_LIMIT)
    }

    /// The allocation ceiling is fixed for the lifetime of the memory.
    pub fn with_limit(limit: usize) -> Self {
        Memory {
            data: Vec::new(),
            limit,
        }
    }

    /// Store one byte at `offset`, growing the buffer as needed.
    ///
    /// No mutation happens on failure.
    pub fn store(&mut self, offset: usize, value: u64) -> Result<()> {
        if value > 0xFF {
            return Err(VmError::InvalidByteValue { value });
        }
        if offset >= self.limit {
            return Err(VmError::MemoryLimitExceeded {
                offset,
                limit: self.limit,
            });
        }
        if offset >= self.data.len() {
            self.data.resize(offset + 1, 0);
        }
        self.data[offset] = value as u8;
        Ok(())
    }

    /// Load the byte at `offset`.
    ///
    /// Never grows the buffer; offsets past the written region read as
    /// zero.
    pub fn load(&self, offset: usize) -> u8 {
        self.data.get(offset).copied().unwrap_or(0)
    }

    /// Read `len` bytes starting at `offset`, with the same zero-fill
    /// semantics as [`Memory::load`].
    pub fn read_range(&self, offset: usize, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= self.limit)
            .ok_or(VmError::MemoryLimitExceeded {
                offset,
                limit: self.limit,
            })?;
        Ok((offset..end).map(|o| self.load(o)).collect())
    }

    /// Length of the written region
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The written region as a byte slice
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
