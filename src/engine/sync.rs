//! Synchronous IO engine
//!
//! Blocking `pread(2)` calls: one syscall per read, no overlap, no retry.
//! The file offset is never changed, so the access pattern seen by the
//! kernel is exactly the sequence of offsets handed to `submit`.

use super::{IOEngine, ReadOperation};
use std::io;

/// Synchronous IO engine using pread
#[derive(Debug, Default)]
pub struct SyncEngine;

impl SyncEngine {
    /// Create a new synchronous IO engine
    pub fn new() -> Self {
        SyncEngine
    }
}

impl IOEngine for SyncEngine {
    #[inline(always)]
    fn submit(&mut self, op: ReadOperation<'_>) -> io::Result<usize> {
        let offset = libc::off_t::try_from(op.offset).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("offset {} exceeds off_t", op.offset),
            )
        })?;

        // SAFETY: buffer is a valid, exclusively borrowed slice of the given
        // length for the duration of the call.
        let result = unsafe {
            libc::pread(
                op.target_fd,
                op.buffer.as_mut_ptr() as *mut libc::c_void,
                op.buffer.len(),
                offset,
            )
        };

        if result < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(result as usize)
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}
