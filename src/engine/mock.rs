//! Mock IO engine for testing
//!
//! Records every submitted read without performing a system call. It can be
//! configured to fail a specific read or to report short reads, which lets
//! tests drive the executor's failure path deterministically.

use super::{IOEngine, ReadOperation};
use std::io;
use std::os::unix::io::RawFd;
use std::sync::{Arc, Mutex};

/// Record of a submitted read for test verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    pub target_fd: RawFd,
    pub offset: u64,
    pub length: usize,
}

/// Mock IO engine for testing
///
/// Clones share their state, so a test can keep a clone to inspect after
/// handing the engine to a worker.
#[derive(Clone, Default)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Zero-based index of the read that fails with `errno`
    fail_at: Option<usize>,

    /// OS error code used for injected failures
    errno: i32,

    /// Bytes reported per read; 0 means the full requested length
    bytes_per_op: usize,

    submitted: Vec<OperationRecord>,
}

impl MockEngine {
    /// Create a mock engine that succeeds every read in full
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the read with zero-based index `index` with `EIO`
    pub fn fail_at(&self, index: usize) {
        self.fail_with(index, libc::EIO);
    }

    /// Fail the read with zero-based index `index` with a specific errno
    pub fn fail_with(&self, index: usize, errno: i32) {
        let mut state = self.state.lock().unwrap();
        state.fail_at = Some(index);
        state.errno = errno;
    }

    /// Report `bytes` transferred for every read (simulates short reads)
    pub fn set_bytes_per_op(&self, bytes: usize) {
        self.state.lock().unwrap().bytes_per_op = bytes;
    }

    /// Get a copy of all submitted reads
    pub fn submitted_operations(&self) -> Vec<OperationRecord> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Offsets of all submitted reads, in submission order
    pub fn submitted_offsets(&self) -> Vec<u64> {
        self.state
            .lock()
            .unwrap()
            .submitted
            .iter()
            .map(|r| r.offset)
            .collect()
    }

    /// Get the number of submitted reads
    pub fn submitted_count(&self) -> usize {
        self.state.lock().unwrap().submitted.len()
    }
}

impl IOEngine for MockEngine {
    fn submit(&mut self, op: ReadOperation<'_>) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap();
        let index = state.submitted.len();
        state.submitted.push(OperationRecord {
            target_fd: op.target_fd,
            offset: op.offset,
            length: op.length(),
        });

        if state.fail_at == Some(index) {
            return Err(io::Error::from_raw_os_error(state.errno));
        }

        if state.bytes_per_op == 0 {
            Ok(op.length())
        } else {
            Ok(state.bytes_per_op.min(op.length()))
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(engine: &mut MockEngine, offset: u64) -> io::Result<usize> {
        let mut buffer = vec![0u8; 4096];
        engine.submit(ReadOperation {
            target_fd: 7,
            offset,
            buffer: &mut buffer,
        })
    }

    #[test]
    fn test_mock_engine_records_operations() {
        let mut engine = MockEngine::new();
        assert_eq!(read(&mut engine, 0).unwrap(), 4096);
        assert_eq!(read(&mut engine, 4096).unwrap(), 4096);

        let ops = engine.submitted_operations();
        assert_eq!(ops.len(), 2);
        assert_eq!(
            ops[1],
            OperationRecord {
                target_fd: 7,
                offset: 4096,
                length: 4096
            }
        );
    }

    #[test]
    fn test_mock_engine_injected_failure() {
        let mut engine = MockEngine::new();
        engine.fail_with(1, libc::EACCES);

        assert!(read(&mut engine, 0).is_ok());
        let err = read(&mut engine, 4096).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EACCES));
        assert!(read(&mut engine, 8192).is_ok());
    }

    #[test]
    fn test_mock_engine_short_reads() {
        let mut engine = MockEngine::new();
        engine.set_bytes_per_op(100);
        assert_eq!(read(&mut engine, 0).unwrap(), 100);
    }

    #[test]
    fn test_mock_engine_clones_share_state() {
        let mut engine = MockEngine::new();
        let recorder = engine.clone();
        read(&mut engine, 12288).unwrap();
        assert_eq!(recorder.submitted_count(), 1);
        assert_eq!(recorder.submitted_offsets(), vec![12288]);
    }
}
