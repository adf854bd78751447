//! Read executor
//!
//! The worker owns the read buffer and the IO engine, borrows the open
//! target, and issues one positioned read per offset it is given. The first
//! failed or short read aborts the run; nothing is retried.
//!
//! # Components
//!
//! - **Target**: the open file the reads go to
//! - **Engine**: issues each read (`pread` in production)
//! - **Distribution**: generates the offsets, via [`OffsetSequence`]
//!
//! # Example
//!
//! ```no_run
//! use recsize_bench::config::{AccessMode, RunConfig};
//! use recsize_bench::worker::run_workload;
//!
//! let config = RunConfig::new("data.bin", AccessMode::Random, 4096, 1 << 30).with_seed(123);
//! let summary = run_workload(&config)?;
//! assert_eq!(summary.reads_issued, summary.plan.operation_count);
//! # Ok::<(), recsize_bench::BenchError>(())
//! ```

use crate::config::validator::{validate_workload, WorkloadPlan};
use crate::config::RunConfig;
use crate::distribution::OffsetSequence;
use crate::engine::sync::SyncEngine;
use crate::engine::{IOEngine, ReadOperation};
use crate::error::BenchError;
use crate::Result;
use crate::target::file::FileTarget;
use crate::target::{OpenFlags, Target};
use crate::util::buffer::AlignedBuffer;
use std::io;

/// Buffer alignment when direct IO is off
const DEFAULT_BUFFER_ALIGNMENT: usize = std::mem::align_of::<u64>();

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Plan the run was executed against
    pub plan: WorkloadPlan,

    /// Reads that completed in full
    pub reads_issued: u64,

    /// `reads_issued * record_size`
    pub bytes_requested: u64,
}

/// Worker that drives one run's reads
pub struct Worker<'t> {
    target: &'t dyn Target,
    engine: Box<dyn IOEngine>,

    /// Reused for every read; contents are never inspected
    buffer: AlignedBuffer,
}

impl<'t> Worker<'t> {
    /// Create a worker with a `record_size` buffer aligned to `alignment`
    pub fn new(
        target: &'t dyn Target,
        engine: Box<dyn IOEngine>,
        record_size: usize,
        alignment: usize,
    ) -> Result<Self> {
        let buffer = AlignedBuffer::new(record_size, alignment)?;
        Ok(Self {
            target,
            engine,
            buffer,
        })
    }

    /// Issue one read per offset, in order
    ///
    /// Returns the number of reads that completed. Stops at the first read
    /// that errors or transfers fewer than `record_size` bytes.
    pub fn run<I>(&mut self, offsets: I) -> Result<u64>
    where
        I: IntoIterator<Item = u64>,
    {
        let fd = self.target.fd();
        let size = self.buffer.size();
        let mut completed = 0u64;

        for offset in offsets {
            let op = ReadOperation {
                target_fd: fd,
                offset,
                buffer: self.buffer.as_mut_slice(),
            };

            match self.engine.submit(op) {
                Ok(bytes) if bytes == size => completed += 1,
                Ok(bytes) => {
                    return Err(BenchError::ReadFailure {
                        offset,
                        size,
                        source: io::Error::new(
                            io::ErrorKind::UnexpectedEof,
                            format!("short read: {} of {} bytes", bytes, size),
                        ),
                    });
                }
                Err(source) => {
                    log::debug!(
                        "{} engine: read {} failed at offset {}",
                        self.engine.name(),
                        completed,
                        offset
                    );
                    return Err(BenchError::ReadFailure {
                        offset,
                        size,
                        source,
                    });
                }
            }
        }

        Ok(completed)
    }
}

/// Open, validate and run a workload with the synchronous engine
pub fn run_workload(config: &RunConfig) -> Result<RunSummary> {
    run_workload_with_engine(config, Box::new(SyncEngine::new()))
}

/// Open, validate and run a workload with a caller-supplied engine
///
/// The target file is opened here and closed when this function returns,
/// whichever path it returns by. In dry-run mode validation still happens
/// but no reads are issued.
pub fn run_workload_with_engine(
    config: &RunConfig,
    engine: Box<dyn IOEngine>,
) -> Result<RunSummary> {
    let target = FileTarget::open(&config.path, OpenFlags { direct: config.direct })?;
    let plan = validate_workload(config, &target)?;

    log::debug!(
        "plan: mode={} record_size={} total_bytes={} operations={} blocks={} max_offset={} seed={}",
        config.mode,
        plan.record_size,
        config.total_bytes,
        plan.operation_count,
        plan.block_count,
        plan.max_offset,
        config.seed
    );

    target.apply_fadvise(config.fadvise)?;

    if config.dry_run {
        log::debug!("dry run: skipping {} reads", plan.operation_count);
        return Ok(RunSummary {
            plan,
            reads_issued: 0,
            bytes_requested: 0,
        });
    }

    let alignment = if config.direct {
        target.logical_block_size() as usize
    } else {
        DEFAULT_BUFFER_ALIGNMENT
    };

    let mut worker = Worker::new(&target, engine, plan.record_size, alignment)?;
    let offsets = OffsetSequence::new(&plan, config.mode, config.seed);
    let reads_issued = worker.run(offsets)?;

    log::debug!("completed {} reads", reads_issued);

    Ok(RunSummary {
        plan,
        reads_issued,
        bytes_requested: reads_issued * plan.record_size as u64,
    })
}
