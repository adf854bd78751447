//! Working-set validation
//!
//! Checks that the opened target can host the requested working set and
//! derives the [`WorkloadPlan`] that bounds every read of the run.

use super::RunConfig;
use crate::error::BenchError;
use crate::Result;
use crate::target::Target;

/// Parameters derived once from a validated configuration
///
/// Every offset handed to the executor lies in `[0, max_offset]` and is a
/// multiple of `record_size`, so each read fits inside the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadPlan {
    /// Bytes per read
    pub record_size: usize,

    /// Number of reads to issue: `total_bytes / record_size`
    pub operation_count: u64,

    /// Largest valid start offset: `total_bytes - record_size`
    pub max_offset: u64,

    /// Distinct record-aligned start positions: `max_offset / record_size + 1`
    pub block_count: u64,
}

/// Validate a configuration against an opened target
pub fn validate_workload(config: &RunConfig, target: &dyn Target) -> Result<WorkloadPlan> {
    let file_size = target.size();
    if file_size == 0 {
        return Err(BenchError::invalid_file(
            target.path(),
            format!("file size is non-positive ({})", file_size),
        ));
    }

    if file_size < config.total_bytes {
        return Err(BenchError::InsufficientFile {
            file_size,
            total_bytes: config.total_bytes,
        });
    }

    if config.direct {
        let alignment = target.logical_block_size();
        if config.record_size as u64 % alignment != 0 {
            return Err(BenchError::InvalidParameters(format!(
                "record_size={} is not a multiple of the filesystem block size {} required for direct IO",
                config.record_size, alignment
            )));
        }
    }

    plan_workload(config.record_size, config.total_bytes)
}

/// Derive the workload plan from record size and working-set size alone
pub fn plan_workload(record_size: usize, total_bytes: u64) -> Result<WorkloadPlan> {
    if record_size == 0 {
        return Err(BenchError::InvalidParameters(
            "record_size must be greater than 0".to_string(),
        ));
    }
    let record = record_size as u64;

    let operation_count = total_bytes / record;
    if operation_count == 0 {
        return Err(BenchError::InvalidParameters(format!(
            "total_bytes={} too small for record_size={}",
            total_bytes, record_size
        )));
    }

    let max_offset = total_bytes - record;
    let block_count = max_offset / record + 1;

    Ok(WorkloadPlan {
        record_size,
        operation_count,
        max_offset,
        block_count,
    })
}
