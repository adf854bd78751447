//! CLI to config conversion utilities

use super::cli::{Cli, FadviseArg, ModeArg};
use super::{AccessMode, FadviseHint, RunConfig};
use crate::error::BenchError;

/// Parse a size string (e.g., "4096", "4k", "4kb", "1M", "8g") to bytes
///
/// Suffixes are binary multiples. A bare number is a byte count.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let lower = s.trim().to_lowercase();
    let s = lower.as_str();

    // At most one unit suffix, with an optional trailing "b"
    let units: [(&str, u64); 4] = [
        ("k", 1024),
        ("m", 1024 * 1024),
        ("g", 1024 * 1024 * 1024),
        ("t", 1024 * 1024 * 1024 * 1024),
    ];
    let (num_str, multiplier) = units
        .iter()
        .find_map(|&(unit, mult)| {
            let base = s.strip_suffix('b').unwrap_or(s);
            base.strip_suffix(unit).map(|num| (num, mult))
        })
        .unwrap_or((s, 1));

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size overflows 64 bits: {}", s))
}

/// Convert CLI mode to config mode
pub fn convert_mode(mode: ModeArg) -> AccessMode {
    match mode {
        ModeArg::Rand => AccessMode::Random,
        ModeArg::Seq => AccessMode::Sequential,
    }
}

/// Convert CLI fadvise hint to config hint
pub fn convert_fadvise(hint: FadviseArg) -> FadviseHint {
    match hint {
        FadviseArg::None => FadviseHint::None,
        FadviseArg::Seq => FadviseHint::Sequential,
        FadviseArg::Rand => FadviseHint::Random,
        FadviseArg::Dontneed => FadviseHint::DontNeed,
    }
}

impl TryFrom<&Cli> for RunConfig {
    type Error = BenchError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.record_size == 0 {
            return Err(BenchError::Configuration(
                "record-size must be greater than 0".to_string(),
            ));
        }
        if cli.total_bytes == 0 {
            return Err(BenchError::Configuration(
                "total-bytes must be greater than 0".to_string(),
            ));
        }
        let record_size = usize::try_from(cli.record_size).map_err(|_| {
            BenchError::Configuration(format!(
                "record-size {} does not fit in memory on this platform",
                cli.record_size
            ))
        })?;

        Ok(RunConfig {
            path: cli.file.clone(),
            mode: convert_mode(cli.mode),
            record_size,
            total_bytes: cli.total_bytes,
            seed: cli.seed,
            direct: cli.direct,
            fadvise: convert_fadvise(cli.fadvise),
            dry_run: cli.dry_run,
        })
    }
}
