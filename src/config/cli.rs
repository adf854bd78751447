//! CLI argument parsing using clap

use super::cli_convert::parse_size;
use super::DEFAULT_SEED;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// recsize-bench - deterministic record-size read workload generator
///
/// Issues total-bytes / record-size positioned reads against an existing
/// file and exits silently. Pair it with an external tracer to observe the
/// I/O stack.
#[derive(Parser, Debug)]
#[command(name = "recsize-bench")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Existing file to read from
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Access pattern
    #[arg(long, value_enum)]
    pub mode: ModeArg,

    /// Bytes per read (e.g., 4096, 4k, 1M)
    #[arg(long, value_name = "BYTES", value_parser = parse_size)]
    pub record_size: u64,

    /// Working-set size; reads are drawn from [0, total-bytes)
    #[arg(long, value_name = "BYTES", value_parser = parse_size)]
    pub total_bytes: u64,

    /// Seed for random mode
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Use direct IO (O_DIRECT) to bypass the page cache
    /// Note: record size must be a multiple of the filesystem block size
    /// (st_blksize, commonly 4096)
    #[arg(long)]
    pub direct: bool,

    /// posix_fadvise hint applied to the file before the run
    #[arg(long, value_enum, default_value = "none")]
    pub fadvise: FadviseArg,

    /// Dry run - validate file and parameters without issuing reads
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Access mode as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Uniform random blocks
    Rand,
    /// Sequential blocks
    Seq,
}

/// fadvise hint as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FadviseArg {
    /// No hint
    None,
    /// POSIX_FADV_SEQUENTIAL
    Seq,
    /// POSIX_FADV_RANDOM
    Rand,
    /// POSIX_FADV_DONTNEED
    Dontneed,
}

impl Cli {
    /// Parse CLI arguments from the process environment
    ///
    /// Unlike `Cli::parse`, errors are returned instead of exiting so the
    /// caller controls the exit status.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const BASE: [&str; 9] = [
        "recsize-bench",
        "--file", "data.bin",
        "--mode", "seq",
        "--record-size", "4096",
        "--total-bytes", "8192",
    ];

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(BASE).unwrap();
        assert_eq!(cli.mode, ModeArg::Seq);
        assert_eq!(cli.record_size, 4096);
        assert_eq!(cli.total_bytes, 8192);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.fadvise, FadviseArg::None);
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_all_options() {
        let mut args = BASE.to_vec();
        args.extend(["--seed", "99", "--direct", "--fadvise", "dontneed", "--dry-run", "--debug"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.seed, 99);
        assert!(cli.direct);
        assert_eq!(cli.fadvise, FadviseArg::Dontneed);
        assert!(cli.dry_run);
        assert!(cli.debug);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let mut args = BASE.to_vec();
        args[4] = "random";
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_required_rejected() {
        let err = Cli::try_parse_from(&BASE[..7]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut args = BASE.to_vec();
        args.push("--bogus");
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_incomplete_flag_rejected() {
        let mut args = BASE.to_vec();
        args.push("--seed");
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_repeated_flag_keeps_last_value() {
        let mut args = BASE.to_vec();
        args.extend(["--seed", "1", "--seed", "2", "--direct", "--direct"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.seed, 2);
        assert!(cli.direct);
    }

    #[test]
    fn test_negative_seed_rejected() {
        let mut args = BASE.to_vec();
        args.push("--seed=-1");
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let mut args = BASE.to_vec();
        args.extend(["--seed", "-1"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_bad_size_rejected() {
        let mut args = BASE.to_vec();
        args[6] = "lots";
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
