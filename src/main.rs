//! fastacheck - FASTA Structure Validator
//!
//! Validates FASTA files from the command line.
//!
//! ## Usage
//!
//! ```bash
//! fastacheck reference.fasta            # Validate
//! fastacheck -H V_IGH.fasta J_IGH.fasta # Validate and list headers
//! fastacheck -s upload.fa               # Quick sniff only
//! RUST_LOG=debug fastacheck ref.fa      # Verbose logging
//! ```
//!
//! The exit status is non-zero when any file fails.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use fastacheck::fasta::has_fasta_extension;
use fastacheck::{
    decode_content, extract_headers, looks_like_fasta, validate_content, FastaError,
    FileContentProvider, FsProvider,
};

/// fastacheck - Validate the structure of FASTA files
///
/// Each file is checked line by line; the first problem found is reported
/// with its line number.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA files to validate
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only run the quick structural sniff instead of full validation
    #[arg(short = 's', long = "sniff")]
    sniff: bool,

    /// List header lines (line number and text) of each file
    #[arg(short = 'H', long = "headers")]
    headers: bool,

    /// Print nothing; report through the exit status only
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Checks one file and writes its report line(s). Returns whether it passed.
async fn check_file<W: Write>(
    provider: &FsProvider,
    path: &Path,
    args: &Args,
    out: &mut W,
) -> Result<bool> {
    if !has_fasta_extension(path) {
        log::warn!("{} does not have a FASTA extension", path.display());
    }

    let data = match provider.fetch(path).await {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            if !args.quiet {
                writeln!(out, "{}: {}", path.display(), FastaError::Io(e))?;
            }
            return Ok(false);
        }
    };
    let content = decode_content(&data);

    let passed = if args.sniff {
        let passed = looks_like_fasta(&content);
        if !args.quiet {
            let verdict = if passed { "looks like FASTA" } else { "does not look like FASTA" };
            writeln!(out, "{}: {}", path.display(), verdict)?;
        }
        passed
    } else {
        let result = validate_content(&content);
        if !args.quiet {
            match (&result.error, result.sequence_count) {
                (Some(error), _) => writeln!(out, "{}: {}", path.display(), error)?,
                (None, count) => writeln!(
                    out,
                    "{}: OK ({} sequences)",
                    path.display(),
                    count.unwrap_or_default()
                )?,
            }
        }
        result.is_valid
    };

    if args.headers && !args.quiet {
        for header in extract_headers(&content) {
            writeln!(out, "  {:>6}  {}", header.line_number, header.header_text)?;
        }
    }

    Ok(passed)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let provider = FsProvider;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let mut failed = 0;
    for path in &args.files {
        let passed = runtime.block_on(check_file(&provider, path.as_path(), &args, &mut handle))?;
        if !passed {
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed validation", failed, args.files.len());
    }

    Ok(())
}
