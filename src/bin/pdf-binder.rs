//! PDF Binder CLI tool
//!
//! Merges PDF files in the order given by numbers embedded in their
//! filenames and writes the combined document to disk.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use glob::glob;
use std::path::PathBuf;
use std::process;

use pdf_binder::pdf::{merge_files, MergeOptions};
use pdf_binder::UnkeyedPlacement;

/// PDF Binder - merge PDFs ordered by filename numbers
#[derive(Parser)]
#[command(name = "pdf-binder")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Merge scanned handouts; '(8)' style numbers decide the order
    pdf-binder -o combined.pdf \"scan (1).pdf\" \"scan (2).pdf\" cover.pdf

    # Glob patterns work too
    pdf-binder -o handout.pdf \"*.pdf\"

    # Put files without a number after the numbered ones
    pdf-binder -o combined.pdf --unkeyed last *.pdf

    # Merge and open the result
    pdf-binder -o combined.pdf --open *.pdf

ORDERING RULES:
    - The last parenthesized number wins: 'name (8).pdf' -> 8
    - Otherwise the number before the extension: 'name 8.pdf' -> 8
    - Files without a number keep their command-line order")]
struct Cli {
    /// Input PDF files. Supports glob patterns like "*.pdf"
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output PDF file path
    #[arg(short, long, default_value = "merged.pdf")]
    output: PathBuf,

    /// Where files without a filename number are placed
    #[arg(long, value_enum, default_value = "first")]
    unkeyed: Unkeyed,

    /// Open the output file after creation
    #[arg(long)]
    open: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Unkeyed {
    /// Before all numbered files (default)
    First,
    /// After all numbered files
    Last,
}

impl From<Unkeyed> for UnkeyedPlacement {
    fn from(value: Unkeyed) -> Self {
        match value {
            Unkeyed::First => UnkeyedPlacement::First,
            Unkeyed::Last => UnkeyedPlacement::Last,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let inputs = expand_globs(cli.inputs)?;

    eprintln!("Merging {} PDF files...", inputs.len());

    let options = MergeOptions {
        unkeyed: cli.unkeyed.into(),
    };

    let result = merge_files(&inputs, &options)?;

    eprintln!("Resolved order:");
    for entry in &result.order {
        match entry.key {
            Some(key) => eprintln!("  {} (key {})", entry.name, key),
            None => eprintln!("  {} (no key)", entry.name),
        }
    }

    std::fs::write(&cli.output, &result.bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    eprintln!("Merged to: {}", cli.output.display());

    if cli.open {
        open_file(&cli.output)?;
    }

    Ok(())
}

/// Expand glob patterns in input paths
///
/// Literal paths pass through in the order given; matches within one glob
/// pattern are sorted so runs are reproducible. File-level ordering is then
/// decided by the filename keys, not by this order.
fn expand_globs(patterns: Vec<String>) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = Vec::new();
            for entry in glob(&pattern).with_context(|| format!("invalid pattern: {}", pattern))? {
                match entry {
                    Ok(path) => matched.push(path),
                    Err(e) => eprintln!("Warning: glob error for {}: {}", pattern, e),
                }
            }
            if matched.is_empty() {
                bail!("no files matched pattern: {}", pattern);
            }
            matched.sort();
            paths.extend(matched);
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

/// Open a file with the system default application
fn open_file(path: &PathBuf) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}
