// src/args.rs
use clap::Parser;

use crate::parsers;

const AFTER_HELP: &str = "\
Kinds are detected from file content, not from the extension:
  doc   Word / OpenDocument text
  xls   Excel / OpenDocument spreadsheet
  ppt   PowerPoint / OpenDocument presentation
  zip   zip, tar, gzip, bzip2, xz, lzma, 7z, rar, compress archives
Any other keyword is compared with the MIME major type (image, video, audio, text, ...).

Selected paths are printed to stdout, one per line; diagnostics go to stderr.";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "latest",
    version = crate::VERSION,
    about = "Select files by modification time, with content-based kind filtering",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Select the N newest files [default: 1]
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        value_parser = parsers::parse_positive_usize,
        conflicts_with = "oldest"
    )]
    pub newest: Option<usize>,

    /// Select the N oldest files
    #[arg(short = 'o', long, value_name = "N", value_parser = parsers::parse_positive_usize)]
    pub oldest: Option<usize>,

    /// File kind: doc, xls, ppt, zip, or a MIME major type (image, video, audio, text, ...)
    #[arg(short = 'k', long, value_name = "KEYWORD")]
    pub kind: Option<String>,

    /// Only report fatal errors on stderr
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log pattern expansion, modification times and sniffed types
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Exit successfully (and silently) when no files are selected
    #[arg(short = '0', long)]
    pub allow_empty_result: bool,

    /// Files or glob patterns (`**` recurses, a leading `~` is the home directory)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,
}
