use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::huffman_coding::header::HeaderFormat;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The two codecs on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Huffman,
    Lzw,
}
impl Codec {
    /// File name extension used for compressed output.
    pub fn extension(&self) -> &'static str {
        match self {
            Codec::Huffman => ".huf",
            Codec::Lzw => ".lzw",
        }
    }
}
impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Opts {
    /// Codec used
    pub codec: Codec,
    /// Vec of names of files to read for input. Empty means stdin.
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Framing of the Huffman frequency header
    pub header: HeaderFormat,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            codec: Codec::Huffman,
            files: vec![],
            force_overwrite: false,
            header: HeaderFormat::Binary,
            keep_input_files: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman and LZW file compressor",
    long_about = "
    Compresses files with either a static Huffman tree (the default) or an adaptive LZW
    dictionary. Huffman output starts with a frequency header that lets the decoder rebuild
    the tree. LZW output is plain text: one decimal code per dictionary match.

    If no file names are given, input is read from stdin and output goes to stdout."
)]
pub struct Args {
    /// Files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress", conflicts_with_all = &["compress", "test"])]
    decompress: bool,

    /// Test compressed file integrity
    #[clap(short = 't', long = "test", conflicts_with = "compress")]
    test: bool,

    /// Use the LZW dictionary coder instead of Huffman
    #[clap(short = 'l', long = "lzw")]
    lzw: bool,

    /// Write (or expect) the Huffman header in text form
    #[clap(long = "text-header", conflicts_with = "lzw")]
    text_header: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress noncritical error messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u64,
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        let mut opts = Opts::new();
        opts.files = args.files;
        if args.decompress {
            opts.op_mode = Mode::Unzip
        } else if args.test {
            opts.op_mode = Mode::Test
        };
        if args.lzw {
            opts.codec = Codec::Lzw
        };
        if args.text_header {
            opts.header = HeaderFormat::Text
        };
        opts.force_overwrite = args.force;
        opts.keep_input_files = args.keep;
        // No files means stdin, and stdin always goes to stdout
        if args.stdout || opts.files.is_empty() {
            opts.output = Output::Stdout
        };
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Errors,
                1 => Verbosity::Warnings,
                2 => Verbosity::Info,
                3 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        opts
    }
}

/// Parse the command line into Opts and set the log level to match.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Codec set to {}", opts.codec);
    if opts.codec == Codec::Huffman {
        info!("Header format set to {}", opts.header);
    }
    if opts.files.is_empty() {
        warn!("Reading input from stdin");
    } else {
        info!("Getting input from {} file(s)", opts.files.len());
    }
    info!("Sending output to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, Codec, Mode, Opts, Output, Verbosity};
    use crate::huffman_coding::header::HeaderFormat;
    use clap::Parser;

    fn parse(args: &[&str]) -> Opts {
        Opts::from(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["huffzip", "a.txt"]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.codec, Codec::Huffman);
        assert_eq!(opts.header, HeaderFormat::Binary);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.verbose, Verbosity::Errors);
        assert_eq!(opts.files, vec!["a.txt".to_string()]);
        assert!(!opts.keep_input_files);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["huffzip", "-d", "-l", "-k", "-f", "-vvv", "x.lzw", "y.lzw"]);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.codec, Codec::Lzw);
        assert!(opts.keep_input_files);
        assert!(opts.force_overwrite);
        assert_eq!(opts.verbose, Verbosity::Debug);
        assert_eq!(opts.files.len(), 2);

        let opts = parse(&["huffzip", "--text-header", "-q", "-t", "x.huf"]);
        assert_eq!(opts.op_mode, Mode::Test);
        assert_eq!(opts.header, HeaderFormat::Text);
        assert_eq!(opts.verbose, Verbosity::Quiet);
    }

    #[test]
    fn stdin_goes_to_stdout_test() {
        let opts = parse(&["huffzip", "-z"]);
        assert!(opts.files.is_empty());
        assert_eq!(opts.output, Output::Stdout);
    }

    #[test]
    fn conflicts_test() {
        assert!(Args::try_parse_from(["huffzip", "-z", "-d"]).is_err());
        assert!(Args::try_parse_from(["huffzip", "--lzw", "--text-header"]).is_err());
    }

    #[test]
    fn extension_test() {
        assert_eq!(Codec::Huffman.extension(), ".huf");
        assert_eq!(Codec::Lzw.extension(), ".lzw");
        assert_eq!(Verbosity::Trace.level_filter(), log::LevelFilter::Trace);
    }
}
