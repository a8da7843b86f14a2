//! File plumbing shared by compression and decompression: naming the output, refusing to clobber
//! existing files, and cleaning up inputs afterwards.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::CodecError;
use crate::tools::cli::{Mode, Opts, Output};

/// Extension appended when a decompressed file name can't be worked out from its input.
const FALLBACK_EXTENSION: &str = ".out";

/// Work out where the output for `input` goes.
pub fn output_path(input: &str, opts: &Opts) -> PathBuf {
    let ext = opts.codec.extension();
    match opts.op_mode {
        Mode::Zip => PathBuf::from(format!("{}{}", input, ext)),
        Mode::Unzip | Mode::Test => match input.strip_suffix(ext) {
            Some(stem) if !stem.is_empty() => PathBuf::from(stem),
            _ => PathBuf::from(format!("{}{}", input, FALLBACK_EXTENSION)),
        },
    }
}

/// Open the output channel for `input`: stdout, or a freshly created file next to the input.
pub fn open_output(input: &str, opts: &Opts) -> Result<(Box<dyn Write>, Option<PathBuf>), CodecError> {
    if opts.output == Output::Stdout {
        return Ok((Box::new(BufWriter::new(io::stdout())), None));
    }
    let path = output_path(input, opts);
    let mut open = OpenOptions::new();
    open.write(true);
    if opts.force_overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }
    let file = open.open(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            error!(
                "Output file {} already exists. Use --force to overwrite it.",
                path.display()
            );
        }
        CodecError::Io(e)
    })?;
    info!("Writing output to {}", path.display());
    Ok((Box::new(BufWriter::new(file)), Some(path)))
}

/// Open an input file for reading, reporting which one failed.
pub fn open_input(input: &str) -> Result<File, CodecError> {
    File::open(input).map_err(|e| {
        error!("Cannot read from the file {}", input);
        CodecError::Io(e)
    })
}

/// Remove the input once its output is safely written, unless the options say to keep it.
pub fn finish_input(input: &str, opts: &Opts) -> Result<(), CodecError> {
    if opts.keep_input_files || opts.output == Output::Stdout {
        return Ok(());
    }
    fs::remove_file(Path::new(input))?;
    info!("Removed input file {}", input);
    Ok(())
}

/// Best effort removal of a half written output after a failure.
pub fn discard_output(path: Option<PathBuf>) {
    if let Some(path) = path {
        if fs::remove_file(&path).is_ok() {
            info!("Removed incomplete output {}", path.display());
        }
    }
}
