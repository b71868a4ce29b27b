//! Utilities pertaining to filesystem and standard stream output
//!

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;

/// Open a buffered report writer to `filename`, or to stdout if no filename is given
///
/// An existing file is overwritten.
///
pub fn open_output_writer(filename: Option<&Utf8Path>) -> io::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match filename {
        Some(filename) => {
            let f = File::create(filename).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("Can't create output file '{filename}': {e}"),
                )
            })?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}
