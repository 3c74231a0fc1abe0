pub mod output;

pub use output::{create_writer, AggregateReport, OutputFormat, OutputWriter, ScoreReport};

use crate::core::errors::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input into memory; the path `-` reads standard input.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
