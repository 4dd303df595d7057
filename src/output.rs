// SPDX-License-Identifier: MIT

//! The `output` module renders catalog payloads: the template listing to a stream, fetched
//! templates to a `.gitignore` file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::catalog::OUTPUT_FILE;
use crate::errors::{Error, ErrorKind};

/// Prints the names in a JSON array listing, one per line.
///
/// Template names are plain identifiers in practice; names holding commas, quotes or brackets
/// are not expected and get no special treatment.
pub fn render_list<W: Write>(raw: &[u8], out: &mut W) -> Result<(), Error> {
    let templates: Vec<String> =
        serde_json::from_slice(raw).map_err(|err| Error::new(ErrorKind::MalformedListing, err))?;
    debug!("catalog lists {} templates", templates.len());

    for template in &templates {
        writeln!(out, "{}", template).map_err(|err| Error::new(ErrorKind::WriteOutput, err))?;
    }

    Ok(())
}

/// Writes `buffer` to `.gitignore` within `output_dir`, replacing any existing file.
///
/// The directory must exist. Returns the path written.
pub fn write_file<W: Write>(buffer: &[u8], output_dir: &Path, out: &mut W) -> Result<PathBuf, Error> {
    let path = output_dir.join(OUTPUT_FILE);
    debug!("writing {} bytes to: {}", buffer.len(), path.display());

    fs::write(&path, buffer).map_err(|err| {
        Error::with_message(
            ErrorKind::WriteOutput,
            format!("Failed to write {}: {}", path.display(), err),
        )
    })?;

    writeln!(out, "new file: {}", path.display())
        .map_err(|err| Error::new(ErrorKind::WriteOutput, err))?;

    Ok(path)
}
