// SPDX-License-Identifier: MIT

//! The `utils` module defines utility functions common to `ignore`'s modules.

use std::path::PathBuf;

use crate::errors::{Error, ErrorKind};

/// Returns the current working directory.
pub fn current_dir() -> Result<PathBuf, Error> {
    std::env::current_dir().map_err(|err| Error::new(ErrorKind::LocateWorkingDir, err))
}
