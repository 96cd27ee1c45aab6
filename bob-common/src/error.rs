// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error taxonomy shared by the library and the tool.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal for the run; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// The port could not be opened, or a read/write failed at the transport
    /// level. A plain read timeout is not an error.
    #[error("{context}: {source}")]
    Connection {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Key or payload bytes could not be turned into an output file.
    #[error("cannot decode record for key {key:?}: {reason}")]
    Decode { key: String, reason: String },

    /// Creating the output directory or appending to a file failed.
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The confirmation prompt could not be shown or answered.
    #[error("confirmation prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// A terminated line with no field separator.
    #[error("malformed record (no ',' separator): {line:?}")]
    MalformedRecord { line: String },
}

impl Error {
    pub fn connection(context: impl Into<String>, source: io::Error) -> Self {
        Error::Connection {
            context: context.into(),
            source,
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
