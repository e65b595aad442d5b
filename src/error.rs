// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single mesh export. None of them leave a partial file behind.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed mesh: {0}")]
    MalformedMesh(#[from] MeshDefect),

    #[error("invalid declaration name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("rotation must be finite, got {rotation:?}")]
    InvalidRotation { rotation: [f32; 3] },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshDefect {
    #[error("triangle {triangle} references unknown vertex index {index}")]
    UnknownVertex { triangle: usize, index: u32 },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: u32 },
}
