// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export triangulated meshes as POV-Ray `#declare` mesh blocks.

pub mod constants;
pub mod error;
pub mod model;
pub mod scene;

pub use error::{ExportError, MeshDefect};
pub use scene::exporter::{convert, export};
pub use scene::material::PovMaterial;
pub use scene::mesh::{Mesh, Triangle, Vertex};
pub use scene::request::{ExportRequest, NameCheck};
pub use scene::scene::ExportSettings;
