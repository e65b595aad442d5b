// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::material::PovMaterial;
use super::mesh::Mesh;
use crate::constants::{DEFAULT_ROTATION, MAX_IDENTIFIER_LEN};
use crate::error::ExportError;

/// How strictly the declaration name is checked before it is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCheck {
    /// Must be a POV-Ray identifier.
    #[default]
    Identifier,
    /// Written as given, whatever it contains.
    Verbatim,
}

/// Everything one export needs. Built right before the export and dropped after.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub mesh: Mesh,
    /// Name of the source object, used when `mesh_name` is empty.
    pub object_name: String,
    pub mesh_name: String,
    pub material: PovMaterial,
    /// Degrees, Euler XYZ.
    pub rotation: [f32; 3],
    pub name_check: NameCheck,
    pub destination: PathBuf,
}

impl ExportRequest {
    pub fn new(mesh: Mesh, object_name: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            mesh,
            object_name: object_name.into(),
            mesh_name: String::new(),
            material: PovMaterial::default(),
            rotation: DEFAULT_ROTATION,
            name_check: NameCheck::default(),
            destination: destination.into(),
        }
    }

    pub fn with_mesh_name(mut self, name: impl Into<String>) -> Self {
        self.mesh_name = name.into();
        self
    }

    pub fn with_material(mut self, material: PovMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_rotation(mut self, rotation: [f32; 3]) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_name_check(mut self, name_check: NameCheck) -> Self {
        self.name_check = name_check;
        self
    }

    /// The name the mesh is declared under, checked per `name_check`.
    pub fn declaration_name(&self) -> Result<&str, ExportError> {
        let name = resolve_name(&self.mesh_name, &self.object_name);
        if self.name_check == NameCheck::Identifier {
            validate_identifier(name)?;
        }
        Ok(name)
    }
}

/// An empty mesh name falls back to the object name; anything else is used as is.
pub fn resolve_name<'a>(mesh_name: &'a str, object_name: &'a str) -> &'a str {
    if mesh_name.is_empty() {
        object_name
    } else {
        mesh_name
    }
}

// Keywords that start or sit inside a mesh declaration. Not the full POV-Ray
// reserved word list; other keywords still pass and fail later in the renderer.
const RESERVED_WORDS: &[&str] = &[
    "background", "box", "camera", "color", "colour", "cone", "cylinder", "declare",
    "diffuse", "brilliance", "finish", "global_settings", "include", "light_source",
    "local", "macro", "mesh", "mesh2", "normal", "object", "phong", "pigment", "plane",
    "reflection", "rgb", "rotate", "scale", "smooth_triangle", "specular", "sphere",
    "texture", "torus", "translate", "triangle", "union", "difference", "intersection",
    "merge", "x", "y", "z", "pi", "true", "false", "on", "off", "yes", "no",
];

/// Check that `name` is usable as a POV-Ray identifier. Only the keywords in
/// `RESERVED_WORDS` are rejected, the full keyword set is not checked.
pub fn validate_identifier(name: &str) -> Result<(), ExportError> {
    let invalid = |reason: &'static str| -> Result<(), ExportError> {
        Err(ExportError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return invalid("name is empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return invalid("must start with an ASCII letter or underscore");
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return invalid("may only contain ASCII letters, digits and underscores");
    }
    if name.len() > MAX_IDENTIFIER_LEN {
        return invalid("longer than 40 characters");
    }
    if RESERVED_WORDS.contains(&name) {
        return invalid("is a POV-Ray keyword");
    }
    Ok(())
}
