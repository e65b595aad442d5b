// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use super::material::PovMaterial;
use super::request::NameCheck;
use crate::constants::DEFAULT_ROTATION;

/// Export options as stored in a YAML/JSON settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Declaration name. Blank means "use the object name".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// OBJ object to export; the first one when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(default, skip_serializing_if = "PovMaterial::is_default")]
    pub material: PovMaterial,

    /// Host-to-renderer axis correction in degrees (Euler XYZ).
    #[serde(
        default = "default_rotation",
        skip_serializing_if = "is_default_rotation"
    )]
    pub rotation: [f32; 3],

    #[serde(default, skip_serializing_if = "is_default_name_check")]
    pub name_check: NameCheck,
}

fn default_rotation() -> [f32; 3] {
    DEFAULT_ROTATION
}

fn is_default_rotation(v: &[f32; 3]) -> bool {
    *v == default_rotation()
}

fn is_default_name_check(v: &NameCheck) -> bool {
    *v == NameCheck::default()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            object: None,
            material: PovMaterial::default(),
            rotation: default_rotation(),
            name_check: NameCheck::default(),
        }
    }
}
