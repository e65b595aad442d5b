// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};
use glam::Vec3;

use crate::scene::mesh::Mesh;

/// One named object from an OBJ file.
#[derive(Debug, Clone)]
pub struct LoadedObject {
    pub name: String,
    pub mesh: Mesh,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

pub fn load_obj(path: &Path) -> Result<Vec<LoadedObject>> {
    let (models, _materials) = tobj::load_obj(path, &load_options())
        .with_context(|| format!("Failed to load OBJ: {}", path.display()))?;

    let fallback = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    let objects = collect_objects(models, fallback);

    log::info!(
        "Loaded OBJ '{}': {} objects, {} triangles",
        path.display(),
        objects.len(),
        objects.iter().map(|o| o.mesh.triangles.len()).sum::<usize>()
    );
    Ok(objects)
}

/// Parse OBJ text from memory. Material libraries are not followed.
pub fn parse_obj<R: BufRead>(reader: &mut R, fallback_name: &str) -> Result<Vec<LoadedObject>> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .context("Failed to parse OBJ data")?;
    Ok(collect_objects(models, fallback_name))
}

fn collect_objects(models: Vec<tobj::Model>, fallback_name: &str) -> Vec<LoadedObject> {
    models
        .into_iter()
        .map(|model| {
            let positions: Vec<Vec3> = model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2]))
                .collect();
            let mesh = Mesh::from_indexed(&positions, &model.mesh.indices);
            let name = if model.name.trim().is_empty() || model.name == "unnamed_object" {
                fallback_name.to_string()
            } else {
                model.name
            };
            LoadedObject { name, mesh }
        })
        .collect()
}

/// Pick the object called `name`, or the first one when no name is given.
pub fn select_object(objects: Vec<LoadedObject>, name: Option<&str>) -> Result<LoadedObject> {
    let Some(name) = name else {
        return objects
            .into_iter()
            .next()
            .context("OBJ file contains no objects");
    };

    let available: Vec<String> = objects.iter().map(|o| o.name.clone()).collect();
    match objects.into_iter().find(|o| o.name == name) {
        Some(object) => Ok(object),
        None => bail!(
            "No object named '{name}' (available: {})",
            available.join(", ")
        ),
    }
}
