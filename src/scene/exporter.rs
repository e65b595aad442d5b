// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;

use super::material::PovMaterial;
use super::request::ExportRequest;
use crate::constants::{COORD_PRECISION, PARAM_PRECISION};
use crate::error::ExportError;

/// Render the request as a POV-Ray `#declare` mesh block.
///
/// Every triangle is resolved before any text is produced, so a malformed mesh
/// yields an error and no output at all.
pub fn convert(request: &ExportRequest) -> Result<String, ExportError> {
    let name = request.declaration_name()?;
    if request.rotation.iter().any(|v| !v.is_finite()) {
        return Err(ExportError::InvalidRotation {
            rotation: request.rotation,
        });
    }
    let triangles = request.mesh.resolve()?;
    log::debug!("Declaring mesh '{}' ({} triangles)", name, triangles.len());

    let degenerate = request.mesh.degenerate_count();
    if degenerate > 0 {
        log::warn!("Mesh '{name}' has {degenerate} degenerate triangle(s)");
    }
    if triangles.is_empty() {
        log::warn!("Mesh '{name}' has no triangles");
    }

    let material = request.material.sanitized();
    if material != request.material {
        log::warn!("Material values outside [0, 1] were clamped for '{name}'");
    }

    let mut out = format!("#declare {name} = mesh {{\n");
    for tri in &triangles {
        out.push('\t');
        out.push_str(&format_triangle(tri));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "\ttexture{{ pigment{{ color rgb< {}, {}, {}> }}\n",
        format_param(material.color[0]),
        format_param(material.color[1]),
        format_param(material.color[2]),
    ));
    out.push_str(&format_finish(&material));
    out.push_str("\t}\n");

    out.push('\n');
    out.push_str(&format!("\t{}\n", format_rotation(request.rotation)));
    out.push_str("};\n");
    Ok(out)
}

/// Convert and write the result to the request's destination in one step.
pub fn export(request: &ExportRequest) -> Result<(), ExportError> {
    let text = convert(request)?;
    write_atomically(&request.destination, &text)?;
    log::info!(
        "Exported {} triangles to {}",
        request.mesh.triangles.len(),
        request.destination.display()
    );
    Ok(())
}

/// Fixed-point vertex coordinate, never scientific notation.
pub fn format_coord(v: f32) -> String {
    format!("{:.*}", COORD_PRECISION, v)
}

/// Color channel or finish value.
pub fn format_param(v: f32) -> String {
    format!("{:.*}", PARAM_PRECISION, v)
}

pub fn format_vector(p: Vec3) -> String {
    format!(
        "<{}, {}, {}>",
        format_coord(p.x),
        format_coord(p.y),
        format_coord(p.z)
    )
}

pub fn format_triangle(corners: &[Vec3; 3]) -> String {
    let [a, b, c] = corners.map(format_vector);
    format!("triangle {{ {a}, {b}, {c} }}")
}

/// `finish { ... }` block holding only the terms above zero.
pub fn format_finish(material: &PovMaterial) -> String {
    let mut out = String::from("\t\tfinish {\n");
    for (keyword, value) in material.active_finish_terms() {
        out.push_str(&format!("\t\t\t{keyword} {}\n", format_param(value)));
    }
    out.push_str("\t\t}\n");
    out
}

pub fn format_rotation(degrees: [f32; 3]) -> String {
    format!("rotate <{}, {}, {}>", degrees[0], degrees[1], degrees[2])
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write next to `path` first and rename over it, so readers never see half a file.
fn write_atomically(path: &Path, text: &str) -> Result<(), ExportError> {
    let tmp = temp_path(path);
    let result = fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
