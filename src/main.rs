// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pov_mesh_export::constants::{default_output_path, ensure_extension};
use pov_mesh_export::model::obj_loader;
use pov_mesh_export::scene::{exporter, loader};
use pov_mesh_export::{ExportRequest, ExportSettings, NameCheck};

#[derive(Parser)]
#[command(name = "pov-mesh-export")]
#[command(about = "Export an OBJ mesh as a POV-Ray mesh declaration (.inc)")]
#[command(version)]
struct Cli {
    /// Input mesh file (.obj)
    input: PathBuf,

    /// Output .inc file (default: input with .inc extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export settings file (.yaml or .json)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Declaration name (default: object name)
    #[arg(short, long)]
    name: Option<String>,

    /// OBJ object to export (default: first object)
    #[arg(long)]
    object: Option<String>,

    /// Pigment color
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    color: Option<Vec<f32>>,

    #[arg(long)]
    diffuse: Option<f32>,

    #[arg(long)]
    brilliance: Option<f32>,

    #[arg(long)]
    phong: Option<f32>,

    #[arg(long)]
    specular: Option<f32>,

    #[arg(long)]
    reflection: Option<f32>,

    /// Axis correction in degrees (default: 0 180 180)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    rotate: Option<Vec<f32>>,

    /// Write the declaration name as given, without identifier checks
    #[arg(long)]
    verbatim_name: bool,

    /// Print the declaration instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Save the effective settings to this file
    #[arg(long)]
    save_settings: Option<PathBuf>,
}

/// Repeated three-value flags append; the last occurrence wins.
fn last_triple(values: &[f32]) -> Option<[f32; 3]> {
    match values {
        [.., a, b, c] => Some([*a, *b, *c]),
        _ => None,
    }
}

impl Cli {
    /// Settings file first, then command-line flags on top.
    fn effective_settings(&self) -> Result<ExportSettings> {
        let mut settings = match &self.settings {
            Some(path) => loader::load_settings(path)?,
            None => ExportSettings::default(),
        };

        if let Some(name) = &self.name {
            settings.name = name.clone();
        }
        if let Some(object) = &self.object {
            settings.object = Some(object.clone());
        }
        if let Some(color) = self.color.as_deref().and_then(last_triple) {
            settings.material.color = color;
        }
        let material = &mut settings.material;
        let overrides = [
            (self.diffuse, &mut material.diffuse),
            (self.brilliance, &mut material.brilliance),
            (self.phong, &mut material.phong),
            (self.specular, &mut material.specular),
            (self.reflection, &mut material.reflection),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(rotate) = self.rotate.as_deref().and_then(last_triple) {
            settings.rotation = rotate;
        }
        if self.verbatim_name {
            settings.name_check = NameCheck::Verbatim;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.effective_settings()?;

    if let Some(path) = &cli.save_settings {
        loader::save_settings(&settings, path)?;
    }

    let objects = obj_loader::load_obj(&cli.input)?;
    let object = obj_loader::select_object(objects, settings.object.as_deref())?;

    let destination = match &cli.output {
        Some(path) => ensure_extension(path),
        None => default_output_path(&cli.input),
    };
    log::debug!("Exporting object '{}' to {}", object.name, destination.display());

    let request = ExportRequest::new(object.mesh, object.name, destination)
        .with_mesh_name(settings.name)
        .with_material(settings.material)
        .with_rotation(settings.rotation)
        .with_name_check(settings.name_check);

    if cli.stdout {
        let text = exporter::convert(&request)?;
        std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
    } else {
        exporter::export(&request)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ExportSettings {
        let mut argv = vec!["pov-mesh-export", "model.obj"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
            .unwrap()
            .effective_settings()
            .unwrap()
    }

    #[test]
    fn test_repeated_color_last_wins() {
        let settings = parse(&["--color", "1", "1", "1", "--color", "0", "0.5", "0"]);
        assert_eq!(settings.material.color, [0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_repeated_rotate_last_wins() {
        let settings = parse(&["--rotate", "0", "180", "180", "--rotate", "-90", "0", "0"]);
        assert_eq!(settings.rotation, [-90.0, 0.0, 0.0]);
    }

    #[test]
    fn test_finish_flags_override_defaults() {
        let settings = parse(&["--phong", "0", "--specular", "0.3", "--verbatim-name"]);
        assert_eq!(settings.material.phong, 0.0);
        assert_eq!(settings.material.specular, 0.3);
        assert_eq!(settings.material.diffuse, 0.7);
        assert_eq!(settings.name_check, NameCheck::Verbatim);
    }
}
