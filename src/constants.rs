// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

// Numeric precision of the emitted scene text
pub const COORD_PRECISION: usize = 4;
pub const PARAM_PRECISION: usize = 2;

// Material defaults
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_DIFFUSE: f32 = 0.7;
pub const DEFAULT_PHONG: f32 = 1.0;

// Blender is Z-up, POV-Ray is Y-up and left-handed. Degrees, Euler XYZ.
pub const DEFAULT_ROTATION: [f32; 3] = [0.0, 180.0, 180.0];

// POV-Ray identifiers
pub const MAX_IDENTIFIER_LEN: usize = 40;

// Output files
pub const INC_EXTENSION: &str = "inc";
pub const ACCEPTED_EXTENSIONS: &[&str] = &["inc", "pov"];

/// Force a POV-Ray extension onto `path`. `.inc` and `.pov` are kept as given,
/// anything else (or nothing) becomes `.inc`.
pub fn ensure_extension(path: &Path) -> PathBuf {
    let accepted = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ACCEPTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if accepted {
        path.to_path_buf()
    } else {
        path.with_extension(INC_EXTENSION)
    }
}

/// Output path used when none is given: the input next to itself, as `.inc`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(INC_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_extension() {
        assert_eq!(ensure_extension(Path::new("out")), PathBuf::from("out.inc"));
        assert_eq!(
            ensure_extension(Path::new("out.txt")),
            PathBuf::from("out.inc")
        );
        assert_eq!(
            ensure_extension(Path::new("dir/out.inc")),
            PathBuf::from("dir/out.inc")
        );
        assert_eq!(
            ensure_extension(Path::new("scene.POV")),
            PathBuf::from("scene.POV")
        );
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("models/teapot.obj")),
            PathBuf::from("models/teapot.inc")
        );
    }
}
