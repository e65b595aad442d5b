// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLOR, DEFAULT_DIFFUSE, DEFAULT_PHONG};

/// POV-Ray texture: a flat `rgb` pigment plus the five finish terms the exporter
/// knows about. Every value is expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PovMaterial {
    #[serde(default = "default_color", skip_serializing_if = "is_default_color")]
    pub color: [f32; 3],

    #[serde(
        default = "default_diffuse",
        skip_serializing_if = "is_default_diffuse"
    )]
    pub diffuse: f32,

    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub brilliance: f32,

    #[serde(default = "default_phong", skip_serializing_if = "is_default_phong")]
    pub phong: f32,

    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub specular: f32,

    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub reflection: f32,
}

fn default_color() -> [f32; 3] {
    DEFAULT_COLOR
}

fn default_diffuse() -> f32 {
    DEFAULT_DIFFUSE
}

fn default_phong() -> f32 {
    DEFAULT_PHONG
}

fn is_zero_f32(v: &f32) -> bool {
    *v == 0.0
}

fn is_default_color(v: &[f32; 3]) -> bool {
    *v == default_color()
}

fn is_default_diffuse(v: &f32) -> bool {
    *v == default_diffuse()
}

fn is_default_phong(v: &f32) -> bool {
    *v == default_phong()
}

impl Default for PovMaterial {
    fn default() -> Self {
        Self {
            color: default_color(),
            diffuse: default_diffuse(),
            brilliance: 0.0,
            phong: default_phong(),
            specular: 0.0,
            reflection: 0.0,
        }
    }
}

fn unit_clamp(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl PovMaterial {
    /// Copy with every value clamped to `[0, 1]`; NaN becomes `0.0`.
    pub fn sanitized(&self) -> Self {
        Self {
            color: self.color.map(unit_clamp),
            diffuse: unit_clamp(self.diffuse),
            brilliance: unit_clamp(self.brilliance),
            phong: unit_clamp(self.phong),
            specular: unit_clamp(self.specular),
            reflection: unit_clamp(self.reflection),
        }
    }

    /// Finish keywords in emission order, paired with their values.
    pub fn finish_terms(&self) -> [(&'static str, f32); 5] {
        [
            ("diffuse", self.diffuse),
            ("brilliance", self.brilliance),
            ("phong", self.phong),
            ("specular", self.specular),
            ("reflection", self.reflection),
        ]
    }

    /// Finish terms that differ from POV-Ray's own zero default. The check is a
    /// strict `> 0.0`, so tiny values that round to `0.00` are still present.
    pub fn active_finish_terms(&self) -> impl Iterator<Item = (&'static str, f32)> {
        self.finish_terms().into_iter().filter(|&(_, v)| v > 0.0)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
