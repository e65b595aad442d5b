// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod exporter;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod request;
#[allow(clippy::module_inception)]
pub mod scene;
