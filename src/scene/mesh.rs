// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use glam::Vec3;

use crate::error::MeshDefect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub index: u32,
    pub position: Vec3,
}

/// Three vertex indices into the owning mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [u32; 3],
}

impl Triangle {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = self.vertices;
        a == b || b == c || a == c
    }
}

/// Triangulated mesh. Triangle order is preserved on export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat position list and a triangle index list. The vertex
    /// index is the slot in `positions`; trailing indices that do not make up a
    /// whole triangle are dropped.
    pub fn from_indexed(positions: &[Vec3], indices: &[u32]) -> Self {
        let vertices = positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex {
                index: i as u32,
                position,
            })
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|tri| Triangle::new(tri[0], tri[1], tri[2]))
            .collect();
        Self {
            vertices,
            triangles,
        }
    }

    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex { index, position });
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push(Triangle::new(a, b, c));
    }

    /// Index -> position lookup. A later vertex with a repeated index replaces
    /// the earlier one.
    pub fn index_map(&self) -> HashMap<u32, Vec3> {
        self.vertices.iter().map(|v| (v.index, v.position)).collect()
    }

    /// Resolve every triangle to its three corner positions, in stored order.
    pub fn resolve(&self) -> Result<Vec<[Vec3; 3]>, MeshDefect> {
        let index2pos = self.index_map();
        let lookup = |triangle: usize, index: u32| -> Result<Vec3, MeshDefect> {
            let position = *index2pos
                .get(&index)
                .ok_or(MeshDefect::UnknownVertex { triangle, index })?;
            if !position.is_finite() {
                return Err(MeshDefect::NonFiniteVertex { index });
            }
            Ok(position)
        };

        self.triangles
            .iter()
            .enumerate()
            .map(|(t, tri)| -> Result<[Vec3; 3], MeshDefect> {
                let [a, b, c] = tri.vertices;
                Ok([lookup(t, a)?, lookup(t, b)?, lookup(t, c)?])
            })
            .collect()
    }

    pub fn degenerate_count(&self) -> usize {
        self.triangles.iter().filter(|t| t.is_degenerate()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        Mesh::from_indexed(
            &[Vec3::ZERO, Vec3::X, Vec3::Y],
            &[0, 1, 2],
        )
    }

    #[test]
    fn test_from_indexed_drops_partial_triangle() {
        let mesh = Mesh::from_indexed(&[Vec3::ZERO, Vec3::X, Vec3::Y], &[0, 1, 2, 2, 1]);
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.triangles, vec![Triangle::new(0, 1, 2)]);
    }

    #[test]
    fn test_resolve_preserves_order() {
        let mut mesh = unit_triangle();
        mesh.push_triangle(2, 1, 0);
        let resolved = mesh.resolve().unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], [Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(resolved[1], [Vec3::Y, Vec3::X, Vec3::ZERO]);
    }

    #[test]
    fn test_resolve_out_of_order_indices() {
        let mesh = Mesh {
            vertices: vec![
                Vertex {
                    index: 7,
                    position: Vec3::new(7.0, 0.0, 0.0),
                },
                Vertex {
                    index: 3,
                    position: Vec3::new(3.0, 0.0, 0.0),
                },
                Vertex {
                    index: 5,
                    position: Vec3::new(5.0, 0.0, 0.0),
                },
            ],
            triangles: vec![Triangle::new(3, 5, 7)],
        };
        let resolved = mesh.resolve().unwrap();
        assert_eq!(resolved[0][0].x, 3.0);
        assert_eq!(resolved[0][1].x, 5.0);
        assert_eq!(resolved[0][2].x, 7.0);
    }

    #[test]
    fn test_duplicate_index_last_wins() {
        let mesh = Mesh {
            vertices: vec![
                Vertex {
                    index: 0,
                    position: Vec3::X,
                },
                Vertex {
                    index: 0,
                    position: Vec3::Y,
                },
            ],
            triangles: Vec::new(),
        };
        assert_eq!(mesh.index_map()[&0], Vec3::Y);
    }

    #[test]
    fn test_resolve_unknown_vertex() {
        let mut mesh = unit_triangle();
        mesh.push_triangle(0, 1, 9);
        assert_eq!(
            mesh.resolve(),
            Err(MeshDefect::UnknownVertex {
                triangle: 1,
                index: 9
            })
        );
    }

    #[test]
    fn test_resolve_non_finite_vertex() {
        let mut mesh = unit_triangle();
        let bad = mesh.push_vertex(Vec3::new(f32::NAN, 0.0, 0.0));
        mesh.push_triangle(0, 1, bad);
        assert_eq!(
            mesh.resolve(),
            Err(MeshDefect::NonFiniteVertex { index: bad })
        );
    }

    #[test]
    fn test_degenerate_count() {
        let mut mesh = unit_triangle();
        mesh.push_triangle(0, 0, 1);
        assert_eq!(mesh.degenerate_count(), 1);
        assert!(!mesh.triangles[0].is_degenerate());
    }
}
