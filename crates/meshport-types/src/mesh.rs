//! Consumer-side indexed triangle mesh.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The triangle mesh a consumer reconstructs from an interchange document.
///
/// Downstream renderers only need positions, per-vertex normals, and
/// triangle indices, so this is deliberately flatter than [`MeshSnapshot`]:
/// the loop structure and per-corner UVs of the source snapshot are not
/// recoverable from the document alone.
///
/// `normals` is parallel to `positions` when present and empty when the
/// document carried no normal lines.
///
/// [`MeshSnapshot`]: crate::MeshSnapshot
///
/// # Example
///
/// ```
/// use meshport_types::{IndexedMesh, Point3};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(!mesh.has_normals());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions in declaration order.
    pub positions: Vec<Point3<f64>>,

    /// Per-vertex normals, parallel to `positions`; empty when absent.
    pub normals: Vec<Vector3<f64>>,

    /// Triangle faces as vertex index triples.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Whether per-vertex normals are present.
    #[inline]
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }
}
