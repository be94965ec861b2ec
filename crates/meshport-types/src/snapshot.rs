//! Triangulated mesh snapshots captured from a host scene.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One polygon corner.
///
/// Pairs the vertex a corner references with the corner's own index in the
/// mesh-wide loop ordering. The same vertex may appear in many loops, each
/// carrying different per-corner attributes (UVs live in
/// [`MeshSnapshot::loop_uvs`], keyed by `loop_index`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopRef {
    /// Index of the referenced vertex.
    pub vertex: u32,

    /// Index of this corner in the mesh-wide loop ordering.
    pub loop_index: u32,
}

impl LoopRef {
    /// Create a loop record.
    #[inline]
    #[must_use]
    pub const fn new(vertex: u32, loop_index: u32) -> Self {
        Self { vertex, loop_index }
    }
}

/// An ordered sequence of loops forming one planar face.
///
/// A triangulated snapshot has exactly 3 loops per polygon, but the type
/// does not enforce that: serialization walks whatever loop order is here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Corner records in winding order.
    pub loops: Vec<LoopRef>,
}

impl Polygon {
    /// Create a polygon from loop records in winding order.
    #[inline]
    #[must_use]
    pub const fn from_loops(loops: Vec<LoopRef>) -> Self {
        Self { loops }
    }
}

/// A snapshot vertex: position plus its per-vertex normal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotVertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Unit normal, as resolved by the host after modifier baking.
    pub normal: Vector3<f64>,
}

/// A read-only capture of one triangulated mesh object.
///
/// A snapshot is built once per export run - by a host integration or by
/// hand in tests - and discarded after the document is written. Vertex
/// order is significant: face tokens reference vertices by position in
/// [`MeshSnapshot::vertices`].
///
/// # Example
///
/// ```
/// use meshport_types::{MeshSnapshot, Point3, Vector3};
///
/// let mut snapshot = MeshSnapshot::new("Quad");
/// let n = Vector3::z();
/// let v: Vec<u32> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
///     .iter()
///     .map(|&(x, y)| snapshot.add_vertex(Point3::new(x, y, 0.0), n))
///     .collect();
/// snapshot.add_triangle([v[0], v[1], v[2]]);
/// snapshot.add_triangle([v[0], v[2], v[3]]);
///
/// assert_eq!(snapshot.polygon_count(), 2);
/// assert_eq!(snapshot.loop_count(), 6);
/// assert!(!snapshot.has_uvs());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshSnapshot {
    /// Object name, written to the document's `o` line.
    pub name: String,

    /// Vertex data in declaration order.
    pub vertices: Vec<SnapshotVertex>,

    /// Per-loop UV layer, keyed by [`LoopRef::loop_index`].
    ///
    /// `None` models a mesh with no active UV layer; the UV section of the
    /// document is then omitted entirely.
    pub loop_uvs: Option<Vec<(f64, f64)>>,

    /// Polygons in declaration order.
    pub polygons: Vec<Polygon>,
}

impl MeshSnapshot {
    /// Create an empty snapshot for the named object.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            loop_uvs: None,
            polygons: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of polygons.
    #[inline]
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Total number of loops across all polygons.
    #[must_use]
    pub fn loop_count(&self) -> usize {
        self.polygons.iter().map(|p| p.loops.len()).sum()
    }

    /// Whether the snapshot carries a UV layer.
    #[inline]
    #[must_use]
    pub const fn has_uvs(&self) -> bool {
        self.loop_uvs.is_some()
    }

    /// Append a vertex, returning its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: vertex indices are u32, larger snapshots are unsupported
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(SnapshotVertex { position, normal });
        index
    }

    /// Append a triangle, assigning its corners consecutive loop indices.
    ///
    /// Loop indices continue from the current [`loop_count`](Self::loop_count),
    /// matching the contiguous per-polygon loop layout hosts produce.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: loop indices are u32, larger snapshots are unsupported
    pub fn add_triangle(&mut self, vertices: [u32; 3]) {
        let base = self.loop_count() as u32;
        let loops = vertices
            .iter()
            .enumerate()
            .map(|(corner, &vertex)| LoopRef::new(vertex, base + corner as u32))
            .collect();
        self.polygons.push(Polygon::from_loops(loops));
    }

    /// Append a triangle together with its per-corner UVs.
    ///
    /// Creates the UV layer on first use. The layer is keyed by loop index,
    /// so once a snapshot carries UVs every subsequent polygon must be added
    /// through this method to keep the layer covering all loops.
    pub fn add_triangle_with_uvs(&mut self, vertices: [u32; 3], uvs: [(f64, f64); 3]) {
        self.add_triangle(vertices);
        self.loop_uvs.get_or_insert_with(Vec::new).extend(uvs);
    }
}
