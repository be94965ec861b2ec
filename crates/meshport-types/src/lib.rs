//! Core types for Meshport.
//!
//! This crate provides the foundational types for snapshot-based mesh export:
//!
//! - [`MeshSnapshot`] - A triangulated capture of one host mesh object
//! - [`Polygon`] / [`LoopRef`] - Per-face corner topology
//! - [`MaterialTable`] - Per-object material slot bindings
//! - [`IndexedMesh`] - The consumer-side triangle mesh a document parses into
//! - [`SceneSource`] - Capability trait supplied by a host integration
//!
//! # Host Independence
//!
//! Nothing in this crate talks to a content-creation host. Snapshots are
//! plain data: a host integration builds them (modifiers baked, polygons
//! triangulated), and everything downstream - serialization, tagging,
//! tests - works on the data alone.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use meshport_types::{MeshSnapshot, Point3, Vector3};
//!
//! let mut snapshot = MeshSnapshot::new("Plane");
//! let a = snapshot.add_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
//! let b = snapshot.add_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
//! let c = snapshot.add_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z());
//! snapshot.add_triangle([a, b, c]);
//!
//! assert_eq!(snapshot.vertex_count(), 3);
//! assert_eq!(snapshot.polygon_count(), 1);
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod materials;
mod mesh;
mod snapshot;
mod traits;

// Re-export core types
pub use materials::MaterialTable;
pub use mesh::IndexedMesh;
pub use snapshot::{LoopRef, MeshSnapshot, Polygon, SnapshotVertex};
pub use traits::{SceneSource, StaticScene};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
