//! Interchange document I/O for Meshport.
//!
//! This crate turns a [`MeshSnapshot`](meshport_types::MeshSnapshot) into a
//! line-oriented text document and back:
//!
//! - **Writing** - [`write_obj`] / [`save_obj`] serialize a snapshot
//! - **Tagging** - [`tag_materials`] appends material names to face lines
//! - **Loading** - [`load_obj`] parses a document into an
//!   [`IndexedMesh`](meshport_types::IndexedMesh)
//! - **Pipeline** - [`export_active`] runs the whole export against a
//!   [`SceneSource`](meshport_types::SceneSource)
//!
//! # Example
//!
//! ```no_run
//! use meshport_io::{export_active, ExportParams};
//! use meshport_types::StaticScene;
//!
//! let scene = StaticScene::empty();
//! let params = ExportParams::new("scene.obj").with_material_tags(true);
//! export_active(&scene, &params).unwrap();
//! ```
//!
//! # Determinism
//!
//! Output is fully determined by the snapshot: coordinates are formatted to
//! exactly six decimal digits, lines end with `\n`, and vertex, polygon, and
//! loop order are preserved. Runs are single-threaded and every file handle
//! is scoped to one pass.
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

mod error;
mod export;
mod material_tag;
mod obj;

pub use error::{IoError, IoResult};
pub use export::{export_active, ExportOutcome, ExportParams};
pub use material_tag::{tag_material_lines, tag_materials};
pub use obj::{load_obj, save_obj, write_obj};
