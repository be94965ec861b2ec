//! Interchange document writing and loading.
//!
//! The document is a line-oriented ASCII format following Wavefront OBJ
//! conventions: header comments, an `o` object line, `v`/`vn`/`vt` attribute
//! lines, and `f` face lines with 1-based index triples. All coordinates are
//! written with exactly six decimal digits, lines end with `\n`.
//!
//! # Index Conventions
//!
//! Face tokens are `v/uv/n` when the snapshot carries a UV layer and `v//n`
//! when it does not. The vertex and normal indices both point at the
//! per-vertex sections (normal `i` belongs to vertex `i`), while the UV index
//! is the corner's loop index plus one - it addresses a per-loop UV table,
//! not the per-vertex `vt` section this module writes. Consumers of the
//! legacy format depend on those exact indices, so they are kept as-is; see
//! DESIGN.md for the history.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use meshport_types::{IndexedMesh, MeshSnapshot, Point3, Vector3};

use crate::error::{IoError, IoResult};

/// Write a snapshot as an interchange document.
///
/// Emits, in order: two header comment lines identifying the producing tool,
/// the `o` line, one `v` line per vertex, one `vn` line per vertex, one `vt`
/// line per vertex when a UV layer is present, and one `f` line per polygon.
/// Vertex declaration order is preserved end-to-end; face tokens reference
/// vertices by that order.
///
/// A snapshot with no polygons produces a valid document with no face lines.
///
/// # Errors
///
/// Returns [`IoError::MalformedSnapshot`] if a loop references a vertex out
/// of range, or a loop index not covered by the UV layer; [`IoError::Io`] on
/// write failure.
///
/// # Example
///
/// ```
/// use meshport_io::write_obj;
/// use meshport_types::{MeshSnapshot, Point3, Vector3};
///
/// let mut snapshot = MeshSnapshot::new("Tri");
/// let n = Vector3::z();
/// let a = snapshot.add_vertex(Point3::new(0.0, 0.0, 0.0), n);
/// let b = snapshot.add_vertex(Point3::new(1.0, 0.0, 0.0), n);
/// let c = snapshot.add_vertex(Point3::new(0.0, 1.0, 0.0), n);
/// snapshot.add_triangle([a, b, c]);
///
/// let mut buf = Vec::new();
/// write_obj(&snapshot, &mut buf).unwrap();
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.contains("o Tri"));
/// assert!(text.contains("f 1//1 2//2 3//3"));
/// ```
pub fn write_obj<W: Write>(snapshot: &MeshSnapshot, writer: &mut W) -> IoResult<()> {
    check_snapshot(snapshot)?;

    writeln!(writer, "# Meshport {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(writer, "# generated by meshport-io")?;
    writeln!(writer, "o {}", snapshot.name)?;

    for v in &snapshot.vertices {
        let p = &v.position;
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }

    for v in &snapshot.vertices {
        let n = &v.normal;
        writeln!(writer, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }

    if let Some(layer) = &snapshot.loop_uvs {
        for (u, v) in per_vertex_uvs(snapshot, layer) {
            writeln!(writer, "vt {u:.6} {v:.6}")?;
        }
    }

    let has_uvs = snapshot.has_uvs();
    for polygon in &snapshot.polygons {
        write!(writer, "f")?;
        for corner in &polygon.loops {
            let v = corner.vertex + 1;
            if has_uvs {
                write!(writer, " {v}/{}/{v}", corner.loop_index + 1)?;
            } else {
                write!(writer, " {v}//{v}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Save a snapshot as an interchange document file.
///
/// The file handle is scoped to this call and released on all exit paths.
///
/// # Errors
///
/// Returns an error if the snapshot violates the document invariants or the
/// file cannot be written.
///
/// # Example
///
/// ```no_run
/// use meshport_io::save_obj;
/// use meshport_types::MeshSnapshot;
///
/// let snapshot = MeshSnapshot::new("Empty");
/// save_obj(&snapshot, "scene.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(snapshot: &MeshSnapshot, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(snapshot, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Verify the snapshot invariants the document format relies on.
fn check_snapshot(snapshot: &MeshSnapshot) -> IoResult<()> {
    let vertex_count = snapshot.vertices.len();
    let uv_count = snapshot.loop_uvs.as_ref().map(Vec::len);

    for (poly_index, polygon) in snapshot.polygons.iter().enumerate() {
        for corner in &polygon.loops {
            if corner.vertex as usize >= vertex_count {
                return Err(IoError::malformed_snapshot(format!(
                    "polygon {poly_index} references vertex {} of {vertex_count}",
                    corner.vertex
                )));
            }
            if let Some(uv_count) = uv_count {
                if corner.loop_index as usize >= uv_count {
                    return Err(IoError::malformed_snapshot(format!(
                        "polygon {poly_index} references loop UV {} of {uv_count}",
                        corner.loop_index
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Collapse the per-loop UV layer to one UV per vertex.
///
/// The first loop encountered that references a vertex wins; later loops
/// referencing the same vertex from other polygons are ignored. This is a
/// lossy simplification: a vertex on a UV seam has divergent per-corner UVs
/// and only the first survives. Vertices referenced by no loop fall back to
/// `(0, 0)`.
fn per_vertex_uvs(snapshot: &MeshSnapshot, layer: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut mapped: Vec<Option<(f64, f64)>> = vec![None; snapshot.vertices.len()];

    for polygon in &snapshot.polygons {
        for corner in &polygon.loops {
            let slot = &mut mapped[corner.vertex as usize];
            if slot.is_none() {
                *slot = Some(layer[corner.loop_index as usize]);
            }
        }
    }

    mapped
        .into_iter()
        .map(|uv| uv.unwrap_or((0.0, 0.0)))
        .collect()
}

/// Load an interchange document into an [`IndexedMesh`].
///
/// Reads `v` lines as positions, `vn` lines as per-vertex normals, and `f`
/// lines as triangle fans over the first field of each `/`-separated token.
/// Comment lines, `o` lines, `vt` lines, and trailing material tags on face
/// lines are skipped, matching what downstream consumers of the format do.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A `v` or `vn` line has malformed coordinates
/// - A face references vertex index 0 or one past the declared vertices
///
/// # Example
///
/// ```no_run
/// use meshport_io::load_obj;
///
/// let mesh = load_obj("scene.obj").unwrap();
/// println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    read_obj(BufReader::new(file))
}

/// Parse a document from any buffered reader.
fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let (x, y, z) = parse_coords(&mut parts, &line)?;
                mesh.positions.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let (x, y, z) = parse_coords(&mut parts, &line)?;
                mesh.normals.push(Vector3::new(x, y, z));
            }
            Some("f") => {
                let indices = parse_face_indices(parts)?;
                // Fan triangulation; a tagged triangle line yields exactly one face
                for i in 1..indices.len().saturating_sub(1) {
                    mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
                }
            }
            _ => {
                // Comments, object names, UVs, unknown keywords
            }
        }
    }

    for &face in &mesh.faces {
        for index in face {
            if index as usize >= mesh.positions.len() {
                return Err(IoError::invalid_content(format!(
                    "face references vertex {} of {}",
                    index + 1,
                    mesh.positions.len()
                )));
            }
        }
    }

    Ok(mesh)
}

/// Parse three whitespace-separated coordinates.
fn parse_coords<'a, I: Iterator<Item = &'a str>>(
    parts: &mut I,
    line: &str,
) -> IoResult<(f64, f64, f64)> {
    let mut next = || -> IoResult<f64> {
        let token = parts
            .next()
            .ok_or_else(|| IoError::invalid_content(format!("truncated line: {line:?}")))?;
        Ok(token.parse()?)
    };
    Ok((next()?, next()?, next()?))
}

/// Parse the vertex indices of a face line, 1-based to 0-based.
///
/// Consumption stops at the first token whose leading field is not an
/// integer; that tolerates the material tag the tagging pass appends.
fn parse_face_indices<'a, I: Iterator<Item = &'a str>>(parts: I) -> IoResult<Vec<u32>> {
    let mut indices = Vec::with_capacity(3);

    for token in parts {
        let field = token.split('/').next().unwrap_or(token);
        let Ok(index) = field.parse::<u32>() else {
            break;
        };
        if index == 0 {
            return Err(IoError::invalid_content(
                "face references vertex 0; indices are 1-based",
            ));
        }
        indices.push(index - 1);
    }

    Ok(indices)
}
