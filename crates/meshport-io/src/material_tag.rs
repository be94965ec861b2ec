//! Material-tag post-processing of a written document.
//!
//! A single forward pass that appends the current object's first material
//! name to every face line. "Current" is whatever `o` line was seen last;
//! per-face slot assignment is not consulted, so a multi-material object gets
//! every face tagged with slot 0. That approximation is inherited from the
//! legacy format and kept; DESIGN.md records the open question.
//!
//! The pass is not idempotent on its own output: re-running it over an
//! already-tagged document appends a second material token to every face
//! line. Run it once, against the untagged document the writer produced.

use std::fs;
use std::path::Path;

use meshport_types::MaterialTable;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Append material names to the face lines of a document, in memory.
///
/// Lines starting with `o ` switch the current material to the first slot
/// bound to that object; lines starting with `f ` are rewritten with a
/// single space and the current material name appended; every other line
/// passes through unchanged. The output is `\n`-terminated.
///
/// # Errors
///
/// - [`IoError::UnknownObject`] if an `o` line names an object with no
///   table entry
/// - [`IoError::NoMaterialSlots`] if the object is bound to zero materials
/// - [`IoError::FaceBeforeObject`] if a face line precedes every `o` line
///
/// No placeholder is ever substituted; a failed pass produces no output.
///
/// # Example
///
/// ```
/// use meshport_io::tag_material_lines;
/// use meshport_types::MaterialTable;
///
/// let mut table = MaterialTable::new();
/// table.push_slot("Cube", "Steel");
///
/// let doc = "o Cube\nv 0.000000 0.000000 0.000000\nf 1//1 1//1 1//1\n";
/// let tagged = tag_material_lines(doc, &table).unwrap();
/// assert!(tagged.contains("f 1//1 1//1 1//1 Steel\n"));
/// ```
pub fn tag_material_lines(input: &str, table: &MaterialTable) -> IoResult<String> {
    let mut current: Option<&str> = None;
    let mut output = String::with_capacity(input.len());

    for line in input.lines() {
        if let Some(name) = line.strip_prefix("o ") {
            let name = name.trim_end();
            let slots = table.slots(name).ok_or_else(|| IoError::UnknownObject {
                name: name.to_string(),
            })?;
            current = Some(slots.first().ok_or_else(|| IoError::NoMaterialSlots {
                name: name.to_string(),
            })?);
            output.push_str(line);
        } else if line.starts_with("f ") {
            let material = current.ok_or(IoError::FaceBeforeObject)?;
            output.push_str(line);
            output.push(' ');
            output.push_str(material);
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }

    Ok(output)
}

/// Append material names to the face lines of a document file, in place.
///
/// The whole document is read and transformed before a single byte is
/// written back, so a failing pass leaves the file exactly as it was -
/// there is no partially tagged state on disk.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the document does not exist, the
/// tagging errors of [`tag_material_lines`], or an I/O error from the
/// rewrite.
pub fn tag_materials<P: AsRef<Path>>(path: P, table: &MaterialTable) -> IoResult<()> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let output = tag_material_lines(&input, table)?;
    fs::write(path, output)?;

    debug!(path = %path.display(), objects = table.len(), "tagged face lines");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn two_object_table() -> MaterialTable {
        let mut table = MaterialTable::new();
        table.insert("A", vec!["Red".to_string()]);
        table.insert("B", vec!["Blue".to_string()]);
        table
    }

    const TWO_OBJECT_DOC: &str = "\
# header
o A
v 0.000000 0.000000 0.000000
f 1//1 2//2 3//3
o B
v 1.000000 0.000000 0.000000
f 4//4 5//5 6//6
";

    #[test]
    fn faces_get_current_objects_first_material() {
        let tagged = tag_material_lines(TWO_OBJECT_DOC, &two_object_table()).unwrap();
        assert!(tagged.contains("f 1//1 2//2 3//3 Red\n"));
        assert!(tagged.contains("f 4//4 5//5 6//6 Blue\n"));
    }

    #[test]
    fn non_face_lines_pass_through_unchanged() {
        let tagged = tag_material_lines(TWO_OBJECT_DOC, &two_object_table()).unwrap();
        assert!(tagged.contains("# header\n"));
        assert!(tagged.contains("o A\n"));
        assert!(tagged.contains("v 0.000000 0.000000 0.000000\n"));
    }

    #[test]
    fn multi_material_object_tags_every_face_with_first_slot() {
        let mut table = MaterialTable::new();
        table.insert("A", vec!["Base".to_string(), "Trim".to_string()]);
        let doc = "o A\nf 1//1 2//2 3//3\nf 4//4 5//5 6//6\n";
        let tagged = tag_material_lines(doc, &table).unwrap();
        assert_eq!(tagged.matches(" Base").count(), 2);
        assert_eq!(tagged.matches(" Trim").count(), 0);
    }

    #[test]
    fn retagging_appends_a_second_token() {
        let table = two_object_table();
        let once = tag_material_lines(TWO_OBJECT_DOC, &table).unwrap();
        let twice = tag_material_lines(&once, &table).unwrap();
        assert!(twice.contains("f 1//1 2//2 3//3 Red Red\n"));
    }

    #[test]
    fn unknown_object_is_an_error() {
        let doc = "o Ghost\nf 1//1 2//2 3//3\n";
        let err = tag_material_lines(doc, &two_object_table()).unwrap_err();
        assert!(matches!(err, IoError::UnknownObject { name } if name == "Ghost"));
    }

    #[test]
    fn zero_bound_materials_is_an_error_not_a_placeholder() {
        let mut table = MaterialTable::new();
        table.insert("Bare", Vec::new());
        let doc = "o Bare\nf 1//1 2//2 3//3\n";
        let err = tag_material_lines(doc, &table).unwrap_err();
        assert!(matches!(err, IoError::NoMaterialSlots { name } if name == "Bare"));
    }

    #[test]
    fn face_before_any_object_is_an_error() {
        let doc = "f 1//1 2//2 3//3\no A\n";
        let err = tag_material_lines(doc, &two_object_table()).unwrap_err();
        assert!(matches!(err, IoError::FaceBeforeObject));
    }

    #[test]
    fn failed_file_pass_leaves_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        fs::write(&path, "o Ghost\nf 1//1 2//2 3//3\n").unwrap();

        let result = tag_materials(&path, &two_object_table());
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "o Ghost\nf 1//1 2//2 3//3\n"
        );
    }

    #[test]
    fn file_pass_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        fs::write(&path, TWO_OBJECT_DOC).unwrap();

        tag_materials(&path, &two_object_table()).unwrap();
        let tagged = fs::read_to_string(&path).unwrap();
        assert!(tagged.contains("f 1//1 2//2 3//3 Red\n"));
        assert!(tagged.contains("f 4//4 5//5 6//6 Blue\n"));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = tag_materials("nonexistent_file_12345.obj", &two_object_table()).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }
}
