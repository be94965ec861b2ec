//! Export pipeline: scene capability in, tagged document out.

use std::path::PathBuf;

use meshport_types::SceneSource;
use tracing::{info, warn};

use crate::error::IoResult;
use crate::material_tag::tag_materials;
use crate::obj::save_obj;

/// Parameters for an export run.
///
/// The output path is always explicit; there is no default location.
///
/// # Example
///
/// ```
/// use meshport_io::ExportParams;
///
/// let params = ExportParams::new("/tmp/scene.obj").with_material_tags(true);
/// assert!(params.tag_materials);
/// ```
#[derive(Debug, Clone)]
pub struct ExportParams {
    /// Where the document is written.
    pub output_path: PathBuf,

    /// Whether to run the material-tag pass over the written document.
    pub tag_materials: bool,
}

impl ExportParams {
    /// Create params writing to the given path, with tagging disabled.
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            tag_materials: false,
        }
    }

    /// Enable or disable the material-tag pass.
    #[must_use]
    pub fn with_material_tags(mut self, enabled: bool) -> Self {
        self.tag_materials = enabled;
        self
    }
}

/// What an export run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A document was written (and tagged, when enabled).
    Written,

    /// No mesh object was active; nothing was written.
    NoActiveMesh,
}

/// Export the scene's active mesh object as an interchange document.
///
/// Asks the source for a snapshot of the active object, serializes it to
/// `params.output_path`, and - when enabled - runs the material-tag pass
/// over the file just written.
///
/// A scene with no active mesh object is a soft failure: a warning is
/// logged, no file is touched, and the run returns
/// [`ExportOutcome::NoActiveMesh`] rather than an error.
///
/// # Errors
///
/// Returns an error if serialization or the tagging pass fails; see
/// [`save_obj`] and [`tag_materials`].
///
/// # Example
///
/// ```no_run
/// use meshport_io::{export_active, ExportParams};
/// use meshport_types::StaticScene;
///
/// let scene = StaticScene::empty();
/// let params = ExportParams::new("scene.obj");
/// let outcome = export_active(&scene, &params).unwrap();
/// ```
pub fn export_active<S: SceneSource>(source: &S, params: &ExportParams) -> IoResult<ExportOutcome> {
    let Some(snapshot) = source.active_snapshot() else {
        warn!("no mesh object selected; nothing exported");
        return Ok(ExportOutcome::NoActiveMesh);
    };

    info!(
        object = %snapshot.name,
        vertices = snapshot.vertex_count(),
        polygons = snapshot.polygon_count(),
        "exporting snapshot"
    );

    save_obj(&snapshot, &params.output_path)?;

    if params.tag_materials {
        let table = source.material_table();
        tag_materials(&params.output_path, &table)?;
    }

    info!(path = %params.output_path.display(), "export complete");
    Ok(ExportOutcome::Written)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use meshport_types::{MaterialTable, MeshSnapshot, Point3, StaticScene, Vector3};

    fn triangle_snapshot(name: &str) -> MeshSnapshot {
        let mut snapshot = MeshSnapshot::new(name);
        let n = Vector3::z();
        let a = snapshot.add_vertex(Point3::new(0.0, 0.0, 0.0), n);
        let b = snapshot.add_vertex(Point3::new(1.0, 0.0, 0.0), n);
        let c = snapshot.add_vertex(Point3::new(0.0, 1.0, 0.0), n);
        snapshot.add_triangle([a, b, c]);
        snapshot
    }

    #[test]
    fn no_active_mesh_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        let params = ExportParams::new(&path);

        let outcome = export_active(&StaticScene::empty(), &params).unwrap();
        assert_eq!(outcome, ExportOutcome::NoActiveMesh);
        assert!(!path.exists());
    }

    #[test]
    fn active_mesh_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        let scene = StaticScene::new(Some(triangle_snapshot("Tri")), MaterialTable::new());

        let outcome = export_active(&scene, &ExportParams::new(&path)).unwrap();
        assert_eq!(outcome, ExportOutcome::Written);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("o Tri"));
        assert!(text.contains("f 1//1 2//2 3//3"));
    }

    #[test]
    fn tagging_pass_runs_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        let mut table = MaterialTable::new();
        table.push_slot("Tri", "Steel");
        let scene = StaticScene::new(Some(triangle_snapshot("Tri")), table);

        let params = ExportParams::new(&path).with_material_tags(true);
        export_active(&scene, &params).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("f 1//1 2//2 3//3 Steel"));
    }

    #[test]
    fn tagging_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.obj");
        // Active object missing from the material table
        let scene = StaticScene::new(Some(triangle_snapshot("Tri")), MaterialTable::new());

        let params = ExportParams::new(&path).with_material_tags(true);
        let err = export_active(&scene, &params).unwrap_err();
        assert!(matches!(err, crate::IoError::UnknownObject { .. }));
    }
}
