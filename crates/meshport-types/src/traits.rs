//! Capability trait for host scene access.

use crate::{MaterialTable, MeshSnapshot};

/// The slice of host state an export run needs.
///
/// A host integration implements this against live application state; tests
/// and tools use [`StaticScene`]. Keeping the boundary here means the
/// serializer and the material-tag pass never see a host at all.
pub trait SceneSource {
    /// Snapshot of the active object, triangulated and with modifiers baked.
    ///
    /// Returns `None` when nothing is selected or the active object is not
    /// a mesh. Callers treat that as a soft failure: diagnose and skip,
    /// never write.
    fn active_snapshot(&self) -> Option<MeshSnapshot>;

    /// Material slot bindings for every object in the scene.
    fn material_table(&self) -> MaterialTable;
}

/// An in-memory [`SceneSource`] backed by pre-built data.
///
/// # Example
///
/// ```
/// use meshport_types::{MeshSnapshot, SceneSource, StaticScene};
///
/// let scene = StaticScene::new(Some(MeshSnapshot::new("Cube")), Default::default());
/// assert!(scene.active_snapshot().is_some());
///
/// let empty = StaticScene::empty();
/// assert!(empty.active_snapshot().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    snapshot: Option<MeshSnapshot>,
    materials: MaterialTable,
}

impl StaticScene {
    /// Create a scene with the given active snapshot and material table.
    #[inline]
    #[must_use]
    pub const fn new(snapshot: Option<MeshSnapshot>, materials: MaterialTable) -> Self {
        Self {
            snapshot,
            materials,
        }
    }

    /// A scene with no active mesh object.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl SceneSource for StaticScene {
    fn active_snapshot(&self) -> Option<MeshSnapshot> {
        self.snapshot.clone()
    }

    fn material_table(&self) -> MaterialTable {
        self.materials.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_scene_hands_out_snapshot_copies() {
        let scene = StaticScene::new(Some(MeshSnapshot::new("Cube")), MaterialTable::new());
        let first = scene.active_snapshot();
        let second = scene.active_snapshot();
        assert_eq!(first, second);
        assert_eq!(first.map(|s| s.name), Some("Cube".to_string()));
    }

    #[test]
    fn empty_scene_has_no_active_snapshot() {
        let scene = StaticScene::empty();
        assert!(scene.active_snapshot().is_none());
        assert!(scene.material_table().is_empty());
    }
}
