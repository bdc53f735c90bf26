use crate::scene::model::{Scene, SceneSpec, TimelineConfig};
use crate::timeline::host::ScrollHost;

/// Ordered scene list plus per-query offset resolution.
///
/// Array index defines the playback sequence. Offsets are never cached
/// across frames; every query walks back to the host so the timeline tracks
/// live layout through resizes and late-loading content.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    scenes: Vec<Scene>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the scene list by scanning the container's markers in document
    /// order. Calling again replaces the previous list.
    pub fn initialize_from_host(&mut self, host: &dyn ScrollHost, config: &TimelineConfig) {
        self.scenes = host
            .scene_markers()
            .into_iter()
            .map(|m| Scene {
                id: m.id.clone(),
                marker: m.id,
                duration_ms: m.duration_ms.unwrap_or(config.scene_duration_ms),
            })
            .collect();
    }

    /// Build the scene list from pre-supplied specs. Calling again replaces
    /// the previous list.
    pub fn initialize_from_specs(&mut self, specs: &[SceneSpec], config: &TimelineConfig) {
        self.scenes = specs
            .iter()
            .map(|s| Scene::from_spec(s, config.scene_duration_ms))
            .collect();
    }

    /// Declarative registration path for scene wrappers: append the scene
    /// only when its id is not already known, so wrappers stay consistent
    /// with scan-based discovery instead of duplicating it.
    pub fn adopt(&mut self, spec: &SceneSpec, config: &TimelineConfig) {
        if self.scenes.iter().any(|s| s.id == spec.id) {
            return;
        }
        self.scenes.push(Scene::from_spec(spec, config.scene_duration_ms));
    }

    pub fn clear(&mut self) {
        self.scenes.clear();
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Cumulative scroll offset at which scene `index` is current.
    ///
    /// Resolution order: live marker offset from the host, then the
    /// `index * viewport_height` fallback so the timeline always has a
    /// usable number. With no host, everything degrades to 0. Never panics.
    pub fn scene_position(&self, host: Option<&dyn ScrollHost>, index: usize) -> f64 {
        let Some(host) = host else {
            return 0.0;
        };
        let fallback = index as f64 * host.viewport_height();
        let Some(scene) = self.scenes.get(index) else {
            return fallback;
        };
        host.marker_offset(&scene.marker).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::host::{SceneMarker, StaticHost};

    fn config() -> TimelineConfig {
        TimelineConfig::default()
    }

    #[test]
    fn initialize_replaces_rather_than_appends() {
        let host = StaticHost::from_scene_ids(600.0, ["a", "b", "c"]);
        let mut reg = SceneRegistry::new();
        reg.initialize_from_host(&host, &config());
        reg.initialize_from_host(&host, &config());
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn positions_resolve_through_live_markers() {
        let host = StaticHost::from_scene_ids(600.0, ["a", "b"]);
        let mut reg = SceneRegistry::new();
        reg.initialize_from_host(&host, &config());
        assert_eq!(reg.scene_position(Some(&host), 0), 0.0);
        assert_eq!(reg.scene_position(Some(&host), 1), 600.0);
    }

    #[test]
    fn unmatched_markers_fall_back_to_viewport_multiples() {
        // Scenes were supplied out of band; the container has no markers.
        let host = StaticHost::with_layout(600.0, 3_000.0, Vec::new());
        let mut reg = SceneRegistry::new();
        reg.initialize_from_specs(
            &[
                SceneSpec::new("a"),
                SceneSpec::new("b"),
                SceneSpec::new("c"),
            ],
            &config(),
        );
        for i in 0..3 {
            assert_eq!(reg.scene_position(Some(&host), i), i as f64 * 600.0);
        }
    }

    #[test]
    fn out_of_range_index_uses_fallback_and_no_host_degrades_to_zero() {
        let host = StaticHost::from_scene_ids(600.0, ["a"]);
        let mut reg = SceneRegistry::new();
        reg.initialize_from_host(&host, &config());
        assert_eq!(reg.scene_position(Some(&host), 7), 7.0 * 600.0);
        assert_eq!(reg.scene_position(None, 7), 0.0);
    }

    #[test]
    fn adopt_skips_already_discovered_ids() {
        let host = StaticHost::from_scene_ids(600.0, ["a"]);
        let mut reg = SceneRegistry::new();
        reg.initialize_from_host(&host, &config());
        reg.adopt(&SceneSpec::new("a"), &config());
        reg.adopt(&SceneSpec::new("b").with_duration(5_000.0), &config());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.scene(1).unwrap().duration_ms, 5_000.0);
    }

    #[test]
    fn marker_duration_overrides_config_default() {
        let host = StaticHost::with_layout(
            600.0,
            1_200.0,
            vec![
                (SceneMarker::new("a"), 0.0),
                (
                    SceneMarker {
                        id: "b".to_owned(),
                        duration_ms: Some(4_000.0),
                    },
                    600.0,
                ),
            ],
        );
        let mut reg = SceneRegistry::new();
        reg.initialize_from_host(&host, &config());
        assert_eq!(reg.scene(0).unwrap().duration_ms, 12_000.0);
        assert_eq!(reg.scene(1).unwrap().duration_ms, 4_000.0);
    }
}
