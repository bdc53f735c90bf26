use crate::animation::ease::Ease;
use crate::foundation::error::{CinescrollError, CinescrollResult};

/// Declarative scene entry as authored in a timeline definition.
///
/// `marker` names the container marker attribute value the registry resolves
/// against live layout; it defaults to the scene id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Per-scene hold duration override in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

impl SceneSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            marker: None,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn validate(&self) -> CinescrollResult<()> {
        if self.id.trim().is_empty() {
            return Err(CinescrollError::validation("scene id must be non-empty"));
        }
        if let Some(d) = self.duration_ms
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(CinescrollError::validation(format!(
                "scene '{}' duration_ms must be finite and > 0",
                self.id
            )));
        }
        Ok(())
    }
}

/// Runtime scene record held by the registry.
///
/// The registry keeps no layout state here: on-screen offsets are resolved
/// through the host on every query so transient layout shifts self-correct.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub id: String,
    pub marker: String,
    pub duration_ms: f64,
}

impl Scene {
    pub fn from_spec(spec: &SceneSpec, default_duration_ms: f64) -> Self {
        Self {
            id: spec.id.clone(),
            marker: spec.marker.clone().unwrap_or_else(|| spec.id.clone()),
            duration_ms: spec.duration_ms.unwrap_or(default_duration_ms),
        }
    }
}

/// Autoplay tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Milliseconds each scene visually holds before transitioning.
    pub scene_duration_ms: f64,
    /// Milliseconds of inter-scene transition.
    pub transition_duration_ms: f64,
    /// Per-tick exponential smoothing factor toward the target offset.
    /// Small values feel elastic; 1.0 would snap.
    pub scroll_speed: f64,
    pub ease: Ease,
    /// Completion fires once the smoothed offset is within this many pixels
    /// of the maximum scrollable offset.
    pub completion_tolerance_px: f64,
    /// Idle delay before autoplay resumes after user interaction.
    pub interaction_debounce_ms: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            scene_duration_ms: 12_000.0,
            transition_duration_ms: 3_000.0,
            scroll_speed: 0.012,
            ease: Ease::CinematicInOut,
            completion_tolerance_px: 2.0,
            interaction_debounce_ms: 3_000.0,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> CinescrollResult<()> {
        if !self.scene_duration_ms.is_finite() || self.scene_duration_ms <= 0.0 {
            return Err(CinescrollError::validation(
                "scene_duration_ms must be finite and > 0",
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(CinescrollError::validation(
                "transition_duration_ms must be finite and >= 0",
            ));
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed <= 0.0 || self.scroll_speed > 1.0 {
            return Err(CinescrollError::validation(
                "scroll_speed must be in (0, 1]",
            ));
        }
        if !self.completion_tolerance_px.is_finite() || self.completion_tolerance_px < 0.0 {
            return Err(CinescrollError::validation(
                "completion_tolerance_px must be finite and >= 0",
            ));
        }
        if !self.interaction_debounce_ms.is_finite() || self.interaction_debounce_ms < 0.0 {
            return Err(CinescrollError::validation(
                "interaction_debounce_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Serialized timeline: config plus ordered scenes.
///
/// This is the JSON surface consumed by the CLI and by embedders that author
/// timelines out of band instead of scanning container markers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDef {
    pub version: String,
    #[serde(default)]
    pub config: TimelineConfig,
    pub scenes: Vec<SceneSpec>,
}

impl TimelineDef {
    pub fn validate(&self) -> CinescrollResult<()> {
        if self.version.trim().is_empty() {
            return Err(CinescrollError::validation("version must be non-empty"));
        }
        self.config.validate()?;
        for spec in &self.scenes {
            spec.validate()?;
        }
        let mut seen = std::collections::BTreeSet::new();
        for spec in &self.scenes {
            if !seen.insert(spec.id.as_str()) {
                return Err(CinescrollError::validation(format!(
                    "duplicate scene id '{}'",
                    spec.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_validate() {
        TimelineConfig::default().validate().unwrap();
    }

    #[test]
    fn config_rejects_out_of_range_speed() {
        let mut cfg = TimelineConfig::default();
        cfg.scroll_speed = 0.0;
        assert!(cfg.validate().is_err());
        cfg.scroll_speed = 1.5;
        assert!(cfg.validate().is_err());
        cfg.scroll_speed = 1.0;
        cfg.validate().unwrap();
    }

    #[test]
    fn spec_marker_defaults_to_id() {
        let scene = Scene::from_spec(&SceneSpec::new("vows"), 8_000.0);
        assert_eq!(scene.marker, "vows");
        assert_eq!(scene.duration_ms, 8_000.0);
    }

    #[test]
    fn def_rejects_duplicate_ids() {
        let def = TimelineDef {
            version: "1".to_owned(),
            config: TimelineConfig::default(),
            scenes: vec![SceneSpec::new("cover"), SceneSpec::new("cover")],
        };
        assert!(def.validate().is_err());
    }

    #[test]
    fn def_config_is_optional_in_json() {
        let def: TimelineDef =
            serde_json::from_str(r#"{ "version": "1", "scenes": [{ "id": "cover" }] }"#).unwrap();
        assert_eq!(def.config, TimelineConfig::default());
        def.validate().unwrap();
    }
}
