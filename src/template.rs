//! Closed set of invitation templates.
//!
//! A template turns one invitation's data into the ordered scene list the
//! timeline plays, plus its autoplay tuning and ambient-effect choice.
//! Templates are selected by id; there is no open registration surface.

use crate::effects::particles::ParticleKind;
use crate::foundation::error::{CinescrollError, CinescrollResult};
use crate::scene::model::{SceneSpec, TimelineConfig, TimelineDef};

/// The render-data shape every template consumes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InvitationData {
    /// "Maya & Jun" line on the cover.
    pub couple: String,
    pub date_line: String,
    pub venue: String,
    /// Story paragraphs; the story scene is omitted when empty.
    #[serde(default)]
    pub story: Vec<String>,
    /// Gallery photo count; the gallery scene is omitted at zero.
    #[serde(default)]
    pub photo_count: usize,
    /// Whether the invitation collects RSVPs.
    #[serde(default)]
    pub rsvp_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Eternal,
    Garden,
    Midnight,
}

impl std::str::FromStr for TemplateId {
    type Err = CinescrollError;

    fn from_str(s: &str) -> CinescrollResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eternal" => Ok(Self::Eternal),
            "garden" => Ok(Self::Garden),
            "midnight" => Ok(Self::Midnight),
            other => Err(CinescrollError::template(format!(
                "unknown template '{other}'"
            ))),
        }
    }
}

/// One interchangeable invitation template.
pub trait Template {
    fn id(&self) -> TemplateId;

    /// Ordered scene list for this invitation's data.
    fn scenes(&self, data: &InvitationData) -> Vec<SceneSpec>;

    /// Autoplay tuning for this template's pacing.
    fn config(&self) -> TimelineConfig {
        TimelineConfig::default()
    }

    /// Ambient particle flavor, or `None` for a still template.
    fn ambient(&self) -> Option<ParticleKind> {
        None
    }

    /// Full timeline definition: scenes plus tuning.
    fn timeline(&self, data: &InvitationData) -> TimelineDef {
        TimelineDef {
            version: "1".to_owned(),
            config: self.config(),
            scenes: self.scenes(data),
        }
    }
}

/// Resolve a template by id.
pub fn template_for(id: TemplateId) -> &'static dyn Template {
    match id {
        TemplateId::Eternal => &Eternal,
        TemplateId::Garden => &Garden,
        TemplateId::Midnight => &Midnight,
    }
}

/// Shared scene skeleton: cover, then the data-dependent middle, then the
/// closing scene.
fn base_scenes(data: &InvitationData, closing: &str) -> Vec<SceneSpec> {
    let mut scenes = vec![SceneSpec::new("cover")];
    if !data.story.is_empty() {
        scenes.push(SceneSpec::new("story"));
    }
    scenes.push(SceneSpec::new("details"));
    if data.photo_count > 0 {
        scenes.push(SceneSpec::new("gallery"));
    }
    if data.rsvp_enabled {
        scenes.push(SceneSpec::new("rsvp"));
    }
    scenes.push(SceneSpec::new(closing));
    scenes
}

/// Restrained serif classic; no ambient layer.
struct Eternal;

impl Template for Eternal {
    fn id(&self) -> TemplateId {
        TemplateId::Eternal
    }

    fn scenes(&self, data: &InvitationData) -> Vec<SceneSpec> {
        base_scenes(data, "farewell")
    }
}

/// Botanical daytime template: falling petals, a lingering cover.
struct Garden;

impl Template for Garden {
    fn id(&self) -> TemplateId {
        TemplateId::Garden
    }

    fn scenes(&self, data: &InvitationData) -> Vec<SceneSpec> {
        let mut scenes = base_scenes(data, "send_off");
        // The cover lingers longer than the configured default.
        scenes[0] = SceneSpec::new("cover").with_duration(15_000.0);
        scenes
    }

    fn config(&self) -> TimelineConfig {
        TimelineConfig {
            scene_duration_ms: 11_000.0,
            transition_duration_ms: 3_500.0,
            ..TimelineConfig::default()
        }
    }

    fn ambient(&self) -> Option<ParticleKind> {
        Some(ParticleKind::Petal)
    }
}

/// Night-sky template: rising lights, brisker pacing.
struct Midnight;

impl Template for Midnight {
    fn id(&self) -> TemplateId {
        TemplateId::Midnight
    }

    fn scenes(&self, data: &InvitationData) -> Vec<SceneSpec> {
        base_scenes(data, "constellation")
    }

    fn config(&self) -> TimelineConfig {
        TimelineConfig {
            scene_duration_ms: 9_000.0,
            transition_duration_ms: 2_200.0,
            ..TimelineConfig::default()
        }
    }

    fn ambient(&self) -> Option<ParticleKind> {
        Some(ParticleKind::Light)
    }
}
