//! Cinescroll is the scroll-cinematics engine behind animated invitation
//! pages: a self-driving timeline that eases a scrollable container through
//! a sequence of full-viewport scenes, yields to the user the moment they
//! touch it, and runs decorative ambient effects on the side.
//!
//! The crate is headless. The embedding shell owns the real frame loop and
//! the real container, and drives the engine through two seams:
//!
//! - Implement [`ScrollHost`] over the scrollable surface
//! - Call [`AutoScrollController::tick`] from the display-synchronized
//!   callback, forwarding its timestamp
//! - Route pointer/touch/wheel activity into
//!   [`AutoScrollController::set_user_interacting`]
//!
//! See [`guide`] for the end-to-end walkthrough.
#![forbid(unsafe_code)]

pub mod animation;
pub mod effects;
pub mod foundation;
pub mod guide;
pub mod scene;
pub mod template;
pub mod timeline;

pub use crate::animation::ease::Ease;
pub use crate::foundation::core::{Point, Rect, Timestamp, Vec2, Viewport};
pub use crate::foundation::error::{CinescrollError, CinescrollResult};

pub use crate::effects::capability::DeviceProfile;
pub use crate::effects::overlay::{DecorOverlay, Twinkle};
pub use crate::effects::particles::{
    Intensity, Particle, ParticleField, ParticleKind, ParticleOptions,
};
pub use crate::scene::model::{Scene, SceneSpec, TimelineConfig, TimelineDef};
pub use crate::scene::registry::SceneRegistry;
pub use crate::scene::wrapper::{NullHooks, SceneHooks, SceneWrapper};
pub use crate::template::{InvitationData, Template, TemplateId, template_for};
pub use crate::timeline::controller::{
    AutoScrollController, NullEvents, RecordingEvents, TickOutcome, TimelineEvents,
};
pub use crate::timeline::host::{SceneMarker, ScrollHost, StaticHost};
pub use crate::timeline::interaction::InteractionMonitor;
