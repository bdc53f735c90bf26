//! # Cinescroll guide
//!
//! A standalone walkthrough of how the pieces fit. If you are embedding the
//! engine, start here; if you are changing timeline semantics, read
//! [`crate::timeline::controller`] next.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ScrollHost`](crate::ScrollHost): the scrollable container boundary.
//!   The engine reads viewport metrics and marker offsets through it and
//!   writes the scroll offset back. [`StaticHost`](crate::StaticHost) is the
//!   in-memory reference used by tests and headless playback.
//! - [`SceneRegistry`](crate::SceneRegistry): the ordered scene list, built
//!   by scanning container markers or from a supplied
//!   [`TimelineDef`](crate::TimelineDef). Offsets resolve from live layout
//!   on every query; nothing is cached across frames.
//! - [`AutoScrollController`](crate::AutoScrollController): the driver. Per
//!   display frame it maps elapsed wall-clock time to a scene/transition
//!   window, eases a target offset, follows it with exponential smoothing,
//!   and writes the result to the host.
//! - [`TimelineEvents`](crate::TimelineEvents): outward notifications —
//!   scene changes (for progress chrome) and completion (for the replay /
//!   call-to-action state).
//! - [`ParticleField`](crate::ParticleField) and
//!   [`DecorOverlay`](crate::DecorOverlay): ambient layers on their own
//!   clocks, independent of scroll position. The particle field declines to
//!   mount on low-end devices ([`DeviceProfile`](crate::DeviceProfile)).
//! - [`Template`](crate::Template): one of a closed set of invitation
//!   layouts, turning [`InvitationData`](crate::InvitationData) into a
//!   playable timeline.
//!
//! ---
//!
//! ## The clock contract
//!
//! The engine never reads a clock. Every time-sensitive call takes a
//! [`Timestamp`](crate::Timestamp) in milliseconds — in a browser shell,
//! the `requestAnimationFrame` timestamp; in tests, whatever the test says
//! it is. This is why every behavior in the crate is deterministic under
//! test, including the interaction debounce and pause/resume bookkeeping.
//!
//! ## Yielding to the user
//!
//! The container's scroll offset is shared mutable state. During autoplay
//! only the driver writes it; the embedder routes every manual
//! scroll/touch/wheel signal into
//! [`set_user_interacting`](crate::AutoScrollController::set_user_interacting),
//! which pauses the driver immediately and re-arms an idle debounce.
//! Playback resumes by itself once the user has been idle for the
//! configured window, from exactly where the timeline paused.
//!
//! ## Degraded modes
//!
//! Nothing here throws at the user: an unmounted container idles, missing
//! markers fall back to viewport multiples, an empty scene list completes
//! immediately, and a weak device simply gets a still page.

// Doc-only module.
