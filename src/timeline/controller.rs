use crate::foundation::core::Timestamp;
use crate::foundation::error::CinescrollResult;
use crate::foundation::math::lerp;
use crate::scene::model::{Scene, SceneSpec, TimelineConfig};
use crate::scene::registry::SceneRegistry;
use crate::timeline::host::ScrollHost;
use crate::timeline::interaction::InteractionMonitor;

/// Minimum inter-frame delta before a tick does work. Slightly under the
/// 60 Hz period so vsync jitter never drops legitimate frames.
const MIN_FRAME_INTERVAL_MS: f64 = 15.0;

/// Outward event sink for timeline notifications.
///
/// Scene changes fire once per transition in strictly increasing index
/// order during forward playback; completion fires exactly once per run.
pub trait TimelineEvents {
    fn on_scene_change(&mut self, index: usize, scene: &Scene) {
        let _ = (index, scene);
    }

    fn on_complete(&mut self) {}
}

/// Sink that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEvents;

impl TimelineEvents for NullEvents {}

/// Sink that records every notification, for tests and headless playback.
#[derive(Clone, Debug, Default)]
pub struct RecordingEvents {
    pub scene_changes: Vec<usize>,
    pub completions: usize,
}

impl TimelineEvents for RecordingEvents {
    fn on_scene_change(&mut self, index: usize, _scene: &Scene) {
        self.scene_changes.push(index);
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Stopped,
    Running,
    Paused,
}

/// What a tick did, and whether the host should keep its frame loop armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stopped, paused, suppressed, or unmounted: no work was performed and
    /// the host need not reschedule — the resume paths re-arm the loop.
    Idle,
    /// Under the frame budget; work was skipped, keep the loop armed.
    Throttled,
    /// The scroll offset advanced; keep the loop armed.
    Animated,
    /// Completion fired during this tick; the controller is now stopped.
    Completed,
}

/// Self-driving scroll timeline driver.
///
/// Computes a target scroll offset from elapsed wall-clock time and the
/// scene sequence, follows it with exponential smoothing, and writes the
/// result to the attached [`ScrollHost`] once per display frame. The
/// embedder forwards pointer/touch/wheel activity through
/// [`set_user_interacting`](Self::set_user_interacting) so autoplay yields
/// to the user instead of fighting them.
pub struct AutoScrollController<H: ScrollHost> {
    config: TimelineConfig,
    registry: SceneRegistry,
    interaction: InteractionMonitor,
    host: Option<H>,
    playback: Playback,
    paused_by_interaction: bool,
    current_scene: Option<usize>,
    scroll_position: f64,
    start_time: Option<Timestamp>,
    paused_at: Option<Timestamp>,
    last_tick: Option<Timestamp>,
}

impl<H: ScrollHost> AutoScrollController<H> {
    pub fn new(config: TimelineConfig) -> CinescrollResult<Self> {
        config.validate()?;
        Ok(Self {
            interaction: InteractionMonitor::new(config.interaction_debounce_ms),
            config,
            registry: SceneRegistry::new(),
            host: None,
            playback: Playback::Stopped,
            paused_by_interaction: false,
            current_scene: None,
            scroll_position: 0.0,
            start_time: None,
            paused_at: None,
            last_tick: None,
        })
    }

    /// Attach a container and discover scenes from its markers in document
    /// order. Re-attaching replaces the previous scene list.
    #[tracing::instrument(skip(self, host))]
    pub fn attach(&mut self, host: H) {
        self.registry.initialize_from_host(&host, &self.config);
        self.host = Some(host);
    }

    /// Attach a container with a pre-supplied ordered scene list instead of
    /// scanning markers.
    #[tracing::instrument(skip(self, host, scenes))]
    pub fn attach_with_scenes(&mut self, host: H, scenes: &[SceneSpec]) {
        self.registry.initialize_from_specs(scenes, &self.config);
        self.host = Some(host);
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SceneRegistry {
        &mut self.registry
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn is_playing(&self) -> bool {
        self.playback != Playback::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn current_scene(&self) -> Option<usize> {
        self.current_scene
    }

    /// The controller's own smoothed offset estimate. This trails the
    /// computed target and is what gets written to the container.
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    /// Resolved scroll offset for scene `index`, from live layout with the
    /// `index * viewport_height` fallback. 0 when unmounted.
    pub fn scene_position(&self, index: usize) -> f64 {
        self.registry
            .scene_position(self.host.as_ref().map(|h| h as &dyn ScrollHost), index)
    }

    /// Total timeline duration: every hold plus the transitions between.
    pub fn total_duration_ms(&self) -> f64 {
        let n = self.registry.len();
        if n == 0 {
            return 0.0;
        }
        let holds: f64 = self.registry.scenes().iter().map(|s| s.duration_ms).sum();
        holds + (n as f64 - 1.0) * self.config.transition_duration_ms
    }

    /// Begin playback from the top of the timeline. No-op while already
    /// playing (running or paused).
    pub fn start(&mut self, now: Timestamp) {
        if self.playback != Playback::Stopped {
            return;
        }
        self.playback = Playback::Running;
        self.paused_by_interaction = false;
        self.current_scene = None;
        self.scroll_position = self.host.as_ref().map_or(0.0, |h| h.scroll_top());
        self.start_time = Some(now);
        self.paused_at = None;
        self.last_tick = None;
    }

    /// Suspend ticking. Safe no-op when already paused or stopped.
    pub fn pause(&mut self, now: Timestamp) {
        if self.playback != Playback::Running {
            return;
        }
        self.playback = Playback::Paused;
        self.paused_by_interaction = false;
        self.paused_at = Some(now);
    }

    /// Exit a pause, shifting the elapsed-time origin by the paused span so
    /// the timeline continues exactly where it left off. No-op unless
    /// currently playing-and-paused.
    pub fn resume(&mut self, now: Timestamp) {
        if self.playback != Playback::Paused {
            return;
        }
        self.resume_internal(now);
    }

    fn resume_internal(&mut self, now: Timestamp) {
        if let (Some(start), Some(paused_at)) = (self.start_time, self.paused_at) {
            self.start_time = Some(start.offset(now.since(paused_at)));
        }
        self.playback = Playback::Running;
        self.paused_by_interaction = false;
        self.paused_at = None;
        self.last_tick = None;
    }

    /// Terminal stop. A stopped controller only restarts from the beginning
    /// via [`start`](Self::start).
    pub fn stop(&mut self) {
        self.playback = Playback::Stopped;
        self.paused_by_interaction = false;
        self.start_time = None;
        self.paused_at = None;
        self.last_tick = None;
        self.interaction.reset();
    }

    /// Forward user pointer/touch/wheel activity. `true` pauses autoplay
    /// immediately and restarts the idle debounce; playback resumes on its
    /// own once the debounce window passes with no further activity.
    pub fn set_user_interacting(&mut self, interacting: bool, now: Timestamp) {
        self.interaction.set_interacting(interacting, now);
        if interacting && self.playback == Playback::Running {
            tracing::debug!("autoplay suppressed by user interaction");
            self.playback = Playback::Paused;
            self.paused_by_interaction = true;
            self.paused_at = Some(now);
        }
    }

    /// Snap to scene `index` immediately, with no easing, and fire the
    /// scene-change notification synchronously. Out-of-range indices are
    /// ignored.
    #[tracing::instrument(skip(self, events))]
    pub fn jump_to_scene(&mut self, index: usize, now: Timestamp, events: &mut dyn TimelineEvents) {
        if index >= self.registry.len() {
            return;
        }
        let pos = self.scene_position(index);
        self.current_scene = Some(index);
        self.scroll_position = pos;
        if let Some(host) = self.host.as_mut() {
            host.set_scroll_top(pos);
        }
        // While playing, realign the elapsed origin to the jumped scene's
        // hold start so the next tick continues from there.
        if self.playback != Playback::Stopped {
            let hold_start = self.scene_start_ms(index);
            self.start_time = Some(Timestamp(now.0 - hold_start));
        }
        if let Some(scene) = self.registry.scene(index) {
            events.on_scene_change(index, scene);
        }
    }

    /// Stop plus release of the container and scene list. Safe to call any
    /// number of times.
    pub fn destroy(&mut self) {
        self.stop();
        self.host = None;
        self.registry.clear();
        self.current_scene = None;
        self.scroll_position = 0.0;
    }

    /// Advance one display frame.
    ///
    /// Performs no work while stopped, paused, suppressed by interaction,
    /// or unmounted, and throttles itself to the target frame rate by
    /// measuring the inter-frame delta.
    pub fn tick(&mut self, now: Timestamp, events: &mut dyn TimelineEvents) -> TickOutcome {
        if self.playback == Playback::Stopped {
            return TickOutcome::Idle;
        }
        if self.interaction.poll(now) {
            return TickOutcome::Idle;
        }
        if self.playback == Playback::Paused {
            // Interaction pauses resume on their own after the debounce;
            // explicit pauses wait for resume().
            if self.paused_by_interaction && !self.interaction.is_interacting() {
                self.resume_internal(now);
            } else {
                return TickOutcome::Idle;
            }
        }
        if self.host.is_none() {
            return TickOutcome::Idle;
        }
        if let Some(last) = self.last_tick
            && now.since(last) < MIN_FRAME_INTERVAL_MS
        {
            return TickOutcome::Throttled;
        }
        self.last_tick = Some(now);

        let Some(start) = self.start_time else {
            return TickOutcome::Idle;
        };
        let elapsed = now.since(start);

        if self.registry.is_empty() {
            return self.complete(events);
        }

        let (located, target) = self.locate(elapsed);
        if self.current_scene != Some(located) {
            self.current_scene = Some(located);
            if let Some(scene) = self.registry.scene(located) {
                events.on_scene_change(located, scene);
            }
        }

        self.scroll_position += (target - self.scroll_position) * self.config.scroll_speed;
        let max_scroll = match self.host.as_mut() {
            Some(host) => {
                host.set_scroll_top(self.scroll_position);
                host.max_scroll()
            }
            None => return TickOutcome::Idle,
        };

        let at_end = max_scroll - self.scroll_position <= self.config.completion_tolerance_px;
        if at_end || elapsed >= self.total_duration_ms() {
            return self.complete(events);
        }
        TickOutcome::Animated
    }

    fn complete(&mut self, events: &mut dyn TimelineEvents) -> TickOutcome {
        tracing::debug!("timeline complete");
        // The stop transition is what makes completion single-fire: any
        // further tick sees Stopped and idles.
        self.stop();
        events.on_complete();
        TickOutcome::Completed
    }

    /// Elapsed offset at which scene `index`'s hold window begins.
    fn scene_start_ms(&self, index: usize) -> f64 {
        let trans = self.config.transition_duration_ms;
        self.registry
            .scenes()
            .iter()
            .take(index)
            .map(|s| s.duration_ms + trans)
            .sum()
    }

    /// Locate the scene/transition window containing `elapsed` and compute
    /// the eased target offset.
    ///
    /// The journey from one scene's position to the next is eased as a
    /// single monotone span covering the hold window (intra-scene progress,
    /// the cinematic slow creep) and the following transition window
    /// (transition-local progress). The located index flips to the next
    /// scene at the transition start. Position lookups one past the end use
    /// the registry's viewport-multiple fallback, so the last hold creeps
    /// toward the container bottom and the write-side clamp does the rest.
    fn locate(&self, elapsed: f64) -> (usize, f64) {
        let n = self.registry.len();
        let trans = self.config.transition_duration_ms;
        let ease = self.config.ease;

        let mut window_start = 0.0;
        for i in 0..n {
            let hold = self.registry.scenes()[i].duration_ms;
            let from = self.scene_position(i);
            let to = self.scene_position(i + 1);
            let last = i + 1 == n;
            let span = if last { hold } else { hold + trans };
            let hold_share = hold / span;

            if elapsed < window_start + hold {
                let p = ((elapsed - window_start) / hold) * hold_share;
                return (i, lerp(from, to, ease.apply(p)));
            }
            if !last && elapsed < window_start + hold + trans {
                let p = hold_share + ((elapsed - window_start - hold) / trans) * (1.0 - hold_share);
                return (i + 1, lerp(from, to, ease.apply(p)));
            }
            window_start += span;
        }

        (n - 1, self.scene_position(n))
    }
}
