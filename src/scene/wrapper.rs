use crate::scene::model::{SceneSpec, TimelineConfig};
use crate::scene::registry::SceneRegistry;

/// Per-scene enter/exit hooks, driven by viewport visibility.
pub trait SceneHooks {
    fn on_enter(&mut self, scene_id: &str) {
        let _ = scene_id;
    }

    fn on_exit(&mut self, scene_id: &str) {
        let _ = scene_id;
    }
}

/// Hook sink that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHooks;

impl SceneHooks for NullHooks {}

/// Wraps one scene's content and fades it with viewport visibility.
///
/// `on_enter` fires once per visibility entry (the guard resets on exit);
/// `on_exit` fires on every visibility loss. Opacity ramps toward the
/// visibility target over the fade duration rather than snapping.
#[derive(Clone, Debug)]
pub struct SceneWrapper {
    spec: SceneSpec,
    fade_ms: f64,
    visible: bool,
    entered: bool,
    opacity: f64,
}

impl SceneWrapper {
    pub fn new(spec: SceneSpec, fade_ms: f64) -> Self {
        Self {
            spec,
            fade_ms: fade_ms.max(1.0),
            visible: false,
            entered: false,
            opacity: 0.0,
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.spec.id
    }

    /// Current render opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Register this wrapper's scene into the active registry, keeping
    /// declarative markup and scan-based discovery consistent. The registry
    /// is passed explicitly by whoever owns it; there is no ambient global.
    pub fn register(&self, registry: &mut SceneRegistry, config: &TimelineConfig) {
        registry.adopt(&self.spec, config);
    }

    /// Apply a viewport-intersection change.
    pub fn set_visible(&mut self, visible: bool, hooks: &mut dyn SceneHooks) {
        self.visible = visible;
        if visible {
            if !self.entered {
                self.entered = true;
                hooks.on_enter(&self.spec.id);
            }
        } else if self.entered {
            self.entered = false;
            hooks.on_exit(&self.spec.id);
        }
    }

    /// Advance the opacity ramp by `dt_ms` toward the visibility target.
    pub fn tick(&mut self, dt_ms: f64) -> f64 {
        let step = (dt_ms / self.fade_ms).max(0.0);
        let target = if self.visible { 1.0 } else { 0.0 };
        if self.opacity < target {
            self.opacity = (self.opacity + step).min(target);
        } else {
            self.opacity = (self.opacity - step).max(target);
        }
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        enters: Vec<String>,
        exits: Vec<String>,
    }

    impl SceneHooks for Counting {
        fn on_enter(&mut self, scene_id: &str) {
            self.enters.push(scene_id.to_owned());
        }

        fn on_exit(&mut self, scene_id: &str) {
            self.exits.push(scene_id.to_owned());
        }
    }

    #[test]
    fn enter_fires_once_per_visibility_entry() {
        let mut w = SceneWrapper::new(SceneSpec::new("vows"), 400.0);
        let mut hooks = Counting::default();
        w.set_visible(true, &mut hooks);
        w.set_visible(true, &mut hooks);
        assert_eq!(hooks.enters.len(), 1);

        w.set_visible(false, &mut hooks);
        assert_eq!(hooks.exits.len(), 1);

        // A fresh entry fires again.
        w.set_visible(true, &mut hooks);
        assert_eq!(hooks.enters.len(), 2);
    }

    #[test]
    fn exit_without_entry_is_silent() {
        let mut w = SceneWrapper::new(SceneSpec::new("vows"), 400.0);
        let mut hooks = Counting::default();
        w.set_visible(false, &mut hooks);
        assert!(hooks.exits.is_empty());
    }

    #[test]
    fn opacity_ramps_toward_the_visibility_target() {
        let mut w = SceneWrapper::new(SceneSpec::new("vows"), 400.0);
        let mut hooks = Counting::default();
        w.set_visible(true, &mut hooks);
        assert_eq!(w.tick(100.0), 0.25);
        assert_eq!(w.tick(100.0), 0.5);
        assert_eq!(w.tick(1_000.0), 1.0);

        w.set_visible(false, &mut hooks);
        assert_eq!(w.tick(200.0), 0.5);
        assert_eq!(w.tick(1_000.0), 0.0);
    }

    #[test]
    fn register_adopts_into_the_registry_once() {
        let config = TimelineConfig::default();
        let mut reg = SceneRegistry::new();
        let w = SceneWrapper::new(SceneSpec::new("vows"), 400.0);
        w.register(&mut reg, &config);
        w.register(&mut reg, &config);
        assert_eq!(reg.len(), 1);
    }
}
