use crate::foundation::core::{Point, Viewport};
use crate::foundation::math::SplitMix64;

/// One twinkling ornament: a fixed anchor whose opacity breathes on its own
/// phase-offset sine.
#[derive(Clone, Copy, Debug)]
pub struct Twinkle {
    pub position: Point,
    pub size: f64,
    pub peak_opacity: f64,
    phase: f64,
    /// Full breathing period in milliseconds.
    period_ms: f64,
}

impl Twinkle {
    pub fn opacity(&self) -> f64 {
        self.peak_opacity * (0.5 + 0.5 * self.phase.sin())
    }
}

/// Decorative corner/edge overlay, time-driven and independent of the
/// scroll timeline. Cheap enough to run everywhere; the capability gate
/// only applies to the particle field.
#[derive(Clone, Debug)]
pub struct DecorOverlay {
    twinkles: Vec<Twinkle>,
}

impl DecorOverlay {
    /// Scatter `count` twinkles over a canvas, deterministically from the
    /// seed.
    pub fn new(count: usize, canvas: Viewport, seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);
        let twinkles = (0..count)
            .map(|_| Twinkle {
                position: Point::new(
                    rng.in_range(0.0, canvas.width),
                    rng.in_range(0.0, canvas.height),
                ),
                size: rng.in_range(1.5, 4.0),
                peak_opacity: rng.in_range(0.4, 0.9),
                phase: rng.in_range(0.0, std::f64::consts::TAU),
                period_ms: rng.in_range(1_800.0, 4_200.0),
            })
            .collect();
        Self { twinkles }
    }

    pub fn twinkles(&self) -> &[Twinkle] {
        &self.twinkles
    }

    pub fn update(&mut self, dt_ms: f64) {
        let dt = dt_ms.max(0.0);
        for t in &mut self.twinkles {
            t.phase += std::f64::consts::TAU * dt / t.period_ms;
        }
    }
}
