use crate::effects::capability::DeviceProfile;
use crate::foundation::core::{Point, Vec2, Viewport};
use crate::foundation::math::SplitMix64;

/// Ambient particle flavor. Each kind carries its own drift, size, and
/// opacity character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    Petal,
    Light,
    Dust,
}

/// Field density. Counts are fixed at mount; respawn reuses slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Subtle,
    Medium,
    Lush,
}

impl Intensity {
    fn count(self) -> usize {
        match self {
            Self::Subtle => 18,
            Self::Medium => 36,
            Self::Lush => 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleOptions {
    pub kind: ParticleKind,
    pub intensity: Intensity,
    /// Canvas the field drifts across, usually the visible viewport.
    pub canvas: Viewport,
    pub seed: u64,
}

/// One decorative element. No identity across respawns: a slot whose
/// particle drifts off-canvas is refilled with fresh parameters.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Point,
    /// Pixels per second.
    pub velocity: Vec2,
    /// Radians.
    pub rotation: f64,
    /// Radians per second.
    pub rotation_speed: f64,
    /// Peak opacity; the rendered value breathes below this.
    pub opacity: f64,
    /// Phase of the sinusoidal opacity oscillation, radians.
    pub life_phase: f64,
    /// Render size in pixels.
    pub size: f64,
}

impl Particle {
    /// Opacity after the breathing oscillation, in `[0, opacity]`.
    pub fn rendered_opacity(&self) -> f64 {
        self.opacity * (0.5 + 0.5 * self.life_phase.sin())
    }
}

/// Kind-specific spawn parameter ranges.
struct SpawnRanges {
    vel_x: (f64, f64),
    vel_y: (f64, f64),
    rot_speed: (f64, f64),
    opacity: (f64, f64),
    size: (f64, f64),
}

impl SpawnRanges {
    fn for_kind(kind: ParticleKind) -> Self {
        match kind {
            // Petals fall with a sideways sway.
            ParticleKind::Petal => Self {
                vel_x: (-18.0, 18.0),
                vel_y: (22.0, 55.0),
                rot_speed: (-1.2, 1.2),
                opacity: (0.45, 0.9),
                size: (8.0, 18.0),
            },
            // Lights rise slowly and barely spin.
            ParticleKind::Light => Self {
                vel_x: (-6.0, 6.0),
                vel_y: (-28.0, -8.0),
                rot_speed: (-0.2, 0.2),
                opacity: (0.3, 0.8),
                size: (2.0, 6.0),
            },
            // Dust hangs nearly still.
            ParticleKind::Dust => Self {
                vel_x: (-4.0, 4.0),
                vel_y: (-3.0, 3.0),
                rot_speed: (-0.5, 0.5),
                opacity: (0.15, 0.45),
                size: (1.0, 3.0),
            },
        }
    }
}

/// Off-canvas margin before a particle is considered gone; lets shapes
/// drift fully out of view before their slot respawns.
const RESPAWN_MARGIN_PX: f64 = 24.0;

/// Fixed-count decorative particle field with its own time-driven loop,
/// independent of scroll position.
#[derive(Clone, Debug)]
pub struct ParticleField {
    kind: ParticleKind,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: SplitMix64,
}

impl ParticleField {
    /// Mount the layer, or decline entirely on a low-end device. Declining
    /// is the whole policy: no particles, no loop, nothing rendered.
    pub fn mount(opts: ParticleOptions, profile: &DeviceProfile) -> Option<Self> {
        if profile.is_low_end() {
            tracing::debug!("ambient effects disabled on low-end device");
            return None;
        }
        let mut rng = SplitMix64::new(opts.seed);
        let ranges = SpawnRanges::for_kind(opts.kind);
        let particles = (0..opts.intensity.count())
            .map(|_| spawn(&mut rng, &ranges, opts.canvas.width, opts.canvas.height))
            .collect();
        Some(Self {
            kind: opts.kind,
            width: opts.canvas.width,
            height: opts.canvas.height,
            particles,
            rng,
        })
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Track a canvas resize; bounds apply from the next update.
    pub fn resize(&mut self, canvas: Viewport) {
        self.width = canvas.width;
        self.height = canvas.height;
    }

    /// Advance every particle by `dt_ms`. Slots that drifted out of bounds
    /// respawn in place with fresh randomized parameters.
    pub fn update(&mut self, dt_ms: f64) {
        let dt = (dt_ms / 1_000.0).max(0.0);
        let ranges = SpawnRanges::for_kind(self.kind);
        for p in &mut self.particles {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;
            p.rotation += p.rotation_speed * dt;
            p.life_phase += dt * std::f64::consts::TAU * 0.25;

            let out = p.position.x < -RESPAWN_MARGIN_PX
                || p.position.x > self.width + RESPAWN_MARGIN_PX
                || p.position.y < -RESPAWN_MARGIN_PX
                || p.position.y > self.height + RESPAWN_MARGIN_PX;
            if out {
                *p = spawn(&mut self.rng, &ranges, self.width, self.height);
            }
        }
    }
}

fn spawn(rng: &mut SplitMix64, ranges: &SpawnRanges, width: f64, height: f64) -> Particle {
    Particle {
        position: Point::new(rng.in_range(0.0, width), rng.in_range(0.0, height)),
        velocity: Vec2::new(
            rng.in_range(ranges.vel_x.0, ranges.vel_x.1),
            rng.in_range(ranges.vel_y.0, ranges.vel_y.1),
        ),
        rotation: rng.in_range(0.0, std::f64::consts::TAU),
        rotation_speed: rng.in_range(ranges.rot_speed.0, ranges.rot_speed.1),
        opacity: rng.in_range(ranges.opacity.0, ranges.opacity.1),
        life_phase: rng.in_range(0.0, std::f64::consts::TAU),
        size: rng.in_range(ranges.size.0, ranges.size.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capable() -> DeviceProfile {
        DeviceProfile {
            cpu_cores: 8,
            device_memory_gb: Some(8.0),
            user_agent: None,
        }
    }

    fn low_end() -> DeviceProfile {
        DeviceProfile {
            cpu_cores: 2,
            device_memory_gb: None,
            user_agent: None,
        }
    }

    fn opts(kind: ParticleKind) -> ParticleOptions {
        ParticleOptions {
            kind,
            intensity: Intensity::Medium,
            canvas: Viewport {
                width: 400.0,
                height: 300.0,
            },
            seed: 7,
        }
    }

    #[test]
    fn low_end_device_mounts_nothing() {
        assert!(ParticleField::mount(opts(ParticleKind::Petal), &low_end()).is_none());
    }

    #[test]
    fn mount_spawns_within_bounds() {
        let field = ParticleField::mount(opts(ParticleKind::Petal), &capable()).unwrap();
        assert_eq!(field.particles().len(), 36);
        for p in field.particles() {
            assert!((0.0..=400.0).contains(&p.position.x));
            assert!((0.0..=300.0).contains(&p.position.y));
            assert!((0.45..0.9).contains(&p.opacity));
        }
    }

    #[test]
    fn out_of_bounds_slot_respawns_with_spawn_invariants() {
        let mut field = ParticleField::mount(opts(ParticleKind::Dust), &capable()).unwrap();
        field.particles[0].position = Point::new(-500.0, 50.0);
        field.particles[3].position = Point::new(100.0, 9_999.0);
        field.update(16.0);
        for i in [0, 3] {
            let p = field.particles()[i];
            assert!((0.0..=400.0).contains(&p.position.x), "slot {i} x");
            assert!((0.0..=300.0).contains(&p.position.y), "slot {i} y");
            assert!((0.15..0.45).contains(&p.opacity), "slot {i} opacity");
        }
    }

    #[test]
    fn same_seed_replays_identically() {
        let a = ParticleField::mount(opts(ParticleKind::Light), &capable()).unwrap();
        let b = ParticleField::mount(opts(ParticleKind::Light), &capable()).unwrap();
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.opacity, pb.opacity);
        }
    }

    #[test]
    fn breathing_opacity_never_exceeds_peak() {
        let mut field = ParticleField::mount(opts(ParticleKind::Petal), &capable()).unwrap();
        for _ in 0..120 {
            field.update(16.0);
            for p in field.particles() {
                let r = p.rendered_opacity();
                assert!(r >= 0.0 && r <= p.opacity + 1e-12);
            }
        }
    }

    #[test]
    fn petals_drift_downward_on_average() {
        let field = ParticleField::mount(opts(ParticleKind::Petal), &capable()).unwrap();
        let avg: f64 = field.particles().iter().map(|p| p.velocity.y).sum::<f64>()
            / field.particles().len() as f64;
        assert!(avg > 0.0);
    }
}
