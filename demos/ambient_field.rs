use cinescroll::{
    DeviceProfile, Intensity, ParticleField, ParticleKind, ParticleOptions, Viewport,
};

fn main() {
    tracing_subscriber::fmt::init();

    let profile = DeviceProfile::detect();
    let opts = ParticleOptions {
        kind: ParticleKind::Petal,
        intensity: Intensity::Medium,
        canvas: Viewport {
            width: 800.0,
            height: 600.0,
        },
        seed: 2026,
    };

    let Some(mut field) = ParticleField::mount(opts, &profile) else {
        println!("device judged low-end; ambient layer declined to mount");
        return;
    };

    // Simulate two seconds at 60 fps and report where the petals went.
    for _ in 0..120 {
        field.update(1_000.0 / 60.0);
    }
    for (i, p) in field.particles().iter().enumerate().take(8) {
        println!(
            "petal {i}: pos=({:.1}, {:.1}) rot={:.2} opacity={:.2}",
            p.position.x,
            p.position.y,
            p.rotation,
            p.rendered_opacity()
        );
    }
}
