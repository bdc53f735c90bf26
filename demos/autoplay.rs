use cinescroll::{
    AutoScrollController, InvitationData, RecordingEvents, StaticHost, TemplateId, TickOutcome,
    Timestamp, template_for,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let template = template_for(TemplateId::Garden);
    let data = InvitationData {
        couple: "Maya & Jun".to_owned(),
        date_line: "Saturday, June 20th".to_owned(),
        venue: "The Old Orchard".to_owned(),
        story: vec!["We met on a train.".to_owned()],
        photo_count: 9,
        rsvp_enabled: true,
    };
    let def = template.timeline(&data);

    let host = StaticHost::from_scene_ids(
        800.0,
        def.scenes.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
    );
    let mut ctrl = AutoScrollController::new(def.config)?;
    ctrl.attach_with_scenes(host, &def.scenes);

    let mut events = RecordingEvents::default();
    let mut announced = 0;
    ctrl.start(Timestamp(0.0));

    let mut now = 0.0;
    loop {
        now += 1_000.0 / 60.0;
        let outcome = ctrl.tick(Timestamp(now), &mut events);
        for &index in &events.scene_changes[announced..] {
            let id = ctrl.registry().scene(index).map(|s| s.id.as_str());
            println!("{:>8.0} ms  scene {index} ({})", now, id.unwrap_or("?"));
        }
        announced = events.scene_changes.len();
        if outcome == TickOutcome::Completed {
            println!("{:>8.0} ms  complete", now);
            break;
        }
    }

    Ok(())
}
