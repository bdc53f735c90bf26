use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cinescroll::{
    AutoScrollController, InvitationData, RecordingEvents, StaticHost, TemplateId, TickOutcome,
    TimelineDef, Timestamp, template_for,
};

#[derive(Parser, Debug)]
#[command(name = "cinescroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a timeline JSON.
    Validate(ValidateArgs),
    /// Play a timeline headlessly and print its event schedule.
    Play(PlayArgs),
    /// Emit a template's timeline JSON for sample data.
    Template(TemplateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Simulated viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct TemplateArgs {
    /// Template id (eternal | garden | midnight).
    #[arg(long)]
    id: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Play(args) => cmd_play(args),
        Command::Template(args) => cmd_template(args),
    }
}

fn read_timeline_json(path: &Path) -> anyhow::Result<TimelineDef> {
    let f = File::open(path).with_context(|| format!("open timeline '{}'", path.display()))?;
    let r = BufReader::new(f);
    let def: TimelineDef = serde_json::from_reader(r).with_context(|| "parse timeline JSON")?;
    Ok(def)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let def = read_timeline_json(&args.in_path)?;
    def.validate()?;
    eprintln!(
        "ok: {} scenes, total {:.0} ms",
        def.scenes.len(),
        total_ms(&def)
    );
    Ok(())
}

fn total_ms(def: &TimelineDef) -> f64 {
    let holds: f64 = def
        .scenes
        .iter()
        .map(|s| s.duration_ms.unwrap_or(def.config.scene_duration_ms))
        .sum();
    let gaps = def.scenes.len().saturating_sub(1) as f64;
    holds + gaps * def.config.transition_duration_ms
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("fps must be >= 1");
    }
    let def = read_timeline_json(&args.in_path)?;
    def.validate()?;

    let host = StaticHost::from_scene_ids(
        args.viewport,
        def.scenes.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
    );
    let mut ctrl = AutoScrollController::new(def.config)?;
    ctrl.attach_with_scenes(host, &def.scenes);

    let frame_ms = 1_000.0 / f64::from(args.fps);
    let mut events = RecordingEvents::default();
    let mut announced = 0;

    ctrl.start(Timestamp(0.0));
    let mut now = 0.0;
    loop {
        now += frame_ms;
        let outcome = ctrl.tick(Timestamp(now), &mut events);
        for &index in &events.scene_changes[announced..] {
            println!("{:>8.0} ms  scene {index}", now);
        }
        announced = events.scene_changes.len();
        match outcome {
            TickOutcome::Completed => {
                println!("{:>8.0} ms  complete", now);
                break;
            }
            TickOutcome::Idle => anyhow::bail!("playback idled unexpectedly"),
            TickOutcome::Animated | TickOutcome::Throttled => {}
        }
    }
    Ok(())
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let id: TemplateId = args.id.parse()?;
    let data = InvitationData {
        couple: "Maya & Jun".to_owned(),
        date_line: "Saturday, June 20th".to_owned(),
        venue: "The Old Orchard".to_owned(),
        story: vec!["We met on a train.".to_owned()],
        photo_count: 12,
        rsvp_enabled: true,
    };
    let def = template_for(id).timeline(&data);
    let json = serde_json::to_string_pretty(&def)?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("write timeline '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
