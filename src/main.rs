//! Replays a recorded landmark stream through the gesture pipeline and
//! writes the dispatched actions to disk.

use anyhow::Context;
use clap::Parser;
use gesture_control_lib::actions::{ActionRecorder, TracingSink};
use gesture_control_lib::capture::landmarks::ReplaySource;
use gesture_control_lib::viewer::ImageGallery;
use gesture_control_lib::{
    ActionSink, GestureConfig, GestureSession, Mode, ModeStateMachine, SessionSummary,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Replay hand landmarks through the gesture pipeline")]
struct Args {
    /// JSON array of input events (frames, toggleMode, quit)
    replay: PathBuf,

    /// Gesture configuration (JSON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the recorded actions
    #[arg(short, long, default_value = "gesture-output")]
    output_dir: PathBuf,

    /// Mode to start in
    #[arg(long, value_parser = parse_mode, default_value = "cursor")]
    start_mode: Mode,

    /// Images in the viewer gallery that next/previous cycle through
    #[arg(long, default_value_t = 1)]
    images: usize,

    /// Log actions instead of recording them to disk
    #[arg(long)]
    dry_run: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    match s {
        "cursor" => Ok(Mode::Cursor),
        "image" => Ok(Mode::Image),
        other => Err(format!("unknown mode {:?} (expected cursor or image)", other)),
    }
}

async fn replay<K: ActionSink>(
    machine: ModeStateMachine,
    source: ReplaySource,
    sink: K,
) -> anyhow::Result<(SessionSummary, K)> {
    let mut session = GestureSession::new(machine, source, sink);
    let summary = session.run().await?;
    let (_, _, sink) = session.into_parts();
    Ok((summary, sink))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gesture_control_lib::init_tracing();

    let config = match &args.config {
        Some(path) => GestureConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GestureConfig::default(),
    };

    let machine = ModeStateMachine::new(config)?.with_mode(args.start_mode);
    let source = ReplaySource::from_file(&args.replay)
        .with_context(|| format!("Failed to read replay {}", args.replay.display()))?;
    let gallery = ImageGallery::new(args.images).context("--images must be at least 1")?;

    if args.dry_run {
        let (summary, (_, gallery)) = replay(machine, source, (TracingSink, gallery)).await?;
        tracing::info!(
            "Dry run: {} frames into {} actions, final mode {}, image {}/{}",
            summary.frames,
            summary.actions,
            summary.final_mode,
            gallery.index() + 1,
            gallery.count()
        );
        return Ok(());
    }

    let recorder = ActionRecorder::new();
    let (summary, (_, gallery)) = replay(machine, source, (recorder.clone(), gallery)).await?;

    let path = recorder
        .flush_to_disk(&args.output_dir)
        .context("Failed to write recorded actions")?;

    tracing::info!(
        "Replayed {} frames into {} actions, final mode {}, image {}/{} -> {}",
        summary.frames,
        summary.actions,
        summary.final_mode,
        gallery.index() + 1,
        gallery.count(),
        path.display()
    );

    Ok(())
}
