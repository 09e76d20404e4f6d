use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "choreo", version)]
struct Cli {
    /// Host configuration JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one sampled frame as JSON.
    Sample(SampleArgs),
    /// Write every frame over a time span as a JSON array.
    Timeline(TimelineArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the destination a node hands to navigation.
    Activate(ActivateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagramChoice {
    Triangle,
    Helix,
}

#[derive(Parser, Debug)]
struct Playback {
    #[arg(long, value_enum)]
    diagram: DiagramChoice,

    /// Instant (seconds after mount) at which the section becomes visible.
    /// Ignored by the triangle, which reveals on mount.
    #[arg(long, default_value_t = 0.0)]
    visible_at: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    playback: Playback,

    /// Seconds after mount.
    #[arg(long)]
    at: f64,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    playback: Playback,

    /// Seconds to cover, sampled at the configured frame rate.
    #[arg(long)]
    duration: f64,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    playback: Playback,

    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output edge length in pixels.
    #[arg(long, default_value_t = 600)]
    size: u32,
}

#[derive(Parser, Debug)]
struct ActivateArgs {
    #[arg(long, value_enum)]
    diagram: DiagramChoice,

    #[arg(long)]
    node: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = read_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args, &config),
        Command::Timeline(args) => cmd_timeline(args, &config),
        Command::Frame(args) => cmd_frame(args, &config),
        Command::Activate(args) => cmd_activate(args, &config),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<choreo::HostConfig> {
    match path {
        Some(p) => choreo::HostConfig::load(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(choreo::HostConfig::default()),
    }
}

fn spec_for(choice: DiagramChoice) -> anyhow::Result<choreo::DiagramSpec> {
    let spec = match choice {
        DiagramChoice::Triangle => choreo::competitor_mapping()?,
        DiagramChoice::Helix => choreo::innovation_potential()?,
    };
    Ok(spec)
}

/// Mount at t=0 and replay the host events up to `at`.
fn play(
    playback: &Playback,
    config: &choreo::HostConfig,
    at: f64,
) -> anyhow::Result<choreo::Diagram> {
    let spec = spec_for(playback.diagram)?;
    let mut diagram = choreo::Diagram::mount(spec, config, 0.0).context("mount diagram")?;
    if at >= playback.visible_at {
        diagram.observe_visibility(1.0, playback.visible_at);
    }
    diagram.tick(at);
    Ok(diagram)
}

fn create_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs, config: &choreo::HostConfig) -> anyhow::Result<()> {
    let diagram = play(&args.playback, config, args.at)?;
    let frame = diagram.frame(args.at);
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    serde_json::to_writer_pretty(&mut w, &frame).context("write frame JSON")?;
    writeln!(w)?;
    Ok(())
}

fn cmd_timeline(args: TimelineArgs, config: &choreo::HostConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.duration.is_finite() && args.duration >= 0.0,
        "duration must be finite and >= 0"
    );
    let spec = spec_for(args.playback.diagram)?;
    let mut diagram = choreo::Diagram::mount(spec, config, 0.0).context("mount diagram")?;

    let mut shown = false;
    let mut frames = Vec::new();
    for t in config.frame_times(args.duration) {
        if !shown && t >= args.playback.visible_at {
            diagram.observe_visibility(1.0, args.playback.visible_at);
            shown = true;
        }
        diagram.tick(t);
        frames.push(diagram.frame(t));
    }

    create_parent(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create timeline '{}'", args.out.display()))?;
    serde_json::to_writer(BufWriter::new(f), &frames).context("write timeline JSON")?;

    eprintln!("wrote {} frames to {}", frames.len(), args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs, config: &choreo::HostConfig) -> anyhow::Result<()> {
    let diagram = play(&args.playback, config, args.at)?;
    let svg = choreo::render::svg::render_svg(&diagram.frame(args.at), diagram.spec());
    let raster = choreo::render::raster::rasterize_rgba8(&svg, args.size)?;

    create_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_activate(args: ActivateArgs, config: &choreo::HostConfig) -> anyhow::Result<()> {
    let diagram = choreo::Diagram::mount(spec_for(args.diagram)?, config, 0.0)?;
    let mut navigator = choreo::RecordingNavigator::new();
    let destination = diagram.activate(&args.node, &mut navigator)?;
    println!("{destination}");
    Ok(())
}
