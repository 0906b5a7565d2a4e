use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seaglass", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of the demo scene as a PNG.
    Frame(FrameArgs),
    /// Render consecutive ticks of the demo scene as numbered PNGs.
    Sequence(SequenceArgs),
    /// Render the water kernel alone over the full image.
    Water(WaterArgs),
    /// Print the default scene configuration as JSON.
    DumpConfig,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene configuration JSON; defaults apply to omitted fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font for the mask label; overrides `mask.font_path`.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Shade on the calling thread only.
    #[arg(long)]
    sequential: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of ticks to apply before rendering.
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames, one per tick.
    #[arg(long)]
    frames: u64,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct WaterArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Value of the time uniform.
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Water(args) => cmd_water(args),
        Command::DumpConfig => cmd_dump_config(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<seaglass::DemoConfig> {
    let config = match path {
        Some(p) => seaglass::DemoConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => seaglass::DemoConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn build_scene(args: &SceneArgs) -> anyhow::Result<(seaglass::Renderer, seaglass::DemoScene)> {
    let config = read_config(args.config.as_deref())?;
    let renderer = seaglass::renderer_for(&config, !args.sequential)?;

    let font_path = args.font.as_ref().or(config.mask.font_path.as_ref());
    let font = font_path.map(|p| seaglass::load_font(p)).transpose()?;

    let scene = seaglass::DemoScene::build(&config, &renderer, font.as_deref())
        .with_context(|| "build demo scene")?;
    Ok((renderer, scene))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (renderer, mut scene) = build_scene(&args.scene)?;
    for _ in 0..args.tick {
        scene.tick();
    }

    let frame = scene.render(&renderer)?;
    seaglass::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let (renderer, mut scene) = build_scene(&args.scene)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let opts = seaglass::SequenceOpts {
        frames: args.frames,
        step: scene.tick_step(),
    };
    let out_dir = args.out_dir.clone();
    let stats = seaglass::render_sequence(&renderer, &mut scene, opts, |i, frame| {
        seaglass::write_png(&out_dir.join(format!("frame_{i:05}.png")), &frame)
    })?;

    eprintln!(
        "wrote {} frames to {} ({} ms rendering)",
        stats.frames_rendered,
        args.out_dir.display(),
        stats.render_ms
    );
    Ok(())
}

fn cmd_water(args: WaterArgs) -> anyhow::Result<()> {
    let canvas = seaglass::Canvas::new(args.width, args.height)?;
    let mut shader = seaglass::WaterShader::new(seaglass::WaterParams::default())?;
    shader.set_time(args.time);

    let data = shader.render_rgba8(canvas.width, canvas.height, true)?;
    let frame = seaglass::FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data,
        premultiplied: true,
    };
    seaglass::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump_config() -> anyhow::Result<()> {
    println!("{}", seaglass::DemoConfig::default().to_json_pretty()?);
    Ok(())
}
