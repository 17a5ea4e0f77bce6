use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollfolio::{
    OverlayDescriptor, OverlayScheduler, Size, StageConfig,
    host::{DomPanel, headless::HeadlessPage},
};

#[derive(Parser, Debug)]
#[command(name = "scrollfolio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the frame loop against a headless page and print one JSON report per frame.
    Simulate(SimulateArgs),
    /// Print the overlay alphas for a given (already smoothed) progress.
    Alphas(AlphasArgs),
    /// Print the stage configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Stage configuration JSON (defaults to the portfolio page).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1400.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Total document height in CSS pixels.
    #[arg(long, default_value_t = 6000.0)]
    scroll_height: f64,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Scroll progress to navigate to before the first frame, as a `data-scroll-progress` value.
    #[arg(long)]
    scroll_to: Option<String>,

    /// Frame at which the hero scene and signboard finish loading.
    #[arg(long, default_value_t = 0)]
    loaded_at: u64,

    /// Print only every n-th frame (the last frame is always printed).
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Parser, Debug)]
struct AlphasArgs {
    /// Stage configuration JSON (defaults to the portfolio page).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Smoothed progress in `[0, 1]`.
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Validate and echo this configuration instead of the default.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Alphas(args) => cmd_alphas(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<StageConfig> {
    let Some(path) = path else {
        return Ok(StageConfig::portfolio());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = StageConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be > 0");
    }
    let cfg = read_config(args.config.as_deref())?;
    let hero_group = cfg.hero.group.clone();
    let panel_group = cfg.panel.group.clone();

    let page = HeadlessPage::new(Size::new(args.width, args.height), args.scroll_height);
    let mut stage = page.stage_builder(cfg).build()?;

    if let Some(attr) = &args.scroll_to
        && !stage.navigate(attr)
    {
        eprintln!("scroll target '{attr}' ignored");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..args.frames {
        if i == args.loaded_at {
            page.insert_hero(&hero_group);
            page.insert_signboard(&panel_group);
        }
        let report = stage.frame()?;
        if i % args.every == 0 || i + 1 == args.frames {
            serde_json::to_writer(&mut out, &report).context("write frame report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_alphas(args: AlphasArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let page = HeadlessPage::new(Size::new(1400.0, 900.0), 0.0);

    let descriptors = cfg
        .overlays
        .iter()
        .map(|spec| {
            let panel: Box<dyn DomPanel> = Box::new(page.panel(&spec.element_id));
            OverlayDescriptor::from_spec(spec, Some(panel))
        })
        .collect();
    let mut scheduler = OverlayScheduler::new(descriptors, cfg.visibility_threshold)?;
    if !args.progress.is_finite() {
        anyhow::bail!("--progress must be finite");
    }
    let frame = scheduler.update(args.progress.clamp(0.0, 1.0));

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.in_path.as_deref())?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
