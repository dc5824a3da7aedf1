use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cardflow", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script and print the requested frame snapshots as JSON.
    Simulate(SimulateArgs),
    /// Print a preset configuration as JSON.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Configuration preset; ignored when `--config` is given.
    #[arg(long, value_enum, default_value_t = PresetChoice::CtaFlow)]
    preset: PresetChoice,

    /// Full configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also emit the display list of the final frame.
    #[arg(long)]
    display_list: bool,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset to print.
    #[arg(long, value_enum)]
    name: PresetChoice,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    CtaFlow,
    ScrollTest,
}

impl From<PresetChoice> for cardflow::Preset {
    fn from(value: PresetChoice) -> Self {
        match value {
            PresetChoice::CtaFlow => Self::CtaFlow,
            PresetChoice::ScrollTest => Self::ScrollTest,
        }
    }
}

#[derive(serde::Serialize)]
struct SimulateOutput {
    snapshots: Vec<cardflow::FrameSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_list: Option<cardflow::DisplayList>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => cardflow::MockupConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => cardflow::Preset::from(args.preset).config(),
    };
    let script = cardflow::InputScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let mut app = cardflow::MockupApp::new(config)?;
    let snapshots = cardflow::run_script(&mut app, &script)?;
    let display_list = args
        .display_list
        .then(|| cardflow::DisplayList::build(&app));

    let output = SimulateOutput {
        snapshots,
        display_list,
    };
    write_json(args.out.as_deref(), &output)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let config = cardflow::Preset::from(args.name).config();
    write_json(args.out.as_deref(), &config)
}

fn write_json(out: Option<&Path>, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes()).context("write stdout")?;
            stdout.write_all(b"\n").context("write stdout")?;
        }
    }
    Ok(())
}
