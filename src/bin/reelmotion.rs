use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a scene and print one JSON sample per frame.
    Eval(EvalArgs),
    /// Build a smooth (or linear) path through points and print its SVG data and length.
    Path(PathArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive). Defaults to the scene duration.
    #[arg(long)]
    to: Option<u64>,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Input JSON: an array of `{"x", "y"}` points, or `{"values": [...], "area": {...}}`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Straight segments instead of a Catmull-Rom curve.
    #[arg(long)]
    linear: bool,

    /// Curve tension for smooth paths.
    #[arg(long, default_value_t = reelmotion::DEFAULT_TENSION)]
    tension: f64,

    /// Prefix for the generated path id.
    #[arg(long, default_value = "path")]
    id_prefix: String,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PathInput {
    Points(Vec<reelmotion::Point>),
    Series {
        values: Vec<f64>,
        #[serde(default)]
        area: reelmotion::ChartArea,
    },
}

#[derive(serde::Serialize)]
struct PathOutput {
    id: String,
    d: String,
    length: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let scene: reelmotion::Scene = read_json(&args.in_path, "scene")?;
    let prepared = reelmotion::PreparedScene::new(&scene)?;

    let end = args.to.unwrap_or(scene.duration.0).min(scene.duration.0);
    let range = reelmotion::FrameRange::new(
        reelmotion::FrameIndex(args.from),
        reelmotion::FrameIndex(end),
    )?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in range.frames() {
        let sample = prepared.sample(frame)?;
        serde_json::to_writer(&mut out, &sample).context("serialize frame sample")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    eprintln!("evaluated {} frames", range.len_frames());
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let input: PathInput = read_json(&args.in_path, "points")?;
    let points = match input {
        PathInput::Points(points) => points,
        PathInput::Series { values, area } => {
            let scale = reelmotion::ValueScale::fit(&[values.as_slice()])?;
            reelmotion::chart_points(&values, scale, area)
        }
    };
    if points.len() < 2 {
        anyhow::bail!("need at least two points, got {}", points.len());
    }

    let style = if args.linear {
        reelmotion::PathStyle::Linear
    } else {
        reelmotion::PathStyle::Smooth {
            tension: args.tension,
        }
    };
    let path = reelmotion::build_path(&points, style)?;
    let output = PathOutput {
        id: reelmotion::path_id(&args.id_prefix, &points),
        d: path.to_svg(),
        length: reelmotion::path_length(&path),
    };

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}
