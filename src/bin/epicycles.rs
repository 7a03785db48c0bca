use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "epicycles", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the DC term and the selected rotating vectors as JSON.
    Coeffs(CoeffsArgs),
    /// Run the tracer playback and write one JSON line per frame.
    Trace(TraceArgs),
    /// Write the continuous reconstruction as an SVG document.
    Outline(OutlineArgs),
}

#[derive(Parser, Debug)]
struct CoeffsArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct OutlineArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Pen-tip samples over one period.
    #[arg(long, default_value_t = 1000)]
    points: usize,
}

#[derive(serde::Serialize)]
struct CoeffReport {
    samples: usize,
    dc: [f64; 2],
    vectors: Vec<VectorReport>,
}

#[derive(serde::Serialize)]
struct VectorReport {
    frequency: i64,
    radius: f64,
    phase: f64,
    re: f64,
    im: f64,
}

struct Job {
    cfg: epicycles::JobConfig,
    series: epicycles::FourierSeries,
    vectors: Vec<epicycles::RotatingVector>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Coeffs(args) => cmd_coeffs(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Outline(args) => cmd_outline(args),
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
        .init();
}

fn load_job(path: &Path) -> anyhow::Result<Job> {
    let cfg = epicycles::JobConfig::from_path(path)?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let sample = cfg.load_sample(root)?;
    let series = epicycles::FourierSeries::decompose(&sample);
    let vectors = epicycles::select_vectors(&series, cfg.vectors, cfg.selection);
    Ok(Job {
        cfg,
        series,
        vectors,
    })
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_coeffs(args: CoeffsArgs) -> anyhow::Result<()> {
    let job = load_job(&args.in_path)?;
    let dc = job.series.dc();
    let report = CoeffReport {
        samples: job.series.len(),
        dc: [dc.re, dc.im],
        vectors: job
            .vectors
            .iter()
            .map(|v| VectorReport {
                frequency: v.frequency,
                radius: v.radius(),
                phase: v.phase(),
                re: v.amplitude.re,
                im: v.amplitude.im,
            })
            .collect(),
    };

    match &args.out {
        Some(out) => {
            let mut w = create_output(out)?;
            serde_json::to_writer_pretty(&mut w, &report).context("write coefficient report")?;
            w.flush().context("flush coefficient report")?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let text = serde_json::to_string_pretty(&report)?;
            println!("{text}");
        }
    }
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let job = load_job(&args.in_path)?;
    let mut tracer = epicycles::EpicycleTracer::new(job.vectors)?;
    let mut sink = epicycles::JsonlSegmentSink::new(create_output(&args.out)?);
    let stats = job.cfg.playback.run(&mut tracer, &mut sink)?;

    eprintln!(
        "wrote {} ({} ticks, {} segments)",
        args.out.display(),
        stats.ticks,
        stats.segments
    );
    Ok(())
}

fn cmd_outline(args: OutlineArgs) -> anyhow::Result<()> {
    let job = load_job(&args.in_path)?;
    let origin = job.cfg.outline_origin(job.series.dc());
    let path = epicycles::reconstruct_outline(&job.vectors, args.points, origin)?;

    let bbox = kurbo::Shape::bounding_box(&path).inflate(1.0, 1.0);
    let mut w = create_output(&args.out)?;
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bbox.x0,
        bbox.y0,
        bbox.width(),
        bbox.height()
    )?;
    writeln!(
        w,
        r#"  <path d="{}" fill="none" stroke="black" stroke-width="0.5"/>"#,
        path.to_svg()
    )?;
    writeln!(w, "</svg>")?;
    w.flush().context("flush svg")?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
