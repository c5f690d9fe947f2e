use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2d::geom2::rand::{draw_points_disk, draw_points_uniform, Bounds2, ReplayToken};
use hull2d::{convex_hull, Algorithm, Hull, HullCfg, Vec2};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points, write_points};
use provenance::{current_git_rev, Outcome, RunRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner (brute force and divide-and-conquer)")]
struct Cmd {
    /// Orientation tolerance; |orient| <= eps counts as collinear
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Hull a point CSV (columns x,y) with one algorithm and write JSON
    Run {
        /// brute | split
        #[arg(long, default_value = "split")]
        algo: String,
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Hull a point CSV with both algorithms and print whether they agree
    Compare {
        #[arg(long)]
        input: String,
    },
    /// Write a seeded random point set as CSV
    Sample {
        #[arg(long, default_value_t = 8)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Sample the unit disk instead of the unit square
        #[arg(long)]
        disk: bool,
        #[arg(long)]
        out: String,
    },
    /// Print the build revision and available algorithms
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = HullCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Run { algo, input, out } => run(&algo, &input, &out, cfg).map(|_| ()),
        Action::Compare { input } => compare(&input, cfg),
        Action::Sample {
            n,
            seed,
            index,
            disk,
            out,
        } => sample(n, ReplayToken::new(seed, index), disk, &out),
        Action::Report => report(),
    }
}

/// Serialized hull result.
#[derive(Serialize)]
struct HullReport {
    algorithm: String,
    eps: f64,
    points: Vec<[f64; 2]>,
    hull: Vec<[f64; 2]>,
    indices: Vec<usize>,
    area: f64,
    perimeter: f64,
}

impl HullReport {
    fn new(algo: Algorithm, cfg: HullCfg, points: &[Vec2<f64>], hull: &Hull) -> Self {
        Self {
            algorithm: algo.name().to_string(),
            eps: cfg.eps_orient,
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            indices: hull.indices().to_vec(),
            area: hull.signed_area(),
            perimeter: hull.perimeter(),
        }
    }
}

fn run(algo: &str, input: &str, out: &str, cfg: HullCfg) -> Result<PathBuf> {
    tracing::info!(algo, input, out, eps = cfg.eps_orient, "run");
    let algo: Algorithm = algo.parse()?;
    let pts = read_points(Path::new(input))?;
    let out_path = Path::new(out);
    let res = convex_hull(&pts, algo, cfg);
    RunRecord::new("run", &pts, Outcome::from_result(&res))
        .with_algorithm(algo.name(), cfg.eps_orient)
        .with_input(input)
        .write_beside(out_path)?;
    let hull = res.with_context(|| format!("{algo} hull of {input} ({} points)", pts.len()))?;
    tracing::info!(points = pts.len(), vertices = hull.len(), "hull_done");

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let report = HullReport::new(algo, cfg, &pts, &hull);
    fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;
    Ok(out_path.to_path_buf())
}

fn compare(input: &str, cfg: HullCfg) -> Result<()> {
    tracing::info!(input, eps = cfg.eps_orient, "compare");
    let pts = read_points(Path::new(input))?;
    let results: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&algo| (algo, convex_hull(&pts, algo, cfg)))
        .collect();
    let agree = match (&results[0].1, &results[1].1) {
        (Ok(a), Ok(b)) => a.same_ring(b),
        (Err(_), Err(_)) => true,
        _ => false,
    };
    let per_algo: serde_json::Map<String, serde_json::Value> = results
        .iter()
        .map(|(algo, res)| {
            let v = match res {
                Ok(h) => serde_json::json!({
                    "vertices": h.len(),
                    "indices": h.indices(),
                    "area": h.signed_area()
                }),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            };
            (algo.name().to_string(), v)
        })
        .collect();
    if agree {
        tracing::info!(points = pts.len(), "algorithms_agree");
    } else {
        tracing::warn!(points = pts.len(), "algorithms_disagree");
    }
    let obj = serde_json::json!({
        "input": input,
        "n_points": pts.len(),
        "agree": agree,
        "results": per_algo
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn sample(n: usize, tok: ReplayToken, disk: bool, out: &str) -> Result<()> {
    tracing::info!(n, seed = tok.seed, index = tok.index, disk, out, "sample");
    let pts = if disk {
        draw_points_disk(n, 1.0, tok)
    } else {
        draw_points_uniform(n, Bounds2::default(), tok)
    };
    let out_path = Path::new(out);
    write_points(out_path, &pts)?;
    let outcome = Outcome::Sampled {
        seed: tok.seed,
        index: tok.index,
        shape: if disk { "disk" } else { "square" },
    };
    RunRecord::new("sample", &pts, outcome).write_beside(out_path)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "hull2d_version": hull2d::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
        "default_eps": HullCfg::default().eps_orient
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
