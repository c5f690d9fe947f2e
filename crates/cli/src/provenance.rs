use anyhow::{Context, Result};
use hull2d::{Hull, HullError, Vec2};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command did with a point set, written as `<stem>.provenance.json`
/// next to its artifact.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: String,
    pub hull2d_version: &'static str,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<&'static str>,
    pub eps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub n_points: usize,
    /// FNV-1a over the coordinate bit patterns, in input order.
    pub points_digest: String,
    pub outcome: Outcome,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Hull { vertices: usize, area: f64 },
    Failed { error: &'static str, message: String },
    Sampled { seed: u64, index: u64, shape: &'static str },
}

impl Outcome {
    pub fn from_result(res: &Result<Hull, HullError>) -> Self {
        match res {
            Ok(h) => Outcome::Hull {
                vertices: h.len(),
                area: h.signed_area(),
            },
            Err(e) => Outcome::Failed {
                error: error_kind(e),
                message: e.to_string(),
            },
        }
    }
}

impl RunRecord {
    pub fn new(command: &'static str, points: &[Vec2<f64>], outcome: Outcome) -> Self {
        Self {
            code_rev: current_git_rev(),
            hull2d_version: hull2d::VERSION,
            command,
            algorithm: None,
            eps: 0.0,
            input: None,
            n_points: points.len(),
            points_digest: points_digest(points),
            outcome,
        }
    }

    pub fn with_algorithm(mut self, name: &'static str, eps: f64) -> Self {
        self.algorithm = Some(name);
        self.eps = eps;
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Write the record beside `artifact`; returns the sidecar path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), digest = %self.points_digest, "run_record");
        Ok(path)
    }
}

fn error_kind(e: &HullError) -> &'static str {
    match e {
        HullError::InsufficientPoints { .. } => "insufficient_points",
        HullError::NonFinite { .. } => "non_finite",
        HullError::DegenerateCollinear => "degenerate_collinear",
        HullError::VerticalSplit => "vertical_split",
        HullError::OpenBoundary { .. } => "open_boundary",
    }
}

/// Order-sensitive digest of a point set; `-0.0` and `0.0` differ.
pub fn points_digest(points: &[Vec2<f64>]) -> String {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let h = points
        .iter()
        .flat_map(|p| [p.x.to_bits(), p.y.to_bits()])
        .flat_map(u64::to_le_bytes)
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME));
    format!("{h:016x}")
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
