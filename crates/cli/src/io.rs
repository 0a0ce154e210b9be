//! JSON contour files.
//!
//! Input: `{"points": [[x, y], ...]}` in traced order (closing point optional).
//! Output: the compressed corners plus a few shape measures.

use anyhow::{bail, Context, Result};
use ringtrace::contour::metrics::{area, bounds};
use ringtrace::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContourFile {
    pub points: Vec<[u32; 2]>,
}

impl ContourFile {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Points in file order; a trailing copy of the first point is dropped.
    pub fn to_points(&self) -> Vec<Point> {
        let mut pts: Vec<Point> = self.points.iter().map(|&[x, y]| Point::new(x, y)).collect();
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        pts
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub traced: usize,
    pub corners: usize,
    pub area: f64,
    pub bounds: Option<[u32; 4]>,
}

impl Summary {
    pub fn new(traced: usize, corners: &[Point]) -> Self {
        Self {
            traced,
            corners: corners.len(),
            area: area(corners),
            bounds: bounds(corners).map(|b| [b.min.x, b.min.y, b.max.x, b.max.y]),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimplifiedFile {
    pub summary: Summary,
    pub points: Vec<[u32; 2]>,
}

pub fn read_contour(path: &Path) -> Result<ContourFile> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: ContourFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing contour JSON {}", path.display()))?;
    if file.points.is_empty() {
        bail!("{} contains no points", path.display());
    }
    Ok(file)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
