//! Subcommand bodies, kept out of `main` so tests can drive them directly.

use anyhow::{Context, Result};
use ringtrace::contour::rand::{draw_traced_contour, CornerCount, ReplayToken, TraceCfg};
use ringtrace::{Contour, ScanCfg};
use serde_json::json;
use std::path::Path;

use crate::io::{read_contour, write_json, ContourFile, SimplifiedFile, Summary};
use crate::provenance::{current_git_rev, write_sidecar, Provenance};

/// Compress the contour in `input` and write corners plus summary to `out`.
pub fn simplify(input: &Path, out: &Path, max_search: usize) -> Result<Summary> {
    let file = read_contour(input)?;
    let contour = Contour::from_points(file.to_points()).with_cfg(ScanCfg { max_search });
    let traced = contour.len();
    let corners = contour
        .into_points()
        .with_context(|| format!("simplifying {}", input.display()))?;
    let summary = Summary::new(traced, &corners);
    tracing::info!(traced, corners = summary.corners, area = summary.area, "simplified");

    let doc = SimplifiedFile {
        points: ContourFile::from_points(&corners).points,
        summary,
    };
    write_json(out, &doc)?;
    let prov = Provenance::new("simplify", json!({ "max_search": max_search })).with_input(input);
    let sidecar = write_sidecar(out, &prov)?;
    tracing::debug!(path = %sidecar.display(), "provenance_written");
    Ok(doc.summary)
}

/// Summary of `input` without writing anything.
pub fn stats(input: &Path, max_search: usize) -> Result<Summary> {
    let file = read_contour(input)?;
    let contour = Contour::from_points(file.to_points()).with_cfg(ScanCfg { max_search });
    let traced = contour.len();
    let corners = contour.into_points()?;
    Ok(Summary::new(traced, &corners))
}

/// Write a synthetic traced contour (dense, uncompressed) to `out`.
pub fn demo(out: &Path, seed: u64, index: u64, corners: usize, extent: u32) -> Result<usize> {
    let cfg = TraceCfg {
        corners: CornerCount::Fixed(corners),
        extent,
        ..TraceCfg::default()
    };
    let draw = draw_traced_contour(cfg, ReplayToken { seed, index });
    let points = draw.contour.points()?;
    tracing::info!(seed, index, corners = draw.corners.len(), traced = points.len(), "demo");
    write_json(out, &ContourFile::from_points(&points))?;
    let prov = Provenance::new(
        "demo",
        json!({ "seed": seed, "index": index, "corners": corners, "extent": extent }),
    );
    write_sidecar(out, &prov)?;
    Ok(points.len())
}

pub fn report() -> serde_json::Value {
    json!({
        "tool": "ringtrace",
        "version": ringtrace::VERSION,
        "code_rev": current_git_rev(),
        "default_max_search": ringtrace::ring::DEFAULT_MAX_SEARCH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn simplify_writes_corners_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        fs::write(
            &input,
            r#"{"points": [[0,0],[1,0],[2,0],[2,1],[2,2],[0,2],[0,0]]}"#,
        )
        .unwrap();
        let out = dir.path().join("out/square.json");
        let summary = simplify(&input, &out, 65535).unwrap();
        assert_eq!(summary.traced, 6);
        assert_eq!(summary.corners, 4);
        assert_eq!(summary.area, 4.0);
        assert_eq!(summary.bounds, Some([0, 0, 2, 2]));

        let doc: SimplifiedFile = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.points.len(), 4);
        assert!(dir.path().join("out/square.provenance.json").exists());
    }

    #[test]
    fn simplify_reports_cap() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.json");
        fs::write(&input, r#"{"points": [[0,0],[1,0],[2,0],[3,0],[3,3]]}"#).unwrap();
        let err = simplify(&input, &dir.path().join("o.json"), 2).unwrap_err();
        assert!(format!("{err:#}").contains("traversal cap"));
    }

    #[test]
    fn demo_output_feeds_stats() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("demo.json");
        let traced = demo(&out, 7, 0, 6, 128).unwrap();
        let summary = stats(&out, 65535).unwrap();
        assert_eq!(summary.traced, traced);
        assert!(summary.corners >= 3 && summary.corners <= 6);
        assert!(summary.area > 0.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, r#"{"points": []}"#).unwrap();
        assert!(stats(&input, 65535).is_err());
    }
}
