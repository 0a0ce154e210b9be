use super::rand::{draw_traced_contour, CornerCount, ReplayToken, TraceCfg};
use super::*;
use crate::error::RingError;
use crate::ring::ScanCfg;
use proptest::prelude::*;

fn pts(raw: &[(u32, u32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

/// `b` equals `a` up to a cyclic rotation.
fn is_rotation(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..a.len()).any(|r| (0..a.len()).all(|i| a[(i + r) % a.len()] == b[i]))
}

fn has_reducible_triple(points: &[Point]) -> bool {
    let n = points.len();
    n >= 3
        && (0..n).any(|i| is_collinear(points[i], points[(i + 1) % n], points[(i + 2) % n]))
}

#[test]
fn square_compresses_to_corners() {
    let mut c = Contour::from_points(pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (0, 2)]));
    let res = c.compress().unwrap();
    assert_eq!(res, Compression { removed: 2, remaining: 4 });
    let out = c.to_array().unwrap();
    assert!(is_rotation(&out, &pts(&[(0, 0), (2, 0), (2, 2), (0, 2)])));
}

#[test]
fn seed_in_mid_edge_is_removed() {
    // head sits halfway along the top edge
    let mut c = Contour::from_points(pts(&[(1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1), (0, 0)]));
    c.compress().unwrap();
    let out = c.to_array().unwrap();
    assert!(is_rotation(&out, &pts(&[(2, 0), (2, 2), (0, 2), (0, 0)])));
}

#[test]
fn rect_boundary_reduces_to_four_corners() {
    let mut c = Contour::rect_boundary(3, 5, 6, 4);
    assert_eq!(c.len(), 2 * (6 + 4) - 4);
    let out = c.to_array().unwrap();
    assert!(is_rotation(&out, &pts(&[(3, 5), (8, 5), (8, 8), (3, 8)])));
    assert_eq!(area(&out), 15.0);
}

#[test]
fn rectified_list_is_untouched() {
    let mut c = Contour::from_points(pts(&[(0, 0), (4, 0), (5, 3), (1, 6)]));
    let before: Vec<_> = c
        .ring
        .iter_from(c.ring.head().unwrap(), 10)
        .map(|(id, p)| (id, *p, c.ring.next(id), c.ring.prev(id)))
        .collect();
    assert_eq!(c.compress().unwrap().removed, 0);
    let after: Vec<_> = c
        .ring
        .iter_from(c.ring.head().unwrap(), 10)
        .map(|(id, p)| (id, *p, c.ring.next(id), c.ring.prev(id)))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn degenerate_lists_are_unchanged() {
    let mut one = Contour::from_points(pts(&[(3, 3)]));
    assert_eq!(one.compress().unwrap(), Compression { removed: 0, remaining: 1 });
    assert_eq!(one.to_array().unwrap(), pts(&[(3, 3)]));

    let mut two = Contour::from_points(pts(&[(0, 0), (5, 5)]));
    assert_eq!(two.compress().unwrap().removed, 0);
    assert_eq!(two.to_array().unwrap().len(), 2);
}

#[test]
fn fully_collinear_list_degenerates() {
    let mut c = Contour::from_points(pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
    let res = c.compress().unwrap();
    assert!(res.remaining <= 2);
    assert_eq!(res.removed + res.remaining, 5);
    assert_eq!(c.to_array().unwrap().len(), res.remaining);
}

#[test]
fn duplicate_points_collapse() {
    let mut c = Contour::from_points(pts(&[(0, 0), (0, 0), (4, 0), (4, 0), (4, 4)]));
    c.compress().unwrap();
    let out = c.to_array().unwrap();
    assert!(is_rotation(&out, &pts(&[(0, 0), (4, 0), (4, 4)])));
}

#[test]
fn vertical_edges_need_no_slope() {
    let mut c = Contour::from_points(pts(&[(5, 0), (5, 1), (5, 2), (5, 3), (9, 3)]));
    c.compress().unwrap();
    let out = c.to_array().unwrap();
    assert!(is_rotation(&out, &pts(&[(5, 0), (5, 3), (9, 3)])));
}

#[test]
fn large_coordinates_do_not_overflow() {
    let m = u32::MAX;
    assert_eq!(cross(Point::new(0, 0), Point::new(m, 0), Point::new(0, m)), (m as i128) * (m as i128));
    let mut c = Contour::from_points(pts(&[(0, 0), (m / 2, 0), (m - 1, 0), (m - 1, m - 1)]));
    c.compress().unwrap();
    assert_eq!(c.len(), 3);
}

#[test]
fn compress_reports_capped_and_open_lists() {
    let mut c = Contour::rect_boundary(0, 0, 4, 4).with_cfg(ScanCfg { max_search: 5 });
    assert_eq!(
        c.compress(),
        Err(RingError::TraversalCapExceeded { max_search: 5 })
    );
    assert_eq!(c.len(), 12);

    let mut open = Contour::rect_boundary(0, 0, 4, 4);
    let head = open.ring.head().unwrap();
    let tail = open.ring.prev(head).unwrap();
    open.ring.cut_after(tail).unwrap();
    assert_eq!(open.compress(), Err(RingError::OpenChain { hops: 11 }));
    assert!(matches!(open.to_array(), Err(RingError::OpenChain { .. })));
}

#[test]
fn compress_rejects_mismatched_back_links() {
    let mut c = Contour::from_points(pts(&[(0, 0), (9, 9), (1, 0), (2, 0)]));
    let head = c.ring.head().unwrap();
    let v: Vec<_> = c.ring.iter_from(head, 10).map(|(id, _)| id).collect();
    // forward walk skips (9, 9); (1, 0) still points back at it
    c.ring.set_next(v[0], Some(v[2]));
    let before = c.points().unwrap();

    assert_eq!(c.compress(), Err(RingError::BrokenLink { at: v[2] }));
    assert_eq!(c.len(), 4);
    assert_eq!(c.points().unwrap(), before);
    assert!(matches!(c.to_array(), Err(RingError::BrokenLink { .. })));
}

#[test]
fn rect_boundary_clamps_at_lattice_edge() {
    let m = u32::MAX;
    // clamps to a 2 x 3 pixel box
    let mut c = Contour::rect_boundary(m - 1, m - 2, 4, 4);
    assert_eq!(c.len(), 6);
    let out = c.to_array().unwrap();
    assert!(is_rotation(
        &out,
        &pts(&[(m - 1, m - 2), (m, m - 2), (m, m), (m - 1, m)])
    ));
}

#[test]
fn empty_contour() {
    let mut c = Contour::default();
    assert_eq!(c.compress().unwrap(), Compression { removed: 0, remaining: 0 });
    assert_eq!(c.to_array(), Err(RingError::Empty));
}

#[test]
fn into_points_consumes() {
    let pts_out = Contour::rect_boundary(0, 0, 3, 3).into_points().unwrap();
    assert_eq!(pts_out.len(), 4);
}

#[test]
fn metrics_on_square() {
    let sq = pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
    assert_eq!(signed_area2(&sq), 8);
    let rev: Vec<_> = sq.iter().rev().copied().collect();
    assert_eq!(signed_area2(&rev), -8);
    let b = bounds(&sq).unwrap();
    assert_eq!((b.width(), b.height()), (2, 2));
    assert!(b.contains(Point::new(1, 2)));
    let c = centroid(&sq).unwrap();
    assert!((c.x - 1.0).abs() < 1e-12 && (c.y - 1.0).abs() < 1e-12);
    assert!(bounds(&[]).is_none());
    let seg = centroid(&pts(&[(0, 0), (4, 0)])).unwrap();
    assert!((seg.x - 2.0).abs() < 1e-12);
}

#[test]
fn densify_visits_every_lattice_point() {
    let dense = densify(&pts(&[(0, 0), (6, 3), (0, 3)]));
    // 3 steps of (2,1), 6 of (-1,0), 3 of (0,-1)
    assert_eq!(dense.len(), 12);
    assert_eq!(dense[1], Point::new(2, 1));
    assert_eq!(densify(&pts(&[(1, 1), (1, 1)])), pts(&[(1, 1)]));
}

#[test]
fn reproducible_draw() {
    let cfg = TraceCfg {
        corners: CornerCount::Fixed(8),
        ..TraceCfg::default()
    };
    let tok = ReplayToken { seed: 11, index: 3 };
    let a = draw_traced_contour(cfg, tok);
    let b = draw_traced_contour(cfg, tok);
    assert_eq!(a.corners, b.corners);
    assert_eq!(a.contour.points().unwrap(), b.contour.points().unwrap());
}

#[test]
fn drawn_contours_compress_onto_their_corners() {
    let cfg = TraceCfg::default();
    for index in 0..32 {
        let draw = draw_traced_contour(cfg, ReplayToken { seed: 2025, index });
        let mut contour = draw.contour.clone();
        let out = contour.to_array().unwrap();
        assert!(out.len() >= 3, "index {index}");
        assert!(out.iter().all(|p| draw.corners.contains(p)), "index {index}");
        assert!(!has_reducible_triple(&out), "index {index}");
    }
}

#[test]
fn result_is_independent_of_seed_node() {
    let cfg = TraceCfg {
        extent: 96,
        ..TraceCfg::default()
    };
    for index in 0..8 {
        let dense = draw_traced_contour(cfg, ReplayToken { seed: 7, index })
            .contour
            .points()
            .unwrap();
        let mut reference: Option<Vec<Point>> = None;
        for r in (0..dense.len()).step_by(5) {
            let rotated: Vec<Point> = dense[r..].iter().chain(&dense[..r]).copied().collect();
            let mut out = Contour::from_points(rotated).into_points().unwrap();
            out.sort();
            match &reference {
                Some(expected) => assert_eq!(&out, expected, "index {index}, rotation {r}"),
                None => reference = Some(out),
            }
        }
    }
}

proptest! {
    #[test]
    fn compress_is_idempotent(raw in prop::collection::vec((0u32..12, 0u32..12), 1..48)) {
        let mut c = Contour::from_points(raw);
        c.compress().unwrap();
        let once = c.points().unwrap();
        let again = c.compress().unwrap();
        prop_assert_eq!(again.removed, 0);
        prop_assert_eq!(c.points().unwrap(), once);
    }

    #[test]
    fn no_reducible_triple_survives(raw in prop::collection::vec((0u32..64, 0u32..64), 3..64)) {
        let mut c = Contour::from_points(raw);
        c.compress().unwrap();
        let out = c.points().unwrap();
        prop_assert!(!has_reducible_triple(&out));
        prop_assert!(out.len() >= 2);
    }

    #[test]
    fn to_array_conserves_count(raw in prop::collection::vec((0u32..32, 0u32..32), 1..48)) {
        let mut c = Contour::from_points(raw);
        c.compress().unwrap();
        let compressed = c.points().unwrap();
        let out = c.to_array().unwrap();
        prop_assert_eq!(out.len(), compressed.len());
        prop_assert!(is_rotation(&compressed, &out));
    }
}
