//! Point scatter and triangular-lattice snapping.
//!
//! Two stages, both consuming the shared [`MersenneTwister`] stream: a
//! stochastic point cloud (seed points with satellite rings), then a pass
//! that snaps every vertex onto a fixed triangular lattice and emits stroke
//! segments and occasional fill triangles for the renderer.

use crate::prng::MersenneTwister;

use std::f64::consts::{PI, TAU};

/// A 2D point in pixel space, relative to the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    fn square_distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// A stroke from one point to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// A filled triangle over three lattice candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillTriangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Draw instructions for one snapping pass; valid for the current frame
/// only.
#[derive(Debug, Default, PartialEq)]
pub struct Batch {
    pub strokes: Vec<Segment>,
    pub fills: Vec<FillTriangle>,
}

/// Generates the per-frame vertex cloud.
///
/// `count` seed points land at a random radius and a time-swung random
/// angle around the viewport center; each seed then spawns a ring of
/// satellites at radii scaled by `offset`. One draw per seed fixes the spawn bound
/// `spawn * (0.5 + uniform())`, and the satellite count is its ceiling, so
/// a seed never gets fewer than half the base `spawn` value.
///
/// Ordering contract: seed points occupy the front of the result in
/// reverse creation order, satellites follow in creation order. The
/// snapping pass does not care, but reproducibility tests do.
///
/// `time_ms` is the frame time in milliseconds; the generator itself never
/// reads a clock.
pub fn scatter(
    rng: &mut MersenneTwister,
    count: u32,
    spawn: u32,
    offset: f64,
    viewport_w: f64,
    time_ms: f64,
) -> Vec<Point> {
    let mut seeds: Vec<Point> = Vec::with_capacity(count as usize);
    let mut satellites: Vec<Point> = Vec::new();
    for i in 0..count {
        let r = (rng.uniform() - 0.5) * viewport_w / 2.0;
        let swing = if i % 2 == 0 { 1.0 } else { -1.0 };
        let a = swing * time_ms * 0.0001 + rng.uniform() * TAU;
        let seed = Point::new(a.cos() * r, a.sin() * r);
        seeds.push(seed);

        let bound = f64::from(spawn) * (0.5 + rng.uniform());
        let n = bound.ceil() as usize;
        for j in 0..n {
            let r = rng.uniform() * offset;
            let swing = if j % 2 == 0 { 1.0 } else { -1.0 };
            let a = swing * time_ms * 0.0002 + rng.uniform() * TAU;
            // `a % r` is fmod, inherited as-is; it folds the angle by the
            // radius and is what gives the rings their smeared look.
            satellites.push(Point::new(
                seed.x + (a % r).cos() * r,
                seed.y + ((a % r) * 2.0).sin() * r,
            ));
        }
    }
    seeds.iter().rev().copied().chain(satellites).collect()
}

/// Snaps each vertex onto the triangular lattice at `scale` and emits
/// stroke segments plus occasional fill triangles.
///
/// For every vertex the surrounding 4x4 cell neighborhood is scanned for
/// valid lattice sites, keeping each new nearest candidate at the front of
/// a small list. One draw picks the branch: above 0.5 the vertex is tied to
/// its nearest candidate, otherwise the two best candidates are joined and
/// a second draw against `fill_threshold` may register the first three
/// candidates as a fill triangle.
///
/// Draws are consumed whether or not the vertex is emitted, so the stream
/// stays aligned; a vertex with too few candidates (possible when the scan
/// saw its first site last, or for non-finite coordinates) contributes
/// nothing.
pub fn snap_to_lattice(
    rng: &mut MersenneTwister,
    vertices: &[Point],
    scale: f64,
    width: f64,
    height: f64,
    fill_threshold: f64,
) -> Batch {
    // Equilateral-triangle measures: side length, apothem, and the
    // radius-plus-apothem row height.
    let side = 2.0 * (PI / 3.0).sin();
    let apothem = side / (2.0 * (PI / 3.0).tan());
    let cell_w = side * scale;
    let cell_h = (1.0 + apothem) * scale;

    let mx = 2.0 * (width / cell_w).ceil();
    let my = (height / cell_h).ceil();

    let mut batch = Batch::default();
    for &v in vertices {
        let cell_x = (v.x / width * mx).round() as i64;
        let cell_y = (v.y / height * my).round() as i64;

        let mut best = f64::INFINITY;
        let mut candidates: Vec<Point> = Vec::with_capacity(8);
        for i in cell_x - 2..cell_x + 2 {
            for j in cell_y - 2..cell_y + 2 {
                if !lattice_site(i, j) {
                    continue;
                }
                let site = Point::new(i as f64 * cell_w / 2.0, j as f64 * cell_h);
                let d = site.square_distance(v);
                if d < best {
                    best = d;
                    candidates.insert(0, site);
                }
            }
        }

        if rng.uniform() > 0.5 {
            if let Some(&nearest) = candidates.first() {
                batch.strokes.push(Segment {
                    from: v,
                    to: nearest,
                });
            }
        } else {
            if candidates.len() >= 2 {
                batch.strokes.push(Segment {
                    from: candidates[0],
                    to: candidates[1],
                });
            }
            let fill_draw = rng.uniform();
            if fill_draw > fill_threshold && candidates.len() >= 3 {
                batch.fills.push(FillTriangle {
                    a: candidates[0],
                    b: candidates[1],
                    c: candidates[2],
                });
            }
        }
    }
    batch
}

/// Triangular-lattice membership for an integer cell coordinate: odd
/// columns pair with even rows, and every fourth column pairs with odd
/// rows.
fn lattice_site(i: i64, j: i64) -> bool {
    (i.abs() % 2 == 1 && j.abs() % 2 == 0) || (i.abs() % 4 == 0 && j.abs() % 2 == 1)
}
