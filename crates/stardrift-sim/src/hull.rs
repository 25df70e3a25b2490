//! World-space outlines of asteroids, ships and debris.

use glam::DVec2;

use stardrift_core::components::{Asteroid, Debris, Ship};
use stardrift_core::enums::ShipKind;
use stardrift_core::geometry::{heading_vector, rotate_by_heading};

/// 135 degrees, the delta's back-right corner relative to the nose.
const BACK_RIGHT_ANGLE: f64 = 135.0 * std::f64::consts::PI / 180.0;
/// 225 degrees, the delta's back-left corner relative to the nose.
const BACK_LEFT_ANGLE: f64 = 225.0 * std::f64::consts::PI / 180.0;
const GUN_ANGLE: f64 = 30.0 * std::f64::consts::PI / 180.0;

pub fn asteroid_vertex(asteroid: &Asteroid, i: usize) -> DVec2 {
    asteroid.position + rotate_by_heading(asteroid.vertices[i], asteroid.heading)
}

/// Polygon edges as `(previous, current)` pairs, starting with the closing
/// edge from the last vertex to the first.
pub fn asteroid_edges(asteroid: &Asteroid) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
    let n = asteroid.vertex_count;
    (0..n).map(move |k| {
        let prev = if k == 0 { n - 1 } else { k - 1 };
        (asteroid_vertex(asteroid, prev), asteroid_vertex(asteroid, k))
    })
}

/// The delta's three corners in world space.
#[derive(Debug, Clone, Copy)]
pub struct DeltaHull {
    pub nose: DVec2,
    pub back_left: DVec2,
    pub back_right: DVec2,
}

/// Rest-frame delta corners: nose at `size`, wings at `sqrt(size)`.
pub fn delta_offsets(size: f64) -> DeltaHull {
    let wing = size.sqrt();
    DeltaHull {
        nose: DVec2::new(0.0, size),
        back_left: heading_vector(BACK_LEFT_ANGLE) * wing,
        back_right: heading_vector(BACK_RIGHT_ANGLE) * wing,
    }
}

pub fn delta_hull(ship: &Ship) -> DeltaHull {
    let rest = delta_offsets(ship.size);
    let place = |v: DVec2| ship.position + rotate_by_heading(v, ship.heading);
    DeltaHull {
        nose: place(rest.nose),
        back_left: place(rest.back_left),
        back_right: place(rest.back_right),
    }
}

/// The cube's edges, clockwise from the right side. Half-width is `sqrt(size)`.
pub fn cube_edges(ship: &Ship) -> [(DVec2, DVec2); 4] {
    let [top_right, bottom_right, bottom_left, top_left] = cube_corners(ship);
    [
        (top_right, bottom_right),
        (bottom_right, bottom_left),
        (bottom_left, top_left),
        (top_left, top_right),
    ]
}

pub fn cube_corners(ship: &Ship) -> [DVec2; 4] {
    let h = ship.size.sqrt();
    let p = ship.position;
    [
        p + DVec2::new(h, h),
        p + DVec2::new(h, -h),
        p + DVec2::new(-h, -h),
        p + DVec2::new(-h, h),
    ]
}

/// Cruiser muzzle offsets: the nose, then the right and left guns 30 degrees
/// below the beam line.
pub fn cruiser_gun_ports(ship: &Ship) -> [DVec2; 3] {
    let phi = ship.heading;
    let s = ship.size;
    [
        heading_vector(phi) * s,
        DVec2::new((phi - GUN_ANGLE).cos(), -(phi - GUN_ANGLE).sin()) * s,
        DVec2::new(-(phi + GUN_ANGLE).cos(), (phi + GUN_ANGLE).sin()) * s,
    ]
}

/// Closed outline for rendering.
pub fn ship_outline(ship: &Ship) -> Vec<DVec2> {
    match ship.kind {
        ShipKind::Delta => {
            let hull = delta_hull(ship);
            vec![hull.nose, hull.back_right, hull.back_left]
        }
        ShipKind::Cube => cube_corners(ship).to_vec(),
        ShipKind::Cruiser => {
            let [nose, right, left] = cruiser_gun_ports(ship);
            let tail = -heading_vector(ship.heading) * ship.size;
            [nose, right, tail, left]
                .into_iter()
                .map(|offset| ship.position + offset)
                .collect()
        }
    }
}

pub fn debris_vertices(debris: &Debris) -> [DVec2; 3] {
    debris
        .vertices
        .map(|v| debris.position + rotate_by_heading(v, debris.heading))
}
