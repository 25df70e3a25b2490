//! Plane geometry helpers shared by the collision and spawn code.
//!
//! Headings follow the field convention: a heading of `phi` points along
//! `(sin phi, cos phi)`, so 0 is "up" (+y) and angles grow clockwise.

use std::f64::consts::TAU;

use glam::DVec2;

/// Unit vector for a heading.
#[inline]
pub fn heading_vector(phi: f64) -> DVec2 {
    DVec2::new(phi.sin(), phi.cos())
}

/// Rotates a rest-frame offset by a heading (clockwise for positive `phi`).
#[inline]
pub fn rotate_by_heading(offset: DVec2, phi: f64) -> DVec2 {
    let (s, c) = phi.sin_cos();
    DVec2::new(offset.x * c + offset.y * s, offset.y * c - offset.x * s)
}

/// Heading of a vector, the inverse of [`heading_vector`].
#[inline]
pub fn heading_of(v: DVec2) -> f64 {
    v.x.atan2(v.y)
}

/// Normalizes an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(phi: f64) -> f64 {
    phi.rem_euclid(TAU)
}

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)` from the sign of the cross product.
pub fn orientation(p: DVec2, q: DVec2, r: DVec2) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Bounding-box containment of `p` in the box spanned by segment `ab`.
fn within_segment_box(p: DVec2, a: DVec2, b: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// True if segment `ab` intersects segment `cd`, including touching and collinear overlap.
pub fn segments_intersect(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let o_abc = orientation(a, b, c);
    let o_abd = orientation(a, b, d);
    let o_cda = orientation(c, d, a);
    let o_cdb = orientation(c, d, b);

    if o_abc != o_abd && o_cda != o_cdb {
        return true;
    }

    (o_abc == Orientation::Collinear && within_segment_box(c, a, b))
        || (o_abd == Orientation::Collinear && within_segment_box(d, a, b))
        || (o_cda == Orientation::Collinear && within_segment_box(a, c, d))
        || (o_cdb == Orientation::Collinear && within_segment_box(b, c, d))
}

/// Point-to-segment proximity test.
///
/// Projects `p` onto segment `ab` via `lambda` and reports a hit only when the
/// projection falls on the segment (`0 <= lambda <= 1`) within `radius` of it.
/// Degenerate segments never hit.
pub fn point_near_segment(p: DVec2, a: DVec2, b: DVec2, radius: f64) -> bool {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return false;
    }
    let lambda = (p - a).dot(ab) / len_sq;
    if !(0.0..=1.0).contains(&lambda) {
        return false;
    }
    let closest = a + ab * lambda;
    closest.distance_squared(p) <= radius * radius
}
