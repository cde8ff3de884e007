//! Geometry of rotary indicators (knobs).
//!
//! Angles are measured in degrees, clockwise from 12 o'clock, so that a knob at value `0.5`
//! points straight up.

use cgmath::{Angle, Deg, Point2, Vector2};

/// The angle of a knob at value `0.0`
pub const START_ANGLE: Deg<f32> = Deg(-135.0);
/// The total angle swept between values `0.0` and `1.0`
pub const SWEEP: Deg<f32> = Deg(270.0);

/// The geometry of a knob-style indicator, computed from its bounding square and a normalized
/// value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobGeometry {
    pub center: Point2<f32>,
    pub radius: f32,
    pub start_angle: Deg<f32>,
    pub end_angle: Deg<f32>,
}

impl KnobGeometry {
    /// Computes the geometry of a knob occupying the square at `min` with sides of length `size`.
    ///
    /// `value` is not clamped.  Values outside `0..=1` produce an `end_angle` outside the sweep.
    pub fn new(min: Point2<f32>, size: f32, value: f32) -> Self {
        let radius = size / 2.0;
        Self {
            center: min + Vector2::new(radius, radius),
            radius,
            start_angle: START_ANGLE,
            end_angle: end_angle(value),
        }
    }

    /// Creates the geometry for a knob of a given `radius` centred on `center`
    pub fn centered(center: Point2<f32>, radius: f32, value: f32) -> Self {
        Self::new(center - Vector2::new(radius, radius), radius * 2.0, value)
    }

    /// The angle swept from `start_angle` to `end_angle` (negative for values below zero)
    pub fn sweep(&self) -> Deg<f32> {
        self.end_angle - self.start_angle
    }

    /// The tip of a needle of length `needle_radius`, pointing from the centre along
    /// `end_angle`.
    pub fn needle_tip(&self, needle_radius: f32) -> Point2<f32> {
        self.point_at(self.end_angle, needle_radius)
    }

    /// The point at `radius` from the centre, in the direction of `angle`
    pub fn point_at(&self, angle: Deg<f32>, radius: f32) -> Point2<f32> {
        self.center + Vector2::new(angle.sin(), -angle.cos()) * radius
    }

    /// Points along the arc from `start_angle` to `end_angle` at a given `radius`, one every
    /// `step` degrees (plus the exact end point).
    pub fn arc_points(&self, radius: f32, step: Deg<f32>) -> Vec<Point2<f32>> {
        let sweep = self.sweep();
        let num_steps = (sweep.0.abs() / step.0).ceil().max(1.0) as usize;
        (0..=num_steps)
            .map(|i| {
                let angle = self.start_angle + sweep * (i as f32 / num_steps as f32);
                self.point_at(angle, radius)
            })
            .collect()
    }
}

/// The end angle of a knob with the given normalized `value`
pub fn end_angle(value: f32) -> Deg<f32> {
    START_ANGLE + SWEEP * value
}

/// Returns `true` if `value` lies within the knob's intended range of `0..=1`
pub fn is_in_range(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use cgmath::MetricSpace;

    use super::*;

    const EPS: f32 = 1e-4;

    fn knob(value: f32) -> KnobGeometry {
        KnobGeometry::new(Point2::new(10.0, 20.0), 44.0, value)
    }

    #[test]
    fn zero_has_no_sweep() {
        let k = knob(0.0);
        assert_eq!(k.end_angle, k.start_angle);
        assert_eq!(k.sweep(), Deg(0.0));
    }

    #[test]
    fn one_sweeps_full_range() {
        let k = knob(1.0);
        assert!((k.end_angle.0 - (k.start_angle.0 + 270.0)).abs() < EPS);
    }

    #[test]
    fn half_is_midpoint() {
        let k = knob(0.5);
        let midpoint = (START_ANGLE.0 + (START_ANGLE.0 + 270.0)) / 2.0;
        assert!((k.end_angle.0 - midpoint).abs() < EPS);
        // The midpoint is straight up
        let tip = k.needle_tip(18.0);
        assert!((tip.x - k.center.x).abs() < EPS);
        assert!((tip.y - (k.center.y - 18.0)).abs() < EPS);
    }

    #[test]
    fn center_and_radius_from_bounding_square() {
        let k = knob(0.3);
        assert_eq!(k.center, Point2::new(32.0, 42.0));
        assert_eq!(k.radius, 22.0);
        assert_eq!(KnobGeometry::centered(Point2::new(32.0, 42.0), 22.0, 0.3), k);
    }

    #[test]
    fn needle_tip_lies_on_radius() {
        for i in 0..=100 {
            let k = knob(i as f32 / 100.0);
            let tip = k.needle_tip(18.0);
            assert!((tip.distance(k.center) - 18.0).abs() < EPS, "value {}", i);
        }
    }

    #[test]
    fn extremes_point_down_left_and_down_right() {
        let low = knob(0.0).needle_tip(10.0);
        let high = knob(1.0).needle_tip(10.0);
        let center = knob(0.0).center;
        assert!(low.x < center.x && low.y > center.y);
        assert!(high.x > center.x && high.y > center.y);
    }

    #[test]
    fn out_of_range_values_are_not_rejected() {
        let below = knob(-0.2);
        assert!((below.end_angle.0 - (-189.0)).abs() < EPS);
        assert!(below.end_angle < START_ANGLE);

        let above = knob(1.5);
        assert!((above.end_angle.0 - 270.0).abs() < EPS);
        assert!(above.end_angle > START_ANGLE + SWEEP);

        assert!(!is_in_range(-0.2));
        assert!(!is_in_range(1.5));
        assert!(is_in_range(0.0) && is_in_range(1.0));
    }

    #[test]
    fn arc_points_span_start_to_end() {
        let k = knob(1.0);
        let points = k.arc_points(20.0, Deg(5.0));
        assert_eq!(points.len(), 55);
        let first = points[0];
        let last = *points.last().unwrap();
        assert!(first.distance(k.point_at(k.start_angle, 20.0)) < EPS);
        assert!(last.distance(k.needle_tip(20.0)) < EPS);
    }
}
