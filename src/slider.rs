//! Geometry of linear sliders

use cgmath::Point2;

use crate::utils::Rect;

/// The centre of the thumb of a vertical slider whose track covers `track`.  A `value` of `0.0`
/// puts the thumb at the bottom of the track, and `1.0` puts it at the top.  Like the knobs, the
/// `value` is not clamped.
pub fn vertical_thumb(track: Rect<f32>, value: f32) -> Point2<f32> {
    let center = track.center();
    Point2::new(center.x, track.max().y - value * track.height())
}

/// The centre of the thumb of a horizontal slider, with `0.0` at the left of the track
pub fn horizontal_thumb(track: Rect<f32>, value: f32) -> Point2<f32> {
    let center = track.center();
    Point2::new(track.min().x + value * track.width(), center.y)
}

#[cfg(test)]
mod tests {
    use cgmath::Vector2;

    use super::*;

    fn track() -> Rect<f32> {
        Rect::from_min_size(Point2::new(100.0, 50.0), Vector2::new(8.0, 120.0))
    }

    #[test]
    fn vertical_extremes() {
        assert_eq!(vertical_thumb(track(), 0.0), Point2::new(104.0, 170.0));
        assert_eq!(vertical_thumb(track(), 1.0), Point2::new(104.0, 50.0));
        assert_eq!(vertical_thumb(track(), 0.5), Point2::new(104.0, 110.0));
    }

    #[test]
    fn vertical_out_of_range_leaves_track() {
        assert!(vertical_thumb(track(), 1.5).y < 50.0);
        assert!(vertical_thumb(track(), -0.2).y > 170.0);
    }

    #[test]
    fn horizontal_extremes() {
        let track = Rect::from_min_size(Point2::new(0.0, 0.0), Vector2::new(200.0, 10.0));
        assert_eq!(horizontal_thumb(track, 0.0), Point2::new(0.0, 5.0));
        assert_eq!(horizontal_thumb(track, 1.0), Point2::new(200.0, 5.0));
    }
}
