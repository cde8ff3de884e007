//! The raster surface onto which mock-ups are drawn, along with the drawing primitives used by
//! the widgets.

use std::{
    fmt::{Debug, Formatter},
    ops::{Deref, DerefMut},
    path::Path,
};

use cgmath::{InnerSpace, Point2, Vector2};
use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use imageproc::{drawing, point::Point};
use itertools::Itertools;

use crate::{
    fonts::{FontRole, Fonts},
    theme::{self, Colour},
    utils::Rect,
};

/// An RGBA image buffer which can be drawn on.  Derefs to the underlying [`RgbaImage`].
#[derive(Clone)]
pub struct Canvas(RgbaImage);

impl Canvas {
    /// Creates a new `Canvas` filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self(RgbaImage::from_pixel(width, height, background))
    }

    pub fn bounds(&self) -> Rect<i32> {
        Rect::from_origin(self.width() as i32, self.height() as i32)
    }

    pub fn into_inner(self) -> RgbaImage {
        self.0
    }

    ///////////
    // RECTS //
    ///////////

    pub fn fill_rect(&mut self, rect: Rect<i32>, colour: Colour) {
        let rect = rect.intersection(self.bounds());
        if rect.is_empty() {
            return;
        }
        let min = rect.min();
        let pixel_rect = imageproc::rect::Rect::at(min.x, min.y)
            .of_size(rect.width() as u32, rect.height() as u32);
        drawing::draw_filled_rect_mut(&mut self.0, pixel_rect, colour);
    }

    /// Draws a 1px outline around the inside of `rect`
    pub fn stroke_rect(&mut self, rect: Rect<i32>, colour: Colour) {
        if rect.is_empty() {
            return;
        }
        let (min, max) = (rect.min(), rect.max());
        self.fill_rect(Rect::new(min.x, min.y, rect.width(), 1), colour);
        self.fill_rect(Rect::new(min.x, max.y - 1, rect.width(), 1), colour);
        self.fill_rect(Rect::new(min.x, min.y, 1, rect.height()), colour);
        self.fill_rect(Rect::new(max.x - 1, min.y, 1, rect.height()), colour);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect<i32>, radius: i32, colour: Colour) {
        let radius = clamp_radius(rect, radius);
        if radius == 0 {
            self.fill_rect(rect, colour);
            return;
        }
        self.fill_rect(rect.reduced(radius, 0), colour);
        self.fill_rect(rect.reduced(0, radius), colour);
        for corner in corner_centres(rect, radius) {
            drawing::draw_filled_circle_mut(&mut self.0, (corner.x, corner.y), radius, colour);
        }
    }

    /// Draws a 1px outline of a rounded rectangle
    pub fn stroke_rounded_rect(&mut self, rect: Rect<i32>, radius: i32, colour: Colour) {
        let radius = clamp_radius(rect, radius);
        if radius == 0 {
            self.stroke_rect(rect, colour);
            return;
        }
        let (min, max) = (rect.min(), rect.max());
        let inner_w = rect.width() - 2 * radius;
        let inner_h = rect.height() - 2 * radius;
        self.fill_rect(Rect::new(min.x + radius, min.y, inner_w, 1), colour);
        self.fill_rect(Rect::new(min.x + radius, max.y - 1, inner_w, 1), colour);
        self.fill_rect(Rect::new(min.x, min.y + radius, 1, inner_h), colour);
        self.fill_rect(Rect::new(max.x - 1, min.y + radius, 1, inner_h), colour);

        // Quarter circles, in the order top-left, top-right, bottom-left, bottom-right
        let [tl, tr, bl, br] = corner_centres(rect, radius);
        let quadrants = [(tl, -1, -1), (tr, 1, -1), (bl, -1, 1), (br, 1, 1)];
        let steps = radius * 8;
        for (centre, sx, sy) in quadrants {
            for i in 0..=steps {
                let t = std::f32::consts::FRAC_PI_2 * i as f32 / steps as f32;
                let x = centre.x as f32 + sx as f32 * t.cos() * radius as f32;
                let y = centre.y as f32 + sy as f32 * t.sin() * radius as f32;
                self.put_pixel_checked(x.round() as i32, y.round() as i32, colour);
            }
        }
    }

    /////////////
    // CIRCLES //
    /////////////

    pub fn fill_circle(&mut self, centre: Point2<f32>, radius: f32, colour: Colour) {
        let c = round_point(centre);
        drawing::draw_filled_circle_mut(&mut self.0, (c.x, c.y), radius.round() as i32, colour);
    }

    /// Draws a ring of the given `width`, whose outer edge lies at `radius`
    pub fn stroke_circle(&mut self, centre: Point2<f32>, radius: f32, width: u32, colour: Colour) {
        let c = round_point(centre);
        let outer = radius.round() as i32;
        for r in (outer - width as i32 + 1).max(0)..=outer {
            drawing::draw_hollow_circle_mut(&mut self.0, (c.x, c.y), r, colour);
        }
    }

    ///////////
    // LINES //
    ///////////

    /// Draws a line segment of a given `width`, with round caps
    pub fn line(&mut self, from: Point2<f32>, to: Point2<f32>, width: f32, colour: Colour) {
        let dir = to - from;
        if width <= 1.0 {
            drawing::draw_line_segment_mut(&mut self.0, (from.x, from.y), (to.x, to.y), colour);
            return;
        }
        let half = width / 2.0;
        if dir.magnitude2() > 0.0 {
            let normal = Vector2::new(-dir.y, dir.x).normalize() * half;
            self.fill_polygon(&[from + normal, to + normal, to - normal, from - normal], colour);
        }
        if width >= 3.0 {
            self.fill_circle(from, half - 0.5, colour);
            self.fill_circle(to, half - 0.5, colour);
        }
    }

    /// Draws line segments between consecutive `points`
    pub fn polyline(&mut self, points: &[Point2<f32>], width: f32, colour: Colour) {
        for (&a, &b) in points.iter().tuple_windows() {
            self.line(a, b, width, colour);
        }
    }

    /// Fills a (simple) polygon.  Degenerate polygons are drawn as their outline.
    pub fn fill_polygon(&mut self, points: &[Point2<f32>], colour: Colour) {
        let mut poly = points
            .iter()
            .map(|&p| round_point(p))
            .map(|p| Point::new(p.x, p.y))
            .dedup()
            .collect_vec();
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() >= 3 {
            drawing::draw_polygon_mut(&mut self.0, &poly, colour);
        } else {
            for (a, b) in poly.iter().tuple_windows() {
                let (a, b) = ((a.x as f32, a.y as f32), (b.x as f32, b.y as f32));
                drawing::draw_line_segment_mut(&mut self.0, a, b, colour);
            }
        }
    }

    //////////
    // TEXT //
    //////////

    /// Draws `text` with its top-left corner at `pos`, clipped to the canvas.  Does nothing if no
    /// font is loaded for `role`.
    pub fn text(
        &mut self,
        fonts: &Fonts,
        role: FontRole,
        pos: Point2<i32>,
        text: &str,
        colour: Colour,
    ) {
        let (font, scale) = match fonts.get(role) {
            Some(f) => f,
            None => return,
        };
        let alpha = colour[3] as f32 / 255.0;
        let ascent = font.v_metrics(scale).ascent;
        for glyph in font.layout(text, scale, rusttype::point(0.0, ascent)) {
            let bbox = match glyph.pixel_bounding_box() {
                Some(bbox) => bbox,
                None => continue, // Whitespace
            };
            glyph.draw(|gx, gy, coverage| {
                let x = pos.x + bbox.min.x + gx as i32;
                let y = pos.y + bbox.min.y + gy as i32;
                if let Some(pixel) = self.pixel_checked(x, y) {
                    *pixel = theme::mix(*pixel, colour, coverage * alpha);
                }
            });
        }
    }

    /// Draws `text` centred within `rect`
    pub fn text_centred(
        &mut self,
        fonts: &Fonts,
        role: FontRole,
        rect: Rect<i32>,
        text: &str,
        colour: Colour,
    ) {
        let (w, h) = text_size(fonts, role, text);
        let centre = rect.center();
        self.text(
            fonts,
            role,
            Point2::new(centre.x - w / 2, centre.y - h / 2),
            text,
            colour,
        );
    }

    /////////////
    // OUTPUTS //
    /////////////

    /// Encodes the canvas as PNG, returning the file's bytes
    pub fn encode_png(&self) -> crate::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(self.0.clone()).write_to(&mut bytes, ImageOutputFormat::Png)?;
        Ok(bytes)
    }

    /// Saves the canvas to a file, whose format is determined by the path's extension
    pub fn save(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        self.0.save(path)?;
        Ok(())
    }

    fn put_pixel_checked(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(pixel) = self.pixel_checked(x, y) {
            *pixel = colour;
        }
    }

    fn pixel_checked(&mut self, x: i32, y: i32) -> Option<&mut Colour> {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            Some(self.0.get_pixel_mut(x as u32, y as u32))
        } else {
            None
        }
    }
}

/// The size in pixels of `text` when drawn in the font of `role`, or `(0, 0)` if no font is
/// loaded
pub fn text_size(fonts: &Fonts, role: FontRole, text: &str) -> (i32, i32) {
    let (font, scale) = match fonts.get(role) {
        Some(f) => f,
        None => return (0, 0),
    };
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, rusttype::point(0.0, v_metrics.ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bbox| bbox.max.x)
        .max()
        .unwrap_or(0);
    let height = (v_metrics.ascent - v_metrics.descent).ceil() as i32;
    (width, height)
}

fn round_point(p: Point2<f32>) -> Point2<i32> {
    Point2::new(p.x.round() as i32, p.y.round() as i32)
}

fn clamp_radius(rect: Rect<i32>, radius: i32) -> i32 {
    radius.min(rect.width() / 2).min(rect.height() / 2).max(0)
}

/// The centres of the corner circles of a rounded rectangle, in the order top-left, top-right,
/// bottom-left, bottom-right
fn corner_centres(rect: Rect<i32>, radius: i32) -> [Point2<i32>; 4] {
    let (min, max) = (rect.min(), rect.max());
    let (left, top) = (min.x + radius, min.y + radius);
    let (right, bottom) = (max.x - 1 - radius, max.y - 1 - radius);
    [
        Point2::new(left, top),
        Point2::new(right, top),
        Point2::new(left, bottom),
        Point2::new(right, bottom),
    ]
}

impl Deref for Canvas {
    type Target = RgbaImage;

    fn deref(&self) -> &RgbaImage {
        &self.0
    }
}

impl DerefMut for Canvas {
    fn deref_mut(&mut self) -> &mut RgbaImage {
        &mut self.0
    }
}

impl Debug for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.0.dimensions();
        write!(f, "Canvas({}x{})", w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{self, rgb};

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(20, 10, theme::BACKGROUND);
        canvas.fill_rect(Rect::new(15, 5, 100, 100), rgb(255, 0, 0));
        assert_eq!(*canvas.get_pixel(19, 9), rgb(255, 0, 0));
        assert_eq!(*canvas.get_pixel(14, 9), theme::BACKGROUND);
        // Entirely off the canvas
        canvas.fill_rect(Rect::new(-50, -50, 10, 10), rgb(0, 255, 0));
    }

    #[test]
    fn rounded_rect_leaves_corners() {
        let mut canvas = Canvas::new(40, 40, theme::BACKGROUND);
        canvas.fill_rounded_rect(Rect::new(0, 0, 40, 40), 6, theme::BUTTON);
        assert_eq!(*canvas.get_pixel(0, 0), theme::BACKGROUND);
        assert_eq!(*canvas.get_pixel(20, 0), theme::BUTTON);
        assert_eq!(*canvas.get_pixel(20, 20), theme::BUTTON);
        assert_eq!(*canvas.get_pixel(39, 39), theme::BACKGROUND);
    }

    #[test]
    fn thick_line_covers_its_path() {
        let mut canvas = Canvas::new(50, 50, theme::BACKGROUND);
        canvas.line(Point2::new(5.0, 25.0), Point2::new(45.0, 25.0), 3.0, theme::KNOB_NEEDLE);
        assert_eq!(*canvas.get_pixel(25, 25), theme::KNOB_NEEDLE);
        assert_eq!(*canvas.get_pixel(25, 10), theme::BACKGROUND);
    }

    #[test]
    fn degenerate_shapes_do_not_panic() {
        let mut canvas = Canvas::new(10, 10, theme::BACKGROUND);
        let p = Point2::new(5.0, 5.0);
        canvas.line(p, p, 3.0, theme::KNOB_NEEDLE);
        canvas.fill_polygon(&[p, p, p], theme::KNOB_NEEDLE);
        canvas.fill_polygon(&[], theme::KNOB_NEEDLE);
        canvas.fill_rounded_rect(Rect::new(2, 2, 0, 0), 6, theme::BUTTON);
        canvas.stroke_rounded_rect(Rect::new(2, 2, 1, 1), 6, theme::BUTTON);
    }

    #[test]
    fn text_without_fonts_is_skipped() {
        let fonts = Fonts::load(&crate::fonts::FontSet::empty());
        let mut canvas = Canvas::new(50, 20, theme::BACKGROUND);
        let before = canvas.clone().into_inner();
        canvas.text(&fonts, FontRole::Title, Point2::new(0, 0), "Hi", theme::TITLE_TEXT);
        assert_eq!(canvas.into_inner(), before);
        assert_eq!(text_size(&fonts, FontRole::Title, "Hi"), (0, 0));
    }

    #[test]
    fn text_is_clipped_not_moved() {
        let fonts = Fonts::load(&crate::fonts::FontSet::default_only());
        let mut canvas = Canvas::new(60, 30, theme::BACKGROUND);
        let blank = canvas.clone().into_inner();

        // Starting entirely off the left and top edges, nothing is drawn
        canvas.text(&fonts, FontRole::Title, Point2::new(-500, 5), "Hi", theme::TITLE_TEXT);
        canvas.text(&fonts, FontRole::Title, Point2::new(5, -500), "Hi", theme::TITLE_TEXT);
        assert_eq!(*canvas, blank);

        canvas.text(&fonts, FontRole::Title, Point2::new(5, 5), "Hi", theme::TITLE_TEXT);
        assert_ne!(*canvas, blank);
        let (w, h) = text_size(&fonts, FontRole::Title, "Hi");
        assert!(w > 0 && h > 0);
    }
}
