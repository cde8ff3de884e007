//! Drawing routines for the individual controls of the plugin UI.  Every widget draws itself
//! within a given [`Rect`], so the scenes only need to decide where things go.

use cgmath::{Deg, Point2};
use log::warn;

use crate::{
    canvas::{text_size, Canvas},
    chain::{Param, Widget},
    fonts::{FontRole, Fonts},
    knob::{self, KnobGeometry},
    slider,
    theme::{self, Colour},
    utils::Rect,
};

/// Corner radius of buttons and panels
pub const CORNER_RADIUS: i32 = 6;
/// Height of the label strip underneath a parameter control
pub const PARAM_LABEL_HEIGHT: i32 = 20;

/// The distance between a knob's edge and the tip of its needle
const NEEDLE_INSET: f32 = 4.0;

/// A filled, rounded button with centred text
pub fn button(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>, text: &str, colour: Colour) {
    canvas.fill_rounded_rect(rect, CORNER_RADIUS, colour);
    canvas.text_centred(fonts, FontRole::Button, rect, text, theme::BUTTON_TEXT);
}

/// The background of an effect panel: a rounded rectangle with a translucent black border
pub fn panel(canvas: &mut Canvas, rect: Rect<i32>) {
    canvas.fill_rounded_rect(rect, CORNER_RADIUS, theme::PANEL_BACKGROUND);
    let border = theme::blend(theme::PANEL_BACKGROUND, theme::PANEL_BORDER);
    canvas.stroke_rounded_rect(rect, CORNER_RADIUS, border);
}

///////////
// KNOBS //
///////////

/// A plain knob, as drawn on the visual view: a circle of radius 22 with a needle, in a 60px wide
/// cell whose top-left corner is at `origin`, labelled underneath.
pub fn simple_knob(
    canvas: &mut Canvas,
    fonts: &Fonts,
    origin: Point2<i32>,
    label: &str,
    value: f32,
) {
    const RADIUS: f32 = 22.0;
    let centre = Point2::new(origin.x as f32 + 30.0, origin.y as f32 + 30.0);
    let geom = KnobGeometry::centered(centre, RADIUS, value);

    canvas.fill_circle(geom.center, geom.radius, theme::KNOB_OUTLINE);
    canvas.fill_circle(geom.center, geom.radius - 2.0, theme::KNOB_BODY);
    canvas.line(
        geom.center,
        geom.needle_tip(geom.radius - NEEDLE_INSET),
        3.0,
        theme::KNOB_NEEDLE,
    );

    let label_pos = Point2::new(origin.x + 5, origin.y + 60);
    canvas.text(fonts, FontRole::LabelSmall, label_pos, label, theme::PARAM_LABEL);
}

/// A knob with a value arc sweeping from the knob's start angle to its current angle, drawn in
/// the control area of `rect`.
pub fn arc_knob(canvas: &mut Canvas, rect: Rect<i32>, value: f32) {
    let area = rect.to_f32();
    let radius = area.width().min(area.height()) / 2.0 - 4.0;
    if radius <= 0.0 {
        return;
    }
    let full = KnobGeometry::centered(area.center(), radius, 1.0);
    let geom = KnobGeometry::centered(area.center(), radius, value);
    let arc_radius = radius - 1.5;
    let step = Deg(3.0);

    canvas.polyline(&full.arc_points(arc_radius, step), 3.0, theme::KNOB_TRACK);
    canvas.polyline(&geom.arc_points(arc_radius, step), 3.0, theme::KNOB_ARC);

    let body_radius = radius - 6.0;
    canvas.fill_circle(geom.center, body_radius, theme::KNOB_OUTLINE);
    canvas.fill_circle(geom.center, body_radius - 2.0, theme::KNOB_BODY);
    canvas.line(
        geom.center,
        geom.needle_tip(body_radius - NEEDLE_INSET),
        2.0,
        theme::KNOB_NEEDLE,
    );
}

/////////////
// SLIDERS //
/////////////

const TRACK_WIDTH: i32 = 6;
const THUMB_SIZE: (i32, i32) = (22, 10);

/// A vertical slider, filled from the bottom of its track up to the thumb
pub fn vertical_slider(canvas: &mut Canvas, rect: Rect<i32>, value: f32) {
    let centre = rect.center();
    let track = Rect::new(
        centre.x - TRACK_WIDTH / 2,
        rect.min().y + THUMB_SIZE.1 / 2,
        TRACK_WIDTH,
        rect.height() - THUMB_SIZE.1,
    );
    canvas.fill_rounded_rect(track, TRACK_WIDTH / 2, theme::SLIDER_TRACK);

    let thumb = slider::vertical_thumb(track.to_f32(), value);
    let thumb_y = thumb.y.round() as i32;
    let filled = Rect::new(
        track.min().x,
        thumb_y,
        TRACK_WIDTH,
        track.max().y - thumb_y,
    );
    canvas.fill_rounded_rect(filled.intersection(track), TRACK_WIDTH / 2, theme::SLIDER_FILL);

    let (w, h) = THUMB_SIZE;
    let thumb_rect = Rect::new(centre.x - w / 2, thumb_y - h / 2, w, h);
    canvas.fill_rounded_rect(thumb_rect, 3, theme::SLIDER_THUMB);
}

/// A horizontal slider, filled from the left of its track up to the thumb
pub fn horizontal_slider(canvas: &mut Canvas, rect: Rect<i32>, value: f32) {
    let centre = rect.center();
    let (thumb_h, thumb_w) = THUMB_SIZE;
    let track = Rect::new(
        rect.min().x + thumb_w / 2,
        centre.y - TRACK_WIDTH / 2,
        rect.width() - thumb_w,
        TRACK_WIDTH,
    );
    canvas.fill_rounded_rect(track, TRACK_WIDTH / 2, theme::SLIDER_TRACK);

    let thumb_x = slider::horizontal_thumb(track.to_f32(), value).x.round() as i32;
    let filled = Rect::new(track.min().x, track.min().y, thumb_x - track.min().x, TRACK_WIDTH);
    canvas.fill_rounded_rect(filled.intersection(track), TRACK_WIDTH / 2, theme::SLIDER_FILL);

    let thumb_rect = Rect::new(thumb_x - thumb_w / 2, centre.y - thumb_h / 2, thumb_w, thumb_h);
    canvas.fill_rounded_rect(thumb_rect, 3, theme::SLIDER_THUMB);
}

///////////
// OTHER //
///////////

/// A toggle button: a tick box followed by its label
pub fn toggle(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>, label: &str, on: bool) {
    const BOX_SIZE: i32 = 16;
    let centre = rect.center();
    let tick_box = Rect::new(rect.min().x + 4, centre.y - BOX_SIZE / 2, BOX_SIZE, BOX_SIZE);
    canvas.fill_rounded_rect(tick_box, 3, theme::SLIDER_TRACK);
    canvas.stroke_rounded_rect(tick_box, 3, theme::KNOB_OUTLINE);
    if on {
        canvas.fill_rounded_rect(tick_box.reduced(4, 4), 2, theme::TOGGLE_ON);
    }
    let (_, text_h) = text_size(fonts, FontRole::LabelSmall, label);
    let text_pos = Point2::new(tick_box.max().x + 6, centre.y - text_h / 2);
    canvas.text(fonts, FontRole::LabelSmall, text_pos, label, theme::LABEL_TEXT);
}

/// A (closed) combo box showing its selected option
pub fn combo_box(
    canvas: &mut Canvas,
    fonts: &Fonts,
    rect: Rect<i32>,
    options: &[String],
    selected: usize,
) {
    canvas.fill_rounded_rect(rect, 3, theme::EDITOR_BACKGROUND);
    canvas.stroke_rounded_rect(rect, 3, theme::KNOB_OUTLINE);

    // Out-of-range selections show the first item, as the plugin's combo boxes do
    let text = options
        .get(selected)
        .or_else(|| options.first())
        .map_or("Default", String::as_str);
    let (_, text_h) = text_size(fonts, FontRole::LabelSmall, text);
    let text_pos = Point2::new(rect.min().x + 6, rect.center().y - text_h / 2);
    canvas.text(fonts, FontRole::LabelSmall, text_pos, text, theme::EDITOR_TEXT);

    // Drop-down arrow
    let arrow_x = rect.max().x as f32 - 12.0;
    let arrow_y = rect.center().y as f32;
    canvas.fill_polygon(
        &[
            Point2::new(arrow_x - 4.0, arrow_y - 2.0),
            Point2::new(arrow_x + 4.0, arrow_y - 2.0),
            Point2::new(arrow_x, arrow_y + 3.0),
        ],
        theme::LABEL_TEXT,
    );
}

/// A read-only value display
pub fn value_label(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>, text: &str) {
    canvas.text_centred(fonts, FontRole::LabelBold, rect, text, theme::VALUE_LABEL);
}

/// A vertical level meter, filled from the bottom.  Colours fade from green to amber towards the
/// top.
pub fn meter(canvas: &mut Canvas, rect: Rect<i32>, value: f32) {
    const METER_WIDTH: i32 = 10;
    let centre = rect.center();
    let track = Rect::new(
        centre.x - METER_WIDTH / 2,
        rect.min().y + 4,
        METER_WIDTH,
        rect.height() - 8,
    );
    canvas.fill_rect(track, theme::SLIDER_TRACK);

    let top = slider::vertical_thumb(track.to_f32(), value).y.round() as i32;
    let height = track.height().max(1) as f32;
    for y in top.max(track.min().y)..track.max().y {
        let t = (track.max().y - y) as f32 / height;
        let colour = theme::mix(theme::METER_LOW, theme::METER_HIGH, t);
        canvas.fill_rect(Rect::new(track.min().x, y, METER_WIDTH, 1), colour);
    }
}

/// A level meter lying on its side, filling from the left
pub fn horizontal_meter(canvas: &mut Canvas, rect: Rect<i32>, value: f32) {
    const METER_HEIGHT: i32 = 8;
    let centre = rect.center();
    let track = Rect::new(
        rect.min().x + 4,
        centre.y - METER_HEIGHT / 2,
        rect.width() - 8,
        METER_HEIGHT,
    );
    canvas.fill_rect(track, theme::SLIDER_TRACK);

    let right = slider::horizontal_thumb(track.to_f32(), value).x.round() as i32;
    let width = track.width().max(1) as f32;
    for x in track.min().x..right.min(track.max().x) {
        let t = (x - track.min().x) as f32 / width;
        let colour = theme::mix(theme::METER_LOW, theme::METER_HIGH, t);
        canvas.fill_rect(Rect::new(x, track.min().y, 1, METER_HEIGHT), colour);
    }
}

///////////
// PARAM //
///////////

/// Draws a [`Param`] in a cell covering `rect`: its control above, and its label in a strip
/// along the bottom (except for toggles, which carry their own label).
pub fn param(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>, param: &Param) {
    if param.widget.has_position() && !knob::is_in_range(param.value) {
        warn!(
            "Parameter {:?} has value {} outside of 0..=1",
            param.label, param.value
        );
    }

    let mut control = rect;
    let label_strip = control.remove_from_bottom(PARAM_LABEL_HEIGHT);
    let control = control.reduced(2, 2);

    match &param.widget {
        Widget::Toggle => {
            toggle(canvas, fonts, rect, &param.label, param.value >= 0.5);
            return;
        }
        Widget::Knob => arc_knob(canvas, control, param.value),
        Widget::VerticalSlider => vertical_slider(canvas, control, param.value),
        Widget::HorizontalSlider => horizontal_slider(canvas, control, param.value),
        Widget::ComboBox { options, selected } => {
            let centre_y = control.center().y;
            let combo = Rect::new(control.min().x, centre_y - 11, control.width(), 22);
            combo_box(canvas, fonts, combo, options, *selected);
        }
        Widget::Label { text } => value_label(canvas, fonts, control, text),
        Widget::Meter => meter(canvas, control, param.value),
    }
    canvas.text_centred(
        fonts,
        FontRole::LabelSmall,
        label_strip,
        &param.label,
        theme::PARAM_LABEL,
    );
}
