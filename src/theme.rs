//! The dark colour palette of the plugin's "modern" look and feel.

use image::Rgba;

pub type Colour = Rgba<u8>;

/// Creates an opaque [`Colour`]
pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
    Rgba([r, g, b, u8::MAX])
}

pub const BACKGROUND: Colour = rgb(0x1e, 0x1e, 0x1e);
pub const EDITOR_BACKGROUND: Colour = rgb(0x25, 0x25, 0x26);
pub const EDITOR_TEXT: Colour = rgb(0xd4, 0xd4, 0xd4);
pub const EDITOR_HIGHLIGHT: Colour = rgb(0x26, 0x4f, 0x78);
pub const GUTTER_TEXT: Colour = rgb(0x85, 0x85, 0x85);
pub const BUTTON: Colour = rgb(0x0e, 0x63, 0x9c);
pub const BUTTON_ON: Colour = rgb(0x11, 0x77, 0xbb);
pub const BUTTON_TEXT: Colour = rgb(0xff, 0xff, 0xff);
pub const TITLE_TEXT: Colour = rgb(0xff, 0xff, 0xff);
pub const LABEL_TEXT: Colour = rgb(0xcc, 0xcc, 0xcc);
pub const STATUS_TEXT: Colour = rgb(128, 128, 128);
pub const PANEL_BACKGROUND: Colour = rgb(0x2d, 0x2d, 0x30);
/// Panel borders are black at 30% opacity
pub const PANEL_BORDER: Colour = Rgba([0, 0, 0, 76]);
pub const HEADER_BACKGROUND: Colour = rgb(0x25, 0x25, 0x26);

pub const EFFECT_NAME: Colour = rgb(220, 220, 220);
pub const PARAM_LABEL: Colour = rgb(180, 180, 180);

/* knobs */
pub const KNOB_BODY: Colour = rgb(60, 60, 60);
pub const KNOB_OUTLINE: Colour = rgb(100, 100, 100);
pub const KNOB_NEEDLE: Colour = rgb(220, 220, 220);
pub const KNOB_ARC: Colour = rgb(0x1c, 0x97, 0xea);
pub const KNOB_TRACK: Colour = rgb(75, 75, 78);

/* sliders, meters and toggles */
pub const SLIDER_TRACK: Colour = rgb(24, 24, 24);
pub const SLIDER_FILL: Colour = rgb(0x1c, 0x97, 0xea);
pub const SLIDER_THUMB: Colour = rgb(220, 220, 220);
pub const METER_LOW: Colour = rgb(0x4e, 0xc9, 0x6b);
pub const METER_HIGH: Colour = rgb(0xe5, 0xc0, 0x7b);
pub const TOGGLE_ON: Colour = rgb(0x90, 0xee, 0x90);
pub const VALUE_LABEL: Colour = rgb(0x00, 0xff, 0xff);

/* syntax highlighting */
pub const COMMENT: Colour = rgb(87, 166, 74);
pub const KEYWORD: Colour = rgb(86, 156, 214);
pub const PROPERTY: Colour = rgb(156, 220, 254);

/* spectrum plot */
pub const PLOT_BACKGROUND: Colour = rgb(0x17, 0x17, 0x18);
pub const PLOT_GRID: Colour = rgb(0x33, 0x33, 0x36);
pub const PLOT_LINE: Colour = rgb(0x4f, 0xc1, 0xff);
pub const PLOT_FILL: Colour = Rgba([0x4f, 0xc1, 0xff, 48]);
pub const PLOT_LABEL: Colour = rgb(0x6a, 0x6a, 0x6a);

/// Composites `over` onto the opaque colour `base`, using `over`'s alpha channel.  The result is
/// always opaque.
pub fn blend(base: Colour, over: Colour) -> Colour {
    let alpha = over[3] as f32 / 255.0;
    mix(base, over, alpha)
}

/// Linearly interpolates between the RGB channels of `a` and `b`, returning an opaque colour
pub fn mix(a: Colour, b: Colour, t: f32) -> Colour {
    let channel = |i: usize| {
        let v = a[i] as f32 + (b[i] as f32 - a[i] as f32) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    rgb(channel(0), channel(1), channel(2))
}
