use cgmath::Point2;
use log::{debug, warn};

use crate::{
    canvas::Canvas,
    chain,
    fonts::{FontRole, Fonts},
    theme,
    utils::Rect,
    widgets,
};

const AREA_X: i32 = 25;
const AREA_Y: i32 = 80;
const PANEL_HEIGHT: i32 = 90;
const PANEL_SPACING: i32 = 10;
/// Offset of the first knob from the left of the panel
const KNOB_START_X: i32 = 150;
const KNOB_SPACING: i32 = 80;

pub(super) fn draw(canvas: &mut Canvas, fonts: &Fonts) {
    let width = canvas.width() as i32;
    super::draw_common_chrome(canvas, fonts, "Switch to Code View");

    let mut y = AREA_Y;
    for effect in chain::visual_view_chain() {
        debug!("Drawing panel for {:?}", effect.name);
        for param in effect.out_of_range_params() {
            warn!(
                "{}: knob {:?} has value {} outside of 0..=1",
                effect.name,
                param.label,
                param.value
            );
        }

        // Panels run from `AREA_X` to `width - 50`
        let panel = Rect::new(AREA_X, y, width - 50 - AREA_X, PANEL_HEIGHT);
        widgets::panel(canvas, panel);
        canvas.text(
            fonts,
            FontRole::LabelBold,
            Point2::new(AREA_X + 15, y + 35),
            &effect.name,
            theme::EFFECT_NAME,
        );

        for (i, param) in effect.params.iter().enumerate() {
            let origin = Point2::new(AREA_X + KNOB_START_X + i as i32 * KNOB_SPACING, y);
            widgets::simple_knob(canvas, fonts, origin, &param.label, param.value);
        }

        y += PANEL_HEIGHT + PANEL_SPACING;
    }
}
