//! The composite screenshot: a header bar, then a left column (spectrum analyser, controls strip,
//! code editor) and a right column of effect blocks.

use cgmath::Point2;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    canvas::{text_size, Canvas},
    chain::{self, EffectDescriptor},
    code,
    fonts::{FontRole, Fonts},
    spectrum, theme,
    utils::Rect,
    widgets,
};

const MARGIN: i32 = 20;
const HEADER_HEIGHT: i32 = 60;
const FOOTER_HEIGHT: i32 = 40;
const GAP: i32 = 10;

const RIGHT_COLUMN_WIDTH: i32 = 320;
const SPECTRUM_HEIGHT: i32 = 170;
const CONTROLS_HEIGHT: i32 = 36;
const APPLY_STRIP_HEIGHT: i32 = 45;
const OUTPUT_METER_WIDTH: i32 = 150;
const OUTPUT_LEVEL: f32 = 0.72;

const GUTTER_WIDTH: i32 = 40;
const LINE_HEIGHT: i32 = 18;
/// The (0-based) line of the editor drawn with the current-line highlight
const CURRENT_LINE: usize = 4;

const BLOCK_TITLE_HEIGHT: i32 = 26;
const CELL_SIZE: (i32, i32) = (64, 78);
const CELL_SPACING: i32 = 72;
const BLOCK_SPACING: i32 = 10;

pub(super) fn draw(canvas: &mut Canvas, fonts: &Fonts) {
    let mut area = canvas.bounds();

    let header = area.remove_from_top(HEADER_HEIGHT);
    draw_header(canvas, fonts, header);

    let mut area = area.reduced(MARGIN, 0);
    area.remove_from_top(15);
    let footer = area.remove_from_bottom(FOOTER_HEIGHT);
    draw_footer(canvas, fonts, footer);

    let right = area.remove_from_right(RIGHT_COLUMN_WIDTH);
    area.remove_from_right(15);
    draw_effect_column(canvas, fonts, right);

    // Left column
    debug!("Drawing spectrum");
    draw_spectrum(canvas, fonts, area.remove_from_top(SPECTRUM_HEIGHT));
    area.remove_from_top(GAP);
    draw_controls(canvas, fonts, area.remove_from_top(CONTROLS_HEIGHT));
    area.remove_from_top(GAP);
    let mut apply_strip = area.remove_from_bottom(APPLY_STRIP_HEIGHT);
    apply_strip.remove_from_top(GAP);
    let apply = apply_strip.remove_from_right(180);
    widgets::button(canvas, fonts, apply, "Apply Configuration", theme::BUTTON);
    debug!("Drawing code editor");
    draw_editor(canvas, fonts, area);
}

fn draw_header(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>) {
    canvas.fill_rect(rect, theme::HEADER_BACKGROUND);
    canvas.fill_rect(
        Rect::new(rect.min().x, rect.max().y - 1, rect.width(), 1),
        theme::PANEL_BACKGROUND,
    );

    let (_, title_h) = text_size(fonts, FontRole::Title, "Preset Engine");
    let title_pos = Point2::new(rect.min().x + MARGIN, rect.center().y - title_h / 2);
    canvas.text(fonts, FontRole::Title, title_pos, "Preset Engine", theme::TITLE_TEXT);

    let mut buttons = rect.reduced(MARGIN, 12);
    let toggle = buttons.remove_from_right(200);
    widgets::button(canvas, fonts, toggle, "Switch to Visual View", theme::BUTTON);
}

fn draw_footer(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>) {
    let text = "Status: Configuration Loaded Successfully.";
    let (_, text_h) = text_size(fonts, FontRole::Status, text);
    let pos = Point2::new(rect.min().x, rect.center().y - text_h / 2);
    canvas.text(fonts, FontRole::Status, pos, text, theme::TOGGLE_ON);
}

//////////////
// SPECTRUM //
//////////////

fn draw_spectrum(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>) {
    canvas.fill_rounded_rect(rect, widgets::CORNER_RADIUS, theme::PLOT_BACKGROUND);
    let plot = rect.reduced(8, 8);
    let (min, max) = (plot.min(), plot.max());
    let x_of = |pos: f32| min.x + (pos * plot.width() as f32).round() as i32;
    let y_of = |pos: f32| max.y - (pos * plot.height() as f32).round() as i32;

    // Grid
    for db in spectrum::GRID_DBS {
        let y = y_of(spectrum::db_position(db));
        canvas.fill_rect(Rect::new(min.x, y, plot.width(), 1), theme::PLOT_GRID);
    }
    for (freq, label) in spectrum::GRID_FREQS {
        let x = x_of(spectrum::freq_position(freq));
        canvas.fill_rect(Rect::new(x, min.y, 1, plot.height()), theme::PLOT_GRID);
        let label_pos = Point2::new(x + 3, max.y - 14);
        canvas.text(fonts, FontRole::LabelSmall, label_pos, label, theme::PLOT_LABEL);
    }

    // Curve, with the area underneath shaded
    let heights = spectrum::curve(plot.width() as usize);
    let fill = theme::blend(theme::PLOT_BACKGROUND, theme::PLOT_FILL);
    let points = heights
        .iter()
        .enumerate()
        .map(|(i, &h)| Point2::new((min.x + i as i32) as f32, y_of(h) as f32))
        .collect_vec();
    for p in &points {
        let top = p.y as i32 + 1;
        canvas.fill_rect(Rect::new(p.x as i32, top, 1, max.y - top), fill);
    }
    canvas.polyline(&points, 2.0, theme::PLOT_LINE);

    canvas.text(
        fonts,
        FontRole::LabelSmall,
        Point2::new(min.x + 4, min.y + 2),
        "Output Spectrum",
        theme::PLOT_LABEL,
    );
}

//////////////
// CONTROLS //
//////////////

fn draw_controls(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>) {
    let mut strip = rect.reduced(0, 3);
    let languages = code::LANGUAGES.iter().map(|s| s.to_string()).collect_vec();
    widgets::combo_box(canvas, fonts, strip.remove_from_left(120), &languages, 0);
    strip.remove_from_left(GAP);
    let example = strip.remove_from_left(120);
    widgets::button(canvas, fonts, example, "Load Example", theme::BUTTON_ON);
    strip.remove_from_left(GAP);
    widgets::toggle(canvas, fonts, strip.remove_from_left(90), "Bypass", false);

    let meter = strip.remove_from_right(OUTPUT_METER_WIDTH);
    let (label_w, label_h) = text_size(fonts, FontRole::LabelSmall, "Output");
    let label_pos = Point2::new(meter.min().x - label_w - 4, meter.center().y - label_h / 2);
    canvas.text(fonts, FontRole::LabelSmall, label_pos, "Output", theme::LABEL_TEXT);
    widgets::horizontal_meter(canvas, meter, OUTPUT_LEVEL);
}

////////////
// EDITOR //
////////////

fn draw_editor(canvas: &mut Canvas, fonts: &Fonts, rect: Rect<i32>) {
    canvas.fill_rect(rect, theme::EDITOR_BACKGROUND);
    let mut text_area = rect;
    let gutter = text_area.remove_from_left(GUTTER_WIDTH);
    canvas.fill_rect(gutter, theme::BACKGROUND);

    let top = rect.min().y + 10;
    for (i, (line, colour)) in code::highlight(code::SAMPLE_CONFIG).enumerate() {
        let y = top + i as i32 * LINE_HEIGHT;
        if y + LINE_HEIGHT > rect.max().y {
            break;
        }
        if i == CURRENT_LINE {
            let highlight = Rect::new(text_area.min().x, y - 1, text_area.width(), LINE_HEIGHT);
            canvas.fill_rect(highlight, theme::EDITOR_HIGHLIGHT);
        }

        let number = (i + 1).to_string();
        let (num_w, _) = text_size(fonts, FontRole::Code, &number);
        let num_pos = Point2::new(gutter.max().x - 8 - num_w, y);
        canvas.text(fonts, FontRole::Code, num_pos, &number, theme::GUTTER_TEXT);

        let pos = Point2::new(text_area.min().x + 10, y);
        canvas.text(fonts, FontRole::Code, pos, line, colour);
    }
}

///////////////////
// EFFECT BLOCKS //
///////////////////

fn draw_effect_column(canvas: &mut Canvas, fonts: &Fonts, mut column: Rect<i32>) {
    let block_height = BLOCK_TITLE_HEIGHT + CELL_SIZE.1 + 8;
    for effect in chain::composite_chain() {
        let block = column.remove_from_top(block_height);
        column.remove_from_top(BLOCK_SPACING);
        if block.height() < block_height {
            warn!("No room for effect block {:?}", effect.name);
            break;
        }
        draw_effect_block(canvas, fonts, block, &effect);
    }
}

fn draw_effect_block(
    canvas: &mut Canvas,
    fonts: &Fonts,
    rect: Rect<i32>,
    effect: &EffectDescriptor,
) {
    debug!("Drawing effect block for {:?}", effect.name);
    widgets::panel(canvas, rect);

    let mut inner = rect.reduced(10, 0);
    let title = inner.remove_from_top(BLOCK_TITLE_HEIGHT);
    let (_, title_h) = text_size(fonts, FontRole::LabelBold, &effect.name);
    let title_pos = Point2::new(title.min().x, title.center().y - title_h / 2 + 2);
    canvas.text(fonts, FontRole::LabelBold, title_pos, &effect.name, theme::EFFECT_NAME);

    let (cell_w, cell_h) = CELL_SIZE;
    for (i, param) in effect.params.iter().enumerate() {
        let x = inner.min().x + i as i32 * CELL_SPACING;
        if x + cell_w > inner.max().x {
            warn!("{}: no room for parameter {:?}", effect.name, param.label);
            break;
        }
        let cell = Rect::new(x, inner.min().y, cell_w, cell_h);
        widgets::param(canvas, fonts, cell, param);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_block_fits() {
        // The right column is the body height: the canvas minus the header, top spacing and
        // footer
        let column_height = 760 - HEADER_HEIGHT - 15 - FOOTER_HEIGHT;
        let block_height = BLOCK_TITLE_HEIGHT + CELL_SIZE.1 + 8;
        let num_blocks = chain::composite_chain().len() as i32;
        assert!(num_blocks * block_height + (num_blocks - 1) * BLOCK_SPACING <= column_height);

        let max_params = chain::composite_chain()
            .iter()
            .map(|e| e.params.len())
            .max()
            .unwrap() as i32;
        let inner_width = RIGHT_COLUMN_WIDTH - 20;
        assert!((max_params - 1) * CELL_SPACING + CELL_SIZE.0 <= inner_width);
    }

    #[test]
    fn controls_strip_has_bypass_and_meter() {
        let fonts = Fonts::load(&crate::fonts::FontSet::empty());
        let mut canvas = Canvas::new(625, 36, theme::BACKGROUND);
        draw_controls(&mut canvas, &fonts, Rect::new(0, 0, 625, 36));

        // Language box, then "Load Example"
        assert_eq!(*canvas.get_pixel(60, 18), theme::EDITOR_BACKGROUND);
        assert_eq!(*canvas.get_pixel(190, 18), theme::BUTTON_ON);
        // Bypass is off, so its tick box is empty
        assert_eq!(*canvas.get_pixel(272, 18), theme::SLIDER_TRACK);
        // The output meter's track runs over x in 479..621, lit up to 72%
        assert_eq!(*canvas.get_pixel(479, 18), theme::METER_LOW);
        assert_eq!(*canvas.get_pixel(620, 18), theme::SLIDER_TRACK);
        assert_eq!(*canvas.get_pixel(479, 8), theme::BACKGROUND);
    }

    #[test]
    fn every_code_line_fits() {
        let body = 760 - HEADER_HEIGHT - 15 - FOOTER_HEIGHT;
        let editor_height =
            body - SPECTRUM_HEIGHT - CONTROLS_HEIGHT - 2 * GAP - APPLY_STRIP_HEIGHT;
        let num_lines = code::SAMPLE_CONFIG.lines().count() as i32;
        assert!(10 + num_lines * LINE_HEIGHT <= editor_height);
    }
}
