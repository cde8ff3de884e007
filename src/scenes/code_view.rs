use cgmath::{Point2, Vector2};

use crate::{
    canvas::Canvas,
    code,
    fonts::{FontRole, Fonts},
    theme,
    utils::Rect,
    widgets,
};

const LINE_HEIGHT: i32 = 20;
const TEXT_PADDING: i32 = 15;

pub(super) fn draw(canvas: &mut Canvas, fonts: &Fonts) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    super::draw_common_chrome(canvas, fonts, "Switch to Visual View");

    // Editor
    let editor = Rect::new(25, 80, width - 50, height - 130);
    canvas.fill_rect(editor, theme::EDITOR_BACKGROUND);
    let text_origin = editor.min() + Vector2::new(TEXT_PADDING, TEXT_PADDING);
    for (i, (line, colour)) in code::highlight(code::SAMPLE_CONFIG).enumerate() {
        let pos = Point2::new(text_origin.x, text_origin.y + i as i32 * LINE_HEIGHT);
        canvas.text(fonts, FontRole::Code, pos, line, colour);
    }

    // Apply button
    let (btn_w, btn_h) = (180, 35);
    let apply = Rect::new(width - 25 - btn_w, height - 45, btn_w, btn_h);
    widgets::button(canvas, fonts, apply, "Apply Configuration", theme::BUTTON);
}
