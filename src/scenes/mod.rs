//! The screenshots which can be rendered.  Each scene draws onto a fresh [`Canvas`] from literal
//! layout constants and sample data.

mod code_view;
mod composite;
mod visual_view;

use cgmath::{Point2, Vector2};

use crate::{
    canvas::Canvas,
    fonts::{FontRole, Fonts},
    theme,
    utils::Rect,
    widgets,
};

/// One of the mock-up screenshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// The code editor view of the plugin
    CodeView,
    /// The visual view: one panel of knobs per effect
    VisualView,
    /// A single screenshot combining a spectrum analyser, the code editor and the effect
    /// controls
    Composite,
}

impl Scene {
    /// The name of the file to which this scene is saved
    pub fn file_name(self) -> &'static str {
        match self {
            Scene::CodeView => "screenshot_code.png",
            Scene::VisualView => "screenshot_visual.png",
            Scene::Composite => "screenshot.png",
        }
    }

    /// The size of this scene's image, in pixels
    pub fn size(self) -> Vector2<u32> {
        match self {
            Scene::CodeView | Scene::VisualView => Vector2::new(800, 600),
            Scene::Composite => Vector2::new(1000, 760),
        }
    }

    /// Draws this scene onto a new [`Canvas`]
    pub fn draw(self, fonts: &Fonts) -> Canvas {
        let size = self.size();
        let mut canvas = Canvas::new(size.x, size.y, theme::BACKGROUND);
        match self {
            Scene::CodeView => code_view::draw(&mut canvas, fonts),
            Scene::VisualView => visual_view::draw(&mut canvas, fonts),
            Scene::Composite => composite::draw(&mut canvas, fonts),
        }
        canvas
    }
}

/// Draws the chrome shared by the code and visual views: the title, the view toggle button (top
/// right) and the status footer.
fn draw_common_chrome(canvas: &mut Canvas, fonts: &Fonts, toggle_text: &str) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    canvas.text(
        fonts,
        FontRole::Title,
        Point2::new(25, 30),
        "Preset Engine Plugin",
        theme::TITLE_TEXT,
    );

    let (btn_w, btn_h) = (200, 35);
    let toggle = Rect::new(width - 25 - btn_w, 25, btn_w, btn_h);
    widgets::button(canvas, fonts, toggle, toggle_text, theme::BUTTON);

    canvas.text(
        fonts,
        FontRole::Status,
        Point2::new(25, height - 35),
        "Status: Ready.",
        theme::STATUS_TEXT,
    );
}
