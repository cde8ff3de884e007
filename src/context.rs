use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    canvas::Canvas,
    fonts::{FontSet, Fonts},
    scenes::Scene,
};

/// Resources shared by every render.  Fonts are loaded once, when the `Context` is created.
#[derive(Debug)]
pub struct Context {
    fonts: Fonts,
}

impl Context {
    /// Creates a new `Context`, loading the fonts requested by `font_set`
    pub fn new(font_set: &FontSet) -> Self {
        let fonts = Fonts::load(font_set);
        debug!("Created context with {:?}", fonts);
        Self { fonts }
    }

    /// Draws a [`Scene`] onto a new [`Canvas`]
    pub fn render(&self, scene: Scene) -> Canvas {
        debug!("Rendering {:?}", scene);
        scene.draw(&self.fonts)
    }

    /// Render a given [`Scene`] to a CPU-memory [`image::RgbaImage`] buffer
    pub fn render_to_image(&self, scene: Scene) -> image::RgbaImage {
        self.render(scene).into_inner()
    }

    /// Render a [`Scene`] and save it into `dir` under the scene's
    /// [file name](Scene::file_name), returning the path of the new file.  `dir` must already
    /// exist.
    pub fn save(&self, scene: Scene, dir: impl AsRef<Path>) -> crate::Result<PathBuf> {
        let path = dir.as_ref().join(scene.file_name());
        self.render(scene).save(&path)?;
        info!("Saved {:?} to {:?}", scene, path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Vector2;

    use super::*;

    #[test]
    fn scene_sizes() {
        let ctx = Context::new(&FontSet::empty());
        for scene in [Scene::CodeView, Scene::VisualView, Scene::Composite] {
            let image = ctx.render_to_image(scene);
            assert_eq!(Vector2::from(image.dimensions()), scene.size(), "{:?}", scene);
        }
    }

    #[test]
    fn saving_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-here");
        assert!(Context::new(&FontSet::empty())
            .save(Scene::CodeView, missing)
            .is_err());
    }
}
