//! Renders the code view and the visual view of the plugin, using the DejaVu fonts.

use anyhow::Context as _;
use preset_mockups::{fonts::FontSet, Context, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = preset_mockups::output_dir(std::env::args_os());
    let ctx = Context::new(&FontSet::dejavu());
    for scene in [Scene::CodeView, Scene::VisualView] {
        ctx.save(scene, &out_dir)
            .with_context(|| format!("failed to write {}", scene.file_name()))?;
        println!("Generated {}", scene.file_name());
    }
    Ok(())
}
