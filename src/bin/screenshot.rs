//! Renders the composite screenshot (spectrum, code editor and effect controls), using Windows
//! font names.

use anyhow::Context as _;
use preset_mockups::{fonts::FontSet, Context, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir = preset_mockups::output_dir(std::env::args_os());
    let ctx = Context::new(&FontSet::windows());
    let scene = Scene::Composite;
    ctx.save(scene, &out_dir)
        .with_context(|| format!("failed to write {}", scene.file_name()))?;
    println!("Generated {}", scene.file_name());
    Ok(())
}
