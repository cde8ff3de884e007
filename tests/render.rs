use preset_mockups::{fonts::FontSet, Context, Scene};
use sha2::{Digest, Sha256};

const ALL_SCENES: [Scene; 3] = [Scene::CodeView, Scene::VisualView, Scene::Composite];

fn png_hash(ctx: &Context, scene: Scene) -> Vec<u8> {
    let bytes = ctx.render(scene).encode_png().unwrap();
    Sha256::digest(&bytes).to_vec()
}

#[test]
fn rendering_is_repeatable() {
    // Text drawing is covered by the built-in font and, if they're installed, the real fonts
    for font_set in [FontSet::empty(), FontSet::default_only(), FontSet::dejavu()] {
        let ctx = Context::new(&font_set);
        for scene in ALL_SCENES {
            assert_eq!(png_hash(&ctx, scene), png_hash(&ctx, scene), "{:?}", scene);
        }
    }
}

#[test]
fn separate_contexts_render_identically() {
    let a = Context::new(&FontSet::dejavu());
    let b = Context::new(&FontSet::dejavu());
    for scene in ALL_SCENES {
        assert_eq!(a.render_to_image(scene), b.render_to_image(scene));
    }
}

#[test]
fn saved_files_decode() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = Context::new(&FontSet::empty());
    for scene in ALL_SCENES {
        let path = ctx.save(scene, dir.path()).unwrap();
        assert_eq!(path, dir.path().join(scene.file_name()));

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (scene.size().x, scene.size().y));
        assert_eq!(image, ctx.render_to_image(scene));
    }
}

#[test]
fn scenes_have_distinct_content() {
    let ctx = Context::new(&FontSet::empty());
    let hashes = ALL_SCENES.map(|scene| png_hash(&ctx, scene));
    assert_ne!(hashes[0], hashes[1]);
    assert_ne!(hashes[1], hashes[2]);
}

#[test]
fn scenes_draw_text_when_fonts_load() {
    let without_text = Context::new(&FontSet::empty());
    let with_text = Context::new(&FontSet::default_only());
    for scene in ALL_SCENES {
        assert_ne!(
            without_text.render_to_image(scene),
            with_text.render_to_image(scene),
            "{:?}",
            scene
        );
    }

    // The composite's fonts always load, whether or not the named files are installed
    let composite = Context::new(&FontSet::windows()).render_to_image(Scene::Composite);
    assert_ne!(composite, without_text.render_to_image(Scene::Composite));
}
