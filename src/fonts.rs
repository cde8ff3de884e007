//! Loading the fonts used to draw text onto the mock-ups.
//!
//! Each [`FontRole`] has a list of candidate font files.  The first candidate which loads is
//! used.  Roles where no candidate loads borrow the font of another role and, failing that, use
//! the built-in [`DEFAULT_FONT_DATA`].  Only a [`FontSet`] with the default disabled can end up
//! without a font, in which case its text is skipped.  Font problems are therefore logged but
//! never reported as errors.

use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, warn};
use rusttype::{Font, Scale};

/// DejaVu Sans, built into the binary so that text can always be drawn
pub const DEFAULT_FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const DEJAVU_DIR: &str = "/usr/share/fonts/truetype/dejavu";

/// The different styles of text drawn in the mock-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Code,
    Button,
    Status,
    LabelBold,
    LabelSmall,
}

impl FontRole {
    pub const ALL: [FontRole; 6] = [
        FontRole::Title,
        FontRole::Code,
        FontRole::Button,
        FontRole::Status,
        FontRole::LabelBold,
        FontRole::LabelSmall,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// The font files and pixel sizes requested for every [`FontRole`]
#[derive(Debug, Clone)]
pub struct FontSet {
    roles: Vec<RoleSpec>,
    use_default: bool,
}

#[derive(Debug, Clone)]
struct RoleSpec {
    candidates: Vec<PathBuf>,
    size: f32,
}

impl FontSet {
    /// The DejaVu family at the standard Linux install location
    pub fn dejavu() -> Self {
        let file = |name: &str| vec![Path::new(DEJAVU_DIR).join(name)];
        Self::from_fn(|role| match role {
            FontRole::Title => (file("DejaVuSans-Bold.ttf"), 22.0),
            FontRole::Code => (file("DejaVuSansMono.ttf"), 15.0),
            FontRole::Button => (file("DejaVuSans.ttf"), 16.0),
            FontRole::Status => (file("DejaVuSans.ttf"), 14.0),
            FontRole::LabelBold => (file("DejaVuSans-Bold.ttf"), 14.0),
            FontRole::LabelSmall => (file("DejaVuSans.ttf"), 11.0),
        })
    }

    /// Windows font file names, looked up first in the working directory, then in the Windows
    /// font directory and finally as the matching DejaVu face in the Linux font directory
    pub fn windows() -> Self {
        let file = |name: &str, dejavu_name: &str| {
            vec![
                PathBuf::from(name),
                Path::new(r"C:\Windows\Fonts").join(name),
                Path::new(DEJAVU_DIR).join(dejavu_name),
            ]
        };
        let arial = || file("arial.ttf", "DejaVuSans.ttf");
        let arial_bold = || file("arialbd.ttf", "DejaVuSans-Bold.ttf");
        Self::from_fn(|role| match role {
            FontRole::Title => (arial_bold(), 24.0),
            FontRole::Code => (file("consola.ttf", "DejaVuSansMono.ttf"), 14.0),
            FontRole::Button => (arial(), 14.0),
            FontRole::Status => (arial(), 13.0),
            FontRole::LabelBold => (arial_bold(), 13.0),
            FontRole::LabelSmall => (arial(), 11.0),
        })
    }

    /// A [`FontSet`] with no candidate files, where every role uses the built-in default font
    pub fn default_only() -> Self {
        Self::from_fn(|_| (Vec::new(), 13.0))
    }

    /// A [`FontSet`] with no candidate files and no default font.  All text will be skipped.
    pub fn empty() -> Self {
        Self::default_only().without_default()
    }

    fn from_fn(f: impl Fn(FontRole) -> (Vec<PathBuf>, f32)) -> Self {
        let roles = FontRole::ALL
            .iter()
            .map(|&role| {
                let (candidates, size) = f(role);
                RoleSpec { candidates, size }
            })
            .collect_vec();
        Self {
            roles,
            use_default: true,
        }
    }

    /// Stops [`Fonts::load`] from falling back to the built-in default font
    pub fn without_default(mut self) -> Self {
        self.use_default = false;
        self
    }

    /// Prepends a candidate file for a given role, so that it is tried before all the others
    pub fn with_candidate(mut self, role: FontRole, path: impl Into<PathBuf>) -> Self {
        self.roles[role.index()].candidates.insert(0, path.into());
        self
    }

    pub fn size(&self, role: FontRole) -> f32 {
        self.roles[role.index()].size
    }
}

/// The fonts loaded from a [`FontSet`]
pub struct Fonts {
    faces: Vec<Option<Font<'static>>>,
    sizes: Vec<f32>,
}

impl Fonts {
    /// Loads every role's font from a [`FontSet`], falling back as described in the
    /// [module docs](self)
    pub fn load(set: &FontSet) -> Self {
        let mut faces = set
            .roles
            .iter()
            .map(|spec| spec.candidates.iter().find_map(|path| load_font(path)))
            .collect_vec();

        let fallback = match faces.iter().flatten().next() {
            Some(font) => Some(font.clone()),
            None if set.use_default => default_font(),
            None => None,
        };
        for (role, face) in FontRole::ALL.iter().zip_eq(&mut faces) {
            if face.is_none() {
                match &fallback {
                    Some(font) => {
                        warn!("No font found for {:?}; using a fallback font", role);
                        *face = Some(font.clone());
                    }
                    None => warn!("No font found for {:?}; its text will not be drawn", role),
                }
            }
        }

        Self {
            faces,
            sizes: set.roles.iter().map(|spec| spec.size).collect_vec(),
        }
    }

    /// The [`Font`] and [`Scale`] of a given role, or `None` if no font could be loaded
    pub fn get(&self, role: FontRole) -> Option<(&Font<'static>, Scale)> {
        let face = self.faces[role.index()].as_ref()?;
        Some((face, Scale::uniform(self.sizes[role.index()])))
    }

    pub fn is_empty(&self) -> bool {
        self.faces.iter().all(Option::is_none)
    }
}

impl std::fmt::Debug for Fonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self.faces.iter().filter(|f| f.is_some()).count();
        write!(f, "Fonts({}/{} loaded)", loaded, self.faces.len())
    }
}

fn default_font() -> Option<Font<'static>> {
    let font = Font::try_from_bytes(DEFAULT_FONT_DATA);
    if font.is_none() {
        warn!("The built-in default font could not be parsed");
    }
    font
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let bytes = std::fs::read(path).ok()?;
    let font = Font::try_from_vec(bytes);
    match &font {
        Some(_) => debug!("Loaded font {:?}", path),
        None => warn!("{:?} is not a valid font file", path),
    }
    font
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_fall_back_to_nothing() {
        let set = FontSet::empty().with_candidate(FontRole::Title, "/does/not/exist.ttf");
        let fonts = Fonts::load(&set);
        assert!(fonts.is_empty());
        for role in FontRole::ALL {
            assert!(fonts.get(role).is_none());
        }
    }

    #[test]
    fn invalid_font_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let fonts = Fonts::load(&FontSet::empty().with_candidate(FontRole::Code, path));
        assert!(fonts.get(FontRole::Code).is_none());
    }

    #[test]
    fn default_font_fills_every_role() {
        let fonts = Fonts::load(&FontSet::default_only());
        for role in FontRole::ALL {
            assert!(fonts.get(role).is_some(), "{:?}", role);
        }
    }

    #[test]
    fn windows_fonts_always_load() {
        // Even with none of the named files installed, the default font is used
        let fonts = Fonts::load(&FontSet::windows());
        assert!(!fonts.is_empty());
        for role in FontRole::ALL {
            assert!(fonts.get(role).is_some(), "{:?}", role);
        }
    }

    #[test]
    fn roles_borrow_another_roles_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("title.ttf");
        std::fs::write(&path, DEFAULT_FONT_DATA).unwrap();
        // No default font, so every role other than `Title` can only use the title's font
        let set = FontSet::empty().with_candidate(FontRole::Title, path);
        let fonts = Fonts::load(&set);
        for role in FontRole::ALL {
            let (_, scale) = fonts.get(role).unwrap();
            assert_eq!(scale, Scale::uniform(set.size(role)));
        }
    }

    #[test]
    fn windows_candidates_include_linux_fonts() {
        let set = FontSet::windows();
        let code = &set.roles[FontRole::Code.index()].candidates;
        assert_eq!(code[0], PathBuf::from("consola.ttf"));
        assert_eq!(code[2], Path::new(DEJAVU_DIR).join("DejaVuSansMono.ttf"));
    }

    #[test]
    fn sizes_per_role() {
        let set = FontSet::dejavu();
        assert_eq!(set.size(FontRole::Title), 22.0);
        assert_eq!(set.size(FontRole::Code), 15.0);
        assert_eq!(set.size(FontRole::LabelSmall), 11.0);
    }
}
