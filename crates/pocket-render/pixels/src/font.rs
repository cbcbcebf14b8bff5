use std::path::{Path, PathBuf};

use rusttype::Font;

pub const FONT_ENV: &str = "POCKET_FONT";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the first usable font from the explicit path, `POCKET_FONT`, then a
/// few well-known system locations.
pub(crate) fn load_font(explicit: Option<&Path>) -> Option<Font<'static>> {
    let env = std::env::var_os(FONT_ENV).map(PathBuf::from);
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(env)
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));
    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => match Font::try_from_vec(bytes) {
                Some(font) => {
                    log::debug!("using font {}", path.display());
                    return Some(font);
                }
                None => log::warn!("{} is not a usable TrueType font", path.display()),
            },
            Err(err) => log::trace!("font {} unavailable: {err}", path.display()),
        }
    }
    log::warn!("no font found; text is drawn as placeholder boxes (set {FONT_ENV})");
    None
}
