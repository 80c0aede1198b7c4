//! Asset loading
//!
//! Sprites load eagerly from a directory at startup and are looked up by
//! name afterwards. Names come from file names with a trailing `.png`
//! stripped, so `textures/player.png` becomes the sprite `"player"`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::gfx::Surface;

/// Named sprite storage, loaded from a directory of image files.
#[derive(Debug, Default)]
pub struct SpriteLibrary {
    sprites: HashMap<String, Surface>,
}

impl SpriteLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every image file in a directory.
    ///
    /// Subdirectories are not descended into. A file name ending in `.png`
    /// loses that suffix in its sprite name; any other extension stays part
    /// of the name. If two files produce the same name, the later one wins
    /// and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist, cannot be read, or
    /// contains a file that does not decode as an image.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AssetError::MissingDirectory(dir.display().to_string()));
        }

        let mut sprites = HashMap::new();
        for entry in fs::read_dir(dir).map_err(|e| AssetError::IoError(e.to_string()))? {
            let entry = entry.map_err(|e| AssetError::IoError(e.to_string()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("Skipping sprite with non-UTF-8 name: {}", path.display());
                continue;
            };
            let name = file_name.strip_suffix(".png").unwrap_or(file_name);

            // sniff the format from content, not the extension: the key rule
            // means "foo" can collide with "foo.png", and an extensionless
            // file must still load for the overwrite to happen
            let image = image::ImageReader::open(&path)
                .map_err(|e| AssetError::IoError(format!("{}: {e}", path.display())))?
                .with_guessed_format()
                .map_err(|e| AssetError::IoError(format!("{}: {e}", path.display())))?
                .decode()
                .map_err(|e| AssetError::DecodeError(format!("{}: {e}", path.display())))?
                .to_rgba8();

            log::debug!("Loaded sprite {:?} from {}", name, path.display());
            if sprites
                .insert(name.to_string(), Surface::from_image(image))
                .is_some()
            {
                log::warn!("Duplicate sprite name {name:?}; replacing earlier entry");
            }
        }

        log::info!("Loaded {} sprites from {}", sprites.len(), dir.display());
        Ok(Self { sprites })
    }

    /// Get a sprite by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Surface> {
        self.sprites.get(name)
    }

    /// Add or replace a sprite under a name.
    pub fn insert(&mut self, name: impl Into<String>, sprite: Surface) {
        self.sprites.insert(name.into(), sprite);
    }

    /// Iterate over the sprite names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    /// Get the number of stored sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Find the font file to use in a fonts directory.
///
/// Picks the lexicographically first `.ttf` or `.otf` file so the choice
/// is stable across platforms and runs.
pub fn find_font(dir: impl AsRef<Path>) -> Result<PathBuf, AssetError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(AssetError::MissingDirectory(dir.display().to_string()));
    }

    let mut fonts: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| AssetError::IoError(e.to_string()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf")
                    })
        })
        .collect();
    fonts.sort();

    fonts
        .into_iter()
        .next()
        .ok_or_else(|| AssetError::FontError(format!("no .ttf or .otf files in {}", dir.display())))
}

/// Errors that can occur while loading assets
#[derive(Debug, Clone)]
pub enum AssetError {
    /// IO error
    IoError(String),
    /// Image decode error
    DecodeError(String),
    /// Asset directory missing
    MissingDirectory(String),
    /// Font parse error
    FontError(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DecodeError(e) => write!(f, "Decode error: {e}"),
            Self::MissingDirectory(dir) => write!(f, "Asset directory not found: {dir}"),
            Self::FontError(e) => write!(f, "Font error: {e}"),
        }
    }
}

impl std::error::Error for AssetError {}
