//! Font registry
//!
//! Maps family names in a font description to loaded faces.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{FontError, FontResult};
use crate::font::FontFace;

/// Well-known system font files and the family they provide
const SYSTEM_FONTS: &[(&str, &str)] = &[
    ("DejaVu Sans", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ("DejaVu Sans", "/usr/share/fonts/TTF/DejaVuSans.ttf"),
    ("DejaVu Serif", "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf"),
    ("DejaVu Sans Mono", "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
    ("Liberation Sans", "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
    ("Liberation Serif", "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf"),
    ("Liberation Mono", "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf"),
    ("Arial", "/System/Library/Fonts/Supplemental/Arial.ttf"),
    ("Times New Roman", "/System/Library/Fonts/Supplemental/Times New Roman.ttf"),
    ("Courier New", "/System/Library/Fonts/Supplemental/Courier New.ttf"),
    ("Arial", "C:\\Windows\\Fonts\\arial.ttf"),
    ("Times New Roman", "C:\\Windows\\Fonts\\times.ttf"),
    ("Courier New", "C:\\Windows\\Fonts\\cour.ttf"),
];

/// Generic families and the concrete families they prefer, in order
const GENERIC_FAMILIES: &[(&str, &[&str])] = &[
    ("sans-serif", &["DejaVu Sans", "Liberation Sans", "Arial"]),
    ("serif", &["DejaVu Serif", "Liberation Serif", "Times New Roman"]),
    ("monospace", &["DejaVu Sans Mono", "Liberation Mono", "Courier New"]),
];

/// Registered font faces addressed by family name
#[derive(Debug, Default)]
pub struct FontRegistry {
    faces: Vec<FontFace>,
    /// Lowercased family name to face index
    names: Vec<(String, usize)>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe well-known system font locations.
    ///
    /// Generic families (`sans-serif`, `serif`, `monospace`) are aliased to
    /// the first matching family found. Unreadable files are skipped.
    pub fn system() -> Self {
        let mut registry = Self::new();

        for (family, path) in SYSTEM_FONTS {
            if registry.lookup(family).is_some() || !Path::new(path).exists() {
                continue;
            }
            if let Err(e) = registry.load_file(family, path) {
                warn!("Skipping system font: {}", e);
            }
        }

        for (generic, preferred) in GENERIC_FAMILIES {
            if let Some(index) = preferred.iter().find_map(|family| registry.lookup(family)) {
                registry.names.push((generic.to_string(), index));
            }
        }

        debug!("Loaded {} system font faces", registry.faces.len());
        registry
    }

    /// Register a face from font data under `family`
    pub fn register(&mut self, family: &str, data: &[u8]) -> FontResult<usize> {
        let face = FontFace::from_bytes(family, data)?;
        let index = self.faces.len();
        self.faces.push(face);
        self.names.push((family.to_ascii_lowercase(), index));
        Ok(index)
    }

    /// Load a font file and register it under `family`
    pub fn load_file(&mut self, family: &str, path: impl AsRef<Path>) -> FontResult<usize> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = self.register(family, &data)?;
        debug!("Registered font '{}' from {}", family, path.display());
        Ok(index)
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Find a face by family name, ignoring case
    pub fn lookup(&self, family: &str) -> Option<usize> {
        self.names
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(family))
            .map(|&(_, index)| index)
    }

    /// Resolve a font description to a face.
    ///
    /// The first listed family that is registered wins; otherwise the first
    /// registered face is used.
    pub fn resolve(&self, font: &str) -> Option<usize> {
        if self.faces.is_empty() {
            return None;
        }
        font_families(font)
            .iter()
            .find_map(|family| self.lookup(family))
            .or(Some(0))
    }

    pub fn face(&self, index: usize) -> Option<&FontFace> {
        self.faces.get(index)
    }

    pub fn face_mut(&mut self, index: usize) -> Option<&mut FontFace> {
        self.faces.get_mut(index)
    }
}

/// Family names of a font description such as `bold 14px "Open Sans", serif`.
///
/// Families follow the size token: the first token with a unit such as
/// `20px` or `12pt/1.5`, or else the last bare number that still has tokens
/// after it. Bare numbers before a unit token are weights (`bold 700 20px`).
/// Without a size token the whole description is the family list.
pub fn font_families(font: &str) -> Vec<String> {
    let tokens: Vec<&str> = font.split_whitespace().collect();
    let starts_with_digit = |t: &&str| t.starts_with(|c: char| c.is_ascii_digit());
    let is_bare_number = |t: &&str| t.bytes().all(|b| b.is_ascii_digit() || b == b'.');

    let sized = tokens
        .iter()
        .position(|t| starts_with_digit(t) && !is_bare_number(t));
    let bare = || {
        tokens[..tokens.len().saturating_sub(1)]
            .iter()
            .rposition(|t| starts_with_digit(t) && is_bare_number(t))
    };
    let family_start = sized.or_else(bare).map_or(0, |i| i + 1);

    tokens[family_start..]
        .join(" ")
        .split(',')
        .map(|family| family.trim().trim_matches(|c: char| c == '"' || c == '\'').trim())
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}
