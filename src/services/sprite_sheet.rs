// src/services/sprite_sheet.rs
// SpriteSheet is the atlas lookup service: it maps an icon reference to
// a pixel region within one packed sheet image. The index is produced
// offline by the sheet builder and loaded here from JSON.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;

use std::error::Error;
use std::fs;
use std::path::Path;

/// A renderable sub-rectangle of the sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SheetEntry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
struct SheetIndex {
    width: u32,
    height: u32,
    entries: HashMap<String, SheetEntry>,
}

#[derive(Debug, Default)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    entries: HashMap<String, SheetEntry>,
}

impl SpriteSheet {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            entries: HashMap::new(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let index: SheetIndex = serde_json::from_str(&content)?;
        let mut sheet = Self::new(index.width, index.height);
        for (key, entry) in index.entries {
            sheet.entries.insert(normalize_icon_path(&key), entry);
        }
        Ok(sheet)
    }

    pub fn insert(&mut self, icon: &str, x: u32, y: u32, width: u32, height: u32) {
        self.entries.insert(
            normalize_icon_path(icon),
            SheetEntry {
                x,
                y,
                width,
                height,
            },
        );
    }

    /// Sheet image dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whole-image lookup.
    pub fn get(&self, icon: &str) -> Option<TextureRegion> {
        let entry = self.entries.get(&normalize_icon_path(icon))?;
        Some(TextureRegion {
            x: entry.x,
            y: entry.y,
            width: entry.width,
            height: entry.height,
        })
    }

    /// Sub-region lookup, offsets relative to the entry's own origin.
    /// Used for slicing one level out of a mipmap strip.
    pub fn get_slice(
        &self,
        icon: &str,
        x_offset: u32,
        y_offset: u32,
        width: u32,
        height: u32,
    ) -> Option<TextureRegion> {
        let entry = self.entries.get(&normalize_icon_path(icon))?;
        Some(TextureRegion {
            x: entry.x + x_offset,
            y: entry.y + y_offset,
            width,
            height,
        })
    }
}

/// Reduce a game-mod icon path to a stable index key.
/// "__base__/graphics/icons/iron-plate.png" becomes "base/iron-plate";
/// anything that doesn't match the mod-path shape passes through as-is.
pub fn normalize_icon_path(icon: &str) -> String {
    let re = match Regex::new(r"^__(.+?)__/(?:.*/)*(.+?)\.(?:png|jpg)$") {
        Ok(re) => re,
        Err(_) => return icon.to_string(),
    };
    match re.captures(icon) {
        Some(caps) => format!("{}/{}", &caps[1], &caps[2]),
        None => icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mod_path() {
        assert_eq!(
            normalize_icon_path("__base__/graphics/icons/iron-plate.png"),
            "base/iron-plate"
        );
        assert_eq!(
            normalize_icon_path("__space-age__/icons/fluid/crude-oil.png"),
            "space-age/crude-oil"
        );
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_icon_path("base/iron-plate"), "base/iron-plate");
    }

    #[test]
    fn test_get_and_slice() {
        let mut sheet = SpriteSheet::new(2048, 2048);
        sheet.insert("__base__/graphics/icons/iron-plate.png", 100, 200, 120, 64);

        // whole-image and mod-path-normalized lookup agree
        let region = sheet.get("base/iron-plate").unwrap();
        assert_eq!(
            region,
            TextureRegion {
                x: 100,
                y: 200,
                width: 120,
                height: 64,
            }
        );

        let slice = sheet
            .get_slice("__base__/graphics/icons/iron-plate.png", 96, 0, 32, 32)
            .unwrap();
        assert_eq!(
            slice,
            TextureRegion {
                x: 196,
                y: 200,
                width: 32,
                height: 32,
            }
        );
    }

    #[test]
    fn test_missing_entry() {
        let sheet = SpriteSheet::new(64, 64);
        assert!(sheet.get("nope").is_none());
        assert!(sheet.get_slice("nope", 0, 0, 32, 32).is_none());
    }
}
