// src/models/data_model.rs
// the JSON-based game data model: items, fluids, recipes, signals and
// inventory groups, plus the ordered lookup used by the icon resolver

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use std::fs;
use std::path::Path;

use std::error::Error;
use thiserror::Error as ThisError;

/// Shared icon attributes carried by every record kind.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IconDef {
    pub icon: Option<String>,
    pub icons: Option<Vec<IconLayer>>,
    pub icon_size: Option<u32>,
    pub icon_mipmaps: Option<u32>,
    pub dark_background_icon: Option<String>,
}

/// One layer of a composite icon. Size and mipmap count fall back to
/// the owning record's defaults when absent.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IconLayer {
    pub icon: String,
    pub icon_size: Option<u32>,
    pub icon_mipmaps: Option<u32>,
    pub scale: Option<f32>,
    pub shift: Option<[f32; 2]>,
    pub tint: Option<TintSpec>,
}

/// RGBA tint, channels in 0.0..=1.0. Missing channels default to 0,
/// missing alpha to 1.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TintSpec {
    pub r: Option<f32>,
    pub g: Option<f32>,
    pub b: Option<f32>,
    pub a: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(flatten)]
    pub icon: IconDef,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Fluid {
    pub name: String,
    #[serde(flatten)]
    pub icon: IconDef,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    #[serde(flatten)]
    pub icon: IconDef,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryGroup {
    pub name: String,
    #[serde(flatten)]
    pub icon: IconDef,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(flatten)]
    pub icon: IconDef,
    #[serde(default)]
    pub ingredients: Vec<IngredientOrResult>,
    #[serde(default)]
    pub results: Vec<IngredientOrResult>,
    /// Crafting time in seconds.
    #[serde(default = "default_recipe_time")]
    pub time: f64,
}

fn default_recipe_time() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientOrResult {
    pub name: String,
    pub amount: u32,
}

/// Errors surfaced by icon resolution.
#[derive(Debug, ThisError)]
pub enum IconError {
    #[error("no item, fluid, recipe, signal or group named `{0}`")]
    UnknownName(String),
    #[error("`{0}` has no usable icon")]
    MissingIcon(String),
    #[error("sprite sheet has no entry for `{0}`")]
    MissingSprite(String),
}

/// A resolved record reference, tagged by which table it came from.
#[derive(Debug, Clone, Copy)]
pub enum IconSource<'a> {
    Item(&'a Item),
    Fluid(&'a Fluid),
    Recipe(&'a Recipe),
    Signal(&'a Signal),
    Group(&'a InventoryGroup),
}

impl<'a> IconSource<'a> {
    pub fn icon_def(&self) -> &'a IconDef {
        match self {
            IconSource::Item(r) => &r.icon,
            IconSource::Fluid(r) => &r.icon,
            IconSource::Recipe(r) => &r.icon,
            IconSource::Signal(r) => &r.icon,
            IconSource::Group(r) => &r.icon,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            IconSource::Item(r) => &r.name,
            IconSource::Fluid(r) => &r.name,
            IconSource::Recipe(r) => &r.name,
            IconSource::Signal(r) => &r.name,
            IconSource::Group(r) => &r.name,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GameData {
    pub items: HashMap<String, Item>,
    pub fluids: HashMap<String, Fluid>,
    pub recipes: HashMap<String, Recipe>,
    pub signals: HashMap<String, Signal>,
    /// Inventory groups live in a list, not a keyed table.
    #[serde(default)]
    pub inventory_layout: Vec<InventoryGroup>,
}

impl GameData {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let data: GameData = serde_json::from_str(&content)?;
        Ok(data)
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Ordered lookup across the five tables: items, fluids, recipes,
    /// signals, inventory groups. First match wins.
    pub fn icon_source(&self, name: &str) -> Result<IconSource<'_>, IconError> {
        if let Some(r) = self.items.get(name) {
            return Ok(IconSource::Item(r));
        }
        if let Some(r) = self.fluids.get(name) {
            return Ok(IconSource::Fluid(r));
        }
        if let Some(r) = self.recipes.get(name) {
            return Ok(IconSource::Recipe(r));
        }
        if let Some(r) = self.signals.get(name) {
            return Ok(IconSource::Signal(r));
        }
        self.inventory_layout
            .iter()
            .find(|g| g.name == name)
            .map(IconSource::Group)
            .ok_or_else(|| IconError::UnknownName(name.to_string()))
    }
}
