pub mod sprite_sheet;

pub use sprite_sheet::{SheetEntry, SpriteSheet, TextureRegion};
