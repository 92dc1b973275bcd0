// src/lib.rs

pub mod config;
pub mod draw;
pub mod models;
pub mod render;
pub mod services;

pub use draw::{Node, Styles};
pub use models::{GameData, IconError};
pub use services::SpriteSheet;
