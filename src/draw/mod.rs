// src/draw/mod.rs
// The drawing helpers: bevel controls, icon resolution and the
// retained node tree they produce

pub mod controls;
pub mod icon;
pub mod node;
pub mod style;

pub use controls::{bordered_rect, control_face, shade_color};
pub use icon::{apply_tint, create_icon, create_recipe, icon_with_amount, mipmap_offset};
pub use node::{Content, Node, RoundedRectMask, ShapeCommand};
pub use style::{Styles, TextStyle};
