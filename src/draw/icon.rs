// src/draw/icon.rs
// icon resolution from game records + the sprite sheet, and the small
// composers built on it: icon-with-amount and the recipe row

use nannou::prelude::*;

use crate::draw::node::{Content, Node};
use crate::draw::style::Styles;
use crate::models::{GameData, IconError, IconLayer, IngredientOrResult, TintSpec};
use crate::services::SpriteSheet;

/// Cell size sliced out of a mipmap strip.
pub const ICON_EXTRACT_SIZE: u32 = 32;
/// Source icon size assumed when a mipmapped record doesn't declare one.
const DEFAULT_ICON_SIZE: u32 = 64;

/// Horizontal pixel offset of the `target_size` level within a mipmap
/// strip packed largest-level-first, left to right: the widths of every
/// level wider than the target, i.e. 2^i for i in (log2(target),
/// log2(size)].
pub fn mipmap_offset(icon_size: u32, target_size: u32) -> u32 {
    if icon_size == 0 || target_size == 0 {
        return 0;
    }
    let hi = icon_size.ilog2();
    let lo = target_size.ilog2();
    if hi <= lo {
        return 0;
    }
    (lo + 1..=hi).map(|i| 1u32 << i).sum()
}

/// Resolve `name` across the game-data tables and build its icon
/// drawable: a single sprite, or a group of layered sprites for
/// composite icons. `set_anchor` centers each sprite on its own origin;
/// `dark_background` prefers the dark-background alternate if the
/// record has one.
pub fn create_icon(
    data: &GameData,
    sheet: &SpriteSheet,
    name: &str,
    set_anchor: bool,
    dark_background: bool,
) -> Result<Node, IconError> {
    let source = data.icon_source(name)?;
    let def = source.icon_def();

    if def.icon.is_some() || def.dark_background_icon.is_some() {
        let icon = if dark_background {
            def.dark_background_icon.as_deref().or(def.icon.as_deref())
        } else {
            def.icon.as_deref()
        }
        .ok_or_else(|| IconError::MissingIcon(name.to_string()))?;
        return sprite_for(sheet, icon, def.icon_size, def.icon_mipmaps, set_anchor);
    }

    if let Some(layers) = &def.icons {
        return layered_icon(sheet, layers, def.icon_size, def.icon_mipmaps, set_anchor);
    }

    Err(IconError::MissingIcon(name.to_string()))
}

/// One sprite from the sheet. Mipmapped icons slice a fixed-size cell
/// out of the strip at the computed level offset; everything else is a
/// whole-image fetch.
fn sprite_for(
    sheet: &SpriteSheet,
    icon: &str,
    icon_size: Option<u32>,
    icon_mipmaps: Option<u32>,
    set_anchor: bool,
) -> Result<Node, IconError> {
    let region = match icon_mipmaps {
        Some(mips) if mips > 0 => {
            let size = icon_size.unwrap_or(DEFAULT_ICON_SIZE);
            let x_offset = mipmap_offset(size, ICON_EXTRACT_SIZE);
            sheet.get_slice(icon, x_offset, 0, ICON_EXTRACT_SIZE, ICON_EXTRACT_SIZE)
        }
        _ => sheet.get(icon),
    }
    .ok_or_else(|| IconError::MissingSprite(icon.to_string()))?;

    let mut node = Node::new(Content::Sprite(region));
    if set_anchor {
        node.anchor = vec2(0.5, 0.5);
    }
    Ok(node)
}

fn layered_icon(
    sheet: &SpriteSheet,
    layers: &[IconLayer],
    default_size: Option<u32>,
    default_mipmaps: Option<u32>,
    set_anchor: bool,
) -> Result<Node, IconError> {
    let mut group = Node::group();
    for layer in layers {
        let icon_size = layer.icon_size.or(default_size);
        let icon_mipmaps = layer.icon_mipmaps.or(default_mipmaps);
        let mut sprite = sprite_for(sheet, &layer.icon, icon_size, icon_mipmaps, set_anchor)?;

        if let Some(scale) = layer.scale {
            sprite.scale = vec2(scale, scale);
        }
        if let Some([shift_x, shift_y]) = layer.shift {
            sprite.position = pt2(shift_x, shift_y);
        }
        if let Some(tint) = &layer.tint {
            apply_tint(&mut sprite, tint);
        }

        // top-left-anchored layers still position shift-relative
        if !set_anchor && layer.shift.is_some() {
            let size = sprite.size();
            sprite.position.x += size.x / 2.0;
            sprite.position.y += size.y / 2.0;
        }

        group.push(sprite);
    }
    Ok(group)
}

/// Multiplicative tint + alpha, applied in place. Missing channels
/// default to 0, missing alpha to 1.
pub fn apply_tint(node: &mut Node, tint: &TintSpec) {
    let byte = |c: Option<f32>| ((c.unwrap_or(0.0) * 255.0).round() as u32).min(255);
    node.tint = Some((byte(tint.r) << 16) | (byte(tint.g) << 8) | byte(tint.b));
    node.alpha = tint.a.unwrap_or(1.0);
}

fn format_amount(amount: u32) -> String {
    if amount < 1000 {
        amount.to_string()
    } else {
        format!("{}k", amount / 1000)
    }
}

/// An icon at (x, y) plus its quantity label anchored at the icon
/// cell's bottom-right corner. Attaches two children to `host`.
pub fn icon_with_amount(
    host: &mut Node,
    data: &GameData,
    sheet: &SpriteSheet,
    styles: &Styles,
    x: f32,
    y: f32,
    name: &str,
    amount: u32,
) -> Result<(), IconError> {
    let mut icon = create_icon(data, sheet, name, false, false)?;
    icon.position = pt2(x, y);
    host.push(icon);

    let mut label = Node::new(Content::Text {
        text: format_amount(amount),
        style: styles.icon_amount.clone(),
    });
    label.anchor = vec2(1.0, 1.0);
    label.position = pt2(x + 33.0, y + 33.0);
    host.push(label);
    Ok(())
}

/// One recipe row on `host`: ingredient icons at a 36px pitch, the
/// `=<time>s>` label, then result icons. Single row, no wrapping.
pub fn create_recipe(
    host: &mut Node,
    data: &GameData,
    sheet: &SpriteSheet,
    styles: &Styles,
    x: f32,
    y: f32,
    ingredients: &[IngredientOrResult],
    results: &[IngredientOrResult],
    time: f64,
) -> Result<(), IconError> {
    let mut next_x = x;

    for ingredient in ingredients {
        icon_with_amount(
            host,
            data,
            sheet,
            styles,
            next_x,
            y,
            &ingredient.name,
            ingredient.amount,
        )?;
        next_x += 36.0;
    }

    next_x += 2.0;
    let time_text = format!("={}s>", time);
    let time_width = styles.dialog_label.measure(&time_text);
    let mut time_label = Node::new(Content::Text {
        text: time_text,
        style: styles.dialog_label.clone(),
    });
    time_label.position = pt2(next_x, y + 6.0);
    host.push(time_label);
    next_x += time_width + 6.0;

    for result in results {
        icon_with_amount(
            host,
            data,
            sheet,
            styles,
            next_x,
            y,
            &result.name,
            result.amount,
        )?;
        next_x += 36.0;
    }
    Ok(())
}
