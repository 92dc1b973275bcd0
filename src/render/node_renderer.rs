// src/render/node_renderer.rs
// Walks a Node tree and issues nannou draw calls. The tree uses
// top-left y-down coordinates; everything is converted to nannou's
// centered y-up space here.

use nannou::geom;
use nannou::prelude::*;

use crate::draw::node::{Content, Node, RoundedRectMask, ShapeCommand};
use crate::draw::style::TextStyle;

#[derive(Debug, Clone, Copy)]
struct RenderContext {
    /// nannou-space location of the current node's local (0, 0).
    origin: Point2,
    scale: Vec2,
    alpha: f32,
    tint: Option<u32>,
}

/// Draw `node` with its local (0, 0) at `origin` (nannou coordinates).
/// Sprites sample sub-areas of the sheet texture; `sheet_size` is the
/// sheet image's pixel dimensions.
pub fn draw_node(
    draw: &Draw,
    node: &Node,
    origin: Point2,
    sheet_texture: &wgpu::Texture,
    sheet_size: (u32, u32),
) {
    let context = RenderContext {
        origin,
        scale: vec2(1.0, 1.0),
        alpha: 1.0,
        tint: None,
    };
    draw_node_inner(draw, node, &context, sheet_texture, sheet_size);
}

fn draw_node_inner(
    draw: &Draw,
    node: &Node,
    parent: &RenderContext,
    sheet_texture: &wgpu::Texture,
    sheet_size: (u32, u32),
) {
    let context = RenderContext {
        origin: parent.origin
            + vec2(
                node.position.x * parent.scale.x,
                -node.position.y * parent.scale.y, // invert y for nannou
            ),
        scale: parent.scale * node.scale,
        alpha: parent.alpha * node.alpha,
        tint: node.tint.or(parent.tint),
    };

    match &node.content {
        Content::Group(children) => {
            for child in children {
                draw_node_inner(draw, child, &context, sheet_texture, sheet_size);
            }
        }
        Content::Shapes(shapes) => {
            for command in shapes {
                draw_shape(draw, command, &context, node.mask.as_ref());
            }
        }
        Content::Sprite(region) => {
            let size = vec2(
                region.width as f32 * context.scale.x,
                region.height as f32 * context.scale.y,
            );
            let center = anchored_center(&context, node.anchor, size);
            let (sheet_w, sheet_h) = sheet_size;
            let area = geom::Rect::from_corners(
                pt2(
                    region.x as f32 / sheet_w as f32,
                    region.y as f32 / sheet_h as f32,
                ),
                pt2(
                    (region.x + region.width) as f32 / sheet_w as f32,
                    (region.y + region.height) as f32 / sheet_h as f32,
                ),
            );
            // the texture primitive carries no color multiply; tint and
            // alpha composite onto shapes and text only
            draw.texture(sheet_texture)
                .xy(center)
                .w_h(size.x, size.y)
                .area(area);
        }
        Content::Text { text, style } => draw_text(draw, text, style, node, &context),
    }
}

fn draw_shape(
    draw: &Draw,
    command: &ShapeCommand,
    context: &RenderContext,
    mask: Option<&RoundedRectMask>,
) {
    match command {
        ShapeCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        } => {
            let (mut x0, mut y0) = (*x, *y);
            let (mut x1, mut y1) = (x + width, y + height);
            if let Some(mask) = mask {
                // scissor approximation of the mask bounds
                x0 = x0.max(0.0);
                y0 = y0.max(0.0);
                x1 = x1.min(mask.width);
                y1 = y1.min(mask.height);
                if x1 <= x0 || y1 <= y0 {
                    return;
                }
            }
            let center = context.origin
                + vec2(
                    (x0 + x1) * 0.5 * context.scale.x,
                    -((y0 + y1) * 0.5 * context.scale.y),
                );
            draw.rect()
                .xy(center)
                .w_h((x1 - x0) * context.scale.x, (y1 - y0) * context.scale.y)
                .color(packed_rgba(*color, alpha * context.alpha, context.tint));
        }
        ShapeCommand::StrokePath {
            points,
            weight,
            color,
            alpha,
        } => {
            let color = packed_rgba(*color, alpha * context.alpha, context.tint);
            let map = |p: &Point2| {
                context.origin + vec2(p.x * context.scale.x, -p.y * context.scale.y)
            };
            for window in points.windows(2) {
                if let [a, b] = window {
                    draw.line()
                        .start(map(a))
                        .end(map(b))
                        .stroke_weight(weight * context.scale.x)
                        .color(color);
                }
            }
        }
    }
}

fn draw_text(draw: &Draw, text: &str, style: &TextStyle, node: &Node, context: &RenderContext) {
    let width = style.measure(text);
    let size = vec2(
        width * context.scale.x,
        style.font_size as f32 * context.scale.y,
    );
    let center = anchored_center(context, node.anchor, size);
    let font_size = ((style.font_size as f32 * context.scale.x) as u32).max(1);
    draw.text(text)
        .font_size(font_size)
        .xy(center)
        .color(packed_rgba(style.color, context.alpha, context.tint));
}

/// nannou-space center of a drawable of `size` whose `anchor` point
/// sits on the node origin.
fn anchored_center(context: &RenderContext, anchor: Vec2, size: Vec2) -> Point2 {
    let offset = size * (vec2(0.5, 0.5) - anchor);
    context.origin + vec2(offset.x, -offset.y)
}

fn packed_rgba(color: u32, alpha: f32, tint: Option<u32>) -> Rgba {
    let unpack = |c: u32, shift: u32| ((c >> shift) & 0xff) as f32 / 255.0;
    let (mut r, mut g, mut b) = (unpack(color, 16), unpack(color, 8), unpack(color, 0));
    if let Some(tint) = tint {
        r *= unpack(tint, 16);
        g *= unpack(tint, 8);
        b *= unpack(tint, 0);
    }
    rgba(r, g, b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_rgba_unpacks_channels() {
        let color = packed_rgba(0xff8000, 0.5, None);
        assert_eq!(color.color.red, 1.0);
        assert!((color.color.green - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.color.blue, 0.0);
        assert_eq!(color.alpha, 0.5);
    }

    #[test]
    fn test_packed_rgba_applies_tint() {
        let color = packed_rgba(0xffffff, 1.0, Some(0x80ff00));
        assert!((color.color.red - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.color.green, 1.0);
        assert_eq!(color.color.blue, 0.0);
    }

    #[test]
    fn test_anchored_center_bottom_right() {
        let context = RenderContext {
            origin: pt2(100.0, 50.0),
            scale: vec2(1.0, 1.0),
            alpha: 1.0,
            tint: None,
        };
        // anchor (1, 1): drawable extends up-left of the origin
        let center = anchored_center(&context, vec2(1.0, 1.0), vec2(20.0, 10.0));
        assert_eq!(center, pt2(90.0, 55.0));
    }
}
