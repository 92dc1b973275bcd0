// src/draw/node.rs
// The retained drawable tree produced by the control/icon helpers and
// consumed by the node renderer.
//
// Types in this module:
// ShapeCommand, RoundedRectMask, Content, and Node

use nannou::prelude::*;

use crate::draw::style::TextStyle;
use crate::services::TextureRegion;

// ShapeCommand is a single pre-processed drawing operation. Geometry is
// in local node space: top-left origin, y down, like the host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeCommand {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: u32,
        alpha: f32,
    },
    StrokePath {
        points: Vec<Point2>,
        weight: f32,
        color: u32,
        alpha: f32,
    },
}

/// Rounded-rect clip bounds, carried as data on the node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectMask {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub enum Content {
    Shapes(Vec<ShapeCommand>),
    Sprite(TextureRegion),
    Text { text: String, style: TextStyle },
    Group(Vec<Node>),
}

// A Node is stateless after creation except for the position, scale and
// tint its producing call sets. Attachment to a host is the explicit
// `push` below; nothing here mutates a node after handing it out.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Point2,
    pub scale: Vec2,
    /// Anchor in 0..=1 of the node's own extent; (0.5, 0.5) centers the
    /// drawable on its position.
    pub anchor: Vec2,
    pub alpha: f32,
    /// Multiplicative tint, packed 0xRRGGBB.
    pub tint: Option<u32>,
    pub mask: Option<RoundedRectMask>,
    /// Visual content is immutable after creation; the renderer may
    /// rasterize and cache this subtree.
    pub cache_hint: bool,
    pub content: Content,
}

impl Node {
    pub fn new(content: Content) -> Self {
        Self {
            position: pt2(0.0, 0.0),
            scale: vec2(1.0, 1.0),
            anchor: vec2(0.0, 0.0),
            alpha: 1.0,
            tint: None,
            mask: None,
            cache_hint: false,
            content,
        }
    }

    pub fn group() -> Self {
        Self::new(Content::Group(Vec::new()))
    }

    /// Attach a child. Only group nodes host children.
    pub fn push(&mut self, child: Node) {
        debug_assert!(matches!(self.content, Content::Group(_)));
        if let Content::Group(children) = &mut self.content {
            children.push(child);
        }
    }

    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Group(children) => children,
            _ => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Scaled extent of the node's own drawable. Meaningful for sprites
    /// (texture size times scale); groups and shapes report zero.
    pub fn size(&self) -> Vec2 {
        match &self.content {
            Content::Sprite(region) => vec2(
                region.width as f32 * self.scale.x,
                region.height as f32 * self.scale.y,
            ),
            _ => Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_child_count() {
        let mut group = Node::group();
        group.push(Node::group());
        group.push(Node::new(Content::Shapes(vec![])));
        assert_eq!(group.child_count(), 2);
    }

    #[test]
    fn test_sprite_size_tracks_scale() {
        let mut sprite = Node::new(Content::Sprite(TextureRegion {
            x: 0,
            y: 0,
            width: 64,
            height: 32,
        }));
        assert_eq!(sprite.size(), vec2(64.0, 32.0));
        sprite.scale = vec2(0.5, 0.5);
        assert_eq!(sprite.size(), vec2(32.0, 16.0));
    }
}
