// src/draw/controls.rs
// bevel shading and the bordered-rectangle / control-face builders

use nannou::prelude::*;

use crate::draw::node::{Content, Node, RoundedRectMask, ShapeCommand};

// Shade percentages per bevel level: (top/left, bottom/right).
const RAISED_SHADES: [(f32, f32); 3] = [(22.5, -7.5), (20.0, -5.0), (17.5, -2.5)];
const PRESSED_SHADES: [(f32, f32); 3] = [(-12.5, 10.0), (-10.0, 7.5), (-7.5, 5.0)];

/// Lighten (positive percent) or darken (negative percent) a packed
/// 0xRRGGBB color. Each channel moves by round(2.55 * percent) and
/// clamps to 0..=255; the result carries the 0x1000000 flag bit.
pub fn shade_color(color: u32, percent: f32) -> u32 {
    let amt = (2.55 * percent).round() as i32;
    let channel = |shift: u32| ((color >> shift) & 0xff) as i32 + amt;
    let clamp = |c: i32| c.clamp(0, 255) as u32;
    0x0100_0000 + (clamp(channel(16)) << 16) + (clamp(channel(8)) << 8) + clamp(channel(0))
}

/// A filled rectangle with up to three nested one-pixel bevel outlines.
/// `border` is the outline count (0..=3, higher adds nothing); `pressed`
/// swaps which edges get the light and dark shades.
pub fn bordered_rect(
    width: f32,
    height: f32,
    background: u32,
    alpha: f32,
    border: u8,
    pressed: bool,
) -> Node {
    let mut shapes = vec![ShapeCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        color: background,
        alpha: 1.0,
    }];

    for level in 0..3u8 {
        if border <= level {
            break;
        }
        let inset = level as f32;
        let (light, dark) = if pressed {
            PRESSED_SHADES[level as usize]
        } else {
            RAISED_SHADES[level as usize]
        };
        // left + top edge
        shapes.push(ShapeCommand::StrokePath {
            points: vec![
                pt2(inset, height - inset),
                pt2(inset, inset),
                pt2(width - inset, inset),
            ],
            weight: 1.0,
            color: shade_color(background, light),
            alpha: 1.0,
        });
        // right + bottom edge
        shapes.push(ShapeCommand::StrokePath {
            points: vec![
                pt2(width - inset, inset),
                pt2(width - inset, height - inset),
                pt2(inset, height - inset),
            ],
            weight: 1.0,
            color: shade_color(background, dark),
            alpha: 1.0,
        });
    }

    let mut node = Node::new(Content::Shapes(shapes));
    node.alpha = alpha;
    node
}

/// A rounded, beveled button face. Drawn at `f` times the target
/// resolution and scaled back down so the one-unit border traces stay
/// crisp; the node is flagged cacheable so redraws of an unchanging
/// control are cheap. `shades` are the four border shade percentages,
/// brightest first: top/left outer, top/left inner, right/bottom inner,
/// right/bottom outer.
pub fn control_face(
    width: f32,
    height: f32,
    f: u32,
    background: u32,
    alpha: f32,
    shades: [f32; 4],
) -> Node {
    let f = f.max(1) as f32;
    let wf = width * f;
    let hf = height * f;
    let [p0, p1, p2, p3] = shades;

    let trace = |points: Vec<Point2>, percent: f32| ShapeCommand::StrokePath {
        points,
        weight: f,
        color: shade_color(background, percent),
        alpha,
    };

    let shapes = vec![
        ShapeCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: wf,
            height: hf,
            color: background,
            alpha,
        },
        // darkest outer right/bottom first, then inward, then the
        // brightest outer top/left on top
        trace(vec![pt2(wf, 0.0), pt2(wf, hf), pt2(0.0, hf)], p3),
        trace(vec![pt2(wf - f, f), pt2(wf - f, hf - f), pt2(f, hf - f)], p2),
        trace(vec![pt2(wf - f, f), pt2(f, f), pt2(f, hf - f)], p1),
        trace(vec![pt2(wf, 0.0), pt2(0.0, 0.0), pt2(0.0, hf)], p0),
    ];

    let mut node = Node::new(Content::Shapes(shapes));
    node.mask = Some(RoundedRectMask {
        width: wf,
        height: hf,
        radius: 6.0,
    });
    node.cache_hint = true;
    node.scale = vec2(1.0 / f, 1.0 / f);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(color: u32) -> (u32, u32, u32) {
        ((color >> 16) & 0xff, (color >> 8) & 0xff, color & 0xff)
    }

    mod shade_color_tests {
        use super::*;

        #[test]
        fn test_zero_percent_keeps_channels() {
            let shaded = shade_color(0x8a6b42, 0.0);
            assert_eq!(channels(shaded), (0x8a, 0x6b, 0x42));
            assert_eq!(shaded >> 24, 0x01);
        }

        #[test]
        fn test_full_lighten_saturates() {
            assert_eq!(channels(shade_color(0x123456, 100.0)), (255, 255, 255));
        }

        #[test]
        fn test_full_darken_floors() {
            assert_eq!(channels(shade_color(0xfedcba, -100.0)), (0, 0, 0));
        }

        #[test]
        fn test_partial_shade_is_additive() {
            // +10% -> +26 on every channel
            assert_eq!(channels(shade_color(0x404040, 10.0)), (0x5a, 0x5a, 0x5a));
        }
    }

    mod bordered_rect_tests {
        use super::*;

        fn shapes(node: &Node) -> &[ShapeCommand] {
            match &node.content {
                Content::Shapes(shapes) => shapes,
                _ => panic!("expected shape content"),
            }
        }

        #[test]
        fn test_no_border_draws_fill_only() {
            let node = bordered_rect(40.0, 20.0, 0x313031, 1.0, 0, false);
            let shapes = shapes(&node);
            assert_eq!(shapes.len(), 1);
            assert!(matches!(shapes[0], ShapeCommand::FillRect { .. }));
        }

        #[test]
        fn test_outline_count_per_level() {
            for border in 1..=3u8 {
                let node = bordered_rect(40.0, 20.0, 0x313031, 1.0, border, false);
                assert_eq!(shapes(&node).len(), 1 + 2 * border as usize);
            }
        }

        #[test]
        fn test_levels_above_three_add_nothing() {
            let three = bordered_rect(40.0, 20.0, 0x313031, 1.0, 3, false);
            let nine = bordered_rect(40.0, 20.0, 0x313031, 1.0, 9, false);
            assert_eq!(shapes(&three).len(), shapes(&nine).len());
        }

        #[test]
        fn test_pressed_swaps_shades() {
            let raised = bordered_rect(40.0, 20.0, 0x808080, 1.0, 1, false);
            let pressed = bordered_rect(40.0, 20.0, 0x808080, 1.0, 1, true);

            let edge_color = |node: &Node, idx: usize| match &shapes(node)[idx] {
                ShapeCommand::StrokePath { color, .. } => *color,
                _ => panic!("expected stroke"),
            };

            // raised: top/left lighter than background, bottom/right darker
            assert_eq!(edge_color(&raised, 1), shade_color(0x808080, 22.5));
            assert_eq!(edge_color(&raised, 2), shade_color(0x808080, -7.5));
            // pressed: reversed
            assert_eq!(edge_color(&pressed, 1), shade_color(0x808080, -12.5));
            assert_eq!(edge_color(&pressed, 2), shade_color(0x808080, 10.0));
        }

        #[test]
        fn test_alpha_lands_on_node() {
            let node = bordered_rect(40.0, 20.0, 0x313031, 0.75, 0, false);
            assert_eq!(node.alpha, 0.75);
        }
    }

    mod control_face_tests {
        use super::*;

        #[test]
        fn test_supersampled_geometry_and_downscale() {
            let node = control_face(36.0, 36.0, 2, 0x8a6b42, 1.0, [20.0, 10.0, -10.0, -20.0]);
            assert_eq!(node.scale, vec2(0.5, 0.5));
            assert!(node.cache_hint);

            let mask = node.mask.unwrap();
            assert_eq!(mask.width, 72.0);
            assert_eq!(mask.height, 72.0);
            assert_eq!(mask.radius, 6.0);

            match &node.content {
                Content::Shapes(shapes) => {
                    // one fill plus four border traces
                    assert_eq!(shapes.len(), 5);
                    match &shapes[0] {
                        ShapeCommand::FillRect { width, height, .. } => {
                            assert_eq!((*width, *height), (72.0, 72.0));
                        }
                        _ => panic!("expected fill first"),
                    }
                    for shape in &shapes[1..] {
                        match shape {
                            ShapeCommand::StrokePath { weight, .. } => assert_eq!(*weight, 2.0),
                            _ => panic!("expected border trace"),
                        }
                    }
                }
                _ => panic!("expected shape content"),
            }
        }

        #[test]
        fn test_trace_shades_in_order() {
            let shades = [20.0, 10.0, -10.0, -20.0];
            let node = control_face(10.0, 10.0, 1, 0x8a6b42, 1.0, shades);
            let expected = [-20.0, -10.0, 10.0, 20.0]; // p3 drawn first
            match &node.content {
                Content::Shapes(shapes) => {
                    for (shape, percent) in shapes[1..].iter().zip(expected) {
                        match shape {
                            ShapeCommand::StrokePath { color, .. } => {
                                assert_eq!(*color, shade_color(0x8a6b42, percent));
                            }
                            _ => panic!("expected border trace"),
                        }
                    }
                }
                _ => panic!("expected shape content"),
            }
        }
    }
}
