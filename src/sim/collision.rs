//! Collision detection
//!
//! Axis-aligned box tests over scaled sprite bounds. The text-region variant
//! is deliberately asymmetric: it doubles as the menu input mechanism (a
//! fired shot "presses" a label by overlapping it), and its one-sided bound
//! logic matches the way label anchors sit on the text baseline.

use glam::Vec2;

use super::entity::Sprite;
use crate::assets::FontHandle;

/// Screen-space bounding box of a rendered text label
///
/// `pos` is the label anchor: left edge and *baseline*; the box extends
/// upward by `size.y`.
#[derive(Debug, Clone, Copy)]
pub struct TextRegion {
    pub pos: Vec2,
    pub size: Vec2,
    pub font: FontHandle,
}

/// Scaled-AABB overlap test with an inward shrink margin
///
/// `margin` shrinks both boxes on all sides before the test; positive values
/// require deeper penetration before a hit registers.
pub fn overlaps(a: &Sprite, b: &Sprite, margin: f32) -> bool {
    let a_size = a.scaled_size();
    let b_size = b.scaled_size();

    let collision_x = a.pos.x + a_size.x - margin >= b.pos.x + margin
        && b.pos.x + b_size.x - margin >= a.pos.x + margin;
    let collision_y = a.pos.y + a_size.y - margin >= b.pos.y + margin
        && b.pos.y + b_size.y - margin >= a.pos.y + margin;

    collision_x && collision_y
}

/// Object-vs-label test: the object's full scaled box against the label's
/// unscaled, baseline-anchored box
pub fn overlaps_text(object: &Sprite, text: &TextRegion) -> bool {
    let size = object.scaled_size();

    let collision_x =
        object.pos.x + size.x >= text.pos.x && text.pos.x + text.size.x >= object.pos.x;
    let collision_y =
        object.pos.y + size.y >= text.pos.y - text.size.y && text.pos.y >= object.pos.y;

    collision_x && collision_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureHandle;
    use proptest::prelude::*;

    fn sprite(x: f32, y: f32, w: f32, h: f32, scale: f32) -> Sprite {
        let mut s = Sprite::new(TextureHandle {
            id: 0,
            width: w,
            height: h,
        });
        s.pos = Vec2::new(x, y);
        s.scale = scale;
        s
    }

    fn region(x: f32, y: f32, w: f32, h: f32) -> TextRegion {
        TextRegion {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            font: FontHandle { id: 0, size: 48 },
        }
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = sprite(0.0, 0.0, 100.0, 100.0, 1.0);
        let b = sprite(50.0, 50.0, 100.0, 100.0, 1.0);
        assert!(overlaps(&a, &b, 0.0));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = sprite(0.0, 0.0, 100.0, 100.0, 1.0);
        let b = sprite(200.0, 0.0, 100.0, 100.0, 1.0);
        assert!(!overlaps(&a, &b, 0.0));
    }

    #[test]
    fn test_scale_grows_the_box() {
        let a = sprite(0.0, 0.0, 100.0, 100.0, 1.0);
        let b = sprite(150.0, 0.0, 100.0, 100.0, 1.0);
        assert!(!overlaps(&a, &b, 0.0));

        let a_scaled = sprite(0.0, 0.0, 100.0, 100.0, 2.0);
        assert!(overlaps(&a_scaled, &b, 0.0));
    }

    #[test]
    fn test_margin_requires_penetration() {
        // Boxes grazing by a sliver on x
        let a = sprite(0.0, 0.0, 100.0, 100.0, 1.0);
        let b = sprite(99.9, 0.0, 100.0, 100.0, 1.0);
        assert!(overlaps(&a, &b, 0.0));
        assert!(!overlaps(&a, &b, 0.2));
    }

    #[test]
    fn test_text_box_extends_upward() {
        // Label anchored at baseline y=500, height 48: occupies y in [452, 500]
        let label = region(250.0, 500.0, 300.0, 48.0);

        let above = sprite(300.0, 400.0, 28.0, 28.0, 1.0);
        assert!(!overlaps_text(&above, &label));

        let inside = sprite(300.0, 460.0, 28.0, 28.0, 1.0);
        assert!(overlaps_text(&inside, &label));

        // Object starting below the baseline misses
        let below = sprite(300.0, 501.0, 28.0, 28.0, 1.0);
        assert!(!overlaps_text(&below, &label));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..2000.0, ay in -500.0f32..1200.0,
            bx in -500.0f32..2000.0, by in -500.0f32..1200.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = sprite(ax, ay, aw, ah, 1.0);
            let b = sprite(bx, by, bw, bh, 1.0);
            prop_assert_eq!(overlaps(&a, &b, 0.0), overlaps(&b, &a, 0.0));
        }

        #[test]
        fn margin_only_shrinks(
            ax in 0.0f32..1600.0, ay in 0.0f32..900.0,
            bx in 0.0f32..1600.0, by in 0.0f32..900.0,
            margin in 0.0f32..10.0,
        ) {
            let a = sprite(ax, ay, 100.0, 100.0, 1.0);
            let b = sprite(bx, by, 100.0, 100.0, 1.0);
            // A hit under a positive margin implies a hit with none
            if overlaps(&a, &b, margin) {
                prop_assert!(overlaps(&a, &b, 0.0));
            }
        }
    }
}
