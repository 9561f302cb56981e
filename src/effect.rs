use egui::{Color32, Pos2, Rect, Vec2};

use crate::brush::BrushType;
use crate::id_generator::ShapeId;

/// Which point of a shape's bounding box sits at `origin + offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    /// Used by flames so they rise from the cursor
    BottomCenter,
}

/// One soft translucent ellipse on the canvas.
///
/// Shapes are immutable once created. The fill is a radial gradient from
/// [`EffectShape::fill`] at the gradient center to transparent at the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectShape {
    id: ShapeId,
    brush: BrushType,
    origin: Pos2,
    offset: Vec2,
    size: Vec2,
    anchor: Anchor,
    color: Color32,
    alpha: u8,
    gradient_center: Vec2,
}

impl EffectShape {
    /// Create a shape emitted at `origin`.
    ///
    /// `color` is the opaque palette entry; `alpha` is applied separately so
    /// the palette entry stays recoverable.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ShapeId,
        brush: BrushType,
        origin: Pos2,
        offset: Vec2,
        size: Vec2,
        anchor: Anchor,
        color: Color32,
        alpha: u8,
    ) -> Self {
        Self {
            id,
            brush,
            origin,
            offset,
            size,
            anchor,
            color,
            alpha,
            gradient_center: brush.gradient_center(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn brush(&self) -> BrushType {
        self.brush
    }

    /// The cursor position this shape was emitted at
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// Randomized displacement from the cursor
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Opaque palette color
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Translucent color at the opaque end of the gradient
    pub fn fill(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.color.r(), self.color.g(), self.color.b(), self.alpha)
    }

    pub fn gradient_center(&self) -> Vec2 {
        self.gradient_center
    }

    /// Point the anchor is pinned to
    pub fn anchor_pos(&self) -> Pos2 {
        self.origin + self.offset
    }

    /// Bounding box of the ellipse in canvas coordinates
    pub fn rect(&self) -> Rect {
        let anchor = self.anchor_pos();
        let min = match self.anchor {
            Anchor::Center => anchor - self.size / 2.0,
            Anchor::BottomCenter => anchor - Vec2::new(self.size.x / 2.0, self.size.y),
        };
        Rect::from_min_size(min, self.size)
    }

    /// Absolute position of the gradient's opaque point
    pub fn gradient_pos(&self) -> Pos2 {
        let rect = self.rect();
        rect.min + rect.size() * self.gradient_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::IdGenerator;

    fn shape(anchor: Anchor, brush: BrushType) -> EffectShape {
        EffectShape::new(
            IdGenerator::new().generate_id(),
            brush,
            Pos2::new(100.0, 100.0),
            Vec2::new(10.0, -20.0),
            Vec2::new(20.0, 40.0),
            anchor,
            Color32::from_rgb(231, 76, 60),
            150,
        )
    }

    #[test]
    fn test_center_anchor_rect() {
        let s = shape(Anchor::Center, BrushType::Smoke);
        let rect = s.rect();
        assert_eq!(rect.center(), Pos2::new(110.0, 80.0));
        assert_eq!(rect.size(), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_bottom_center_anchor_rect() {
        let s = shape(Anchor::BottomCenter, BrushType::Fire);
        let rect = s.rect();
        assert_eq!(rect.max.y, 80.0);
        assert_eq!(rect.center().x, 110.0);
        assert_eq!(rect.min.y, 40.0);
    }

    #[test]
    fn test_fire_gradient_sits_low() {
        let s = shape(Anchor::BottomCenter, BrushType::Fire);
        let rect = s.rect();
        let g = s.gradient_pos();
        assert_eq!(g.x, rect.center().x);
        assert!(g.y > rect.center().y);
    }

    #[test]
    fn test_fill_keeps_alpha() {
        let s = shape(Anchor::Center, BrushType::Fire);
        assert_eq!(s.fill().a(), 150);
        assert_eq!(s.color().a(), 255);
    }
}
