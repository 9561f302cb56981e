use egui::Pos2;
use rand::Rng;

use crate::brush::BrushType;
use crate::effect::EffectShape;
use crate::generator;
use crate::id_generator::IdGenerator;

/// Outcome of trying to add a batch to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The batch was appended; holds the number of new shapes
    Added(usize),
    /// The shape cap would be exceeded, nothing was added
    Capped,
}

/// Owns every shape drawn on the canvas.
///
/// Shapes are only ever appended in whole batches or removed all at once.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<EffectShape>,
    ids: IdGenerator,
    max_shapes: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that refuses batches once it would hold more than `max_shapes`
    pub fn with_max_shapes(max_shapes: Option<usize>) -> Self {
        Self {
            max_shapes,
            ..Self::default()
        }
    }

    /// Generate one batch for `brush` at `pos` and append it
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        brush: BrushType,
        pos: Pos2,
        brush_size: f32,
        rng: &mut R,
    ) -> Emission {
        if let Some(max) = self.max_shapes {
            if self.shapes.len() + brush.batch_size() > max {
                return Emission::Capped;
            }
        }

        let batch = generator::generate(brush, pos, brush_size, rng, &mut self.ids);
        let count = batch.len();
        log::debug!("{} batch of {} at ({:.1}, {:.1})", brush, count, pos.x, pos.y);
        self.shapes.extend(batch);
        Emission::Added(count)
    }

    /// Remove every shape. Ids are not reused afterwards.
    pub fn clear(&mut self) -> usize {
        let removed = self.shapes.len();
        self.shapes.clear();
        removed
    }

    pub fn shapes(&self) -> &[EffectShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn max_shapes(&self) -> Option<usize> {
        self.max_shapes
    }
}
