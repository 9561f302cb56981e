use crate::brush::BrushType;

pub const DEFAULT_BRUSH_SIZE: f32 = 30.0;

/// Whether the primary button is held down on the canvas
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing {
        /// Shapes added since the stroke began
        emitted: usize,
        /// Set once the shape cap has been hit during this stroke
        capped: bool,
    },
}

/// Everything the input router needs to know about the user's choices.
///
/// Lives for one session only; every launch starts from the defaults.
#[derive(Debug, Clone)]
pub struct AppState {
    brush: BrushType,
    brush_size: f32,
    stroke: StrokeState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            brush: BrushType::default(),
            brush_size: DEFAULT_BRUSH_SIZE,
            stroke: StrokeState::Idle,
        }
    }
}

impl AppState {
    pub fn new(brush: BrushType, brush_size: f32) -> Self {
        Self {
            brush,
            brush_size,
            stroke: StrokeState::Idle,
        }
    }

    pub fn brush(&self) -> BrushType {
        self.brush
    }

    pub fn select_brush(&mut self, brush: BrushType) {
        if self.brush != brush {
            log::info!("Brush selected: {}", brush);
        }
        self.brush = brush;
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size;
    }

    /// Mutable access for the size slider
    pub fn brush_size_mut(&mut self) -> &mut f32 {
        &mut self.brush_size
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    /// Enter the drawing state. A second pointer-down restarts the count.
    pub fn begin_stroke(&mut self) {
        log::info!("Stroke started with {} brush", self.brush);
        self.stroke = StrokeState::Drawing {
            emitted: 0,
            capped: false,
        };
    }

    /// Leave the drawing state and return how many shapes the stroke added
    pub fn end_stroke(&mut self) -> Option<usize> {
        match std::mem::take(&mut self.stroke) {
            StrokeState::Drawing { emitted, .. } => {
                log::info!("Stroke finished: {} shapes", emitted);
                Some(emitted)
            }
            StrokeState::Idle => None,
        }
    }

    /// Record shapes emitted by the current stroke
    pub fn record_emission(&mut self, count: usize) {
        if let StrokeState::Drawing { emitted, .. } = &mut self.stroke {
            *emitted += count;
        }
    }

    /// Mark the current stroke as capped. Returns true the first time only.
    pub fn mark_capped(&mut self) -> bool {
        match &mut self.stroke {
            StrokeState::Drawing { capped, .. } if !*capped => {
                *capped = true;
                true
            }
            _ => false,
        }
    }
}
