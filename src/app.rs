use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::brush::BrushType;
use crate::config::PaintConfig;
use crate::input::{self, InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::state::AppState;

pub struct PaintApp {
    config: PaintConfig,
    state: AppState,
    scene: Scene,
    renderer: Renderer,
    input: InputHandler,
    rng: StdRng,
}

impl PaintApp {
    /// Called once before the first frame. Nothing carries over from earlier
    /// sessions: the app always opens on the default brush and size.
    pub fn new(config: PaintConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state: AppState::new(BrushType::default(), config.default_brush_size),
            scene: Scene::with_max_shapes(config.max_shapes),
            renderer: Renderer::new(&config),
            input: InputHandler::new(egui::Rect::NOTHING),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn select_brush(&mut self, brush: BrushType) {
        self.state.select_brush(brush);
    }

    pub fn set_brush_size(&mut self, size: f32) {
        let size = self.config.clamp_brush_size(size);
        self.state.set_brush_size(size);
    }

    pub fn clear_canvas(&mut self) {
        let removed = self.scene.clear();
        log::info!("Canvas cleared: {} shapes removed", removed);
    }

    /// Feed one event through the router; returns the number of shapes added
    pub fn handle_event(&mut self, event: &InputEvent) -> usize {
        input::route_event(event, &mut self.state, &mut self.scene, &mut self.rng)
    }

    /// Read this frame's pointer input for the canvas occupying `canvas_rect`
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.handle_event(&event);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputLocation;
    use egui::{PointerButton, Pos2};

    fn seeded() -> PaintApp {
        PaintApp::new(PaintConfig {
            seed: Some(11),
            ..PaintConfig::default()
        })
    }

    #[test]
    fn test_starts_with_config_defaults() {
        let app = seeded();
        assert_eq!(app.state().brush(), BrushType::Foliage);
        assert_eq!(app.state().brush_size(), app.config().default_brush_size);
        assert!(app.scene().is_empty());
    }

    #[derive(Default)]
    struct MemoryStorage(std::collections::BTreeMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_choices_do_not_outlive_the_session() {
        use eframe::App as _;

        let mut app = seeded();
        app.select_brush(BrushType::Smoke);
        app.set_brush_size(70.0);
        let mut storage = MemoryStorage::default();
        app.save(&mut storage);
        assert!(storage.0.is_empty());

        let next = seeded();
        assert_eq!(next.state().brush(), BrushType::Foliage);
        assert_eq!(next.state().brush_size(), next.config().default_brush_size);
    }

    #[test]
    fn test_brush_size_clamped_to_slider() {
        let mut app = seeded();
        app.set_brush_size(1000.0);
        assert_eq!(app.state().brush_size(), app.config().max_brush_size);
    }

    #[test]
    fn test_same_seed_same_canvas() {
        let press = InputEvent::PointerDown {
            location: InputLocation {
                position: Pos2::new(30.0, 30.0),
                is_in_canvas: true,
            },
            button: PointerButton::Primary,
        };
        let mut a = seeded();
        let mut b = seeded();
        a.handle_event(&press);
        b.handle_event(&press);
        assert_eq!(a.scene().shapes(), b.scene().shapes());
    }
}
