#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod generator;
pub mod id_generator;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;

pub use app::PaintApp;
pub use brush::BrushType;
pub use config::PaintConfig;
pub use effect::{Anchor, EffectShape};
pub use error::{ConfigError, PaintError};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use scene::{Emission, Scene};
pub use state::AppState;
