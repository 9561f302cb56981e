mod brush_button;

pub use brush_button::BrushButton;
