mod canvas_panel;
mod toolbar_panel;

pub use canvas_panel::canvas_panel;
pub use toolbar_panel::{button_colors, toolbar_panel};
