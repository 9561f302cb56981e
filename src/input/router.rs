use egui::{PointerButton, Pos2};
use rand::Rng;

use crate::scene::{Emission, Scene};
use crate::state::AppState;

use super::InputEvent;

/// Routes one input event through the stroke state machine.
///
/// Returns the number of shapes added to the scene.
pub fn route_event<R: Rng + ?Sized>(
    event: &InputEvent,
    state: &mut AppState,
    scene: &mut Scene,
    rng: &mut R,
) -> usize {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } if location.is_in_canvas => {
            state.begin_stroke();
            emit(location.position, state, scene, rng)
        }
        InputEvent::PointerMove {
            location,
            held_buttons,
        } if state.is_drawing()
            && location.is_in_canvas
            && held_buttons.contains(&PointerButton::Primary) =>
        {
            emit(location.position, state, scene, rng)
        }
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            ..
        } => {
            state.end_stroke();
            0
        }
        // The release may happen outside the window where it cannot be seen
        InputEvent::PointerLeave { .. } => {
            state.end_stroke();
            0
        }
        _ => 0,
    }
}

fn emit<R: Rng + ?Sized>(pos: Pos2, state: &mut AppState, scene: &mut Scene, rng: &mut R) -> usize {
    match scene.emit(state.brush(), pos, state.brush_size(), rng) {
        Emission::Added(count) => {
            state.record_emission(count);
            count
        }
        Emission::Capped => {
            if state.mark_capped() {
                log::warn!(
                    "Canvas holds {} shapes (limit {:?}); clear it to keep painting",
                    scene.len(),
                    scene.max_shapes()
                );
            }
            0
        }
    }
}
