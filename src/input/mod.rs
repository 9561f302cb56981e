use egui::{Context, Event, PointerButton, Pos2, Rect};

pub mod router;

pub use router::route_event;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer input the canvas reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
    /// Mouse left the application window
    PointerLeave {
        last_known_location: InputLocation,
    },
}

/// Handles converting raw egui input into canvas [`InputEvent`]s.
///
/// Events are translated one for one in arrival order, so several moves
/// within a single frame each produce their own [`InputEvent::PointerMove`].
#[derive(Debug)]
pub struct InputHandler {
    /// Survives the pointer leaving the window
    last_known_pos: Option<Pos2>,
    held_buttons: Vec<PointerButton>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_known_pos: None,
            held_buttons: Vec::new(),
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let raw = ctx.input(|input| input.events.clone());
        self.process_events(&raw)
    }

    /// Translate raw egui events, keeping their order
    pub fn process_events(&mut self, raw: &[Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                Event::PointerMoved(pos) => {
                    self.last_known_pos = Some(*pos);
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(*pos),
                        held_buttons: self.held_buttons.clone(),
                    });
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    self.last_known_pos = Some(*pos);
                    let location = self.make_location(*pos);
                    if *pressed {
                        if !self.held_buttons.contains(button) {
                            self.held_buttons.push(*button);
                        }
                        events.push(InputEvent::PointerDown {
                            location,
                            button: *button,
                        });
                    } else {
                        self.held_buttons.retain(|b| b != button);
                        events.push(InputEvent::PointerUp {
                            location,
                            button: *button,
                        });
                    }
                }
                Event::PointerGone => {
                    // A release outside the window may never be reported
                    self.held_buttons.clear();
                    if let Some(pos) = self.last_known_pos {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: self.make_location(pos),
                        });
                    }
                }
                _ => {}
            }
        }

        events
    }
}
