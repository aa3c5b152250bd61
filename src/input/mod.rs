use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in surface coordinates, the only input the controller
/// understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the window
    PointerDown { pos: Pos2 },
    /// Pointer moved with the primary button held
    PointerMove { pos: Pos2 },
    /// Primary button released, wherever the pointer ended up
    PointerUp,
}

/// Converts raw egui input into surface-local pointer events.
///
/// Only the primary button drives the paint surface. A release is reported
/// even when egui no longer knows the pointer position (released outside
/// the window), so a drag always ends.
pub struct InputHandler {
    last_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self { last_pos: None }
    }

    /// Process this frame's raw input. `canvas_rect` is where the surface
    /// sits on screen; emitted positions are relative to its top-left
    /// corner.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let pressed = input.pointer.button_pressed(PointerButton::Primary);

            if pressed {
                if let Some(pos) = hover {
                    events.push(InputEvent::PointerDown {
                        pos: pos - canvas_rect.min.to_vec2(),
                    });
                }
            }

            if let Some(pos) = hover {
                // A drag reports motion only after the press, so a frame
                // that carries both the press and a position change emits
                // just the press.
                if Some(pos) != self.last_pos
                    && !pressed
                    && input.pointer.button_down(PointerButton::Primary)
                {
                    events.push(InputEvent::PointerMove {
                        pos: pos - canvas_rect.min.to_vec2(),
                    });
                }
                self.last_pos = Some(pos);
            } else {
                self.last_pos = None;
            }

            if input.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::PointerUp);
            }
        });

        events
    }
}
