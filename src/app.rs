use egui::vec2;

use crate::controller::SurfaceController;
use crate::input::{InputEvent, InputHandler};
use crate::layout::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::surface::SurfaceBuffer;

/// The eframe shell around the paint surface: allocates the canvas,
/// feeds pointer events to the controller and replays the retained
/// drawing every frame.
pub struct PaintApp {
    controller: SurfaceController,
    buffer: SurfaceBuffer,
    input: InputHandler,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut controller = SurfaceController::new();
        let mut buffer = SurfaceBuffer::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        controller.reset_surface(&mut buffer);

        Self {
            controller,
            buffer,
            input: InputHandler::new(),
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(
                    vec2(SURFACE_WIDTH, SURFACE_HEIGHT),
                    egui::Sense::click_and_drag(),
                );
                let canvas_rect = response.rect;

                for event in self.input.process_input(ctx, canvas_rect) {
                    match event {
                        InputEvent::PointerDown { pos } => {
                            self.controller.pointer_down(pos, &mut self.buffer);
                        }
                        InputEvent::PointerMove { pos } => {
                            self.controller.pointer_move(pos, &mut self.buffer);
                        }
                        InputEvent::PointerUp => self.controller.pointer_up(),
                    }
                }

                self.buffer.paint(&painter, canvas_rect.min);
            });
    }
}
