use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2, pos2, vec2};

/// The drawing surface the controller paints on. Mirrors a stateful 2D
/// canvas context: fill color, stroke color and line width are set once
/// and apply to subsequent calls.
pub trait DrawSurface {
    fn set_fill_color(&mut self, color: Color32);
    fn set_stroke_color(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn stroke_line(&mut self, from: Pos2, to: Pos2);
    fn draw_text(&mut self, text: &str, pos: Pos2);
}

/// One resolved drawing command, with the fill/stroke state already
/// applied. What tests inspect and what gets replayed onto the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect { rect: Rect, color: Color32 },
    StrokeRect { rect: Rect, stroke: Stroke },
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    Text { pos: Pos2, text: String, color: Color32 },
}

/// Retained implementation of [`DrawSurface`].
///
/// egui paints immediate-mode, so strokes committed in one frame would be
/// gone the next. The buffer keeps the controller's commands as a display
/// list and replays them every frame. A fill covering the whole surface
/// obscures everything under it, so it truncates the list instead of
/// growing it; this keeps Clear from leaking the old drawing.
pub struct SurfaceBuffer {
    size: Vec2,
    commands: Vec<DrawCmd>,
    fill_color: Color32,
    stroke_color: Color32,
    line_width: f32,
}

impl SurfaceBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: vec2(width, height),
            commands: Vec::new(),
            fill_color: Color32::BLACK,
            stroke_color: Color32::BLACK,
            line_width: 1.0,
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.line_width, self.stroke_color)
    }

    /// Replay the display list onto an egui painter, translated to the
    /// canvas origin on screen.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::FillRect { rect, color } => {
                    painter.rect_filled(rect.translate(offset), 0.0, *color);
                }
                DrawCmd::StrokeRect { rect, stroke } => {
                    painter.rect_stroke(rect.translate(offset), 0.0, *stroke);
                }
                DrawCmd::Line { from, to, stroke } => {
                    painter.line_segment([*from + offset, *to + offset], *stroke);
                }
                DrawCmd::Text { pos, text, color } => {
                    painter.text(
                        *pos + offset,
                        Align2::LEFT_BOTTOM,
                        text,
                        FontId::proportional(13.0),
                        *color,
                    );
                }
            }
        }
    }
}

impl DrawSurface for SurfaceBuffer {
    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.contains_rect(Rect::from_min_size(pos2(0.0, 0.0), self.size)) {
            self.commands.clear();
        }
        self.commands.push(DrawCmd::FillRect {
            rect,
            color: self.fill_color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::StrokeRect {
            rect,
            stroke: self.stroke(),
        });
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            stroke: self.stroke(),
        });
    }

    fn draw_text(&mut self, text: &str, pos: Pos2) {
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.to_owned(),
            color: self.fill_color,
        });
    }
}
