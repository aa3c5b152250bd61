use egui::{Color32, Pos2, Rect, pos2, vec2};

use crate::layout::{Region, SWATCH_COUNT, SurfaceLayout};
use crate::palette::{PALETTE, SURFACE_GRAY};
use crate::surface::DrawSurface;

/// Owns the paint surface: the current color selection and the drag state,
/// and turns pointer events into draw-surface calls. One instance exists
/// for the lifetime of the application.
pub struct SurfaceController {
    layout: SurfaceLayout,
    current_color: usize,
    // Transient state: the last committed point of the stroke being drawn
    // (if any). `Some` while a drag is in progress, always clamped to the
    // drawing area.
    last_point: Option<Pos2>,
}

impl Default for SurfaceController {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceController {
    pub fn new() -> Self {
        Self {
            layout: SurfaceLayout::default(),
            current_color: 0,
            last_point: None,
        }
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn current_color(&self) -> usize {
        self.current_color
    }

    pub fn is_dragging(&self) -> bool {
        self.last_point.is_some()
    }

    /// Repaint the whole surface: white background, gray border and
    /// control strip, Clear button, the seven swatches and the highlight
    /// around the active one. Also serves as the Clear action, which keeps
    /// the current color selection.
    pub fn reset_surface(&mut self, g: &mut impl DrawSurface) {
        let w = self.layout.width();
        let h = self.layout.height();

        g.set_fill_color(Color32::WHITE);
        g.fill_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(w, h)));

        // 3-pixel gray border, stroked down the middle of its width.
        g.set_stroke_color(SURFACE_GRAY);
        g.set_line_width(3.0);
        g.stroke_rect(Rect::from_min_size(pos2(1.5, 1.5), vec2(w - 3.0, h - 3.0)));

        // Control strip along the right edge; swatches and the Clear
        // button are drawn on top of it.
        g.set_fill_color(SURFACE_GRAY);
        g.fill_rect(Rect::from_min_size(pos2(w - 56.0, 0.0), vec2(56.0, h)));

        g.set_fill_color(Color32::WHITE);
        g.fill_rect(Rect::from_min_size(
            pos2(w - 53.0, h - 53.0),
            vec2(50.0, 50.0),
        ));
        g.set_fill_color(Color32::BLACK);
        g.draw_text("Clear", pos2(w - 44.0, h - 23.0));

        for n in 0..SWATCH_COUNT as usize {
            g.set_fill_color(PALETTE[n]);
            g.fill_rect(self.layout.swatch_rect(n));
        }

        g.set_stroke_color(Color32::WHITE);
        g.set_line_width(2.0);
        g.stroke_rect(self.layout.highlight_rect(self.current_color));
    }

    /// Select the swatch under a palette click at y coordinate `y`,
    /// moving the highlight without repainting anything else. Clicks in
    /// the dead zone below the last swatch are ignored.
    fn change_color(&mut self, y: f32, g: &mut impl DrawSurface) {
        let Some(new_color) = self.layout.swatch_at(y) else {
            return;
        };

        // Paint over the old highlight in gray, then highlight the newly
        // selected swatch in white.
        g.set_line_width(2.0);
        g.set_stroke_color(SURFACE_GRAY);
        g.stroke_rect(self.layout.highlight_rect(self.current_color));
        self.current_color = new_color;
        g.set_stroke_color(Color32::WHITE);
        g.stroke_rect(self.layout.highlight_rect(self.current_color));

        log::debug!("selected palette color {new_color}");
    }

    pub fn pointer_down(&mut self, pos: Pos2, g: &mut impl DrawSurface) {
        // Some platforms deliver a stray extra press mid-drag; ignore it.
        if self.last_point.is_some() {
            return;
        }

        match self.layout.locate(pos) {
            Region::ClearButton => {
                log::debug!("clearing surface");
                self.reset_surface(g);
            }
            Region::Palette => self.change_color(pos.y, g),
            Region::DrawingArea => {
                // Start a curve from (x, y). The only place stroke color
                // and width are set for freehand drawing.
                self.last_point = Some(pos);
                g.set_line_width(2.0);
                g.set_stroke_color(PALETTE[self.current_color]);
            }
            Region::Inert => {}
        }
    }

    /// Commit one segment of the stroke in progress, clamped so it never
    /// leaves the drawing area. No-op outside a drag.
    pub fn pointer_move(&mut self, pos: Pos2, g: &mut impl DrawSurface) {
        let Some(prev) = self.last_point else {
            return;
        };

        let clamped = self.layout.clamp_to_drawing_area(pos);
        g.stroke_line(prev, clamped);
        self.last_point = Some(clamped);
    }

    pub fn pointer_up(&mut self) {
        self.last_point = None;
    }
}
