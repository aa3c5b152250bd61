use egui::{Pos2, Rect, pos2, vec2};

/// Fixed surface size. The window is created non-resizable around it.
pub const SURFACE_WIDTH: f32 = 600.0;
pub const SURFACE_HEIGHT: f32 = 400.0;

/// Width of the gray strip along the right edge holding the swatches
/// and the Clear button.
pub const CONTROL_STRIP_WIDTH: f32 = 56.0;

/// Number of palette swatches stacked in the control strip.
pub const SWATCH_COUNT: i32 = 7;

/// Represents which part of the surface a pointer position falls in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// The white Clear button in the lower right corner
    ClearButton,
    /// The swatch column of the control strip
    Palette,
    /// The white freehand drawing area
    DrawingArea,
    /// Border pixels and other dead zones that ignore clicks
    Inert,
}

/// Pure layout math for the paint surface: where the swatches, the Clear
/// button and the drawing area sit, and how raw pointer positions map onto
/// them. Everything is derived from the fixed width and height.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceLayout {
    width: f32,
    height: f32,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl SurfaceLayout {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Vertical space given to one swatch, integer division so the last
    /// few pixels of the strip above the Clear button stay unused.
    pub fn swatch_height(&self) -> i32 {
        (self.height as i32 - CONTROL_STRIP_WIDTH as i32) / SWATCH_COUNT
    }

    /// The filled color rectangle for swatch `n`.
    pub fn swatch_rect(&self, n: usize) -> Rect {
        let spacing = self.swatch_height() as f32;
        Rect::from_min_size(
            pos2(self.width - 53.0, spacing * n as f32 + 3.0),
            vec2(50.0, spacing - 3.0),
        )
    }

    /// The outline drawn around swatch `n` to mark it as the active color.
    /// Slightly larger than the swatch itself so the stroke lands on the
    /// surrounding gray.
    pub fn highlight_rect(&self, n: usize) -> Rect {
        let spacing = self.swatch_height() as f32;
        Rect::from_min_size(
            pos2(self.width - 54.0, 2.0 + n as f32 * spacing),
            vec2(52.0, spacing - 1.0),
        )
    }

    /// Classify a pointer position. Positions on the 3-pixel border or in
    /// the sliver between drawing area and control strip are `Inert`.
    pub fn locate(&self, pos: Pos2) -> Region {
        if pos.x > self.width - 53.0 {
            if pos.y > self.height - 53.0 {
                Region::ClearButton
            } else {
                Region::Palette
            }
        } else if 3.0 < pos.x
            && pos.x < self.width - CONTROL_STRIP_WIDTH
            && 3.0 < pos.y
            && pos.y < self.height - 3.0
        {
            Region::DrawingArea
        } else {
            Region::Inert
        }
    }

    /// Map a palette click's y coordinate to a swatch index, or `None` in
    /// the rounding dead zone at the bottom of the swatch column.
    pub fn swatch_at(&self, y: f32) -> Option<usize> {
        let n = y as i32 / self.swatch_height();
        if (0..SWATCH_COUNT).contains(&n) {
            Some(n as usize)
        } else {
            None
        }
    }

    /// Clamp a dragged point so line segments stay inside the white
    /// drawing area, never over the border or the control strip.
    pub fn clamp_to_drawing_area(&self, pos: Pos2) -> Pos2 {
        pos2(
            pos.x.clamp(3.0, self.width - 57.0),
            pos.y.clamp(3.0, self.height - 4.0),
        )
    }
}
