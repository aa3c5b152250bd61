use egui::Color32;

/// The fixed drawing palette, one entry per swatch, top to bottom.
/// Immutable for the lifetime of the process.
pub const PALETTE: [Color32; 7] = [
    Color32::BLACK,
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(242, 230, 0),
];

/// Gray used for the border, the control strip and the inactive highlight.
pub const SURFACE_GRAY: Color32 = Color32::from_rgb(128, 128, 128);
