use egui::{Color32, Pos2, Rect, Stroke, pos2, vec2};
use simple_paint::palette::{PALETTE, SURFACE_GRAY};
use simple_paint::{DrawCmd, SurfaceBuffer, SurfaceController};

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(pos2(x, y), vec2(w, h))
}

fn fill(x: f32, y: f32, w: f32, h: f32, color: Color32) -> DrawCmd {
    DrawCmd::FillRect {
        rect: rect(x, y, w, h),
        color,
    }
}

fn outline(x: f32, y: f32, w: f32, h: f32, width: f32, color: Color32) -> DrawCmd {
    DrawCmd::StrokeRect {
        rect: rect(x, y, w, h),
        stroke: Stroke::new(width, color),
    }
}

#[test]
fn test_reset_paints_full_layout() {
    let mut controller = SurfaceController::new();
    let mut buffer = SurfaceBuffer::new(600.0, 400.0);
    controller.reset_surface(&mut buffer);

    let mut expected = vec![
        fill(0.0, 0.0, 600.0, 400.0, Color32::WHITE),
        outline(1.5, 1.5, 597.0, 397.0, 3.0, SURFACE_GRAY),
        fill(544.0, 0.0, 56.0, 400.0, SURFACE_GRAY),
        fill(547.0, 347.0, 50.0, 50.0, Color32::WHITE),
        DrawCmd::Text {
            pos: pos2(556.0, 377.0),
            text: "Clear".to_owned(),
            color: Color32::BLACK,
        },
    ];
    // Swatches are 49 units apart, 46 tall, stacked down the strip.
    for (n, &color) in PALETTE.iter().enumerate() {
        expected.push(fill(547.0, 49.0 * n as f32 + 3.0, 50.0, 46.0, color));
    }
    expected.push(outline(546.0, 2.0, 52.0, 48.0, 2.0, Color32::WHITE));

    assert_eq!(buffer.commands(), &expected[..]);
}

#[test]
fn test_clear_discards_strokes_and_keeps_color() {
    let mut controller = SurfaceController::new();
    let mut buffer = SurfaceBuffer::new(600.0, 400.0);
    controller.reset_surface(&mut buffer);
    let fresh_len = buffer.commands().len();

    // Select magenta, scribble a few segments.
    controller.pointer_down(pos2(580.0, 5.0 * 49.0 + 10.0), &mut buffer);
    assert_eq!(controller.current_color(), 5);
    controller.pointer_down(pos2(100.0, 100.0), &mut buffer);
    controller.pointer_move(pos2(150.0, 150.0), &mut buffer);
    controller.pointer_move(pos2(200.0, 100.0), &mut buffer);
    controller.pointer_up();
    assert!(buffer.commands().len() > fresh_len);

    // Clear: the buffer starts over, the selection survives.
    controller.pointer_down(pos2(580.0, 370.0), &mut buffer);
    assert_eq!(buffer.commands().len(), fresh_len);
    assert_eq!(controller.current_color(), 5);

    let highlight = controller.layout().highlight_rect(5);
    assert_eq!(
        buffer.commands().last(),
        Some(&DrawCmd::StrokeRect {
            rect: highlight,
            stroke: Stroke::new(2.0, Color32::WHITE),
        })
    );
}

#[test]
fn test_last_white_highlight_tracks_selection() {
    let mut controller = SurfaceController::new();
    let mut buffer = SurfaceBuffer::new(600.0, 400.0);
    controller.reset_surface(&mut buffer);

    for y in [200.0, 10.0, 340.0, 152.0] {
        controller.pointer_down(pos2(580.0, y), &mut buffer);
        controller.pointer_up();
    }
    assert_eq!(controller.current_color(), 3);

    let last_white: Option<Rect> = buffer
        .commands()
        .iter()
        .rev()
        .find_map(|cmd| match cmd {
            DrawCmd::StrokeRect { rect, stroke } if stroke.color == Color32::WHITE => Some(*rect),
            _ => None,
        });
    assert_eq!(last_white, Some(controller.layout().highlight_rect(3)));
}

#[test]
fn test_segments_never_leave_drawing_area() {
    let mut controller = SurfaceController::new();
    let mut buffer = SurfaceBuffer::new(600.0, 400.0);
    controller.reset_surface(&mut buffer);

    controller.pointer_down(pos2(300.0, 200.0), &mut buffer);
    let wild = [
        pos2(-100.0, -100.0),
        pos2(10000.0, 200.0),
        pos2(300.0, 10000.0),
        pos2(0.0, 0.0),
        pos2(599.0, 399.0),
    ];
    for pos in wild {
        controller.pointer_move(pos, &mut buffer);
    }
    controller.pointer_up();

    let in_area = |p: Pos2| (3.0..=543.0).contains(&p.x) && (3.0..=396.0).contains(&p.y);
    for cmd in buffer.commands() {
        if let DrawCmd::Line { from, to, .. } = cmd {
            assert!(in_area(*from), "segment start {from:?} outside drawing area");
            assert!(in_area(*to), "segment end {to:?} outside drawing area");
        }
    }
}
