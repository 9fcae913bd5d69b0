use inkcalc::canvas::history::SnapshotHistory;
use inkcalc::canvas::surface::{PointerInput, Surface};

fn mouse(x: i32, y: i32) -> PointerInput {
    PointerInput::Mouse {
        offset_x: x,
        offset_y: y,
    }
}

fn stroke(surface: &mut Surface, history: &mut SnapshotHistory, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("stroke needs points");
    surface.begin_stroke(history, mouse(first.0, first.1));
    for &(x, y) in rest {
        surface.extend_stroke(mouse(x, y));
    }
    surface.end_stroke();
}

#[test]
fn single_undo_restores_pre_stroke_pixels_exactly() {
    let mut surface = Surface::new(64, 64);
    let mut history = SnapshotHistory::default();

    stroke(&mut surface, &mut history, &[(5, 5), (20, 20), (40, 12)]);
    let after_first = surface.raster().clone();

    stroke(&mut surface, &mut history, &[(10, 50), (50, 50)]);
    assert_ne!(surface.raster(), &after_first);

    assert!(history.pop_and_apply(&mut surface));
    assert_eq!(surface.raster(), &after_first);
}

#[test]
fn undoing_every_stroke_returns_to_the_blank_surface() {
    let mut surface = Surface::new(48, 48);
    let blank = surface.raster().clone();
    let mut history = SnapshotHistory::default();

    stroke(&mut surface, &mut history, &[(1, 1), (30, 30)]);
    stroke(&mut surface, &mut history, &[(8, 40), (40, 8)]);
    stroke(&mut surface, &mut history, &[(20, 4), (20, 44)]);

    assert!(history.pop_and_apply(&mut surface));
    assert!(history.pop_and_apply(&mut surface));
    assert!(history.pop_and_apply(&mut surface));
    assert_eq!(surface.raster(), &blank);
}

#[test]
fn history_holds_one_snapshot_per_completed_stroke() {
    let mut surface = Surface::new(32, 32);
    let mut history = SnapshotHistory::default();

    for i in 0..5 {
        stroke(&mut surface, &mut history, &[(i, i), (i + 10, i + 10)]);
    }
    assert_eq!(history.len(), 5);

    for expected in (0..5).rev() {
        history.pop_and_apply(&mut surface);
        assert_eq!(history.len(), expected);
    }

    // A further undo is a silent no-op.
    let before = surface.raster().clone();
    assert!(!history.pop_and_apply(&mut surface));
    assert_eq!(surface.raster(), &before);
}

#[test]
fn unfinished_stroke_still_has_its_snapshot() {
    let mut surface = Surface::new(32, 32);
    let blank = surface.raster().clone();
    let mut history = SnapshotHistory::default();

    surface.begin_stroke(&mut history, mouse(3, 3));
    surface.extend_stroke(mouse(20, 20));
    // Pointer never released; undo must still restore the pre-stroke pixels.
    assert!(history.pop_and_apply(&mut surface));
    assert_eq!(surface.raster(), &blank);
}
