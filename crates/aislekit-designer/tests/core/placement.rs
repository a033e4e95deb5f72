use aislekit_core::{CellRect, GridPoint, LayoutError, Orientation};
use aislekit_designer::layout::Layout;
use aislekit_designer::placement::{DrawOutcome, DrawingPhase, DrawingSession};

#[test]
fn test_draw_horizontal_aisle() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();

    let first = session.pick_cell(&mut layout, GridPoint::new(5, 5)).unwrap();
    assert_eq!(first, DrawOutcome::StartRecorded(GridPoint::new(5, 5)));
    assert_eq!(
        session.phase(),
        DrawingPhase::AwaitingEnd {
            start: GridPoint::new(5, 5)
        }
    );

    let DrawOutcome::Placed(aisle) = session.pick_cell(&mut layout, GridPoint::new(5, 9)).unwrap()
    else {
        panic!("expected a placed aisle");
    };
    assert_eq!((aisle.width, aisle.height), (5, 1));
    assert_eq!(aisle.sections, 5);
    assert_eq!(aisle.label(), "01");
    assert_eq!(aisle.orientation(), Orientation::Horizontal);
    assert_eq!((aisle.grid_row, aisle.grid_col), (5, 5));
    assert_eq!(aisle.bays_high, layout.defaults().default_bays_high);
    assert_eq!(session.phase(), DrawingPhase::AwaitingStart);
    assert_eq!(layout.store().len(), 1);
}

#[test]
fn test_draw_reversed_vertical_aisle() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();

    session.pick_cell(&mut layout, GridPoint::new(9, 3)).unwrap();
    let DrawOutcome::Placed(aisle) = session.pick_cell(&mut layout, GridPoint::new(6, 3)).unwrap()
    else {
        panic!("expected a placed aisle");
    };
    assert_eq!((aisle.grid_row, aisle.grid_col), (6, 3));
    assert_eq!((aisle.width, aisle.height), (1, 4));
    assert_eq!(aisle.sections, 4);
    assert_eq!(aisle.orientation(), Orientation::Vertical);
}

#[test]
fn test_diagonal_end_is_rejected() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();

    session.pick_cell(&mut layout, GridPoint::new(5, 5)).unwrap();
    let err = session
        .pick_cell(&mut layout, GridPoint::new(6, 9))
        .unwrap_err();

    assert_eq!(
        err,
        LayoutError::NotStraight {
            start: GridPoint::new(5, 5),
            end: GridPoint::new(6, 9),
        }
    );
    assert!(layout.store().is_empty());
    // The start point survives so the user can pick another end.
    assert_eq!(session.start_point(), Some(GridPoint::new(5, 5)));
}

#[test]
fn test_single_cell_aisle() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();

    session.pick_cell(&mut layout, GridPoint::new(2, 2)).unwrap();
    let DrawOutcome::Placed(aisle) = session.pick_cell(&mut layout, GridPoint::new(2, 2)).unwrap()
    else {
        panic!("expected a placed aisle");
    };
    assert_eq!((aisle.width, aisle.height), (1, 1));
    assert_eq!(aisle.sections, 1);
}

#[test]
fn test_overlapping_draw_resets_phase() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();
    session.pick_cell(&mut layout, GridPoint::new(1, 0)).unwrap();
    session.pick_cell(&mut layout, GridPoint::new(1, 4)).unwrap();

    session.pick_cell(&mut layout, GridPoint::new(0, 2)).unwrap();
    let err = session
        .pick_cell(&mut layout, GridPoint::new(3, 2))
        .unwrap_err();
    assert!(err.is_overlap());
    assert_eq!(session.phase(), DrawingPhase::AwaitingStart);
    assert_eq!(layout.store().len(), 1);
}

#[test]
fn test_preview_follows_cursor() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();
    assert_eq!(session.preview_at(GridPoint::new(0, 0)), None);

    session.pick_cell(&mut layout, GridPoint::new(4, 4)).unwrap();
    assert_eq!(
        session.preview_at(GridPoint::new(4, 1)),
        Some(CellRect::new(4, 1, 4, 1))
    );
    assert_eq!(session.preview_at(GridPoint::new(5, 5)), None);
    assert!(session.is_invalid_direction(GridPoint::new(5, 5)));
    assert!(!session.is_invalid_direction(GridPoint::new(8, 4)));
}

#[test]
fn test_segment_across_whole_range_is_out_of_bounds() {
    let mut layout = Layout::default();
    let mut session = DrawingSession::new();

    session
        .pick_cell(&mut layout, GridPoint::new(0, i32::MIN))
        .unwrap();
    let err = session
        .pick_cell(&mut layout, GridPoint::new(0, i32::MAX))
        .unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(layout.store().is_empty());
    assert_eq!(session.phase(), DrawingPhase::AwaitingStart);

    session
        .pick_cell(&mut layout, GridPoint::new(i32::MAX, 3))
        .unwrap();
    let err = session
        .pick_cell(&mut layout, GridPoint::new(i32::MIN, 3))
        .unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(layout.store().is_empty());
}

