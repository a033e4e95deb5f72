use aislekit_core::{
    rectangles_overlap, within_bounds, AisleId, BayScheme, GridPoint, GridSize, MAX_BAYS_HIGH,
    MAX_SECTIONS,
};
use aislekit_designer::aisle::AisleResize;
use aislekit_designer::bays::generate_bays;
use aislekit_designer::editor::LayoutEditor;
use aislekit_designer::layout::Layout;
use aislekit_designer::serialization::{load, save};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Draw(GridPoint, GridPoint),
    Move(usize, i32, i32),
    Drag(usize, GridPoint),
    Remove(usize),
    Duplicate(usize),
    Resize(usize, u32, u32, bool),
    Grid(u32, u32),
}

fn arb_coord() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => -2i32..32,
        1 => prop::sample::select(vec![i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX]),
    ]
}

fn arb_count() -> impl Strategy<Value = u32> {
    prop_oneof![
        8 => 0u32..6,
        1 => prop::sample::select(vec![1000, u32::MAX]),
    ]
}

fn arb_point() -> impl Strategy<Value = GridPoint> {
    (arb_coord(), arb_coord()).prop_map(|(row, col)| GridPoint::new(row, col))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (arb_point(), arb_point()).prop_map(|(a, b)| Op::Draw(a, b)),
        2 => (0usize..8, arb_coord(), arb_coord()).prop_map(|(i, r, c)| Op::Move(i, r, c)),
        2 => (0usize..8, arb_point()).prop_map(|(i, p)| Op::Drag(i, p)),
        1 => (0usize..8).prop_map(Op::Remove),
        1 => (0usize..8).prop_map(Op::Duplicate),
        1 => (0usize..8, arb_count(), arb_count(), any::<bool>())
            .prop_map(|(i, s, h, d)| Op::Resize(i, s, h, d)),
        1 => (10u32..=30, 10u32..=30).prop_map(|(r, c)| Op::Grid(r, c)),
    ]
}

fn nth_id(editor: &LayoutEditor, index: usize) -> Option<AisleId> {
    let store = editor.layout().store();
    let count = store.len();
    if count == 0 {
        return None;
    }
    store.iter().nth(index % count).map(|a| a.id.clone())
}

fn apply(editor: &mut LayoutEditor, op: &Op) {
    match op {
        Op::Draw(a, b) => {
            let _ = editor.draw_aisle(*a, *b);
        }
        Op::Move(i, row, col) => {
            if let Some(id) = nth_id(editor, *i) {
                let _ = editor.move_aisle(&id, *row, *col);
            }
        }
        Op::Drag(i, target) => {
            if let Some(id) = nth_id(editor, *i) {
                let anchor = editor.aisle(&id).map(|a| a.anchor());
                if let Some(anchor) = anchor {
                    editor.begin_dragging();
                    let _ = editor.pick_cell(anchor);
                    editor.track_hover(*target);
                    let _ = editor.pick_cell(*target);
                    editor.cancel();
                }
            }
        }
        Op::Remove(i) => {
            if let Some(id) = nth_id(editor, *i) {
                let _ = editor.remove_aisle(&id);
            }
        }
        Op::Duplicate(i) => {
            if let Some(id) = nth_id(editor, *i) {
                let _ = editor.duplicate_aisle(&id);
            }
        }
        Op::Resize(i, sections, bays_high, dual) => {
            if let Some(id) = nth_id(editor, *i) {
                let scheme = if *dual {
                    BayScheme::DualSide
                } else {
                    BayScheme::Sequential
                };
                let _ = editor.resize_aisle(
                    &id,
                    AisleResize {
                        sections: Some(*sections),
                        bays_high: Some(*bays_high),
                        bay_scheme: Some(scheme),
                    },
                );
            }
        }
        Op::Grid(rows, cols) => {
            if let Ok(grid) = GridSize::new(*rows, *cols) {
                let _ = editor.apply_grid_size(grid);
            }
        }
    }
}

fn assert_invariants(layout: &Layout) -> Result<(), TestCaseError> {
    let grid = layout.grid();
    let aisles: Vec<_> = layout.store().iter().collect();
    for (i, a) in aisles.iter().enumerate() {
        let rect = a.footprint();
        prop_assert!(within_bounds(&rect, &grid), "{} outside {}", rect, grid);
        prop_assert!(rect.is_straight(), "{} is not straight", rect);
        prop_assert!((1..=MAX_SECTIONS).contains(&a.sections));
        prop_assert!((1..=MAX_BAYS_HIGH).contains(&a.bays_high));
        for b in &aisles[i + 1..] {
            prop_assert!(
                !rectangles_overlap(&rect, &b.footprint()),
                "{} overlaps {}",
                a.id,
                b.id
            );
            prop_assert_ne!(a.number, b.number);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn store_invariants_hold_after_every_operation(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut editor = LayoutEditor::default();
        for op in &ops {
            apply(&mut editor, op);
            assert_invariants(editor.layout())?;
        }
    }

    #[test]
    fn save_then_load_restores_layout(ops in prop::collection::vec(arb_op(), 1..25)) {
        let mut editor = LayoutEditor::default();
        for op in &ops {
            apply(&mut editor, op);
        }
        let json = save(editor.layout()).to_json().unwrap();
        let restored = load(&json).unwrap();
        prop_assert_eq!(&restored, editor.layout());
    }

    #[test]
    fn bay_count_matches_scheme(sections in 1u32..12, bays_high in 1u32..8, dual in any::<bool>()) {
        let mut editor = LayoutEditor::default();
        let id = editor
            .draw_aisle(GridPoint::new(0, 0), GridPoint::new(0, 3))
            .unwrap()
            .id;
        let scheme = if dual { BayScheme::DualSide } else { BayScheme::Sequential };
        editor
            .resize_aisle(&id, AisleResize {
                sections: Some(sections),
                bays_high: Some(bays_high),
                bay_scheme: Some(scheme),
            })
            .unwrap();
        let aisle = editor.aisle(&id).unwrap();
        let expected = sections * bays_high * if dual { 2 } else { 1 };
        let bays = generate_bays(aisle);
        prop_assert_eq!(bays.len() as u32, expected);
        prop_assert_eq!(bays, generate_bays(aisle));
    }
}
