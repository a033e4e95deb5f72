use aislekit_core::{BayScheme, GridPoint};
use aislekit_designer::aisle::AisleResize;
use aislekit_designer::editor::LayoutEditor;
use aislekit_designer::export::{export_rows, to_csv_string, write_csv, CSV_HEADER};
use aislekit_designer::layout::LayoutDefaults;

fn editor() -> LayoutEditor {
    let mut editor = LayoutEditor::default();
    let first = editor
        .draw_aisle(GridPoint::new(5, 5), GridPoint::new(5, 9))
        .unwrap();
    editor
        .resize_aisle(&first.id, AisleResize::bays_high(2))
        .unwrap();
    let second = editor
        .draw_aisle(GridPoint::new(8, 0), GridPoint::new(9, 0))
        .unwrap();
    editor
        .resize_aisle(
            &second.id,
            AisleResize {
                sections: Some(1),
                bays_high: Some(1),
                bay_scheme: Some(BayScheme::DualSide),
            },
        )
        .unwrap();
    editor
}

#[test]
fn test_header_and_first_rows() {
    let csv = to_csv_string(editor().layout());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Zone,Aisle,Section,Bay,Location Code,Height(mm),Width(mm),Depth(mm),Grid Position,Aisle Dimensions,Orientation,Total Bays"
    );
    assert_eq!(
        lines[1],
        "A,01,01,01,A01-01-01,1500,1000,1200,R5 C5-C9,5×1,horizontal,10"
    );
    assert_eq!(
        lines[2],
        "A,01,01,02,A01-01-02,1500,1000,1200,R5 C5-C9,5×1,horizontal,"
    );
    assert_eq!(lines.len(), 1 + 10 + 2);
}

#[test]
fn test_total_bays_only_on_first_row_of_each_aisle() {
    let rows = export_rows(editor().layout());
    let totals: Vec<Option<usize>> = rows.iter().map(|r| r.total_bays).collect();

    assert_eq!(totals[0], Some(10));
    assert!(totals[1..10].iter().all(Option::is_none));
    // Dual-side aisle: one section, one level, two faces.
    assert_eq!(totals[10], Some(2));
    assert_eq!(totals[11], None);
}

#[test]
fn test_dual_side_rows() {
    let rows = export_rows(editor().layout());
    let second: Vec<_> = rows.iter().filter(|r| r.aisle == "02").collect();

    assert_eq!(second.len(), 2);
    assert_eq!(second[0].location_code, "A02-01-01");
    assert_eq!(second[1].location_code, "A02-01-02");
    assert_eq!(second[0].grid_position, "R8-R9 C0");
    assert_eq!(second[0].aisle_dimensions, "1×2");
    assert_eq!(second[0].orientation, "vertical");
}

#[test]
fn test_dimensions_come_from_defaults() {
    let mut editor = editor();
    editor
        .set_defaults(LayoutDefaults {
            height_mm: 2400,
            width_mm: 900,
            depth_mm: 800,
            ..LayoutDefaults::default()
        })
        .unwrap();
    let rows = export_rows(editor.layout());
    assert!(rows
        .iter()
        .all(|r| (r.height_mm, r.width_mm, r.depth_mm) == (2400, 900, 800)));
}

#[test]
fn test_write_csv_to_writer() {
    let editor = editor();
    let rows = editor.export_rows();
    let mut out = Vec::new();
    write_csv(&mut out, &rows).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(&CSV_HEADER.join(",")));
    assert_eq!(text, editor.export_csv().unwrap());
}
