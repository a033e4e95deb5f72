use aislekit_core::{
    AisleId, BayScheme, FormatError, GridPoint, GridSize, LayoutError, MAX_BAYS_HIGH, MAX_SECTIONS,
};
use aislekit_designer::aisle::AisleResize;
use aislekit_designer::editor::LayoutEditor;
use aislekit_designer::layout::{Layout, LayoutDefaults};
use aislekit_designer::serialization::{load, save, LayoutFile, FILE_FORMAT_VERSION};
use serde_json::{json, Value};

fn sample_layout() -> Layout {
    let mut editor = LayoutEditor::new(GridSize::new(15, 30).unwrap());
    editor
        .set_defaults(LayoutDefaults {
            zone: "B".to_string(),
            height_mm: 2000,
            ..LayoutDefaults::default()
        })
        .unwrap();
    editor
        .draw_aisle(GridPoint::new(1, 1), GridPoint::new(1, 8))
        .unwrap();
    let vertical = editor
        .draw_aisle(GridPoint::new(4, 12), GridPoint::new(9, 12))
        .unwrap();
    editor
        .resize_aisle(
            &vertical.id,
            AisleResize {
                sections: Some(3),
                bays_high: Some(2),
                bay_scheme: Some(BayScheme::DualSide),
            },
        )
        .unwrap();
    editor.layout().clone()
}

#[test]
fn test_round_trip() {
    let layout = sample_layout();
    let json = save(&layout).to_json().unwrap();
    let restored = load(&json).unwrap();
    assert_eq!(restored, layout);
}

#[test]
fn test_document_shape() {
    let layout = sample_layout();
    let json = save(&layout).to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], FILE_FORMAT_VERSION);
    assert_eq!(value["gridSize"], json!({"rows": 15, "cols": 30}));
    assert_eq!(value["formData"]["zone"], "B");
    assert_eq!(value["formData"]["height"], 2000);
    assert_eq!(value["formData"]["defaultBaysHigh"], 5);
    assert_eq!(value["nextAisleId"], 3);
    assert_eq!(value["metadata"]["totalAisles"], 2);
    // 8 sections * 5 high + 3 sections * 2 high, no dual-side doubling.
    assert_eq!(value["metadata"]["totalBays"], 46);

    let first = &value["aisles"]["aisle-1"];
    assert_eq!(first["id"], "aisle-1");
    assert_eq!(first["number"], "01");
    assert_eq!(first["gridRow"], 1);
    assert_eq!(first["gridCol"], 1);
    assert_eq!(first["width"], 8);
    assert_eq!(first["height"], 1);
    assert_eq!(first["orientation"], "horizontal");
    assert_eq!(first["color"], "#4CAF50");
    assert_eq!(first["type"], "sequential");

    let second = &value["aisles"]["aisle-2"];
    assert_eq!(second["orientation"], "vertical");
    assert_eq!(second["type"], "dual-side");
    assert_eq!(second["baysHigh"], 2);
}

#[test]
fn test_missing_required_fields() {
    let no_version = json!({"aisles": {}}).to_string();
    assert!(matches!(
        LayoutFile::from_json(&no_version),
        Err(FormatError::MissingField("version"))
    ));

    let no_aisles = json!({"version": "1.0"}).to_string();
    assert!(matches!(
        load(&no_aisles),
        Err(FormatError::MissingField("aisles"))
    ));

    let empty_version = json!({"version": "", "aisles": {}}).to_string();
    assert!(matches!(
        load(&empty_version),
        Err(FormatError::MissingField("version"))
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(load("{not json"), Err(FormatError::Parse(_))));
    assert!(matches!(load("[1, 2]"), Err(FormatError::Invalid(_))));
}

#[test]
fn test_minimal_document_uses_defaults() {
    let doc = json!({
        "version": "1.0",
        "aisles": {
            "aisle-4": {
                "number": 4,
                "gridRow": 2,
                "gridCol": 3,
                "width": 6,
                "height": 1
            }
        }
    })
    .to_string();

    let layout = load(&doc).unwrap();
    assert_eq!(layout.grid(), GridSize::default());
    assert_eq!(layout.defaults(), &LayoutDefaults::default());

    let aisle = layout.store().get(&AisleId::from("aisle-4")).unwrap();
    assert_eq!(aisle.sections, 6);
    assert_eq!(aisle.bays_high, 5);
    assert_eq!(aisle.zone, "A");
    assert_eq!(aisle.bay_scheme, BayScheme::Sequential);
    // Counter is raised past the highest number present.
    assert_eq!(layout.store().next_number(), 5);
}

#[test]
fn test_number_accepts_padded_string() {
    let doc = json!({
        "version": "1.0",
        "nextAisleId": 12,
        "aisles": {
            "aisle-11": {
                "number": "11",
                "gridRow": 0,
                "gridCol": 0,
                "width": 1,
                "height": 3,
                "sections": 3,
                "baysHigh": 4,
                "zone": "C",
                "color": "#000000",
                "orientation": "horizontal"
            }
        }
    })
    .to_string();

    let layout = load(&doc).unwrap();
    let aisle = layout.store().get(&AisleId::from("aisle-11")).unwrap();
    assert_eq!(aisle.number, 11);
    assert_eq!(aisle.name(), "C11");
    // Stored colour and orientation are ignored in favour of derived values.
    assert_eq!(aisle.orientation().to_string(), "vertical");
    assert_eq!(aisle.color(), "#FF9800");
    assert_eq!(layout.store().next_number(), 12);
}

#[test]
fn test_invalid_aisles_are_rejected() {
    let overlapping = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": 0, "width": 5, "height": 1},
            "b": {"number": 2, "gridRow": 0, "gridCol": 4, "width": 5, "height": 1}
        }
    })
    .to_string();
    let err = load(&overlapping).unwrap_err();
    assert!(matches!(err, FormatError::Layout(ref e) if e.is_overlap()));

    let out_of_grid = json!({
        "version": "1.0",
        "gridSize": {"rows": 10, "cols": 10},
        "aisles": {
            "a": {"number": 1, "gridRow": 9, "gridCol": 0, "width": 1, "height": 3}
        }
    })
    .to_string();
    assert!(matches!(
        load(&out_of_grid),
        Err(FormatError::Layout(ref e)) if e.is_out_of_bounds()
    ));

    let bent = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": 0, "width": 2, "height": 2}
        }
    })
    .to_string();
    assert!(matches!(
        load(&bent),
        Err(FormatError::Layout(ref e)) if e.is_not_straight()
    ));
}

#[test]
fn test_extreme_positions_are_rejected() {
    let far = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": i32::MAX, "gridCol": 0, "width": 2, "height": 2}
        }
    })
    .to_string();
    assert!(matches!(
        load(&far),
        Err(FormatError::Layout(ref e)) if e.is_out_of_bounds()
    ));

    let negative = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": i32::MIN, "width": 4294967295u32, "height": 1}
        }
    })
    .to_string();
    assert!(matches!(
        load(&negative),
        Err(FormatError::Layout(ref e)) if e.is_out_of_bounds()
    ));

    let beyond_i32 = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 2147483648u64, "gridCol": 0, "width": 1, "height": 1}
        }
    })
    .to_string();
    assert!(matches!(load(&beyond_i32), Err(FormatError::Invalid(_))));
}

#[test]
fn test_oversized_counts_are_rejected() {
    let huge = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": 0, "width": 5, "height": 1,
                  "sections": 4294967295u32, "baysHigh": 4294967295u32},
            "b": {"number": 2, "gridRow": 2, "gridCol": 0, "width": 5, "height": 1,
                  "sections": 4294967295u32, "baysHigh": 4294967295u32}
        }
    })
    .to_string();
    assert!(matches!(
        load(&huge),
        Err(FormatError::Layout(LayoutError::TooLarge { field: "sections", .. }))
    ));

    let tall = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": 0, "width": 5, "height": 1,
                  "baysHigh": MAX_BAYS_HIGH + 1, "type": "dual-side"}
        }
    })
    .to_string();
    assert!(matches!(
        load(&tall),
        Err(FormatError::Layout(LayoutError::TooLarge { field: "bays_high", .. }))
    ));

    let last_number = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 4294967295u32, "gridRow": 0, "gridCol": 0, "width": 5, "height": 1}
        }
    })
    .to_string();
    assert!(matches!(
        load(&last_number),
        Err(FormatError::Layout(LayoutError::TooLarge { field: "number", .. }))
    ));

    let at_limit = json!({
        "version": "1.0",
        "aisles": {
            "a": {"number": 1, "gridRow": 0, "gridCol": 0, "width": 5, "height": 1,
                  "sections": MAX_SECTIONS, "baysHigh": MAX_BAYS_HIGH, "type": "dual-side"}
        }
    })
    .to_string();
    let layout = load(&at_limit).unwrap();
    assert_eq!(
        layout.total_bays(),
        u64::from(MAX_SECTIONS) * u64::from(MAX_BAYS_HIGH)
    );
}

#[test]
fn test_editor_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warehouse_B_layout.json");

    let mut editor = LayoutEditor::with_layout(sample_layout());
    editor.save_to_file(&path).unwrap();
    assert!(!editor.is_modified());
    assert_eq!(editor.display_name(), "warehouse_B_layout.json");

    let mut other = LayoutEditor::default();
    other.begin_drawing();
    assert_eq!(other.load_impact(), 0);
    other.load_from_file(&path).unwrap();
    assert_eq!(other.layout(), editor.layout());
    assert!(other.session().is_idle());
    assert_eq!(other.current_file_path(), Some(&path));
}

#[test]
fn test_failed_load_keeps_current_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"version": "1.0"}"#).unwrap();

    let mut editor = LayoutEditor::with_layout(sample_layout());
    let before = editor.layout().clone();
    let err = editor.load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse layout file"));
    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::MissingField("aisles"))
    ));
    assert_eq!(editor.layout(), &before);

    assert!(editor.load_from_file(dir.path().join("missing.json")).is_err());
    assert_eq!(editor.layout(), &before);
}

#[test]
fn test_load_without_form_data_keeps_editor_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    let doc = json!({
        "version": "1.0",
        "gridSize": {"rows": 12, "cols": 12},
        "aisles": {
            "aisle-1": {"number": "01", "gridRow": 0, "gridCol": 0, "width": 4, "height": 1}
        }
    });
    std::fs::write(&path, doc.to_string()).unwrap();

    let mut editor = LayoutEditor::default();
    let defaults = LayoutDefaults {
        zone: "Q".to_string(),
        default_bays_high: 2,
        ..LayoutDefaults::default()
    };
    editor.set_defaults(defaults.clone()).unwrap();
    editor.load_from_file(&path).unwrap();

    assert_eq!(editor.layout().defaults(), &defaults);
    let aisle = editor.aisle(&AisleId::from("aisle-1")).unwrap();
    assert_eq!(aisle.zone, "Q");
    assert_eq!(aisle.bays_high, 2);
}
