use aislekit_core::{BayScheme, CellRect};
use aislekit_designer::aisle::{Aisle, NewAisle};
use aislekit_designer::aisle_store::AisleStore;
use aislekit_designer::bays::{generate_bays, BaySide};

fn aisle(sections: u32, bays_high: u32, scheme: BayScheme) -> Aisle {
    let mut store = AisleStore::default();
    store
        .insert(
            NewAisle::new(CellRect::new(0, 0, sections, 1), "A")
                .with_sections(sections)
                .with_bays_high(bays_high)
                .with_bay_scheme(scheme),
        )
        .unwrap()
}

#[test]
fn test_sequential_bays() {
    let bays = generate_bays(&aisle(2, 3, BayScheme::Sequential));
    let codes: Vec<&str> = bays.iter().map(|b| b.location_code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "A01-01-01",
            "A01-01-02",
            "A01-01-03",
            "A01-02-01",
            "A01-02-02",
            "A01-02-03",
        ]
    );
    assert!(bays.iter().all(|b| b.side.is_none()));
}

#[test]
fn test_dual_side_bays() {
    let bays = generate_bays(&aisle(1, 2, BayScheme::DualSide));
    let summary: Vec<(String, String, Option<BaySide>)> = bays
        .iter()
        .map(|b| (b.section_label(), b.bay_label(), b.side))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("01".to_string(), "01".to_string(), Some(BaySide::Left)),
            ("01".to_string(), "02".to_string(), Some(BaySide::Right)),
            ("01".to_string(), "03".to_string(), Some(BaySide::Left)),
            ("01".to_string(), "04".to_string(), Some(BaySide::Right)),
        ]
    );
    assert_eq!(bays[3].location_code, "A01-01-04");
    assert_eq!(bays[2].level, 2);
}

#[test]
fn test_bay_count_law() {
    for (s, h) in [(1, 1), (3, 5), (10, 2)] {
        let sequential = aisle(s, h, BayScheme::Sequential);
        let dual = aisle(s, h, BayScheme::DualSide);
        assert_eq!(generate_bays(&sequential).len() as u32, s * h);
        assert_eq!(generate_bays(&dual).len() as u32, 2 * s * h);
        assert_eq!(generate_bays(&dual).len() as u64, dual.bay_count());
    }
}

#[test]
fn test_generation_is_idempotent() {
    let a = aisle(4, 3, BayScheme::DualSide);
    assert_eq!(generate_bays(&a), generate_bays(&a));
}

#[test]
fn test_bays_follow_current_attributes() {
    let mut a = aisle(2, 2, BayScheme::Sequential);
    a.zone = "C".to_string();
    a.number = 12;
    a.bays_high = 1;
    let bays = generate_bays(&a);
    assert_eq!(bays.len(), 2);
    assert_eq!(bays[1].location_code, "C12-02-01");
}
