use chartedit::core::{ChartEntry, ChartPoint, ChartSettings, EntryId};
use serde_json::json;

#[test]
fn settings_serialize_with_stable_field_names() {
    let value = serde_json::to_value(ChartSettings::default()).expect("serialize settings");

    assert_eq!(
        value,
        json!({
            "top_label": "Y Axis",
            "right_label": "X Axis",
            "bottom_label": "",
            "left_label": "",
            "label_size": 24,
            "entry_name_size": 18,
            "chart_size": 1000,
            "grid_size": 50,
            "arrow_size": 10,
            "chart_color": "#ffffff",
            "axis_color": "#000000",
            "grid_color": "#eeeeee",
        })
    );
}

#[test]
fn settings_round_trip_through_json() {
    let settings = ChartSettings {
        top_label: "Mood".to_owned(),
        grid_size: 25,
        ..ChartSettings::default()
    };

    let text = serde_json::to_string(&settings).expect("serialize settings");
    let restored: ChartSettings = serde_json::from_str(&text).expect("deserialize settings");
    assert_eq!(restored, settings);
}

#[test]
fn entry_round_trip_preserves_id_and_coords() {
    let entry = ChartEntry {
        id: EntryId::new(7),
        name: "A".to_owned(),
        color: "#abc123".to_owned(),
        coords: ChartPoint::new(-12.5, 40.0),
    };

    let text = serde_json::to_string(&entry).expect("serialize entry");
    let restored: ChartEntry = serde_json::from_str(&text).expect("deserialize entry");
    assert_eq!(restored, entry);
}
