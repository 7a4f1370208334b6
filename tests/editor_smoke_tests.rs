use chartedit::ChartEditor;
use chartedit::core::Viewport;
use chartedit::render::{LayerKind, NullRenderer};

#[test]
fn editor_starts_with_default_contract() {
    let editor = ChartEditor::new(NullRenderer::default()).expect("editor init");

    let settings = editor.settings();
    assert_eq!(settings.top_label, "Y Axis");
    assert_eq!(settings.right_label, "X Axis");
    assert_eq!(settings.chart_size, 1000);
    assert_eq!(editor.viewport(), Viewport::square(1000));
    assert!(editor.entries().is_empty());
}

#[test]
fn first_render_builds_both_layers() {
    let mut editor = ChartEditor::new(NullRenderer::default()).expect("editor init");
    editor.render().expect("render");

    let renderer = editor.renderer();
    assert_eq!(renderer.render_calls, 1);
    // Background fill.
    assert_eq!(renderer.last_rect_count, 1);
    // Two axis arrowheads.
    assert_eq!(renderer.last_polygon_count, 2);
    // Default labels: "Y Axis" and "X Axis" only.
    assert_eq!(renderer.last_text_count, 2);
    // 20 horizontal + 20 vertical grid lines, plus the two axis lines.
    assert_eq!(renderer.last_line_count, 42);
    // No entries yet.
    assert_eq!(renderer.last_circle_count, 0);
}

#[test]
fn entries_compose_on_top_of_chart_layer() {
    let mut editor = ChartEditor::new(NullRenderer::default()).expect("editor init");
    editor.add_entry();
    editor.add_entry();
    editor.render().expect("render");

    assert_eq!(editor.renderer().last_circle_count, 2);
    assert_eq!(editor.layer_frame(LayerKind::Entries).circles.len(), 2);
    assert!(editor.layer_frame(LayerKind::Chart).circles.is_empty());
}

#[test]
fn rejects_zero_sized_surface() {
    let settings = chartedit::core::ChartSettings {
        chart_size: 0,
        ..chartedit::core::ChartSettings::default()
    };
    assert!(ChartEditor::with_settings(NullRenderer::default(), settings).is_err());
}
