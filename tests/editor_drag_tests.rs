use chartedit::ChartEditor;
use chartedit::core::{BoundingRect, ChartPoint, LocalPoint, NewEntry};
use chartedit::interaction::DragState;
use chartedit::render::NullRenderer;

fn editor() -> ChartEditor<NullRenderer> {
    ChartEditor::new(NullRenderer::default()).expect("editor init")
}

fn covering_rect(editor: &ChartEditor<NullRenderer>) -> BoundingRect {
    BoundingRect::covering(editor.viewport())
}

#[test]
fn drag_moves_entry_to_pointer_chart_position() {
    let mut editor = editor();
    let id = editor.add_entry();
    let rect = covering_rect(&editor);

    // Press on the entry at the chart origin (surface center).
    editor.pointer_down(LocalPoint::new(500.0, 500.0), rect);
    assert_eq!(editor.drag_state(), DragState::Dragging { entry_id: id });

    // Move to the local position mapping to chart (200, -200).
    editor.pointer_move(LocalPoint::new(700.0, 700.0), rect);
    editor.pointer_up();

    let entry = editor.entry(id).expect("entry exists");
    assert_eq!(entry.coords, ChartPoint::new(200.0, -200.0));
    assert_eq!(editor.drag_state(), DragState::Idle);
}

#[test]
fn pointer_move_after_release_has_no_effect() {
    let mut editor = editor();
    let id = editor.add_entry();
    let rect = covering_rect(&editor);

    editor.pointer_down(LocalPoint::new(500.0, 500.0), rect);
    editor.pointer_move(LocalPoint::new(700.0, 700.0), rect);
    editor.pointer_up();

    editor.pointer_move(LocalPoint::new(100.0, 100.0), rect);
    let entry = editor.entry(id).expect("entry exists");
    assert_eq!(entry.coords, ChartPoint::new(200.0, -200.0));
}

#[test]
fn press_on_empty_space_stays_idle() {
    let mut editor = editor();
    editor.add_entry();
    let rect = covering_rect(&editor);

    editor.pointer_down(LocalPoint::new(100.0, 100.0), rect);
    assert_eq!(editor.drag_state(), DragState::Idle);

    // Idle moves are ignored.
    editor.pointer_move(LocalPoint::new(150.0, 150.0), rect);
    assert_eq!(
        editor.entries()[0].coords,
        ChartPoint::ORIGIN,
        "idle pointer move must not reposition entries"
    );
}

#[test]
fn overlapping_entries_grab_the_most_recent() {
    let mut editor = editor();
    let draft = NewEntry {
        name: String::new(),
        color: "#336699".to_owned(),
        coords: ChartPoint::new(5.0, 5.0),
    };
    let _first = editor.add_entry_with(draft.clone());
    let second = editor.add_entry_with(draft);
    let rect = covering_rect(&editor);

    // Surface position of chart (5, 5).
    editor.pointer_down(LocalPoint::new(505.0, 495.0), rect);
    assert_eq!(
        editor.drag_state(),
        DragState::Dragging { entry_id: second }
    );
}

#[test]
fn drag_works_through_scaled_widget_rect() {
    let mut editor = editor();
    let id = editor.add_entry();
    // 1000px surface displayed at half size, offset on screen.
    let rect = BoundingRect::new(40.0, 40.0, 500.0, 500.0);

    editor.pointer_down(LocalPoint::new(290.0, 290.0), rect);
    assert_eq!(editor.drag_state(), DragState::Dragging { entry_id: id });

    editor.pointer_move(LocalPoint::new(340.0, 240.0), rect);
    editor.pointer_up();

    let entry = editor.entry(id).expect("entry exists");
    assert_eq!(entry.coords, ChartPoint::new(100.0, 100.0));
}

#[test]
fn removing_dragged_entry_degrades_silently() {
    let mut editor = editor();
    let id = editor.add_entry();
    let rect = covering_rect(&editor);

    editor.pointer_down(LocalPoint::new(500.0, 500.0), rect);
    editor.remove_entry(id);

    // The gesture continues but targets a gone id: silent no-op.
    editor.pointer_move(LocalPoint::new(700.0, 700.0), rect);
    editor.pointer_up();
    assert!(editor.entries().is_empty());
    assert_eq!(editor.drag_state(), DragState::Idle);
}
