use std::cell::RefCell;
use std::rc::Rc;

use chartedit::ChartEditor;
use chartedit::core::{BoundingRect, ChartPoint, LocalPoint, NewEntry};
use chartedit::extensions::{EditorContext, EditorEvent, EditorObserver};
use chartedit::render::NullRenderer;

struct Recorder {
    seen: Rc<RefCell<Vec<EditorEvent>>>,
}

impl EditorObserver for Recorder {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: EditorEvent, _context: EditorContext) {
        self.seen.borrow_mut().push(event);
    }
}

fn editor_with_recorder() -> (ChartEditor<NullRenderer>, Rc<RefCell<Vec<EditorEvent>>>) {
    let mut editor = ChartEditor::new(NullRenderer::default()).expect("editor init");
    let seen = Rc::new(RefCell::new(Vec::new()));
    editor.register_observer(Box::new(Recorder { seen: seen.clone() }));
    (editor, seen)
}

#[test]
fn mutation_and_render_events_arrive_in_order() {
    let (mut editor, seen) = editor_with_recorder();

    let id = editor.add_entry();
    editor.render().expect("render");

    assert_eq!(
        *seen.borrow(),
        vec![EditorEvent::EntryAdded { id }, EditorEvent::Rendered]
    );
}

#[test]
fn drag_lifecycle_events_bracket_the_coordinate_updates() {
    let (mut editor, seen) = editor_with_recorder();
    let id = editor.add_entry_with(NewEntry {
        name: "A".to_owned(),
        color: "#336699".to_owned(),
        coords: ChartPoint::ORIGIN,
    });

    let rect = BoundingRect::covering(editor.viewport());
    editor.pointer_down(LocalPoint::new(500.0, 500.0), rect);
    editor.pointer_move(LocalPoint::new(600.0, 400.0), rect);
    editor.pointer_up();

    assert_eq!(
        *seen.borrow(),
        vec![
            EditorEvent::EntryAdded { id },
            EditorEvent::DragStarted { id },
            EditorEvent::EntryUpdated { id },
            EditorEvent::DragEnded { id },
        ]
    );
}

#[test]
fn context_snapshot_tracks_entry_count() {
    struct CountWatcher {
        counts: Rc<RefCell<Vec<usize>>>,
    }

    impl EditorObserver for CountWatcher {
        fn id(&self) -> &str {
            "count-watcher"
        }

        fn on_event(&mut self, _event: EditorEvent, context: EditorContext) {
            self.counts.borrow_mut().push(context.entry_count);
        }
    }

    let mut editor = ChartEditor::new(NullRenderer::default()).expect("editor init");
    let counts = Rc::new(RefCell::new(Vec::new()));
    editor.register_observer(Box::new(CountWatcher {
        counts: counts.clone(),
    }));

    let first = editor.add_entry();
    editor.add_entry();
    editor.remove_entry(first);

    assert_eq!(*counts.borrow(), vec![1, 2, 1]);
}

#[test]
fn unregistered_observers_stop_receiving_events() {
    let (mut editor, seen) = editor_with_recorder();
    editor.unregister_observer("recorder");

    editor.add_entry();
    assert!(seen.borrow().is_empty());
}

#[test]
fn rejected_input_emits_no_events() {
    let (mut editor, seen) = editor_with_recorder();

    assert!(!editor.apply_numeric_input(chartedit::api::NumericSettingField::GridSize, "-1"));
    assert!(seen.borrow().is_empty());
}
