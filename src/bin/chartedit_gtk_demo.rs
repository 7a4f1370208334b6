//! Minimal desktop demo: an editable chart in a GTK4 window.
//!
//! Run with `cargo run --bin chartedit_gtk_demo --features desktop`.
//! The toolbar button adds a named entry at a spiral of positions; entries
//! can then be dragged with the pointer.

use gtk4 as gtk;

use gtk::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use chartedit::ChartEditor;
use chartedit::core::{ChartPoint, NewEntry};
use chartedit::platform_gtk::GtkChartAdapter;
use chartedit::render::CairoRenderer;

fn main() -> gtk::glib::ExitCode {
    let _ = chartedit::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("dev.chartedit.demo")
        .build();
    app.connect_activate(build_window);
    app.run()
}

fn build_window(app: &gtk::Application) {
    let renderer = match CairoRenderer::new(1000, 1000) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create renderer: {err}");
            return;
        }
    };
    let editor = match ChartEditor::new(renderer) {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("failed to create editor: {err}");
            return;
        }
    };
    let adapter = GtkChartAdapter::new(editor);

    let add_button = gtk::Button::with_label("Add entry");
    let editor_handle = adapter.editor();
    let area = adapter.widget().clone();
    let counter = Rc::new(Cell::new(0u32));
    add_button.connect_clicked(move |_| {
        let n = counter.get();
        counter.set(n + 1);
        let angle = f64::from(n) * 0.9;
        let radius = 40.0 + f64::from(n) * 18.0;
        let mut editor = editor_handle.borrow_mut();
        editor.add_entry_with(NewEntry {
            name: format!("point {}", n + 1),
            color: chartedit::core::random_hex_color(),
            coords: ChartPoint::new(radius * angle.cos(), radius * angle.sin()),
        });
        area.queue_draw();
    });

    let toolbar = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    toolbar.append(&add_button);

    let scroller = gtk::ScrolledWindow::new();
    scroller.set_child(Some(adapter.widget()));
    scroller.set_vexpand(true);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.append(&toolbar);
    root.append(&scroller);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("chartedit demo")
        .default_width(1024)
        .default_height(1024)
        .child(&root)
        .build();
    window.present();
}
