//! GTK4 embedding adapter.
//!
//! Wires a `DrawingArea` to the editor engine: the draw callback composites
//! through the cairo context path, and gesture/motion controllers feed the
//! pointer state machine. GTK's implicit pointer grab makes the release
//! handler fire even when the button is let go outside the widget, which is
//! what keeps drag gestures from getting stuck.

use gtk4 as gtk;

use gtk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

use crate::api::ChartEditor;
use crate::core::{BoundingRect, LocalPoint};
use crate::render::{CairoContextRenderer, Renderer};

pub struct GtkChartAdapter<R: Renderer + 'static> {
    editor: Rc<RefCell<ChartEditor<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(editor: ChartEditor<R>) -> Self {
        let size = i32::try_from(editor.settings().chart_size).unwrap_or(i32::MAX);
        let editor = Rc::new(RefCell::new(editor));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(size);
        drawing_area.set_content_height(size);

        let editor_for_draw = Rc::clone(&editor);
        drawing_area.set_draw_func(move |_, context, _, _| {
            if let Err(err) = editor_for_draw.borrow_mut().render_on_cairo_context(context) {
                // Degrade silently; the next draw retries with fresh state.
                warn!(%err, "dropped editor frame");
            }
        });

        let click = gtk::GestureClick::new();
        let editor_for_press = Rc::clone(&editor);
        let area_for_press = drawing_area.clone();
        click.connect_pressed(move |_, _, x, y| {
            let rect = widget_rect(&area_for_press);
            editor_for_press
                .borrow_mut()
                .pointer_down(LocalPoint::new(x, y), rect);
        });
        let editor_for_release = Rc::clone(&editor);
        click.connect_released(move |_, _, _, _| {
            editor_for_release.borrow_mut().pointer_up();
        });
        drawing_area.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        let editor_for_motion = Rc::clone(&editor);
        let area_for_motion = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            let mut editor = editor_for_motion.borrow_mut();
            if !matches!(
                editor.drag_state(),
                crate::interaction::DragState::Dragging { .. }
            ) {
                return;
            }
            let rect = widget_rect(&area_for_motion);
            editor.pointer_move(LocalPoint::new(x, y), rect);
            area_for_motion.queue_draw();
        });
        drawing_area.add_controller(motion);

        Self {
            editor,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for host-side mutations (settings forms, entry lists).
    /// Call [`GtkChartAdapter::queue_draw`] after mutating.
    #[must_use]
    pub fn editor(&self) -> Rc<RefCell<ChartEditor<R>>> {
        Rc::clone(&self.editor)
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}

/// Widget-relative bounding rect; controller coordinates are already
/// relative to the widget, so only the allocated size matters.
fn widget_rect(area: &gtk::DrawingArea) -> BoundingRect {
    BoundingRect::new(
        0.0,
        0.0,
        f64::from(area.width().max(1)),
        f64::from(area.height().max(1)),
    )
}
