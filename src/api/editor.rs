use tracing::debug;

use crate::core::{
    BoundingRect, ChartEntry, ChartSettings, EntryId, EntryPatch, EntryStore, LocalPoint, NewEntry,
    SettingsPatch, SettingsStore, Viewport, local_to_surface, surface_to_chart,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{EditorContext, EditorEvent, EditorObserver, ObserverRegistry};
use crate::interaction::{DragState, InteractionState, hit_test};
use crate::render::{
    HeuristicTextMeasurer, LayerKind, LayeredFrame, RenderFrame, Renderer, TextMeasurer,
};

use super::{LayerMask, build_chart_layer, build_entries_layer};
use super::{NumericSettingField, TextSettingField, numeric_setting_patch, text_setting_patch};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEditor` owns the settings and entry stores, the drag interaction
/// state, the retained per-layer frames, and the renderer. All mutation goes
/// through this type so layer invalidation and observer notification stay
/// consistent.
pub struct ChartEditor<R: Renderer> {
    renderer: R,
    settings: SettingsStore,
    entries: EntryStore,
    interaction: InteractionState,
    frame: LayeredFrame,
    invalidation: LayerMask,
    measurer: Box<dyn TextMeasurer>,
    observers: ObserverRegistry,
}

impl<R: Renderer> ChartEditor<R> {
    /// Creates an editor with the default settings contract.
    pub fn new(renderer: R) -> ChartResult<Self> {
        Self::with_settings(renderer, ChartSettings::default())
    }

    pub fn with_settings(renderer: R, settings: ChartSettings) -> ChartResult<Self> {
        let viewport = Viewport::square(settings.chart_size);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            renderer,
            settings: SettingsStore::new(settings),
            entries: EntryStore::new(),
            interaction: InteractionState::default(),
            frame: LayeredFrame::new(viewport),
            invalidation: LayerMask::all(),
            measurer: Box::new(HeuristicTextMeasurer),
            observers: ObserverRegistry::new(),
        })
    }

    // ---- settings ----------------------------------------------------

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        self.settings.settings()
    }

    /// Shallow-merges the patch and invalidates the affected layers.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> bool {
        let affected = affected_layers(&patch);
        if !self.settings.update(patch) {
            return false;
        }
        self.invalidation = self.invalidation.merged(affected);
        self.emit(EditorEvent::SettingsUpdated);
        true
    }

    /// Routes one raw text-field input through the settings boundary.
    pub fn apply_text_input(&mut self, field: TextSettingField, value: &str) -> bool {
        self.update_settings(text_setting_patch(field, value))
    }

    /// Routes one raw numeric-field input through the settings boundary.
    ///
    /// Returns `false` (store untouched) for non-numeric or out-of-range
    /// input; rejection is silent by design.
    pub fn apply_numeric_input(&mut self, field: NumericSettingField, raw: &str) -> bool {
        match numeric_setting_patch(field, raw) {
            Some(patch) => self.update_settings(patch),
            None => false,
        }
    }

    // ---- entries -----------------------------------------------------

    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        self.entries.entries()
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&ChartEntry> {
        self.entries.get(id)
    }

    /// Adds the default draft entry: unnamed, random color, at the origin.
    pub fn add_entry(&mut self) -> EntryId {
        self.add_entry_with(NewEntry::random())
    }

    pub fn add_entry_with(&mut self, entry: NewEntry) -> EntryId {
        let id = self.entries.add(entry);
        self.invalidation.mark(LayerKind::Entries);
        self.emit(EditorEvent::EntryAdded { id });
        id
    }

    /// Merges patch fields into the matching entry; silent no-op when the
    /// id does not exist.
    pub fn update_entry(&mut self, patch: EntryPatch) -> bool {
        let id = patch.id;
        if !self.entries.update(patch) {
            return false;
        }
        self.invalidation.mark(LayerKind::Entries);
        self.emit(EditorEvent::EntryUpdated { id });
        true
    }

    /// Removes the matching entry; silent no-op when the id does not exist.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        if !self.entries.remove(id) {
            return false;
        }
        self.invalidation.mark(LayerKind::Entries);
        self.emit(EditorEvent::EntryRemoved { id });
        true
    }

    // ---- pointer interaction -----------------------------------------

    /// Pointer press over the surface, in local/client coordinates.
    ///
    /// Grabs the front-most entry within the hit threshold and starts a
    /// drag. Unmappable input (degenerate rect) is ignored.
    pub fn pointer_down(&mut self, local: LocalPoint, rect: BoundingRect) {
        let Ok(surface) = local_to_surface(local, rect, self.viewport()) else {
            return;
        };
        let chart = surface_to_chart(surface, self.viewport());

        if let Some(id) = self.interaction.on_pointer_down(hit_test(self.entries.entries(), chart))
        {
            debug!(%id, "drag started");
            self.emit(EditorEvent::DragStarted { id });
        }
    }

    /// Pointer motion; repositions the dragged entry, if any.
    pub fn pointer_move(&mut self, local: LocalPoint, rect: BoundingRect) {
        let Some(id) = self.interaction.drag_target() else {
            return;
        };
        let Ok(surface) = local_to_surface(local, rect, self.viewport()) else {
            return;
        };
        let chart = surface_to_chart(surface, self.viewport());
        self.update_entry(EntryPatch::coords(id, chart));
    }

    /// Pointer release, anywhere. Ends the drag unconditionally.
    pub fn pointer_up(&mut self) {
        if let Some(id) = self.interaction.on_pointer_up() {
            debug!(%id, "drag ended");
            self.emit(EditorEvent::DragEnded { id });
        }
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.interaction.drag()
    }

    // ---- rendering ---------------------------------------------------

    /// Current backing surface size (`chart_size` square).
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::square(self.settings().chart_size)
    }

    /// Pending layer rebuilds; empty right after a successful render.
    #[must_use]
    pub fn pending_invalidation(&self) -> LayerMask {
        self.invalidation
    }

    /// Retained frame of one layer, as of the last render.
    #[must_use]
    pub fn layer_frame(&self, kind: LayerKind) -> &RenderFrame {
        self.frame.layer(kind)
    }

    /// Rebuilds invalid layers and draws the composited scene.
    ///
    /// Invalidation is cleared only on success, so a failed pass is retried
    /// naturally by the next triggering event.
    pub fn render(&mut self) -> ChartResult<()> {
        self.rebuild_invalid_layers()?;
        self.renderer.render(&self.frame)?;
        self.finish_render_pass();
        Ok(())
    }

    /// Renders the composited scene into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.rebuild_invalid_layers()?;
        self.renderer.render_on_cairo_context(context, &self.frame)?;
        self.finish_render_pass();
        Ok(())
    }

    fn rebuild_invalid_layers(&mut self) -> ChartResult<()> {
        let viewport = self.viewport();
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        // Resizing discards both retained layers, so both must rebuild.
        if viewport != self.frame.viewport() {
            self.frame.resize(viewport);
            self.invalidation = LayerMask::all();
        }

        if self.invalidation.contains(LayerKind::Chart) {
            let chart = build_chart_layer(self.settings.settings(), viewport, &*self.measurer)?;
            self.frame.set_layer(LayerKind::Chart, chart);
        }
        if self.invalidation.contains(LayerKind::Entries) {
            let entries = build_entries_layer(
                self.entries.entries(),
                self.settings().entry_name_size,
                viewport,
                &*self.measurer,
            )?;
            self.frame.set_layer(LayerKind::Entries, entries);
        }

        Ok(())
    }

    fn finish_render_pass(&mut self) {
        debug!(
            entries = self.entries.entries().len(),
            chart = self.invalidation.contains(LayerKind::Chart),
            overlay = self.invalidation.contains(LayerKind::Entries),
            "render pass complete"
        );
        self.invalidation.clear();
        self.emit(EditorEvent::Rendered);
    }

    // ---- plumbing ----------------------------------------------------

    /// Replaces the text measurer (e.g. with a Pango-backed one); forces a
    /// full rebuild since label layout depends on measurement.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.invalidation = LayerMask::all();
    }

    pub fn register_observer(&mut self, observer: Box<dyn EditorObserver>) {
        self.observers.register(observer);
    }

    pub fn unregister_observer(&mut self, id: &str) {
        self.observers.unregister(id);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn emit(&mut self, event: EditorEvent) {
        let context = EditorContext {
            viewport: self.viewport(),
            entry_count: self.entries.entries().len(),
            drag: self.interaction.drag(),
            settings_revision: self.settings.revision(),
            entries_revision: self.entries.revision(),
        };
        self.observers.dispatch(event, context);
    }
}

/// Maps a settings patch onto the layers it forces to rebuild.
///
/// The chart layer depends on every field except the entry-name font; the
/// entries layer depends on the entry-name font and on the surface size
/// (resizing clears it).
fn affected_layers(patch: &SettingsPatch) -> LayerMask {
    let mut mask = LayerMask::none();

    let touches_chart = patch.top_label.is_some()
        || patch.right_label.is_some()
        || patch.bottom_label.is_some()
        || patch.left_label.is_some()
        || patch.label_size.is_some()
        || patch.chart_size.is_some()
        || patch.grid_size.is_some()
        || patch.arrow_size.is_some()
        || patch.chart_color.is_some()
        || patch.axis_color.is_some()
        || patch.grid_color.is_some();
    if touches_chart {
        mask.mark(LayerKind::Chart);
    }

    if patch.entry_name_size.is_some() || patch.resizes_surface() {
        mask.mark(LayerKind::Entries);
    }

    mask
}
