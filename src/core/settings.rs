//! Chart appearance settings and their store.

use serde::{Deserialize, Serialize};

/// Flat record of every chart appearance knob.
///
/// Defaults are part of the public contract; hosts rely on them when
/// presenting a fresh editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub top_label: String,
    pub right_label: String,
    pub bottom_label: String,
    pub left_label: String,
    pub label_size: u32,
    pub entry_name_size: u32,
    pub chart_size: u32,
    pub grid_size: u32,
    pub arrow_size: i32,
    pub chart_color: String,
    pub axis_color: String,
    pub grid_color: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_label: "Y Axis".to_owned(),
            right_label: "X Axis".to_owned(),
            bottom_label: String::new(),
            left_label: String::new(),
            label_size: 24,
            entry_name_size: 18,
            chart_size: 1000,
            grid_size: 50,
            arrow_size: 10,
            chart_color: "#ffffff".to_owned(),
            axis_color: "#000000".to_owned(),
            grid_color: "#eeeeee".to_owned(),
        }
    }
}

/// Partial settings update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub top_label: Option<String>,
    pub right_label: Option<String>,
    pub bottom_label: Option<String>,
    pub left_label: Option<String>,
    pub label_size: Option<u32>,
    pub entry_name_size: Option<u32>,
    pub chart_size: Option<u32>,
    pub grid_size: Option<u32>,
    pub arrow_size: Option<i32>,
    pub chart_color: Option<String>,
    pub axis_color: Option<String>,
    pub grid_color: Option<String>,
}

impl SettingsPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True when the patch changes the backing surface size.
    #[must_use]
    pub fn resizes_surface(&self) -> bool {
        self.chart_size.is_some()
    }
}

/// Single source of truth for chart settings.
///
/// No validation happens here; the input boundary
/// (`api::settings_input`) filters raw host input before it reaches the
/// store.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: ChartSettings,
    revision: u64,
}

impl SettingsStore {
    #[must_use]
    pub fn new(settings: ChartSettings) -> Self {
        Self {
            settings,
            revision: 0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Monotonic change counter, bumped on every applied update.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shallow-merges the patch into current settings.
    ///
    /// Returns `true` when any field was applied.
    pub fn update(&mut self, patch: SettingsPatch) -> bool {
        if patch.is_empty() {
            return false;
        }

        let SettingsPatch {
            top_label,
            right_label,
            bottom_label,
            left_label,
            label_size,
            entry_name_size,
            chart_size,
            grid_size,
            arrow_size,
            chart_color,
            axis_color,
            grid_color,
        } = patch;

        merge(&mut self.settings.top_label, top_label);
        merge(&mut self.settings.right_label, right_label);
        merge(&mut self.settings.bottom_label, bottom_label);
        merge(&mut self.settings.left_label, left_label);
        merge(&mut self.settings.label_size, label_size);
        merge(&mut self.settings.entry_name_size, entry_name_size);
        merge(&mut self.settings.chart_size, chart_size);
        merge(&mut self.settings.grid_size, grid_size);
        merge(&mut self.settings.arrow_size, arrow_size);
        merge(&mut self.settings.chart_color, chart_color);
        merge(&mut self.settings.axis_color, axis_color);
        merge(&mut self.settings.grid_color, grid_color);

        self.revision += 1;
        true
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
