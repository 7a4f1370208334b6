mod chart_layer;
mod editor;
mod entries_layer;
mod invalidation;
mod settings_input;

pub use editor::ChartEditor;
pub use invalidation::LayerMask;
pub use settings_input::{
    NumericRange, NumericSettingField, TextSettingField, numeric_setting_patch, parse_integer_input,
    text_setting_patch,
};

pub(crate) use chart_layer::build_chart_layer;
pub(crate) use entries_layer::build_entries_layer;
