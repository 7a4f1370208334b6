pub mod color;
pub mod entry;
pub mod geometry;
pub mod settings;
pub mod transform;

pub use color::{format_hex_color, parse_hex_color, random_hex_color};
pub use entry::{ChartEntry, EntryId, EntryPatch, EntryStore, NewEntry};
pub use geometry::{BoundingRect, ChartPoint, LocalPoint, SurfacePoint, Viewport};
pub use settings::{ChartSettings, SettingsPatch, SettingsStore};
pub use transform::{chart_to_surface, local_to_surface, surface_to_chart};
