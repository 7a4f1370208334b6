pub mod observers;

pub use observers::{EditorContext, EditorEvent, EditorObserver, ObserverRegistry};
