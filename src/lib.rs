//! chartedit: interactive 2-axis chart editor engine.
//!
//! This crate provides the headless core of a chart editor: settings and
//! entry stores, a dual-layer primitive-based rendering pipeline, pure
//! coordinate transforms, and the pointer-driven drag interaction logic.
//! Rendering backends plug in through [`render::Renderer`]; desktop hosts
//! can embed the editor through the optional GTK4 adapter.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::ChartEditor;
pub use error::{ChartError, ChartResult};
