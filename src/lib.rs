//! Crime incident analysis and visualization.
//!
//! A one-shot batch pipeline: load a delimited incident table, normalize
//! timestamps, derive time features, aggregate frequency tables and pivot
//! matrices, then render SVG charts and standalone Leaflet HTML maps.

pub mod aggregate;
pub mod charts;
pub mod features;
pub mod geo;
pub mod loader;
pub mod maps;
pub mod model;
pub mod report;
pub mod timeparse;
