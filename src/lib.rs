//! chart-export: figure-to-JSON export for the Chart Storage API.
//!
//! This crate turns an in-memory figure (an ordered trace list plus a layout
//! mapping) into the JSON document shape accepted by the storage service's
//! `POST /api/charts` endpoint, and writes it to a file ready for upload.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartExportDocument, ChartMetadata, export_figure};
pub use core::{Figure, FigureSource, Layout, Trace};
pub use error::{ExportError, ExportResult};
