pub mod document;
pub mod exporter;

pub use document::{ChartExportDocument, ChartMetadata};
pub use exporter::export_figure;
