use std::fs;
use std::path::Path;

use tracing::debug;

use crate::api::{ChartExportDocument, ChartMetadata};
use crate::core::FigureSource;
use crate::error::{ExportError, ExportResult};

/// Exports `figure` to `path` as a Chart Storage API upload document.
///
/// Any existing file at `path` is replaced without confirmation. On success a
/// short summary is printed to stdout; on failure the error propagates and
/// nothing is printed. A failed write may leave a truncated or absent file
/// behind — the export file is a disposable upload artifact, so no cleanup is
/// attempted. Concurrent exports to the same path race last-write-wins;
/// callers needing coordination must serialize externally.
pub fn export_figure(
    figure: &impl FigureSource,
    path: impl AsRef<Path>,
    metadata: ChartMetadata,
) -> ExportResult<()> {
    let path = path.as_ref();
    let document = ChartExportDocument::from_figure(figure, metadata)?;
    let payload = document.to_json_pretty()?;

    debug!(
        path = %path.display(),
        traces = document.data.len(),
        "writing chart export document"
    );
    fs::write(path, payload).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    println!("Chart exported to {}", path.display());
    println!("Title: {}", document.chart_title);
    println!("Description: {}", document.description);
    println!("Tags: {:?}", document.tags);

    Ok(())
}
