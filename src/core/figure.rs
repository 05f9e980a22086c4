use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Layout, Trace};
use crate::error::ExportResult;

/// An in-memory chart description: ordered traces plus a layout mapping.
///
/// Trace order is draw order and survives export unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    data: Vec<Trace>,
    layout: Layout,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Appends a trace after all existing ones.
    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }
}

/// Capability seam for export: anything that can produce a nested JSON
/// mapping with at least `data` and `layout` keys.
///
/// Implemented for [`Figure`] and for raw [`serde_json::Value`] payloads so
/// figures captured from other tooling can be exported without rebuilding
/// them through the builder API.
pub trait FigureSource {
    /// Dictionary form of the figure. Must contain `data` and `layout`.
    fn to_figure_value(&self) -> ExportResult<Value>;
}

impl FigureSource for Figure {
    fn to_figure_value(&self) -> ExportResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FigureSource for Value {
    fn to_figure_value(&self) -> ExportResult<Value> {
        Ok(self.clone())
    }
}
