use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::FigureSource;
use crate::error::{ExportError, ExportResult};

/// Metadata attached to an exported chart for the storage API.
///
/// `Default` yields empty title, empty description, and an empty tag list;
/// every call site gets a fresh value, so defaults never leak across exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ChartMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The upload document accepted by `POST /api/charts`.
///
/// `data` and `layout` are copied verbatim from the figure's dictionary form;
/// their internal shape is never inspected or transformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartExportDocument {
    pub data: Vec<Value>,
    pub layout: Value,
    #[serde(rename = "chartTitle")]
    pub chart_title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ChartExportDocument {
    /// Builds the upload document from any figure source.
    ///
    /// Fails with [`ExportError::InvalidFigure`] when the dictionary form is
    /// not a mapping carrying a `data` array and a `layout` mapping.
    pub fn from_figure(
        figure: &impl FigureSource,
        metadata: ChartMetadata,
    ) -> ExportResult<Self> {
        let Value::Object(mut figure_map) = figure.to_figure_value()? else {
            return Err(ExportError::InvalidFigure(
                "figure dictionary form is not a mapping".to_owned(),
            ));
        };

        let data = match figure_map.remove("data") {
            Some(Value::Array(data)) => data,
            Some(_) => {
                return Err(ExportError::InvalidFigure(
                    "figure `data` is not an array of traces".to_owned(),
                ));
            }
            None => {
                return Err(ExportError::InvalidFigure(
                    "figure has no `data` key".to_owned(),
                ));
            }
        };

        let layout = match figure_map.remove("layout") {
            Some(layout @ Value::Object(_)) => layout,
            Some(_) => {
                return Err(ExportError::InvalidFigure(
                    "figure `layout` is not a mapping".to_owned(),
                ));
            }
            None => {
                return Err(ExportError::InvalidFigure(
                    "figure has no `layout` key".to_owned(),
                ));
            }
        };

        Ok(Self {
            data,
            layout,
            chart_title: metadata.title,
            description: metadata.description,
            tags: metadata.tags,
        })
    }

    /// Serializes the document as indented JSON, ready for upload.
    ///
    /// Non-finite numbers cannot be represented in JSON; values that reach
    /// the payload as `Value` have already been mapped to `null` by the
    /// encoder's conversion rules. Other unrepresentable payloads surface as
    /// [`ExportError::Serialize`].
    pub fn to_json_pretty(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
