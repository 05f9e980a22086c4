use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Display configuration for a figure, kept as an opaque ordered mapping.
///
/// The helpers produce the nested `title.text` dictionary form so the
/// exported document matches what charting front-ends expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout(IndexMap<String, Value>);

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Chart title shown above the plot area.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.insert("title", json!({ "text": title }));
        self
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: &str) -> Self {
        self.set_axis_title("xaxis", title);
        self
    }

    #[must_use]
    pub fn with_y_axis_title(mut self, title: &str) -> Self {
        self.set_axis_title("yaxis", title);
        self
    }

    /// Sets an arbitrary layout key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dictionary form of the layout, keys in insertion order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    // Merges the title into an existing axis mapping instead of clobbering
    // other axis settings the caller may have inserted.
    fn set_axis_title(&mut self, axis: &str, title: &str) {
        let entry = self
            .0
            .entry(axis.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(axis_map) = entry {
            axis_map.insert("title".to_owned(), json!({ "text": title }));
        } else {
            *entry = json!({ "title": { "text": title } });
        }
    }
}
