use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One drawable data series inside a figure.
///
/// A trace is an opaque, insertion-ordered mapping of plotting keys to JSON
/// values. The exporter never interprets the contents; the constructors below
/// only cover the common series shapes so callers rarely need raw inserts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(IndexMap<String, Value>);

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Point-per-point series (lines and/or markers depending on `mode`).
    #[must_use]
    pub fn scatter(
        x: impl IntoIterator<Item = impl Into<Value>>,
        y: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::series("scatter", x, y)
    }

    /// Categorical bar series.
    #[must_use]
    pub fn bar(
        x: impl IntoIterator<Item = impl Into<Value>>,
        y: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::series("bar", x, y)
    }

    fn series(
        kind: &str,
        x: impl IntoIterator<Item = impl Into<Value>>,
        y: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        let mut trace = Self::new();
        trace.insert("type", kind);
        trace.insert("x", Value::Array(x.into_iter().map(Into::into).collect()));
        trace.insert("y", Value::Array(y.into_iter().map(Into::into).collect()));
        trace
    }

    /// Drawing mode, e.g. `"lines"`, `"markers"`, `"lines+markers"`.
    #[must_use]
    pub fn with_mode(mut self, mode: &str) -> Self {
        self.insert("mode", mode);
        self
    }

    /// Legend name for the series.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.insert("name", name);
        self
    }

    /// Sets an arbitrary trace key, replacing any previous value.
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

    /// Dictionary form of the trace, keys in insertion order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}
