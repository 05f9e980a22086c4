use chart_export::{Figure, FigureSource, Layout, Trace};
use serde_json::json;

#[test]
fn scatter_trace_has_expected_dictionary_form() {
    let trace = Trace::scatter(["Jan", "Feb"], [1.0, 2.0])
        .with_mode("lines")
        .with_name("Sales");

    assert_eq!(
        trace.to_value(),
        json!({
            "type": "scatter",
            "x": ["Jan", "Feb"],
            "y": [1.0, 2.0],
            "mode": "lines",
            "name": "Sales"
        })
    );
}

#[test]
fn bar_trace_sets_bar_type() {
    let trace = Trace::bar(["A", "B"], [1.0, 2.0]);
    assert_eq!(trace.get("type"), Some(&json!("bar")));
}

#[test]
fn trace_insert_replaces_existing_key() {
    let mut trace = Trace::scatter([1, 2], [3, 4]);
    trace.insert("mode", "markers");
    trace.insert("mode", "lines");
    assert_eq!(trace.get("mode"), Some(&json!("lines")));
}

#[test]
fn layout_title_helpers_produce_nested_title_text() {
    let layout = Layout::new()
        .with_title("Monthly Sales")
        .with_x_axis_title("Month")
        .with_y_axis_title("Sales ($K)");

    assert_eq!(
        layout.to_value(),
        json!({
            "title": { "text": "Monthly Sales" },
            "xaxis": { "title": { "text": "Month" } },
            "yaxis": { "title": { "text": "Sales ($K)" } }
        })
    );
}

#[test]
fn axis_title_merges_into_existing_axis_settings() {
    let mut layout = Layout::new();
    layout.insert("xaxis", json!({ "showgrid": false }));
    let layout = layout.with_x_axis_title("Month");

    assert_eq!(
        layout.get("xaxis"),
        Some(&json!({ "showgrid": false, "title": { "text": "Month" } }))
    );
}

#[test]
fn figure_dictionary_form_preserves_trace_order() {
    let mut figure = Figure::new();
    for name in ["first", "second", "third"] {
        figure.add_trace(Trace::scatter([0], [0]).with_name(name));
    }

    let value = figure.to_figure_value().expect("dictionary form");
    let names: Vec<&str> = value["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|trace| trace["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn empty_figure_has_empty_data_and_layout() {
    let value = Figure::new().to_figure_value().expect("dictionary form");
    assert_eq!(value, json!({ "data": [], "layout": {} }));
}
