//! Builds two sample figures and exports them as upload-ready JSON files.
//!
//! The generated files are temporary artifacts: once POSTed to the storage
//! API they can be deleted, the chart data lives in the service afterwards.

use chart_export::{ChartMetadata, ExportResult, Figure, Layout, Trace, export_figure};

fn main() -> ExportResult<()> {
    let _ = chart_export::telemetry::init_default_tracing();

    let mut monthly_sales = Figure::new().with_layout(
        Layout::new()
            .with_title("Monthly Sales")
            .with_x_axis_title("Month")
            .with_y_axis_title("Sales ($K)"),
    );
    monthly_sales.add_trace(
        Trace::scatter(
            ["Jan", "Feb", "Mar", "Apr", "May"],
            [20.0, 14.0, 23.0, 25.0, 22.0],
        )
        .with_mode("lines+markers")
        .with_name("Sales"),
    );

    export_figure(
        &monthly_sales,
        "monthly-sales.json",
        ChartMetadata::new()
            .with_title("Monthly Sales Report")
            .with_description("Sales performance over 5 months")
            .with_tags(["sales", "monthly", "line-chart"]),
    )?;

    let mut tech_revenues =
        Figure::new().with_layout(Layout::new().with_title("Tech Company Revenues"));
    tech_revenues.add_trace(Trace::bar(
        ["Apple", "Google", "Microsoft", "Amazon"],
        [365.0, 283.0, 198.0, 469.0],
    ));

    export_figure(
        &tech_revenues,
        "tech-revenues.json",
        ChartMetadata::new()
            .with_title("Tech Company Revenue Comparison")
            .with_description("Revenue comparison of major tech companies")
            .with_tags(["revenue", "tech", "comparison", "bar-chart"]),
    )?;

    println!();
    println!("Ready to upload:");
    println!(
        "curl -X POST http://localhost:3001/api/charts -H 'Content-Type: application/json' -d @monthly-sales.json"
    );
    println!(
        "curl -X POST http://localhost:3001/api/charts -H 'Content-Type: application/json' -d @tech-revenues.json"
    );

    Ok(())
}
