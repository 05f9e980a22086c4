use chart_export::{ChartExportDocument, ChartMetadata, Figure, Trace};
use proptest::prelude::*;

proptest! {
    #[test]
    fn metadata_survives_serialization(
        title in "[a-zA-Z0-9 ]{0,32}",
        description in "[a-zA-Z0-9 .,]{0,64}",
        tags in proptest::collection::vec("[a-z-]{1,12}", 0..8)
    ) {
        let metadata = ChartMetadata::new()
            .with_title(&title)
            .with_description(&description)
            .with_tags(tags.clone());
        let document = ChartExportDocument::from_figure(&Figure::new(), metadata)
            .expect("document");

        let payload = document.to_json_pretty().expect("serialize");
        let parsed = ChartExportDocument::from_json_str(&payload).expect("parse");

        prop_assert_eq!(&parsed.chart_title, &title);
        prop_assert_eq!(&parsed.description, &description);
        prop_assert_eq!(&parsed.tags, &tags);
    }

    #[test]
    fn numeric_trace_payloads_round_trip_exactly(
        xs in proptest::collection::vec(-1.0e9f64..1.0e9, 1..32),
        ys in proptest::collection::vec(-1.0e9f64..1.0e9, 1..32)
    ) {
        let mut figure = Figure::new();
        figure.add_trace(Trace::scatter(xs, ys));

        let document = ChartExportDocument::from_figure(&figure, ChartMetadata::new())
            .expect("document");
        let payload = document.to_json_pretty().expect("serialize");
        let parsed = ChartExportDocument::from_json_str(&payload).expect("parse");

        prop_assert_eq!(parsed, document);
    }
}
