//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the JSON shape that hosts consume. To update them
//! after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::andorra_zimbabwe;
use gdpboard::dashboard::Dashboard;
use gdpboard::data::{ChartKind, MarkerSymbol, melt, render, select};
use gdpboard::default_selection::DefaultSelection;
use gdpboard::settings::Settings;
use gdpboard::types::{CountrySelection, YearRange};
use std::sync::Arc;

#[test]
fn snapshot_tidy_records() {
    let table = andorra_zimbabwe();
    let records = melt(&select(
        &table,
        &CountrySelection::new(["Zimbabwe"]),
        YearRange::new(2001, 2002),
    ));
    insta::assert_json_snapshot!(records, @r#"
    [
      {
        "country": "Zimbabwe",
        "year": 2001,
        "value": 1500
      },
      {
        "country": "Zimbabwe",
        "year": 2002,
        "value": 600
      }
    ]
    "#);
}

#[test]
fn snapshot_year_control() {
    let dashboard = Dashboard::new(
        Arc::new(andorra_zimbabwe()),
        DefaultSelection {
            countries: CountrySelection::new(["Andorra"]),
            years: YearRange::new(2000, 2001),
        },
        &Settings::default(),
    );
    insta::assert_json_snapshot!(dashboard.year_control(), @r#"
    {
      "id": "year",
      "label": "Year(s)",
      "min": 2000,
      "max": 2002,
      "value": {
        "start": 2000,
        "end": 2001
      },
      "marks": [
        2000
      ],
      "allow_cross": false
    }
    "#);
}

#[test]
fn test_chart_json_fields() {
    let table = andorra_zimbabwe();
    let chart = render(&melt(&select(
        &table,
        &CountrySelection::new(["Andorra", "Zimbabwe"]),
        YearRange::new(2000, 2000),
    )));
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["title"], "Year vs GDP per Capita by Country");
    assert_eq!(json["kind"], "line-with-markers");
    assert_eq!(json["x_axis"]["field"], "year");
    assert_eq!(json["y_axis"]["field"], "gdp_pcap");
    assert_eq!(json["series_key"], "country");
    assert_eq!(json["series"][1]["symbol"], "diamond");
    assert_eq!(json["series"][0]["points"][0]["y"], 1000.0);

    assert_eq!(chart.kind, ChartKind::LineWithMarkers);
    assert_eq!(chart.series[0].symbol, MarkerSymbol::Circle);
    assert_ne!(chart.series[0].color, chart.series[1].color);
}

#[test]
fn test_missing_value_serializes_as_null() {
    let records = vec![gdpboard::types::TidyRecord::new("Chad", 1990, None)];
    let json = serde_json::to_value(render(&records)).unwrap();
    assert!(json["series"][0]["points"][0]["y"].is_null());
    assert!(json["value_bounds"].is_null());
}
