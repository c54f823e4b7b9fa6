//! A host driving the dashboard through the recompute callback.

use crate::helpers::{TestTableBuilder, andorra_zimbabwe};
use gdpboard::dashboard::{ControlHost, Dashboard, RecomputeCallback};
use gdpboard::default_selection::{DefaultSelection, RandomSource, RngSource, default_selection};
use gdpboard::settings::Settings;
use gdpboard::types::{CountrySelection, YearRange};
use std::sync::Arc;

/// Host stand-in that keeps the registered callback
#[derive(Default)]
struct RecordingHost {
    callback: Option<RecomputeCallback>,
}

impl ControlHost for RecordingHost {
    fn register_recompute(&mut self, callback: RecomputeCallback) {
        self.callback = Some(callback);
    }
}

impl RecordingHost {
    fn change(&self, countries: &[&str], start: i32, end: i32) -> gdpboard::data::ChartSpec {
        let callback = self.callback.as_ref().expect("callback registered");
        callback(&CountrySelection::new(countries.iter().copied()), YearRange::new(start, end))
    }
}

/// Always picks the lowest options
struct Lowest;

impl RandomSource for Lowest {
    fn index_between(&mut self, low: usize, _high: usize) -> usize {
        low
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}

fn attached(dashboard: &Arc<Dashboard>) -> RecordingHost {
    let mut host = RecordingHost::default();
    dashboard.attach(&mut host);
    host
}

#[test]
fn test_each_change_replaces_displayed_chart() {
    let table = Arc::new(andorra_zimbabwe());
    let initial = default_selection(&table, &mut Lowest, 5);
    let dashboard = Arc::new(Dashboard::new(table, initial, &Settings::default()));
    let host = attached(&dashboard);

    let chart = host.change(&["Zimbabwe"], 2000, 2002);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(dashboard.current_chart(), chart);

    let chart = host.change(&[], 2000, 2002);
    assert!(chart.series.is_empty());
    assert!(dashboard.current_chart().series.is_empty());
}

#[test]
fn test_scripted_default_selection_is_exact() {
    let table = Arc::new(TestTableBuilder::new(1800).with_generated(10, 30).build());
    let initial = default_selection(&table, &mut Lowest, 5);

    assert_eq!(
        initial.countries.iter().collect::<Vec<_>>(),
        vec!["Country 0", "Country 1", "Country 2", "Country 3", "Country 4"]
    );
    assert_eq!(initial.years, YearRange::new(1800, 1810));

    let dashboard = Dashboard::new(table, initial, &Settings::default());
    let chart = dashboard.current_chart();
    assert_eq!(chart.series.len(), 5);
    assert_eq!(chart.point_count(), 5 * 11);
}

#[test]
fn test_random_default_selection_renders() {
    let table = Arc::new(TestTableBuilder::new(1800).with_generated(40, 301).build());
    let initial = default_selection(&table, &mut RngSource::from_entropy(), 5);
    let dashboard = Dashboard::new(table, initial, &Settings::default());
    let initial = dashboard.initial_selection();
    let table = dashboard.table();

    let chart = dashboard.current_chart();
    assert_eq!(chart.series.len(), 5);
    assert!(initial.countries.iter().all(|c| chart.series(c).is_some()));
    assert!(chart.series.iter().all(|s| s.points.len() == initial.years.len()));
    assert!(initial.years.start() >= table.min_year());
    assert!(initial.years.end() <= table.max_year());
}

#[test]
fn test_layout_describes_page() {
    let initial = DefaultSelection {
        countries: CountrySelection::new(["Andorra"]),
        years: YearRange::new(2000, 2002),
    };
    let settings = Settings {
        year_mark_step: 1,
        ..Default::default()
    };
    let dashboard = Dashboard::new(Arc::new(andorra_zimbabwe()), initial, &settings);
    let layout = dashboard.layout();

    assert_eq!(layout.heading, "GDP per Capita of Various Countries by Year");
    assert!(!layout.description.is_empty());
    assert_eq!(layout.country.options, vec!["Andorra", "Zimbabwe"]);
    assert_eq!(layout.country.value, CountrySelection::new(["Andorra"]));
    assert_eq!(layout.year.marks, vec![2000, 2001]);
    assert_eq!(layout.chart.series.len(), 1);
}

#[test]
fn test_callback_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let dashboard = Arc::new(Dashboard::new(
        Arc::new(andorra_zimbabwe()),
        DefaultSelection {
            countries: CountrySelection::default(),
            years: YearRange::new(2000, 2000),
        },
        &Settings::default(),
    ));
    let callback = dashboard.recompute_callback();
    assert_send_sync(&callback);

    let handle = std::thread::spawn(move || callback(&CountrySelection::new(["Andorra"]), YearRange::new(2000, 2001)));
    let chart = handle.join().unwrap();
    assert_eq!(chart.point_count(), 2);
    assert_eq!(dashboard.current_chart(), chart);
}
