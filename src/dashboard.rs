//! The dashboard surface handed to a UI host.
//!
//! The host owns the event loop and draws whatever it is given. The
//! dashboard owns the shared canonical table and the chart currently on
//! screen, describes the two controls, and exposes one recompute callback
//! that the host calls on every control change.

use crate::constants::{DATASET_URL, PAGE_HEADING};
use crate::data::{ChartSpec, melt, render, select};
use crate::default_selection::DefaultSelection;
use crate::settings::Settings;
use crate::types::{CanonicalTable, CountrySelection, YearRange};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Callback the host invokes with the current control values
pub type RecomputeCallback = Box<dyn Fn(&CountrySelection, YearRange) -> ChartSpec + Send + Sync>;

/// A UI host that accepts the recompute callback
pub trait ControlHost {
    fn register_recompute(&mut self, callback: RecomputeCallback);
}

/// Run the full select -> melt -> render pipeline
pub fn update_chart(
    table: &CanonicalTable,
    countries: &CountrySelection,
    years: YearRange,
) -> ChartSpec {
    let selected = select(table, countries, years);
    let records = melt(&selected);
    let chart = render(&records);
    tracing::debug!(
        requested = countries.len(),
        records = records.len(),
        series = chart.series.len(),
        "Recomputed chart"
    );
    chart
}

/// Multi-select list of countries
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryControl {
    pub id: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub value: CountrySelection,
    pub multi: bool,
}

/// Dual-handle year slider
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearControl {
    pub id: &'static str,
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub value: YearRange,
    /// Years that get a visible label
    pub marks: Vec<i32>,
    pub allow_cross: bool,
}

/// Everything the host needs to draw the page
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub heading: &'static str,
    pub description: Vec<String>,
    pub dataset_url: &'static str,
    pub country: CountryControl,
    pub year: YearControl,
    pub chart: ChartSpec,
}

/// Labelled slider marks: `min, min + step, ...` strictly below `max`
pub fn year_marks(min: i32, max: i32, step: i32) -> Vec<i32> {
    (min..max).step_by(step.max(1) as usize).collect()
}

pub struct Dashboard {
    table: Arc<CanonicalTable>,
    initial: DefaultSelection,
    mark_step: i32,
    current: RwLock<ChartSpec>,
}

impl Dashboard {
    /// Create the dashboard and render the initial selection
    pub fn new(table: Arc<CanonicalTable>, initial: DefaultSelection, settings: &Settings) -> Self {
        let chart = update_chart(&table, &initial.countries, initial.years);
        Self {
            table,
            initial,
            mark_step: settings.mark_step(),
            current: RwLock::new(chart),
        }
    }

    pub fn table(&self) -> &CanonicalTable {
        &self.table
    }

    pub fn initial_selection(&self) -> &DefaultSelection {
        &self.initial
    }

    /// Compute a chart without touching the displayed one
    pub fn recompute(&self, countries: &CountrySelection, years: YearRange) -> ChartSpec {
        update_chart(&self.table, countries, years)
    }

    /// Recompute and replace the displayed chart
    pub fn on_controls_changed(&self, countries: &CountrySelection, years: YearRange) -> ChartSpec {
        let chart = self.recompute(countries, years);
        *self.current.write() = chart.clone();
        chart
    }

    pub fn current_chart(&self) -> ChartSpec {
        self.current.read().clone()
    }

    pub fn country_control(&self) -> CountryControl {
        CountryControl {
            id: "country",
            label: "Country",
            options: self.table.countries().map(str::to_string).collect(),
            value: self.initial.countries.clone(),
            multi: true,
        }
    }

    pub fn year_control(&self) -> YearControl {
        let full = self.table.full_range();
        let (min, max) = (full.start(), full.end());
        YearControl {
            id: "year",
            label: "Year(s)",
            min,
            max,
            value: self.initial.years,
            marks: year_marks(min, max, self.mark_step),
            allow_cross: false,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout {
            heading: PAGE_HEADING,
            description: vec![
                "Compare the GDP per capita of countries over time. Data comes from \
                 gapminder; cells were cleaned to plain numbers and are otherwise unchanged."
                    .to_string(),
                "Pick countries from the list and drag the slider handles to change the \
                 years. The first view is a random choice of both."
                    .to_string(),
            ],
            dataset_url: DATASET_URL,
            country: self.country_control(),
            year: self.year_control(),
            chart: self.current_chart(),
        }
    }

    /// Callback that recomputes and stores the chart on this dashboard
    pub fn recompute_callback(self: &Arc<Self>) -> RecomputeCallback {
        let dashboard = Arc::clone(self);
        Box::new(move |countries: &CountrySelection, years: YearRange| {
            dashboard.on_controls_changed(countries, years)
        })
    }

    /// Register the recompute callback with a host
    pub fn attach(self: &Arc<Self>, host: &mut dyn ControlHost) {
        host.register_recompute(self.recompute_callback());
    }
}
