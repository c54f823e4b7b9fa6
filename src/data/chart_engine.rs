//! Chart description engine
//!
//! Turns tidy records into a renderer-agnostic [`ChartSpec`]. Grouping by
//! country and numeric coercion of the axes happen here rather than in the
//! renderer; the renderer only draws what it is given.

use crate::constants::{CHART_TITLE, COUNTRY_FIELD, VALUE_FIELD, YEAR_FIELD};
use crate::types::TidyRecord;
use serde::Serialize;

/// Color in HSLA space, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

/// Chart color palette - highly distinct colors for data visualization
pub const CHART_COLORS: [Hsla; 8] = [
    Hsla { h: 220.0 / 360.0, s: 0.85, l: 0.55, a: 1.0 },  // Bright Blue
    Hsla { h: 140.0 / 360.0, s: 0.75, l: 0.45, a: 1.0 },  // Green
    Hsla { h: 30.0 / 360.0,  s: 0.95, l: 0.55, a: 1.0 },  // Orange
    Hsla { h: 270.0 / 360.0, s: 0.75, l: 0.55, a: 1.0 },  // Violet/Purple
    Hsla { h: 0.0 / 360.0,   s: 0.80, l: 0.55, a: 1.0 },  // Red
    Hsla { h: 175.0 / 360.0, s: 0.75, l: 0.45, a: 1.0 },  // Cyan/Teal
    Hsla { h: 55.0 / 360.0,  s: 0.90, l: 0.50, a: 1.0 },  // Yellow
    Hsla { h: 320.0 / 360.0, s: 0.75, l: 0.55, a: 1.0 },  // Pink/Magenta
];

/// Marker shapes; the length is coprime with the palette size so
/// (color, symbol) pairs stay unique for `8 * 9` series.
pub const MARKER_SYMBOLS: [MarkerSymbol; 9] = [
    MarkerSymbol::Circle,
    MarkerSymbol::Diamond,
    MarkerSymbol::Square,
    MarkerSymbol::Cross,
    MarkerSymbol::X,
    MarkerSymbol::TriangleUp,
    MarkerSymbol::TriangleDown,
    MarkerSymbol::Pentagon,
    MarkerSymbol::Star,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSymbol {
    Circle,
    Diamond,
    Square,
    Cross,
    X,
    TriangleUp,
    TriangleDown,
    Pentagon,
    Star,
}

/// Types of charts the engine describes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    LineWithMarkers,
}

/// Binding of an axis to a tidy field
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub field: &'static str,
}

/// A single plotted point; `y: None` is drawn as a gap
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: Option<f64>,
}

/// One line on the chart, one per country
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Hsla,
    pub symbol: MarkerSymbol,
    pub points: Vec<ChartPoint>,
}

/// Renderer-agnostic chart description
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Field that keys both color and marker symbol
    pub series_key: &'static str,
    pub series: Vec<Series>,
    /// (min, max) over plotted values, `None` when nothing is plotted
    pub value_bounds: Option<(f64, f64)>,
}

impl ChartSpec {
    /// A chart with axes and title but no series
    pub fn empty() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            kind: ChartKind::LineWithMarkers,
            x_axis: Axis { field: YEAR_FIELD },
            y_axis: Axis { field: VALUE_FIELD },
            series_key: COUNTRY_FIELD,
            series: Vec::new(),
            value_bounds: None,
        }
    }

    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::empty()
    }
}

/// Visual encoding for the `index`-th series
pub fn series_style(index: usize) -> (Hsla, MarkerSymbol) {
    (
        CHART_COLORS[index % CHART_COLORS.len()],
        MARKER_SYMBOLS[index % MARKER_SYMBOLS.len()],
    )
}

/// Build the chart description for a batch of tidy records
///
/// This performs:
/// 1. Grouping by country, preserving first-appearance order
/// 2. Coercion of year and value to numeric axes
/// 3. Color and marker assignment per series
/// 4. Min/max calculation for scaling
pub fn render(records: &[TidyRecord]) -> ChartSpec {
    let mut chart = ChartSpec::empty();
    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;

    for record in records {
        let index = match chart.series.iter().position(|s| s.name == record.country) {
            Some(i) => i,
            None => {
                let (color, symbol) = series_style(chart.series.len());
                chart.series.push(Series {
                    name: record.country.clone(),
                    color,
                    symbol,
                    points: Vec::new(),
                });
                chart.series.len() - 1
            }
        };

        let y = record.value.map(|v| v as f64);
        if let Some(y) = y {
            min_value = min_value.min(y);
            max_value = max_value.max(y);
        }
        chart.series[index].points.push(ChartPoint {
            x: f64::from(record.year),
            y,
        });
    }

    if min_value.is_finite() && max_value.is_finite() {
        chart.value_bounds = Some((min_value, max_value));
    }
    chart
}
