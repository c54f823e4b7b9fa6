//! Initial countries and year window shown before any interaction.
//!
//! The start page samples a handful of countries and a window of roughly a
//! third of the timeline that starts somewhere in its first two thirds.
//! Randomness comes through [`RandomSource`] so tests can script it.

use crate::types::{CanonicalTable, CountrySelection, YearRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random choices made for the initial selection
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn index_between(&mut self, low: usize, high: usize) -> usize;

    /// `amount` distinct indices below `len`, in sampling order
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// [`RandomSource`] backed by a `rand` generator
pub struct RngSource<R: Rng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index_between(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

/// Countries and years to display on first render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultSelection {
    pub countries: CountrySelection,
    pub years: YearRange,
}

/// Pick the initial selection for `table`.
///
/// Samples `country_count` countries (fewer if the table is smaller). The
/// year window starts at a random offset in `0..=floor(2n/3)` and spans
/// `floor(n/3)` further years, cut at the last table year.
pub fn default_selection(
    table: &CanonicalTable,
    random: &mut dyn RandomSource,
    country_count: usize,
) -> DefaultSelection {
    let names: Vec<&str> = table.countries().collect();
    let countries = random
        .sample_indices(names.len(), country_count)
        .into_iter()
        .filter_map(|i| names.get(i).copied())
        .collect::<CountrySelection>();

    // A canonical table always has at least one year
    let last = table.year_count() - 1;
    let start = random
        .index_between(0, 2 * table.year_count() / 3)
        .min(last);
    let end = (start + table.year_count() / 3).min(last);
    let year_at = |offset: usize| table.years().nth(offset).unwrap_or(table.max_year());
    let years = YearRange::new(year_at(start), year_at(end));

    tracing::debug!(
        countries = countries.len(),
        start = years.start(),
        end = years.end(),
        "Picked default selection"
    );
    DefaultSelection { countries, years }
}
