//! Synthetic yearly activity heatmap
//!
//! The grid covers the 364 days before `today` as 52 week columns of 7 day
//! rows. Activity values are random on purpose: they illustrate the layout
//! and carry no meaning beyond the range and shape guarantees tested below.

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// Week columns in the grid
pub const WEEKS: usize = 52;

/// Day rows per week column
pub const DAYS_PER_WEEK: usize = 7;

/// Days covered by the grid
pub const WINDOW_DAYS: usize = WEEKS * DAYS_PER_WEEK;

/// Highest activity level
pub const MAX_ACTIVITY: u8 = 5;

/// Peak deviation of the seasonal multiplier from 1.0
pub const SEASONAL_AMPLITUDE: f64 = 0.5;

/// Short month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Row labels for the seven day rows
pub const DAY_LABELS: [&str; DAYS_PER_WEEK] = ["S", "M", "T", "W", "T", "F", "S"];

/// One generated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapSample {
    /// Calendar date of the sample
    pub date: NaiveDate,
    /// Activity level, 0 to [`MAX_ACTIVITY`]
    pub activity: u8,
    /// Week column, 0 to 51
    pub week: usize,
    /// Day row, 0 to 6
    pub day: usize,
}

impl HeatmapSample {
    /// Hover text for the cell
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{}: {} activities", self.date.format("%Y-%m-%d"), self.activity)
    }

    /// Rows 0 and 6 draw from the low weekend range
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        is_weekend_row(self.day)
    }
}

const fn is_weekend_row(day: usize) -> bool {
    day == 0 || day == DAYS_PER_WEEK - 1
}

/// Multiplier for a zero-based calendar month
///
/// A sine over the twelve-month cycle centered on 1.0: 1.0 in January, 1.5
/// in April, 0.5 in October.
#[must_use]
pub fn seasonal_factor(month0: u32) -> f64 {
    (f64::from(month0) / 12.0 * TAU)
        .sin()
        .mul_add(SEASONAL_AMPLITUDE, 1.0)
}

/// A full 52x7 grid of generated samples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    samples: Vec<HeatmapSample>,
}

impl Heatmap {
    /// Generate the grid ending the day before `today`
    ///
    /// Sample `(week, day)` falls on `today - 364 + week * 7 + day`. Dates
    /// saturate at the calendar bounds.
    pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Self {
        let start = today
            .checked_sub_days(Days::new(WINDOW_DAYS as u64))
            .unwrap_or(NaiveDate::MIN);

        let mut samples = Vec::with_capacity(WINDOW_DAYS);
        for week in 0..WEEKS {
            for day in 0..DAYS_PER_WEEK {
                let offset = (week * DAYS_PER_WEEK + day) as u64;
                let date = start
                    .checked_add_days(Days::new(offset))
                    .unwrap_or(NaiveDate::MAX);

                let base: f64 = if is_weekend_row(day) {
                    rng.gen_range(0.0..2.0)
                } else {
                    rng.gen_range(1.0..5.0)
                };
                let scaled = (base * seasonal_factor(date.month0())).round();

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let activity = scaled.clamp(0.0, f64::from(MAX_ACTIVITY)) as u8;

                samples.push(HeatmapSample {
                    date,
                    activity,
                    week,
                    day,
                });
            }
        }

        let heatmap = Self { samples };
        debug!(
            %start,
            total = heatmap.total(),
            max = heatmap.max(),
            "generated activity heatmap"
        );
        heatmap
    }

    /// All samples in week-major order
    #[must_use]
    pub fn samples(&self) -> &[HeatmapSample] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the grid has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at a grid position
    #[must_use]
    pub fn cell(&self, week: usize, day: usize) -> Option<&HeatmapSample> {
        if week >= WEEKS || day >= DAYS_PER_WEEK {
            return None;
        }
        self.samples.get(week * DAYS_PER_WEEK + day)
    }

    /// Week columns, each holding up to seven samples
    pub fn weeks(&self) -> impl Iterator<Item = &[HeatmapSample]> {
        self.samples.chunks(DAYS_PER_WEEK)
    }

    /// Sum of all activity values
    #[must_use]
    pub fn total(&self) -> u32 {
        self.samples.iter().map(|s| u32::from(s.activity)).sum()
    }

    /// Highest activity value, 0 for an empty grid
    #[must_use]
    pub fn max(&self) -> u8 {
        self.samples.iter().map(|s| s.activity).max().unwrap_or(0)
    }
}

/// Month name positioned above a week column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    /// Short month name
    pub name: &'static str,
    /// Week column the label sits over
    pub week: usize,
}

/// Labels for the twelve months ending with the month of `today`
#[must_use]
pub fn month_labels(today: NaiveDate) -> Vec<MonthLabel> {
    let first_month0 = (today.month0() as usize + 1) % 12;
    let mut labels: Vec<MonthLabel> = MONTH_NAMES
        .iter()
        .cycle()
        .skip(first_month0)
        .take(MONTH_NAMES.len())
        .enumerate()
        .map(|(i, &name)| MonthLabel {
            name,
            week: i * WEEKS / 12,
        })
        .collect();
    labels.dedup_by(|next, prev| next.name == prev.name);
    labels
}
