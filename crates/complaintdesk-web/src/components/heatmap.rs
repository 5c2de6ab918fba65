//! Activity heatmap card

use chrono::{Local, NaiveDate};
use complaintdesk_core::heatmap::{DAY_LABELS, MAX_ACTIVITY};
use complaintdesk_core::{ColorScale, Heatmap, MonthLabel, month_labels};
use leptos::prelude::*;

fn cell_style(scale: &ColorScale, level: u8) -> String {
    format!("background-color: {}", scale.color_for_level(level))
}

fn month_label_style(label: &MonthLabel) -> String {
    format!("grid-column-start: {}", label.week + 1)
}

fn generate(today: NaiveDate) -> Heatmap {
    Heatmap::generate(today, &mut rand::thread_rng())
}

/// Year of synthetic daily activity
///
/// Samples are drawn once when the component mounts.
#[component]
pub fn ActivityHeatmap() -> impl IntoView {
    let today = Local::now().date_naive();
    let heatmap = generate(today);
    let scale = ColorScale::activity();

    let total = heatmap.total();
    let max = heatmap.max();

    let months = month_labels(today)
        .into_iter()
        .map(|label| {
            view! { <span class="heatmap-month" style=month_label_style(&label)>{label.name}</span> }
        })
        .collect_view();

    let days = DAY_LABELS
        .into_iter()
        .map(|day| view! { <span class="heatmap-day">{day}</span> })
        .collect_view();

    let palette: Vec<String> = (0..=MAX_ACTIVITY).map(|level| cell_style(&scale, level)).collect();

    let columns = heatmap
        .weeks()
        .map(|week| {
            let cells = week
                .iter()
                .map(|sample| {
                    let style = palette
                        .get(usize::from(sample.activity))
                        .cloned()
                        .unwrap_or_default();
                    view! { <span class="heatmap-cell" style=style title=sample.tooltip()></span> }
                })
                .collect_view();
            view! { <div class="heatmap-week">{cells}</div> }
        })
        .collect_view();

    let legend = palette
        .iter()
        .map(|style| view! { <span class="heatmap-cell" style=style.clone()></span> })
        .collect_view();

    view! {
        <div class="heatmap-container">
            <div class="heatmap">
                <div class="heatmap-months">{months}</div>
                <div class="heatmap-body">
                    <div class="heatmap-days">{days}</div>
                    <div class="heatmap-grid">{columns}</div>
                </div>
            </div>
            <div class="heatmap-footer">
                <div class="heatmap-legend">
                    <span>"Less"</span>
                    {legend}
                    <span>"More"</span>
                </div>
                <div class="heatmap-totals">
                    <span>"Total activity this year: " <strong>{total}</strong></span>
                    <span>{format!("Most active day: {max} activities")}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_style_uses_scale() {
        let scale = ColorScale::activity();
        assert_eq!(cell_style(&scale, 0), "background-color: rgb(39, 39, 42)");
        assert_eq!(cell_style(&scale, 5), "background-color: rgb(131, 71, 235)");
    }

    #[test]
    fn test_month_label_style_is_one_based() {
        let label = MonthLabel {
            name: "Jan",
            week: 0,
        };
        assert_eq!(month_label_style(&label), "grid-column-start: 1");
    }

    #[test]
    fn test_generate_full_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let heatmap = generate(today);
        assert_eq!(heatmap.len(), 364);
        assert!(heatmap.max() <= MAX_ACTIVITY);
    }
}
