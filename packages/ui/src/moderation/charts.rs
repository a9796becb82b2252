//! Bar charts for the statistics page, drawn with plain markup.

use dioxus::prelude::*;
use moderation_core::format::format_percent;
use moderation_core::{ActivityData, ChartSlice, scale_max};

/// Width of a bar as a CSS percentage of the largest value.
fn bar_width(value: f64, max: f64) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    format!("{:.1}%", (ratio * 100.0).clamp(0.0, 100.0))
}

/// Props for ActivityChart component.
#[derive(Props, Clone, PartialEq)]
pub struct ActivityChartProps {
    pub activity: Vec<ActivityData>,
}

/// Stacked per-date bars of approved, rejected and returned ads.
#[component]
pub fn ActivityChart(props: ActivityChartProps) -> Element {
    let max = scale_max(props.activity.iter().map(|day| day.total() as f64));
    let rows: Vec<_> = props
        .activity
        .iter()
        .map(|day| {
            let segments = [
                ("bar-success", "Одобрено", day.approved),
                ("bar-error", "Отклонено", day.rejected),
                ("bar-warning", "На доработку", day.request_changes),
            ]
            .map(|(class, label, count)| {
                (
                    class,
                    format!("width: {}", bar_width(count as f64, max)),
                    format!("{label}: {count}"),
                )
            });
            (day.date.clone(), segments, day.total())
        })
        .collect();
    let empty = rows.is_empty();

    rsx! {
        div { class: "chart activity-chart",
            div { class: "chart-legend",
                span { class: "legend-item legend-success", "Одобрено" }
                span { class: "legend-item legend-error", "Отклонено" }
                span { class: "legend-item legend-warning", "На доработку" }
            }
            if empty {
                div { class: "chart-empty", "Нет данных" }
            }
            for (date, segments, total) in rows {
                div { key: "{date}", class: "chart-row",
                    span { class: "chart-label", "{date}" }
                    div { class: "chart-track",
                        for (class, style, title) in segments {
                            div { class: "chart-bar {class}", style: "{style}", title: "{title}" }
                        }
                    }
                    span { class: "chart-value", "{total}" }
                }
            }
        }
    }
}

/// Props for SliceChart component.
#[derive(Props, Clone, PartialEq)]
pub struct SliceChartProps {
    pub slices: Vec<ChartSlice>,
    /// Render values as percentages instead of counts.
    #[props(default)]
    pub percent: bool,
}

/// Horizontal bar per named value.
#[component]
pub fn SliceChart(props: SliceChartProps) -> Element {
    const TONES: [&str; 3] = ["bar-success", "bar-error", "bar-warning"];

    let max = scale_max(props.slices.iter().map(|slice| slice.value));
    let rows: Vec<_> = props
        .slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let class = if props.percent {
                TONES[index % TONES.len()]
            } else {
                "bar-accent"
            };
            let value = if props.percent {
                format_percent(slice.value)
            } else {
                slice.value.to_string()
            };
            (
                slice.name.clone(),
                class,
                format!("width: {}", bar_width(slice.value, max)),
                value,
            )
        })
        .collect();
    let empty = rows.is_empty();

    rsx! {
        div { class: "chart slice-chart",
            if empty {
                div { class: "chart-empty", "Нет данных" }
            }
            for (name, class, style, value) in rows {
                div { key: "{name}", class: "chart-row",
                    span { class: "chart-label", "{name}" }
                    div { class: "chart-track",
                        div { class: "chart-bar {class}", style: "{style}" }
                    }
                    span { class: "chart-value", "{value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_largest_value() {
        assert_eq!(bar_width(5.0, 10.0), "50.0%");
        assert_eq!(bar_width(10.0, 10.0), "100.0%");
        assert_eq!(bar_width(3.0, 0.0), "0.0%");
    }
}
