//! Score-over-time SVG line chart.

use classmark_core::numbers::usize_to_f64;
use classmark_core::{LineChartModel, hsl};
use yew::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;

const PLOT_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// X pixel for a date slot. A single date sits in the middle of the
/// plot rather than on its left edge.
fn x_for(date_index: usize, date_count: usize) -> f64 {
    if date_count <= 1 {
        return MARGIN_LEFT + PLOT_WIDTH / 2.0;
    }
    MARGIN_LEFT + PLOT_WIDTH * usize_to_f64(date_index) / usize_to_f64(date_count - 1)
}

fn y_for(percent: f64) -> f64 {
    MARGIN_TOP + PLOT_HEIGHT * (100.0 - percent) / 100.0
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub model: LineChartModel,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let model = &props.model;
    let date_count = model.dates.len();

    let gridlines: Html = [0.0, 25.0, 50.0, 75.0, 100.0]
        .iter()
        .map(|&percent| {
            let y = y_for(percent);
            html! {
                <g key={format!("grid-{percent}")}>
                    <line
                        class="line-chart__gridline"
                        x1={MARGIN_LEFT.to_string()}
                        y1={y.to_string()}
                        x2={(MARGIN_LEFT + PLOT_WIDTH).to_string()}
                        y2={y.to_string()}
                    />
                    <text
                        class="line-chart__tick"
                        x={(MARGIN_LEFT - 8.0).to_string()}
                        y={y.to_string()}
                        text-anchor="end"
                        dominant-baseline="middle"
                    >
                        { format!("{percent:.0}%") }
                    </text>
                </g>
            }
        })
        .collect();

    let date_labels: Html = model
        .dates
        .iter()
        .enumerate()
        .map(|(index, date)| {
            html! {
                <text
                    key={date.clone()}
                    class="line-chart__date"
                    x={x_for(index, date_count).to_string()}
                    y={(HEIGHT - 12.0).to_string()}
                    text-anchor="middle"
                >
                    { date.clone() }
                </text>
            }
        })
        .collect();

    let series: Html = model
        .series
        .iter()
        .map(|series| {
            let color = hsl(series.hue);
            let points_attr = series
                .points
                .iter()
                .map(|p| format!("{},{}", x_for(p.date_index, date_count), y_for(p.percent)))
                .collect::<Vec<_>>()
                .join(" ");
            let markers: Html = series
                .points
                .iter()
                .map(|p| {
                    html! {
                        <circle
                            key={format!("{}-{}", series.category_id, p.date)}
                            cx={x_for(p.date_index, date_count).to_string()}
                            cy={y_for(p.percent).to_string()}
                            r="4"
                            fill={color.clone()}
                        >
                            <title>
                                { format!("{} {}: {:.0}%", series.name, p.date, p.percent) }
                            </title>
                        </circle>
                    }
                })
                .collect();
            html! {
                <g key={series.category_id.to_string()}>
                    if series.points.len() > 1 {
                        <polyline
                            class="line-chart__series"
                            points={points_attr}
                            fill="none"
                            stroke={color.clone()}
                            stroke-width="2"
                        />
                    }
                    { markers }
                </g>
            }
        })
        .collect();

    let legend: Html = model
        .series
        .iter()
        .map(|series| {
            html! {
                <li key={series.category_id.to_string()}>
                    <span
                        class="chart-legend__swatch"
                        style={format!("background-color: {}", hsl(series.hue))}
                    />
                    { &series.name }
                </li>
            }
        })
        .collect();

    html! {
        <figure class="line-chart">
            <svg
                viewBox={format!("0 0 {WIDTH} {HEIGHT}")}
                role="img"
                aria-label="Scores over time"
            >
                { gridlines }
                { date_labels }
                { series }
            </svg>
            <ul class="chart-legend">{ legend }</ul>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classmark_core::model::{Category, Evaluation};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(model: LineChartModel) -> String {
        block_on(LocalServerRenderer::<LineChart>::with_props(LineChartProps { model }).render())
    }

    fn sample_model() -> LineChartModel {
        let categories = vec![Category {
            id: 1,
            name: "줄넘기".to_string(),
            max_score: 50.0,
        }];
        let evals = vec![
            Evaluation {
                id: 1,
                student_id: 1,
                category_id: 1,
                score: 25.0,
                evaluation_date: "2026-03-02".to_string(),
            },
            Evaluation {
                id: 2,
                student_id: 1,
                category_id: 1,
                score: 45.0,
                evaluation_date: "2026-03-09".to_string(),
            },
        ];
        classmark_core::line_chart(&evals, &categories)
    }

    #[test]
    fn draws_a_polyline_per_multi_point_series() {
        let html = render(sample_model());
        assert!(html.contains("polyline"));
        assert!(html.contains("hsl(0, 70%, 50%)"));
        assert!(html.contains("줄넘기"));
    }

    #[test]
    fn single_point_series_has_a_marker_but_no_line() {
        let mut model = sample_model();
        model.series[0].points.truncate(1);
        model.dates.truncate(1);
        let html = render(model);
        assert!(!html.contains("polyline"));
        assert!(html.contains("circle"));
    }

    #[test]
    fn single_date_is_centered_in_the_plot() {
        let x = x_for(0, 1);
        assert!((x - (MARGIN_LEFT + PLOT_WIDTH / 2.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn y_axis_maps_percent_onto_plot_height() {
        assert!((y_for(100.0) - MARGIN_TOP).abs() < f64::EPSILON);
        assert!((y_for(0.0) - (MARGIN_TOP + PLOT_HEIGHT)).abs() < f64::EPSILON);
    }
}
