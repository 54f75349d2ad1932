//! Radar chart: one axis per selected category, every historical record
//! plotted on its axis and faded by age.

use classmark_core::numbers::usize_to_f64;
use classmark_core::{RadarChartModel, hsl, hsla};
use std::f64::consts::TAU;
use yew::prelude::*;

const SIZE: f64 = 400.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 150.0;
const LABEL_RADIUS: f64 = 172.0;

/// Axis direction, starting at twelve o'clock and going clockwise.
fn axis_angle(index: usize, total: usize) -> f64 {
    -TAU / 4.0 + TAU * usize_to_f64(index) / usize_to_f64(total.max(1))
}

fn point_at(angle: f64, distance: f64) -> (f64, f64) {
    (
        CENTER + distance * angle.cos(),
        CENTER + distance * angle.sin(),
    )
}

#[derive(Properties, PartialEq)]
pub struct RadarChartProps {
    pub model: RadarChartModel,
}

#[function_component(RadarChart)]
pub fn radar_chart(props: &RadarChartProps) -> Html {
    let axes = &props.model.axes;
    let total = axes.len();

    let rings: Html = [25.0, 50.0, 75.0, 100.0]
        .iter()
        .map(|&percent| {
            html! {
                <circle
                    key={format!("ring-{percent}")}
                    class="radar-chart__ring"
                    cx={CENTER.to_string()}
                    cy={CENTER.to_string()}
                    r={(RADIUS * percent / 100.0).to_string()}
                    fill="none"
                />
            }
        })
        .collect();

    let spokes: Html = axes
        .iter()
        .enumerate()
        .map(|(index, axis)| {
            let angle = axis_angle(index, total);
            let (x, y) = point_at(angle, RADIUS);
            let (label_x, label_y) = point_at(angle, LABEL_RADIUS);
            html! {
                <g key={axis.category_id.to_string()}>
                    <line
                        class="radar-chart__spoke"
                        x1={CENTER.to_string()}
                        y1={CENTER.to_string()}
                        x2={x.to_string()}
                        y2={y.to_string()}
                    />
                    <text
                        class="radar-chart__label"
                        x={label_x.to_string()}
                        y={label_y.to_string()}
                        text-anchor="middle"
                        dominant-baseline="middle"
                        fill={hsl(axis.hue)}
                    >
                        { &axis.name }
                    </text>
                </g>
            }
        })
        .collect();

    let points: Html = axes
        .iter()
        .enumerate()
        .flat_map(|(index, axis)| {
            let angle = axis_angle(index, total);
            axis.points.iter().map(move |point| {
                let distance = RADIUS * point.percent.clamp(0.0, 100.0) / 100.0;
                let (x, y) = point_at(angle, distance);
                html! {
                    <circle
                        key={format!("{}-{}", axis.category_id, point.date)}
                        class="radar-chart__point"
                        cx={x.to_string()}
                        cy={y.to_string()}
                        r="5"
                        fill={hsla(axis.hue, point.opacity)}
                    >
                        <title>
                            { format!("{} {}: {:.0}%", axis.name, point.date, point.percent) }
                        </title>
                    </circle>
                }
            })
        })
        .collect();

    html! {
        <figure class="radar-chart">
            <svg
                viewBox={format!("0 0 {SIZE} {SIZE}")}
                role="img"
                aria-label="Category overview"
            >
                { rings }
                { spokes }
                { points }
            </svg>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classmark_core::model::{Category, Evaluation};
    use futures::executor::block_on;
    use std::collections::BTreeSet;
    use yew::LocalServerRenderer;

    fn eval(id: i64, category_id: i64, score: f64, date: &str) -> Evaluation {
        Evaluation {
            id,
            student_id: 1,
            category_id,
            score,
            evaluation_date: date.to_string(),
        }
    }

    fn render(model: RadarChartModel) -> String {
        block_on(
            LocalServerRenderer::<RadarChart>::with_props(RadarChartProps { model }).render(),
        )
    }

    #[test]
    fn first_axis_points_straight_up() {
        let angle = axis_angle(0, 3);
        let (x, y) = point_at(angle, RADIUS);
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn historical_points_fade_with_age() {
        let categories = vec![Category {
            id: 1,
            name: "줄넘기".to_string(),
            max_score: 50.0,
        }];
        let evals = vec![
            eval(1, 1, 10.0, "2026-03-02"),
            eval(2, 1, 40.0, "2026-03-09"),
        ];
        let selected: BTreeSet<i64> = [1].into_iter().collect();
        let html = render(classmark_core::radar_chart(&evals, &categories, &selected));
        assert!(html.contains("hsla(0, 70%, 50%, 0.20)"));
        assert!(html.contains("hsla(0, 70%, 50%, 1.00)"));
        assert!(html.contains("줄넘기"));
    }

    #[test]
    fn empty_selection_still_draws_the_rings() {
        let html = render(RadarChartModel::default());
        assert!(html.contains("radar-chart__ring"));
        assert!(!html.contains("radar-chart__point"));
    }
}
