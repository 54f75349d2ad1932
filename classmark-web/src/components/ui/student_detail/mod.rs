//! Per-student detail modal: score history charts with a category
//! filter.
//!
//! The filter only shapes the radar chart; the line chart always shows
//! every category the student has records in.

mod line_chart;
mod radar_chart;

pub use line_chart::{LineChart, LineChartProps};
pub use radar_chart::{RadarChart, RadarChartProps};

use crate::api::ApiClient;
use crate::components::modal::Modal;
use classmark_core::model::{Category, Evaluation, Student};
use classmark_core::{line_chart as derive_line, radar_chart as derive_radar};
use std::collections::BTreeSet;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StudentDetailProps {
    pub api: ApiClient,
    pub student: Student,
    pub categories: Vec<Category>,
    pub on_close: Callback<()>,
}

#[function_component(StudentDetail)]
pub fn student_detail(props: &StudentDetailProps) -> Html {
    let evaluations = use_state(Vec::<Evaluation>::new);
    let selected = use_state(|| {
        props
            .categories
            .iter()
            .map(|c| c.id)
            .collect::<BTreeSet<i64>>()
    });
    let error = use_state(|| None::<String>);

    {
        let api = props.api.clone();
        let evaluations = evaluations.clone();
        let error = error.clone();
        use_effect_with(props.student.id, move |&student_id| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.evaluations_for_student(student_id).await {
                    Ok(records) => {
                        evaluations.set(records);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || {}
        });
    }

    let filters: Html = props
        .categories
        .iter()
        .map(|category| {
            let checked = selected.contains(&category.id);
            let onchange = {
                let selected = selected.clone();
                let id = category.id;
                Callback::from(move |e: Event| {
                    let Some(input) = e
                        .target()
                        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    let mut next = (*selected).clone();
                    if input.checked() {
                        next.insert(id);
                    } else {
                        next.remove(&id);
                    }
                    selected.set(next);
                })
            };
            html! {
                <label key={category.id.to_string()} class="detail__filter">
                    <input type="checkbox" {checked} {onchange} />
                    { &category.name }
                </label>
            }
        })
        .collect();

    let line_model = derive_line(&evaluations, &props.categories);
    let radar_model = derive_radar(&evaluations, &props.categories, &selected);
    let title = format!(
        "{} (No. {})",
        props.student.name, props.student.student_number
    );

    html! {
        <Modal open={true} title={title} on_close={props.on_close.clone()}>
            if let Some(message) = error.as_ref() {
                <p class="form-error" role="alert">{ message }</p>
            }
            if evaluations.is_empty() && error.is_none() {
                <p class="detail__empty">{ "No evaluations recorded yet." }</p>
            } else {
                <div class="detail__filters">{ filters }</div>
                <div class="detail__charts">
                    <LineChart model={line_model} />
                    <RadarChart model={radar_model} />
                </div>
            }
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    // Effects do not run during server rendering, so the modal shows its
    // pre-fetch state: title and the empty-history placeholder.
    #[test]
    fn shows_the_student_name_and_number() {
        let html = block_on(
            LocalServerRenderer::<StudentDetail>::with_props(StudentDetailProps {
                api: ApiClient::new(Rc::new(MemoryTokenStore::default())),
                student: Student {
                    id: 1,
                    student_number: 7,
                    name: "김하늘".to_string(),
                    active: true,
                },
                categories: vec![Category {
                    id: 1,
                    name: "받아쓰기".to_string(),
                    max_score: 10.0,
                }],
                on_close: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("김하늘"));
        assert!(html.contains("No. 7"));
        assert!(html.contains("No evaluations recorded yet."));
    }
}
