//! Pure student × date table for one category.
//!
//! All state lives in the container; this view renders a snapshot and
//! reports interactions upward.

use classmark_core::model::{Category, Evaluation, Student};
use classmark_core::{Highlight, cell_highlight, find_evaluation, format_average, row_stats};
use yew::prelude::*;

/// The cell currently holding the score editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingCell {
    pub student_id: i64,
    pub date: String,
}

#[derive(Properties, PartialEq)]
pub struct GridTableProps {
    pub category: Category,
    pub students: Vec<Student>,
    pub evaluations: Vec<Evaluation>,
    /// Date columns, newest first.
    pub dates: Vec<String>,
    #[prop_or_default]
    pub editing: Option<EditingCell>,
    #[prop_or_default]
    pub editor_value: AttrValue,
    #[prop_or_default]
    pub editor_ref: NodeRef,
    pub on_cell_click: Callback<(i64, String)>,
    pub on_student_click: Callback<Student>,
    /// `(old, new)` header rename.
    pub on_date_renamed: Callback<(String, String)>,
    pub on_editor_input: Callback<InputEvent>,
    pub on_editor_keydown: Callback<KeyboardEvent>,
    pub on_editor_blur: Callback<FocusEvent>,
}

fn highlight_class(highlight: Highlight) -> Option<&'static str> {
    match highlight {
        Highlight::Max => Some("grid__cell--max"),
        Highlight::Min => Some("grid__cell--min"),
        Highlight::None => None,
    }
}

#[function_component(GridTable)]
pub fn grid_table(props: &GridTableProps) -> Html {
    let headers: Html = props
        .dates
        .iter()
        .map(|date| {
            let onchange = {
                let cb = props.on_date_renamed.clone();
                let old = date.clone();
                Callback::from(move |e: Event| {
                    if let Some(new) = crate::dom::input_value(&e) {
                        cb.emit((old.clone(), new));
                    }
                })
            };
            html! {
                <th key={date.clone()} scope="col" class="grid__date">
                    <input type="date" value={date.clone()} {onchange} />
                </th>
            }
        })
        .collect();

    let rows: Html = props
        .students
        .iter()
        .map(|student| {
            let stats = row_stats(&props.evaluations, student.id);
            let on_student = {
                let cb = props.on_student_click.clone();
                let student = student.clone();
                Callback::from(move |_: MouseEvent| cb.emit(student.clone()))
            };
            let cells: Html = props
                .dates
                .iter()
                .map(|date| {
                    let is_editing = props
                        .editing
                        .as_ref()
                        .is_some_and(|c| c.student_id == student.id && c.date == *date);
                    if is_editing {
                        return html! {
                            <td key={date.clone()} class="grid__cell grid__cell--editing">
                                <input
                                    ref={props.editor_ref.clone()}
                                    class="grid__editor"
                                    type="text"
                                    inputmode="decimal"
                                    value={props.editor_value.clone()}
                                    oninput={props.on_editor_input.clone()}
                                    onkeydown={props.on_editor_keydown.clone()}
                                    onblur={props.on_editor_blur.clone()}
                                />
                            </td>
                        };
                    }
                    let record = find_evaluation(&props.evaluations, student.id, date);
                    let onclick = {
                        let cb = props.on_cell_click.clone();
                        let student_id = student.id;
                        let date = date.clone();
                        Callback::from(move |_: MouseEvent| cb.emit((student_id, date.clone())))
                    };
                    match record {
                        Some(evaluation) => {
                            let class = classes!(
                                "grid__cell",
                                highlight_class(cell_highlight(evaluation.score, &stats)),
                            );
                            html! {
                                <td key={date.clone()} {class} {onclick}>
                                    { evaluation.score }
                                </td>
                            }
                        }
                        None => html! {
                            <td key={date.clone()} class="grid__cell grid__cell--empty" {onclick}>
                                { "-" }
                            </td>
                        },
                    }
                })
                .collect();
            html! {
                <tr key={student.id.to_string()}>
                    <td class="grid__number">{ student.student_number }</td>
                    <td class="grid__name">
                        <button type="button" onclick={on_student}>{ &student.name }</button>
                    </td>
                    { cells }
                    <td class="grid__average">{ format_average(stats.average) }</td>
                </tr>
            }
        })
        .collect();

    html! {
        <table class="grid">
            <thead>
                <tr>
                    <th scope="col">{ "No." }</th>
                    <th scope="col">{ "Name" }</th>
                    { headers }
                    <th scope="col">{ format!("Avg (max {})", props.category.max_score) }</th>
                </tr>
            </thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}
