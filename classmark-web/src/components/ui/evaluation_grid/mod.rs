//! Stateful evaluation grid for one category: fetches records, owns the
//! date columns and the inline cell editor, and talks to the service.

mod view;

pub use view::{EditingCell, GridTable, GridTableProps};

use crate::api::ApiClient;
use crate::dom;
use classmark_core::model::{Category, Evaluation, EvaluationPatch, NewEvaluation, Student};
use classmark_core::{
    add_date_column, date_columns, find_evaluation, rename_date_column, validate_score,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Columns derived from the fetched records, keeping any columns the
/// user added by hand that have no records yet.
fn merge_columns(existing: &[String], evaluations: &[Evaluation]) -> Vec<String> {
    existing
        .iter()
        .fold(date_columns(evaluations), |acc, date| {
            add_date_column(&acc, date)
        })
}

#[derive(Properties, PartialEq)]
pub struct EvaluationGridProps {
    pub api: ApiClient,
    pub category: Category,
    pub students: Vec<Student>,
    /// Fired after the category is deleted on the service.
    pub on_deleted: Callback<i64>,
    pub on_select_student: Callback<Student>,
}

#[function_component(EvaluationGrid)]
pub fn evaluation_grid(props: &EvaluationGridProps) -> Html {
    let evaluations = use_state(Vec::<Evaluation>::new);
    let dates = use_state(Vec::<String>::new);
    let editing = use_state(|| None::<EditingCell>);
    let editor_value = use_state(String::new);
    let error = use_state(|| None::<String>);
    let editor_ref = use_node_ref();
    let saving = use_mut_ref(|| false);

    {
        let api = props.api.clone();
        let evaluations = evaluations.clone();
        let dates = dates.clone();
        let editing = editing.clone();
        let error = error.clone();
        use_effect_with(props.category.id, move |&category_id| {
            editing.set(None);
            dates.set(Vec::new());
            wasm_bindgen_futures::spawn_local(async move {
                match api.evaluations_for_category(category_id).await {
                    Ok(records) => {
                        dates.set(date_columns(&records));
                        evaluations.set(records);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || {}
        });
    }

    {
        let editor_ref = editor_ref.clone();
        use_effect_with((*editing).clone(), move |editing| {
            if editing.is_some()
                && let Some(input) = editor_ref.cast::<HtmlInputElement>()
            {
                let _ = input.focus();
                input.select();
            }
            || {}
        });
    }

    let on_cell_click = {
        let evaluations = evaluations.clone();
        let editing = editing.clone();
        let editor_value = editor_value.clone();
        let error = error.clone();
        Callback::from(move |(student_id, date): (i64, String)| {
            let current = find_evaluation(&evaluations, student_id, &date)
                .map(|e| e.score.to_string())
                .unwrap_or_default();
            editor_value.set(current);
            error.set(None);
            editing.set(Some(EditingCell { student_id, date }));
        })
    };

    let on_editor_input = {
        let editor_value = editor_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                editor_value.set(value);
            }
        })
    };

    let commit = {
        let api = props.api.clone();
        let category = props.category.clone();
        let evaluations = evaluations.clone();
        let dates = dates.clone();
        let editing = editing.clone();
        let editor_value = editor_value.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |()| {
            if *saving.borrow() {
                return;
            }
            let Some(cell) = (*editing).clone() else {
                return;
            };
            if editor_value.trim().is_empty() {
                editing.set(None);
                error.set(None);
                return;
            }
            let score = match validate_score(&editor_value, category.max_score) {
                Ok(score) => score,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            *saving.borrow_mut() = true;
            let existing = find_evaluation(&evaluations, cell.student_id, &cell.date).cloned();
            let api = api.clone();
            let category_id = category.id;
            let evaluations = evaluations.clone();
            let dates = dates.clone();
            let editing = editing.clone();
            let error = error.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let saved = match existing {
                    Some(record) => api
                        .update_evaluation(
                            record.id,
                            &EvaluationPatch {
                                score,
                                evaluation_date: cell.date.clone(),
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => api
                        .create_evaluation(&NewEvaluation {
                            student_id: cell.student_id,
                            category_id,
                            score,
                            evaluation_date: cell.date.clone(),
                        })
                        .await
                        .map(|_| ()),
                };
                match saved {
                    Ok(()) => {
                        // Re-fetch instead of patching local state, so the
                        // grid shows exactly what was stored.
                        match api.evaluations_for_category(category_id).await {
                            Ok(records) => {
                                dates.set(merge_columns(&dates, &records));
                                evaluations.set(records);
                                error.set(None);
                            }
                            Err(err) => error.set(Some(err.to_string())),
                        }
                        editing.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                *saving.borrow_mut() = false;
            });
        })
    };

    let on_editor_keydown = {
        let commit = commit.clone();
        let editing = editing.clone();
        let error = error.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                commit.emit(());
            }
            "Escape" => {
                editing.set(None);
                error.set(None);
            }
            _ => {}
        })
    };

    let on_editor_blur = {
        let commit = commit.clone();
        Callback::from(move |_: FocusEvent| commit.emit(()))
    };

    let on_date_renamed = {
        let dates = dates.clone();
        let editing = editing.clone();
        Callback::from(move |(old, new): (String, String)| {
            if new.is_empty() || old == new {
                return;
            }
            dates.set(rename_date_column(&dates, &old, &new));
            // A pending edit follows its column so the commit saves
            // under the renamed date.
            if let Some(cell) = (*editing).clone()
                && cell.date == old
            {
                editing.set(Some(EditingCell {
                    date: new,
                    ..cell
                }));
            }
        })
    };

    let on_add_date = {
        let dates = dates.clone();
        Callback::from(move |_: MouseEvent| {
            dates.set(add_date_column(&dates, &dom::today_iso()));
        })
    };

    let on_delete = {
        let api = props.api.clone();
        let category = props.category.clone();
        let error = error.clone();
        let on_deleted = props.on_deleted.clone();
        Callback::from(move |_: MouseEvent| {
            if !dom::confirm(&format!("Delete the category \"{}\"?", category.name)) {
                return;
            }
            let api = api.clone();
            let error = error.clone();
            let on_deleted = on_deleted.clone();
            let category_id = category.id;
            wasm_bindgen_futures::spawn_local(async move {
                match api.delete_category(category_id).await {
                    Ok(()) => on_deleted.emit(category_id),
                    // The service refuses while records exist; show its
                    // message as-is.
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <section class="grid-panel">
            <header class="grid-panel__header">
                <h1>{ &props.category.name }</h1>
                <div class="grid-panel__actions">
                    <button type="button" onclick={on_add_date}>{ "Add today's column" }</button>
                    <button type="button" class="grid-panel__delete" onclick={on_delete}>
                        { "Delete category" }
                    </button>
                </div>
            </header>
            if let Some(message) = error.as_ref() {
                <p class="form-error" role="alert">{ message }</p>
            }
            <GridTable
                category={props.category.clone()}
                students={props.students.clone()}
                evaluations={(*evaluations).clone()}
                dates={(*dates).clone()}
                editing={(*editing).clone()}
                editor_value={AttrValue::from((*editor_value).clone())}
                editor_ref={editor_ref}
                {on_cell_click}
                on_student_click={props.on_select_student.clone()}
                {on_date_renamed}
                {on_editor_input}
                {on_editor_keydown}
                {on_editor_blur}
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn category() -> Category {
        Category {
            id: 1,
            name: "받아쓰기".to_string(),
            max_score: 10.0,
        }
    }

    fn student(id: i64, number: u32, name: &str) -> Student {
        Student {
            id,
            student_number: number,
            name: name.to_string(),
            active: true,
        }
    }

    fn eval(id: i64, student_id: i64, score: f64, date: &str) -> Evaluation {
        Evaluation {
            id,
            student_id,
            category_id: 1,
            score,
            evaluation_date: date.to_string(),
        }
    }

    fn table_props(evaluations: Vec<Evaluation>, editing: Option<EditingCell>) -> GridTableProps {
        let dates = date_columns(&evaluations);
        GridTableProps {
            category: category(),
            students: vec![student(1, 1, "김하늘"), student(2, 2, "이준호")],
            evaluations,
            dates,
            editing,
            editor_value: AttrValue::default(),
            editor_ref: NodeRef::default(),
            on_cell_click: Callback::noop(),
            on_student_click: Callback::noop(),
            on_date_renamed: Callback::noop(),
            on_editor_input: Callback::noop(),
            on_editor_keydown: Callback::noop(),
            on_editor_blur: Callback::noop(),
        }
    }

    #[test]
    fn merged_columns_keep_hand_added_empty_dates() {
        let records = vec![eval(1, 1, 8.0, "2026-03-02")];
        let existing = vec!["2026-03-09".to_string(), "2026-03-02".to_string()];
        assert_eq!(
            merge_columns(&existing, &records),
            vec!["2026-03-09", "2026-03-02"]
        );
    }

    #[test]
    fn table_shows_scores_averages_and_gaps() {
        let html = block_on(
            LocalServerRenderer::<GridTable>::with_props(table_props(
                vec![
                    eval(1, 1, 8.0, "2026-03-02"),
                    eval(2, 1, 6.0, "2026-03-09"),
                ],
                None,
            ))
            .render(),
        );
        assert!(html.contains("받아쓰기") || html.contains("Avg"));
        assert!(html.contains("7.0"));
        assert!(html.contains("grid__cell--max"));
        assert!(html.contains("grid__cell--min"));
        assert!(html.contains("grid__cell--empty"));
    }

    #[test]
    fn tied_rows_are_not_highlighted() {
        let html = block_on(
            LocalServerRenderer::<GridTable>::with_props(table_props(
                vec![
                    eval(1, 1, 8.0, "2026-03-02"),
                    eval(2, 1, 8.0, "2026-03-09"),
                ],
                None,
            ))
            .render(),
        );
        assert!(!html.contains("grid__cell--max"));
        assert!(!html.contains("grid__cell--min"));
    }

    #[test]
    fn editing_cell_renders_the_inline_editor() {
        let html = block_on(
            LocalServerRenderer::<GridTable>::with_props(table_props(
                vec![eval(1, 1, 8.0, "2026-03-02")],
                Some(EditingCell {
                    student_id: 1,
                    date: "2026-03-02".to_string(),
                }),
            ))
            .render(),
        );
        assert!(html.contains("grid__editor"));
    }

    #[test]
    fn date_headers_are_editable_inputs_in_descending_order() {
        let html = block_on(
            LocalServerRenderer::<GridTable>::with_props(table_props(
                vec![
                    eval(1, 1, 8.0, "2026-03-02"),
                    eval(2, 2, 5.0, "2026-03-09"),
                ],
                None,
            ))
            .render(),
        );
        let newer = html.find("2026-03-09").expect("newer column");
        let older = html.find("2026-03-02").expect("older column");
        assert!(newer < older);
        assert!(html.contains("type=\"date\""));
    }
}
