//! One-time roster creation for a fresh, empty class.

use crate::api::ApiClient;
use crate::dom;
use classmark_core::{MAX_ROSTER_SIZE, RosterDraft, parse_count};
use yew::prelude::*;

const DEFAULT_COUNT: &str = "30";

#[derive(Properties, PartialEq)]
pub struct RosterSetupPageProps {
    pub api: ApiClient,
    /// Fired after the bulk creation succeeds.
    pub on_complete: Callback<()>,
}

#[function_component(RosterSetupPage)]
pub fn roster_setup_page(props: &RosterSetupPageProps) -> Html {
    let count_raw = use_state(|| DEFAULT_COUNT.to_string());
    let draft = use_state(|| None::<RosterDraft>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_count = {
        let count_raw = count_raw.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                count_raw.set(value);
            }
        })
    };

    let on_generate = {
        let count_raw = count_raw.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match parse_count(&count_raw) {
                Some(count) => {
                    draft.set(Some(RosterDraft::with_count(count)));
                    error.set(None);
                }
                None => error.set(Some(format!(
                    "Enter a number of students between 1 and {MAX_ROSTER_SIZE}."
                ))),
            }
        })
    };

    let on_back = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(None);
            error.set(None);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let busy = busy.clone();
        let api = props.api.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Some(current) = draft.as_ref() else {
                return;
            };
            let students = match current.validate() {
                Ok(students) => students,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_complete = on_complete.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_students(&students).await {
                    Ok(()) => on_complete.emit(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let error_line = error.as_ref().map(|message| {
        html! { <p class="form-error" role="alert">{ message }</p> }
    });

    match draft.as_ref() {
        None => html! {
            <main class="roster-page">
                <form class="roster-card" onsubmit={on_generate}>
                    <h1>{ "Set up the class roster" }</h1>
                    <label for="roster-count">{ "Number of students" }</label>
                    <input
                        id="roster-count"
                        type="number"
                        min="1"
                        max={MAX_ROSTER_SIZE.to_string()}
                        value={(*count_raw).clone()}
                        oninput={on_count}
                    />
                    { error_line }
                    <button type="submit">{ "Continue" }</button>
                </form>
            </main>
        },
        Some(current) => {
            let rows: Html = current
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| {
                    let draft = draft.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        if let Some(value) = dom::input_value(&e) {
                            let mut next = match draft.as_ref() {
                                Some(d) => d.clone(),
                                None => return,
                            };
                            next.set_name(index, value);
                            draft.set(Some(next));
                        }
                    });
                    html! {
                        <tr key={slot.student_number.to_string()}>
                            <td class="roster-number">{ slot.student_number }</td>
                            <td>
                                <input
                                    type="text"
                                    value={slot.name.clone()}
                                    placeholder="Name"
                                    {oninput}
                                    disabled={*busy}
                                />
                            </td>
                        </tr>
                    }
                })
                .collect();
            html! {
                <main class="roster-page">
                    <form class="roster-card" {onsubmit}>
                        <h1>{ "Enter student names" }</h1>
                        <table class="roster-table">
                            <thead>
                                <tr>
                                    <th>{ "No." }</th>
                                    <th>{ "Name" }</th>
                                </tr>
                            </thead>
                            <tbody>{ rows }</tbody>
                        </table>
                        { error_line }
                        <div class="roster-actions">
                            <button type="button" onclick={on_back} disabled={*busy}>
                                { "Back" }
                            </button>
                            <button type="submit" disabled={*busy}>
                                { if *busy { "Creating..." } else { "Create roster" } }
                            </button>
                        </div>
                    </form>
                </main>
            }
        }
    }
}
