//! One-time shared password setup, shown only while no password exists.

use crate::api::ApiClient;
use crate::dom;
use classmark_core::validate_new_password;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SetupPageProps {
    pub api: ApiClient,
    /// Fired once the password is accepted; the caller moves on to the
    /// login screen.
    pub on_complete: Callback<()>,
}

#[function_component(SetupPage)]
pub fn setup_page(props: &SetupPageProps) -> Html {
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                password.set(value);
            }
        })
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                confirm.set(value);
            }
        })
    };

    let onsubmit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let busy = busy.clone();
        let api = props.api.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            if let Err(err) = validate_new_password(&password, &confirm) {
                error.set(Some(err.to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            let password = (*password).clone();
            let api = api.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_complete = on_complete.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.setup_password(&password).await {
                    Ok(()) => on_complete.emit(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <main class="auth-page">
            <form class="auth-card" {onsubmit}>
                <h1>{ "Set a password" }</h1>
                <p class="auth-card__hint">
                    { "This password is shared by everyone who records scores." }
                </p>
                <label for="setup-password">{ "Password" }</label>
                <input
                    id="setup-password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password}
                    disabled={*busy}
                />
                <label for="setup-confirm">{ "Confirm password" }</label>
                <input
                    id="setup-confirm"
                    type="password"
                    value={(*confirm).clone()}
                    oninput={on_confirm}
                    disabled={*busy}
                />
                if let Some(message) = error.as_ref() {
                    <p class="form-error" role="alert">{ message }</p>
                }
                <button type="submit" disabled={*busy}>
                    { if *busy { "Saving..." } else { "Save password" } }
                </button>
            </form>
        </main>
    }
}
