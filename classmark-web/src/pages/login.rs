//! Shared-password login.

use crate::api::ApiClient;
use crate::dom;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api: ApiClient,
    /// Fired once a token is held; the caller decides between roster
    /// setup and the dashboard.
    pub on_complete: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let password = use_state(String::new);
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

    let onsubmit = {
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let api = props.api.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
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
                match api.login(&password).await {
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
                <h1>{ "Sign in" }</h1>
                <label for="login-password">{ "Password" }</label>
                <input
                    id="login-password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password}
                    disabled={*busy}
                />
                if let Some(message) = error.as_ref() {
                    <p class="form-error" role="alert">{ message }</p>
                }
                <button type="submit" disabled={*busy}>
                    { if *busy { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_the_password_prompt() {
        let html = block_on(
            LocalServerRenderer::<LoginPage>::with_props(LoginPageProps {
                api: ApiClient::new(Rc::new(MemoryTokenStore::default())),
                on_complete: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("Sign in"));
        assert!(html.contains("login-password"));
    }
}
