//! Phase-to-screen dispatch.

use crate::app::bootstrap::resolve_post_login_phase;
use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::pages::{DashboardPage, LoginPage, RosterSetupPage, SetupPage};
use crate::router::Route;
use yew::prelude::*;

#[must_use]
pub fn render_app(app_state: &AppState, route: Option<&Route>) -> Html {
    let api = app_state.api.clone();
    match *app_state.phase {
        Phase::Boot => html! {
            <div class="boot-screen" role="status">
                <p>{ "Loading..." }</p>
            </div>
        },
        Phase::LoadFailed => html! {
            <div class="boot-screen boot-screen--error" role="alert">
                <p>{ "The app could not be loaded. Check the connection and reload the page." }</p>
            </div>
        },
        Phase::PasswordSetup => {
            let phase = app_state.phase.clone();
            let on_complete = Callback::from(move |()| phase.set(Phase::Login));
            html! { <SetupPage {api} {on_complete} /> }
        }
        Phase::Login => {
            let phase = app_state.phase.clone();
            let roster_api = app_state.api.clone();
            let on_complete = Callback::from(move |()| {
                let phase = phase.clone();
                let api = roster_api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    phase.set(resolve_post_login_phase(&api).await);
                });
            });
            html! { <LoginPage {api} {on_complete} /> }
        }
        Phase::RosterSetup => {
            let phase = app_state.phase.clone();
            let on_complete = Callback::from(move |()| phase.set(Phase::Dashboard));
            html! { <RosterSetupPage {api} {on_complete} /> }
        }
        Phase::Dashboard => {
            let selected_category_id = match route {
                Some(Route::Category { id }) => Some(*id),
                _ => None,
            };
            html! { <DashboardPage {api} {selected_category_id} /> }
        }
    }
}
