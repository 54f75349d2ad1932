//! Boot-time gate: one probe decides which screen comes up first.

use crate::api::{ApiClient, ApiError};
use crate::app::phase::Phase;
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// First screen after the setup probe, before any roster check.
const fn entry_phase(has_password: bool, has_session: bool) -> Phase {
    if !has_password {
        Phase::PasswordSetup
    } else if has_session {
        Phase::Dashboard
    } else {
        Phase::Login
    }
}

/// Screen for a fresh session: an empty roster diverts to the one-time
/// roster form, anything else lands on the dashboard.
const fn post_login_phase(student_count: u32) -> Phase {
    if student_count == 0 {
        Phase::RosterSetup
    } else {
        Phase::Dashboard
    }
}

/// Run the full gate: setup probe, session check, roster check.
///
/// A stale token is dropped and the user is sent back to the login
/// screen; only a failed setup probe is fatal.
pub async fn resolve_entry_phase(api: &ApiClient) -> Phase {
    let status = match api.check_setup().await {
        Ok(status) => status,
        Err(err) => {
            log::error!("Setup probe failed: {err}");
            return Phase::LoadFailed;
        }
    };
    match entry_phase(status.has_password, api.has_session()) {
        Phase::Dashboard => resolve_post_login_phase(api).await,
        phase => phase,
    }
}

/// Roster check for a session that just became valid.
pub async fn resolve_post_login_phase(api: &ApiClient) -> Phase {
    match api.student_count().await {
        Ok(count) => post_login_phase(count),
        Err(ApiError::Server { status: 401, .. }) => {
            api.end_session();
            Phase::Login
        }
        Err(err) => {
            log::error!("Roster probe failed: {err}");
            Phase::LoadFailed
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let phase = app_state.phase.clone();
    let api = app_state.api.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            phase.set(resolve_entry_phase(&api).await);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_password_wins_over_everything() {
        assert_eq!(entry_phase(false, false), Phase::PasswordSetup);
        assert_eq!(entry_phase(false, true), Phase::PasswordSetup);
    }

    #[test]
    fn session_presence_picks_login_or_dashboard() {
        assert_eq!(entry_phase(true, false), Phase::Login);
        assert_eq!(entry_phase(true, true), Phase::Dashboard);
    }

    #[test]
    fn empty_roster_diverts_to_roster_setup() {
        assert_eq!(post_login_phase(0), Phase::RosterSetup);
        assert_eq!(post_login_phase(1), Phase::Dashboard);
        assert_eq!(post_login_phase(30), Phase::Dashboard);
    }
}
