//! One-way sync keeping the address bar in step with the phase.

#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// The route to push for a phase, or `None` when the bar already
/// matches. The dashboard owns both `/` and `/category/:id`, so a
/// category deep link is left alone.
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    if phase == Phase::Dashboard
        && matches!(current_route, Some(Route::Home | Route::Category { .. }))
    {
        return None;
    }
    let new_route = Route::from_phase(&phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: &UseStateHandle<Phase>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(**phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_the_push_when_the_route_already_matches() {
        assert!(next_route_for_phase(Phase::Login, Some(&Route::Login)).is_none());
        assert_eq!(
            next_route_for_phase(Phase::Login, Some(&Route::Home)),
            Some(Route::Login)
        );
    }

    #[test]
    fn dashboard_keeps_category_deep_links() {
        assert!(
            next_route_for_phase(Phase::Dashboard, Some(&Route::Category { id: 3 })).is_none()
        );
        assert!(next_route_for_phase(Phase::Dashboard, Some(&Route::Home)).is_none());
        assert_eq!(
            next_route_for_phase(Phase::Dashboard, Some(&Route::Login)),
            Some(Route::Home)
        );
    }

    #[test]
    fn auth_screens_displace_protected_routes() {
        assert_eq!(
            next_route_for_phase(Phase::Login, Some(&Route::Category { id: 3 })),
            Some(Route::Login)
        );
        assert_eq!(
            next_route_for_phase(Phase::PasswordSetup, None),
            Some(Route::Setup)
        );
    }
}
