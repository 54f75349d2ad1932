//! URL routes and their mapping to application phases.

use crate::app::Phase;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/setup")]
    Setup,
    #[at("/login")]
    Login,
    #[at("/initial-setup")]
    RosterSetup,
    #[at("/category/:id")]
    Category { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route the address bar should show for a phase.
    #[must_use]
    pub fn from_phase(phase: &Phase) -> Self {
        match phase {
            Phase::Boot | Phase::LoadFailed | Phase::Dashboard => Self::Home,
            Phase::PasswordSetup => Self::Setup,
            Phase::Login => Self::Login,
            Phase::RosterSetup => Self::RosterSetup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_category_route() {
        assert_eq!(
            Route::recognize("/category/7"),
            Some(Route::Category { id: 7 })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn phases_map_onto_their_screens() {
        assert_eq!(Route::from_phase(&Phase::PasswordSetup), Route::Setup);
        assert_eq!(Route::from_phase(&Phase::Login), Route::Login);
        assert_eq!(Route::from_phase(&Phase::RosterSetup), Route::RosterSetup);
        assert_eq!(Route::from_phase(&Phase::Dashboard), Route::Home);
    }
}
