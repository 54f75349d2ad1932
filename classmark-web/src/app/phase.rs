/// Top-level screen the client is showing. The gate decides the first
/// phase after boot; user actions move between the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Session probe still in flight.
    Boot,
    /// No shared password exists yet; show the one-time setup form.
    PasswordSetup,
    /// Password exists but no session token is held.
    Login,
    /// Logged in with an empty roster; show the one-time roster form.
    RosterSetup,
    /// The working screen: sidebar, grids, charts.
    Dashboard,
    /// The session probe itself failed; nothing else can be shown.
    LoadFailed,
}
