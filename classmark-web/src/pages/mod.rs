pub mod dashboard;
pub mod login;
pub mod roster_setup;
pub mod setup;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use roster_setup::RosterSetupPage;
pub use setup::SetupPage;
