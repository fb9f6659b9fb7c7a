mod citypulse;
mod clarify;
mod dashboard;
mod helpboard;
mod login;
mod pedestrian;
mod profile;
mod settings;
mod signup;

pub use citypulse::CityPulse;
pub use clarify::Clarify;
pub use dashboard::Dashboard;
pub use helpboard::{Helpboard, HelpboardMine};
pub use login::Login;
pub use pedestrian::Pedestrian;
pub use profile::Profile;
pub use settings::Settings;
pub use signup::Signup;
