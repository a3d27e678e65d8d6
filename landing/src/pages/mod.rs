// Routes

mod home;
mod setup;

pub use home::HomePage;
pub use setup::SetupPage;
