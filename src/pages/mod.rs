//! Page components for Folio.

mod home;
mod project;

pub use home::Home;
pub use project::ProjectPage;
