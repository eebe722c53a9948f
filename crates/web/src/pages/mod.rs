// =============================================================================
// Timeless Web - Page Components
// =============================================================================

pub mod home;
pub mod not_found;
pub mod section;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use section::SectionPage;
