// =============================================================================
// Timeless Web - Browser Services
// =============================================================================
// Table of Contents:
// 1. Theme persistence and document marker
// 2. Viewport visibility
// =============================================================================

pub mod theme;
pub mod visibility;

pub use theme::{DocumentMarker, LocalThemeStore};
pub use visibility::{VisibilityObserver, VisibilityReport};
