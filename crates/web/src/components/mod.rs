// =============================================================================
// Timeless Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Navigation
// 3. Common Components
// 4. Animated Counter
// =============================================================================

pub mod common;
pub mod counter;
pub mod footer;
pub mod layout;
pub mod nav;

pub use common::{CtaLink, CtaVariant, HighlightTile, ServiceCard, StatTile};
pub use counter::AnimatedCounter;
pub use footer::Footer;
pub use layout::Layout;
pub use nav::Navbar;
