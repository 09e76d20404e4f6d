//! Navigation hand-off and the page navigation bar.

/// Destinations and the navigator collaborator.
pub mod destination;
/// Logo dropdown, scroll state and mobile menu.
pub mod navbar;
/// Scoped body scroll locking.
pub mod scroll_lock;
