//! Host router port.

use rekey_domain::Route;

/// Port for the navigation component of the hosting UI.
pub trait Navigator: Send + Sync {
    /// Asks the host to move to the given route.
    fn navigate_to(&self, route: Route);
}
