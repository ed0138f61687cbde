//! Nav Host Port - The host navigation controller
//!
//! The controller is owned by the surrounding UI tree. It keeps the back
//! stack and resolves route strings to destinations; this crate only asks it
//! to push a route or pop one entry.

/// Port for the host navigation controller
///
/// One instance exists per UI tree. All calls come from the UI thread and
/// complete immediately.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NavHostPort: Send + Sync {
    /// Push the destination matching `route` onto the back stack
    ///
    /// Rejected routes are the controller's concern and are not reported
    /// back to the caller.
    fn navigate(&self, route: &str);

    /// Pop one entry off the back stack
    ///
    /// Returns whether an entry was popped. Callers are free to ignore it.
    fn pop_back_stack(&self) -> bool;
}
