//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that host adapters must implement,
//! so the navigation facade never depends on a concrete navigation
//! controller.

pub mod nav_host_port;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use nav_host_port::NavHostPort;

#[cfg(any(test, feature = "testing"))]
pub use nav_host_port::MockNavHostPort;
