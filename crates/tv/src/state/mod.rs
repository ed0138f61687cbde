//! Session state containers
//!
//! Holders that own per-session navigation state and hand it to callers.

mod app_session;

pub use app_session::AppSession;
