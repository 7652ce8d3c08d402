//! plank-ui - Shared UI components for plank
//!
//! Pure view components for the marketing pages. Components take data and
//! callbacks as props; navigation, auth, and data fetching live in the
//! hosting shell.

pub mod components;

pub use components::*;
