//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `summary`, `toast`) so individual
//! components can depend on small focused models.

pub mod session;
pub mod summary;
pub mod toast;
