//! Presentation helpers shared by the portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module is an independent helper. Browser access is confined to
//! `dom` and to `hydrate`-gated blocks so the pure parts stay testable.

pub mod debounce;
#[cfg(feature = "hydrate")]
pub(crate) mod dom;
pub mod format;
pub mod loading;
pub mod report;
pub mod style;
pub mod toast;
pub mod validate;
