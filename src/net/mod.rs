//! Network helpers for talking to the portal backend.

pub mod api;
