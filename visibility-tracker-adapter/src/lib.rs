//! Adapter utilities for the `visibility-tracker` crate.
//!
//! The `visibility-tracker` crate is UI-agnostic and only defines the collaborator traits. This
//! crate provides small, framework-neutral implementations commonly needed by adapters:
//!
//! - A scroll host that samples pan velocity from content-offset events
//! - A value-backed data source (tracking rect + per-key objectives)
//! - An event queue delegate for batching impressions
//! - A debug observer producing per-item overlay labels
//! - A controller wiring the above to a tracker
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
//!
//! Without the `std` feature only [`VelocitySampler`] is available; the other collaborators keep
//! their state behind `std::sync::Mutex`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
#[cfg_attr(not(feature = "std"), allow(unused_macros))]
mod macros;

#[cfg(feature = "std")]
mod controller;
mod key;
#[cfg(feature = "std")]
mod labels;
#[cfg(feature = "std")]
mod recorder;
mod sampler;
#[cfg(feature = "std")]
mod source;

#[cfg(all(test, feature = "std"))]
mod tests;

#[cfg(feature = "std")]
pub use controller::Controller;
pub use key::TrackingKey;
#[cfg(feature = "std")]
pub use labels::{DebugLabel, DebugLabels};
#[cfg(feature = "std")]
pub use recorder::{EventRecorder, TrackingEvent};
pub use sampler::VelocitySampler;
#[cfg(feature = "std")]
pub use source::StaticDataSource;
