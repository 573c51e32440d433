//! JobMagnet: an in-memory job board engine with an HTTP surface.
//!
//! All state is held client-side by a [`board::JobStore`] seeded from
//! structured records; there is no persistence layer. The [`board::JobBoard`]
//! handle is the single logical owner of the store.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
