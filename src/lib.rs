//! Dermatone - skin tone scale reconciliation
//!
//! Reads tone detector output, maps each detected skin color onto the
//! Fitzpatrick and von Luschan scales with [`tone_scale`], and writes the
//! reconciled table. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
