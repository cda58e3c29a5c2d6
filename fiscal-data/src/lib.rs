//! Data access layer: a REST-backed [`fiscal_core::FiscalStore`]
//! implementation and the explicit session context handed to boundary
//! code.

pub mod client;
pub mod session;

pub use client::RestStore;
pub use session::Session;
