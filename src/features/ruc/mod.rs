//! RUC lookup proxy.
//!
//! Forwards a RUC to the external SUNAT registry API and reshapes the answer
//! into a flat record. Every request performs exactly one upstream call.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/ruc?numero={ruc}` | Look up a taxpayer by RUC |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RucService;
