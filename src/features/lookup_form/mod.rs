//! RUC lookup page.
//!
//! A single form that collects a RUC and shows one of four states: idle,
//! loading, error or result. The state machine lives in [`models::LookupForm`];
//! the page renders it server side and its script drives the same transitions
//! in the browser against `/api/ruc`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Lookup page |
//! | GET | `/?numero={raw}` | Lookup page after a plain form submission |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
