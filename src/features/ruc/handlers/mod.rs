pub mod ruc_handler;

pub use ruc_handler::*;
