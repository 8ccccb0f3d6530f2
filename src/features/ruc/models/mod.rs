pub mod taxpayer;

pub use taxpayer::TaxpayerRecord;
