pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use controller::{
    RoundSettlement, aggregate, block_outs, extract_events, rate, settle, settle_round, validate,
    validate_round,
};
pub use error::SettleError;
