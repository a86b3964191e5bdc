//! Portfolio-level types.

mod config;
mod delta;

pub use config::ProfitConfig;
pub use delta::InstrumentDelta;
