//! 온수 가열 비용 계산 모듈 모음.

pub mod boiler_cost;
pub mod season;

pub use boiler_cost::*;
pub use season::*;
