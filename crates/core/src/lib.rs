#![forbid(unsafe_code)]

pub mod model;
pub mod roadmap;
pub mod time;

pub use time::Clock;
