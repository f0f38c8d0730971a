pub mod args;
pub mod cutmix;
pub mod error;
pub mod net;
pub mod optim;
pub mod schedule;
pub mod stats;

pub use error::{Result, TrainErr};
