pub mod config;
pub mod error;
pub mod math;
pub mod robot;
pub mod token;

pub use config::{Config, ControlPeriod};
pub use error::Error;
pub use robot::{Clock, Robot, WallClock, WheelPower};
pub use token::{Category, Token};
