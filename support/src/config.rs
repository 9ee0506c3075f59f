use crate::error::Error;
use crate::math::*;
use crate::token::Category;

use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Direction of the rescan spin.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Clockwise,
    Anticlockwise,
}

impl Rotation {
    /// The sign applied to turn commands.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Rotation::Clockwise => 1.0,
            Rotation::Anticlockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::Anticlockwise,
            Rotation::Anticlockwise => Rotation::Clockwise,
        }
    }
}

/// Whether to reverse the rescan direction after each kind of task.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateRotation {
    pub after_grab: bool,
    pub after_release: bool,
}

/// Proportional gains of the approach controller.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Gains {
    /// `k1` in `speed = d * (1 + k1 / sqrt(dt))`.
    pub linear: f64,

    /// `k2` in `ang_speed = ang * (k2 + k3 / dt)`.
    pub angular_base: f64,

    /// `k3` in `ang_speed = ang * (k2 + k3 / dt)`.
    pub angular_rate: f64,
}

impl Default for Gains {
    fn default() -> Self {
        Gains {
            linear: 24.0,
            angular_base: 0.3,
            angular_rate: 0.05,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {

    /// Bearing dead-band in degrees, shared by grabbing and releasing.
    pub angle_threshold: f64,

    /// Distance dead-band for grabbing.
    pub grab_distance: f64,

    /// Distance dead-band for releasing. Looser than `grab_distance`, and also
    /// the largest separation the placement check accepts.
    pub release_distance: f64,

    /// The kind of token carried. The other kind is where it gets released.
    pub grab_category: Category,

    /// Initial direction of the rescan spin.
    pub initial_rotation: Rotation,

    pub alternate_rotation: AlternateRotation,

    /// A grab search gives up after this multiple of the time budget.
    pub max_time_ratio: f64,

    pub gains: Gains,

    /// Fraction of the spin speed applied in the opposite direction to end a
    /// rescan manoeuvre.
    pub spin_correction: f64,

    /// The range of allowed wheel power values.
    pub power_limits: Clamped<f64>,

    /// Magnitude of the random turn added on each placement sweep tick, as a
    /// fraction of the spin speed.
    pub jitter_fraction: f64,

    /// Length of the placement sweep as a multiple of the time budget.
    pub sweep_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            angle_threshold: 2.0,
            grab_distance: 0.4,
            release_distance: 0.6,

            grab_category: Category::Silver,
            initial_rotation: Rotation::Anticlockwise,
            alternate_rotation: AlternateRotation::default(),

            max_time_ratio: 5.0,
            gains: Gains::default(),
            spin_correction: 0.95,
            power_limits: Clamped::new(-100.0, 100.0),

            jitter_fraction: 0.1,
            sweep_ratio: 3.0,
        }
    }
}

impl Config {
    /// Reads a JSON configuration. Missing fields take their default values.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Config::from_reader(BufReader::new(file))
    }

    /// Checks that the values describe a controller that can make progress.
    pub fn validate(&self) -> Result<(), Error> {
        let positive = [
            ("angle_threshold", self.angle_threshold),
            ("grab_distance", self.grab_distance),
            ("release_distance", self.release_distance),
            ("sweep_ratio", self.sweep_ratio),
        ];

        for &(name, value) in positive.iter() {
            if !(value > 0.0) || !value.is_finite() {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if !(self.max_time_ratio >= 1.0) {
            return Err(invalid(format!("max_time_ratio must be at least 1, got {}",
                                       self.max_time_ratio)));
        }

        if !(self.spin_correction > 0.0 && self.spin_correction <= 1.0) {
            return Err(invalid(format!("spin_correction must be in (0, 1], got {}",
                                       self.spin_correction)));
        }

        if !(self.jitter_fraction >= 0.0) {
            return Err(invalid(format!("jitter_fraction must not be negative, got {}",
                                       self.jitter_fraction)));
        }

        if self.power_limits.is_empty() {
            return Err(invalid(format!("power_limits is empty: [{}, {}]",
                                       self.power_limits.min,
                                       self.power_limits.max)));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidConfig(msg)
}

/// The fixed period of the control loop, injected by whoever starts the run,
/// and the timings that scale with it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ControlPeriod {
    dt: f64,
}

impl ControlPeriod {
    /// Used when the harness does not supply a period.
    pub const DEFAULT_SECS: f64 = 0.05;

    pub fn new(dt: f64) -> Result<Self, Error> {
        if dt > 0.0 && dt.is_finite() {
            Ok(ControlPeriod { dt })
        } else {
            Err(Error::InvalidPeriod(dt))
        }
    }

    /// Length of one control tick in seconds.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn sqrt(&self) -> f64 {
        self.dt.sqrt()
    }

    /// Overall time budget of the task cycle, in seconds.
    pub fn budget(&self) -> f64 {
        round1(0.5 + 8.0 * self.sqrt())
    }

    /// Wheel power used for spinning and backing off.
    pub fn spin_speed(&self) -> f64 {
        1.0 + round1(9.0 / self.dt)
    }

    /// How long to reverse away from a token after releasing.
    pub fn back_off(&self) -> f64 {
        3.0 * self.sqrt()
    }

    /// Time spent over `ticks` control ticks.
    #[inline]
    pub fn ticks(&self, ticks: u32) -> f64 {
        ticks as f64 * self.dt
    }
}

impl Default for ControlPeriod {
    fn default() -> Self {
        ControlPeriod { dt: ControlPeriod::DEFAULT_SECS }
    }
}
