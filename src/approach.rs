//! Proportional approach towards a target token.
//!
//! Each control tick turns the target's distance and bearing into at most one
//! drive and one turn command. Small errors inside the dead-bands are left
//! alone so the robot does not oscillate around its goal.

use crate::session::Session;

use tokenbots_support::config::{Config, ControlPeriod, Gains};
use tokenbots_support::{Clock, Robot, Token};

/// Where a chosen token is, relative to the robot, on the current tick.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Target {
    pub distance: f64,

    /// Degrees, positive clockwise.
    pub bearing: f64,

    pub code: u32,
}

impl Target {
    pub fn of(token: &Token) -> Self {
        Target {
            distance: token.dist,
            bearing: token.rot_y,
            code: token.code,
        }
    }
}

/// How precisely the robot must line up with a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tier {
    Grab,
    Release,
}

/// Dead-bands of one tier.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Thresholds {
    pub distance: f64,
    pub angle: f64,
}

impl Thresholds {
    pub fn for_tier(config: &Config, tier: Tier) -> Self {
        let distance = match tier {
            Tier::Grab => config.grab_distance,
            Tier::Release => config.release_distance,
        };

        Thresholds {
            distance,
            angle: config.angle_threshold,
        }
    }

    /// Whether the target is close enough and straight enough ahead.
    #[inline]
    pub fn reached(&self, target: &Target) -> bool {
        target.distance <= self.distance && target.bearing.abs() <= self.angle
    }
}

/// Output of one controller tick. A zero component means that actuator is
/// left untouched.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Command {
    pub linear: f64,
    pub angular: f64,
}

impl Command {
    pub fn compute(target: &Target,
                   period: ControlPeriod,
                   gains: &Gains,
                   thresholds: &Thresholds)
                   -> Self {
        let linear = if target.distance > thresholds.distance {
            target.distance * (1.0 + gains.linear / period.sqrt())
        } else {
            0.0
        };

        let angular = if target.bearing.abs() > thresholds.angle {
            target.bearing * (gains.angular_base + gains.angular_rate / period.secs())
        } else {
            0.0
        };

        Command { linear, angular }
    }

    /// Issue the command. Driving replaces the wheel power, turning adds to
    /// it.
    pub fn apply<R: Robot, C: Clock>(&self, session: &mut Session<R, C>) {
        if self.linear != 0.0 {
            session.drive(self.linear);
        }

        if self.angular != 0.0 {
            session.turn(self.angular);
        }
    }
}
