use crate::token::Token;

use schedule_recv::oneshot_ms;

use std::time::Instant;

/// Power applied to each of the two drive wheels.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct WheelPower {
    pub left: f64,
    pub right: f64,
}

impl WheelPower {
    #[inline]
    pub fn new(left: f64, right: f64) -> Self {
        WheelPower { left, right }
    }

    /// Both wheels at rest.
    #[inline]
    pub fn zero() -> Self {
        WheelPower::default()
    }
}

/// The robot handle supplied by the simulator. Calls on it are assumed never
/// to fail; the controlling script owns it exclusively for the whole run.
pub trait Robot {
    /// Every token visible from the robot's current pose.
    fn see(&mut self) -> Vec<Token>;

    /// The power currently applied to the wheels.
    fn wheel_power(&self) -> WheelPower;

    /// Apply new power to the wheels.
    fn set_wheel_power(&mut self, power: WheelPower);

    /// Close the gripper on whatever is in front of the robot. Returns whether
    /// a token was picked up.
    fn grab(&mut self) -> bool;

    /// Open the gripper. Returns whether a token was being held.
    fn release(&mut self) -> bool;
}

/// Source of time for the control loop. A simulator may advance its own
/// clock in `sleep` rather than waiting.
pub trait Clock {
    /// Suspend the control loop for `secs` seconds.
    fn sleep(&mut self, secs: f64);

    /// Seconds since the clock was created.
    fn now(&self) -> f64;
}

/// A clock running in real time. Sleeps are rounded to whole milliseconds,
/// so periods under half a millisecond do not wait at all.
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        WallClock { start: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        WallClock::new()
    }
}

impl Clock for WallClock {
    fn sleep(&mut self, secs: f64) {
        if secs <= 0.0 {
            return;
        }

        let ms = (secs * 1000.0).round() as u32;

        // The timer thread only hangs up after firing, so an error here still
        // means the time is up.
        let _ = oneshot_ms(ms).recv();
    }

    fn now(&self) -> f64 {
        let d = self.start.elapsed();
        d.as_secs() as f64 + d.subsec_nanos() as f64 / 1_000_000_000.0
    }
}
