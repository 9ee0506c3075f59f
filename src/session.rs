use crate::perception::Exclusions;

use log::debug;

use tokenbots_support::config::{Config, ControlPeriod, Rotation};
use tokenbots_support::{Clock, Robot, Token, WheelPower};

/// Everything one run of the control script owns: the robot and clock handed
/// over by the harness, the tuning, and the state carried between tasks.
pub struct Session<R, C> {
    robot: R,
    clock: C,
    config: Config,
    period: ControlPeriod,
    rotation: Rotation,
    exclusions: Exclusions,
}

impl<R: Robot, C: Clock> Session<R, C> {
    pub fn new(robot: R, clock: C, config: Config, period: ControlPeriod) -> Self {
        let rotation = config.initial_rotation;

        Session {
            robot,
            clock,
            config,
            period,
            rotation,
            exclusions: Exclusions::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn period(&self) -> ControlPeriod {
        self.period
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Reverse the direction of future rescan spins.
    pub fn reverse_rotation(&mut self) {
        self.rotation = self.rotation.reversed();
    }

    #[inline]
    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    #[inline]
    pub fn exclusions_mut(&mut self) -> &mut Exclusions {
        &mut self.exclusions
    }

    /// Seconds on the injected clock.
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// A fresh reading of the camera.
    pub fn see(&mut self) -> Vec<Token> {
        self.robot.see()
    }

    pub fn grab(&mut self) -> bool {
        self.robot.grab()
    }

    pub fn release(&mut self) -> bool {
        self.robot.release()
    }

    /// Wait for `secs` seconds.
    pub fn sleep(&mut self, secs: f64) {
        self.clock.sleep(secs)
    }

    /// Wait for one control tick.
    pub fn tick(&mut self) {
        let dt = self.period.secs();
        self.clock.sleep(dt)
    }

    /// Set both wheels to the same power.
    pub fn drive(&mut self, speed: f64) {
        self.set_power(speed, speed);
    }

    /// Add a turning component on top of the current wheel power.
    pub fn turn(&mut self, speed: f64) {
        let current = self.robot.wheel_power();
        self.set_power(current.left + speed, current.right - speed);
    }

    pub fn stop(&mut self) {
        self.set_power(0.0, 0.0);
    }

    /// Spin briefly in the current rotation direction, then most of the way
    /// back, so the camera lands on a fresh patch of the arena.
    pub fn spin_and_correct(&mut self) {
        let spin = self.rotation.sign() * self.period.spin_speed();
        let correction = self.config.spin_correction;

        self.turn(spin);
        self.tick();
        self.turn(-correction * spin);
    }

    /// Reverse straight away from whatever is in front of the robot.
    pub fn back_off(&mut self) {
        let speed = self.period.spin_speed();
        let secs = self.period.back_off();

        self.drive(-speed);
        self.sleep(secs);
    }

    fn set_power(&mut self, left: f64, right: f64) {
        let limits = self.config.power_limits;
        let limit = |power: f64| {
            limits.check(power).unwrap_or_else(|over| {
                debug!("wheel power {:.1} outside [{}, {}], clamping", over, limits.min, limits.max);
                limits.clamp(over)
            })
        };

        self.robot.set_wheel_power(WheelPower::new(limit(left), limit(right)));
    }

    /// Hand the robot and clock back, e.g. to inspect them after a run.
    pub fn into_parts(self) -> (R, C) {
        (self.robot, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn turning_is_relative_to_current_power() {
        let mut session = session_with(ScriptedRobot::new(vec![]), Config::default(), 0.25);

        session.drive(10.0);
        session.turn(4.0);

        let (robot, _) = session.into_parts();
        assert_eq!(robot.power, WheelPower::new(14.0, 6.0));
    }

    #[test]
    fn power_is_clamped() {
        let mut session = session_with(ScriptedRobot::new(vec![]), Config::default(), 0.25);

        session.drive(90.0);
        session.turn(50.0);

        let (robot, _) = session.into_parts();
        assert_eq!(robot.power, WheelPower::new(100.0, 40.0));
    }

    #[test]
    fn custom_power_limits_apply_to_every_write() {
        let config = Config {
            power_limits: tokenbots_support::math::Clamped::new(-20.0, 30.0),
            ..Config::default()
        };
        let mut session = session_with(ScriptedRobot::new(vec![]), config, 0.25);

        session.drive(25.0);
        session.drive(-50.0);
        session.turn(-10.0);

        let (robot, _) = session.into_parts();
        assert_eq!(robot.writes, vec![
            WheelPower::new(25.0, 25.0),
            WheelPower::new(-20.0, -20.0),
            WheelPower::new(-20.0, -10.0),
        ]);
    }

    #[test]
    fn spin_and_correct_leaves_a_small_residual_turn() {
        let mut session = session_with(ScriptedRobot::new(vec![]), Config::default(), 0.25);

        // Anticlockwise by default, spin speed 37 at dt = 0.25.
        session.spin_and_correct();

        let (robot, clock) = session.into_parts();
        assert_eq!(robot.writes[0], WheelPower::new(-37.0, 37.0));
        approx::assert_relative_eq!(robot.power.left, -37.0 + 0.95 * 37.0);
        approx::assert_relative_eq!(robot.power.right, 37.0 - 0.95 * 37.0);
        assert_eq!(clock.sleeps, vec![0.25]);
    }

    #[test]
    fn back_off_reverses_for_the_derived_duration() {
        let mut session = session_with(ScriptedRobot::new(vec![]), Config::default(), 0.25);

        session.back_off();

        let (robot, clock) = session.into_parts();
        assert_eq!(robot.power, WheelPower::new(-37.0, -37.0));
        assert_eq!(clock.sleeps, vec![1.5]);
    }

    #[test]
    fn reversing_rotation_flips_the_spin() {
        let mut session = session_with(ScriptedRobot::new(vec![]), Config::default(), 0.25);
        session.reverse_rotation();
        assert_eq!(session.rotation(), Rotation::Clockwise);

        session.spin_and_correct();
        let (robot, _) = session.into_parts();
        assert_eq!(robot.writes[0], WheelPower::new(37.0, -37.0));
    }
}
