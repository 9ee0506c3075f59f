//! Test doubles for the simulator side of a run.

use crate::session::Session;

use tokenbots_support::config::{Config, ControlPeriod};
use tokenbots_support::{Category, Clock, Robot, Token, WheelPower};

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A robot whose camera replays a fixed sequence of frames, one per call to
/// `see`. Once the script runs out the camera sees nothing.
pub struct ScriptedRobot {
    frames: VecDeque<Vec<Token>>,
    pub looks: usize,
    pub power: WheelPower,
    pub writes: Vec<WheelPower>,
    pub grabs: usize,
    pub releases: usize,
}

impl ScriptedRobot {
    pub fn new(frames: Vec<Vec<Token>>) -> Self {
        ScriptedRobot {
            frames: frames.into_iter().collect(),
            looks: 0,
            power: WheelPower::zero(),
            writes: Vec::new(),
            grabs: 0,
            releases: 0,
        }
    }

    /// The same frame `n` times over.
    pub fn repeating(frame: Vec<Token>, n: usize) -> Self {
        ScriptedRobot::new(vec![frame; n])
    }
}

impl Robot for ScriptedRobot {
    fn see(&mut self) -> Vec<Token> {
        self.looks += 1;
        self.frames.pop_front().unwrap_or_default()
    }

    fn wheel_power(&self) -> WheelPower {
        self.power
    }

    fn set_wheel_power(&mut self, power: WheelPower) {
        self.power = power;
        self.writes.push(power);
    }

    fn grab(&mut self) -> bool {
        self.grabs += 1;
        true
    }

    fn release(&mut self) -> bool {
        self.releases += 1;
        true
    }
}

/// A clock that only moves when slept on.
#[derive(Default)]
pub struct ManualClock {
    pub now: f64,
    pub sleeps: Vec<f64>,
}

impl Clock for ManualClock {
    fn sleep(&mut self, secs: f64) {
        self.now += secs;
        self.sleeps.push(secs);
    }

    fn now(&self) -> f64 {
        self.now
    }
}

pub fn silver(code: u32, dist: f64, rot_y: f64) -> Token {
    Token::new(Category::Silver, code, dist, rot_y)
}

pub fn gold(code: u32, dist: f64, rot_y: f64) -> Token {
    Token::new(Category::Gold, code, dist, rot_y)
}

pub fn session_with(robot: ScriptedRobot, config: Config, dt: f64)
                    -> Session<ScriptedRobot, ManualClock> {
    init_logging();
    let period = ControlPeriod::new(dt).unwrap();
    Session::new(robot, ManualClock::default(), config, period)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A writer whose output stays readable after it has been boxed away.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
