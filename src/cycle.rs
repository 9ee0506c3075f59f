use crate::session::Session;
use crate::task::*;

use log::info;

use tokenbots_support::{Clock, Robot};

/// What the robot is currently looking for.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    SearchingToGrab,
    SearchingToRelease,
}

/// How the task cycle ended.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CycleOutcome {
    /// The robot went a whole budget without finding anything left to grab.
    Completed {
        /// Seconds spent idle at the end of the run.
        inactivity: f64,
    },

    /// A grab search ran out of time.
    TimedOut,
}

/// Alternately carry tokens of the grabbed category to free tokens of the
/// other one, until a whole time budget passes without anything to grab.
pub fn run_cycle<R: Robot, C: Clock>(session: &mut Session<R, C>) -> CycleOutcome {
    let period = session.period();
    let budget = period.budget();
    let grab_category = session.config().grab_category;
    let release_category = grab_category.other();
    let alternate = session.config().alternate_rotation;

    let mut phase = Phase::SearchingToGrab;
    let mut idle_ticks = 0;

    info!("starting task cycle: dt {:.3} s, budget {:.1} s", period.secs(), budget);

    while period.ticks(idle_ticks) < budget {
        match phase {
            Phase::SearchingToGrab => match search_and_grab(session, budget, grab_category) {
                Search::NoneFound => {
                    session.spin_and_correct();
                    idle_ticks += 1;
                }
                Search::TimedOut => {
                    session.stop();
                    return CycleOutcome::TimedOut;
                }
                Search::Found(code) => {
                    session.exclusions_mut().push(grab_category, code);
                    idle_ticks = 0;
                    if alternate.after_grab {
                        session.reverse_rotation();
                    }
                    phase = Phase::SearchingToRelease;
                }
            },
            Phase::SearchingToRelease => match search_and_release(session, release_category) {
                Release::Placed(code) => {
                    session.back_off();
                    session.exclusions_mut().push(release_category, code);
                    if alternate.after_release {
                        session.reverse_rotation();
                    }
                    phase = Phase::SearchingToGrab;
                }
                Release::NoneFound => session.spin_and_correct(),
            },
        }
    }

    session.stop();
    info!("task cycle finished, {} {:?} tokens placed",
          session.exclusions().codes(grab_category).len(),
          grab_category);

    CycleOutcome::Completed { inactivity: budget }
}
