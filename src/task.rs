use crate::approach::{Command, Thresholds, Tier};
use crate::perception::find_free_token;
use crate::session::Session;

use log::{debug, info, warn};

use tokenbots_support::{Category, Clock, Robot};

/// How a search for a token to grab ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Search {
    /// The robot reached the token with this code and worked the gripper.
    Found(u32),

    /// No free token of the wanted category is in view. The caller should
    /// look somewhere else.
    NoneFound,

    /// A token was in view but could not be reached in time. Ends the run.
    TimedOut,
}

/// How a search for a release spot ended. Release searches have no time
/// limit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Release {
    /// The held token was let go next to the token with this code.
    Placed(u32),

    /// No free token of the wanted category is in view.
    NoneFound,
}

/// Drive to the nearest free token of `category` and grab it. Gives up once
/// `max_time_ratio * budget` seconds of control ticks have gone by.
pub fn search_and_grab<R, C>(session: &mut Session<R, C>, budget: f64, category: Category) -> Search
    where R: Robot, C: Clock {

    let period = session.period();
    let limit = session.config().max_time_ratio * budget;
    let thresholds = Thresholds::for_tier(session.config(), Tier::Grab);
    let gains = session.config().gains;

    let mut ticks = 0;

    while period.ticks(ticks) < limit {
        let tokens = session.see();
        let target = match find_free_token(&tokens, Some(category), session.exclusions()) {
            Some(target) => target,
            None => return Search::NoneFound,
        };

        Command::compute(&target, period, &gains, &thresholds).apply(session);
        session.tick();
        ticks += 1;

        debug!("grab: token {} at {:.3} / {:.1} deg", target.code, target.distance, target.bearing);

        if thresholds.reached(&target) {
            session.stop();
            if !session.grab() {
                warn!("grab: gripper closed on nothing at token {}", target.code);
            }

            info!("grabbed {:?} token {} after {} ticks", category, target.code, ticks);
            return Search::Found(target.code);
        }
    }

    warn!("grab: no {:?} token reached within {:.2} s", category, limit);
    Search::TimedOut
}

/// Drive to the nearest free token of `category` and release whatever is
/// held next to it. Keeps going for as long as a target stays in view.
pub fn search_and_release<R, C>(session: &mut Session<R, C>, category: Category) -> Release
    where R: Robot, C: Clock {

    let period = session.period();
    let thresholds = Thresholds::for_tier(session.config(), Tier::Release);
    let gains = session.config().gains;

    loop {
        let tokens = session.see();
        let target = match find_free_token(&tokens, Some(category), session.exclusions()) {
            Some(target) => target,
            None => return Release::NoneFound,
        };

        Command::compute(&target, period, &gains, &thresholds).apply(session);
        session.tick();

        debug!("release: token {} at {:.3} / {:.1} deg", target.code, target.distance, target.bearing);

        if thresholds.reached(&target) {
            session.stop();
            if !session.release() {
                warn!("release: nothing was held at token {}", target.code);
            }

            info!("released next to {:?} token {}", category, target.code);
            return Release::Placed(target.code);
        }
    }
}
