//! After-the-fact check that every carried token ended up next to a token of
//! the other category.
//!
//! The robot turns on the spot for a while and, on every tick, measures the
//! separation of each visible pair of differently coloured tokens from their
//! distances and bearings alone. A carried token counts as placed if it was
//! ever seen close enough to some token of the other category.

use crate::session::Session;

use cgmath::{Angle, Deg, Rad};
use log::{debug, warn};
use rand::Rng;

use tokenbots_support::{Category, Clock, Robot, Token};

use std::collections::HashMap;

/// Verdict of the placement check.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Placement {
    Correct,
    Misplaced,
}

/// Separation of two tokens seen in the same frame, by the law of cosines.
pub fn planar_distance(a: &Token, b: &Token) -> f64 {
    let theta: Rad<f64> = Deg((a.rot_y - b.rot_y).abs()).into();
    let sq = a.dist * a.dist + b.dist * b.dist - 2.0 * a.dist * b.dist * theta.cos();

    // Rounding can push coincident points slightly negative.
    sq.max(0.0).sqrt()
}

/// The smallest separation seen so far between each carried token and any
/// token of the other category.
#[derive(Debug, Default, Clone)]
pub struct Sweep {
    minima: HashMap<u32, f64>,
}

impl Sweep {
    pub fn new() -> Self {
        Sweep::default()
    }

    /// Fold one camera frame into the minima.
    pub fn observe(&mut self, tokens: &[Token], carried: Category) {
        for a in tokens.iter().filter(|t| t.category == carried) {
            for b in tokens.iter().filter(|t| t.category != carried) {
                let d = planar_distance(a, b);

                let min = self.minima.entry(a.code).or_insert(d);
                if d < *min {
                    *min = d;
                }
            }
        }
    }

    /// Closest approach of a carried token, if it was ever seen in a pair.
    pub fn minimum(&self, code: u32) -> Option<f64> {
        self.minima.get(&code).cloned()
    }

    pub fn verdict(&self, max_separation: f64) -> Placement {
        if self.minima.values().any(|&d| d > max_separation) {
            Placement::Misplaced
        } else {
            Placement::Correct
        }
    }
}

/// Spin through the arena and judge whether the carried tokens were left next
/// to tokens of the other category.
pub fn check_placement<R, C, G>(session: &mut Session<R, C>, rng: &mut G) -> Placement
    where R: Robot, C: Clock, G: Rng {

    let period = session.period();
    let duration = session.config().sweep_ratio * period.budget();
    let spin = period.spin_speed();
    let jitter = spin * session.config().jitter_fraction;
    let carried = session.config().grab_category;

    let mut sweep = Sweep::new();
    let mut ticks = 0;

    session.turn(spin);

    while period.ticks(ticks) < duration {
        let tokens = session.see();
        sweep.observe(&tokens, carried);

        session.tick();
        ticks += 1;

        if jitter > 0.0 {
            session.turn(rng.gen_range(-jitter..=jitter));
        }
    }

    session.stop();

    debug!("placement sweep minima: {:?}", sweep.minima);

    let verdict = sweep.verdict(session.config().release_distance);
    if verdict == Placement::Misplaced {
        warn!("some {:?} tokens are not next to a {:?} token", carried, carried.other());
    }

    verdict
}
