use crate::cycle::{run_cycle, CycleOutcome};
use crate::error::Error;
use crate::failure::check_placement;
use crate::report::{Destination, RunResult};
use crate::session::Session;

use log::info;
use rand::Rng;

use tokenbots_support::config::{Config, ControlPeriod};
use tokenbots_support::{Clock, Robot};

/// Run the whole script on a robot handed over by the harness: carry tokens
/// until idle, then check the placements. The elapsed time covers the task
/// cycle only.
pub fn run<R, C, G>(session: &mut Session<R, C>, rng: &mut G) -> RunResult
    where R: Robot, C: Clock, G: Rng {

    let start = session.now();
    let cycle = run_cycle(session);
    let elapsed = session.now() - start;

    let placement = match cycle {
        CycleOutcome::Completed { .. } => Some(check_placement(session, rng)),
        CycleOutcome::TimedOut => None,
    };

    let result = RunResult { elapsed, cycle, placement };
    info!("run finished: {:?}", result);

    result
}

/// Build a session, run it and write the result to `destination`.
pub fn run_and_report<R, C>(robot: R,
                            clock: C,
                            config: Config,
                            period: ControlPeriod,
                            destination: &mut Destination)
                            -> Result<RunResult, Error>
    where R: Robot, C: Clock {

    config.validate()?;

    let mut session = Session::new(robot, clock, config, period);
    let result = run(&mut session, &mut rand::thread_rng());

    destination.write(&result)?;
    Ok(result)
}
