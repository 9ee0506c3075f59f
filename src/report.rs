use crate::cycle::CycleOutcome;
use crate::error::Error;
use crate::failure::Placement;

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const TIMED_OUT_MSG: &str = "The robot did not finish within the maximum allotted time.";
pub const MISPLACED_MSG: &str = "The robot did not complete the task correctly.";

/// Everything known at the end of a run.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct RunResult {
    /// Seconds from the start of the run to the end of the task cycle.
    pub elapsed: f64,

    pub cycle: CycleOutcome,

    /// Only checked when the cycle completed.
    pub placement: Option<Placement>,
}

impl RunResult {
    /// Idle time for the results file: -1 unless the run fully succeeded.
    pub fn inactivity(&self) -> f64 {
        match (self.cycle, self.placement) {
            (CycleOutcome::Completed { .. }, Some(Placement::Misplaced)) => -1.0,
            (CycleOutcome::Completed { inactivity }, _) => inactivity,
            (CycleOutcome::TimedOut, _) => -1.0,
        }
    }

    /// The sentence shown on the console.
    pub fn message(&self) -> String {
        match (self.cycle, self.placement) {
            (CycleOutcome::TimedOut, _) => TIMED_OUT_MSG.to_owned(),
            (_, Some(Placement::Misplaced)) => MISPLACED_MSG.to_owned(),
            (CycleOutcome::Completed { inactivity }, _) => {
                format!("Finished in {:.3} seconds with {:.1} seconds of inactivity.",
                        self.elapsed,
                        inactivity)
            }
        }
    }

    /// One line of the results file.
    pub fn line(&self) -> String {
        format!("{:.3}, {:.2}\n", self.elapsed, self.inactivity())
    }
}

/// Where the result of a run goes.
pub enum Destination {
    /// Print a sentence for whoever is watching.
    Console,

    /// Append a line of numbers, e.g. to a file shared by many runs.
    Append(Box<dyn Write + Send>),
}

impl Destination {
    /// Open (or create) a results file for appending.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Destination::Append(Box::new(file)))
    }

    pub fn write(&mut self, result: &RunResult) -> Result<(), Error> {
        match *self {
            Destination::Console => {
                println!("{}", result.message());
            }
            Destination::Append(ref mut w) => {
                w.write_all(result.line().as_bytes())?;
                w.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedBuffer;

    use std::fs;

    fn completed(elapsed: f64, inactivity: f64, placement: Placement) -> RunResult {
        RunResult {
            elapsed,
            cycle: CycleOutcome::Completed { inactivity },
            placement: Some(placement),
        }
    }

    #[test]
    fn file_line_for_a_successful_run() {
        let result = completed(12.345, 3.2, Placement::Correct);
        assert_eq!(result.line(), "12.345, 3.20\n");
    }

    #[test]
    fn misplacement_forces_minus_one() {
        let result = completed(12.345, 3.2, Placement::Misplaced);
        assert_eq!(result.line(), "12.345, -1.00\n");
    }

    #[test]
    fn timeout_forces_minus_one() {
        let result = RunResult {
            elapsed: 40.0,
            cycle: CycleOutcome::TimedOut,
            placement: None,
        };

        assert_eq!(result.line(), "40.000, -1.00\n");
        assert_eq!(result.message(), TIMED_OUT_MSG);
    }

    #[test]
    fn console_messages() {
        assert_eq!(completed(12.345, 2.3, Placement::Correct).message(),
                   "Finished in 12.345 seconds with 2.3 seconds of inactivity.");
        assert_eq!(completed(12.345, 2.3, Placement::Misplaced).message(), MISPLACED_MSG);
    }

    #[test]
    fn append_destination_receives_only_the_line() {
        let buf = SharedBuffer::default();
        let mut dest = Destination::Append(Box::new(buf.clone()));

        dest.write(&completed(1.5, 2.3, Placement::Correct)).unwrap();
        dest.write(&completed(2.25, 2.3, Placement::Misplaced)).unwrap();

        let written = buf.contents();
        assert_eq!(written, "1.500, 2.30\n2.250, -1.00\n");
    }

    #[test]
    fn results_file_is_appended_to() {
        let path = std::env::temp_dir().join(format!("tokenbots-report-{}.txt", std::process::id()));
        fs::write(&path, "Data with dt = 0.05: (Execution time, Inactivity time)\n").unwrap();

        Destination::append(&path).unwrap().write(&completed(3.0, 2.3, Placement::Correct)).unwrap();
        Destination::append(&path).unwrap().write(&completed(4.0, 2.3, Placement::Correct)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(contents,
                   "Data with dt = 0.05: (Execution time, Inactivity time)\n3.000, 2.30\n4.000, 2.30\n");
    }
}
