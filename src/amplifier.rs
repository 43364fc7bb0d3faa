//! Amplifier ring - N interpreters wired output -> input in a cycle
//!
//! Every instance runs the same program with a distinct phase value as
//! its first input. Instance i feeds instance (i+1) mod N, so the last
//! instance feeds back into the first and signals can circulate for as
//! many rounds as the program logic wants before everything halts.
//!
//! Scheduling is cooperative and single-threaded: the driver runs each
//! instance until it halts or blocks on input, then moves its produced
//! output to the successor's queue and hands control onward. Because an
//! interpreter resumes exactly where it suspended, the round-robin loop
//! is the entire scheduler.

use crate::error::{Result, VmError};
use crate::vm::{Interpreter, MemoryModel, Program, RunState};

/// A fixed ring of phase-seeded interpreters over one program
#[derive(Debug)]
pub struct AmplifierRing {
    amps: Vec<Interpreter>,
    done: Vec<bool>,
}

impl AmplifierRing {
    /// Build the ring: one interpreter per phase, each with its own
    /// memory copied from `program` and its phase queued as the first
    /// input value.
    pub fn new(program: &Program, phases: &[i64]) -> Self {
        Self::with_model(program, phases, MemoryModel::Fixed)
    }

    /// Build the ring with an explicit address-space policy
    pub fn with_model(program: &Program, phases: &[i64], model: MemoryModel) -> Self {
        let amps = phases
            .iter()
            .map(|&phase| {
                let mut amp = Interpreter::with_model(program, model);
                amp.push_input(phase);
                amp
            })
            .collect();
        Self {
            done: vec![false; phases.len()],
            amps,
        }
    }

    /// Number of instances in the ring
    pub fn len(&self) -> usize {
        self.amps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amps.is_empty()
    }

    /// Inject `initial_signal` into instance 0 and drive the ring until
    /// every instance has halted. Returns the last value that travelled
    /// the feedback edge into instance 0.
    ///
    /// Any fatal interpreter error aborts the whole run; a round in
    /// which nothing halts and no value moves can never make progress
    /// and is reported as [`VmError::Stalled`].
    pub fn run(&mut self, initial_signal: i64) -> Result<i64> {
        let n = self.amps.len();
        if n == 0 {
            return Err(VmError::NoSignal);
        }

        self.amps[0].push_input(initial_signal);
        let mut feedback = None;

        while self.done.iter().any(|&d| !d) {
            let mut progressed = false;
            for i in 0..n {
                if self.done[i] {
                    continue;
                }
                match self.amps[i].run()? {
                    RunState::Halted => {
                        self.done[i] = true;
                        progressed = true;
                    }
                    RunState::NeedInput => {}
                }
                let produced = self.amps[i].drain_output();
                if produced.is_empty() {
                    continue;
                }
                progressed = true;
                if i == n - 1 {
                    feedback = produced.last().copied();
                }
                self.amps[(i + 1) % n].extend_input(produced);
            }
            if !progressed {
                return Err(VmError::Stalled);
            }
        }

        feedback.ok_or(VmError::NoSignal)
    }
}

/// Run the ring once per permutation of `phases` and keep the maximum
/// output. This is a pure search wrapper; the ring itself knows nothing
/// about it.
pub fn max_feedback_signal(program: &Program, phases: &[i64]) -> Result<i64> {
    let mut phases = phases.to_vec();
    let mut best: Option<i64> = None;
    permute(&mut phases, 0, &mut |ordering| {
        let signal = AmplifierRing::new(program, ordering).run(0)?;
        best = Some(best.map_or(signal, |b| b.max(signal)));
        Ok(())
    })?;
    best.ok_or(VmError::NoSignal)
}

/// Visit every permutation of `values[k..]` in place
fn permute<F>(values: &mut [i64], k: usize, visit: &mut F) -> Result<()>
where
    F: FnMut(&[i64]) -> Result<()>,
{
    if k + 1 >= values.len() {
        return visit(values);
    }
    for i in k..values.len() {
        values.swap(k, i);
        permute(values, k + 1, visit)?;
        values.swap(k, i);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_output(listing: &str, phases: &[i64], signal: i64) -> i64 {
        let program = Program::parse(listing).unwrap();
        AmplifierRing::new(&program, phases).run(signal).unwrap()
    }

    fn best_signal(listing: &str, phases: &[i64]) -> i64 {
        let program = Program::parse(listing).unwrap();
        max_feedback_signal(&program, phases).unwrap()
    }

    // Single-pass programs: every instance halts after one signal, so
    // the "ring" degenerates to a chain plus one feedback hop.
    const CHAIN_A: &str = "3,15,3,16,1002,16,10,16,1,16,15,15,4,15,99,0,0";
    const CHAIN_B: &str =
        "3,23,3,24,1002,24,10,24,1002,23,-1,23,101,5,23,23,1,24,23,23,4,23,99,0,0";
    const CHAIN_C: &str = "3,31,3,32,1002,32,10,32,1001,31,-2,31,1007,31,0,33,\
                           1002,33,7,33,1,33,31,31,1,32,31,31,4,31,99,0,0,0";

    // Feedback programs: signals circulate until an internal counter
    // runs out.
    const FEEDBACK_A: &str = "3,26,1001,26,-4,26,3,27,1002,27,2,27,1,27,26,27,\
                              4,27,1001,28,-1,28,1005,28,6,99,0,0,5";
    const FEEDBACK_B: &str = "3,52,1001,52,-5,52,3,53,1,52,56,54,1007,54,5,55,\
                              1005,55,26,1001,54,-5,54,1105,1,12,1,53,54,53,\
                              1008,54,0,55,1001,55,1,55,2,53,55,53,4,53,\
                              1001,56,-1,56,1005,56,6,99,0,0,0,0,10";

    #[test]
    fn test_single_pass_ring() {
        assert_eq!(ring_output(CHAIN_A, &[4, 3, 2, 1, 0], 0), 43210);
        assert_eq!(ring_output(CHAIN_B, &[0, 1, 2, 3, 4], 0), 54321);
        assert_eq!(ring_output(CHAIN_C, &[1, 0, 4, 3, 2], 0), 65210);
    }

    #[test]
    fn test_single_pass_search() {
        assert_eq!(best_signal(CHAIN_A, &[0, 1, 2, 3, 4]), 43210);
        assert_eq!(best_signal(CHAIN_B, &[0, 1, 2, 3, 4]), 54321);
        assert_eq!(best_signal(CHAIN_C, &[0, 1, 2, 3, 4]), 65210);
    }

    #[test]
    fn test_feedback_ring() {
        assert_eq!(ring_output(FEEDBACK_A, &[9, 8, 7, 6, 5], 0), 139629729);
        assert_eq!(ring_output(FEEDBACK_B, &[9, 7, 8, 5, 6], 0), 18216);
    }

    #[test]
    fn test_feedback_search() {
        assert_eq!(best_signal(FEEDBACK_A, &[5, 6, 7, 8, 9]), 139629729);
        assert_eq!(best_signal(FEEDBACK_B, &[5, 6, 7, 8, 9]), 18216);
    }

    #[test]
    fn test_fatal_error_aborts_run() {
        // unknown opcode after consuming the phase
        let program = Program::parse("3,0,77,99").unwrap();
        let err = AmplifierRing::new(&program, &[1, 2]).run(0).unwrap_err();
        assert!(matches!(err, VmError::UnknownOpcode { opcode: 77, ip: 2 }));
    }

    #[test]
    fn test_stall_detected() {
        // consumes phase and signal, then asks for a third input that
        // no ring member will ever produce
        let program = Program::parse("3,0,3,0,3,0,99").unwrap();
        let err = AmplifierRing::new(&program, &[0, 1]).run(0).unwrap_err();
        assert!(matches!(err, VmError::Stalled));
    }

    #[test]
    fn test_silent_ring_reports_no_signal() {
        let program = Program::parse("3,0,99").unwrap();
        let err = AmplifierRing::new(&program, &[0, 1]).run(0).unwrap_err();
        assert!(matches!(err, VmError::NoSignal));
    }

    #[test]
    fn test_empty_ring() {
        let program = Program::parse("99").unwrap();
        assert!(matches!(
            AmplifierRing::new(&program, &[]).run(0),
            Err(VmError::NoSignal)
        ));
    }

    #[test]
    fn test_single_instance_ring_feeds_itself() {
        // echoes phase then signal; the last value to cross the
        // feedback edge wins
        let program = Program::parse("3,9,3,10,4,9,4,10,99,0,0").unwrap();
        let result = AmplifierRing::new(&program, &[5]).run(7).unwrap();
        assert_eq!(result, 7);
    }
}
