//! ringvm-run - execute a program listing or drive an amplifier ring
//!
//! # Usage
//!
//! ```bash
//! # Run a listing standalone, feeding inputs in order
//! ringvm-run -i 1 program.txt
//!
//! # Drive an amplifier ring with a fixed phase ordering
//! ringvm-run --phases 9,8,7,6,5 program.txt
//!
//! # Search every permutation of the phase set for the maximum signal
//! ringvm-run --phases 5,6,7,8,9 --search program.txt
//!
//! # Use the extended (lazily growing) memory model
//! ringvm-run --extended -i 1 program.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: program or ring ran to completion
//! - 1: execution failed (malformed program, bad listing, stall)
//! - 2: invalid arguments or IO error

use std::process::ExitCode;
use ringvm::{
    load_path, max_feedback_signal, AmplifierRing, Interpreter, MemoryModel, RunState,
};

struct Options {
    path: String,
    inputs: Vec<i64>,
    phases: Option<Vec<i64>>,
    search: bool,
    model: MemoryModel,
    show_memory: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let opts = match parse_args(&args[1..]) {
        Ok(Some(opts)) => opts,
        Ok(None) => return ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {msg}\n");
            print_help();
            return ExitCode::from(2);
        }
    };

    let program = match load_path(&opts.path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error loading {}: {}", opts.path, e);
            return ExitCode::from(2);
        }
    };

    let outcome = match (&opts.phases, opts.search) {
        (Some(phases), true) => max_feedback_signal(&program, phases).map(|signal| {
            println!("{signal}");
        }),
        (Some(phases), false) => AmplifierRing::with_model(&program, phases, opts.model)
            .run(opts.inputs.first().copied().unwrap_or(0))
            .map(|signal| {
                println!("{signal}");
            }),
        (None, _) => {
            let mut vm = Interpreter::with_model(&program, opts.model);
            vm.extend_input(opts.inputs.iter().copied());
            vm.run().map(|state| {
                for value in vm.drain_output() {
                    println!("{value}");
                }
                if state == RunState::NeedInput {
                    eprintln!("warning: program is still waiting for input at ip {}", vm.ip());
                }
                if opts.show_memory {
                    let cells: Vec<String> =
                        vm.memory().cells().iter().map(|c| c.to_string()).collect();
                    eprintln!("memory: {}", cells.join(","));
                }
            })
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Execution failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut inputs = Vec::new();
    let mut phases = None;
    let mut search = false;
    let mut model = MemoryModel::Fixed;
    let mut show_memory = false;
    let mut path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-i" | "--input" => {
                let value = iter.next().ok_or("missing value after --input")?;
                inputs.push(parse_int(value)?);
            }
            "-p" | "--phases" => {
                let list = iter.next().ok_or("missing value after --phases")?;
                phases = Some(
                    list.split(',')
                        .map(|v| parse_int(v.trim()))
                        .collect::<Result<Vec<i64>, String>>()?,
                );
            }
            "-s" | "--search" => search = true,
            "-x" | "--extended" => model = MemoryModel::Extended,
            "-m" | "--memory" => show_memory = true,
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => {
                if path.replace(arg.clone()).is_some() {
                    return Err("more than one program file given".to_string());
                }
            }
        }
    }

    if search && phases.is_none() {
        return Err("--search requires --phases".to_string());
    }
    let path = path.ok_or("no program file specified")?;

    Ok(Some(Options {
        path,
        inputs,
        phases,
        search,
        model,
        show_memory,
    }))
}

fn parse_int(value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("not an integer: {value:?}"))
}

fn print_help() {
    eprintln!("ringvm-run - execute a ringvm program listing");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    ringvm-run [OPTIONS] <PROGRAM_FILE>");
    eprintln!();
    eprintln!("ARGS:");
    eprintln!("    <PROGRAM_FILE>    Comma-separated integer listing");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -i, --input <N>      Queue an input value (repeatable, in order)");
    eprintln!("    -p, --phases <LIST>  Drive an amplifier ring with this phase ordering");
    eprintln!("    -s, --search         With --phases: try every permutation, print the max");
    eprintln!("    -x, --extended       Extended memory model (reads past the end yield 0)");
    eprintln!("    -m, --memory         Dump final memory to stderr (standalone runs)");
    eprintln!("    -h, --help           Print this help message");
    eprintln!();
    eprintln!("EXIT CODES:");
    eprintln!("    0    Ran to completion");
    eprintln!("    1    Execution failed");
    eprintln!("    2    Invalid arguments or IO error");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    ringvm-run -i 12 echo.txt                 Run with one input");
    eprintln!("    ringvm-run -p 9,8,7,6,5 thruster.txt      One ring configuration");
    eprintln!("    ringvm-run -p 5,6,7,8,9 -s thruster.txt   Best over all orderings");
}
