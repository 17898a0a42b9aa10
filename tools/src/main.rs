//! lehmer-runner: command-line front end for the multi-stream generator.
//!
//! Usage:
//!   lehmer-runner --self-test
//!   lehmer-runner --seed 12345 --stream 3 --draws 10
//!   lehmer-runner --seed -1                 (seed from the clock)
//!   lehmer-runner --seed 0                  (prompt for a seed on stdin)
//!   lehmer-runner --config run.json --json --batch

use anyhow::{bail, Result};
use lehmer_core::{
    config::{GeneratorConfig, MODULUS},
    self_test, Generator, LehmerError, LifecycleWarning,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct RunReport {
    stream:      usize,
    start_seed:  i32,
    draws:       Vec<f64>,
    final_seed:  i32,
    warnings:    Vec<LifecycleWarning>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = has_flag(&args, "--json");
    let batch = has_flag(&args, "--batch");

    if has_flag(&args, "--self-test") {
        return run_self_test(json);
    }

    let mut config = match arg_value(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    config.initial_seed = parse_arg(&args, "--seed", config.initial_seed);
    config.initial_stream = parse_arg(&args, "--stream", config.initial_stream);
    config.draws = parse_arg(&args, "--draws", config.draws);

    let mut rng = build_generator(&config, batch)?;
    let stream = rng.stream();
    let start_seed = rng.seed();
    let draws: Vec<f64> = (0..config.draws).map(|_| rng.draw()).collect();
    let final_seed = rng.seed();
    let warnings = rng.shutdown();

    if json {
        let report = RunReport { stream, start_seed, draws, final_seed, warnings };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("lehmer-runner");
    println!("  stream:      {stream}");
    println!("  start seed:  {start_seed}");
    println!("  draws:       {}", config.draws);
    println!();
    for (i, u) in draws.iter().enumerate() {
        println!("  {i:>6}  {u:.9}");
    }
    println!();
    println!("  final seed:  {final_seed}");
    for warning in &warnings {
        eprintln!("Error: {warning}");
    }
    Ok(())
}

fn run_self_test(json: bool) -> Result<()> {
    let report = self_test::run()?;
    if json {
        println!("{}", serde_json::to_string(&report)?);
    }
    if !report.passed() {
        bail!(
            "the implementation is not correct (draw chain {}, planted {})",
            report.draw_chain_seed,
            report.planted_seed
        );
    }
    if !json {
        println!("The implementation is correct");
    }
    Ok(())
}

/// Construct the generator, asking for a seed on stdin when the core needs
/// one. In batch mode the request is an error instead.
fn build_generator(config: &GeneratorConfig, batch: bool) -> Result<Generator> {
    let mut seed = config.initial_seed;
    loop {
        match Generator::new(seed, config.initial_stream) {
            Ok(rng) => return Ok(rng),
            Err(LehmerError::InteractiveSeedRequired) if !batch => {
                seed = prompt_seed()?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_seed() -> Result<i64> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    loop {
        write!(stdout, "Enter a positive integer seed (9 digits or less) >> ")?;
        stdout.flush()?;

        buffer.clear();
        if handle.read_line(&mut buffer)? == 0 {
            bail!("no seed supplied on stdin");
        }
        match buffer.trim().parse::<i64>() {
            Ok(seed) if seed > 0 && seed < MODULUS as i64 => return Ok(seed),
            _ => log::warn!("Rejected seed input: {:?}", buffer.trim()),
        }
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
