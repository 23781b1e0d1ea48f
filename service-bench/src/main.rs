#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use std::io::{self, Write};

use service_bench::bench::{run_benchmark, write_csv_file};
use service_bench::generator::ServiceGenerator;
use service_bench::interactive::{choose_mode, run_interactive, Tokens};
use service_bench::{BenchConfig, HarnessError, RunMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn run(config: &BenchConfig, mode_arg: Option<String>) -> Result<(), HarnessError> {
    let stdin = io::stdin();
    let mut input = Tokens::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mode = match mode_arg {
        Some(arg) => RunMode::parse(&arg)
            .ok_or_else(|| HarnessError::InvalidInput(format!("unknown mode '{arg}'")))?,
        None => match choose_mode(&mut input, &mut out)? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    let mut generator = ServiceGenerator::new(config.seed);
    match mode {
        RunMode::Interactive => {
            run_interactive(&mut input, &mut out, &mut generator)?;
        }
        RunMode::Benchmark => {
            let rows = run_benchmark(config, &mut generator, &mut out)?;
            write_csv_file(&config.csv_path, &rows)?;
            writeln!(
                out,
                "\nThe results have been saved in the {}",
                config.csv_path.display()
            )?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "service_bench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        seed = config.seed,
        iterations = config.iterations,
        sizes = ?config.sizes,
        "configuration loaded"
    );

    if let Err(e) = run(&config, std::env::args().nth(1)) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
