use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use binary_race::output::{format_report, to_json_pretty};
use binary_race::report::parse_magnitude;
use binary_race::{BinaryBench, Mode, ServerConfig};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut bench = BinaryBench::new();
    if let Some(ms) = cli.max_duration_ms {
        bench = bench.max_duration_ms(ms);
    }
    if let Some(seed) = cli.seed {
        bench = bench.measurement_seed(seed);
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            let server = ServerConfig {
                host,
                port,
                static_dir,
            };
            println!("=== Decimal -> Binary ===");
            println!("Listening on http://{}", server.server_addr());
            println!("Ctrl+C to stop\n");
            binary_race::server::run(server, bench).await?;
        }
        Commands::Report { n, mode, json } => {
            let n = parse_magnitude(&n)?;
            let mode: Mode = mode.parse()?;
            let report = tokio::task::spawn_blocking(move || bench.run(n, mode)).await?;
            if json {
                println!("{}", to_json_pretty(&report)?);
            } else {
                print!("{}", format_report(&report));
            }
        }
    }

    Ok(())
}
