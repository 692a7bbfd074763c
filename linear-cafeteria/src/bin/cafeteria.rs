//! Replays a lunch-rush scenario on the pickup line.
//!
//! Everyone named on the command line joins, the first customer is served,
//! the last one gives up, and the board is printed after each step.

use clap::{Parser, ValueEnum};
use linear_cafeteria::{Cafeteria, CafeteriaConfig};
use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(name = "cafeteria", about = "Cafeteria pickup-line simulation", version)]
struct Cli {
    /// Average minutes to serve one customer.
    #[arg(long = "service-minutes", default_value_t = 1)]
    service_minutes: u32,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Customers joining the line, in arrival order.
    #[arg(default_values_t = ["Ana".to_string(), "Bruno".to_string(), "Carla".to_string()])]
    names: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), SetLoggerError> {
    let cli = Cli::parse();
    SimpleLogger::new()
        .with_level(cli.log_level.into())
        .init()?;

    let config = CafeteriaConfig::default().with_service_minutes(cli.service_minutes);
    let mut cafe = Cafeteria::new(config);

    let customers: Vec<_> = cli.names.iter().map(|name| cafe.join(name.as_str())).collect();
    print!("--- current line ---\n{cafe}");

    if let Some(served) = cafe.serve_next() {
        println!("served: {}", served.name);
    }
    if let Some(last) = customers.last() {
        cafe.give_up(last);
    }

    print!("--- current line ---\n{cafe}");
    Ok(())
}
