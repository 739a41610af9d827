//! prefixtrail CLI
//!
//! Prints the days on which an address prefix appeared in the update feed,
//! walking backward from an end date over the per-year filter files.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use prefixtrail::scan::parse_day;
use prefixtrail::{Config, IpPrefix, Scanner, YearStore};

/// prefixtrail
#[derive(Parser, Debug)]
#[command(name = "prefixtrail")]
#[command(about = "Find the days an address prefix appeared in an update feed")]
#[command(version)]
struct Args {
    /// Address prefix in address/length form (e.g. 10.0.0.0/8)
    prefix: String,

    /// End date in YYYY-M-D form; the scan walks backward from here
    end: String,

    /// Maximum number of matched dates to return (0 = unbounded)
    #[arg(default_value_t = 0)]
    limit: usize,

    /// Directory holding the filter files
    #[arg(short, long, default_value = ".")]
    base_dir: String,

    /// Dataset tag used in filter file names
    #[arg(short, long, default_value = "rrc00")]
    tag: String,

    /// Ceiling on days examined, independent of the result limit
    #[arg(long)]
    max_days: Option<u32>,
}

fn main() {
    // Initialize tracing/logging (stderr, so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let prefix: IpPrefix = match args.prefix.parse() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    let end = match parse_day(&args.end) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    // Build config from args
    let mut builder = Config::builder()
        .base_dir(&args.base_dir)
        .tag(args.tag.as_str());
    if let Some(days) = args.max_days {
        builder = builder.max_scan_days(days);
    }
    let config = builder.build();

    let store = YearStore::from_config(&config);

    let mut scanner = Scanner::new(&store);
    if let Some(days) = config.max_scan_days {
        scanner = scanner.with_max_days(days);
    }

    let dates = scanner.scan(&prefix, end, args.limit);

    tracing::info!("{} matched day(s) for {}", dates.len(), prefix);

    for day in &dates {
        println!(
            "{:04}-{:02}-{:02}",
            day.year(),
            u8::from(day.month()),
            day.day()
        );
    }
}
