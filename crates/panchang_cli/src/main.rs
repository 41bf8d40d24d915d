use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::{debug, info};
use panchang_rs::{
    AstronomicalSample, DateRange, DayCalendar, DayInput, DaySpan, Festival, PanchangConfig,
    ReferencePolicy, TimePeriod, Tradition, assemble_range, current_period,
    evaluate_festivals_with, kaal_windows, karana_from, load_day_inputs_from_path,
    load_festivals_from_path, load_or_default, nakshatra_from_longitude, partition_day,
    resolve_from_sample, resolved_day, tithi_from_number, yoga_from_longitudes,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "panchang", about = "Panchang element, muhurta and festival lookups")]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SpanArgs {
    /// Sunrise, UTC (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    sunrise: String,
    /// Sunset, UTC
    #[arg(long)]
    sunset: String,
    /// Next day's sunrise, UTC
    #[arg(long)]
    next_sunrise: String,
    /// Weekday of the sunrise: 1=Sunday .. 7=Saturday
    #[arg(long)]
    weekday: u8,
}

#[derive(clap::Args)]
struct DataArgs {
    /// JSON array of day inputs
    #[arg(long)]
    days: PathBuf,
    /// Config file (default: search panchang.toml, configs/panchang.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Festival definitions, overriding the config
    #[arg(long)]
    data: Option<PathBuf>,
    /// Tradition, overriding the config (e.g. north_indian, tamil)
    #[arg(long)]
    tradition: Option<String>,
    /// Tithi reference: sunrise or any_in_day, overriding the config
    #[arg(long)]
    policy: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Nakshatra from sidereal Moon longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Yoga from sidereal Sun and Moon longitudes
    Yoga {
        /// Sun sidereal longitude in degrees
        sun: f64,
        /// Moon sidereal longitude in degrees
        moon: f64,
    },
    /// Tithi from its number (1-15, 30 = Amavasya)
    Tithi {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Karana from tithi position in the month (1-30)
    Karana {
        #[arg(allow_hyphen_values = true)]
        tithi: i64,
        /// Second half of the tithi
        #[arg(long)]
        second_half: bool,
    },
    /// Tithi, nakshatra, yoga and karana from Sun and Moon longitudes
    Elements {
        sun: f64,
        moon: f64,
        #[arg(long)]
        json: bool,
    },
    /// Muhurta, choghadiya and hora tables for one day
    Day {
        #[command(flatten)]
        span: SpanArgs,
        /// Only print the periods current at this UTC instant
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Rahu Kaal, Yamaganda, Gulika and Abhijit windows
    Kaal {
        #[command(flatten)]
        span: SpanArgs,
    },
    /// Festivals over a set of resolved days
    Festivals {
        #[command(flatten)]
        data: DataArgs,
        /// First date (YYYY-MM-DD), default first day in the file
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last date (YYYY-MM-DD), default last day in the file
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Full day snapshots as JSON
    Snapshot {
        #[command(flatten)]
        data: DataArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), lord {}",
                info.nakshatra.name(),
                info.nakshatra.ordinal(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.nakshatra.lord().name()
            );
        }

        Commands::Yoga { sun, moon } => {
            let pos = yoga_from_longitudes(sun, moon);
            println!(
                "{} (#{}) - {:.4} deg in yoga, {}",
                pos.yoga.name(),
                pos.yoga.ordinal(),
                pos.degrees_in_yoga,
                if pos.yoga.is_auspicious() {
                    "auspicious"
                } else {
                    "inauspicious"
                }
            );
        }

        Commands::Tithi { n } => {
            let t = tithi_from_number(n);
            if t.number() as i64 != n {
                debug!("tithi {n} outside 1-15/30, using {}", t.name());
            }
            println!("{} (#{}) - {:?}", t.name(), t.number(), t.category());
        }

        Commands::Karana { tithi, second_half } => {
            let k = karana_from(tithi, !second_half);
            println!(
                "{} (#{}){}{}",
                k.name(),
                k.ordinal(),
                if k.is_fixed() { ", fixed" } else { "" },
                if k.is_vishti() { ", Bhadra" } else { "" }
            );
        }

        Commands::Elements { sun, moon, json } => {
            let sample = AstronomicalSample::new(sun, moon);
            let e = resolve_from_sample(&sample);
            if json {
                print_json(&e);
            } else {
                let pos = sample.tithi_position();
                println!(
                    "Tithi:     {} {} ({:.4} deg in tithi)",
                    e.paksha.name(),
                    e.tithi.name(),
                    pos.degrees_in_tithi
                );
                println!("Nakshatra: {}", e.nakshatra.name());
                println!("Yoga:      {}", e.yoga.name());
                println!("Karana:    {}", e.karana.name());
            }
        }

        Commands::Day { span, at, json } => {
            let span = require_span(&span);
            let parts = partition_day(&span);
            if let Some(at) = at {
                let at = require_instant(&at);
                let current: Vec<TimePeriod> = [
                    current_period(&parts.muhurtas, at),
                    current_period(&parts.choghadiyas, at),
                    current_period(&parts.horas, at),
                ]
                .into_iter()
                .flatten()
                .collect();
                if current.is_empty() {
                    eprintln!("{at} is outside {} .. {}", span.sunrise(), span.next_sunrise());
                    std::process::exit(1);
                }
                if json {
                    print_json(&current);
                } else {
                    current.iter().for_each(print_period);
                }
            } else if json {
                print_json(&parts);
            } else {
                println!("Muhurtas:");
                parts.muhurtas.iter().for_each(print_period);
                println!("\nChoghadiyas:");
                parts.choghadiyas.iter().for_each(print_period);
                println!("\nHoras:");
                parts.horas.iter().for_each(print_period);
            }
        }

        Commands::Kaal { span } => {
            let span = require_span(&span);
            let w = kaal_windows(&span);
            for k in [w.rahu_kaal, w.yamaganda, w.gulika] {
                println!("{:<12} {} - {}", k.kaal.name(), k.start, k.end);
            }
            let (start, end) = panchang_rs::abhijit_window(&span);
            println!("{:<12} {start} - {end}", "Abhijit");
        }

        Commands::Festivals {
            data,
            from,
            to,
            json,
        } => {
            let (config, festivals, inputs) = load_data(&data);
            let calendar: DayCalendar = inputs.iter().map(resolved_day).collect();
            let (Some(first), Some(last)) = (calendar.first_date(), calendar.last_date()) else {
                eprintln!("No days in {}", data.days.display());
                std::process::exit(1);
            };
            let range = DateRange::new(from.unwrap_or(first), to.unwrap_or(last));
            let occurrences = evaluate_festivals_with(
                &festivals,
                &calendar,
                &config.tradition,
                range,
                &config.tithi_policy,
            );
            info!(
                "{} festivals for {} between {} and {}",
                occurrences.len(),
                config.tradition,
                range.start,
                range.end
            );
            if json {
                print_json(&occurrences);
            } else {
                for o in &occurrences {
                    let name = festivals
                        .iter()
                        .find(|f| f.id == o.festival_id)
                        .map_or(o.festival_id.as_str(), |f| f.name(&config.language));
                    match o.end_date {
                        Some(end) => println!("{} .. {}  {name}", o.date, end),
                        None => println!("{}  {name}", o.date),
                    }
                }
            }
        }

        Commands::Snapshot { data } => {
            let (config, festivals, inputs) = load_data(&data);
            print_json(&assemble_range(&inputs, &festivals, &config));
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_period(p: &TimePeriod) {
    println!(
        "  {:<14} {} - {}  {}",
        p.label.name(),
        p.start.format("%H:%M:%S"),
        p.end.format("%H:%M:%S"),
        if p.is_day { "day" } else { "night" }
    );
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn require_instant(s: &str) -> DateTime<Utc> {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("Invalid UTC datetime {s}: {e}");
        std::process::exit(1);
    })
}

/// Parse `YYYY-MM-DDThh:mm:ssZ`; a missing `Z` is taken as UTC.
fn parse_utc(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S")
                .map(|n| n.and_utc())
        })
}

fn require_span(args: &SpanArgs) -> DaySpan {
    let sunrise = require_instant(&args.sunrise);
    let sunset = require_instant(&args.sunset);
    let next_sunrise = require_instant(&args.next_sunrise);
    DaySpan::from_weekday_number(sunrise, sunset, next_sunrise, args.weekday).unwrap_or_else(|e| {
        eprintln!("Invalid day span: {e}");
        std::process::exit(1);
    })
}

fn parse_policy(s: &str) -> ReferencePolicy {
    match s.to_lowercase().replace('-', "_").as_str() {
        "sunrise" => ReferencePolicy::Sunrise,
        "any_in_day" | "any" => ReferencePolicy::AnyInDay,
        _ => {
            eprintln!("Invalid tithi policy: {s}");
            eprintln!("Valid: sunrise, any_in_day");
            std::process::exit(1);
        }
    }
}

fn load_data(args: &DataArgs) -> (PanchangConfig, Vec<Festival>, Vec<DayInput>) {
    let mut config = load_or_default(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    if let Some(t) = &args.tradition {
        config.tradition = Tradition::from(t.as_str());
    }
    if let Some(p) = &args.policy {
        config.tithi_policy = parse_policy(p);
    }
    let festivals = match &args.data {
        Some(path) => load_festivals(path),
        None => config.load_festivals().unwrap_or_else(|e| {
            eprintln!("Failed to load festivals: {e}");
            std::process::exit(1);
        }),
    };
    if festivals.is_empty() {
        log::warn!("no festival definitions loaded");
    }
    let inputs = load_day_inputs_from_path(&args.days).unwrap_or_else(|e| {
        eprintln!("Failed to load day inputs: {e}");
        std::process::exit(1);
    });
    debug!(
        "{} days, {} festivals, tradition {} ({:?} months unless a rule says otherwise)",
        inputs.len(),
        festivals.len(),
        config.tradition,
        config.month_system()
    );
    (config, festivals, inputs)
}

fn load_festivals(path: &Path) -> Vec<Festival> {
    load_festivals_from_path(path).unwrap_or_else(|e| {
        eprintln!("Failed to load festivals: {e}");
        std::process::exit(1);
    })
}
