use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use log::debug;
use miqat_rs::{
    CalculationMethod, CalculationParameters, CalendarDate, Coordinates, HighLatitudeRule, Madhab,
    MiqatConfig, Rounding, Shafaq, julian_century, julian_day, local_time, prayer_times_range,
    qibla, sunnah_times_range,
};

#[derive(Parser)]
#[command(name = "miqat", about = "Islamic prayer times CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily prayer times
    Times {
        /// First date (YYYY-MM-DD), today (UTC) if omitted
        #[arg(long)]
        date: Option<String>,
        /// Number of consecutive days
        #[arg(long, default_value = "1")]
        days: u32,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Middle and last third of the night
    Sunnah {
        /// First date (YYYY-MM-DD), today (UTC) if omitted
        #[arg(long)]
        date: Option<String>,
        /// Number of consecutive nights
        #[arg(long, default_value = "1")]
        days: u32,
        #[command(flatten)]
        calc: CalcArgs,
    },
    /// Qibla bearing from true north
    Qibla {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Julian Day and Julian century for a date
    Julian {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Hours past 0h UT
        #[arg(long, default_value = "0")]
        hours: f64,
    },
    /// List calculation method presets
    Methods,
}

/// Location and calculation options shared by `times` and `sunnah`.
/// Flags override values read from `--config`.
#[derive(Args)]
struct CalcArgs {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Method preset, e.g. muslim-world-league, north-america
    #[arg(long)]
    method: Option<String>,
    /// shafi or hanafi
    #[arg(long)]
    madhab: Option<String>,
    /// middle-of-the-night, seventh-of-the-night or twilight-angle
    #[arg(long)]
    rule: Option<String>,
    /// general, ahmer or abyad
    #[arg(long)]
    shafaq: Option<String>,
    /// nearest, up or none
    #[arg(long)]
    rounding: Option<String>,
    /// Fixed display offset east of UTC, in minutes
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,
}

struct Resolved {
    coordinates: Coordinates,
    parameters: CalculationParameters,
    utc_offset_minutes: i32,
}

fn resolve(args: &CalcArgs) -> Resolved {
    let config = match &args.config {
        Some(path) => MiqatConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => MiqatConfig::default(),
    };

    let coordinates = match (args.lat, args.lon, config.coordinates) {
        (Some(lat), Some(lon), _) => Coordinates::new(lat, lon).unwrap_or_else(|e| {
            eprintln!("Invalid location: {e}");
            std::process::exit(1);
        }),
        (None, None, Some(coords)) => coords,
        _ => {
            eprintln!("Location required: pass --lat and --lon, or a config with [location]");
            std::process::exit(1);
        }
    };

    let mut parameters = config.parameters;
    if let Some(name) = &args.method {
        let method: CalculationMethod = parse_or_exit(name);
        let adjustments = parameters.adjustments;
        parameters = method.parameters().with_adjustments(adjustments);
    }
    if let Some(name) = &args.madhab {
        parameters.madhab = parse_or_exit::<Madhab>(name);
    }
    if let Some(name) = &args.rule {
        parameters.high_latitude_rule = Some(parse_or_exit::<HighLatitudeRule>(name));
    }
    if let Some(name) = &args.shafaq {
        parameters.shafaq = parse_or_exit::<Shafaq>(name);
    }
    if let Some(name) = &args.rounding {
        parameters.rounding = parse_or_exit::<Rounding>(name);
    }

    let utc_offset_minutes = args.utc_offset.unwrap_or(config.utc_offset_minutes);
    debug!(
        "resolved {:?}, method {}, offset {utc_offset_minutes} min",
        coordinates, parameters.method
    );
    Resolved {
        coordinates,
        parameters,
        utc_offset_minutes,
    }
}

fn parse_or_exit<T>(s: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_date(s: Option<&str>) -> CalendarDate {
    match s {
        Some(s) => parse_or_exit(s),
        None => CalendarDate::from(Utc::now().date_naive()),
    }
}

fn format_local(time: DateTime<Utc>, utc_offset_minutes: i32) -> String {
    match local_time(time, utc_offset_minutes) {
        Some(t) => t.format("%H:%M").to_string(),
        None => {
            eprintln!("Invalid UTC offset: {utc_offset_minutes} minutes");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Times { date, days, calc } => {
            let start = parse_date(date.as_deref());
            let r = resolve(&calc);
            let rows = prayer_times_range(r.coordinates, start, days, r.parameters)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            let mut failed = false;
            for (date, result) in rows {
                match result {
                    Ok(t) => {
                        let off = r.utc_offset_minutes;
                        println!(
                            "{date}  fajr {}  sunrise {}  dhuhr {}  asr {}  maghrib {}  isha {}",
                            format_local(t.fajr, off),
                            format_local(t.sunrise, off),
                            format_local(t.dhuhr, off),
                            format_local(t.asr, off),
                            format_local(t.maghrib, off),
                            format_local(t.isha, off),
                        );
                    }
                    Err(e) => {
                        eprintln!("{date}  {e}");
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        Commands::Sunnah { date, days, calc } => {
            let start = parse_date(date.as_deref());
            let r = resolve(&calc);
            let rows = sunnah_times_range(r.coordinates, start, days, r.parameters)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            for (date, s) in rows {
                println!(
                    "{date}  middle of the night {}  last third {}",
                    format_local(s.middle_of_the_night, r.utc_offset_minutes),
                    format_local(s.last_third_of_the_night, r.utc_offset_minutes),
                );
            }
        }
        Commands::Qibla { lat, lon } => {
            let bearing = qibla(lat, lon).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            println!("Qibla: {bearing:.4} deg from true north");
        }
        Commands::Julian { date, hours } => {
            let date: CalendarDate = parse_or_exit(&date);
            let jd = julian_day(date.year(), date.month(), date.day(), hours);
            println!("JD:      {jd:.6}");
            println!("Century: {:.12}", julian_century(jd));
        }
        Commands::Methods => {
            for &method in CalculationMethod::all() {
                let p = method.parameters();
                if p.isha_interval > 0 {
                    println!(
                        "{:<24} fajr {:>5.1}  isha +{} min",
                        method.name(),
                        p.fajr_angle,
                        p.isha_interval
                    );
                } else {
                    println!(
                        "{:<24} fajr {:>5.1}  isha {:>5.1}",
                        method.name(),
                        p.fajr_angle,
                        p.isha_angle
                    );
                }
            }
        }
    }
}
