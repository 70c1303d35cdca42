use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use clap::{Args, Parser, Subcommand};
use muhurta_base::{ActivityType, ChoghadiyaSlot, TimeOfDayRange, TimePeriod};
use muhurta_ephem::{AnalyticEphemeris, CachedProvider, GeoLocation};
use muhurta_search::{
    MuhurtaSearchEngine, OptimizedWindow, SearchConfig, SearchParams, daily_choghadiya,
    daily_horas, local_instant, panchanga_for_date,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "muhurta", about = "Muhurta timing engine CLI")]
struct Cli {
    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Altitude in meters
    #[arg(long, default_value_t = 0.0)]
    alt: f64,
    /// Offset from UTC in minutes (IST = 330)
    #[arg(long, default_value_t = 330, allow_hyphen_values = true)]
    utc_offset: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a date range for windows suited to an activity
    Search {
        /// Activity key (marriage, travel, griha_pravesha, ...)
        activity: ActivityType,
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last date, inclusive (YYYY-MM-DD); defaults to --from
        #[arg(long)]
        to: Option<NaiveDate>,
        #[command(flatten)]
        place: Place,
        /// Minimum score of a qualifying instant
        #[arg(long, default_value_t = 60)]
        threshold: u8,
        /// Scan step in minutes
        #[arg(long, default_value_t = 5)]
        granularity: i64,
        /// Maximum number of windows reported
        #[arg(long, default_value_t = 20)]
        max_results: usize,
        /// Preferred local time of day (HH:MM-HH:MM, may wrap midnight)
        #[arg(long, value_parser = parse_time_range)]
        between: Option<TimeOfDayRange>,
        /// Scan the whole local day, not only sunrise to sunset
        #[arg(long)]
        any_time: bool,
        /// Let windows run through Rahukala, Yamaghanta, Gulikakala and Durmuhurta
        #[arg(long)]
        allow_inauspicious: bool,
        /// Do not prefer Abhijit Muhurta on score ties
        #[arg(long)]
        no_abhijit: bool,
        /// Print only the best window
        #[arg(long)]
        best: bool,
    },
    /// Evaluate a single local instant
    Snapshot {
        /// Local date and time (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        at: NaiveDateTime,
        #[command(flatten)]
        place: Place,
    },
    /// Panchanga of a date with limb end times and daily periods
    Panchanga {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[command(flatten)]
        place: Place,
    },
    /// Day and night choghadiyas of a date
    Choghadiya {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[command(flatten)]
        place: Place,
    },
    /// The 24 horas from sunrise of a date
    Hora {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        #[command(flatten)]
        place: Place,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    let provider = CachedProvider::new(AnalyticEphemeris::new());

    match cli.command {
        Commands::Search {
            activity,
            from,
            to,
            place,
            threshold,
            granularity,
            max_results,
            between,
            any_time,
            allow_inauspicious,
            no_abhijit,
            best,
        } => {
            let params = SearchParams {
                preferred_time: between,
                threshold,
                granularity: TimeDelta::minutes(granularity),
                max_results,
                require_daylight: !any_time,
                avoid_inauspicious_periods: !allow_inauspicious,
                prefer_abhijit: !no_abhijit,
                ..SearchParams::new(
                    from,
                    to.unwrap_or(from),
                    activity,
                    place.location(),
                    place.offset(),
                )
            };
            let engine = MuhurtaSearchEngine::new(&provider, config).unwrap_or_else(|e| fail(e));
            let result = engine.find_optimal_windows(&params).unwrap_or_else(|e| fail(e));

            if best {
                match &result.best_window {
                    Some(w) => print_window(w),
                    None => println!("No window scored {threshold} or more"),
                }
            } else {
                print!("{}", result.to_summary_text());
                if !result.windows.is_empty() {
                    println!("\nALL WINDOWS");
                    for w in &result.windows {
                        print_window(w);
                    }
                }
                for s in &result.skipped_dates {
                    println!("skipped {}: {}", s.date, s.reason);
                }
            }
            tracing::debug!(
                elapsed_ms = result.elapsed.as_millis() as u64,
                "search finished"
            );
        }

        Commands::Snapshot { at, place } => {
            let offset = place.offset();
            let instant = local_instant(at.date(), at.time(), offset).unwrap_or_else(|e| fail(e));
            let engine = MuhurtaSearchEngine::new(&provider, config).unwrap_or_else(|e| fail(e));
            let snap = engine
                .snapshot_at(instant, &place.location(), offset)
                .unwrap_or_else(|e| fail(e));
            let f = &snap.factors;
            let p = &f.panchanga;

            println!("Muhurta at {} (UTC{})\n", at, offset);
            println!("Vara:       {} ({})", p.vara, p.vara.sanskrit_name());
            println!("Tithi:      {} ({})", p.tithi, p.tithi.paksha().name());
            println!(
                "Nakshatra:  {} pada {} ({})",
                p.nakshatra.nakshatra,
                p.nakshatra.pada,
                p.nakshatra.nature().name()
            );
            println!("Yoga:       {}", p.yoga);
            println!("Karana:     {}", p.karana.karana);
            println!(
                "Hora:       {} ({})",
                f.hora.lord,
                if f.hora.is_day { "day" } else { "night" }
            );
            println!(
                "Choghadiya: {} ({})",
                f.choghadiya.choghadiya,
                f.choghadiya.choghadiya.nature().name()
            );
            println!("Abhijit:    {}", if f.is_abhijit_active() { "yes" } else { "no" });
            for kind in f.active_inauspicious() {
                println!("Inside:     {}", kind.name());
            }
            for y in &f.special_yogas {
                println!("Special:    {} - {}", y.name(), y.description());
            }
            if let Some(dosha) = f.panchaka {
                println!("Dosha:      {dosha} (severity {}/5)", dosha.severity());
            }
            println!("\nScore: {}/100", snap.score());
            print_list("Suitable", &snap.assessment.suitable_activities);
            print_list("Avoid", &snap.assessment.avoid_activities);
            for r in &snap.assessment.recommendations {
                println!("  * {r}");
            }
        }

        Commands::Panchanga { date, place } => {
            let offset = place.offset();
            let dp = panchanga_for_date(
                &provider,
                date,
                &place.location(),
                offset,
                &config.boundary(),
            )
            .unwrap_or_else(|e| fail(e));
            let p = &dp.panchanga;
            let end = |t: Option<DateTime<Utc>>| match t {
                Some(t) => format!("until {}", local(t, offset)),
                None => "end unknown".to_string(),
            };

            println!(
                "Panchanga for {} at lat {:.4}, lon {:.4}\n",
                date, place.lat, place.lon
            );
            println!("Sunrise:    {}", local(dp.sunrise, offset));
            println!("Sunset:     {}", local(dp.sunset, offset));
            println!("Vara:       {} ({})", dp.vara, dp.vara.sanskrit_name());
            println!("Tithi:      {} {}", p.tithi, end(dp.tithi_end));
            println!(
                "Nakshatra:  {} pada {} {}",
                p.nakshatra.nakshatra,
                p.nakshatra.pada,
                end(dp.nakshatra_end)
            );
            println!("Yoga:       {} {}", p.yoga, end(dp.yoga_end));
            println!("Karana:     {} {}", p.karana.karana, end(dp.karana_end));
            println!();
            print_period("Rahukala", &dp.rahukala, offset);
            print_period("Yamaghanta", &dp.yamaghanta, offset);
            print_period("Gulika Kala", &dp.gulikakala, offset);
            for d in &dp.durmuhurtas {
                print_period("Durmuhurta", d, offset);
            }
            print_period("Abhijit", &dp.abhijit, offset);
            for y in &dp.special_yogas {
                println!("{}: {}", y.name(), y.description());
            }
            if let Some(dosha) = dp.panchaka {
                println!("{dosha} in force at sunrise");
            }
        }

        Commands::Choghadiya { date, place } => {
            let offset = place.offset();
            let (day, night) =
                daily_choghadiya(&provider, date, &place.location()).unwrap_or_else(|e| fail(e));
            println!("Day choghadiya ({date})");
            print_choghadiya(&day, offset);
            println!("\nNight choghadiya");
            print_choghadiya(&night, offset);
        }

        Commands::Hora { date, place } => {
            let offset = place.offset();
            let horas = daily_horas(&provider, date, &place.location()).unwrap_or_else(|e| fail(e));
            for h in &horas {
                println!(
                    "{:>2}  {} - {}  {:<8} {}",
                    h.number,
                    local(h.period.start, offset),
                    local(h.period.end, offset),
                    h.lord.to_string(),
                    if h.is_day { "day" } else { "night" }
                );
            }
        }
    }

    let stats = provider.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, "provider cache");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MUHURTA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(e: impl Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> SearchConfig {
    match path {
        Some(p) => SearchConfig::from_toml_file(p).unwrap_or_else(|e| fail(e)),
        None => SearchConfig::default(),
    }
}

impl Place {
    fn location(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon, self.alt)
    }

    fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset * 60)
            .unwrap_or_else(|| fail(format!("invalid UTC offset: {} minutes", self.utc_offset)))
    }
}

fn parse_time_range(s: &str) -> Result<TimeOfDayRange, String> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got {s}"))?;
    let parse = |t: &str| {
        NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|e| format!("{t}: {e}"))
    };
    Ok(TimeOfDayRange::new(parse(a)?, parse(b)?))
}

fn local(t: DateTime<Utc>, offset: FixedOffset) -> String {
    t.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

fn print_period(label: &str, p: &TimePeriod, offset: FixedOffset) {
    println!(
        "{:<12} {} - {}",
        format!("{label}:"),
        local(p.start, offset),
        local(p.end, offset)
    );
}

fn print_list(label: &str, activities: &[ActivityType]) {
    let names: Vec<&str> = activities.iter().map(|a| a.name()).collect();
    println!("{label}: {}", names.join(", "));
}

fn print_choghadiya(slots: &[ChoghadiyaSlot], offset: FixedOffset) {
    for s in slots {
        println!(
            "{}  {} - {}  {:<7} {}",
            s.number,
            local(s.period.start, offset),
            local(s.period.end, offset),
            s.choghadiya.name(),
            s.choghadiya.nature().name()
        );
    }
}

fn print_window(w: &OptimizedWindow) {
    println!(
        "#{:<3} {} - {}  score {:>3}  ({} min)",
        w.rank,
        w.local_start().format("%Y-%m-%d %H:%M"),
        w.local_end().format("%H:%M"),
        w.score,
        w.duration().num_minutes()
    );
    for s in &w.positive_factors {
        println!("      + {s}");
    }
    for s in &w.negative_factors {
        println!("      - {s}");
    }
    println!("      {}", w.recommendation);
}
