use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use toolbox::color::ColorState;
use toolbox::config::ToolboxConfig;
use toolbox::currency::{self, StaticRates};
use toolbox::date;
use toolbox::encoding;
use toolbox::pace::{self, DistanceUnit};
use toolbox::password::{self, CharClass, PasswordSpec};
use toolbox::stopwatch::{format_elapsed, Action, Stopwatch, SystemClock};
use toolbox::text::{self, TextCase};
use toolbox::units::{self, Category};
use toolbox::worldclock::{self, ZoneSelection};

const DEFAULT_CONFIG_FILE: &str = "toolbox.toml";

#[derive(Parser)]
#[command(name = "toolbox")]
#[command(about = "Everyday conversion and calculation tools", long_about = None)]
struct Cli {
    /// Config file (default: ./toolbox.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print structured results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

#[derive(Clone, Copy, ValueEnum)]
enum Base64Direction {
    Encode,
    Decode,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a measurement ("10 km" mi, or 10 km mi)
    Convert {
        /// Quantity ("10 km") or bare value
        value: String,

        /// Target unit, or source unit when a third argument is given
        unit: String,

        /// Target unit
        to: Option<String>,
    },

    /// List the units of a category (or all)
    Units { category: Option<String> },

    /// Show a color as HEX, RGB and HSL
    Color {
        /// "#3b82f6", "59,130,246" or "217,91,60"
        value: String,

        /// Input format (guessed when omitted; triples default to RGB)
        #[arg(long, value_enum)]
        from: Option<ColorFormat>,
    },

    /// Age and next-birthday countdown
    Age {
        /// Birth date (YYYY-MM-DD)
        birth: String,

        /// Compute the age on this date instead of now
        #[arg(long)]
        on: Option<String>,
    },

    /// Running pace and speed
    Pace {
        distance: f64,

        #[arg(long, default_value = "km")]
        unit: String,

        #[arg(long, default_value_t = 0)]
        hours: u64,

        #[arg(long, default_value_t = 0)]
        minutes: u64,

        #[arg(long, default_value_t = 0)]
        seconds: u64,
    },

    /// Change text case (all cases when --to is omitted)
    Case {
        text: String,

        #[arg(long)]
        to: Option<String>,
    },

    /// Character, word, sentence and line counts (reads stdin without TEXT)
    Stats { text: Option<String> },

    /// Generate a random password
    Password {
        #[arg(long)]
        length: Option<usize>,

        #[arg(long)]
        no_upper: bool,

        #[arg(long)]
        no_lower: bool,

        #[arg(long)]
        no_numbers: bool,

        #[arg(long)]
        symbols: bool,
    },

    /// Base64 encode or decode UTF-8 text
    Base64 {
        #[arg(value_enum)]
        direction: Base64Direction,

        text: String,
    },

    /// Build a QR code image URL
    Qr {
        text: String,

        #[arg(long)]
        size: Option<u32>,
    },

    /// Convert between currencies using the configured rate table
    Currency { amount: f64, from: String, to: String },

    /// Current time in several time zones
    Clock {
        /// IANA ids or city names (configured zones when omitted)
        zones: Vec<String>,

        /// Drop a zone from the list (repeatable)
        #[arg(long)]
        without: Vec<String>,

        /// Keep refreshing until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// List supported currencies and the ones with a rate table
    Currencies,

    /// Format milliseconds as MM:SS.CC
    Elapsed { ms: u64 },

    /// Interactive stopwatch: s = start/pause, l = lap, r = reset, q = quit
    Stopwatch,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<ToolboxConfig, Box<dyn Error>> {
    let config = match path {
        Some(path) => ToolboxConfig::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            ToolboxConfig::load_from_file(DEFAULT_CONFIG_FILE)?
        }
        None => ToolboxConfig::default(),
    };
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Convert { value, unit, to } => convert(&value, &unit, to.as_deref(), json),
        Commands::Units { category } => list_units(category.as_deref(), json),
        Commands::Color { value, from } => show_color(&value, from, json),
        Commands::Age { birth, on } => show_age(&birth, on.as_deref(), json),
        Commands::Pace {
            distance,
            unit,
            hours,
            minutes,
            seconds,
        } => show_pace(distance, &unit, hours, minutes, seconds, json),
        Commands::Case { text, to } => change_case(&text, to.as_deref(), json),
        Commands::Stats { text } => show_stats(text, json),
        Commands::Password {
            length,
            no_upper,
            no_lower,
            no_numbers,
            symbols,
        } => {
            let mut classes = Vec::new();
            if !no_upper {
                classes.push(CharClass::Uppercase);
            }
            if !no_lower {
                classes.push(CharClass::Lowercase);
            }
            if !no_numbers {
                classes.push(CharClass::Numbers);
            }
            if symbols {
                classes.push(CharClass::Symbols);
            }
            let length = length.unwrap_or(config.password.default_length);
            make_password(PasswordSpec::new(length, classes), &config, json)
        }
        Commands::Base64 { direction, text } => {
            let output = match direction {
                Base64Direction::Encode => encoding::encode_base64(&text),
                Base64Direction::Decode => encoding::decode_base64(&text)?,
            };
            println!("{}", output);
            Ok(())
        }
        Commands::Qr { text, size } => {
            let size = size.unwrap_or(config.qr.default_size);
            println!("{}", encoding::qr_url(&text, size, &config.qr)?);
            Ok(())
        }
        Commands::Currency { amount, from, to } => {
            let rates = StaticRates::from_config(&config.currency);
            let converted = currency::convert_currency(&rates, amount, &from, &to)?;
            if json {
                print_json(&serde_json::json!({
                    "amount": amount,
                    "from": from.to_ascii_uppercase(),
                    "to": to.to_ascii_uppercase(),
                    "result": (converted * 100.0).round() / 100.0,
                }))
            } else {
                println!(
                    "{} = {}",
                    currency::format_amount(amount, &from),
                    currency::format_amount(converted, &to)
                );
                Ok(())
            }
        }
        Commands::Clock {
            zones,
            without,
            watch,
        } => world_clock(&zones, &without, watch, &config, json),
        Commands::Currencies => list_currencies(&config, json),
        Commands::Elapsed { ms } => {
            println!("{}", format_elapsed(ms));
            Ok(())
        }
        Commands::Stopwatch => run_stopwatch(&config),
    }
}

fn convert(value: &str, unit: &str, to: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let (result, category, target) = match to {
        None if units::looks_like_quantity(value) => {
            let (result, category) = units::convert_quantity(value, unit)?;
            (result, category, unit)
        }
        None => {
            return Err(format!("'{}' needs a unit, e.g. \"{} km\"", value, value.trim()).into())
        }
        Some(_) if units::looks_like_quantity(value) => {
            return Err(format!("'{}' already has a unit; pass only the target", value).into())
        }
        Some(to) => {
            let from = units::find_unit(unit).ok_or_else(|| format!("Unknown unit '{}'", unit))?;
            let number: f64 = value
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a number", value))?;
            (
                units::convert(number, from.key, to, from.category)?,
                from.category,
                to,
            )
        }
    };

    let formatted = units::format_converted(result, category);
    if json {
        print_json(&serde_json::json!({
            "category": category,
            "unit": target,
            "value": result,
            "formatted": formatted,
        }))
    } else {
        println!("{} {}", formatted, target);
        Ok(())
    }
}

fn list_units(category: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let categories = match category {
        Some(c) => vec![c.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    if json {
        let all: Vec<_> = categories
            .iter()
            .flat_map(|c| units::units_for(*c).iter())
            .collect();
        return print_json(&all);
    }

    for category in categories {
        println!("{} (base: {}):", category, category.base_unit());
        for unit in units::units_for(category) {
            println!("  - {:<3} {}", unit.key, unit.name);
        }
    }
    Ok(())
}

fn parse_triple(value: &str) -> Result<[f64; 3], Box<dyn Error>> {
    let parts: Vec<f64> = value
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("'{}' is not a comma-separated triple", value))?;
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(format!("expected three components, got {}", parts.len()).into()),
    }
}

fn show_color(value: &str, from: Option<ColorFormat>, json: bool) -> Result<(), Box<dyn Error>> {
    let format = from.unwrap_or(if value.contains(',') {
        ColorFormat::Rgb
    } else {
        ColorFormat::Hex
    });

    let mut state = ColorState::default();
    match format {
        ColorFormat::Hex => state.update_from_hex(value)?,
        ColorFormat::Rgb => {
            let [r, g, b] = parse_triple(value)?;
            for c in [r, g, b] {
                if c.fract() != 0.0 {
                    return Err(format!("RGB channel {} is not an integer", c).into());
                }
            }
            state.update_from_rgb(r as i64, g as i64, b as i64)?
        }
        ColorFormat::Hsl => {
            let [h, s, l] = parse_triple(value)?;
            state.update_from_hsl(h, s, l)?
        }
    }

    if json {
        let (h, s, l) = state.hsl().rounded();
        return print_json(&serde_json::json!({
            "hex": state.hex(),
            "rgb": state.rgb(),
            "hsl": { "h": h, "s": s, "l": l },
        }));
    }

    println!("HEX: {}", state.hex());
    println!("RGB: {}", state.rgb());
    println!("HSL: {}", state.hsl());
    Ok(())
}

fn show_age(birth: &str, on: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    let birth = date::parse_date(birth)?;
    let age = match on {
        Some(on) => date::age_on(birth, date::parse_date(on)?)?,
        None => date::age_between(birth, chrono::Local::now().naive_local())?,
    };

    if json {
        return print_json(&age);
    }

    println!(
        "Age: {} years, {} months, {} days",
        age.years, age.months, age.days
    );
    println!("Total days lived: {}", age.total_days);
    println!(
        "Next birthday: {} ({} days)",
        age.next_birthday.format("%B %-d, %Y"),
        age.days_to_next_birthday
    );
    Ok(())
}

fn show_pace(
    distance: f64,
    unit: &str,
    hours: u64,
    minutes: u64,
    seconds: u64,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let unit: DistanceUnit = unit.parse()?;
    let report = pace::compute_pace(distance, unit, hours, minutes, seconds)?.report();

    if json {
        return print_json(&report);
    }

    println!(
        "Distance: {} km / {} mi in {}",
        report.distance_km, report.distance_miles, report.total_time
    );
    println!("Pace: {} /km, {} /mi", report.pace_per_km, report.pace_per_mile);
    println!("Speed: {} km/h, {} mph", report.speed_kmh, report.speed_mph);
    Ok(())
}

fn change_case(input: &str, to: Option<&str>, json: bool) -> Result<(), Box<dyn Error>> {
    if let Some(to) = to {
        let case: TextCase = to.parse()?;
        println!("{}", case.apply(input));
        return Ok(());
    }

    if json {
        return print_json(&text::convert_all(input));
    }

    for case in TextCase::ALL {
        println!("{:<14} {}", case.label(), case.apply(input));
    }
    Ok(())
}

fn show_stats(input: Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let input = match input {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let stats = text::text_stats(&input);

    if json {
        return print_json(&stats);
    }

    println!("Characters:          {}", stats.characters);
    println!("Characters (no ws):  {}", stats.characters_no_spaces);
    println!("Words:               {}", stats.words);
    println!("Sentences:           {}", stats.sentences);
    println!("Paragraphs:          {}", stats.paragraphs);
    println!("Lines:               {}", stats.lines);
    println!("Reading time:        {} min", stats.reading_time_minutes);
    Ok(())
}

fn make_password(
    spec: PasswordSpec,
    config: &ToolboxConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let generated = password::generate(&spec, &config.password)?;
    let strength = password::strength(spec.length);

    if json {
        return print_json(&serde_json::json!({
            "password": generated,
            "length": spec.length,
            "strength": strength,
        }));
    }

    println!("{}", generated);
    eprintln!("Strength: {}", strength);
    Ok(())
}

fn list_currencies(config: &ToolboxConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let rates = StaticRates::from_config(&config.currency);
    let bases = rates.base_currencies();

    if json {
        return print_json(&serde_json::json!({
            "currencies": currency::CURRENCIES,
            "rate_tables": bases,
        }));
    }

    for c in currency::CURRENCIES {
        let marker = if bases.contains(&c.code) { "*" } else { " " };
        println!("{} {} {:<4} {}", marker, c.code, c.symbol, c.name);
    }
    println!("* has a rate table");
    Ok(())
}

fn world_clock(
    zones: &[String],
    without: &[String],
    watch: bool,
    config: &ToolboxConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut selection = if zones.is_empty() {
        ZoneSelection::from_ids(&config.clock.zones)?
    } else {
        ZoneSelection::from_ids(zones)?
    };
    for zone in without {
        if !selection.remove(zone) {
            log::warn!("zone '{}' is not in the list", zone);
        }
    }
    if selection.zones().is_empty() {
        return Err("no time zones left to show".into());
    }
    let tick = Duration::from_millis(config.clock.tick_ms);

    loop {
        let now = chrono::Utc::now();
        let readings: Vec<_> = selection
            .zones()
            .iter()
            .map(|tz| worldclock::read_zone(*tz, now))
            .collect();

        if json {
            print_json(&readings)?;
        } else {
            for r in &readings {
                println!(
                    "{:<14} {}  {}  (UTC{})",
                    r.name, r.time, r.date, r.offset
                );
            }
        }

        if !watch {
            return Ok(());
        }
        std::thread::sleep(tick);
        println!();
    }
}

fn run_stopwatch(config: &ToolboxConfig) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line.trim().to_lowercase()).is_err() {
                break;
            }
        }
    });

    let tick = Duration::from_millis(config.stopwatch.tick_ms);
    let mut watch = Stopwatch::new(SystemClock::new());
    let mut stdout = std::io::stdout();

    println!("s = start/pause, l = lap, r = reset, q = quit (press Enter after each)");

    loop {
        match rx.recv_timeout(tick) {
            Ok(cmd) => match cmd.as_str() {
                "s" | "" => watch.toggle(),
                "l" => {
                    watch.dispatch(Action::Lap);
                    let state = watch.state();
                    if let (Some(lap), Some(split)) = (state.laps().last(), state.splits().last()) {
                        println!(
                            "\rLap {:>2}: {}  (+{})",
                            state.laps().len(),
                            format_elapsed(*lap),
                            format_elapsed(*split)
                        );
                    }
                }
                "r" => watch.dispatch(Action::Reset),
                "q" => break,
                other => log::warn!("unknown stopwatch command '{}'", other),
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        print!("\r{}", watch.display());
        stdout.flush()?;
    }

    println!();
    let state = watch.state();
    if let (Some(best), Some(worst)) = (state.best_lap(), state.worst_lap()) {
        println!("Best lap: {}", format_elapsed(best));
        println!("Worst lap: {}", format_elapsed(worst));
    }
    println!("Total: {}", watch.display());
    Ok(())
}
