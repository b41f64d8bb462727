//! neocat interactive CLI
//!
//! Text-menu front end over the catalog engine: list, filter, search,
//! create, edit, delete, save, and date-range switching.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use neocat::catalog::AsteroidPatch;
use neocat::engine::AsteroidDraft;
use neocat::{Asteroid, Config, CreateOutcome, Engine};

/// neocat CLI
#[derive(Parser, Debug)]
#[command(name = "neocat")]
#[command(about = "CSV-backed near-Earth-object catalog")]
#[command(version)]
struct Args {
    /// Directory holding the per-range CSV files
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Startup date (YYYY-MM-DD); prompted for when omitted
    #[arg(long)]
    date: Option<String>,

    /// JSON range-map file overriding the built-in table
    #[arg(long)]
    ranges: Option<String>,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("neocat v{}", neocat::VERSION);

    // Build config from args
    let mut config = Config::builder().data_dir(&args.data_dir).build();

    if let Some(path) = &args.ranges {
        if let Err(e) = config.load_ranges(path.as_ref()) {
            eprintln!("Failed to load range map: {}", e);
            return ExitCode::FAILURE;
        }
    }

    // Startup date routes to the first catalog file
    let date = match args.date {
        Some(d) => d,
        None => read_string("Type a date to unlock the catalog (YYYY-MM-DD): "),
    };

    let mut engine = match Engine::open(config, &date) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "OK! {} records loaded from {}",
        engine.len(),
        engine.current_file().display()
    );

    run_menu(&mut engine);

    println!("That's all, explorer!");
    ExitCode::SUCCESS
}

// =============================================================================
// Menu Loop
// =============================================================================

fn show_menu() {
    println!("\n=== NEAR-EARTH-OBJECT CATALOG ===");
    println!("1) List all");
    println!("2) Change the date range");
    println!("3) Search by name");
    println!("4) New record");
    println!("5) Update by name");
    println!("6) Delete by id");
    println!("7) Save catalog");
    println!("8) Filter hazardous");
    println!("0) Quit");
}

fn run_menu(engine: &mut Engine) {
    show_menu();

    loop {
        match read_i64("Your choice: ") {
            0 => break,
            1 => list_all(engine),
            2 => change_range(engine),
            3 => search_by_name(engine),
            4 => new_record(engine),
            5 => update_record(engine),
            6 => delete_record(engine),
            7 => save_catalog(engine),
            8 => list_hazardous(engine),
            other => println!("Unknown option: {}", other),
        }

        if read_i64("Do you want to explore more? (1=yes, 0=no): ") == 0 {
            break;
        }
        show_menu();
    }
}

// =============================================================================
// Menu Operations
// =============================================================================

fn list_all(engine: &Engine) {
    print_header();
    for record in engine.records() {
        print_record(record);
    }
}

fn list_hazardous(engine: &Engine) {
    print_header();
    for record in engine.hazardous() {
        print_record(record);
    }
}

fn change_range(engine: &mut Engine) {
    let date = read_string("Type a date to unlock the catalog (YYYY-MM-DD): ");
    match engine.switch_range(&date) {
        Ok(stats) => println!(
            "OK! {} records loaded from {}",
            stats.loaded,
            engine.current_file().display()
        ),
        Err(e) => println!("[ERROR] {}", e),
    }
}

fn search_by_name(engine: &Engine) {
    let query = read_string("Type part of the name (case-insensitive): ");
    print_header();
    for record in engine.search(&query) {
        print_record(record);
    }
}

fn new_record(engine: &mut Engine) {
    let date = read_string("Date (YYYY-MM-DD): ");

    // Route before gathering the rest, so a switch is settled up front
    let target = match engine.file_for_date(&date) {
        Ok(file) => file.to_path_buf(),
        Err(e) => {
            println!("[ERROR] {}", e);
            return;
        }
    };

    if target != engine.current_file() {
        println!(
            "\n[WARNING] This record belongs to '{}', but you are currently using '{}'.",
            target.display(),
            engine.current_file().display()
        );
        let ans = read_i64("Switch and save the new record there? (1=yes, 0=no): ");
        if ans != 1 {
            println!("Canceled. Tip: change the date range in the menu first.");
            return;
        }
        if let Err(e) = engine.switch_range(&date) {
            println!("[ERROR] Failed to switch: {}. Canceling insert.", e);
            return;
        }
        println!("[OK] Switched to {}. Catalog reloaded.", target.display());
    }

    let draft = AsteroidDraft {
        date,
        name: read_string("Name: "),
        is_hazardous: read_hazardous("Hazardous? (True/False): "),
        absolute_magnitude_h: read_f64("Absolute magnitude H: "),
        diameter_min_m: read_f64("Min diameter (m): "),
        diameter_max_m: read_f64("Max diameter (m): "),
        miss_distance_km: read_f64("Miss distance (km): "),
        velocity_km_s: read_f64("Velocity (km/s): "),
    };

    match engine.create(draft, |_, _| true) {
        Ok(CreateOutcome::Created { record, persisted }) => {
            println!("Generated NEO ID: {}", record.id);
            if persisted {
                println!(
                    "[SUCCESS] New asteroid saved in {}",
                    engine.current_file().display()
                );
            } else {
                println!("[WARNING] Saved in memory, but FAILED to update the CSV.");
            }
            print_header();
            print_record(&record);
        }
        Ok(CreateOutcome::Declined) => println!("Canceled."),
        Err(e) => println!("[ERROR] {}", e),
    }
}

fn update_record(engine: &mut Engine) {
    let name = read_string("Enter the name of the asteroid to edit: ");

    // Show current values before prompting replacements
    let current = engine
        .catalog()
        .find_by_name(&name)
        .and_then(|i| engine.catalog().get(i))
        .cloned();

    let current = match current {
        Some(record) => record,
        None => {
            println!("[ERROR] Asteroid '{}' not found in the catalog.", name);
            return;
        }
    };

    println!("\n--- Current data for '{}' ---", current.name);
    println!(" Date       : {}", current.date);
    println!(
        " Hazardous  : {}",
        if current.is_hazardous { "Yes" } else { "No" }
    );
    println!(" Velocity   : {:.2} km/s", current.velocity_km_s);
    println!(
        " Diameter   : {:.1} m (min) - {:.1} m (max)",
        current.diameter_min_m, current.diameter_max_m
    );
    println!(">> Please enter the new values below:");

    let patch = AsteroidPatch {
        date: read_string("New date (YYYY-MM-DD): "),
        is_hazardous: read_i64("Is hazardous? (1=True, 0=False): ") == 1,
        velocity_km_s: read_f64("New velocity (km/s): "),
        diameter_min_m: read_f64("New min diameter (m): "),
        diameter_max_m: read_f64("New max diameter (m): "),
        absolute_magnitude_h: read_f64("New absolute magnitude H: "),
        miss_distance_km: read_f64("New miss distance (km): "),
    };

    match engine.edit(&name, &patch) {
        Ok(record) => {
            println!("[SUCCESS] Data updated (in memory; save to persist).");
            println!(
                "Updated: [{}] {} (Vel: {:.2} km/s)",
                record.date, record.name, record.velocity_km_s
            );
        }
        Err(e) => println!("[ERROR] {}", e),
    }
}

fn delete_record(engine: &mut Engine) {
    let id = read_i64("ID to delete: ");
    match engine.delete_by_id(id) {
        Ok(record) => println!(
            "Deleted '{}' (in memory; save to persist).",
            record.name
        ),
        Err(e) => println!("[ERROR] {}", e),
    }
}

fn save_catalog(engine: &Engine) {
    match engine.save() {
        Ok(written) => println!(
            "[SUCCESS] {} records written to {}",
            written,
            engine.current_file().display()
        ),
        Err(e) => println!("[ERROR] Save failed: {}", e),
    }
}

// =============================================================================
// Table Output
// =============================================================================

fn print_header() {
    println!("DATE       | NAME                   | ID     | HZD | Dmin(m) | Dmax(m) | MISS_DIST(km) | VEL(km/s)");
    println!("-----------------------------------------------------------------------------------------------");
}

fn print_record(a: &Asteroid) {
    println!(
        "{:<10} | {:<22} | {:<6} | {:<3} | {:>6.1} m | {:>6.1} m | {:>10.0} km | {:>6.2} km/s",
        a.date,
        a.name,
        a.id,
        if a.is_hazardous { "YES" } else { "NO" },
        a.diameter_min_m,
        a.diameter_max_m,
        a.miss_distance_km,
        a.velocity_km_s,
    );
}

// =============================================================================
// Typed Prompts
// =============================================================================

/// Read one trimmed line; `None` on EOF or a broken stdin
fn read_line_opt(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Read one trimmed line; EOF yields an empty string
fn read_string(prompt: &str) -> String {
    read_line_opt(prompt).unwrap_or_default()
}

/// Read an integer, re-prompting until one parses; EOF yields 0
fn read_i64(prompt: &str) -> i64 {
    loop {
        let line = match read_line_opt(prompt) {
            Some(line) => line,
            None => return 0,
        };
        match line.parse() {
            Ok(v) => return v,
            Err(_) => println!("Invalid input. Try again!"),
        }
    }
}

/// Read a float, re-prompting until one parses; EOF yields 0.0
fn read_f64(prompt: &str) -> f64 {
    loop {
        let line = match read_line_opt(prompt) {
            Some(line) => line,
            None => return 0.0,
        };
        match line.parse() {
            Ok(v) => return v,
            Err(_) => println!("Invalid input. Try again!"),
        }
    }
}

/// Read the hazardous flag: true / yes / 1 (any case) count as true
fn read_hazardous(prompt: &str) -> bool {
    let answer = read_string(prompt).to_lowercase();
    matches!(answer.as_str(), "true" | "yes" | "1")
}
