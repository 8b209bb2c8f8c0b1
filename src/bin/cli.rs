//! rentaldb Menu CLI
//!
//! The menu-driven text interface over the rental store. Thin by design: it
//! loads the store at startup, routes one numbered choice per loop turn to a
//! store operation, and saves once at exit.

use std::io::{self, BufRead, Write};
use std::process;

use chrono::{Local, LocalResult, TimeZone};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rentaldb::{Config, RecordFilter, RecordStatus, RentalRecord, RentalStore};

/// rentaldb menu interface
#[derive(Parser, Debug)]
#[command(name = "rentaldb")]
#[command(about = "Scooter rental record management")]
#[command(version)]
struct Args {
    /// Path of the rental data file
    #[arg(short, long, default_value = rentaldb::config::DEFAULT_DATA_FILE)]
    data_file: String,

    /// Hourly rental rate applied when a rental is closed
    #[arg(short = 'r', long, default_value_t = rentaldb::config::DEFAULT_HOURLY_RATE)]
    hourly_rate: f64,
}

fn main() {
    // Logs go to stderr so the menu on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_file(&args.data_file)
        .hourly_rate(args.hourly_rate)
        .build();

    println!("Initializing Scooter Rental System...");

    // Initialization failure is fatal; a corrupt data file must not be
    // silently replaced by an empty one
    let mut store = match RentalStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("failed to open rental store: {}", e);
            eprintln!("System failed to initialize: {}. Exiting.", e);
            process::exit(1);
        }
    };

    println!("{} records loaded from {}.", store.len(), args.data_file);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let choice = match read_line(&mut lines) {
            Some(line) => line,
            // EOF behaves like Exit and Save
            None => break,
        };

        match choice.trim() {
            "1" => start_new_rental(&mut store, &mut lines),
            "2" => end_active_rental(&mut store, &mut lines),
            "3" => view_all_rentals(&store),
            "4" => search_records(&store, &mut lines),
            "5" => break,
            _ => println!("[WARNING] Invalid choice. Please try again."),
        }
    }

    println!("\nExiting system. Saving data...");
    if let Err(e) = store.save() {
        tracing::error!("shutdown save failed: {}", e);
        eprintln!("Error: failed to save rental data: {}", e);
        process::exit(1);
    }
    println!("Goodbye!");
}

// =============================================================================
// Menu Actions
// =============================================================================

fn print_menu() {
    println!("\n--- Scooter Rental Management ---");
    println!("1. Start New Rental");
    println!("2. End Active Rental");
    println!("3. View All Rental Records");
    println!("4. Search Records");
    println!("5. Exit and Save");
    prompt("Enter your choice: ");
}

fn start_new_rental(store: &mut RentalStore, lines: &mut impl LineSource) {
    prompt("Enter scooty ID (blank to assign one): ");
    let scooty_id = match read_line(lines) {
        Some(line) => {
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                let minted = store.next_vehicle_id();
                println!("Assigned scooty ID {}.", minted);
                minted
            } else {
                trimmed
            }
        }
        None => return,
    };

    prompt("Enter customer name: ");
    let customer_name = match read_line(lines) {
        Some(line) => line.trim().to_string(),
        None => return,
    };
    if customer_name.is_empty() {
        println!("[WARNING] Customer name cannot be empty.");
        return;
    }

    let record = store.start_rental(&scooty_id, &customer_name);
    println!(
        "Rental {} started for {} on scooty {}.",
        record.record_id, record.customer_name, record.scooty_id
    );
    print_table(std::iter::once(record));
}

fn end_active_rental(store: &mut RentalStore, lines: &mut impl LineSource) {
    prompt("Enter rental record ID to close: ");
    let record_id = match read_line(lines) {
        Some(line) => line.trim().to_string(),
        None => return,
    };

    match store.end_rental(&record_id) {
        Ok(record) => {
            println!(
                "Rental {} closed. Total cost: ${:.2}",
                record.record_id, record.total_cost
            );
        }
        Err(e) => println!("[WARNING] {}", e),
    }
}

fn view_all_rentals(store: &RentalStore) {
    if store.is_empty() {
        println!("No rental records on file.");
        return;
    }
    print_table(store.iter());
}

fn search_records(store: &RentalStore, lines: &mut impl LineSource) {
    println!("\nSearch by:");
    println!("1. Record ID");
    println!("2. Scooty ID");
    println!("3. Customer name");
    println!("4. Status");
    prompt("Enter search type: ");

    let search_type = match read_line(lines) {
        Some(line) => line.trim().to_string(),
        None => return,
    };

    let filter = match search_type.as_str() {
        "1" => {
            prompt("Enter record ID: ");
            match read_line(lines) {
                Some(line) => RecordFilter::RecordId(line.trim().to_string()),
                None => return,
            }
        }
        "2" => {
            prompt("Enter scooty ID: ");
            match read_line(lines) {
                Some(line) => RecordFilter::ScootyId(line.trim().to_string()),
                None => return,
            }
        }
        "3" => {
            prompt("Enter customer name: ");
            match read_line(lines) {
                Some(line) => RecordFilter::Customer(line.trim().to_string()),
                None => return,
            }
        }
        "4" => {
            prompt("Enter status (active/closed): ");
            match read_line(lines) {
                Some(line) => match line.trim().to_lowercase().as_str() {
                    "active" => RecordFilter::Status(RecordStatus::Active),
                    "closed" => RecordFilter::Status(RecordStatus::Closed),
                    other => {
                        println!("[WARNING] Unknown status '{}'.", other);
                        return;
                    }
                },
                None => return,
            }
        }
        _ => {
            println!("[WARNING] Invalid search type.");
            return;
        }
    };

    let matches: Vec<&RentalRecord> = store.search(&filter).collect();
    if matches.is_empty() {
        println!("No matching records found.");
    } else {
        print_table(matches.into_iter());
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

const TABLE_RULE: &str = "-------------------------------------------------------------------------------------------------------------";

fn print_table<'a>(records: impl Iterator<Item = &'a RentalRecord>) {
    println!("\n{}", TABLE_RULE);
    println!(
        "| {:<8} | {:<8} | {:<20} | {:<19} | {:<19} | {:<8} | {:<6} |",
        "REC ID", "SCOOTY", "CUSTOMER NAME", "START TIME", "END TIME", "COST ($)", "STATUS"
    );
    println!("{}", TABLE_RULE);

    for record in records {
        let end_time = if record.is_active() {
            "--- ACTIVE ---".to_string()
        } else {
            format_time(record.end_time)
        };

        println!(
            "| {:<8} | {:<8} | {:<20} | {:<19} | {:<19} | {:<8} | {:<6} |",
            record.record_id,
            record.scooty_id,
            record.customer_name,
            format_time(record.start_time),
            end_time,
            record.display_cost(),
            record.status()
        );
    }
    println!("{}", TABLE_RULE);
}

fn format_time(epoch_seconds: i64) -> String {
    match Local.timestamp_opt(epoch_seconds, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => epoch_seconds.to_string(),
    }
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Any line-by-line input source
trait LineSource: Iterator<Item = io::Result<String>> {}

impl<T: Iterator<Item = io::Result<String>>> LineSource for T {}

fn prompt(label: &str) {
    print!("{}", label);
    let _ = io::stdout().flush();
}

fn read_line(lines: &mut impl LineSource) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        // Read errors on an interactive stream are treated like EOF
        Some(Err(_)) | None => None,
    }
}
