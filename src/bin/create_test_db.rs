use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use txn_ledger::{SQLiteTransactionStore, initialize_db};

/// A utility for creating a seeded test database for the transaction ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");
    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));

    let samples = [
        (1, 150.00, "seed-salary"),
        (1, -45.99, "seed-coffee"),
        (2, 250.75, "seed-deposit"),
    ];

    for (account_id, amount, transaction_uuid) in samples {
        let status = store.create_transaction(account_id, amount, transaction_uuid);

        if !status.is_success() {
            eprintln!("{}", status.message());
            exit(1);
        }
    }

    println!("Success!");

    Ok(())
}
