//! Command-line driver for the parcel tracker.
//!
//! # Responsibility
//! - Map subcommands onto `ParcelService` use-cases.
//! - Own the database connection for the lifetime of one command.

use clap::{Parser, Subcommand};
use parcel_core::{
    default_log_level, init_logging, open_db, ClientId, Parcel, ParcelNumber, ParcelService,
    SqliteParcelStore,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "parcel")]
#[command(version)]
#[command(about = "Track parcels through registered -> sent -> delivered")]
struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, default_value = "parcel_tracker.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new parcel
    Register {
        /// Owning client id
        #[arg(short, long)]
        client: ClientId,

        /// Delivery address
        #[arg(short, long)]
        address: String,
    },

    /// Show one parcel
    Show { number: ParcelNumber },

    /// List all parcels of a client
    List {
        #[arg(short, long)]
        client: ClientId,
    },

    /// Advance a parcel to its next status
    Advance { number: ParcelNumber },

    /// Change the address of a registered parcel
    Address {
        number: ParcelNumber,
        address: String,
    },

    /// Delete a registered parcel
    Delete { number: ParcelNumber },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let conn = open_db(&cli.db)?;
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn)?);

    match cli.command {
        Commands::Register { client, address } => {
            let parcel = service.register(client, address)?;
            println!("registered parcel {}", parcel.number);
            print_parcel(&parcel);
        }
        Commands::Show { number } => print_parcel(&service.parcel(number)?),
        Commands::List { client } => {
            let parcels = service.client_parcels(client)?;
            if parcels.is_empty() {
                println!("client {client} has no parcels");
            }
            for parcel in &parcels {
                print_parcel(parcel);
            }
        }
        Commands::Advance { number } => match service.next_status(number)? {
            Some(status) => println!("parcel {number} is now {status}"),
            None => println!("parcel {number} has no next status"),
        },
        Commands::Address { number, address } => {
            service.change_address(number, &address)?;
            print_parcel(&service.parcel(number)?);
        }
        Commands::Delete { number } => {
            service.delete(number)?;
            match service.parcel(number) {
                Err(err) if err.is_not_found() => println!("parcel {number} is gone"),
                Err(err) => return Err(err.into()),
                Ok(parcel) if !parcel.status.is_registered() => {
                    println!("parcel {number} is {} and was kept", parcel.status)
                }
                Ok(_) => println!("parcel {number} was kept"),
            }
        }
    }

    Ok(())
}

fn print_parcel(parcel: &Parcel) {
    println!(
        "{}\tclient={}\tstatus={}\taddress={}\tcreated_at={}",
        parcel.number, parcel.client, parcel.status, parcel.address, parcel.created_at
    );
}
