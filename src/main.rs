//! Command-line interface for fakemart
//!
//! # Usage Examples
//!
//! ```bash
//! # Print one record set of every table
//! fakemart print
//!
//! # Bulk-generate 2500 record sets into a job folder
//! fakemart generate --count 2500 --seed 7 --out-dir ./data
//!
//! # Plan the chunking without writing anything
//! fakemart generate --count 250000 --dry-run
//!
//! # Export per-table CSV files with a timing report
//! fakemart export --count 500 --to ./export
//!
//! # Browse and clean up job folders
//! fakemart jobs list
//! fakemart jobs show 1d4e8f02-... products_sku
//! fakemart jobs delete 1d4e8f02-...
//!
//! # Cleanup routing decision for a row count
//! fakemart route --count 25000
//!
//! # Notification inbox
//! fakemart notifications list
//! fakemart notifications ack n-1754450000000-0
//! ```

use clap::{Parser, Subcommand};
use fakemart::{run, GenArgs, StoreArgs};
use mart_types::Table;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fakemart")]
#[command(about = "A tool for generating fake e-commerce datasets for demos and load testing")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bulk-generate record sets into a job folder of JSONL chunks
    Generate {
        #[command(flatten)]
        gen: GenArgs,

        /// Plan chunks and print the receipt without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print generated record sets to stdout as JSON
    Print {
        #[command(flatten)]
        gen: GenArgs,
    },

    /// Generate and export per-table CSV files synchronously
    Export {
        #[command(flatten)]
        gen: GenArgs,

        /// Output directory for the per-table CSV files
        #[arg(long, default_value = "./export")]
        to: PathBuf,
    },

    /// Browse and manage job folders
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },

    /// Decide cleanup routing for a row count
    Route {
        /// Total record count to route
        #[arg(long)]
        count: u64,

        /// Record sets per chunk
        #[arg(long, default_value = "1000")]
        batch_size: u64,

        /// Existing parent job to re-queue instead of a fresh id
        #[arg(long)]
        parent_job_id: Option<String>,
    },

    /// Notification inbox
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },
}

#[derive(Subcommand)]
enum JobsCommands {
    /// List known parent job ids
    List {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Show one table of a job folder (up to 100 rows)
    Show {
        /// Parent job id
        parent_job_id: String,

        /// Table name (user, address, category, subcategory, product,
        /// products_sku, wishlist, payment, order, order_item, cart)
        table: Table,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Delete a job folder and all of its data
    Delete {
        /// Parent job id
        parent_job_id: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Subcommand)]
enum NotificationCommands {
    /// List unread notifications, newest first
    List {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Acknowledge (delete) one notification
    Ack {
        /// Notification id
        id: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { gen, dry_run } => {
            let settings = gen.resolve()?;
            print_json(&run::run_generate(&settings, dry_run)?)
        }
        Commands::Print { gen } => run::run_print(&gen.resolve()?),
        Commands::Export { gen, to } => {
            let settings = gen.resolve()?;
            print_json(&run::run_export(&settings, &to)?)
        }
        Commands::Jobs { command } => match command {
            JobsCommands::List { store } => print_json(&run::jobs_list(&store.out_dir)?),
            JobsCommands::Show {
                parent_job_id,
                table,
                store,
            } => print_json(&run::jobs_show(&store.out_dir, &parent_job_id, table)?),
            JobsCommands::Delete {
                parent_job_id,
                store,
            } => {
                run::jobs_delete(&store.out_dir, &parent_job_id)?;
                println!("Deleted job folder {parent_job_id}");
                Ok(())
            }
        },
        Commands::Route {
            count,
            batch_size,
            parent_job_id,
        } => print_json(&run::run_route(count, batch_size, parent_job_id)?),
        Commands::Notifications { command } => match command {
            NotificationCommands::List { store } => {
                print_json(&run::notifications_list(&store.out_dir)?)
            }
            NotificationCommands::Ack { id, store } => {
                run::notifications_ack(&store.out_dir, &id)?;
                println!("Acknowledged {id}");
                Ok(())
            }
        },
    }
}

fn print_json<T: Serialize>(payload: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
