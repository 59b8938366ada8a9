//! lister - create real-estate listings from the terminal
//!
//! CLI binary driving the listing editor: fill in the draft, upload images,
//! validate and publish.

use anyhow::Result;
use clap::{Parser, Subcommand};
use estate_lister::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "lister")]
#[command(about = "Create real-estate listings with images")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log requests and state changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a listing
    Create {
        /// Listing title (10 to 62 characters)
        #[arg(long)]
        name: String,

        /// Description
        #[arg(long)]
        description: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// List the property for sale (default is rent)
        #[arg(long, group = "kind")]
        sale: bool,

        /// List the property for rent
        #[arg(long, group = "kind")]
        rent: bool,

        /// Number of bedrooms
        #[arg(long)]
        bedrooms: Option<String>,

        /// Number of bathrooms
        #[arg(long)]
        bathrooms: Option<String>,

        /// Regular price
        #[arg(long)]
        regular_price: Option<String>,

        /// Discounted price (requires --offer)
        #[arg(long)]
        discount_price: Option<String>,

        /// A discounted price applies
        #[arg(long)]
        offer: bool,

        /// Parking spot included
        #[arg(long)]
        parking: bool,

        /// Property is furnished
        #[arg(long)]
        furnished: bool,

        /// Image to upload; repeat for up to 6 (the first is the cover)
        #[arg(long = "image", short = 'i')]
        images: Vec<PathBuf>,

        /// Dry run - validate and print the request without uploading
        #[arg(long)]
        dry_run: bool,

        /// Prompt for confirmation before publishing
        #[arg(long, short = 'c')]
        confirm: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Show the signed-in user
    Test,
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("estate_lister=debug,lister=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Create {
            name,
            description,
            address,
            sale,
            rent: _,
            bedrooms,
            bathrooms,
            regular_price,
            discount_price,
            offer,
            parking,
            furnished,
            images,
            dry_run,
            confirm,
        } => {
            // --sale and --rent are exclusive (clap arg group); rent is the default
            let kind = if sale { "sale" } else { "rent" };

            let created = cli::run_create(
                &config,
                cli::CreateOptions {
                    fields: cli::FormFields {
                        name,
                        description,
                        address,
                        kind,
                        bedrooms,
                        bathrooms,
                        regular_price,
                        discount_price,
                        offer,
                        parking,
                        furnished,
                    },
                    images,
                    dry_run,
                    confirm,
                },
            )
            .await?;
            if !created {
                std::process::exit(1);
            }
        }
        Commands::Auth { action } => match action {
            AuthAction::Test => cli::run_auth_test(&config)?,
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
