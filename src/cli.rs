use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(name = "jerseykraft", version, about = "JerseyKraft storefront CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "JERSEYKRAFT_API_BASE",
        help = "Backend base URL (falls back to config file, then http://localhost:8000)"
    )]
    pub api_base: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the front/back jersey panels for a color selection
    Preview {
        #[arg(long, help = "Front panel color (#RRGGBB)")]
        front: Option<String>,
        #[arg(long, help = "Back panel color (#RRGGBB)")]
        back: Option<String>,
        #[arg(long, help = "Accent color (#RRGGBB)")]
        accent: Option<String>,
    },
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    Logo {
        #[command(subcommand)]
        command: LogoCommands,
    },
    Order {
        #[command(subcommand)]
        command: OrderCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RosterCommands {
    /// Validate a roster CSV locally and report its data-row count
    Check { file: PathBuf },
    /// Upload a roster CSV with team metadata to the import endpoint
    Import {
        file: PathBuf,
        #[arg(long, help = "Team name sent with the upload (default: My Team)")]
        team_name: Option<String>,
        #[arg(long, help = "Sport sent with the upload (default: cricket)")]
        sport: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogoCommands {
    /// Generate a logo and placement guides from a text prompt
    Generate { prompt: String },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Assemble an order from the design selection and post it to checkout
    Place {
        #[arg(long)]
        customer_name: String,
        #[arg(long)]
        customer_email: String,
        #[arg(long)]
        customer_phone: String,
        #[arg(long)]
        shipping_address: String,
        #[arg(long, help = "Front panel color (#RRGGBB)")]
        front: Option<String>,
        #[arg(long, help = "Back panel color (#RRGGBB)")]
        back: Option<String>,
        #[arg(long, help = "Accent color (#RRGGBB)")]
        accent: Option<String>,
        #[arg(long, default_value = "12", help = "Jersey count; clamps to at least 1")]
        quantity: String,
        #[arg(long, value_enum, default_value_t = PaymentMethod::Upi)]
        method: PaymentMethod,
        #[arg(long)]
        team_id: Option<String>,
        #[arg(long)]
        template_id: Option<String>,
        #[arg(long, help = "Attach a previously generated logo as an order layer")]
        logo_url: Option<String>,
        #[arg(long, default_value_t = false, help = "Print the payload without posting it")]
        dry_run: bool,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Upi,
    Card,
    Netbanking,
}
