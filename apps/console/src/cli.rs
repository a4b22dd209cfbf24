//! Command-line surface.
//!
//! Every command that shows a view maps to a route, and the route guard
//! runs before the command does.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use salesdesk_core::{Money, Route};

#[derive(Parser, Debug)]
#[command(name = "salesdesk", version, about = "SalesDesk products, customers and invoices")]
pub struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, env = "SALESDESK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overriding config and environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Session directory, overriding config and environment.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and keep the session.
    Login {
        email: String,
        #[arg(env = "SALESDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the local session.
    Logout,
    /// Show the session and where the guard would land.
    Status,
    /// Run the route guard against a path.
    Open { path: String },
    Products(ProductsCommand),
    Customers(CustomersCommand),
    Sales(SalesCommand),
}

impl Command {
    /// Route the command displays, if it is a view at all.
    pub fn route(&self) -> Option<Route> {
        match self {
            Command::Login { .. } => Some(Route::Login),
            Command::Products(_) => Some(Route::Products),
            Command::Customers(_) => Some(Route::Customers),
            Command::Sales(_) => Some(Route::Sales),
            Command::Logout | Command::Status | Command::Open { .. } => None,
        }
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    List,
    /// `{ id, name }` pairs for building invoice lines.
    ForSale,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Money,
        #[arg(long)]
        barcode: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Changes the given fields and sends the whole product back.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Money>,
        #[arg(long)]
        barcode: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: String },
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Args, Debug)]
pub struct CustomersCommand {
    #[command(subcommand)]
    pub command: CustomersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomersSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Delete { id: String },
}

// =============================================================================
// Sales
// =============================================================================

#[derive(Args, Debug)]
pub struct SalesCommand {
    #[command(subcommand)]
    pub command: SalesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SalesSubcommand {
    List {
        #[arg(long, default_value_t = salesdesk_core::DEFAULT_PAGE_NUMBER)]
        page: u32,
        #[arg(long, default_value_t = salesdesk_core::DEFAULT_PAGE_SIZE)]
        page_size: u32,
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        customer_id: Option<String>,
        #[arg(long)]
        invoice_number: Option<String>,
    },
    /// Invoice header plus its lines.
    Show { id: String },
    Create(CreateSaleArgs),
    Delete { id: String },
    DeleteLine { id: String },
}

#[derive(Args, Debug)]
pub struct CreateSaleArgs {
    #[arg(long)]
    pub invoice_number: String,

    #[arg(long)]
    pub customer_id: String,

    /// Defaults to today.
    #[arg(long)]
    pub issued_date: Option<NaiveDate>,

    /// Defaults to 30 days after the issue date.
    #[arg(long)]
    pub due_date: Option<NaiveDate>,

    /// Invoice line as ITEM:QTY:PRICE. Repeat for more lines.
    #[arg(long = "line", value_name = "ITEM:QTY:PRICE", required = true)]
    pub lines: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_commands_map_to_routes() {
        let cli = Cli::parse_from(["salesdesk", "products", "list"]);
        assert_eq!(cli.command.route(), Some(Route::Products));

        let cli = Cli::parse_from(["salesdesk", "status"]);
        assert_eq!(cli.command.route(), None);
    }

    #[test]
    fn test_sales_create_parses_lines_and_dates() {
        let cli = Cli::parse_from([
            "salesdesk",
            "sales",
            "create",
            "--invoice-number",
            "INV-1",
            "--customer-id",
            "c1",
            "--issued-date",
            "2025-03-01",
            "--line",
            "p1:2:4.00",
            "--line",
            "p2:1:5",
        ]);
        let Command::Sales(SalesCommand {
            command: SalesSubcommand::Create(args),
        }) = cli.command
        else {
            panic!("expected sales create");
        };
        assert_eq!(args.lines.len(), 2);
        assert_eq!(args.issued_date, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(args.due_date, None);
    }

    #[test]
    fn test_price_must_parse() {
        let result = Cli::try_parse_from([
            "salesdesk", "products", "create", "--name", "Tea", "--price", "cheap",
        ]);
        assert!(result.is_err());
    }
}
