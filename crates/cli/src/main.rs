//! Shelf CLI - a terminal front end for the storefront engines.
//!
//! # Usage
//!
//! ```bash
//! # Log in as the demo account
//! shelf login -e haythem@example.com -p 123456
//!
//! # Browse and fill the cart
//! shelf products list --category 3 --sort price-asc
//! shelf cart add 7 --quantity 2
//!
//! # Place and follow an order
//! shelf checkout
//! shelf orders list
//! shelf orders cancel ORD-1718000000000-9f1c...
//! ```
//!
//! State lives in `SHELF_DATA_DIR` (default `.shelf`); see
//! [`StorefrontConfig`](shelf_storefront::config::StorefrontConfig) for the
//! other variables. Set `RUST_LOG` to see engine logs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use shelf_core::{AddressId, CategoryId, ProductId};
use shelf_storefront::catalog::{ProductFilter, SortBy};
use shelf_storefront::config::StorefrontConfig;
use shelf_storefront::error::Result;
use shelf_storefront::models::NewAddress;
use shelf_storefront::state::AppState;

mod commands;

const DEFAULT_LOG_FILTER: &str = "shelf=info,shelf_storefront=warn";

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Shelf storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as the demo account
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Show who is logged in
    Whoami,
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart
    Checkout {
        /// Ship to this address (default: the default address)
        #[arg(short, long)]
        address: Option<AddressId>,
    },
    /// Inspect and manage orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// View or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage the address book
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, optionally filtered
    List {
        #[arg(short, long)]
        category: Option<CategoryId>,

        #[arg(long)]
        min_price: Option<Decimal>,

        #[arg(long)]
        max_price: Option<Decimal>,

        /// `price-asc`, `price-desc`, `name`, or `rating`
        #[arg(short, long, default_value = "default")]
        sort: SortBy,
    },
    /// Search names and descriptions
    Search {
        query: String,

        #[arg(short, long, default_value = "default")]
        sort: SortBy,
    },
    /// Show one product
    Show { id: ProductId },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add units of a product
    Add {
        product: ProductId,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a line's quantity (0 removes it)
    Update { product: ProductId, quantity: u32 },
    /// Remove a line
    Remove { product: ProductId },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, newest first
    List,
    /// Show one order
    Show { id: String },
    /// Cancel a pending order
    Cancel { id: String },
    /// Return a delivered order
    Return { id: String },
    /// Mark a pending order as shipped
    Ship { id: String },
    /// Mark a shipped order as delivered
    Deliver { id: String },
    /// Force an order into any status
    SetStatus { id: String, status: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show name, email, and default address
    Show,
    /// Change the display name
    Rename { name: String },
}

#[derive(Subcommand)]
enum AddressAction {
    /// List addresses
    List,
    /// Add an address
    Add {
        #[arg(long)]
        city: String,

        #[arg(long)]
        street: String,

        #[arg(long)]
        district: Option<String>,

        #[arg(long)]
        building_number: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,
    },
    /// Make an address the default
    Default { id: AddressId },
    /// Delete an address
    Delete { id: AddressId },
}

fn main() {
    // Defaults to info level for command output if RUST_LOG is not set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time(),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        commands::notify(&e.notice());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::from_config(config)?;

    match cli.command {
        Commands::Login { email, password } => commands::account::login(&state, &email, &password)?,
        Commands::Logout => commands::account::logout(&state),
        Commands::Whoami => commands::account::whoami(&state),
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                min_price,
                max_price,
                sort,
            } => {
                let filter = ProductFilter {
                    search: None,
                    category,
                    min_price,
                    max_price,
                };
                commands::products::list(&state, &filter, sort);
            }
            ProductsAction::Search { query, sort } => {
                commands::products::search(&state, &query, sort);
            }
            ProductsAction::Show { id } => commands::products::show(&state, id)?,
            ProductsAction::Categories => commands::products::categories(&state),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { product, quantity } => {
                commands::cart::add(&state, product, quantity)?;
            }
            CartAction::Update { product, quantity } => {
                commands::cart::update(&state, product, quantity)?;
            }
            CartAction::Remove { product } => commands::cart::remove(&state, product),
            CartAction::Clear => commands::cart::clear(&state),
        },
        Commands::Checkout { address } => commands::cart::checkout(&state, address)?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&state),
            OrdersAction::Show { id } => commands::orders::show(&state, &id)?,
            OrdersAction::Cancel { id } => commands::orders::cancel(&state, &id)?,
            OrdersAction::Return { id } => commands::orders::return_order(&state, &id)?,
            OrdersAction::Ship { id } => commands::orders::ship(&state, &id)?,
            OrdersAction::Deliver { id } => commands::orders::deliver(&state, &id)?,
            OrdersAction::SetStatus { id, status } => {
                commands::orders::set_status(&state, &id, &status)?;
            }
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&state)?,
            ProfileAction::Rename { name } => commands::profile::rename(&state, &name)?,
        },
        Commands::Address { action } => match action {
            AddressAction::List => commands::profile::addresses(&state),
            AddressAction::Add {
                city,
                street,
                district,
                building_number,
                postal_code,
            } => {
                let address = NewAddress {
                    city,
                    street,
                    district,
                    building_number,
                    postal_code,
                };
                commands::profile::add_address(&state, address)?;
            }
            AddressAction::Default { id } => commands::profile::set_default(&state, id)?,
            AddressAction::Delete { id } => commands::profile::delete(&state, id)?,
        },
    }
    Ok(())
}
