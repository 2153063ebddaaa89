//! Madrona CLI - terminal driver for the storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! mm-cli products list --keyword phone --page 1
//! mm-cli products top
//! mm-cli products show <product-id>
//!
//! # Build a cart and check out
//! mm-cli cart add <product-id> --qty 2
//! mm-cli cart ship --address "1 Main St" --city Springfield \
//!     --postal-code 12345 --country USA
//! mm-cli cart pay-method PayPal
//! mm-cli orders checkout
//!
//! # Session
//! mm-cli user login -e jo@example.com -p secret
//! mm-cli user logout
//! ```
//!
//! # Commands
//!
//! - `products` - Browse and manage the catalog
//! - `cart` - Manage cart lines, shipping address, and payment method
//! - `user` - Session and user management
//! - `orders` - Checkout and order management

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use madrona_storefront::{ClientConfig, Store};

mod commands;

#[derive(Parser)]
#[command(name = "mm-cli")]
#[command(author, version, about = "Madrona storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Session and user management
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Checkout and order management
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List a catalog page
    List {
        /// Search keyword
        #[arg(short, long, default_value = "")]
        keyword: String,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show the top-rated products
    Top,
    /// Show one product with its reviews
    Show {
        /// Product ID
        id: String,
    },
    /// Create a placeholder product (admin)
    Create,
    /// Update a product's fields (admin)
    Update {
        /// Product ID
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        description: String,

        #[arg(long)]
        image: String,

        #[arg(long)]
        brand: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        count_in_stock: u32,
    },
    /// Delete a product (admin)
    Delete {
        /// Product ID
        id: String,
    },
    /// Append a review to a product
    Review {
        /// Product ID
        id: String,

        /// Rating, 1-5
        #[arg(short, long)]
        rating: u8,

        /// Comment text
        #[arg(short, long)]
        comment: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart (replaces an existing line wholesale)
    Add {
        /// Product ID
        product_id: String,

        /// Quantity
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Show the cart and its checkout totals
    Show,
    /// Save the shipping address
    Ship {
        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        postal_code: String,

        #[arg(long)]
        country: String,
    },
    /// Save the payment method
    PayMethod {
        /// Method name (e.g. PayPal)
        method: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Log in
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Show your profile
    Profile,
    /// Update your profile
    UpdateProfile {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// New password; omit to keep the current one
        #[arg(long)]
        password: Option<String>,
    },
    /// List all users (admin)
    List,
    /// Show one user (admin)
    Show {
        /// User ID
        id: String,
    },
    /// Update a user (admin)
    Update {
        /// User ID
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Grant the admin flag
        #[arg(long, default_value_t = false)]
        admin: bool,
    },
    /// Delete a user (admin)
    Delete {
        /// User ID
        id: String,
    },
    /// Log out and clear the persisted session
    Logout,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Check out the current cart
    Checkout,
    /// Show one order
    Show {
        /// Order ID
        id: String,
    },
    /// Record a payment receipt against an order
    Pay {
        /// Order ID
        id: String,

        /// Provider transaction ID
        #[arg(long)]
        transaction: String,

        /// Provider status
        #[arg(long, default_value = "COMPLETED")]
        status: String,

        /// Payer email address
        #[arg(long)]
        payer_email: String,
    },
    /// Mark an order delivered (admin)
    Deliver {
        /// Order ID
        id: String,
    },
    /// List your own orders
    Mine,
    /// List all orders (admin)
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let store = Store::from_config(&config)?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List { keyword, page } => {
                commands::products::list(&store, &keyword, page).await?;
            }
            ProductAction::Top => commands::products::top(&store).await?,
            ProductAction::Show { id } => commands::products::show(&store, &id).await?,
            ProductAction::Create => commands::products::create(&store).await?,
            ProductAction::Update {
                id,
                name,
                price,
                description,
                image,
                brand,
                category,
                count_in_stock,
            } => {
                let update = madrona_core::ProductUpdate {
                    name,
                    price,
                    description,
                    image,
                    brand,
                    category,
                    count_in_stock,
                };
                commands::products::update(&store, &id, update).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&store, &id).await?,
            ProductAction::Review { id, rating, comment } => {
                commands::products::review(&store, &id, rating, comment).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Add { product_id, qty } => {
                commands::cart::add(&store, &product_id, qty).await?;
            }
            CartAction::Remove { product_id } => {
                commands::cart::remove(&store, &product_id).await?;
            }
            CartAction::Show => commands::cart::show(&store).await?,
            CartAction::Ship {
                address,
                city,
                postal_code,
                country,
            } => {
                commands::cart::ship(&store, address, city, postal_code, country).await?;
            }
            CartAction::PayMethod { method } => {
                commands::cart::pay_method(&store, &method).await?;
            }
        },
        Commands::User { action } => match action {
            UserAction::Login { email, password } => {
                commands::user::login(&store, &email, &password).await?;
            }
            UserAction::Register {
                name,
                email,
                password,
            } => commands::user::register(&store, &name, &email, &password).await?,
            UserAction::Profile => commands::user::profile(&store).await?,
            UserAction::UpdateProfile {
                name,
                email,
                password,
            } => commands::user::update_profile(&store, name, &email, password).await?,
            UserAction::List => commands::user::list(&store).await?,
            UserAction::Show { id } => commands::user::show(&store, &id).await?,
            UserAction::Update {
                id,
                name,
                email,
                admin,
            } => commands::user::update(&store, &id, name, &email, admin).await?,
            UserAction::Delete { id } => commands::user::delete(&store, &id).await?,
            UserAction::Logout => commands::user::logout(&store).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::Checkout => commands::orders::checkout(&store).await?,
            OrderAction::Show { id } => commands::orders::show(&store, &id).await?,
            OrderAction::Pay {
                id,
                transaction,
                status,
                payer_email,
            } => commands::orders::pay(&store, &id, transaction, status, payer_email).await?,
            OrderAction::Deliver { id } => commands::orders::deliver(&store, &id).await?,
            OrderAction::Mine => commands::orders::mine(&store).await?,
            OrderAction::List => commands::orders::list(&store).await?,
        },
    }
    Ok(())
}
