use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{CafeClient, CartContainer, CartPanel, SubmissionOutcome};
use shared::{
    domain::{Category, MenuItemId},
    protocol::{ContactFormData, NewsletterFormData},
};
use storage::{normalize_database_url, KeyValueStore, SqliteStore};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Aroma Café storefront")]
struct Cli {
    /// Local store holding the cart between runs.
    #[arg(
        long,
        env = "STOREFRONT_DATABASE_URL",
        default_value = "sqlite://./data/storefront.db"
    )]
    database_url: String,
    #[arg(
        long,
        env = "STOREFRONT_SERVER_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Menu {
        #[arg(long, default_value_t = Category::Coffee)]
        category: Category,
    },
    Specials,
    Testimonials,
    #[command(subcommand)]
    Cart(CartCommand),
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    Newsletter {
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand, Debug)]
enum CartCommand {
    Show,
    Add { id: i64 },
    Remove { id: i64 },
    Set { id: i64, quantity: i64 },
    Clear,
    Checkout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Menu { category } => {
            print!(
                "{}",
                render::menu(category.display_name(), catalog::items_in(category))
            );
        }
        Command::Specials => {
            print!("{}", render::menu("Today's Specials", catalog::specials()));
        }
        Command::Testimonials => {
            print!("{}", render::testimonials(catalog::testimonials()));
        }
        Command::Cart(command) => run_cart(&cli.database_url, command).await?,
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let client = CafeClient::new(&cli.server_url)?;
            let form = ContactFormData {
                name,
                email,
                subject,
                message,
            };
            report(client.submit_contact(&form).await?)?;
        }
        Command::Newsletter { email } => {
            let client = CafeClient::new(&cli.server_url)?;
            report(
                client
                    .subscribe_newsletter(&NewsletterFormData { email })
                    .await?,
            )?;
        }
    }

    Ok(())
}

async fn run_cart(database_url: &str, command: CartCommand) -> Result<()> {
    let database_url = normalize_database_url(database_url);
    let store: Arc<dyn KeyValueStore> = Arc::new(
        SqliteStore::open(&database_url)
            .await
            .with_context(|| format!("failed to open cart store at {database_url}"))?,
    );
    let mut container = CartContainer::restore(store).await;
    let mut panel = CartPanel::default();

    let cart = match command {
        CartCommand::Show => container.cart(),
        CartCommand::Add { id } => {
            let Some(item) = catalog::find(MenuItemId(id)) else {
                bail!("no menu item with id {id}");
            };
            let cart = container.add_item(item).await?;
            panel.open();
            println!("Added {} to your cart.", item.name);
            cart
        }
        CartCommand::Remove { id } => container.remove_item(MenuItemId(id)).await?,
        CartCommand::Set { id, quantity } => {
            container.set_quantity(MenuItemId(id), quantity).await?
        }
        CartCommand::Clear => container.clear().await?,
        CartCommand::Checkout => {
            println!("{}", render::CHECKOUT_NOTICE);
            return Ok(());
        }
    };

    print!("{}", render::cart(cart));
    if panel.is_open() {
        println!("(cart panel opened)");
    }
    debug!(total_items = cart.total_items(), "cart command finished");
    Ok(())
}

fn report(outcome: SubmissionOutcome) -> Result<()> {
    match outcome {
        SubmissionOutcome::Accepted { message, .. } => {
            println!("{message}");
            Ok(())
        }
        SubmissionOutcome::Rejected { message, errors } => {
            eprint!("{}", render::violations(&message, &errors));
            bail!("submission rejected")
        }
    }
}
