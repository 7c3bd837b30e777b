use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, Utc};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use invclothing::{
    auth::AuthService,
    config::{self, AppConfig},
    filters::{SearchQuery, Selection},
    format::{format_currency, format_date, format_date_time},
    models::{PaymentMethod, Product, Sale},
    routes::{self, RouteOutcome},
    seed::SeedData,
    services::{
        activity::ActivityFilter, images::ImageFilter, inventory::InventoryFilter,
        movements::{MovementFilter, MovementService},
        orders::{OrderFilter, OrderService},
        sales::{Cart, ProductFilter},
        statistics::DateRange,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config().context("failed to load configuration")?;
    config::init_tracing(config.log_level(), config.log_json);

    let mut seed = SeedData::load(&config, Utc::now());
    debug!("Loaded seed data for {}", config.environment);

    match cli.command {
        Commands::Inventory(args) => handle_inventory(&mut seed, args, cli.json)?,
        Commands::Movements(args) => handle_movements(&mut seed, args, cli.json)?,
        Commands::Orders(args) => handle_orders(&mut seed, args, cli.json)?,
        Commands::Sales(args) => handle_sales(&mut seed, args, cli.json)?,
        Commands::Activity(args) => handle_activity(&seed, args, cli.json)?,
        Commands::Images(args) => handle_images(&seed, args, cli.json)?,
        Commands::Statistics(args) => handle_statistics(&seed, args, cli.json)?,
        Commands::Dashboard => handle_dashboard(&seed, cli.json)?,
        Commands::Route(args) => handle_route(&config, &seed, args, cli.json).await?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "invclothing",
    about = "Derived views over the clothing back-office demo data",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stock verification list
    Inventory(InventoryArgs),
    /// Surplus movements between stores
    Movements(MovementsArgs),
    /// Stock and surplus orders
    Orders(OrdersArgs),
    /// Point of sale: fill a cart and check out
    Sales(SalesArgs),
    /// User activity journal grouped by recency
    Activity(ActivityArgs),
    /// Product image gallery
    Images(ImagesArgs),
    /// Sales statistics summary
    Statistics(StatisticsArgs),
    /// Landing page overview
    Dashboard,
    /// Resolve a path through the authentication gate
    Route(RouteArgs),
}

#[derive(Args)]
struct InventoryArgs {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "")]
    search: String,
    /// Verify these item ids before listing
    #[arg(long = "verify")]
    verify: Vec<String>,
}

#[derive(Args)]
struct MovementsArgs {
    #[arg(long = "type", default_value = "all")]
    movement_type: String,
    #[arg(long, default_value = "all")]
    status: String,
    #[arg(long, default_value = "")]
    search: String,
    /// Complete these movement ids before listing
    #[arg(long = "complete")]
    complete: Vec<String>,
}

#[derive(Args)]
struct OrdersArgs {
    #[arg(long = "type", default_value = "stock")]
    order_type: String,
    #[arg(long, default_value = "")]
    search: String,
    /// Advance these order ids one status step before listing
    #[arg(long = "advance")]
    advance: Vec<String>,
}

#[derive(Args)]
struct SalesArgs {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "")]
    search: String,
    /// Add one unit of these product ids to the cart
    #[arg(long = "add")]
    add: Vec<String>,
    /// Check out the cart with this payment method
    #[arg(long, value_enum)]
    pay: Option<PaymentArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaymentArg {
    Card,
    Cash,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(value: PaymentArg) -> Self {
        match value {
            PaymentArg::Card => PaymentMethod::Card,
            PaymentArg::Cash => PaymentMethod::Cash,
        }
    }
}

#[derive(Args)]
struct ActivityArgs {
    #[arg(long, default_value = "all")]
    kind: String,
}

#[derive(Args)]
struct ImagesArgs {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Args)]
struct StatisticsArgs {
    #[arg(long, value_enum, default_value = "week")]
    range: RangeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum RangeArg {
    Week,
    Month,
    Year,
}

impl From<RangeArg> for DateRange {
    fn from(value: RangeArg) -> Self {
        match value {
            RangeArg::Week => DateRange::Week,
            RangeArg::Month => DateRange::Month,
            RangeArg::Year => DateRange::Year,
        }
    }
}

#[derive(Args)]
struct RouteArgs {
    path: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// Store whose menus gate the navigation
    #[arg(long)]
    store: Option<String>,
}

fn selection<T>(raw: &str, what: &str) -> Result<Selection<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Selection::from_str(raw).map_err(|e| anyhow!("invalid {} '{}': {}", what, raw, e))
}

fn handle_inventory(seed: &mut SeedData, args: InventoryArgs, json: bool) -> Result<()> {
    for id in &args.verify {
        let outcome = seed.inventory.verify(id);
        if !json {
            println!("verify {}: {:?}", id, outcome);
        }
    }

    let filter = InventoryFilter {
        category: selection(&args.category, "category")?,
        search: SearchQuery::new(&args.search),
    };
    let items = seed.inventory.filtered(&filter);

    if json {
        return print_json(&items);
    }
    for item in &items {
        println!(
            "- {} • {} • {}/{} • {} • {}",
            item.id,
            item.name,
            item.quantity,
            item.expected_quantity,
            format_currency(item.price),
            item.status().label()
        );
    }
    let summary = seed.inventory.summary();
    println!(
        "{} articles, {} en attente, {} écarts",
        summary.total, summary.pending, summary.discrepancies
    );
    Ok(())
}

fn handle_movements(seed: &mut SeedData, args: MovementsArgs, json: bool) -> Result<()> {
    for id in &args.complete {
        let outcome = seed.movements.complete(id);
        if !json {
            println!("complete {}: {:?}", id, outcome);
        }
    }

    let filter = MovementFilter {
        movement_type: selection(&args.movement_type, "movement type")?,
        status: selection(&args.status, "status")?,
        search: SearchQuery::new(&args.search),
    };
    let movements = seed.movements.filtered(&filter);

    if json {
        return print_json(&movements);
    }
    for movement in &movements {
        println!(
            "- {} • {} • {} {} • {} • {} • {}",
            movement.id,
            movement.name,
            movement.movement_type.label(),
            movement.quantity,
            movement.store,
            format_date(movement.date),
            movement.status.label()
        );
    }
    let summary = MovementService::summarize(&movements);
    println!(
        "reçus {} • donnés {} • valeur {}",
        summary.received_units,
        summary.given_units,
        format_currency(summary.value)
    );
    Ok(())
}

fn handle_orders(seed: &mut SeedData, args: OrdersArgs, json: bool) -> Result<()> {
    for id in &args.advance {
        let outcome = seed.orders.advance(id);
        if !json {
            println!("advance {}: {:?}", id, outcome);
        }
    }

    let filter = OrderFilter {
        order_type: selection(&args.order_type, "order type")?,
        search: SearchQuery::new(&args.search),
        ..OrderFilter::default()
    };
    let orders = seed.orders.filtered(&filter);

    if json {
        return print_json(&orders);
    }
    for order in &orders {
        println!(
            "- {} • {} • {} lignes • {} • {}",
            order.id,
            order.store,
            order.items.len(),
            format_currency(order.total),
            order.status
        );
    }
    println!("total {}", format_currency(OrderService::total_value(&orders)));
    Ok(())
}

#[derive(Serialize)]
struct SalesView<'a> {
    products: Vec<Product>,
    cart: &'a Cart,
    cart_total: Decimal,
    sale: Option<Sale>,
    history: &'a [Sale],
}

fn handle_sales(seed: &mut SeedData, args: SalesArgs, json: bool) -> Result<()> {
    for id in &args.add {
        let product = seed
            .sales
            .products()
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown product '{}'", id))?;
        seed.sales.add_to_cart(&product);
    }
    let cart_total = seed.sales.calculate_total();
    let sale = args
        .pay
        .and_then(|method| seed.sales.checkout(method.into()));

    let filter = ProductFilter {
        category: selection(&args.category, "category")?,
        search: SearchQuery::new(&args.search),
    };
    let view = SalesView {
        products: seed.sales.filtered_products(&filter),
        cart: seed.sales.cart(),
        cart_total,
        sale,
        history: seed.sales.history(),
    };

    if json {
        return print_json(&view);
    }
    for product in &view.products {
        println!(
            "- {} • {} • {} • stock {}",
            product.id,
            product.name,
            format_currency(product.price),
            product.stock
        );
    }
    println!("panier {}", format_currency(view.cart_total));
    for sale in view.history {
        println!(
            "  {} • {} • {} • {}",
            sale.id,
            format_date_time(sale.date),
            format_currency(sale.total),
            sale.payment_method
        );
    }
    Ok(())
}

fn handle_activity(seed: &SeedData, args: ActivityArgs, json: bool) -> Result<()> {
    let filter = ActivityFilter {
        kind: selection(&args.kind, "action kind")?,
        ..ActivityFilter::default()
    };
    let groups = seed.activity.grouped_at(&filter, &Local::now());

    if json {
        return print_json(&groups);
    }
    for group in &groups {
        println!("{}", group.label);
        for entry in &group.entries {
            println!("  [{}] {} • {}", entry.kind(), entry.user_name, entry.details);
        }
    }
    Ok(())
}

fn handle_images(seed: &SeedData, args: ImagesArgs, json: bool) -> Result<()> {
    let filter = ImageFilter {
        category: selection(&args.category, "category")?,
        search: SearchQuery::new(&args.search),
    };
    let images = seed.images.filtered(&filter);

    if json {
        return print_json(&images);
    }
    for image in &images {
        println!(
            "- {} • {} • {}",
            image.name,
            image.product_name,
            format_date(image.upload_date)
        );
    }
    Ok(())
}

fn handle_statistics(seed: &SeedData, args: StatisticsArgs, json: bool) -> Result<()> {
    let range = DateRange::from(args.range);
    let summary = seed.statistics.summary(range);

    if json {
        return print_json(&summary);
    }
    println!("{}", range.label());
    println!("chiffre d'affaires {}", format_currency(summary.total_revenue));
    println!("commandes {}", summary.total_orders);
    println!("articles {}", summary.total_items);
    println!("panier moyen {}", format_currency(summary.average_order_value));
    Ok(())
}

fn handle_dashboard(seed: &SeedData, json: bool) -> Result<()> {
    let genres = seed.genres.list();
    let overview = seed.dashboard.overview_at(
        Utc::now(),
        |id| {
            genres
                .iter()
                .find(|genre| genre.id == id)
                .map(|genre| genre.name.clone())
        },
        seed.activity.recent(4),
    );

    if json {
        return print_json(&overview);
    }
    let inventory = &overview.inventory;
    println!(
        "articles {} • stock bas {} • ruptures {} • nouveaux {}",
        inventory.total_items,
        inventory.low_stock,
        inventory.out_of_stock,
        inventory.recently_added
    );
    let progress = &overview.progress;
    println!(
        "catalogage {} / {} ({}%)",
        progress.cataloged, progress.total, progress.percent_complete
    );
    for category in &overview.categories {
        println!("  {} {}", category.name, category.value);
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteView {
    outcome: RouteOutcome,
    navigation: Vec<routes::Page>,
}

async fn handle_route(
    config: &AppConfig,
    seed: &SeedData,
    args: RouteArgs,
    json: bool,
) -> Result<()> {
    let auth = AuthService::new(config.auth_delay());
    if let (Some(email), Some(password)) = (&args.email, &args.password) {
        if let Err(err) = auth.login(email, password).await {
            eprintln!("{}", err.user_message());
        }
    }

    let state = auth.snapshot().await;
    let store = match &args.store {
        Some(id) => Some(
            seed.stores
                .get(id)
                .ok_or_else(|| anyhow!("unknown store '{}'", id))?,
        ),
        None => None,
    };
    let view = RouteView {
        outcome: routes::resolve(&args.path, &state),
        navigation: routes::navigation(store),
    };

    if json {
        return print_json(&view);
    }
    match &view.outcome {
        RouteOutcome::Render { page } => println!("render {} ({})", page, page.title()),
        RouteOutcome::Pending => println!("pending"),
        RouteOutcome::RedirectToLogin { from } => {
            println!("redirect {} (from {})", routes::LOGIN_PATH, from)
        }
        RouteOutcome::NotFound => println!("not found"),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
