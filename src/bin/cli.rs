use clap::{Parser, Subcommand};
use smart_filter_engine::routing::RemoteClassifier;
use smart_filter_engine::{
    AccommodationCriteria, Category, Coordinator, CoordinatorReply, DataSource, EngineConfig,
    FilterCriteria, FilterEngine, ItemCriteria, RankedResult, TransportCriteria,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "smart-filter-cli")]
#[command(about = "Smart Filter rental search CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listing dataset (.json or .db); the built-in mock data when omitted
    #[arg(short, long)]
    data: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search transport listings
    Transport {
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        vehicle_type: Option<String>,
        #[arg(long)]
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        year: Option<i32>,
    },

    /// Search accommodation listings
    Accommodation {
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        property_type: Option<String>,
        /// Minimum number of guests
        #[arg(long, allow_negative_numbers = true)]
        num_guests: Option<i64>,
    },

    /// Search item listings
    Item {
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        item_category: Option<String>,
    },

    /// Print every listing of a category
    Listings {
        /// transport, accommodation or item
        category: String,
    },

    /// Route a free-form message through the configured intent classifier
    Route {
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(path) = &cli.data {
        config.data = DataSource::from_path(path);
    }

    let engine = Arc::new(FilterEngine::from_config(&config).await?);

    let criteria = match cli.command {
        Commands::Transport { location, max_price, vehicle_type, make, model, year } => {
            FilterCriteria::Transport(TransportCriteria {
                location,
                max_price,
                vehicle_type,
                make,
                model,
                year,
            })
        }

        Commands::Accommodation { location, max_price, property_type, num_guests } => {
            FilterCriteria::Accommodation(AccommodationCriteria {
                location,
                max_price,
                property_type,
                num_guests,
            })
        }

        Commands::Item { location, max_price, item_category } => {
            FilterCriteria::Item(ItemCriteria {
                location,
                max_price,
                item_category,
            })
        }

        Commands::Listings { category } => {
            let category: Category = category.parse()?;
            let listings = engine.listings(category).await?;

            println!("📋 {} {} listing(s):", listings.len(), category);
            for listing in listings {
                println!(
                    "   {} - {:.2} - rating {:.1}",
                    listing.display_name(),
                    listing.base_price,
                    listing.average_rating
                );
            }
            return Ok(());
        }

        Commands::Route { message } => {
            let url = config
                .classifier_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no classifier_url configured (set CLASSIFIER_URL)"))?;
            let classifier = RemoteClassifier::new(url).await?;
            let coordinator = Coordinator::new(engine.clone(), Arc::new(classifier));

            match coordinator.handle(&message).await? {
                CoordinatorReply::Prompt { message } => println!("💬 {}", message),
                CoordinatorReply::Results { response } => print_result(&response.result),
            }
            return Ok(());
        }
    };

    println!("🔍 Searching {} listings...", criteria.category());
    let response = engine.search(&criteria).await?;
    print_result(&response.result);
    println!("   Latency: {:.2}ms", response.latency_ms);

    Ok(())
}

fn print_result(result: &RankedResult) {
    match result {
        RankedResult::Match(best) => {
            println!("\n✅ Found: {}", best.title);
            println!("   Location: {}", best.location);
            println!("   Price: {:.2}", best.base_price);
            println!("   Reason: {}", best.reason);
        }
        RankedResult::NoMatch { error, suggestions } => {
            println!("\n❌ {}", error);
            if !suggestions.is_empty() {
                println!("\n📋 Suggestions:");
                for (i, s) in suggestions.iter().enumerate() {
                    println!("   {}. {}", i + 1, s.display());
                }
            }
        }
    }
}
