use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use blight_kit::api::ApiClient;
use blight_kit::catalog::{self, SearchFilter};
use blight_kit::config::Config;
use blight_kit::fetch::FetchReport;
use blight_kit::{challenges, fetch, output, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;
const EXIT_DATA: i32 = 6;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a run score, e.g. `score 5L 9R 3U 6C 2X 145% 24-26`
    Score {
        /// Card tallies (5L 9R 3U 6C 2M 2X), malignancy (145%) and target deck size (24-26)
        query: Vec<String>,
    },
    /// Search cards by keyword
    Cards {
        /// Search terms; separate alternatives with commas or "or"
        terms: Vec<String>,

        /// Fetch the latest card data first
        #[arg(short, long)]
        fetch: bool,

        /// Compact output grouped by color
        #[arg(short, long)]
        short: bool,

        /// Expansions to exclude as digits, e.g. 567 for Infinitum, Catalyst and Eclypse
        #[arg(short = 'e', long, value_name = "DIGITS")]
        exclude_expansions: Option<String>,

        /// Rarities to exclude as digits, e.g. 01 for Common and Uncommon
        #[arg(short = 'r', long, value_name = "DIGITS")]
        exclude_rarities: Option<String>,
    },
    /// Search talents by keyword (all talents when no terms are given)
    Talents {
        /// Search terms; separate alternatives with commas or "or"
        terms: Vec<String>,

        /// Fetch the latest talent data first
        #[arg(short, long)]
        fetch: bool,
    },
    /// Print the number of cached cards
    Count,
    /// Chart cumulative challenge wins per player as an HTML page
    Challenges {
        /// Fetch the latest challenge results first
        #[arg(short, long)]
        fetch: bool,

        /// Where to write the chart
        #[arg(short, long, default_value = challenges::DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "blight-kit")]
#[command(about = "Card search, score calculator and challenge charts for blightbane", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/blight-kit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory for cached JSON data (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn exit_with(code: i32, message: impl Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "blight_kit=debug" } else { "blight_kit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_score_usage() {
    eprintln!("Please provide input in the format:");
    eprintln!("  blight-kit score 5L 9R 3U 6C 2X 145% 24-26");
    eprintln!();
    eprintln!("Tiers: L Legendary, R Rare, U Uncommon, C Common, M Monster, X unscored");
}

fn print_cards_usage() {
    eprintln!("🤨 Please provide search terms!");
    eprintln!("Usage:");
    eprintln!("  blight-kit cards [search terms] [options]");
    eprintln!();
    eprintln!("Expansion numbers:");
    for (id, name) in catalog::labels::EXPANSIONS.iter().filter(|(id, _)| *id > 0) {
        eprintln!("  {}: {}", id, name);
    }
    eprintln!();
    eprintln!("Rarity numbers:");
    for (id, name, _) in catalog::labels::RARITIES {
        eprintln!("  {}: {}", id, name);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  blight-kit cards fire                  # All expansions except conjured");
    eprintln!("  blight-kit cards legendary -e 56       # Exclude Infinitum & Catalyst");
    eprintln!("  blight-kit cards burn -r 01            # Exclude Common and Uncommon");
    eprintln!("  blight-kit cards dragon -s -r 23       # Exclude Rare and Legendary, short format");
}

/// Fetched count and cache path on stdout, skipped pages on stderr.
fn print_fetch_report<T>(kind: &str, report: &FetchReport<T>, path: &Path) {
    println!(
        "Fetched data for {} {}",
        report.records.len(),
        kind.to_lowercase()
    );
    println!("{} data saved to {} 💾", kind, path.display());
    if !report.failed_pages.is_empty() {
        eprintln!("{} pages failed and were skipped:", report.failed_pages.len());
        for page in &report.failed_pages {
            eprintln!("  - {}", page);
        }
    }
}

fn api_client(config: &Config) -> ApiClient {
    match ApiClient::from_config(config) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Failed to create API client: {:#}", e)),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match blight_kit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    if let Err(errors) = blight_kit::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Score { query } => {
            if query.is_empty() {
                print_score_usage();
                std::process::exit(EXIT_INPUT);
            }

            let query = query.join(" ");
            let table = config.score_table();
            match scoring::calculate_score(&query, &table) {
                Ok(result) => {
                    if cli.verbose {
                        eprintln!("{}", output::format_score_breakdown(&query, &result));
                    }
                    println!("{}", result.score);
                }
                Err(e) => exit_with(EXIT_INPUT, format!("Error: {}", e)),
            }
        }
        Commands::Cards {
            terms,
            fetch,
            short,
            exclude_expansions,
            exclude_rarities,
        } => {
            if fetch {
                let client = api_client(&config);
                println!("\nFetching cards...");
                let report = match fetch::fetch_cards(&client).await {
                    Ok(r) => r,
                    Err(e) => exit_with(EXIT_NETWORK, format!("Fetch failed: {:#}", e)),
                };
                if let Err(e) = catalog::save_cards(&data_dir, &report.records) {
                    exit_with(EXIT_DATA, format!("{:#}", e));
                }
                print_fetch_report("Cards", &report, &catalog::store::cards_path(&data_dir));
                if terms.is_empty() {
                    std::process::exit(EXIT_SUCCESS);
                }
            }

            if terms.is_empty() {
                print_cards_usage();
                std::process::exit(EXIT_INPUT);
            }

            let defaults = config.card_search();
            let mut excluded_expansions = defaults.excluded_expansions.clone();
            if let Some(ref digits) = exclude_expansions {
                for e in catalog::parse_digit_list(digits) {
                    if !excluded_expansions.contains(&e) {
                        excluded_expansions.push(e);
                    }
                }
            }
            let excluded_rarities = exclude_rarities
                .as_deref()
                .map(catalog::parse_digit_list)
                .unwrap_or_default();

            let filter = SearchFilter {
                keywords: catalog::parse_keywords(&terms),
                excluded_categories: defaults.excluded_categories,
                excluded_expansions,
                excluded_rarities,
                excluded_names: defaults.excluded_names,
            };

            let cards = match catalog::load_cards(&data_dir) {
                Ok(c) => c,
                Err(e) => exit_with(EXIT_DATA, format!("{:#}", e)),
            };
            let results = catalog::search_cards(&cards, &filter);
            tracing::debug!(cached = cards.len(), matched = results.len(), "searched cards");

            println!(
                "{}",
                output::format_card_summary(
                    results.len(),
                    &filter.keywords,
                    &filter.excluded_expansions,
                    &filter.excluded_rarities,
                    use_colors
                )
            );
            if short {
                println!("{}", output::format_card_list_short(&results));
            } else {
                println!("{}", output::format_card_list(&results, use_colors, cli.verbose));
            }
        }
        Commands::Talents { terms, fetch } => {
            if fetch {
                let client = api_client(&config);
                println!("\nFetching talents...");
                let report = match fetch::fetch_talents(&client).await {
                    Ok(r) => r,
                    Err(e) => exit_with(EXIT_NETWORK, format!("Fetch failed: {:#}", e)),
                };
                if let Err(e) = catalog::save_talents(&data_dir, &report.records) {
                    exit_with(EXIT_DATA, format!("{:#}", e));
                }
                print_fetch_report("Talents", &report, &catalog::store::talents_path(&data_dir));
            }

            let filter = SearchFilter {
                keywords: catalog::parse_keywords(&terms),
                ..SearchFilter::default()
            };

            let talents = match catalog::load_talents(&data_dir) {
                Ok(t) => t,
                Err(e) => exit_with(EXIT_DATA, format!("{:#}", e)),
            };
            let results = catalog::search_talents(&talents, &filter);

            println!(
                "{}",
                output::format_talent_summary(results.len(), &filter.keywords, use_colors)
            );
            println!("{}", output::format_talent_list(&results, use_colors, cli.verbose));
        }
        Commands::Count => {
            let cards = match catalog::load_cards(&data_dir) {
                Ok(c) => c,
                Err(e) => exit_with(EXIT_DATA, format!("{:#}", e)),
            };
            println!("{}", output::format_card_count(cards.len(), use_colors));
        }
        Commands::Challenges { fetch, output } => {
            let stats_path = catalog::store::challenge_stats_path(&data_dir);

            if fetch {
                let client = api_client(&config);
                println!("\nFetching stats...");
                let stats = match fetch::fetch_challenge_stats(&client).await {
                    Ok(s) => s,
                    Err(e) => exit_with(EXIT_NETWORK, format!("Error fetching data: {:#}", e)),
                };
                if let Err(e) = catalog::store::save_json(&stats_path, &stats) {
                    exit_with(EXIT_DATA, format!("{:#}", e));
                }
                println!("Stats fetched! 💾");
            }

            let stats: challenges::ChallengeStats = match catalog::store::load_json(&stats_path) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_DATA, format!("{:#}", e)),
            };

            println!("\nGenerating chart...");
            let html = match challenges::render_html(challenges::TEMPLATE, &stats, chrono::Utc::now()) {
                Ok(h) => h,
                Err(e) => exit_with(EXIT_DATA, format!("{:#}", e)),
            };
            if let Err(e) = challenges::write_report(&output, &html) {
                exit_with(EXIT_DATA, format!("{:#}", e));
            }
            println!("Chart generated! 📊 {}", output.display());
        }
    }

    tracing::debug!("Finished in {:?}", start_time.elapsed());
    std::process::exit(EXIT_SUCCESS);
}
