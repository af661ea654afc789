/// Pool score table tool
///
/// Runs the fetch → score → rank pipeline once and prints one view as a table
/// (or as the JSON the API would return).
///
/// Usage: cargo run --bin tool_pool_scores -- --view best-stables [--config data/config.toml] [--json]
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use poolscore::{
    apis::ApiManager,
    config::{load_config_from_path, CONFIG_FILE_PATH},
    logger::{self, LogLevel, LogTag, LoggerConfig},
    pools::{PoolService, ScoreView, ScoredPool, ViewResult},
};

#[derive(Parser, Debug)]
#[clap(name = "tool_pool_scores")]
#[clap(about = "Fetch, score and rank Aptos DEX pools once")]
struct Args {
    /// View to print: top10, top-named, all, best-stables, best-volatile, high-apr, low-risk
    #[clap(long, default_value = "top-named")]
    view: String,

    /// Configuration file
    #[clap(long, default_value = CONFIG_FILE_PATH)]
    config: String,

    /// Print the JSON response instead of a table
    #[clap(long)]
    json: bool,

    /// Debug output for every module
    #[clap(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logger::set_logger_config(LoggerConfig {
        min_level: if args.debug {
            LogLevel::Debug
        } else {
            LogLevel::Warning
        },
        debug_all: args.debug,
        ..LoggerConfig::default()
    });

    let view = ScoreView::from_slug(&args.view).ok_or_else(|| {
        anyhow!(
            "unknown view '{}' (expected one of: {})",
            args.view,
            ScoreView::ALL_VIEWS
                .iter()
                .map(|v| v.slug())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let config = load_config_from_path(&args.config)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("loading {}", args.config))?;
    let apis = ApiManager::from_config(&config.sources).map_err(|e| anyhow!(e))?;
    let service = PoolService::from_api_manager(&apis, &config.sources);

    logger::debug(LogTag::System, &format!("Running view {}", view.slug()));
    let result = service
        .score_view(view)
        .await
        .map_err(|e| anyhow!("{}", e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_view(view, &result);
    Ok(())
}

fn print_view(view: ScoreView, result: &ViewResult) {
    let heading = match result {
        ViewResult::All(all) => format!(
            "{} ({} unique pools, showing top {})",
            view.slug(),
            all.count,
            all.top.len()
        ),
        ViewResult::Pools(pools) => format!("{} ({} pools)", view.slug(), pools.len()),
    };
    println!("{}", heading.bold());

    if result.pools().is_empty() {
        println!("{}", "No pools matched".yellow());
        return;
    }

    println!("{}", build_table(result.pools()));
}

fn build_table(pools: &[ScoredPool]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        ["#", "Pool", "DEX", "TVL ($)", "Volume 24h ($)", "24h %", "APR %", "Score"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    for (i, scored) in pools.iter().enumerate() {
        let pool = &scored.pool;
        let change = if pool.volatility >= 0.0 {
            Cell::new(format!("+{:.2}", pool.volatility)).fg(Color::Green)
        } else {
            Cell::new(format!("{:.2}", pool.volatility)).fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&pool.name),
            Cell::new(pool.dex.as_str()),
            Cell::new(format!("{:.0}", pool.tvl)),
            Cell::new(format!("{:.0}", pool.volume24h)),
            change,
            Cell::new(format!("{:.2}", pool.apr)),
            Cell::new(format!("{:.4}", scored.score)),
        ]);
    }

    table
}
