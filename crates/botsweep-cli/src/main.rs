mod config;

use botsweep_batch::{score_accounts, Roster};
use botsweep_client::BotometerClient;
use botsweep_core::{band_for_display, Language, ScoreValue};
use clap::{Parser, Subcommand};
use config::SweepConfig;

#[derive(Parser)]
#[command(name = "botsweep")]
#[command(about = "Batch bot-likelihood scoring for social accounts")]
struct Cli {
    #[arg(
        short = 'f',
        long,
        default_value = "botsweep.toml",
        help = "Path to config file"
    )]
    config: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Check {
        #[arg(help = "Screen name to look up")]
        screen_name: String,
    },
    Run {
        #[arg(help = "Input CSV with one row per account")]
        input: String,
        #[arg(short, long, help = "Path for the augmented output CSV")]
        output: String,
        #[arg(long, help = "Screen-name column, overriding the config")]
        column: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botsweep=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match SweepConfig::from_file(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: failed to load config {}: {}", cli.config, e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Check { screen_name } => run_check(&config, screen_name).await,
        Commands::Run {
            input,
            output,
            column,
        } => run_batch(&config, input, output, column).await,
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn build_client(config: &SweepConfig) -> Result<BotometerClient, Box<dyn std::error::Error>> {
    let mut client = BotometerClient::new(config.credentials())?
        .with_wait_on_ratelimit(config.api.wait_on_ratelimit);
    if let Some(api_url) = &config.api.api_url {
        url::Url::parse(api_url)?;
        client = client.with_api_url(api_url.clone());
    }
    Ok(client)
}

async fn run_check(
    config: &SweepConfig,
    screen_name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(config)?;

    println!("looking up @{}...", screen_name);
    let report = client.check_account(&screen_name).await?;

    println!("\n--- bot scores for @{} ---", screen_name);
    println!(
        "display overall (english):   {:.1} / 5",
        report.display_scores.english.overall
    );
    println!(
        "display overall (universal): {:.1} / 5",
        report.display_scores.universal.overall
    );
    println!(
        "raw overall (english):       {:.2}",
        report.raw_scores.english.overall
    );
    println!(
        "cap (english):               {:.0}%",
        report.cap.english * 100.0
    );

    let english = &report.display_scores.english;
    println!("\nenglish breakdown:");
    println!("  astroturf:     {:.1}", english.astroturf);
    println!("  fake follower: {:.1}", english.fake_follower);
    println!("  financial:     {:.1}", english.financial);
    println!("  other:         {:.1}", english.other);
    println!("  self declared: {:.1}", english.self_declared);
    println!("  spammer:       {:.1}", english.spammer);

    println!("\nclassification: {:?}", band_for_display(english.overall));

    Ok(())
}

async fn run_batch(
    config: &SweepConfig,
    input: String,
    output: String,
    column: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let language: Language = config.batch.language.parse()?;
    let column = column.unwrap_or_else(|| config.batch.column.clone());

    let mut roster = Roster::from_csv_path(&input)?;
    let screen_names = roster.column(&column)?;

    println!("scoring {} accounts from {}...", screen_names.len(), input);

    let client = build_client(config)?;
    let scores = score_accounts(&client, language, &screen_names).await?;

    // the output file exists only once every row has a value
    let cells: Vec<String> = scores.iter().map(|s| s.as_cell()).collect();
    roster.append_column(&config.batch.score_column, &cells)?;
    roster.write_csv_path(&output)?;

    let unavailable = scores
        .iter()
        .filter(|s| matches!(s, ScoreValue::Unavailable))
        .count();

    println!("\n--- run summary ---");
    println!("accounts scored: {}", scores.len() - unavailable);
    println!("unavailable: {}", unavailable);
    println!("output written to {}", output);

    Ok(())
}
