extern crate dotenv;

mod api;
mod cli;

use api::{fuel::FuelPrice, trivia::model::PresentationQuestion, ApiService};
use clap::Parser;
use cli::{Cli, Command};
use dotenv::dotenv;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenv() {
        tracing::debug!(".env file missing, using env variables: {:?}", e);
    }

    let cli = Cli::parse();
    let service = ApiService::from_env()?;

    match cli.cmd {
        Command::Diesel => print_prices(&service.get_diesel_data().await, cli.json)?,
        Command::Gas => print_prices(&service.get_gas_data().await, cli.json)?,
        Command::Trivia(args) => {
            let query = args.query();
            let questions = match args.seed {
                Some(seed) => {
                    service
                        .get_trivia_with_rng(&query, &mut StdRng::seed_from_u64(seed))
                        .await
                }
                None => service.get_trivia(&query).await,
            };
            print_questions(&questions, cli.json)?;
        }
    }

    Ok(())
}

fn print_prices(prices: &[FuelPrice], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(prices)?);
        return Ok(());
    }

    for price in prices {
        let date = price
            .date
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_owned());
        let value = match price.price_value() {
            Some(value) => format!("{value:.2}"),
            None => price.price.clone().unwrap_or_else(|| "-".to_owned()),
        };
        println!("{date}\t{value}");
    }

    Ok(())
}

fn print_questions(questions: &[PresentationQuestion], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(questions)?);
        return Ok(());
    }

    for (i, question) in questions.iter().enumerate() {
        print!("{}. {}", i + 1, question);
    }

    Ok(())
}
