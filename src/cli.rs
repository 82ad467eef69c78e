use crate::api::trivia::{model::QuestionKind, Difficulty, TriviaQuery, DEFAULT_AMOUNT};
use clap::{Args, Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Fuel prices and trivia questions from public feeds")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Clone, Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Diesel price history
    Diesel,
    /// 95 octane gas price history
    Gas,
    /// Random trivia questions
    Trivia(TriviaArgs),
}

#[derive(Clone, Debug, Args, PartialEq)]
pub struct TriviaArgs {
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_AMOUNT,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub amount: u32,
    /// OpenTDB category id
    #[arg(long)]
    pub category: Option<u32>,
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,
    #[arg(long, value_parser = ["multiple", "boolean"])]
    pub kind: Option<String>,
    /// Seed for the answer shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

impl TriviaArgs {
    pub fn query(&self) -> TriviaQuery {
        TriviaQuery {
            amount: self.amount,
            category: self.category,
            difficulty: self.difficulty,
            kind: self.kind.as_deref().map(QuestionKind::from),
        }
    }
}
