pub mod error;
pub mod fuel;
mod json;
pub mod trivia;

use self::{
    error::ApiError,
    fuel::{FuelClient, FuelPrice, DEFAULT_FUEL_URL},
    trivia::{
        model::{PresentationQuestion, RawTriviaQuestion},
        transform::transform,
        TriviaClient, TriviaQuery, DEFAULT_TRIVIA_URL,
    },
};
use rand::Rng;
use reqwest::Client;
use std::{env, time::Duration};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches fuel prices and trivia. Every failure is logged and replaced with an empty list.
#[derive(Clone)]
pub struct ApiService {
    fuel: FuelClient,
    trivia: TriviaClient,
}

impl ApiService {
    pub fn new(client: Client, fuel_url: String, trivia_url: String) -> Self {
        Self {
            fuel: FuelClient::new(client.clone(), fuel_url),
            trivia: TriviaClient::new(client, trivia_url),
        }
    }

    /// Reads `FUEL_API_URL`, `TRIVIA_API_URL` and `HTTP_TIMEOUT_SECS`,
    /// falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let fuel_url = env::var("FUEL_API_URL").unwrap_or_else(|_| DEFAULT_FUEL_URL.to_owned());
        let trivia_url =
            env::var("TRIVIA_API_URL").unwrap_or_else(|_| DEFAULT_TRIVIA_URL.to_owned());

        let timeout = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(secs) => secs.parse()?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self::new(client, fuel_url, trivia_url))
    }

    pub async fn get_diesel_data(&self) -> Vec<FuelPrice> {
        or_empty("diesel prices", self.fuel.diesel().await)
    }

    pub async fn get_gas_data(&self) -> Vec<FuelPrice> {
        or_empty("gas prices", self.fuel.gas().await)
    }

    pub async fn get_trivia(&self, query: &TriviaQuery) -> Vec<PresentationQuestion> {
        let questions = self.load_questions(query).await;
        transform(&questions, &mut rand::thread_rng())
    }

    /// Same as [`ApiService::get_trivia`] with an explicit generator,
    /// for reproducible option order.
    pub async fn get_trivia_with_rng<R: Rng + ?Sized>(
        &self,
        query: &TriviaQuery,
        rng: &mut R,
    ) -> Vec<PresentationQuestion> {
        let questions = self.load_questions(query).await;
        transform(&questions, rng)
    }

    async fn load_questions(&self, query: &TriviaQuery) -> Vec<RawTriviaQuestion> {
        let questions = or_empty("trivia", self.trivia.questions(query).await);
        tracing::debug!("Transforming {} trivia questions", questions.len());
        questions
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", what, e);
            Vec::new()
        }
    }
}
