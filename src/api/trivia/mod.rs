pub mod model;
pub mod transform;

use super::{error::ApiError, json::from_slice_case_insensitive};
use model::{OpenTdbResponse, QuestionKind, RawTriviaQuestion};
use reqwest::Client;

pub const DEFAULT_TRIVIA_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuery {
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionKind>,
}

impl Default for TriviaQuery {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            category: None,
            difficulty: None,
            kind: None,
        }
    }
}

impl TriviaQuery {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("amount", self.amount.to_string())];

        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.as_str().to_owned()));
        }
        if let Some(kind) = &self.kind {
            params.push(("type", kind.as_str().to_owned()));
        }

        params
    }
}

#[derive(Clone)]
pub struct TriviaClient {
    client: Client,
    url: String,
}

impl TriviaClient {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    /// Fetches raw questions. A non-zero upstream code or an empty result set is an error.
    pub async fn questions(
        &self,
        query: &TriviaQuery,
    ) -> Result<Vec<RawTriviaQuestion>, ApiError> {
        let response = self
            .client
            .get(&self.url)
            .query(&query.to_params())
            .send()
            .await?;

        tracing::info!("GET {}: {}", response.url(), response.status());

        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }

        let body = response.bytes().await?;
        let dto: OpenTdbResponse = from_slice_case_insensitive(&body)?;

        if !dto.code().is_success() {
            return Err(ApiError::Upstream(dto.code()));
        }
        if dto.results.is_empty() {
            return Err(ApiError::EmptyResult);
        }

        Ok(dto.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    const BODY: &str = r#"{
        "response_code": 0,
        "results": [{
            "type": "boolean",
            "difficulty": "easy",
            "category": "General Knowledge",
            "question": "The Earth is round.",
            "correct_answer": "True",
            "incorrect_answers": ["False"]
        }]
    }"#;

    fn client(server: &mockito::Server) -> TriviaClient {
        TriviaClient::new(Client::new(), format!("{}/api.php", server.url()))
    }

    #[test]
    fn query_params() {
        let query = TriviaQuery {
            amount: 5,
            category: Some(9),
            difficulty: Some(Difficulty::Hard),
            kind: Some(QuestionKind::Boolean),
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("amount", "5".to_owned()),
                ("category", "9".to_owned()),
                ("difficulty", "hard".to_owned()),
                ("type", "boolean".to_owned()),
            ]
        );
        assert_eq!(
            TriviaQuery::default().to_params(),
            vec![("amount", "10".to_owned())]
        );
    }

    #[tokio::test]
    async fn fetch_questions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api.php")
            .match_query(Matcher::UrlEncoded("amount".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let questions = client(&server).questions(&TriviaQuery::new(1)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::Boolean);
        assert_eq!(questions[0].correct_answer, "True");
    }

    #[tokio::test]
    async fn upstream_error_code() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response_code": 1, "results": []}"#)
            .create_async()
            .await;

        let err = client(&server)
            .questions(&TriviaQuery::new(50))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Upstream(code) if code.0 == 1), "{err}");
    }

    #[tokio::test]
    async fn empty_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"response_code": 0, "results": []}"#)
            .create_async()
            .await;

        let err = client(&server)
            .questions(&TriviaQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::EmptyResult), "{err}");
    }

    #[tokio::test]
    async fn http_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server)
            .questions(&TriviaQuery::default())
            .await
            .unwrap_err();

        assert!(
            matches!(err, ApiError::UnexpectedStatus(status) if status.as_u16() == 500),
            "{err}"
        );
    }

    #[tokio::test]
    async fn malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = client(&server)
            .questions(&TriviaQuery::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::DeserializeError(_)), "{err}");
    }
}
