use crate::api::{error::ResponseCode, json::null_as_default};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope returned by OpenTDB.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenTdbResponse {
    #[serde(default)]
    pub response_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RawTriviaQuestion>,
}

impl OpenTdbResponse {
    pub fn code(&self) -> ResponseCode {
        ResponseCode(self.response_code)
    }
}

/// A question as delivered upstream. Text fields are still HTML-entity encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTriviaQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: QuestionKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub incorrect_answers: Vec<String>,
}

/// Question type. Values other than `multiple` and `boolean` are kept as `Other`
/// and handled like multiple choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum QuestionKind {
    #[default]
    Multiple,
    Boolean,
    Other(String),
}

impl QuestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Multiple => "multiple",
            QuestionKind::Boolean => "boolean",
            QuestionKind::Other(kind) => kind,
        }
    }
}

impl From<String> for QuestionKind {
    fn from(kind: String) -> Self {
        if kind.eq_ignore_ascii_case("multiple") {
            QuestionKind::Multiple
        } else if kind.eq_ignore_ascii_case("boolean") {
            QuestionKind::Boolean
        } else {
            QuestionKind::Other(kind)
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(kind: &str) -> Self {
        Self::from(kind.to_owned())
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

/// A decoded question ready for display. `options` are in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationQuestion {
    pub category: String,
    pub difficulty: String,
    pub question: String,
    pub options: Vec<AnswerOption>,
}

impl PresentationQuestion {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

impl fmt::Display for PresentationQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{} / {}] {}", self.category, self.difficulty, self.question)?;
        for (i, option) in self.options.iter().enumerate() {
            let letter = char::from(b'A' + (i % 26) as u8);
            writeln!(f, "  {letter}) {}", option.text)?;
        }
        Ok(())
    }
}
