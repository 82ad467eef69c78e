use super::model::{AnswerOption, PresentationQuestion, QuestionKind, RawTriviaQuestion};
use rand::{seq::SliceRandom, Rng};

/// Decodes HTML entities (`&amp;`, `&quot;`, `&#039;`, ...). Plain text is returned unchanged.
pub fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Turns raw trivia records into decoded questions with shuffled answer options.
///
/// Question order is preserved. Boolean questions always get `True` then `False`;
/// every other kind gets the correct answer plus the incorrect ones in random order.
pub fn transform<R: Rng + ?Sized>(
    questions: &[RawTriviaQuestion],
    rng: &mut R,
) -> Vec<PresentationQuestion> {
    questions
        .iter()
        .map(|question| transform_question(question, rng))
        .collect()
}

fn transform_question<R: Rng + ?Sized>(
    question: &RawTriviaQuestion,
    rng: &mut R,
) -> PresentationQuestion {
    let correct_answer = decode(&question.correct_answer);

    let options = match question.kind {
        QuestionKind::Boolean => ["True", "False"]
            .into_iter()
            .map(|text| AnswerOption {
                text: text.to_owned(),
                is_correct: correct_answer.eq_ignore_ascii_case(text),
            })
            .collect(),
        QuestionKind::Multiple | QuestionKind::Other(_) => {
            let mut options = Vec::with_capacity(question.incorrect_answers.len() + 1);
            options.push(AnswerOption {
                text: correct_answer,
                is_correct: true,
            });
            options.extend(
                question
                    .incorrect_answers
                    .iter()
                    .map(|answer| AnswerOption {
                        text: decode(answer),
                        is_correct: false,
                    }),
            );
            options.shuffle(rng);
            options
        }
    };

    PresentationQuestion {
        category: decode(&question.category),
        difficulty: decode(&question.difficulty),
        question: decode(&question.question),
        options,
    }
}
