use pest::error::LineColLocation;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use thiserror::Error;

use crate::bank::{Answer, BankError, Question, QuestionBank};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    #[error("question on line {line} has {marked} answers marked with '*', expected exactly one")]
    CorrectAnswer { line: usize, marked: usize },
    #[error(transparent)]
    Bank(#[from] BankError),
}

#[derive(Parser)]
#[grammar = "quiz.pest"]
struct QuizParser;

pub fn parse_bank(contents: &str) -> Result<QuestionBank, ParseError> {
    let file = QuizParser::parse(Rule::file, contents).map_err(|err| {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((x, y)) => (x, y),
            LineColLocation::Span((start_x, start_y), _) => (start_x, start_y),
        };
        ParseError::Syntax {
            message: err.variant.message().to_string(),
            line,
            column,
        }
    })?;

    let mut questions = Vec::new();
    for data in file.flat_map(|pair| pair.into_inner()) {
        match data.as_rule() {
            Rule::question => questions.push(parse_question(data)?),
            Rule::EOI => break,
            _ => {}
        }
    }

    Ok(QuestionBank::new(questions)?)
}

fn parse_question(question: Pair<'_, Rule>) -> Result<Question, ParseError> {
    let (line, column) = question.as_span().start_pos().line_col();

    let mut prompt = String::new();
    let mut answers = Vec::with_capacity(2);
    for part in question.into_inner() {
        match part.as_rule() {
            Rule::prompt => prompt = inner_text(part),
            Rule::answer => answers.push(parse_answer(part)),
            _ => {}
        }
    }

    let [(answer_a, a_marked), (answer_b, b_marked)] = answers.as_slice() else {
        return Err(ParseError::Syntax {
            message: format!("expected two answers, found {}", answers.len()),
            line,
            column,
        });
    };

    let correct = match (a_marked, b_marked) {
        (true, false) => Answer::A,
        (false, true) => Answer::B,
        _ => {
            return Err(ParseError::CorrectAnswer {
                line,
                marked: usize::from(*a_marked) + usize::from(*b_marked),
            })
        }
    };

    Ok(Question::new(&prompt, answer_a, answer_b, correct))
}

fn parse_answer(answer: Pair<'_, Rule>) -> (String, bool) {
    let mut marked = false;
    let mut text = String::new();

    for part in answer.into_inner() {
        match part.as_rule() {
            Rule::marker => marked = true,
            Rule::text => text = part.as_str().trim().to_string(),
            _ => {}
        }
    }

    (text, marked)
}

fn inner_text(pair: Pair<'_, Rule>) -> String {
    pair.into_inner()
        .find(|part| part.as_rule() == Rule::text)
        .map(|part| part.as_str().trim().to_string())
        .unwrap_or_default()
}
