use std::fmt;

use thiserror::Error;

/// One of the two answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    A,
    B,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("answer index {0} is out of range, expected 0 or 1")]
pub struct AnswerIndexError(pub usize);

impl TryFrom<usize> for Answer {
    type Error = AnswerIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Answer::A),
            1 => Ok(Answer::B),
            other => Err(AnswerIndexError(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer_a: String,
    pub answer_b: String,
    pub correct: Answer,
}

impl Question {
    pub fn new(prompt: &str, answer_a: &str, answer_b: &str, correct: Answer) -> Self {
        Self {
            prompt: prompt.to_string(),
            answer_a: answer_a.to_string(),
            answer_b: answer_b.to_string(),
            correct,
        }
    }

    pub fn answer_text(&self, answer: Answer) -> &str {
        match answer {
            Answer::A => &self.answer_a,
            Answer::B => &self.answer_b,
        }
    }

    pub fn correct_answer_text(&self) -> &str {
        self.answer_text(self.correct)
    }

    pub fn is_correct(&self, answer: Answer) -> bool {
        self.correct == answer
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank has no questions")]
    Empty,
}

/// Ordered, never empty list of questions. Presented in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        Ok(Self { questions })
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            questions: vec![
                Question::new("Capital of Colorado", "Colorado Springs", "Denver", Answer::B),
                Question::new("Capital of Washington State", "Olympia", "Seattle", Answer::A),
                Question::new("2 + 2", "2", "4", Answer::B),
            ],
        }
    }
}

/// Writes the bank in the same text format the parser reads.
impl fmt::Display for QuestionBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, question) in self.questions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "? {}", question.prompt)?;
            for answer in [Answer::A, Answer::B] {
                let marker = if question.is_correct(answer) { "*" } else { "" };
                writeln!(f, "-{} {}", marker, question.answer_text(answer))?;
            }
        }

        Ok(())
    }
}
