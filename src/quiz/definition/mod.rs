use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod question;

pub use question::Question;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("CSV file is empty")]
    EmptyInput,
    #[error("invalid format at line {}: expected 2 fields, got {field_count}", .index + 1)]
    MalformedRow { index: usize, field_count: usize },
    #[error("invalid format at line {}: empty question or answer", .index + 1)]
    BlankField { index: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open quiz file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse the provided CSV file")]
    Parse(#[from] csv::Error),
    #[error("Invalid CSV file")]
    Validation(#[from] ValidationError),
}

/// Turns raw rows into questions, preserving their order.
///
/// Every row must hold exactly a question and an answer, neither of them blank.
pub fn validate<I, R, S>(records: I) -> Result<Vec<Question>, ValidationError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut questions = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let fields: Vec<S> = record.into_iter().collect();
        if fields.len() != 2 {
            return Err(ValidationError::MalformedRow {
                index,
                field_count: fields.len(),
            });
        }
        let prompt = fields[0].as_ref();
        let answer = fields[1].as_ref();
        if prompt.trim().is_empty() || answer.trim().is_empty() {
            return Err(ValidationError::BlankField { index });
        }
        questions.push(Question::new(prompt, answer));
    }

    if questions.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(questions)
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition, LoadError> {
        let file = File::open(source).map_err(|source_error| LoadError::Io {
            path: source.to_path_buf(),
            source: source_error,
        })?;
        let definition = Self::from_reader(file)?;
        debug!(
            "Loaded {} questions from {}",
            definition.questions.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition, LoadError> {
        // Rows of the wrong width are reported by `validate`, not by the parser.
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for record in csv_reader.records() {
            records.push(record?);
        }

        let questions = validate(&records)?;
        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
