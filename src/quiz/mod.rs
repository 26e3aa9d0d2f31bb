use anyhow::Result;
use rand::seq::SliceRandom;
use std::io::BufRead;
use tracing::info;

use self::definition::*;
use self::phase::*;
use self::settings::*;
use crate::input::AnswerReader;
use crate::output::QuizOutput;

mod alarm;
pub mod definition;
mod phase;
pub mod settings;


#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    fn record(&mut self, outcome: QuestionOutcome) {
        if outcome == QuestionOutcome::Correct {
            self.correct += 1;
        }
    }
}

pub struct Quiz<O: QuizOutput> {
    questions: Vec<Question>,
    settings: Settings,
    output: O,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(definition: QuizDefinition, settings: Settings, output: O) -> Quiz<O> {
        let mut questions = definition.into_questions();
        if settings.shuffle {
            questions.shuffle(&mut rand::thread_rng());
        }
        Quiz {
            questions,
            settings,
            output,
        }
    }

    /// Plays every question in order, reading answers from `input`.
    ///
    /// Only an I/O error on `input` aborts the run. Once `input` is
    /// exhausted, every remaining question gets an empty answer.
    pub fn run<R>(self, input: R) -> Result<QuizResult>
    where
        R: BufRead + Send + 'static,
    {
        StartupPhase::new(self.settings.startup_delay, self.output.clone()).run();

        let reader = AnswerReader::spawn(input)?;
        let total = self.questions.len();
        let mut result = QuizResult { correct: 0, total };
        for (index, question) in self.questions.into_iter().enumerate() {
            let phase = QuestionPhase::new(
                index + 1,
                total,
                question,
                &self.settings,
                self.output.clone(),
            );
            result.record(phase.run(&reader)?);
        }

        info!("Quiz finished with {} out of {}", result.correct, result.total);
        ResultsPhase::new(result, self.output).run();
        Ok(result)
    }
}
