use anyhow::{anyhow, Context, Result};
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tracing::debug;

use crate::input::AnswerReader;
use crate::output::{Message, QuizOutput};
use crate::quiz::alarm::Alarm;
use crate::quiz::definition::Question;
use crate::quiz::settings::Settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuestionOutcome {
    Correct,
    Incorrect,
    TimedOut,
}

enum Event {
    Deadline,
    Answer(io::Result<String>),
}

pub struct QuestionPhase<O> {
    number: usize,
    total: usize,
    question: Question,
    time_limit: Duration,
    warning_delay: Duration,
    time_remaining_at_warning: Duration,
    output: O,
}

impl<O: QuizOutput> QuestionPhase<O> {
    pub fn new(
        number: usize,
        total: usize,
        question: Question,
        settings: &Settings,
        output: O,
    ) -> Self {
        QuestionPhase {
            number,
            total,
            question,
            time_limit: settings.time_limit,
            warning_delay: settings.warning_delay,
            time_remaining_at_warning: settings.time_remaining_at_warning(),
            output,
        }
    }

    /// Asks the question and waits for an answer or the deadline, whichever
    /// comes first.
    ///
    /// Both alarms are stopped before this returns. An answer typed after the
    /// deadline is still read, but it lands in a channel nobody listens to.
    pub fn run(self, reader: &AnswerReader) -> Result<QuestionOutcome> {
        self.output.say(&Message::QuestionBegins {
            number: self.number,
            total: self.total,
            question: self.question.clone(),
        });

        let (events, first_event) = mpsc::channel();

        let deadline = {
            let events = events.clone();
            Alarm::start("deadline", self.time_limit, move || {
                events.send(Event::Deadline).ok();
            })?
        };

        let warning = {
            let output = self.output.clone();
            let time_remaining = self.time_remaining_at_warning;
            Alarm::start("warning", self.warning_delay, move || {
                output.say(&Message::TimeRemaining(time_remaining));
            })?
        };

        reader.request(move |line| {
            events.send(Event::Answer(line)).ok();
        })?;

        let event = first_event
            .recv()
            .map_err(|_| anyhow!("Stopped waiting for an answer unexpectedly"));
        deadline.cancel();
        warning.cancel();

        let outcome = match event? {
            Event::Deadline => {
                self.output.say(&Message::TimeUp(self.question.clone()));
                QuestionOutcome::TimedOut
            }
            Event::Answer(line) => {
                let guess = line.context("Could not read an answer")?;
                if self.question.is_guess_correct(&guess) {
                    self.output.say(&Message::GuessCorrect);
                    QuestionOutcome::Correct
                } else {
                    self.output
                        .say(&Message::GuessIncorrect(self.question.clone()));
                    QuestionOutcome::Incorrect
                }
            }
        };

        debug!(
            "Question {}/{} resolved as {:?}",
            self.number, self.total, outcome
        );
        Ok(outcome)
    }
}
