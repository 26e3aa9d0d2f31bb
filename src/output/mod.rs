use std::time::Duration;

use crate::quiz::definition::Question;
use crate::quiz::QuizResult;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    FinalScore(QuizResult),
    GuessCorrect,
    GuessIncorrect(Question),
    InvalidTimeLimit { requested: i64, fallback: Duration },
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
    },
    QuizStarting(Duration),
    TimeRemaining(Duration),
    TimeUp(Question),
}

/// Destination for everything the quiz tells the player.
///
/// Alarms speak from their own threads, so outputs are cheap handles that can
/// be cloned and moved across threads.
pub trait QuizOutput: Clone + Send + Sync + 'static {
    fn say(&self, message: &Message);
}
