use crate::output::{Message, QuizOutput};
use crate::quiz::QuizResult;


#[derive(Debug)]
pub struct ResultsPhase<O> {
    result: QuizResult,
    output: O,
}

impl<O: QuizOutput> ResultsPhase<O> {
    pub fn new(result: QuizResult, output: O) -> Self {
        ResultsPhase { result, output }
    }

    pub fn run(&self) {
        self.output.say(&Message::FinalScore(self.result));
    }
}
