use std::thread;
use std::time::Duration;

use crate::output::{Message, QuizOutput};


#[derive(Clone, Debug)]
pub struct StartupPhase<O> {
    delay: Duration,
    output: O,
}

impl<O: QuizOutput> StartupPhase<O> {
    pub fn new(delay: Duration, output: O) -> Self {
        StartupPhase { delay, output }
    }

    pub fn run(&self) {
        self.output.say(&Message::QuizStarting(self.delay));
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
