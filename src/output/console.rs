use std::io::{self, Write};

use crate::output::{Message, QuizOutput};

#[derive(Clone, Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        InvalidTimeLimit {
            requested,
            fallback,
        } => format!(
            "⚠️ Invalid time limit of {} (must be positive). Using default of {} seconds.\n",
            requested,
            fallback.as_secs()
        ),
        QuizStarting(delay) => format!("Quiz will begin in {} seconds...\n", delay.as_secs()),
        QuestionBegins {
            number,
            total,
            question,
        } => format!(
            "\nQuestion {}/{}\nProblem: {} = ",
            number, total, question.prompt
        ),
        TimeRemaining(remaining) => {
            format!("\n⚠️  {} seconds remaining!\n", remaining.as_secs())
        }
        TimeUp(question) => format!(
            "\n⌛ Time's up for this question! The answer was: {}\n",
            question.answer
        ),
        GuessCorrect => "✅ Correct!\n".into(),
        GuessIncorrect(question) => {
            format!("❌ Wrong! The correct answer was: {}\n", question.answer)
        }
        FinalScore(result) => format!(
            "\n--- Quiz Finished ---\nFinal Score: {} out of {} ({:.1}%)\n",
            result.correct,
            result.total,
            result.percentage()
        ),
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        let content = interpret_message(message);
        let mut stdout = io::stdout().lock();
        // The prompt has no trailing newline, so flush explicitly.
        if let Err(e) = stdout.write_all(content.as_bytes()).and_then(|_| stdout.flush()) {
            eprintln!("Error writing to console: {}", e);
        }
    }
}
