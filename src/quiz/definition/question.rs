fn sanitize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: &str, answer: &str) -> Self {
        Question {
            prompt: prompt.to_owned(),
            answer: answer.trim().to_owned(),
        }
    }

    pub fn is_guess_correct(&self, guess: &str) -> bool {
        sanitize(guess) == sanitize(&self.answer)
    }
}
