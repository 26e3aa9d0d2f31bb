use anyhow::{anyhow, Result};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::trace;

#[cfg(test)]
pub mod mock;

type Delivery = Box<dyn FnOnce(io::Result<String>) + Send>;

/// Reads answer lines on a background thread, one line per request.
///
/// Requests are served in the order they were made. A blocking read cannot be
/// interrupted, so a request nobody waits for anymore still consumes its line;
/// whatever it does with that line is up to its delivery callback.
pub struct AnswerReader {
    requests: Sender<Delivery>,
}

impl AnswerReader {
    pub fn spawn<R>(input: R) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (requests, pending) = mpsc::channel();
        thread::Builder::new()
            .name("answer-reader".into())
            .spawn(move || read_lines(input, pending))?;
        Ok(AnswerReader { requests })
    }

    pub fn request<F>(&self, deliver: F) -> Result<()>
    where
        F: FnOnce(io::Result<String>) + Send + 'static,
    {
        self.requests
            .send(Box::new(deliver))
            .map_err(|_| anyhow!("Answer reader is no longer running"))
    }
}

fn read_lines<R: BufRead>(mut input: R, pending: Receiver<Delivery>) {
    for deliver in pending {
        // End of input reads as an empty line.
        let mut line = String::new();
        let result = input.read_line(&mut line).map(|_| line);
        trace!("Delivering answer line: {:?}", result);
        deliver(result);
    }
    trace!("Answer reader shutting down");
}
