use std::io::{self, BufReader, Read};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Keyboard side of a scripted input stream.
///
/// The stream blocks until a line is typed and reports end of input once every
/// `MockInput` handle (including pending delayed lines) is dropped.
#[derive(Clone)]
pub struct MockInput {
    keystrokes: Sender<Vec<u8>>,
}

pub struct MockInputStream {
    keystrokes: Receiver<Vec<u8>>,
    buffer: Vec<u8>,
    position: usize,
}

impl MockInput {
    pub fn new() -> (MockInput, BufReader<MockInputStream>) {
        let (sender, receiver) = mpsc::channel();
        let stream = MockInputStream {
            keystrokes: receiver,
            buffer: Vec::new(),
            position: 0,
        };
        (
            MockInput { keystrokes: sender },
            BufReader::new(stream),
        )
    }

    pub fn type_line(&self, line: &str) {
        self.keystrokes
            .send(format!("{}\n", line).into_bytes())
            .ok();
    }

    pub fn type_line_after(&self, delay: Duration, line: &str) {
        let input = self.clone();
        let line = line.to_owned();
        thread::spawn(move || {
            thread::sleep(delay);
            input.type_line(&line);
        });
    }
}

impl Read for MockInputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.position >= self.buffer.len() {
            match self.keystrokes.recv() {
                Ok(chunk) => {
                    self.buffer = chunk;
                    self.position = 0;
                }
                Err(_) => return Ok(0),
            }
        }
        let available = &self.buffer[self.position..];
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.position += count;
        Ok(count)
    }
}
