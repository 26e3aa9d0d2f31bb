use anyhow::Result;
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Default)]
struct Shared {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

/// Runs a callback once after a delay unless cancelled first.
///
/// The callback runs under the cancellation lock: once `cancel` (or drop)
/// returns, the alarm has either already fired or never will.
pub struct Alarm {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl Alarm {
    pub fn start<F>(name: &str, delay: Duration, on_fire: F) -> Result<Alarm>
    where
        F: FnOnce() + Send + 'static,
    {
        let shared: Arc<Shared> = Default::default();
        let deadline = Instant::now() + delay;
        let thread_shared = shared.clone();
        let handle = thread::Builder::new()
            .name(format!("{}-alarm", name))
            .spawn(move || {
                let mut cancelled = thread_shared.cancelled.lock();
                while !*cancelled {
                    if thread_shared
                        .wake
                        .wait_until(&mut cancelled, deadline)
                        .timed_out()
                    {
                        break;
                    }
                }
                if !*cancelled {
                    trace!("Alarm fired after {:?}", delay);
                    on_fire();
                }
            })?;
        Ok(Alarm {
            shared,
            handle: Some(handle),
        })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        *self.shared.cancelled.lock() = true;
        self.shared.wake.notify_all();
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
