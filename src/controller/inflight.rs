// src/controller/inflight.rs
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

use crate::core::{RequestError, RequestPayload, ResultPayload, Transport};

type Outcome = Result<ResultPayload, RequestError>;

/// Runs the wrapped callback when dropped.
struct NotifyOnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for NotifyOnDrop<F> {
    fn drop(&mut self) {
        if let Some(notify) = self.0.take() {
            notify();
        }
    }
}

/// The one request currently running on a worker thread.
///
/// The worker sends exactly one outcome. If it dies first (or never
/// started), the closed channel is reported as `RequestError::Worker`, so
/// the controller always leaves `Submitting`.
pub struct InFlight {
    rx: Receiver<Outcome>,
}

impl InFlight {
    /// Spawn the worker. `notify` runs once the outcome can be polled, even
    /// if the transport panicked (the GUI uses it to request a repaint).
    pub fn dispatch<F>(transport: Arc<dyn Transport>, payload: RequestPayload, notify: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name(s!("crawllab-request"))
            .spawn(move || {
                // Fires on return and on unwind alike. Locals drop in reverse,
                // so `tx` is closed (or has sent) before `notify` runs.
                let _notify = NotifyOnDrop(Some(notify));
                let tx = tx;
                let outcome = transport.post_keywords(&payload);
                let _ = tx.send(outcome);
            });

        if let Err(e) = spawned {
            loge!("Submit: could not start request worker: {}", e);
        }

        Self { rx }
    }

    /// Non-blocking check, called once per frame.
    pub fn poll(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(RequestError::Worker)),
        }
    }

    /// Block until the worker answers.
    pub fn wait(self) -> Outcome {
        self.rx.recv().unwrap_or(Err(RequestError::Worker))
    }
}
