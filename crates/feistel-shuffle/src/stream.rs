//! Background producer for shuffled sequences.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use feistel_core::{FeistelNetwork, RoundFunction, Word};

use crate::error::ShuffleError;
use crate::index::ensure_keyed;
use crate::sequence::Shuffle;

/// Shuffled sequence computed on a dedicated thread.
///
/// Values are handed over through a rendezvous channel: the producer works at
/// most one value ahead and blocks until the consumer takes it. Dropping the
/// stream stops and joins the producer.
#[derive(Debug)]
pub struct ShuffleStream<W: Word> {
    receiver: Option<Receiver<W>>,
    stop: Arc<AtomicBool>,
    producer: Option<JoinHandle<()>>,
}

impl<W: Word> ShuffleStream<W> {
    /// Spawns a producer for the same sequence [`crate::shuffle`] yields.
    ///
    /// # Errors
    ///
    /// [`ShuffleError::InvalidKey`] when the network has no round keys; no
    /// thread is started in that case.
    pub fn spawn<F>(min: W, max: W, network: Arc<FeistelNetwork<W, F>>) -> Result<Self, ShuffleError>
    where
        F: RoundFunction<W> + Send + Sync + 'static,
    {
        ensure_keyed(&*network)?;
        let (sender, receiver) = mpsc::sync_channel(0);
        let stop = Arc::new(AtomicBool::new(false));
        let producer_stop = Arc::clone(&stop);

        let producer = thread::Builder::new()
            .name("shuffle-producer".into())
            .spawn(move || {
                let Ok(sequence) = Shuffle::new(min, max, &*network) else {
                    return;
                };
                for value in sequence {
                    if producer_stop.load(Ordering::Acquire) {
                        break;
                    }
                    if sender.send(value).is_err() {
                        break;
                    }
                }
            })
            .map_err(|err| ShuffleError::Spawn(err.to_string()))?;

        Ok(Self {
            receiver: Some(receiver),
            stop,
            producer: Some(producer),
        })
    }

    /// Asks the producer to stop.
    ///
    /// The flag is checked at the next hand-off: a producer already blocked
    /// handing over a value stays blocked until that value is received or the
    /// stream is dropped, so at most one more value arrives after this call.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Whether [`ShuffleStream::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }
}

impl<W: Word> Iterator for ShuffleStream<W> {
    type Item = W;

    fn next(&mut self) -> Option<W> {
        let value = self.receiver.as_ref()?.recv().ok();
        if value.is_none() {
            self.receiver = None;
        }
        value
    }
}

impl<W: Word> Drop for ShuffleStream<W> {
    fn drop(&mut self) {
        self.cancel();
        // Disconnecting wakes a producer blocked in `send`.
        self.receiver.take();
        if let Some(handle) = self.producer.take() {
            if let Err(payload) = handle.join() {
                if !thread::panicking() {
                    panic::resume_unwind(payload);
                }
            }
        }
    }
}
