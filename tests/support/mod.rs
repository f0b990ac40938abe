//! Shared helpers for the live-API integration tests.

use std::sync::mpsc::{sync_channel, Receiver};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// A simple and easy rate limiter: one slot, refilled on a fixed
/// interval by a dedicated background thread. `take()` blocks the
/// calling thread until a slot arrives.
pub struct Bucket {
    slots: Mutex<Receiver<()>>,
}

impl Bucket {
    pub fn new(refill: Duration) -> Self {
        // Rendezvous channel: the refill thread blocks until someone
        // takes the slot, so at most one call fires per interval.
        let (tx, rx) = sync_channel::<()>(0);
        thread::spawn(move || loop {
            thread::sleep(refill);
            if tx.send(()).is_err() {
                break;
            }
        });
        Bucket {
            slots: Mutex::new(rx),
        }
    }

    pub fn take(&self) {
        let _ = self.slots.lock().unwrap().recv();
    }
}
