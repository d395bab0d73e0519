use super::transport::Transport;
use super::wire::{OddsRequest, OddsResponse};
use super::OddsError;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// A finished request, tagged with the sequence number it was submitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub seq: u64,
    pub result: Result<OddsResponse, OddsError>,
}

/// Non-blocking front door to the odds engine.
///
/// `submit` returns immediately; finished requests show up in `poll`, in
/// whatever order they complete.
pub trait OddsService {
    fn submit(&mut self, seq: u64, request: OddsRequest);
    fn poll(&mut self) -> Vec<Reply>;
}

/// Runs every request on its own worker thread and collects the replies over a
/// channel.
pub struct ThreadedOddsService<T> {
    transport: Arc<T>,
    tx: Sender<Reply>,
    rx: Receiver<Reply>,
}

impl<T> ThreadedOddsService<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn new(transport: T) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { transport: Arc::new(transport), tx, rx }
    }
}

impl<T> OddsService for ThreadedOddsService<T>
where
    T: Transport + Send + Sync + 'static,
{
    fn submit(&mut self, seq: u64, request: OddsRequest) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new().name(format!("odds-{seq}")).spawn(move || {
            let result = transport.post(&request);
            // The receiver only goes away when the UI is shutting down.
            let _ = tx.send(Reply { seq, result });
        });
        if let Err(e) = spawned {
            log::error!("failed to spawn odds worker: {e}");
            let _ = self.tx.send(Reply { seq, result: Err(OddsError::Transport(e.to_string())) });
        }
    }

    fn poll(&mut self) -> Vec<Reply> {
        self.rx.try_iter().collect()
    }
}

impl<T> std::fmt::Debug for ThreadedOddsService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadedOddsService").finish_non_exhaustive()
    }
}
