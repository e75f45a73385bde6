//! Threaded oracle client: checks run off the input loop on a worker
//! thread and come back over a channel, drained non-blockingly each
//! frame.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use super::{OracleError, WordOracle};

/// A resolved validity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Round generation the word was submitted under. Receivers discard
    /// verdicts from generations they no longer play.
    pub generation: u64,
    /// The word as submitted (lowercase).
    pub word: String,
    pub result: Result<bool, OracleError>,
}

struct Request {
    generation: u64,
    word: String,
}

/// Handle to the oracle worker. Dropping the client shuts the worker
/// down.
pub struct OracleClient {
    /// Channel delivering words to the worker
    tx: Sender<Request>,
    /// Channel receiving finished verdicts
    rx: Receiver<Verdict>,
    /// Whether the worker is still serving
    alive: bool,
}

impl OracleClient {
    /// Spawn a worker that answers submissions with `oracle`.
    pub fn spawn(oracle: Box<dyn WordOracle + Send>) -> Self {
        let (request_tx, request_rx) = channel::<Request>();
        let (verdict_tx, verdict_rx) = channel::<Verdict>();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = oracle.check(&request.word);
                let verdict = Verdict {
                    generation: request.generation,
                    word: request.word,
                    result,
                };
                if verdict_tx.send(verdict).is_err() {
                    break;
                }
            }
        });

        OracleClient {
            tx: request_tx,
            rx: verdict_rx,
            alive: true,
        }
    }

    /// Queue a word for checking. Fails only if the worker is gone, in
    /// which case the caller should synthesize an unreachable verdict so
    /// the round is not stranded waiting.
    pub fn submit(&mut self, generation: u64, word: &str) -> Result<(), OracleError> {
        let request = Request {
            generation,
            word: word.to_string(),
        };
        self.tx.send(request).map_err(|_| {
            self.alive = false;
            OracleError::Unreachable
        })
    }

    /// Try to receive one verdict (non-blocking).
    pub fn try_recv(&mut self) -> Option<Verdict> {
        match self.rx.try_recv() {
            Ok(verdict) => Some(verdict),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.alive = false;
                None
            }
        }
    }

    /// Drain every verdict that has arrived.
    pub fn recv_all(&mut self) -> Vec<Verdict> {
        let mut verdicts = Vec::new();
        while let Some(verdict) = self.try_recv() {
            verdicts.push(verdict);
        }
        verdicts
    }

    /// Check whether the worker is still serving.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
