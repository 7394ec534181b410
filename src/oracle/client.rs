//! Asynchronous hand-off to the oracle
//!
//! Every request gets its own one-shot channel, so a result can only ever be
//! attributed to the request that produced it.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use super::{Oracle, OracleResponse};
use crate::board::Snapshot;
use crate::error::{GameError, OracleError};

/// Monotonic id of a dispatched request, used in log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Request state
enum Slot {
    Idle,
    Pending {
        id: RequestId,
        receiver: Receiver<OracleResponse>,
        start_time: Instant,
    },
    Ready {
        id: RequestId,
        response: OracleResponse,
        elapsed: Duration,
    },
}

/// Runs one oracle computation at a time on a background thread
pub struct OracleClient {
    oracle: Arc<dyn Oracle>,
    slot: Slot,
    next_id: u64,
}

impl OracleClient {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self {
            oracle,
            slot: Slot::Idle,
            next_id: 1,
        }
    }

    /// Start a computation and return immediately.
    ///
    /// Fails with `OracleBusy` while a previous result has not been taken.
    pub fn request(&mut self, snapshot: Snapshot) -> Result<RequestId, GameError> {
        if !matches!(self.slot, Slot::Idle) {
            return Err(GameError::OracleBusy);
        }

        let id = RequestId(self.next_id);
        self.next_id += 1;

        let oracle = Arc::clone(&self.oracle);
        let (tx, rx) = channel();

        let spawned = thread::Builder::new()
            .name(format!("oracle-{}", id.0))
            .spawn(move || {
                let mut diagnostics = |message: &str| {
                    debug!(request = id.0, "oracle: {}", message.trim());
                };
                let response = OracleResponse::from(oracle.compute(&snapshot, &mut diagnostics));
                // The receiver is gone if the game was reset meanwhile
                let _ = tx.send(response);
            });

        match spawned {
            Ok(_) => {
                debug!(request = id.0, "oracle request dispatched");
                self.slot = Slot::Pending {
                    id,
                    receiver: rx,
                    start_time: Instant::now(),
                };
            }
            Err(err) => {
                error!(request = id.0, %err, "failed to spawn oracle worker");
                self.slot = Slot::Ready {
                    id,
                    response: OracleResponse::Failed(OracleError::Service(err.to_string())),
                    elapsed: Duration::ZERO,
                };
            }
        }
        Ok(id)
    }

    /// Non-blocking readiness check
    pub fn is_ready(&mut self) -> bool {
        let outcome = match &self.slot {
            Slot::Idle => return false,
            Slot::Ready { .. } => return true,
            Slot::Pending {
                id,
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(response) => (*id, response, start_time.elapsed()),
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => (
                    *id,
                    OracleResponse::Failed(OracleError::WorkerLost),
                    start_time.elapsed(),
                ),
            },
        };

        let (id, response, elapsed) = outcome;
        debug!(request = id.0, ?elapsed, "oracle result ready");
        self.slot = Slot::Ready {
            id,
            response,
            elapsed,
        };
        true
    }

    /// Consume the result of the finished request. Returns `None` if nothing
    /// is ready; a second call after a successful take also returns `None`.
    pub fn take_result(&mut self) -> Option<(RequestId, OracleResponse, Duration)> {
        if !self.is_ready() {
            return None;
        }
        match std::mem::replace(&mut self.slot, Slot::Idle) {
            Slot::Ready {
                id,
                response,
                elapsed,
            } => Some((id, response, elapsed)),
            other => {
                self.slot = other;
                None
            }
        }
    }

    /// A request has been dispatched and its result not yet taken
    pub fn is_pending(&self) -> bool {
        !matches!(self.slot, Slot::Idle)
    }

    /// Time since the outstanding request was dispatched
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.slot {
            Slot::Pending { start_time, .. } => Some(start_time.elapsed()),
            Slot::Ready { elapsed, .. } => Some(*elapsed),
            Slot::Idle => None,
        }
    }

    /// Forget any outstanding request. Its worker runs to completion and its
    /// result is dropped with the channel.
    pub fn abandon(&mut self) {
        if let Slot::Pending { id, .. } | Slot::Ready { id, .. } = &self.slot {
            debug!(request = id.0, "oracle request abandoned");
        }
        self.slot = Slot::Idle;
    }
}
