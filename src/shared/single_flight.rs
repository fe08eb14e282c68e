//! Keyed get-or-compute-once store with request coalescing.

use crate::shared::cancellation::CancellationToken;
use crate::shared::error::EvaluationError;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

type Outcome<V> = Result<V, EvaluationError>;

#[derive(Debug)]
enum FlightState<V> {
    Pending,
    Done(Outcome<V>),
    Abandoned,
}

impl<V> FlightState<V> {
    fn is_settled(&self) -> bool {
        !matches!(self, FlightState::Pending)
    }
}

/// One computation for one key, observed through a watch channel.
struct Flight<V> {
    state: watch::Sender<FlightState<V>>,
}

/// SingleFlight memoises one outcome per key.
///
/// The first caller for a key runs the computation; callers arriving while
/// it is in progress join it and receive the same outcome. Settled outcomes,
/// errors included, are kept and replayed verbatim.
///
/// # Cancellation
/// The computation belongs to the caller that started it. When that caller's
/// token fires (or its future is dropped) the computation is abandoned, the
/// key is forgotten, and every joined caller receives
/// [`EvaluationError::Cancelled`]. The next request starts afresh. A joined
/// caller whose own token fires stops waiting without disturbing the flight.
pub struct SingleFlight<K, V> {
    flights: DashMap<K, Arc<Flight<V>>>,
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            flights: DashMap::new(),
        }
    }

    /// Number of keys currently tracked (pending or settled).
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the outcome for `key`, running `compute` only if no other
    /// caller has started (or finished) it.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &K,
        cancel: &CancellationToken,
        compute: F,
    ) -> Outcome<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<V>>,
    {
        if cancel.is_cancelled() {
            return Err(EvaluationError::Cancelled);
        }

        // The shard lock is released at the end of this statement.
        let (flight, owner) = match self.flights.entry(key.clone()) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => {
                let (state, _) = watch::channel(FlightState::Pending);
                let flight = Arc::new(Flight { state });
                entry.insert(Arc::clone(&flight));
                (flight, true)
            }
        };

        if !owner {
            debug!("joining existing flight");
            return Self::join(&flight, cancel).await;
        }

        let mut guard = FlightGuard {
            flights: &self.flights,
            key,
            flight: &flight,
            settled: false,
        };

        let outcome = tokio::select! {
            outcome = compute() => outcome,
            _ = cancel.cancelled() => Err(EvaluationError::Cancelled),
        };

        match outcome {
            Err(EvaluationError::Cancelled) => {
                debug!("flight abandoned by its owner");
                drop(guard);
                Err(EvaluationError::Cancelled)
            }
            outcome => {
                guard.settle(outcome.clone());
                outcome
            }
        }
    }

    async fn join(flight: &Flight<V>, cancel: &CancellationToken) -> Outcome<V> {
        let mut state = flight.state.subscribe();

        tokio::select! {
            settled = state.wait_for(FlightState::is_settled) => match settled {
                Ok(current) => match &*current {
                    FlightState::Done(outcome) => outcome.clone(),
                    _ => Err(EvaluationError::Cancelled),
                },
                Err(_) => Err(EvaluationError::Cancelled),
            },
            _ = cancel.cancelled() => Err(EvaluationError::Cancelled),
        }
    }
}

impl<K, V> Default for SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Settles the owner's flight; if dropped unsettled, forgets the key and
/// releases joined callers with `Cancelled`.
struct FlightGuard<'a, K: Eq + Hash, V> {
    flights: &'a DashMap<K, Arc<Flight<V>>>,
    key: &'a K,
    flight: &'a Arc<Flight<V>>,
    settled: bool,
}

impl<K: Eq + Hash, V> FlightGuard<'_, K, V> {
    fn settle(&mut self, outcome: Outcome<V>) {
        self.flight.state.send_replace(FlightState::Done(outcome));
        self.settled = true;
    }
}

impl<K: Eq + Hash, V> Drop for FlightGuard<'_, K, V> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let flight = self.flight;
        self.flights
            .remove_if(self.key, |_, current| Arc::ptr_eq(current, flight));
        flight.state.send_replace(FlightState::Abandoned);
    }
}
