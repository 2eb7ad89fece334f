//! Bounded fan-out of fare computation across deliveries.
//!
//! The [`Dispatcher`] reads a ping stream once, closing a [`Run`] whenever the
//! delivery identifier changes. Each run is handed to a worker on a pool of
//! `concurrency` threads. Submission waits for a free slot once `concurrency`
//! workers are in flight, so at most one pending run is buffered beyond them.
//!
//! Workers send their `(delivery, fare)` to a single collector which owns the
//! resulting [`FareTable`]. The table is only assembled after every submitted
//! worker has finished.

use std::num::NonZeroUsize;

use crossbeam::channel::{self, Receiver};
use log::{debug, info};
use rayon::ThreadPoolBuilder;

use crate::fare::{Fare, FareCalculator};
use crate::tariff::{StandardTariff, Tariff};
use crate::trip::Ping;

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod runs;
#[doc(hidden)]
pub mod table;

#[doc(inline)]
pub use error::DispatchError;
#[doc(inline)]
pub use runs::{Run, Runs};
#[doc(inline)]
pub use table::FareTable;

/// Number of deliveries priced at once unless configured otherwise.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(concurrency) => concurrency,
    None => panic!("default concurrency must be non-zero"),
};

/// Holds one concurrency slot, freeing it when the worker finishes or unwinds.
struct Slot<'a>(&'a Receiver<()>);

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        let _ = self.0.recv();
    }
}

/// Prices every delivery run of a ping stream, with at most
/// [`concurrency`](Dispatcher::concurrency) runs being priced at once.
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use chrono::DateTime;
/// use tripfare::dispatch::Dispatcher;
/// use tripfare::trip::Ping;
///
/// let at = |secs| DateTime::from_timestamp(secs, 0).unwrap().fixed_offset();
/// let pings = vec![
///     Ping::new("1", 35.0, 51.0, at(0)),
///     Ping::new("1", 35.1, 51.1, at(600)),
///     Ping::new("2", 36.0, 52.0, at(1200)),
/// ];
///
/// let fares = Dispatcher::new(NonZeroUsize::new(2).unwrap())
///     .dispatch(pings)
///     .expect("pool must build");
///
/// assert_eq!(fares.len(), 2);
/// assert_eq!(fares.get("2").unwrap().to_string(), "3.47");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<T: Tariff = StandardTariff> {
    concurrency: NonZeroUsize,
    calculator: FareCalculator<T>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new(DEFAULT_CONCURRENCY)
    }
}

impl Dispatcher {
    pub fn new(concurrency: NonZeroUsize) -> Self {
        Dispatcher::with_tariff(concurrency, StandardTariff)
    }
}

impl<T: Tariff> Dispatcher<T> {
    pub fn with_tariff(concurrency: NonZeroUsize, tariff: T) -> Self {
        Self {
            concurrency,
            calculator: FareCalculator::new(tariff),
        }
    }

    pub fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    pub fn calculator(&self) -> &FareCalculator<T> {
        &self.calculator
    }

    /// Prices each contiguous delivery run in `pings` with the
    /// dispatcher's [`FareCalculator`].
    pub fn dispatch<I>(&self, pings: I) -> Result<FareTable, DispatchError>
    where
        I: IntoIterator<Item = Ping>,
    {
        self.dispatch_with(pings, |delivery, run| self.calculator.fare(delivery, run))
    }

    /// Prices each contiguous delivery run in `pings` with `worker`.
    ///
    /// Should a delivery identifier reappear after another delivery's
    /// pings, each run is priced separately and the run whose worker
    /// finishes last determines the recorded fare.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, level = "info", fields(concurrency = self.concurrency.get()))
    )]
    pub fn dispatch_with<I, W>(&self, pings: I, worker: W) -> Result<FareTable, DispatchError>
    where
        I: IntoIterator<Item = Ping>,
        W: Fn(&str, &[Ping]) -> Fare + Sync,
    {
        let concurrency = self.concurrency.get();
        let pool = ThreadPoolBuilder::new()
            .num_threads(concurrency)
            .thread_name(|index| format!("fare-worker-{index}"))
            .build()?;

        let (slots, freed) = channel::bounded::<()>(concurrency);
        let (fares, collected) = channel::unbounded::<(String, Fare)>();

        // The scope only returns once every spawned worker has completed.
        let submitted = pool.in_place_scope(|scope| -> Result<usize, DispatchError> {
            let mut submitted = 0;

            for run in Runs::new(pings) {
                slots.send(()).map_err(|_| DispatchError::SlotsClosed)?;
                let slot = Slot(&freed);

                debug!("Submitting {} with {} pings", run.delivery, run.pings.len());
                let (fares, worker) = (fares.clone(), &worker);

                scope.spawn(move |_| {
                    let _slot = slot;
                    let fare = worker(&run.delivery, &run.pings);

                    fares
                        .send((run.delivery, fare))
                        .expect("collector is held until the scope closes");
                });

                submitted += 1;
            }

            Ok(submitted)
        })?;

        drop(fares);
        let table = collected.into_iter().collect::<FareTable>();

        info!(
            "Priced {submitted} delivery runs into {} fares using {concurrency} workers",
            table.len()
        );

        Ok(table)
    }
}
