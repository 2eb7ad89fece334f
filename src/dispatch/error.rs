use rayon::ThreadPoolBuildError;
use std::fmt::{Display, Formatter};

use crate::impl_err;

#[derive(Debug)]
pub enum DispatchError {
    /// The worker pool could not be created.
    ThreadPool(ThreadPoolBuildError),
    /// The concurrency slots were released before the dispatch finished.
    SlotsClosed,
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::ThreadPool(err) => write!(f, "could not build worker pool: {err}"),
            DispatchError::SlotsClosed => write!(f, "concurrency slots closed mid-dispatch"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl_err!(ThreadPoolBuildError, DispatchError, ThreadPool);
