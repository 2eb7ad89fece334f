use crate::trip::Ping;

/// A contiguous run of pings sharing one delivery identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub delivery: String,
    pub pings: Vec<Ping>,
}

impl Run {
    fn start(ping: Ping) -> Self {
        Self {
            delivery: ping.delivery.clone(),
            pings: vec![ping],
        }
    }
}

/// Streams a ping sequence as its contiguous [`Run`]s.
///
/// Only one run is buffered at a time. A delivery whose pings are
/// interleaved with another's is yielded once per contiguous run.
///
/// ```rust
/// use chrono::DateTime;
/// use tripfare::dispatch::Runs;
/// use tripfare::trip::Ping;
///
/// let at = DateTime::from_timestamp(0, 0).unwrap().fixed_offset();
/// let pings = ["a", "a", "b", "a"].map(|id| Ping::new(id, 0.0, 0.0, at));
///
/// let runs = Runs::new(pings).map(|run| (run.delivery, run.pings.len())).collect::<Vec<_>>();
/// assert_eq!(runs, vec![("a".into(), 2), ("b".into(), 1), ("a".into(), 1)]);
/// ```
pub struct Runs<I>
where
    I: Iterator<Item = Ping>,
{
    pings: I,
    pending: Option<Run>,
}

impl<I> Runs<I>
where
    I: Iterator<Item = Ping>,
{
    pub fn new(pings: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            pings: pings.into_iter(),
            pending: None,
        }
    }
}

impl<I> Iterator for Runs<I>
where
    I: Iterator<Item = Ping>,
{
    type Item = Run;

    fn next(&mut self) -> Option<Self::Item> {
        for ping in self.pings.by_ref() {
            match self.pending.as_mut() {
                Some(run) if run.delivery == ping.delivery => run.pings.push(ping),
                Some(_) => return self.pending.replace(Run::start(ping)),
                None => self.pending = Some(Run::start(ping)),
            }
        }

        self.pending.take()
    }
}
