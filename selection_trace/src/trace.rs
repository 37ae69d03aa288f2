use std::fmt;
use std::io;
use std::slice;

/// Consumer of per-pass observations.
///
/// `state` is the sorted prefix `v[..n]`, not the full underlying slice.
pub trait TraceSink<T> {
    fn record(&mut self, pass: PassId, state: &[T]);
}

/// Discards every observation. Used by the untraced `sort`/`sort_by` surface.
impl<T> TraceSink<T> for () {
    fn record(&mut self, _pass: PassId, _state: &[T]) {}
}

/// Identifies one observation, the state before the first pass or the state
/// after outer pass `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassId {
    Initial,
    Pass(usize),
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassId::Initial => f.write_str("initial"),
            PassId::Pass(i) => write!(f, "pass {i}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry<T> {
    pub pass: PassId,
    pub state: Vec<T>,
}

/// Collecting sink. A completed run over `n` elements holds `n + 1` entries
/// in pass order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    entries: Vec<TraceEntry<T>>,
}

impl<T> Trace<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TraceEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, TraceEntry<T>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<TraceEntry<T>> {
        self.entries
    }
}

impl<T> Default for Trace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a TraceEntry<T>;
    type IntoIter = slice::Iter<'a, TraceEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> TraceSink<T> for Trace<T> {
    fn record(&mut self, pass: PassId, state: &[T]) {
        self.entries.push(TraceEntry {
            pass,
            state: state.to_vec(),
        });
    }
}

/// Renders each observation as one human-readable line, `<pass>: <state>`.
///
/// A full run over `n` elements produces `n + 1` lines. Write errors are
/// swallowed, the rendered trace is a side channel and never aborts a sort.
pub struct WriteSink<W> {
    out: W,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: fmt::Debug, W: io::Write> TraceSink<T> for WriteSink<W> {
    fn record(&mut self, pass: PassId, state: &[T]) {
        let _ = writeln!(self.out, "{pass}: {state:?}");
    }
}

/// Forwards each observation to the `tracing` facade at DEBUG level.
#[cfg(feature = "tracing")]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl<T: fmt::Debug> TraceSink<T> for TracingSink {
    fn record(&mut self, pass: PassId, state: &[T]) {
        tracing::debug!(pass = %pass, state = ?state, "selection pass");
    }
}
