use crate::trace::{PassId, TraceSink};

/// Selection sort over `v[..n]`, reporting the prefix state to `sink` before
/// the first pass and after every pass.
///
/// The caller has already checked `n <= v.len()`.
///
/// Runs `n` outer passes rather than the usual `n - 1`. The final pass can
/// only produce an identity swap, but it still reports an entry, and the
/// `n + 1` entry count is part of the observable contract.
pub(crate) fn select_sort_prefix<T, F, S>(v: &mut [T], n: usize, is_less: &mut F, sink: &mut S)
where
    F: FnMut(&T, &T) -> bool,
    S: TraceSink<T>,
{
    debug_assert!(n <= v.len());

    sink.record(PassId::Initial, &v[..n]);

    for i in 0..n {
        let mut min = i;

        // Scan for the smallest remaining element by comparing the running
        // minimum against its successor. `min` is updated before the next
        // comparison, so reading `v[min]` mid-scan always sees the current
        // candidate. Strict comparison, the first occurrence of the minimum
        // wins the scan.
        for j in i..n - 1 {
            if is_less(&v[j + 1], &v[min]) {
                min = j + 1;
            }
        }

        v.swap(i, min);

        sink.record(PassId::Pass(i), &v[..n]);
    }
}
