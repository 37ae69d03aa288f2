use std::cmp::Ordering;

sort_impl!("selection_trace_unstable");

pub fn sort<T: Ord>(data: &mut [T]) {
    selection_trace::sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    selection_trace::sort_by(data, compare);
}
