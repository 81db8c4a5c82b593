/// Split `items` into consecutive groups of at most `size`, preserving order.
///
/// The last group may be shorter. An empty input yields no groups.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size).map(<[T]>::to_vec).collect()
}
