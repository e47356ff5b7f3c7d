use rand::seq::SliceRandom;
use rand::Rng;

/// Split a slice into consecutive chunks of `size` items.
///
/// The last chunk may be shorter. A `size` of zero yields no chunks.
///
/// # Examples
///
/// ```
/// use casoon_util::array::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5, 6], 2), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 3), vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Return a shuffled copy of `items` using the thread-local generator.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(&mut rand::thread_rng(), items)
}

/// Return a shuffled copy of `items` (Fisher–Yates) using `rng`.
///
/// # Examples
///
/// ```
/// use casoon_util::array::shuffle_with;
/// use casoon_util::random::seeded_rng;
///
/// let items = [1, 2, 3, 4, 5];
/// let a = shuffle_with(&mut seeded_rng(1), &items);
/// let b = shuffle_with(&mut seeded_rng(1), &items);
/// assert_eq!(a, b);
/// assert_eq!(items, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Pick one random item, or `None` if the slice is empty.
pub fn random_item<T>(items: &[T]) -> Option<&T> {
    random_item_with(&mut rand::thread_rng(), items)
}

/// Pick one random item using `rng`.
pub fn random_item_with<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Pick `count` items from distinct positions, in random order.
///
/// Returns at most `items.len()` items.
pub fn random_items<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    random_items_with(&mut rand::thread_rng(), items, count)
}

/// Pick `count` items from distinct positions using `rng`.
///
/// # Examples
///
/// ```
/// use casoon_util::array::random_items_with;
/// use casoon_util::random::seeded_rng;
///
/// let picked = random_items_with(&mut seeded_rng(5), &[1, 2, 3, 4, 5], 2);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn random_items_with<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    count: usize,
) -> Vec<T> {
    let mut shuffled = shuffle_with(rng, items);
    shuffled.truncate(count.min(items.len()));
    shuffled
}
