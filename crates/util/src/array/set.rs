/// Elements of the first slice that appear in every other slice.
///
/// Keeps the first slice's order (including its duplicates). No slices
/// yields an empty vector and a single slice yields a copy of it.
///
/// # Examples
///
/// ```
/// use casoon_util::array::intersection;
///
/// assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[3, 4, 5]]), vec![3]);
/// assert_eq!(intersection(&[&[1, 2]]), vec![1, 2]);
/// assert!(intersection::<i32>(&[]).is_empty());
/// ```
pub fn intersection<T: PartialEq + Clone>(slices: &[&[T]]) -> Vec<T> {
    let Some((first, rest)) = slices.split_first() else {
        return Vec::new();
    };

    first
        .iter()
        .filter(|item| rest.iter().all(|other| other.contains(item)))
        .cloned()
        .collect()
}

/// Elements of `a` that do not appear in `b`, in `a`'s order.
///
/// # Examples
///
/// ```
/// use casoon_util::array::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
/// ```
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_keeps_duplicates_from_first() {
        assert_eq!(intersection(&[&[1, 1, 2], &[1]]), vec![1, 1]);
    }

    #[test]
    fn test_intersection_disjoint() {
        assert!(intersection(&[&["a"], &["b"]]).is_empty());
    }

    #[test]
    fn test_difference_empty_b() {
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_difference_all_removed() {
        assert!(difference(&[1, 2], &[2, 1]).is_empty());
    }
}
