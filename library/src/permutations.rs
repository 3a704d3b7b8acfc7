//! Lexicographic successor of a sequence.
//!
//! Everything here works on a slice of any `T: Ord`, duplicates included.
//! The next arrangement is found in three linear passes: locate the pivot in
//! front of the longest non-increasing suffix, swap it with the smallest
//! suffix element that still exceeds it, and reverse the suffix back into
//! ascending order.

use std::iter::FusedIterator;

use tracing::trace;

/// Rightmost `i` with `xs[i] < xs[i + 1]`.
///
/// `None` means `xs` is non-increasing, i.e. already the last arrangement of
/// its multiset. Slices shorter than two never have a pivot.
pub fn pivot_index<T: Ord>(xs: &[T]) -> Option<usize> {
    xs.windows(2).rposition(|w| w[0] < w[1])
}

/// Rightmost `j > pivot` with `xs[j] > xs[pivot]`.
///
/// `pivot` must come from [`pivot_index`]: the suffix after it is
/// non-increasing and its first element exceeds `xs[pivot]`, so such a `j`
/// always exists and the elements greater than the pivot form a prefix of the
/// suffix.
pub fn successor_index<T: Ord>(xs: &[T], pivot: usize) -> usize {
    debug_assert!(xs[pivot] < xs[pivot + 1]);
    pivot + xs[pivot + 1..].partition_point(|x| &xs[pivot] < x)
}

fn step_at<T: Ord>(xs: &mut [T], pivot: usize) {
    let successor = successor_index(xs, pivot);
    trace!(pivot, successor, len = xs.len(), "advancing permutation");
    xs.swap(pivot, successor);
    xs[pivot + 1..].reverse();
}

/// Rearranges `xs` into its lexicographic successor.
///
/// Returns `false` and leaves `xs` untouched if it is already the last
/// arrangement.
pub fn advance<T: Ord>(xs: &mut [T]) -> bool {
    match pivot_index(xs) {
        Some(pivot) => {
            step_at(xs, pivot);
            true
        }
        None => false,
    }
}

/// Like [`advance`], but the last arrangement wraps around to the first one
/// (sorted ascending), in which case `false` is returned.
pub fn advance_or_wrap<T: Ord>(xs: &mut [T]) -> bool {
    match pivot_index(xs) {
        Some(pivot) => {
            step_at(xs, pivot);
            true
        }
        None => {
            xs.reverse();
            false
        }
    }
}

/// The smallest arrangement of `xs` that is strictly greater than `xs`.
pub fn next_permutation<T: Ord + Clone>(xs: &[T]) -> Option<Vec<T>> {
    let pivot = pivot_index(xs)?;
    let mut next = xs.to_vec();
    step_at(&mut next, pivot);
    Some(next)
}

/// [`next_permutation`] over the characters of a string.
pub fn next_lex_permutation(word: &str) -> Option<String> {
    let mut chars: Vec<char> = word.chars().collect();
    advance(&mut chars).then(|| chars.into_iter().collect())
}

/// Every distinct arrangement of a multiset, in increasing order.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    current: Option<Vec<T>>,
}

impl<T: Ord> Permutations<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort();
        Self {
            current: Some(items),
        }
    }
}

impl<T: Ord + Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let current = self.current.take()?;
        self.current = next_permutation(&current);
        Some(current)
    }
}

impl<T: Ord + Clone> FusedIterator for Permutations<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
        let mut xs = xs.to_vec();
        xs.sort();
        xs
    }

    // all words of length n over 0..alphabet, in lexicographic order
    fn words(n: usize, alphabet: u8) -> impl Iterator<Item = Vec<u8>> {
        let a = alphabet as usize;
        (0..a.pow(n as u32)).map(move |mut code| {
            let mut w = vec![0; n];
            for k in (0..n).rev() {
                w[k] = (code % a) as u8;
                code /= a;
            }
            w
        })
    }

    fn next_naive(xs: &[u8], alphabet: u8) -> Option<Vec<u8>> {
        let key = sorted(xs);
        words(xs.len(), alphabet)
            .skip_while(|w| w.as_slice() <= xs)
            .find(|w| sorted(w) == key)
    }

    fn multinomial(xs: &[u8]) -> usize {
        let fact = |k: usize| (1..=k).product::<usize>();
        let mut counts = [0usize; 256];
        for &x in xs {
            counts[x as usize] += 1;
        }
        counts.iter().fold(fact(xs.len()), |acc, &c| acc / fact(c))
    }

    #[test]
    fn known_cases() {
        assert_eq!(next_lex_permutation("aba").as_deref(), Some("baa"));
        assert_eq!(next_lex_permutation("1234").as_deref(), Some("1243"));
        assert_eq!(next_lex_permutation("4321"), None);
        assert_eq!(next_lex_permutation("4231").as_deref(), Some("4312"));
        assert_eq!(next_lex_permutation("1452").as_deref(), Some("1524"));
        assert_eq!(next_lex_permutation("1442").as_deref(), Some("2144"));
        assert_eq!(next_lex_permutation("158476531").as_deref(), Some("158513467"));
        assert_eq!(next_lex_permutation("14420").as_deref(), Some("20144"));
    }

    #[test]
    fn short_and_flat_inputs_have_no_successor() {
        assert_eq!(next_lex_permutation(""), None);
        assert_eq!(next_lex_permutation("z"), None);
        assert_eq!(next_lex_permutation("aaaa"), None);
        assert_eq!(next_permutation::<i32>(&[]), None);
        assert_eq!(pivot_index(&[7, 7, 7]), None);
    }

    #[test]
    fn non_ascii_chars_compare_as_scalar_values() {
        assert_eq!(next_lex_permutation("éa").as_deref(), None);
        assert_eq!(next_lex_permutation("aé").as_deref(), Some("éa"));
    }

    #[test]
    fn pivot_and_successor_of_duplicate_suffix() {
        let xs = [1, 4, 4, 2];
        assert_eq!(pivot_index(&xs), Some(0));
        assert_eq!(successor_index(&xs, 0), 3);

        let xs = [1, 2, 3, 3];
        assert_eq!(pivot_index(&xs), Some(1));
        assert_eq!(successor_index(&xs, 1), 3);
    }

    #[test]
    fn advance_leaves_last_arrangement_untouched() {
        let mut xs = [4, 3, 2, 1];
        assert!(!advance(&mut xs));
        assert_eq!(xs, [4, 3, 2, 1]);
    }

    #[test]
    fn advance_or_wrap_returns_to_first_arrangement() {
        let mut xs = [3, 2, 2, 1];
        assert!(!advance_or_wrap(&mut xs));
        assert_eq!(xs, [1, 2, 2, 3]);
        assert!(advance_or_wrap(&mut xs));
        assert_eq!(xs, [1, 2, 3, 2]);
    }

    #[test]
    fn input_is_not_mutated() {
        let xs = vec![1, 2, 3];
        let next = next_permutation(&xs);
        assert_eq!(xs, [1, 2, 3]);
        assert_eq!(next, Some(vec![1, 3, 2]));
    }

    #[test]
    fn agrees_with_naive_search() {
        for alphabet in 1..=3 {
            for n in 0..=6 {
                for w in words(n, alphabet) {
                    assert_eq!(next_permutation(&w), next_naive(&w, alphabet), "{:?}", w);
                }
            }
        }
    }

    #[test]
    fn permutations_visit_each_arrangement_once() {
        for w in [vec![], vec![0], vec![1, 1, 2], vec![3, 1, 2, 0], vec![2, 0, 2, 1, 0, 2]] {
            let perms: Vec<_> = Permutations::new(w.clone()).collect();
            assert_eq!(perms.len(), multinomial(&w), "{:?}", w);
            assert!(perms.windows(2).all(|p| p[0] < p[1]));
            assert_eq!(perms.first(), Some(&sorted(&w)));
        }
    }

    #[test]
    fn permutations_of_abc() {
        let perms: Vec<String> = Permutations::new("cab".chars().collect())
            .map(|p| p.into_iter().collect())
            .collect();
        assert_eq!(perms, ["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    proptest! {
        #[test]
        fn successor_is_a_greater_rearrangement(xs in proptest::collection::vec(0u8..4, 0..12)) {
            match next_permutation(&xs) {
                Some(next) => {
                    prop_assert!(next > xs);
                    prop_assert_eq!(sorted(&next), sorted(&xs));
                }
                None => prop_assert!(xs.windows(2).all(|w| w[0] >= w[1])),
            }
        }

        #[test]
        fn in_place_matches_pure(xs in proptest::collection::vec(any::<i16>(), 0..16)) {
            let mut ys = xs.clone();
            let moved = advance(&mut ys);
            match next_permutation(&xs) {
                Some(next) => {
                    prop_assert!(moved);
                    prop_assert_eq!(ys, next);
                }
                None => {
                    prop_assert!(!moved);
                    prop_assert_eq!(ys, xs);
                }
            }
        }
    }
}
