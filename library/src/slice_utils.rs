pub trait SliceExt<'a, T: 'a> {
    fn as_slice(&'a self) -> &'a [T];

    /// Half-open `[start, end)` ranges of maximal runs where `pred` holds
    /// between neighbours.
    fn group_indices_by(
        &'a self,
        mut pred: impl 'a + FnMut(&T, &T) -> bool,
    ) -> impl 'a + Iterator<Item = [usize; 2]> {
        let xs = self.as_slice();
        let mut i = 0;
        std::iter::from_fn(move || {
            if i == xs.len() {
                return None;
            }

            let mut j = i + 1;
            while j < xs.len() && pred(&xs[j - 1], &xs[j]) {
                j += 1;
            }
            let res = [i, j];
            i = j;
            Some(res)
        })
    }

    fn group_indices_by_key<K: PartialEq>(
        &'a self,
        mut key: impl 'a + FnMut(&T) -> K,
    ) -> impl 'a + Iterator<Item = [usize; 2]> {
        self.group_indices_by(move |a, b| key(a) == key(b))
    }
}

impl<'a, T: 'a> SliceExt<'a, T> for [T] {
    fn as_slice(&'a self) -> &'a [T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_by_key() {
        let xs = [1, 3, 2, 4, 6, 5];
        let runs: Vec<_> = xs.group_indices_by_key(|x| x % 2).collect();
        assert_eq!(runs, [[0, 2], [2, 5], [5, 6]]);
    }

    #[test]
    fn empty_slice_has_no_runs() {
        let xs: [u8; 0] = [];
        assert_eq!(xs.group_indices_by(|_, _| true).count(), 0);
    }
}
