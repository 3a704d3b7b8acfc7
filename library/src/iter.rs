/// Every way of picking one element from each list, as index tuples in
/// lexicographic order (the last list varies fastest).
///
/// No lists yields a single empty pick; any empty list yields nothing.
pub fn cprod_indices(lens: Vec<usize>) -> impl Iterator<Item = Vec<usize>> {
    let mut cursor = (!lens.contains(&0)).then(|| vec![0; lens.len()]);
    std::iter::from_fn(move || {
        let idx = cursor.take()?;
        let mut next = idx.clone();
        if step_odometer(&mut next, &lens) {
            cursor = Some(next);
        }
        Some(idx)
    })
}

fn step_odometer(idx: &mut [usize], lens: &[usize]) -> bool {
    for (i, &len) in idx.iter_mut().zip(lens).rev() {
        *i += 1;
        if *i < len {
            return true;
        }
        *i = 0;
    }
    false
}

/// [`cprod_indices`] resolved against the lists themselves.
pub fn cprod<'a, T>(lists: &'a [Vec<T>]) -> impl Iterator<Item = Vec<&'a T>> + 'a {
    let lens = lists.iter().map(Vec::len).collect();
    cprod_indices(lens).map(move |idx| idx.iter().zip(lists).map(|(&i, list)| &list[i]).collect())
}
