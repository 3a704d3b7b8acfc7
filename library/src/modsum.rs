//! Maximize `(x_1² + ... + x_k²) mod m`, picking one `x_i` from each list.
//!
//! There are at most a few hundred thousand picks in the intended inputs, so
//! the Cartesian product is searched directly. Squares are reduced modulo `m`
//! up front and elements with the same residue are merged, since they are
//! interchangeable for the result.

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::InputStream;
use crate::iter::cprod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub modulus: u64,
    pub lists: Vec<Vec<i64>>,
}

/// A maximizing pick: the attained value and one element from each list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: u64,
    pub picks: Vec<i64>,
}

impl Problem {
    /// Reads `k m`, then `k` lines of `n_i x_1 ... x_{n_i}`.
    pub fn parse(input: &mut impl InputStream) -> Result<Self> {
        let (k, modulus): (usize, u64) = {
            let mut header = input.line().ok_or(Error::UnexpectedEof)?;
            (header.value()?, header.value()?)
        };
        if modulus == 0 {
            return Err(Error::ZeroModulus);
        }

        let mut lists = Vec::new();
        for index in 0..k {
            let mut line = input.line().ok_or(Error::UnexpectedEof)?;
            let declared: usize = line.value()?;
            let mut list = Vec::new();
            while !line.trim_ascii().is_empty() {
                list.push(line.value()?);
            }
            if list.len() != declared {
                return Err(Error::ListLength {
                    index,
                    declared,
                    found: list.len(),
                });
            }
            lists.push(list);
        }
        Ok(Self { modulus, lists })
    }

    pub fn solve(&self) -> Result<u64> {
        max_sum_of_squares_mod(&self.lists, self.modulus)
    }
}

/// `x² mod m` without overflow for any `i64`.
pub fn square_residue(x: i64, m: u64) -> u64 {
    let r = u128::from(x.unsigned_abs() % m);
    (r * r % u128::from(m)) as u64
}

/// The first pick, in product order, attaining the maximum.
pub fn best_choice(lists: &[Vec<i64>], m: u64) -> Result<Choice> {
    if m == 0 {
        return Err(Error::ZeroModulus);
    }

    let reduced: Vec<Vec<(u64, i64)>> = lists
        .iter()
        .map(|list| {
            let mut residues: Vec<_> = list.iter().map(|&x| (square_residue(x, m), x)).collect();
            residues.sort_by_key(|&(r, _)| r);
            residues.dedup_by_key(|&mut (r, _)| r);
            residues
        })
        .collect();
    debug!(
        k = lists.len(),
        m,
        picks = reduced.iter().map(Vec::len).product::<usize>(),
        "searching cartesian product"
    );

    let mut best: Option<Choice> = None;
    for pick in cprod(&reduced) {
        let value = pick
            .iter()
            .fold(0u128, |acc, &&(r, _)| (acc + u128::from(r)) % u128::from(m)) as u64;
        if best.as_ref().map_or(true, |b| value > b.value) {
            best = Some(Choice {
                value,
                picks: pick.iter().map(|&&(_, x)| x).collect(),
            });
        }
    }
    best.ok_or_else(|| Error::EmptyList(lists.iter().position(Vec::is_empty).unwrap_or_default()))
}

pub fn max_sum_of_squares_mod(lists: &[Vec<i64>], m: u64) -> Result<u64> {
    best_choice(lists, m).map(|choice| choice.value)
}
