//! Row-parallel fill helpers for the per-node and per-edge queries.
//!
//! Every caller writes only to its own row (or its own vector slot) and reads
//! the shared, immutable topology, so the work splits without locks. With the
//! `rayon` feature the rows are distributed over the rayon pool; without it
//! they run in order on the calling thread. Results are identical either way.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::data::matrix::Matrix;

/// Call `fill(r, row)` for every row `r` of `matrix`.
pub fn fill_rows<T, F>(matrix: &mut Matrix<T>, fill: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    let cols = matrix.cols();
    if cols == 0 {
        return;
    }
    #[cfg(feature = "rayon")]
    matrix
        .as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, row)| fill(r, row));
    #[cfg(not(feature = "rayon"))]
    matrix
        .as_mut_slice()
        .chunks_mut(cols)
        .enumerate()
        .for_each(|(r, row)| fill(r, row));
}

/// Collect `f(i)` for `i` in `0..n`, in index order.
pub fn map_indices<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        (0..n).into_par_iter().map(f).collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..n).map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_filled_by_index() {
        let mut m = Matrix::<usize>::zeros(3, 2);
        fill_rows(&mut m, |r, row| {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = r * 10 + c;
            }
        });
        assert_eq!(m.into_vec(), vec![0, 1, 10, 11, 20, 21]);
    }

    #[test]
    fn empty_matrix_is_untouched() {
        let mut m = Matrix::<u8>::zeros(0, 0);
        fill_rows(&mut m, |_, _| panic!("no rows to fill"));
        assert_eq!(m.rows(), 0);
    }

    #[test]
    fn map_indices_keeps_order() {
        assert_eq!(map_indices(4, |i| i * i), vec![0, 1, 4, 9]);
    }
}
