// src/ops/linalg/gauss.rs

//! Gaussian elimination over the augmented matrix `[A | b]`.
//!
//! Float and complex kinds eliminate with `factor = a[i,k] / a[k,k]` and treat entries whose
//! magnitude is within epsilon as zero. Integer kinds are widened to `i128` and eliminated
//! with Bareiss' fraction-free update
//! `row_i = (pivot * row_i - a[i,k] * row_k) / previous_pivot`, where the division is exact
//! and entries stay bounded by the minors of the input. Results are narrowed back with a
//! checked conversion, so unsigned kinds may go negative in between.
//!
//! Rank is approximated by counting rows that keep a non-negligible entry after
//! triangularization. Pivot rows are tied to the column index, so a column without a usable
//! pivot leaves its diagonal slot empty; for some rank-deficient inputs (e.g. `[[0,1],[0,1]]`)
//! this proxy overcounts and back-substitution reports `ZeroPivot`.

use crate::error::StridaError;
use crate::ops::traits::{Number, NumberKind};
use crate::tensor::{Matrix, Vector};
use log::{debug, trace, warn};
use std::cmp::Ordering;

/// How triangularization picks the pivot row for column `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Keep the diagonal unless it is negligible, then take the first usable row below.
    #[default]
    FirstNonNegligible,
    /// Partial pivoting: the usable row with the largest magnitude in column `k`.
    /// Ties keep the earliest row.
    LargestMagnitude,
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions<T: Number> {
    pub pivot: PivotStrategy,
    /// Values whose magnitude is within `epsilon` count as zero. Integer kinds ignore it
    /// and test for exact zero.
    pub epsilon: T,
}

impl<T: Number> Default for SolveOptions<T> {
    fn default() -> Self {
        SolveOptions {
            pivot: PivotStrategy::default(),
            epsilon: T::epsilon(),
        }
    }
}

impl<T: Number> SolveOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    fn tolerance(&self) -> T {
        if T::KIND.is_integer() {
            T::zero()
        } else {
            self.epsilon
        }
    }
}

fn overflow(operation: &str) -> StridaError {
    StridaError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

fn select_pivot<T: Number>(m: &Matrix<T>, k: usize, pivot: PivotStrategy, eps: T) -> Option<usize> {
    let usable = |i: &usize| !m.get2(*i, k).is_negligible_within(eps);
    match pivot {
        PivotStrategy::FirstNonNegligible => (k..m.rows()).find(usable),
        PivotStrategy::LargestMagnitude => {
            let mut best: Option<usize> = None;
            for i in (k..m.rows()).filter(usable) {
                let wins = match best {
                    None => true,
                    Some(b) => {
                        let candidate = m.get2(i, k).magnitude();
                        candidate.compare_magnitude(m.get2(b, k).magnitude()) == Ordering::Greater
                    }
                };
                if wins {
                    best = Some(i);
                }
            }
            best
        }
    }
}

fn eliminate_approx<T: Number>(m: &mut Matrix<T>, i: usize, k: usize, pivot: T, lead: T) {
    let factor = lead / pivot;
    m.set2(i, k, T::zero());
    for j in k + 1..m.cols() {
        let value = m.get2(i, j) - factor * m.get2(k, j);
        m.set2(i, j, value);
    }
}

/// One Bareiss update of row `i` against pivot row `k`. Rows whose lead is already zero are
/// still rescaled, which keeps every entry an exact minor of the input.
fn eliminate_bareiss<T: Number>(
    m: &mut Matrix<T>,
    i: usize,
    k: usize,
    pivot: T,
    previous: T,
) -> Result<(), StridaError> {
    let lead = m.get2(i, k);
    m.set2(i, k, T::zero());
    for j in k + 1..m.cols() {
        let value = pivot
            .try_mul(m.get2(i, j))
            .zip(lead.try_mul(m.get2(k, j)))
            .and_then(|(x, y)| x.try_sub(y))
            .and_then(|d| d.exact_quotient(previous))
            .ok_or_else(|| overflow("upper_triangular"))?;
        m.set2(i, j, value);
    }
    Ok(())
}

/// Brings `m` to upper-triangular form in place.
fn triangularize<T: Number>(
    m: &mut Matrix<T>,
    strategy: PivotStrategy,
    eps: T,
) -> Result<(), StridaError> {
    let rows = m.rows();
    let mut previous = T::one();

    for k in 0..rows.min(m.cols()) {
        let Some(p) = select_pivot(m, k, strategy, eps) else {
            continue;
        };
        if p != k {
            trace!("column {}: swapping rows {} and {}", k, k, p);
            m.swap_rows(k, p)?;
        }

        let pivot = m.get2(k, k);
        for i in k + 1..rows {
            match T::KIND {
                NumberKind::SignedInteger | NumberKind::UnsignedInteger => {
                    eliminate_bareiss(m, i, k, pivot, previous)?
                }
                NumberKind::Float | NumberKind::Complex => {
                    let lead = m.get2(i, k);
                    if !lead.is_negligible_within(eps) {
                        eliminate_approx(m, i, k, pivot, lead);
                    }
                }
            }
        }
        previous = pivot;
    }
    Ok(())
}

/// Copies an integer matrix into the `i128` working type.
fn widen<T: Number>(m: &Matrix<T>, operation: &str) -> Result<Matrix<i128>, StridaError> {
    let mut wide = Matrix::new(m.rows(), m.cols());
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            let value = m.get2(i, j).to_wide().ok_or_else(|| overflow(operation))?;
            wide.set2(i, j, value);
        }
    }
    Ok(wide)
}

fn narrow<T: Number>(wide: &Matrix<i128>, operation: &str) -> Result<Matrix<T>, StridaError> {
    let mut m = Matrix::new(wide.rows(), wide.cols());
    for i in 0..wide.rows() {
        for j in 0..wide.cols() {
            let value = T::from_wide(wide.get2(i, j)).ok_or_else(|| overflow(operation))?;
            m.set2(i, j, value);
        }
    }
    Ok(m)
}

/// Rows with at least one non-negligible entry among the first `cols` columns.
fn count_nonzero_rows<T: Number>(m: &Matrix<T>, cols: usize, eps: T) -> usize {
    (0..m.rows())
        .filter(|&i| (0..cols).any(|j| !m.get2(i, j).is_negligible_within(eps)))
        .count()
}

fn augment<T: Number>(a: &Matrix<T>, b: &Vector<T>) -> Matrix<T> {
    let (rows, cols) = (a.rows(), a.cols());
    let mut aug = Matrix::new(rows, cols + 1);
    for i in 0..rows {
        for j in 0..cols {
            aug.set2(i, j, a.get2(i, j));
        }
        aug.set2(i, cols, b.get1(i));
    }
    aug
}

fn back_substitute_approx<T: Number>(tri: &Matrix<T>, eps: T) -> Result<Vector<T>, StridaError> {
    let n = tri.cols() - 1;
    let mut x = Vector::new(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in i + 1..n {
            sum += tri.get2(i, j) * x.get1(j);
        }
        let diag = tri.get2(i, i);
        if diag.is_negligible_within(eps) {
            warn!("solve_gauss: zero pivot on row {} after rank checks passed", i);
            return Err(StridaError::ZeroPivot { row: i });
        }
        x.set1(i, (tri.get2(i, n) - sum) / diag);
    }
    Ok(x)
}

fn back_substitute_exact<T: Number>(tri: &Matrix<T>) -> Result<Vector<T>, StridaError> {
    let n = tri.cols() - 1;
    let mut x = Vector::new(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in i + 1..n {
            sum = tri
                .get2(i, j)
                .try_mul(x.get1(j))
                .and_then(|p| sum.try_add(p))
                .ok_or_else(|| overflow("solve_gauss"))?;
        }
        let diag = tri.get2(i, i);
        if diag.is_zero() {
            warn!("solve_gauss: zero pivot on row {} after rank checks passed", i);
            return Err(StridaError::ZeroPivot { row: i });
        }
        let rhs = tri
            .get2(i, n)
            .try_sub(sum)
            .ok_or_else(|| overflow("solve_gauss"))?;
        let value = rhs.exact_quotient(diag).ok_or(StridaError::NoSolution)?;
        x.set1(i, value);
    }
    Ok(x)
}

/// Returns an upper-triangular copy of `m` using the default options.
pub fn upper_triangular<T: Number>(m: &Matrix<T>) -> Result<Matrix<T>, StridaError> {
    upper_triangular_with(m, &SolveOptions::default())
}

/// Returns an upper-triangular copy of `m`; `m` itself is not modified.
///
/// # Errors
/// `ArithmeticOverflow` if integer elimination leaves `i128`, or if a triangular entry does
/// not fit the input kind (a negative entry of an unsigned matrix, for instance).
pub fn upper_triangular_with<T: Number>(
    m: &Matrix<T>,
    options: &SolveOptions<T>,
) -> Result<Matrix<T>, StridaError> {
    if T::KIND.is_integer() {
        let mut wide = widen(m, "upper_triangular")?;
        triangularize(&mut wide, options.pivot, 0)?;
        return narrow(&wide, "upper_triangular");
    }
    let mut res = Matrix::from_tensor(m.contiguous())?;
    triangularize(&mut res, options.pivot, options.tolerance())?;
    Ok(res)
}

pub fn rank_of_matrix<T: Number>(m: &Matrix<T>) -> Result<usize, StridaError> {
    rank_of_matrix_with(m, &SolveOptions::default())
}

/// Counts the rows that keep a non-negligible entry once `m` is triangularized.
///
/// The result never exceeds `min(rows, cols)` and does not depend on row order for
/// well-conditioned inputs. It is a proxy, not a singular-value rank.
pub fn rank_of_matrix_with<T: Number>(
    m: &Matrix<T>,
    options: &SolveOptions<T>,
) -> Result<usize, StridaError> {
    if T::KIND.is_integer() {
        let mut wide = widen(m, "rank_of_matrix")?;
        triangularize(&mut wide, options.pivot, 0)?;
        return Ok(count_nonzero_rows(&wide, wide.cols(), 0));
    }
    let tri = upper_triangular_with(m, options)?;
    Ok(count_nonzero_rows(&tri, tri.cols(), options.tolerance()))
}

/// Solves `A x = b` with the default options.
pub fn solve_gauss<T: Number>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, StridaError> {
    solve_gauss_with(a, b, &SolveOptions::default())
}

/// Solves `A x = b` by Gaussian elimination.
///
/// # Errors
/// - `ShapeMismatch` if `b.len() != a.rows()`.
/// - `NoSolution` if the system is inconsistent, or (integer kinds) has no exact solution
///   representable in the kind.
/// - `InfinitelyMany` if the coefficient rank is below the number of unknowns.
/// - `ArithmeticOverflow` if exact integer arithmetic leaves `i128`.
/// - `ZeroPivot` if back-substitution meets an empty diagonal slot the rank proxy did not
///   detect. This is an internal-consistency fault, not a property of the system.
pub fn solve_gauss_with<T: Number>(
    a: &Matrix<T>,
    b: &Vector<T>,
    options: &SolveOptions<T>,
) -> Result<Vector<T>, StridaError> {
    let (rows, cols) = (a.rows(), a.cols());
    if rows != b.len() {
        return Err(StridaError::ShapeMismatch {
            expected: vec![rows],
            actual: b.shape().to_vec(),
            operation: "solve_gauss".to_string(),
        });
    }

    let aug = augment(a, b);
    if T::KIND.is_integer() {
        let mut tri = widen(&aug, "solve_gauss")?;
        triangularize(&mut tri, options.pivot, 0)?;
        classify(&tri, cols, 0)?;
        let wide = back_substitute_exact(&tri)?;
        // A solution outside the kind's range is not a solution in that kind.
        return (0..cols)
            .map(|i| T::from_wide(wide.get1(i)))
            .collect::<Option<Vec<T>>>()
            .map(Vector::from_vec)
            .ok_or(StridaError::NoSolution);
    }

    let mut tri = aug;
    let eps = options.tolerance();
    triangularize(&mut tri, options.pivot, eps)?;
    classify(&tri, cols, eps)?;
    back_substitute_approx(&tri, eps)
}

/// Rejects inconsistent and underdetermined systems from the triangular augmented matrix.
fn classify<T: Number>(tri: &Matrix<T>, cols: usize, eps: T) -> Result<(), StridaError> {
    let rank_a = count_nonzero_rows(tri, cols, eps);
    let rank_aug = count_nonzero_rows(tri, cols + 1, eps);
    debug!(
        "solve_gauss: rank(A) = {}, rank([A|b]) = {}, unknowns = {}",
        rank_a, rank_aug, cols
    );

    if rank_a < rank_aug {
        return Err(StridaError::NoSolution);
    }
    if rank_a < cols {
        return Err(StridaError::InfinitelyMany {
            rank: rank_a,
            unknowns: cols,
        });
    }
    Ok(())
}

impl<T: Number> Matrix<T> {
    /// See [`upper_triangular`].
    pub fn upper_triangular(&self) -> Result<Matrix<T>, StridaError> {
        upper_triangular(self)
    }

    /// See [`rank_of_matrix`]. Not to be confused with [`Tensor::rank`](crate::Tensor::rank),
    /// the number of axes.
    pub fn matrix_rank(&self) -> Result<usize, StridaError> {
        rank_of_matrix(self)
    }

    /// See [`solve_gauss`].
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, StridaError> {
        solve_gauss(self, b)
    }
}

#[cfg(test)]
#[path = "gauss_test.rs"]
mod tests;
