//! Linear algebra on [`Matrix`] values, backed by nalgebra.

use mxc_scalar::{SyntaxError, SyntaxResult};
use nalgebra::{DVector, SymmetricEigen, SVD};

use crate::value::Matrix;

/// Relative tolerance for treating two eigenvalues as one repeated eigenvalue.
const EIGEN_GROUPING_TOLERANCE: f64 = 1.0e-6;

/// Relative tolerance for a singular value to count as zero in a null space.
const NULL_SPACE_TOLERANCE: f64 = 1.0e-8;

/// Relative tolerance for symmetry.
const SYMMETRY_TOLERANCE: f64 = 1.0e-12;

/// Side length of a square matrix, or [`SyntaxError::NotSquare`].
pub fn require_square(operation: &'static str, m: &Matrix) -> SyntaxResult<usize> {
    let (rows, cols) = m.shape();
    if rows == cols {
        Ok(rows)
    } else {
        Err(SyntaxError::not_square(operation, rows, cols))
    }
}

/// [`SyntaxError::NotANumber`] if any entry is infinite or NaN.
///
/// The decompositions below cannot handle such entries.
pub fn require_finite(m: &Matrix) -> SyntaxResult<()> {
    if m.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        tracing::debug!(shape = ?m.shape(), "non-finite entry");
        Err(SyntaxError::NotANumber)
    }
}

pub fn determinant(m: &Matrix) -> SyntaxResult<f64> {
    require_square("determinant", m)?;
    Ok(m.determinant())
}

/// Moore-Penrose pseudo-inverse.
///
/// Singular values at or below `max(rows, cols) * eps * max(s)` are treated as
/// zero, so singular and non-square inputs still have an inverse.
pub fn pseudo_inverse(m: &Matrix) -> SyntaxResult<Matrix> {
    require_finite(m)?;
    let (rows, cols) = m.shape();
    let svd = SVD::new(m.clone(), true, true);
    let largest = svd.singular_values.iter().copied().fold(0.0, f64::max);
    let tolerance = rows.max(cols) as f64 * f64::EPSILON * largest;
    svd.pseudo_inverse(tolerance)
        .map_err(|reason| SyntaxError::Decomposition { reason })
}

/// Raise a square matrix to a real power.
///
/// Whole exponents use repeated squaring; a negative whole exponent raises the
/// pseudo-inverse. Fractional exponents go through the SVD as `U·Σ^p·Vᵀ`.
pub fn matrix_power(base: &Matrix, exponent: f64) -> SyntaxResult<Matrix> {
    let n = require_square("matrix power", base)?;
    if !exponent.is_finite() {
        return Err(SyntaxError::NotANumber);
    }

    if exponent.fract() != 0.0 {
        require_finite(base)?;
        let svd = SVD::new(base.clone(), true, true);
        let u = svd.u.ok_or(SyntaxError::Decomposition {
            reason: "singular value decomposition produced no U",
        })?;
        let v_t = svd.v_t.ok_or(SyntaxError::Decomposition {
            reason: "singular value decomposition produced no Vᵀ",
        })?;
        let sigma = Matrix::from_diagonal(&svd.singular_values.map(|s| s.powf(exponent)));
        return Ok(u * sigma * v_t);
    }

    let operand = if exponent < 0.0 {
        pseudo_inverse(base)?
    } else {
        base.clone()
    };
    // Saturates for absurd exponents; the product has long since overflowed by then.
    let steps = exponent.abs() as u64;
    Ok(power_by_squaring(operand, steps, n))
}

fn power_by_squaring(mut base: Matrix, mut steps: u64, n: usize) -> Matrix {
    let mut acc = Matrix::identity(n, n);
    while steps > 0 {
        if steps & 1 == 1 {
            acc = &acc * &base;
        }
        steps >>= 1;
        if steps > 0 {
            base = &base * &base;
        }
    }
    acc
}

/// Apply `f` to the eigenvalue magnitudes of a diagonalisable matrix.
///
/// Computes `V·diag(f(|λ|))·V⁻¹`. Symmetric input uses the symmetric
/// eigensolver; anything else needs real eigenvalues and a full set of
/// independent eigenvectors.
pub fn spectral_map(
    operation: &'static str,
    m: &Matrix,
    f: impl Fn(f64) -> f64,
) -> SyntaxResult<Matrix> {
    let n = require_square(operation, m)?;
    require_finite(m)?;

    if is_symmetric(m) {
        let eigen = SymmetricEigen::new(m.clone());
        let mapped = Matrix::from_diagonal(&eigen.eigenvalues.map(|l| f(l.abs())));
        return Ok(&eigen.eigenvectors * mapped * eigen.eigenvectors.transpose());
    }

    let eigenvalues = m.eigenvalues().ok_or(SyntaxError::NotDiagonalizable)?;
    let pairs = eigenpairs(m, eigenvalues.as_slice())?;
    let columns: Vec<DVector<f64>> = pairs.iter().map(|(_, v)| v.clone()).collect();
    let vectors = Matrix::from_columns(&columns);
    let inverse = vectors
        .clone()
        .try_inverse()
        .ok_or(SyntaxError::NotDiagonalizable)?;
    let mapped = DVector::from_iterator(n, pairs.iter().map(|(l, _)| f(l.abs())));
    Ok(vectors * Matrix::from_diagonal(&mapped) * inverse)
}

fn is_symmetric(m: &Matrix) -> bool {
    let scale = m.iter().fold(1.0_f64, |acc, x| acc.max(x.abs()));
    let n = m.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| (m[(i, j)] - m[(j, i)]).abs() <= SYMMETRY_TOLERANCE * scale))
}

/// Eigenvectors for each eigenvalue, taken from the null space of `A - λI`.
///
/// Repeated eigenvalues are grouped so their eigenspace is taken once with
/// its full dimension.
fn eigenpairs(m: &Matrix, eigenvalues: &[f64]) -> SyntaxResult<Vec<(f64, DVector<f64>)>> {
    let n = m.nrows();
    let scale = m.iter().fold(1.0_f64, |acc, x| acc.max(x.abs()));

    let mut sorted = eigenvalues.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut pairs = Vec::with_capacity(n);
    let mut i = 0;
    while i < sorted.len() {
        let lambda = sorted[i];
        let mut multiplicity = 1;
        while i + multiplicity < sorted.len()
            && (sorted[i + multiplicity] - lambda).abs()
                <= EIGEN_GROUPING_TOLERANCE * lambda.abs().max(1.0)
        {
            multiplicity += 1;
        }

        let shifted = m - Matrix::identity(n, n) * lambda;
        let svd = SVD::new(shifted, false, true);
        let v_t = svd.v_t.ok_or(SyntaxError::Decomposition {
            reason: "singular value decomposition produced no Vᵀ",
        })?;
        let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
        order.sort_by(|&a, &b| svd.singular_values[a].total_cmp(&svd.singular_values[b]));

        for &row in order.iter().take(multiplicity) {
            if svd.singular_values[row] > NULL_SPACE_TOLERANCE * scale {
                tracing::debug!(lambda, multiplicity, "eigenspace smaller than multiplicity");
                return Err(SyntaxError::NotDiagonalizable);
            }
            pairs.push((lambda, v_t.row(row).transpose()));
        }
        i += multiplicity;
    }
    Ok(pairs)
}
