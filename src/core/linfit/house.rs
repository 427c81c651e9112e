
/*
--------------------------------------------------------------------------------
   Householder QR least squares for a row-major design matrix
--------------------------------------------------------------------------------
*/

const RANK_EPS: f64 = 1e-10;

/// Solve min ||a x - b|| for a full-column-rank `a` (nrows x ncols, row-major).
///
/// Returns None when the matrix is rank deficient (or has fewer rows than
/// columns), in which case the caller should switch to `pinv_solve`.
pub fn householder_solve(a: &[f64], nrows: usize, ncols: usize, b: &[f64]) -> Option<Vec<f64>> {
    if nrows < ncols || ncols == 0 {
        return None;
    }

    let mut r = a.to_vec();
    let mut qtb = b.to_vec();
    let mut v = vec![0.0; nrows];

    // Overall scale for the rank test
    let mut scale = 0.0;
    for &val in a {
        if val.abs() > scale {
            scale = val.abs();
        }
    }
    if scale == 0.0 {
        return None;
    }

    for col in 0..ncols {
        let mut norm = 0.0;
        for i in col..nrows {
            let x = r[i * ncols + col];
            norm += x * x;
        }
        let norm = norm.sqrt();

        if norm <= RANK_EPS * scale {
            return None;
        }

        // Reflector v = x - alpha e1, alpha chosen to avoid cancellation
        let alpha = if r[col * ncols + col] > 0.0 { -norm } else { norm };
        for i in col..nrows {
            v[i] = r[i * ncols + col];
        }
        v[col] -= alpha;

        let mut vtv = 0.0;
        for i in col..nrows {
            vtv += v[i] * v[i];
        }
        if vtv == 0.0 {
            return None;
        }

        // Apply H = I - 2 v v' / v'v to the remaining columns and to b
        for j in col..ncols {
            let mut dot = 0.0;
            for i in col..nrows {
                dot += v[i] * r[i * ncols + j];
            }
            let fac = 2.0 * dot / vtv;
            for i in col..nrows {
                r[i * ncols + j] -= fac * v[i];
            }
        }

        let mut dot = 0.0;
        for i in col..nrows {
            dot += v[i] * qtb[i];
        }
        let fac = 2.0 * dot / vtv;
        for i in col..nrows {
            qtb[i] -= fac * v[i];
        }

        r[col * ncols + col] = alpha;
    }

    // Back substitution through the triangular factor
    let mut soln = vec![0.0; ncols];
    for j in (0..ncols).rev() {
        let mut sum = qtb[j];
        for k in (j + 1)..ncols {
            sum -= r[j * ncols + k] * soln[k];
        }
        let diag = r[j * ncols + j];
        if diag.abs() <= RANK_EPS * scale {
            return None;
        }
        soln[j] = sum / diag;
    }

    if soln.iter().any(|x| !x.is_finite()) {
        return None;
    }

    Some(soln)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_square_system() {
        // [2 0; 0 3] x = [4, 9]
        let a = vec![2.0, 0.0, 0.0, 3.0];
        let b = vec![4.0, 9.0];
        let x = householder_solve(&a, 2, 2, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_overdetermined_line_fit() {
        // y = 2x + 3 through a [1 | x] design
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut a = Vec::new();
        let mut b = Vec::new();
        for &x in xs.iter() {
            a.push(1.0);
            a.push(x);
            b.push(2.0 * x + 3.0);
        }
        let soln = householder_solve(&a, xs.len(), 2, &b).unwrap();
        assert!((soln[0] - 3.0).abs() < 1e-8);
        assert!((soln[1] - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_rank_deficient_returns_none() {
        // Second column duplicates the first
        let a = vec![
            1.0, 1.0, //
            2.0, 2.0, //
            3.0, 3.0,
        ];
        let b = vec![1.0, 2.0, 3.0];
        assert!(householder_solve(&a, 3, 2, &b).is_none());
    }

    #[test]
    fn test_underdetermined_returns_none() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0];
        assert!(householder_solve(&a, 1, 3, &b).is_none());
    }

    #[test]
    fn test_zero_column_returns_none() {
        let a = vec![
            1.0, 0.0, //
            2.0, 0.0, //
            3.0, 0.0,
        ];
        let b = vec![1.0, 2.0, 3.0];
        assert!(householder_solve(&a, 3, 2, &b).is_none());
    }
}
