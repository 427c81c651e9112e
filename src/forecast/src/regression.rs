use crate::error::ForecastError;
use crate::models::FittedModel;

/// Ordinary least squares with an intercept. No regularization, no feature
/// scaling; column order is the caller's contract.
#[derive(Debug, Default)]
pub struct LinearModel {
    fitted: Option<FittedModel>,
}

impl LinearModel {
    pub fn new() -> Self {
        LinearModel { fitted: None }
    }

    /// Fit on a row-major `x` (ncases x nvars) against `y`.
    ///
    /// Tries a Householder QR solve first and switches to the minimum-norm
    /// pseudo-inverse when the design is rank deficient, e.g. when a
    /// sentiment interaction column is identically zero.
    pub fn fit(&mut self, x: &[f64], y: &[f64], nvars: usize) -> Result<&FittedModel, ForecastError> {
        debug_assert_eq!(x.len(), y.len() * nvars);

        let ncases = y.len();
        if ncases == 0 {
            return Err(ForecastError::NumericInstability(
                "empty training set".to_string(),
            ));
        }

        // Design matrix with a leading column of ones for the intercept
        let ncols = nvars + 1;
        let mut design = Vec::with_capacity(ncases * ncols);
        for case in 0..ncases {
            design.push(1.0);
            design.extend_from_slice(&x[case * nvars..(case + 1) * nvars]);
        }

        let coefs = linfit::householder_solve(&design, ncases, ncols, y)
            .or_else(|| linfit::pinv_solve(&design, ncases, ncols, y))
            .ok_or_else(|| {
                ForecastError::NumericInstability(
                    "solve failed after pseudo-inverse fallback".to_string(),
                )
            })?;

        Ok(self.fitted.insert(FittedModel {
            intercept: coefs[0],
            coefficients: coefs[1..].to_vec(),
        }))
    }

    /// Predict one value per row of `x`. Fails with ModelNotFitted until a
    /// fit has succeeded.
    pub fn predict(&self, x: &[f64], nvars: usize) -> Result<Vec<f64>, ForecastError> {
        let model = self.fitted.as_ref().ok_or(ForecastError::ModelNotFitted)?;
        Ok(x.chunks(nvars).map(|row| model.predict_row(row)).collect())
    }

    pub fn fitted(&self) -> Option<&FittedModel> {
        self.fitted.as_ref()
    }
}
