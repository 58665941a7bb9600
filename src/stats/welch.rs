//! Welch's two-sample t-test (unequal variances, two-tailed).
//!
//! The statistic divides the difference of sample means by the pooled
//! standard error `sqrt(va/na + vb/nb)`; degrees of freedom use the
//! Welch–Satterthwaite approximation and the p-value is the two-tailed tail
//! mass of Student's t at that df.

use super::{mean, sample_variance};
use log::warn;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;

/// Outcome of a two-sample Welch test.
#[derive(Clone, Copy, Debug)]
pub struct WelchTTest {
    /// t statistic; NaN or infinite when the pooled standard error is zero.
    pub statistic: f64,
    /// Two-tailed p-value; NaN when the statistic is NaN.
    pub p_value: f64,
    /// Welch–Satterthwaite degrees of freedom; NaN in the degenerate case.
    pub df: f64,
}

impl fmt::Display for WelchTTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t-statistic={:.6}, p-value={:.6}, df={:.2}",
            self.statistic, self.p_value, self.df
        )
    }
}

/// Run Welch's t-test on two samples.
///
/// Both samples need at least two values for the variance estimates. When
/// neither sample varies, the statistic is 0/0: the result carries NaN for
/// equal means (matching the usual library convention for identical
/// zero-variance inputs) and an infinite statistic with p = 0 for distinct
/// means.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTTest, String> {
    if a.len() < 2 || b.len() < 2 {
        return Err(format!(
            "Welch's t-test needs at least two samples per side, got {} and {}",
            a.len(),
            b.len()
        ));
    }
    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (ma, mb) = (mean(a), mean(b));
    let (va, vb) = (sample_variance(a), sample_variance(b));

    let sea = va / na;
    let seb = vb / nb;
    let pooled_se = (sea + seb).sqrt();
    if pooled_se == 0.0 {
        warn!("both samples have zero variance, test is degenerate");
        let statistic = match ma.partial_cmp(&mb) {
            Some(std::cmp::Ordering::Greater) => f64::INFINITY,
            Some(std::cmp::Ordering::Less) => f64::NEG_INFINITY,
            _ => f64::NAN,
        };
        let p_value = if statistic.is_nan() { f64::NAN } else { 0.0 };
        return Ok(WelchTTest {
            statistic,
            p_value,
            df: f64::NAN,
        });
    }

    let statistic = (ma - mb) / pooled_se;
    let df = (sea + seb).powi(2) / (sea.powi(2) / (na - 1.0) + seb.powi(2) / (nb - 1.0));
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| format!("Invalid t-distribution for df={df}: {e}"))?;
    let p_value = 2.0 * dist.cdf(-statistic.abs());
    Ok(WelchTTest {
        statistic,
        p_value,
        df,
    })
}
