//! Welch t-test timing comparison
//!
//! Two closures are timed over many samples. After IQR outlier removal the
//! samples are compared by mean ratio, Welch's t-statistic and Cohen's d,
//! folded into one combined score that is checked against a threshold.

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Result of comparing two timing sample sets.
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
    pub confidence_interval: (f64, f64),
}

/// Summary statistics of one cleaned sample set
struct SampleStats {
    n: f64,
    mean: f64,
    var: f64,
}

impl SampleStats {
    fn of(times: &[u128]) -> Self {
        let n = times.len() as f64;
        let mean = times.iter().sum::<u128>() as f64 / n;
        let ss: f64 = times.iter().map(|&t| (t as f64 - mean).powi(2)).sum();
        Self {
            n,
            mean,
            var: ss / (n - 1.0),
        }
    }

    fn std_dev(&self) -> f64 {
        self.var.sqrt()
    }

    fn rel_std_dev(&self) -> f64 {
        self.std_dev() / self.mean
    }

    fn se_term(&self) -> f64 {
        self.var / self.n
    }
}

/// Times closures and compares the resulting distributions.
pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample.
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<u128> {
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..self.num_iterations {
                    f();
                }
                start.elapsed().as_nanos() / self.num_iterations as u128
            })
            .collect()
    }

    /// Drops samples outside `[q1 - 1.5 iqr, q3 + 1.5 iqr]`.
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .copied()
            .filter(|&t| (lo..=hi).contains(&(t as f64)))
            .collect()
    }

    fn students_t(df: f64) -> Option<StudentsT> {
        if df.is_finite() && df >= 1.0 {
            StudentsT::new(0.0, 1.0, df).ok()
        } else {
            None
        }
    }

    /// Two-tailed p-value of a t-statistic.
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        match Self::students_t(df) {
            Some(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            // Normal approximation
            None if t_stat.abs() < 1.96 => 0.5,
            None => 0.01,
        }
    }

    fn t_critical(df: f64, confidence: f64) -> f64 {
        match Self::students_t(df) {
            Some(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence) / 2.0),
            None => 1.96,
        }
    }

    /// Weighted blend of the mean ratio, t-statistic and relative spread.
    ///
    /// Identical distributions score close to 1.0.
    pub fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
        let score =
            1.0 + 0.5 * (mean_ratio - 1.0) + 0.2 * (t_stat / 10.0) + 0.3 * max_rel_std_dev;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    /// Compares two timing sample sets against `combined_score_threshold`.
    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        combined_score_threshold: f64,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let a = SampleStats::of(&clean_a);
        let b = SampleStats::of(&clean_b);

        let mean_ratio = a.mean.max(b.mean) / a.mean.min(b.mean);
        let se = (a.se_term() + b.se_term()).sqrt();
        let mean_diff = (a.mean - b.mean).abs();
        let t_statistic = if se > 0.0 { mean_diff / se } else { 0.0 };

        // Welch-Satterthwaite
        let degrees_of_freedom = (a.se_term() + b.se_term()).powi(2)
            / (a.se_term().powi(2) / (a.n - 1.0) + b.se_term().powi(2) / (b.n - 1.0));
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let pooled = ((a.var * (a.n - 1.0) + b.var * (b.n - 1.0)) / (a.n + b.n - 2.0)).sqrt();
        let cohens_d = if pooled > 0.0 { mean_diff / pooled } else { 0.0 };

        let margin = Self::t_critical(degrees_of_freedom, 0.95) * se;
        let confidence_interval = ((mean_diff - margin).max(0.0), mean_diff + margin);

        let combined_score = Self::combined_score(
            mean_ratio,
            t_statistic,
            a.rel_std_dev().max(b.rel_std_dev()),
        );

        Ok(TimingAnalysis {
            mean_a: a.mean,
            mean_b: b.mean,
            std_dev_a: a.std_dev(),
            std_dev_b: b.std_dev(),
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            is_constant_time: combined_score <= combined_score_threshold,
            cohens_d,
            confidence_interval,
        })
    }
}

/// Human-readable summary of a timing analysis for the test log
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    primitive_name: &str,
) -> String {
    let verdict = if analysis.is_constant_time {
        "PASS"
    } else {
        "FAIL"
    };
    let mut out = format!(
        "{}: {} (score {:.3}, threshold {:.3})\n",
        verdict, primitive_name, analysis.combined_score, config.combined_score_threshold
    );
    out.push_str(&format!(
        "  mean {:.0} ns vs {:.0} ns, ratio {:.3}\n",
        analysis.mean_a, analysis.mean_b, analysis.mean_ratio
    ));
    out.push_str(&format!(
        "  t={:.2} df={:.1} p={:.3e} d={:.2}\n",
        analysis.t_statistic, analysis.degrees_of_freedom, analysis.p_value, analysis.cohens_d
    ));
    out.push_str(&format!(
        "  95% CI of mean difference: ({:.1}, {:.1}) ns\n",
        analysis.confidence_interval.0, analysis.confidence_interval.1
    ));

    if !analysis.is_constant_time && analysis.mean_ratio > config.mean_ratio_max {
        out.push_str("  mean ratio out of range: look for a data-dependent branch or early exit\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_outliers_drops_spike() {
        let mut times = vec![100u128; 20];
        times.push(10_000);
        assert_eq!(TimingTester::remove_outliers(&times), vec![100u128; 20]);
    }

    #[test]
    fn test_similar_samples_pass() {
        let tester = TimingTester::new(10, 1);
        let a: Vec<u128> = (0..10).map(|i| 1000 + (i % 3)).collect();
        let b: Vec<u128> = (0..10).map(|i| 1000 + ((i + 1) % 3)).collect();
        let analysis = tester.analyze_constant_time(&a, &b, 1.8).unwrap();
        assert!(analysis.is_constant_time);
        assert!(analysis.mean_ratio < 1.01);
    }

    #[test]
    fn test_large_gap_is_flagged() {
        let tester = TimingTester::new(10, 1);
        let a: Vec<u128> = (0..10).map(|i| 1000 + (i % 3)).collect();
        let b: Vec<u128> = (0..10).map(|i| 3000 + (i % 3)).collect();
        let analysis = tester.analyze_constant_time(&a, &b, 1.8).unwrap();
        assert!(!analysis.is_constant_time);

        let report = generate_test_insights(&analysis, &TestConfig::default(), "demo");
        assert!(report.starts_with("FAIL: demo"));
    }
}
