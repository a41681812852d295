// Welch's t-test based timing comparison
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

/// Results of comparing two timing samples
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
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

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

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / self.num_iterations as u128);
        }
        times
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    /// Sample variance (n - 1 denominator)
    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }
        let mut sorted = times.to_vec();
        sorted.sort_unstable();

        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Welch's t-statistic, absolute value
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let (n_a, n_b) = (times_a.len() as f64, times_b.len() as f64);
        (mean_a - mean_b).abs() / (var_a / n_a + var_b / n_b).sqrt()
    }

    /// Welch–Satterthwaite degrees of freedom
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let term_a = Self::variance(times_a, mean_a) / times_a.len() as f64;
        let term_b = Self::variance(times_b, mean_b) / times_b.len() as f64;
        (term_a + term_b).powi(2)
            / (term_a.powi(2) / (times_a.len() as f64 - 1.0)
                + term_b.powi(2) / (times_b.len() as f64 - 1.0))
    }

    /// Two-tailed p-value from Student's t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat.abs() < 2.0 { 0.1 } else { 0.01 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.01,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let (mean_a, mean_b) = (Self::mean(times_a), Self::mean(times_b));
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let (n_a, n_b) = (times_a.len() as f64, times_b.len() as f64);
        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        (mean_a - mean_b).abs() / pooled
    }

    /// Score mixing mean ratio, t-statistic and relative spread; 1.0 is ideal
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        mean_ratio_max: f64,
        combined_score_threshold: f64,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let rel_std_dev = f64::max(std_dev_a / mean_a, std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d: Self::cohens_d(&clean_a, &clean_b),
            combined_score,
            is_constant_time: mean_ratio <= mean_ratio_max
                && combined_score <= combined_score_threshold,
        })
    }
}

/// One-paragraph summary of an analysis, for test output
pub fn summarize(analysis: &TimingAnalysis, name: &str) -> String {
    let verdict = if analysis.is_constant_time {
        "PASS"
    } else {
        "FAIL"
    };
    format!(
        "{verdict}: {name}\n  mean {:.0} ns vs {:.0} ns (ratio {:.3})\n  t={:.2}, df={:.1}, p={:.3e}, d={:.2}, score={:.3}",
        analysis.mean_a,
        analysis.mean_b,
        analysis.mean_ratio,
        analysis.t_statistic,
        analysis.degrees_of_freedom,
        analysis.p_value,
        analysis.cohens_d,
        analysis.combined_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_on_known_samples() {
        let a = [10u128, 12, 14, 16, 18];
        assert_eq!(TimingTester::mean(&a), 14.0);
        assert_eq!(TimingTester::variance(&a, 14.0), 10.0);

        // Identical samples have no difference at all
        assert_eq!(TimingTester::t_statistic(&a, &a), 0.0);
        assert_eq!(TimingTester::cohens_d(&a, &a), 0.0);
        assert!((TimingTester::p_value(0.0, 8.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn outliers_are_removed() {
        let times = [100u128, 101, 99, 100, 102, 98, 100, 10_000];
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 7);
        assert!(!clean.contains(&10_000));
    }

    #[test]
    fn clearly_different_samples_are_flagged() {
        let tester = TimingTester::new(8, 1);
        let fast = [100u128, 101, 99, 100, 102, 98, 100, 101];
        let slow = [200u128, 201, 199, 200, 202, 198, 200, 201];
        let analysis = tester.analyze_constant_time(&fast, &slow, 1.25, 1.8).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(analysis.p_value < 0.001);

        let analysis = tester.analyze_constant_time(&fast, &fast, 1.25, 1.8).unwrap();
        assert!(analysis.is_constant_time);
    }
}
