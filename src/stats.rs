// stats.rs - Sample statistics and Welch's t-test.
//
// Student's t tail probability goes through the regularized incomplete
// beta function, evaluated with Lentz's continued fraction.

use std::f64::consts::PI;

/// Arithmetic mean; `NaN` for an empty sample.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample variance with one degree of freedom removed; `NaN` below two samples.
pub fn variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() - 1) as f64
}

/// Standard error of the mean, `sd / sqrt(n)`.
pub fn std_error(xs: &[f64]) -> f64 {
    (variance(xs) / xs.len() as f64).sqrt()
}

/// Result of Welch's unequal-variance t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTest {
    pub t: f64,
    /// Welch-Satterthwaite degrees of freedom.
    pub df: f64,
    /// Two-sided p-value.
    pub p: f64,
}

/// Welch's t-test of `a` against `b`.
///
/// Samples with fewer than two values give `NaN` everywhere. Two
/// constant samples with different means give an infinite `t` and `p = 0`.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> WelchTest {
    if a.len() < 2 || b.len() < 2 {
        return WelchTest {
            t: f64::NAN,
            df: f64::NAN,
            p: f64::NAN,
        };
    }
    let (va, vb) = (variance(a), variance(b));
    let sa = va / a.len() as f64;
    let sb = vb / b.len() as f64;
    let se2 = sa + sb;
    let t = (mean(a) - mean(b)) / se2.sqrt();
    let df = se2 * se2 / (sa * sa / (a.len() - 1) as f64 + sb * sb / (b.len() - 1) as f64);
    WelchTest {
        t,
        df,
        p: student_t_two_sided(t, df),
    }
}

/// Two-sided tail probability `P(|T| >= |t|)` for `df` degrees of freedom.
pub fn student_t_two_sided(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    if df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let x = df / (df + t * t);
    reg_inc_beta(df / 2.0, 0.5, x)
}

/// Natural log of the gamma function (Lanczos, g = 7).
pub fn ln_gamma(x: f64) -> f64 {
    const G: f64 = 7.0;
    const COEF: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection formula.
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut a = COEF[0];
    let t = x + G + 0.5;
    for (i, c) in COEF.iter().enumerate().skip(1) {
        a += c / (x + i as f64);
    }
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + a.ln()
}

/// Regularized incomplete beta function `I_x(a, b)`.
pub fn reg_inc_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    if x < (a + 1.0) / (a + b + 2.0) {
        ln_front.exp() * beta_cf(a, b, x) / a
    } else {
        1.0 - ln_front.exp() * beta_cf(b, a, 1.0 - x) / b
    }
}

fn beta_cf(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITER: usize = 300;
    const EPS: f64 = 1e-15;
    const TINY: f64 = 1e-300;

    let clamp = |v: f64| if v.abs() < TINY { TINY } else { v };

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 / clamp(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        h *= d * c;

        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn mean_and_variance() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mean(&xs), 3.0);
        assert_eq!(variance(&xs), 2.5);
        assert!(close(std_error(&xs), (0.5f64).sqrt(), 1e-12));
    }

    #[test]
    fn small_samples_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(variance(&[1.0]).is_nan());
        assert!(std_error(&[1.0]).is_nan());
    }

    #[test]
    fn ln_gamma_known_values() {
        assert!(close(ln_gamma(1.0), 0.0, 1e-12));
        assert!(close(ln_gamma(5.0), 24f64.ln(), 1e-12));
        assert!(close(ln_gamma(0.5), PI.sqrt().ln(), 1e-12));
    }

    #[test]
    fn incomplete_beta_closed_forms() {
        // I_x(1, b) = 1 - (1 - x)^b
        assert!(close(reg_inc_beta(1.0, 0.5, 1.0 / 3.0), 1.0 - (2.0f64 / 3.0).sqrt(), 1e-12));
        // Symmetric case at the midpoint.
        assert!(close(reg_inc_beta(0.5, 0.5, 0.5), 0.5, 1e-12));
        assert_eq!(reg_inc_beta(2.0, 3.0, 0.0), 0.0);
        assert_eq!(reg_inc_beta(2.0, 3.0, 1.0), 1.0);
    }

    #[test]
    fn t_tail_probabilities() {
        assert!(close(student_t_two_sided(0.0, 7.0), 1.0, 1e-12));
        // Cauchy: P(|T| > 1) = 1/2
        assert!(close(student_t_two_sided(1.0, 1.0), 0.5, 1e-10));
        // df = 2 has the closed form 1 - t / sqrt(2 + t^2).
        let expected = 1.0 - 2.0 / 6f64.sqrt();
        assert!(close(student_t_two_sided(2.0, 2.0), expected, 1e-10));
        assert!(close(student_t_two_sided(-2.0, 2.0), expected, 1e-10));
        assert_eq!(student_t_two_sided(f64::INFINITY, 3.0), 0.0);
    }

    #[test]
    fn welch_hand_computed() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let w = welch_t_test(&a, &b);
        assert!(close(w.t, -3.0 / 2.5f64.sqrt(), 1e-12));
        assert!(close(w.df, 6.25 / 1.0625, 1e-12));
        assert!(w.p > 0.05 && w.p < 0.2);
    }

    #[test]
    fn welch_identical_samples() {
        let a = [1.0, 2.0, 3.0];
        let w = welch_t_test(&a, &a);
        assert_eq!(w.t, 0.0);
        assert!(close(w.p, 1.0, 1e-12));
    }

    #[test]
    fn welch_constant_samples() {
        let w = welch_t_test(&[1.0, 1.0], &[2.0, 2.0]);
        assert!(w.t.is_infinite());
        assert_eq!(w.p, 0.0);
        let w = welch_t_test(&[1.0, 1.0], &[1.0, 1.0]);
        assert!(w.t.is_nan() && w.p.is_nan());
    }

    #[test]
    fn welch_single_sample_is_nan() {
        let w = welch_t_test(&[1.0], &[2.0, 3.0]);
        assert!(w.t.is_nan());
        assert!(w.p.is_nan());
    }
}
