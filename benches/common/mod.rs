use hessdual::HessDual64;

// ─── Rosenbrock ────────────────────────────────────────────────────────────

pub fn rosenbrock(x: &[HessDual64]) -> HessDual64 {
    let mut sum = HessDual64::constant(0.0, x.len());
    for i in 0..x.len() - 1 {
        let t1 = 1.0 - &x[i];
        let t2 = &x[i + 1] - &(&x[i] * &x[i]);
        sum = sum + &t1 * &t1 + 100.0 * (&t2 * &t2);
    }
    sum
}

pub fn rosenbrock_f64(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        let t1 = 1.0 - x[i];
        let t2 = x[i + 1] - x[i] * x[i];
        sum += t1 * t1 + 100.0 * t2 * t2;
    }
    sum
}

// ─── Rational ──────────────────────────────────────────────────────────────
// f(x) = Σ x_i / (1 + x_{i+1}²), exercises the quotient rule.

pub fn rational(x: &[HessDual64]) -> HessDual64 {
    let mut sum = HessDual64::constant(0.0, x.len());
    for i in 0..x.len() - 1 {
        let den = 1.0 + &(&x[i + 1] * &x[i + 1]);
        sum = sum + &x[i] / &den;
    }
    sum
}

pub fn point(n: usize) -> Vec<f64> {
    (0..n).map(|i| 0.5 + 0.01 * i as f64).collect()
}
