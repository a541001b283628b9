/// Converts regression-form coefficients `phi` (as in
/// `y[t] = phi[0] y[t-1] + ... + phi[p-1] y[t-p] + e[t]`) into reflection
/// coefficients (partial autocorrelations) via the step-down Levinson-Durbin
/// recursion.
///
/// The recursion stops at the first reflection coefficient with magnitude
/// `>= 1`; that value is the last element of the returned vector, so callers
/// can test stability by inspecting every element.
///
/// Reflection coefficients are returned highest order first.
pub(crate) fn coeffs_to_reflection(phi: &[f64]) -> Vec<f64> {
    let mut current = phi.to_vec();
    let mut reflection = Vec::with_capacity(phi.len());

    while let Some(&r) = current.last() {
        reflection.push(r);
        if r.abs() >= 1.0 {
            break;
        }

        // Invert one Levinson step: prev[j] = (phi[j] + r*phi[m-2-j]) / (1 - r^2)
        let m = current.len();
        let denom = 1.0 - r * r;
        let prev: Vec<f64> = (0..m - 1)
            .map(|j| (current[j] + r * current[m - 2 - j]) / denom)
            .collect();
        current = prev;
    }

    reflection
}

/// Returns `true` when the polynomial `1 - phi[0] z - ... - phi[p-1] z^p`
/// has all its roots strictly outside the unit circle.
///
/// Equivalent to every reflection coefficient lying in (-1, 1). An empty
/// `phi` is trivially stable.
pub(crate) fn is_stable(phi: &[f64]) -> bool {
    coeffs_to_reflection(phi).iter().all(|r| r.abs() < 1.0)
}

/// Maps reflection coefficients (lowest order first) back to regression-form
/// coefficients with the step-up Levinson-Durbin recursion.
#[cfg(test)]
pub(crate) fn reflection_to_coeffs(r: &[f64]) -> Vec<f64> {
    let p = r.len();
    if p == 0 {
        return Vec::new();
    }

    let mut phi = vec![0.0; p];
    let mut prev = vec![0.0; p];

    phi[0] = r[0];

    for k in 1..p {
        prev[..p].copy_from_slice(&phi[..p]);

        phi[k] = r[k];
        for j in 0..k {
            phi[j] = prev[j] - r[k] * prev[k - 1 - j];
        }
    }

    phi
}
