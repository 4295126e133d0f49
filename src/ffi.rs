//! C ABI entry points
//!
//! Thin `extern "C"` wrappers over [`ln_ratio_into`] and [`fit_linear`] for
//! host environments that load the crate as a shared library.
//!
//! ```c
//! void degradation_ln_ratio(const double *a0, const double *at, double *out, int n);
//! int  degradation_fit_linear(const double *t, const double *y, int n, double *k, double *c);
//! ```

use std::os::raw::c_int;

use crate::kinetics::{fit_linear, ln_ratio_into};

/// Fit completed and `k`, `c` were written
pub const DEGRADATION_OK: c_int = 0;
/// Regression denominator was zero; outputs untouched
pub const DEGRADATION_DEGENERATE: c_int = 1;

/// Write `ln(a0[0] / at[i])` into `out[i]` for `i < n`
///
/// Only the first element of `a0` is read. Nothing is written if a pointer is
/// null or `n <= 0`.
///
/// # Safety
/// `a0` must point to at least one `f64`; `at` and `out` must each point to at
/// least `n` valid `f64`s, and `out` must not overlap `at`.
#[no_mangle]
pub unsafe extern "C" fn degradation_ln_ratio(
    a0: *const f64,
    at: *const f64,
    out: *mut f64,
    n: c_int,
) {
    if a0.is_null() || at.is_null() || out.is_null() || n <= 0 {
        return;
    }
    let n = n as usize;
    let at = std::slice::from_raw_parts(at, n);
    let out = std::slice::from_raw_parts_mut(out, n);
    ln_ratio_into(*a0, at, out);
}

/// Least-squares fit of `y = k * t + c` over `n` pairs
///
/// Returns [`DEGRADATION_OK`] and writes `k` and `c`, or
/// [`DEGRADATION_DEGENERATE`] when the fit is undefined (including null
/// pointers and `n <= 0`).
///
/// # Safety
/// `t` and `y` must each point to at least `n` valid `f64`s; `k` and `c` must be
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn degradation_fit_linear(
    t: *const f64,
    y: *const f64,
    n: c_int,
    k: *mut f64,
    c: *mut f64,
) -> c_int {
    if t.is_null() || y.is_null() || k.is_null() || c.is_null() || n <= 0 {
        return DEGRADATION_DEGENERATE;
    }
    let n = n as usize;
    let t = std::slice::from_raw_parts(t, n);
    let y = std::slice::from_raw_parts(y, n);

    match fit_linear(t, y) {
        Ok(fit) => {
            *k = fit.slope;
            *c = fit.intercept;
            DEGRADATION_OK
        }
        Err(e) => {
            tracing::debug!(error = %e, "degradation_fit_linear failed");
            DEGRADATION_DEGENERATE
        }
    }
}
