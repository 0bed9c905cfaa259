//! Clamping and interpolation on [`Fixed`].
//!
//! Every function here is composed from the saturating scalar operators,
//! so each intermediate product goes through the same widened, rounded
//! multiply and the results are deterministic.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`], [`remap`])
//! - Smooth interpolation ([`smoothstep`], [`smootherstep`])
//! - Clamping ([`clamp`], [`saturate`]) and [`step`]
//! - Damped spring following ([`smooth_damp`])
//!
//! # Usage
//!
//! ```rust
//! use fxp_core::{Fixed, lerp, smoothstep};
//!
//! let mid = lerp(Fixed::ZERO, Fixed::from(10), Fixed::HALF);
//! assert_eq!(mid, Fixed::from(5));
//!
//! let s = smoothstep(Fixed::ZERO, Fixed::ONE, Fixed::HALF);
//! assert_eq!(s, Fixed::HALF);
//! ```

use crate::fixed::Fixed;

/// `0.0001`: lower bound applied to the smoothing time of [`smooth_damp`].
pub const MIN_SMOOTH_TIME: Fixed = Fixed::from_bits(429_497);

/// `0.48` and `0.235`: coefficients of the decay polynomial in [`smooth_damp`].
const DAMP_X2: Fixed = Fixed::from_bits(2_061_584_302);
const DAMP_X3: Fixed = Fixed::from_bits(1_009_317_315);

const THREE: Fixed = Fixed::from_bits(3 << crate::FRAC_BITS);
const SIX: Fixed = Fixed::from_bits(6 << crate::FRAC_BITS);
const TEN: Fixed = Fixed::from_bits(10 << crate::FRAC_BITS);
const FIFTEEN: Fixed = Fixed::from_bits(15 << crate::FRAC_BITS);

/// Clamps a value to the range `[min, max]`.
///
/// Pure selection, no arithmetic. If `min > max` the result is `max`.
///
/// # Example
///
/// ```rust
/// use fxp_core::{Fixed, clamp};
///
/// let (lo, hi) = (Fixed::ZERO, Fixed::from(5));
/// assert_eq!(clamp(Fixed::from(10), lo, hi), hi);
/// assert_eq!(clamp(Fixed::from(-3), lo, hi), lo);
/// ```
#[inline]
pub fn clamp(value: Fixed, min: Fixed, max: Fixed) -> Fixed {
    if value < min {
        if min > max { max } else { min }
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to `[0, 1]`.
#[inline]
pub fn saturate(value: Fixed) -> Fixed {
    clamp(value, Fixed::ZERO, Fixed::ONE)
}

/// Linear interpolation `a + (b - a) * t`.
///
/// Returns `a` at `t = 0` and `b` at `t = 1`; extrapolates outside `[0, 1]`.
#[inline]
pub fn lerp(a: Fixed, b: Fixed, t: Fixed) -> Fixed {
    a + (b - a) * t
}

/// Inverse linear interpolation `(value - a) / (b - a)`.
///
/// Returns zero for the degenerate range `a == b`.
///
/// ```rust
/// use fxp_core::{Fixed, inverse_lerp};
///
/// assert_eq!(inverse_lerp(Fixed::ZERO, Fixed::from(10), Fixed::from(5)), Fixed::HALF);
/// assert_eq!(inverse_lerp(Fixed::ONE, Fixed::ONE, Fixed::from(5)), Fixed::ZERO);
/// ```
#[inline]
pub fn inverse_lerp(a: Fixed, b: Fixed, value: Fixed) -> Fixed {
    (value - a).try_div(b - a).unwrap_or(Fixed::ZERO)
}

/// Remaps a value from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn remap(value: Fixed, in_min: Fixed, in_max: Fixed, out_min: Fixed, out_max: Fixed) -> Fixed {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Step function: `0` for `x < edge`, `1` otherwise.
#[inline]
pub fn step(edge: Fixed, x: Fixed) -> Fixed {
    if x < edge { Fixed::ZERO } else { Fixed::ONE }
}

/// Hermite smoothstep `t * t * (3 - 2 * t)`, `t = saturate(inverse_lerp(edge0, edge1, x))`.
///
/// With `edge0 == edge1` this degenerates to [`step`]`(edge0, x)`.
///
/// ```rust
/// use fxp_core::{Fixed, smoothstep};
///
/// assert_eq!(smoothstep(Fixed::ZERO, Fixed::ONE, Fixed::from(-1)), Fixed::ZERO);
/// assert_eq!(smoothstep(Fixed::ZERO, Fixed::ONE, Fixed::from(2)), Fixed::ONE);
/// ```
#[inline]
pub fn smoothstep(edge0: Fixed, edge1: Fixed, x: Fixed) -> Fixed {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * (THREE - Fixed::TWO * t)
}

/// Perlin's smootherstep `t^3 * (t * (6t - 15) + 10)`.
#[inline]
pub fn smootherstep(edge0: Fixed, edge1: Fixed, x: Fixed) -> Fixed {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * t * (t * (t * SIX - FIFTEEN) + TEN)
}

/// Fused multiply-add `a * b + c` with a single rounding.
#[inline]
pub fn fma(a: Fixed, b: Fixed, c: Fixed) -> Fixed {
    a.mul_add(b, c)
}

/// One step of a critically damped spring moving `current` toward `target`.
///
/// Returns `(position, velocity)`; pass the velocity back in on the next
/// step. `smooth_time` is roughly the time to reach the target and is
/// bounded below by [`MIN_SMOOTH_TIME`]; a negative `delta_time` is treated
/// as zero. The result never overshoots `target`: when it would, the
/// position snaps to `target` and the velocity becomes zero.
///
/// # Example
///
/// ```rust
/// use fxp_core::{Fixed, smooth_damp};
///
/// let target = Fixed::from(10);
/// let (mut pos, mut vel) = (Fixed::ZERO, Fixed::ZERO);
/// for _ in 0..200 {
///     (pos, vel) = smooth_damp(pos, target, vel, Fixed::ONE, Fixed::from_f64(0.05));
///     assert!(pos <= target);
/// }
/// assert!(target - pos < Fixed::from_f64(0.01));
/// ```
#[inline]
pub fn smooth_damp(
    current: Fixed,
    target: Fixed,
    velocity: Fixed,
    smooth_time: Fixed,
    delta_time: Fixed,
) -> (Fixed, Fixed) {
    smooth_damp_max_speed(current, target, velocity, Fixed::MAX, smooth_time, delta_time)
}

/// [`smooth_damp`] with the per-step change limited to `max_speed * smooth_time`.
pub fn smooth_damp_max_speed(
    current: Fixed,
    target: Fixed,
    velocity: Fixed,
    max_speed: Fixed,
    smooth_time: Fixed,
    delta_time: Fixed,
) -> (Fixed, Fixed) {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let delta_time = delta_time.max(Fixed::ZERO);

    // smooth_time >= MIN_SMOOTH_TIME, so neither division can see zero;
    // the decay denominator is at least one for x >= 0.
    let omega = Fixed::TWO / smooth_time;
    let x = omega * delta_time;
    let decay = Fixed::ONE / (Fixed::ONE + x + DAMP_X2 * x * x + DAMP_X3 * x * x * x);

    let max_change = max_speed.abs() * smooth_time;
    let change = clamp(current - target, -max_change, max_change);
    let limited_target = current - change;

    let temp = (velocity + omega * change) * delta_time;
    let mut new_velocity = (velocity - omega * temp) * decay;
    let mut output = limited_target + (change + temp) * decay;

    if (target > current) == (output > target) {
        output = target;
        new_velocity = Fixed::ZERO;
    }
    (output, new_velocity)
}

impl Fixed {
    /// Clamps `self` to `[min, max]`. See [`clamp`].
    ///
    /// Unlike [`Ord::clamp`] this never panics.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        clamp(self, min, max)
    }

    /// Linear interpolation from `self` toward `other`. See [`lerp`].
    #[inline]
    pub fn lerp(self, other: Self, t: Self) -> Self {
        lerp(self, other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fx(v: f64) -> Fixed {
        Fixed::from_f64(v)
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(fx(10.0), fx(0.0), fx(5.0)), fx(5.0));
        assert_eq!(clamp(fx(-3.0), fx(0.0), fx(5.0)), fx(0.0));
        assert_eq!(clamp(fx(2.0), fx(0.0), fx(5.0)), fx(2.0));
        // inverted bounds select max
        assert_eq!(clamp(fx(-3.0), fx(5.0), fx(0.0)), fx(0.0));
        assert_eq!(fx(7.0).clamp(fx(1.0), fx(2.0)), fx(2.0));
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(fx(-0.5)), Fixed::ZERO);
        assert_eq!(saturate(fx(0.5)), Fixed::HALF);
        assert_eq!(saturate(fx(1.5)), Fixed::ONE);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(fx(0.0), fx(10.0), fx(0.0)), fx(0.0));
        assert_eq!(lerp(fx(0.0), fx(10.0), fx(0.5)), fx(5.0));
        assert_eq!(lerp(fx(0.0), fx(10.0), fx(1.0)), fx(10.0));
        assert_eq!(lerp(fx(0.0), fx(10.0), fx(1.5)), fx(15.0));
        assert_eq!(fx(2.0).lerp(fx(4.0), Fixed::HALF), fx(3.0));
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(fx(0.0), fx(10.0), fx(0.0)), fx(0.0));
        assert_eq!(inverse_lerp(fx(0.0), fx(10.0), fx(5.0)), fx(0.5));
        assert_eq!(inverse_lerp(fx(0.0), fx(10.0), fx(10.0)), fx(1.0));
        assert_eq!(inverse_lerp(fx(3.0), fx(3.0), fx(10.0)), fx(0.0));
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(fx(0.5), fx(0.0), fx(1.0), fx(0.0), fx(100.0)), fx(50.0));
        assert_eq!(remap(fx(50.0), fx(0.0), fx(100.0), fx(0.0), fx(1.0)), fx(0.5));
    }

    #[test]
    fn test_step() {
        assert_eq!(step(fx(0.5), fx(0.25)), Fixed::ZERO);
        assert_eq!(step(fx(0.5), fx(0.5)), Fixed::ONE);
        assert_eq!(step(fx(0.5), fx(0.75)), Fixed::ONE);
    }

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(0.0)), fx(0.0));
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(1.0)), fx(1.0));
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(0.5)), fx(0.5));
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(-1.0)), fx(0.0));
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(2.0)), fx(1.0));
        // 0.25^2 * (3 - 0.5) = 0.15625, exact in binary
        assert_eq!(smoothstep(fx(0.0), fx(1.0), fx(0.25)), fx(0.15625));
        assert_eq!(smoothstep(fx(2.0), fx(2.0), fx(1.0)), Fixed::ZERO);
        assert_eq!(smoothstep(fx(2.0), fx(2.0), fx(2.0)), Fixed::ONE);
    }

    #[test]
    fn test_smoothstep_symmetry() {
        for i in 0..=16 {
            let x = Fixed::from(i) / Fixed::from(16);
            let y = smoothstep(Fixed::ZERO, Fixed::ONE, x);
            let mirrored = smoothstep(Fixed::ZERO, Fixed::ONE, Fixed::ONE - x);
            assert_eq!(y + mirrored, Fixed::ONE, "asymmetric at {x}");
        }
    }

    #[test]
    fn test_smootherstep() {
        assert_eq!(smootherstep(fx(0.0), fx(1.0), fx(0.0)), fx(0.0));
        assert_eq!(smootherstep(fx(0.0), fx(1.0), fx(1.0)), fx(1.0));
        assert_eq!(smootherstep(fx(0.0), fx(1.0), fx(0.5)), fx(0.5));
    }

    #[test]
    fn test_fma() {
        assert_eq!(fma(fx(1.5), fx(2.0), fx(0.25)), fx(3.25));
    }

    /// Reference step of the same spring in f64.
    fn damp_f64(current: f64, target: f64, velocity: f64, smooth_time: f64, dt: f64) -> (f64, f64) {
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
        let change = current - target;
        let temp = (velocity + omega * change) * dt;
        let vel = (velocity - omega * temp) * decay;
        let out = target + (change + temp) * decay;
        (out, vel)
    }

    #[test]
    fn test_smooth_damp_single_step() {
        let (pos, vel) = smooth_damp(fx(0.0), fx(10.0), fx(0.0), fx(1.0), fx(0.1));
        let (ref_pos, ref_vel) = damp_f64(0.0, 10.0, 0.0, 1.0, 0.1);
        assert_abs_diff_eq!(pos.to_f64(), ref_pos, epsilon = 1e-6);
        assert_abs_diff_eq!(vel.to_f64(), ref_vel, epsilon = 1e-6);
        assert!(pos > Fixed::ZERO && pos < fx(10.0));
        assert!(vel > Fixed::ZERO);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let target = fx(-4.0);
        let (mut pos, mut vel) = (fx(6.0), fx(0.0));
        for _ in 0..500 {
            (pos, vel) = smooth_damp(pos, target, vel, fx(0.3), fx(0.02));
            assert!(pos >= target);
        }
        assert_abs_diff_eq!(pos.to_f64(), -4.0, epsilon = 1e-4);
    }

    #[test]
    fn test_smooth_damp_snaps_on_overshoot() {
        // A huge step would carry the position past the target.
        let (pos, vel) = smooth_damp(fx(0.0), fx(1.0), fx(50.0), fx(0.1), fx(1.0));
        assert_eq!(pos, fx(1.0));
        assert_eq!(vel, Fixed::ZERO);
    }

    #[test]
    fn test_smooth_damp_zero_smooth_time_is_bounded() {
        let (pos, _) = smooth_damp(fx(0.0), fx(1.0), fx(0.0), Fixed::ZERO, fx(0.016));
        assert!(pos <= fx(1.0));
        assert!(pos > Fixed::ZERO);
    }

    #[test]
    fn test_smooth_damp_max_speed() {
        let (pos, _) =
            smooth_damp_max_speed(fx(0.0), fx(100.0), fx(0.0), fx(1.0), fx(1.0), fx(0.1));
        let (free, _) = smooth_damp(fx(0.0), fx(100.0), fx(0.0), fx(1.0), fx(0.1));
        assert!(pos < free);
        assert!(pos > Fixed::ZERO);
    }

    #[test]
    fn test_smooth_damp_is_deterministic() {
        let run = || {
            let (mut pos, mut vel) = (fx(1.25), fx(-0.5));
            for _ in 0..64 {
                (pos, vel) = smooth_damp(pos, fx(7.0), vel, fx(0.75), fx(1.0 / 60.0));
            }
            (pos.to_bits(), vel.to_bits())
        };
        assert_eq!(run(), run());
    }
}
