use rust_decimal::Decimal;

use crate::error::{DiagramError, DiagramResult};

/// Defensive cap on generated ticks for malformed huge ranges or tiny intervals.
pub const MAX_TICKS: usize = 10_000;

/// Largest decimal-digit count accepted by the finite-decimal tick path.
const MAX_DECIMAL_DIGITS: u32 = 10;

/// Rational multiples of pi accepted as tick intervals, as `(p, q)` in `p*pi/q`.
const PI_INTERVALS: [(i128, i128); 7] = [(1, 1), (1, 2), (1, 3), (1, 4), (1, 6), (2, 1), (3, 2)];

/// Parallel tick values and their exact formatted labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl TickSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn push(&mut self, value: f64, label: String) {
        self.values.push(value);
        self.labels.push(label);
    }
}

/// Generates exact tick values and labels for `[min, max]` stepped by `interval`.
///
/// Stepping happens in integer or rational space so repeated addition never
/// accumulates binary-float error. An inverted range or non-positive interval
/// degrades to an empty set; axis-level validation separately rejects those as
/// hard errors. Intervals that are neither finite decimals, integer multiples
/// of 1/3 or 1/6, nor known rational multiples of pi are refused outright.
pub fn build_ticks(min: f64, max: f64, interval: f64) -> DiagramResult<TickSet> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Ok(TickSet::default());
    }
    if !interval.is_finite() {
        return Err(DiagramError::UnsupportedTickInterval { interval });
    }
    if interval <= 0.0 {
        return Ok(TickSet::default());
    }

    if let (Some(digits_interval), Some(digits_min), Some(digits_max)) = (
        decimal_digits(interval),
        decimal_digits(min),
        decimal_digits(max),
    ) {
        let scale = digits_interval.max(digits_min).max(digits_max);
        return Ok(build_decimal_ticks(min, max, interval, scale));
    }

    if let Some(base_denominator) = rational_base_denominator(interval) {
        return Ok(build_rational_ticks(min, max, interval, base_denominator));
    }

    if let Some((p, q)) = match_pi_interval(interval) {
        return Ok(build_pi_ticks(min, max, p, q));
    }

    Err(DiagramError::UnsupportedTickInterval { interval })
}

/// Smallest power of ten turning `value` into an integer, if one exists
/// within `MAX_DECIMAL_DIGITS`.
fn decimal_digits(value: f64) -> Option<u32> {
    for digits in 0..=MAX_DECIMAL_DIGITS {
        let scaled = value * 10f64.powi(digits as i32);
        // Tolerance tracks the ulp of the scaled value so large magnitudes
        // with genuine decimal expansions still qualify.
        let tolerance = scaled.abs().max(1.0) * f64::EPSILON * 64.0;
        if (scaled - scaled.round()).abs() <= tolerance {
            return Some(digits);
        }
    }
    None
}

fn scaled_int(value: f64, scale: u32) -> i128 {
    (value * 10f64.powi(scale as i32)).round() as i128
}

/// Ceiling division for a positive divisor.
fn ceil_div(numerator: i128, divisor: i128) -> i128 {
    let quotient = numerator / divisor;
    if numerator % divisor != 0 && numerator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Finite-decimal path: all stepping happens on integers scaled by `10^scale`.
fn build_decimal_ticks(min: f64, max: f64, interval: f64, scale: u32) -> TickSet {
    let pow = 10f64.powi(scale as i32);
    let int_min = scaled_int(min, scale);
    let int_max = scaled_int(max, scale);
    let int_step = scaled_int(interval, scale);

    let mut ticks = TickSet::default();
    if int_step <= 0 {
        return ticks;
    }

    let mut tick = ceil_div(int_min, int_step) * int_step;
    while tick <= int_max && ticks.len() < MAX_TICKS {
        ticks.push(tick as f64 / pow, format_scaled_decimal(tick, scale));
        tick += int_step;
    }
    ticks
}

/// Formats `mantissa * 10^-scale` with trailing zeros stripped and no `-0`.
fn format_scaled_decimal(mantissa: i128, scale: u32) -> String {
    match Decimal::try_from_i128_with_scale(mantissa, scale) {
        Ok(decimal) => decimal.normalize().to_string(),
        // Out of Decimal's 96-bit mantissa range; the float rendering is the
        // best remaining option for such extreme magnitudes.
        Err(_) => (mantissa as f64 / 10f64.powi(scale as i32)).to_string(),
    }
}

/// Detects intervals that are exact integer multiples of 1/3 or 1/6.
fn rational_base_denominator(interval: f64) -> Option<i128> {
    for base in [3i128, 6i128] {
        let scaled = interval * base as f64;
        if scaled.round() != 0.0 && (scaled - scaled.round()).abs() <= scaled.abs() * 1e-12 {
            return Some(base);
        }
    }
    None
}

/// Rational path: ticks as numerators over `base * 10^s`, labelled as reduced
/// fractions whenever the reduced denominator is non-terminating in decimal.
fn build_rational_ticks(min: f64, max: f64, interval: f64, base: i128) -> TickSet {
    let scale = rational_scale(min, base).max(rational_scale(max, base));
    let denominator = base * 10i128.pow(scale);
    let step = (interval * denominator as f64).round() as i128;

    let mut ticks = TickSet::default();
    if step <= 0 {
        return ticks;
    }

    let numerator_min = (min * denominator as f64).round() as i128;
    let numerator_max = (max * denominator as f64).round() as i128;
    let mut numerator = ceil_div(numerator_min, step) * step;
    while numerator <= numerator_max && ticks.len() < MAX_TICKS {
        ticks.push(
            numerator as f64 / denominator as f64,
            format_rational(numerator, denominator),
        );
        numerator += step;
    }
    ticks
}

fn rational_scale(bound: f64, base: i128) -> u32 {
    decimal_digits(bound * base as f64).unwrap_or(MAX_DECIMAL_DIGITS)
}

fn format_rational(numerator: i128, denominator: i128) -> String {
    let divisor = gcd(numerator, denominator).max(1);
    let (numerator, denominator) = (numerator / divisor, denominator / divisor);
    if has_only_two_five_factors(denominator) {
        // Terminating decimal: rescale p/q onto a power-of-ten denominator.
        let mut scale = 0u32;
        let mut rest = denominator;
        while rest % 2 == 0 {
            rest /= 2;
            scale += 1;
        }
        let mut fives = 0u32;
        while rest % 5 == 0 {
            rest /= 5;
            fives += 1;
        }
        scale = scale.max(fives);
        let mantissa = numerator * (10i128.pow(scale) / denominator);
        format_scaled_decimal(mantissa, scale)
    } else {
        format!("{numerator}/{denominator}")
    }
}

fn has_only_two_five_factors(denominator: i128) -> bool {
    let mut rest = denominator.abs();
    for factor in [2, 5] {
        while rest % factor == 0 {
            rest /= factor;
        }
    }
    rest == 1
}

fn match_pi_interval(interval: f64) -> Option<(i128, i128)> {
    PI_INTERVALS.iter().copied().find(|&(p, q)| {
        let step = std::f64::consts::PI * p as f64 / q as f64;
        (interval - step).abs() <= step * 1e-9
    })
}

/// Pi path: ticks are integer multiples `k` of `p*pi/q` inside `[min, max]`.
fn build_pi_ticks(min: f64, max: f64, p: i128, q: i128) -> TickSet {
    let step = std::f64::consts::PI * p as f64 / q as f64;
    let epsilon = step * 1e-9;
    let k_min = ((min - epsilon) / step).ceil() as i128;
    let k_max = ((max + epsilon) / step).floor() as i128;

    let mut ticks = TickSet::default();
    for k in k_min..=k_max {
        if ticks.len() >= MAX_TICKS {
            break;
        }
        ticks.push(k as f64 * step, format_pi_multiple(k * p, q));
    }
    ticks
}

/// Formats `n * pi / d` with reduced coefficients: `0`, `π`, `-π`, `kπ`,
/// `π/q`, `kπ/q`.
fn format_pi_multiple(numerator: i128, denominator: i128) -> String {
    if numerator == 0 {
        return "0".to_owned();
    }
    let divisor = gcd(numerator, denominator).max(1);
    let (numerator, denominator) = (numerator / divisor, denominator / divisor);
    let coefficient = match numerator {
        1 => String::new(),
        -1 => "-".to_owned(),
        _ => numerator.to_string(),
    };
    if denominator == 1 {
        format!("{coefficient}\u{3c0}")
    } else {
        format!("{coefficient}\u{3c0}/{denominator}")
    }
}
