//! Multi-breakpoint piecewise interpolation.
//!
//! Maps an input value through ascending `input_range` breakpoints onto `output_range`, with an
//! optional easing applied to the local progress inside each segment and an extrapolation policy
//! on either side of the covered domain.

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behaviour for inputs outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the boundary segment linearly.
    #[default]
    Extend,
    /// Hold the boundary output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    /// Applied to local segment progress in `[0, 1]`. `None` means linear.
    pub easing: Option<Ease>,
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOptions {
    /// Clamp on both sides, no easing. Every reveal and transition uses this.
    pub fn clamped() -> Self {
        Self {
            easing: None,
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
        }
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_extrapolate(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.extrapolate_left = left;
        self.extrapolate_right = right;
        self
    }
}

/// Validated breakpoint table, evaluated many times.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOptions,
}

impl Interpolation {
    pub fn new(
        input_range: &[f64],
        output_range: &[f64],
        opts: InterpolateOptions,
    ) -> ReelResult<Self> {
        validate_ranges(input_range, output_range)?;
        if let Some(easing) = opts.easing
            && !easing.is_valid()
        {
            return Err(ReelError::validation(format!(
                "interpolate easing {easing:?} is not a valid curve"
            )));
        }
        Ok(Self {
            input: input_range.to_vec(),
            output: output_range.to_vec(),
            opts,
        })
    }

    pub fn eval(&self, input: f64) -> f64 {
        eval_breakpoints(input, &self.input, &self.output, self.opts)
    }

    pub fn input_range(&self) -> &[f64] {
        &self.input
    }

    pub fn output_range(&self) -> &[f64] {
        &self.output
    }
}

/// One-shot interpolation. Prefer [`Interpolation`] when the ranges are reused every frame.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOptions,
) -> ReelResult<f64> {
    if !input.is_finite() {
        return Err(ReelError::animation(format!(
            "interpolate input must be finite, got {input}"
        )));
    }
    validate_ranges(input_range, output_range)?;
    Ok(eval_breakpoints(input, input_range, output_range, opts))
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> ReelResult<()> {
    if input_range.len() != output_range.len() {
        return Err(ReelError::validation(format!(
            "inputRange ({}) and outputRange ({}) must have the same length",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(ReelError::validation(
            "interpolate needs at least two breakpoints",
        ));
    }
    if input_range
        .iter()
        .chain(output_range)
        .any(|v| !v.is_finite())
    {
        return Err(ReelError::validation(
            "interpolate ranges must contain only finite values",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(ReelError::validation(format!(
            "inputRange must be strictly ascending, got {input_range:?}"
        )));
    }
    Ok(())
}

/// Evaluate without validating. Callers guarantee `validate_ranges` holds.
pub(crate) fn eval_breakpoints(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOptions,
) -> f64 {
    debug_assert!(input_range.len() >= 2 && input_range.len() == output_range.len());

    // Segment whose right breakpoint is the first one >= input (last segment past the end).
    let last_seg = input_range.len() - 2;
    let seg = input_range[1..]
        .partition_point(|&b| b < input)
        .min(last_seg);

    let (in_min, in_max) = (input_range[seg], input_range[seg + 1]);
    let (out_min, out_max) = (output_range[seg], output_range[seg + 1]);

    let mut x = input;
    if x < in_min {
        match opts.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    let mut progress = (x - in_min) / (in_max - in_min);
    // Extended segments continue linearly; easing only shapes the covered part.
    if let Some(easing) = opts.easing
        && (0.0..=1.0).contains(&progress)
    {
        progress = easing.apply(progress);
    }

    let out = out_min + progress * (out_max - out_min);
    debug_assert!(out.is_finite(), "interpolate produced {out}");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
