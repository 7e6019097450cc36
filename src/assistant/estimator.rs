//! Quick, illustrative footprint estimate shown while the form is filled in

use super::palette;
use super::FormAssistant;
use crate::state::{parse_float, AIR_TRAVEL, DIET, TRANSPORT, VEHICLE_DISTANCE};
use ratatui::style::Color;

const BASE_ESTIMATE: f64 = 2000.0;
const MIN_ESTIMATE: f64 = 500.0;
const MAX_ESTIMATE: f64 = 5000.0;
/// Added per km of monthly private vehicle distance
const DISTANCE_FACTOR: f64 = 0.2;

/// The four answers the estimate depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInputs<'a> {
    pub transport: &'a str,
    pub diet: &'a str,
    /// Monthly vehicle distance; `NaN` counts as zero
    pub distance: f64,
    pub air_travel: &'a str,
}

/// Result of the heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Clamped into the displayable range
    pub value: f64,
    /// Picked from the sum before clamping
    pub color: Color,
}

impl Estimate {
    pub fn display_text(&self) -> String {
        format!("{}", self.value.round() as i64)
    }
}

/// Compute the estimate; pure and deterministic
pub fn quick_estimate(inputs: &EstimateInputs) -> Estimate {
    let distance = if inputs.distance.is_nan() {
        0.0
    } else {
        inputs.distance
    };

    let mut estimate = BASE_ESTIMATE;

    estimate += match inputs.transport {
        "walk/bicycle" => -500.0,
        "public" => -300.0,
        "private" => distance * DISTANCE_FACTOR,
        _ => 0.0,
    };

    estimate += match inputs.diet {
        "vegan" => -300.0,
        "vegetarian" => -200.0,
        "pescatarian" => -100.0,
        _ => 0.0,
    };

    estimate += match inputs.air_travel {
        "never" => -200.0,
        "frequently" => 500.0,
        "very frequently" => 1000.0,
        _ => 0.0,
    };

    Estimate {
        value: estimate.clamp(MIN_ESTIMATE, MAX_ESTIMATE),
        color: estimate_color(estimate),
    }
}

/// Color coding by magnitude
pub fn estimate_color(estimate: f64) -> Color {
    if estimate < 1500.0 {
        palette::ESTIMATE_LOW
    } else if estimate < 2500.0 {
        palette::ESTIMATE_MEDIUM
    } else if estimate < 3500.0 {
        palette::ESTIMATE_HIGH
    } else {
        palette::ESTIMATE_VERY_HIGH
    }
}

impl FormAssistant {
    /// Recompute the estimate into the display element, if the page has one
    pub fn update_estimate(&mut self) {
        if self.form.estimate_display.is_none() {
            return;
        }

        let estimate = quick_estimate(&EstimateInputs {
            transport: self.form.value_of(TRANSPORT),
            diet: self.form.value_of(DIET),
            distance: parse_float(self.form.value_of(VEHICLE_DISTANCE)),
            air_travel: self.form.value_of(AIR_TRAVEL),
        });

        if let Some(display) = self.form.estimate_display.as_mut() {
            display.text = estimate.display_text();
            display.color = Some(estimate.color);
        }
    }
}
