//! Scoring formulas.
//!
//! `primary_score` is authoritative and feeds `overallScore`. The weighted
//! and average formulas are diagnostics only (see the debug endpoint).

use serde::Serialize;

use super::models::{Grade, NormalizedDesktop, NormalizedMobile, NormalizedSeo, NormalizedTechnical};

/// The five sub-scores every formula draws from. Zero means "not measured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreComponents {
    pub mobile_performance: u8,
    pub desktop_performance: u8,
    pub mobile_usability: u8,
    pub seo: u8,
    pub best_practices: u8,
}

impl ScoreComponents {
    pub fn from_sections(
        mobile: &NormalizedMobile,
        desktop: &NormalizedDesktop,
        technical: &NormalizedTechnical,
        seo: &NormalizedSeo,
    ) -> Self {
        Self {
            mobile_performance: mobile.performance_score,
            desktop_performance: desktop.performance_score,
            mobile_usability: mobile.mobile_usability.score,
            seo: seo.seo_score,
            best_practices: technical.best_practices_score,
        }
    }

    fn weighted(&self) -> [(u8, f64); 5] {
        [
            (self.mobile_performance, 0.4),
            (self.desktop_performance, 0.2),
            (self.mobile_usability, 0.2),
            (self.seo, 0.1),
            (self.best_practices, 0.1),
        ]
    }
}

/// All three formulas side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub primary: u8,
    pub weighted: u8,
    pub average: u8,
}

impl ScoreBreakdown {
    pub fn compute(components: &ScoreComponents) -> Self {
        Self {
            primary: primary_score(components),
            weighted: weighted_score(components),
            average: average_score(components),
        }
    }
}

/// Mobile performance alone.
pub fn primary_score(components: &ScoreComponents) -> u8 {
    components.mobile_performance.min(100)
}

/// 40/20/20/10/10 blend over measured components, renormalized by the weight
/// actually used when some components are missing.
pub fn weighted_score(components: &ScoreComponents) -> u8 {
    let (sum, weight_used) = components
        .weighted()
        .iter()
        .filter(|(value, _)| *value > 0)
        .fold((0.0, 0.0), |(sum, used), (value, weight)| {
            (sum + f64::from(*value) * weight, used + weight)
        });

    if weight_used <= 0.0 {
        return 0;
    }
    let score = if weight_used < 1.0 { sum / weight_used } else { sum };
    to_score(score)
}

/// Mean of the measured components.
pub fn average_score(components: &ScoreComponents) -> u8 {
    let present: Vec<f64> = components
        .weighted()
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, _)| f64::from(*value))
        .collect();

    if present.is_empty() {
        return 0;
    }
    to_score(present.iter().sum::<f64>() / present.len() as f64)
}

pub fn grade_for(score: u8) -> Grade {
    match score {
        90.. => Grade::A,
        80..=89 => Grade::B,
        70..=79 => Grade::C,
        60..=69 => Grade::D,
        50..=59 => Grade::E,
        _ => Grade::F,
    }
}

fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
