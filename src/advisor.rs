//! Rule-based prediction commentary
//!
//! Templated explanatory text for a finished prediction: trend
//! description, confidence wording, and generic suggestions keyed on
//! the caller's risk profile and investment horizon. Pure string
//! assembly, no numeric logic beyond reading the probability vector.

use crate::inference::prediction::{TrendLabel, TrendPrediction};

/// Caller's risk tolerance, defaulting to Medium for unknown input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskProfile {
    Low,
    Medium,
    High,
}

impl RiskProfile {
    /// Parse a free-form profile string, falling back to Medium
    pub fn parse(input: &str) -> RiskProfile {
        match input.trim().to_lowercase().as_str() {
            "low" => RiskProfile::Low,
            "high" => RiskProfile::High,
            _ => RiskProfile::Medium,
        }
    }

    /// Lowercase name as used in rendered text
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "low",
            RiskProfile::Medium => "medium",
            RiskProfile::High => "high",
        }
    }
}

/// Caller's investment horizon, defaulting to Short for unknown input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    Short,
    Medium,
    Long,
}

impl Horizon {
    /// Parse a free-form horizon string, falling back to Short
    pub fn parse(input: &str) -> Horizon {
        match input.trim().to_lowercase().as_str() {
            "medium" => Horizon::Medium,
            "long" => Horizon::Long,
            _ => Horizon::Short,
        }
    }

    /// Lowercase name as used in rendered text
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Short => "short",
            Horizon::Medium => "medium",
            Horizon::Long => "long",
        }
    }
}

/// Render an explanation for a prediction
///
/// # Arguments
/// * `prediction` - The finished prediction payload
/// * `risk` - Caller's risk profile
/// * `horizon` - Caller's investment horizon
///
/// # Returns
/// A multi-sentence plain-text commentary ending in a disclaimer
pub fn explain(prediction: &TrendPrediction, risk: RiskProfile, horizon: Horizon) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "Model view: The current chart pattern looks {} to the model.",
        prediction.trend
    ));

    let max_p = prediction.probabilities.max();
    parts.push(
        if max_p >= 0.75 {
            "The model is fairly confident in this view."
        } else if max_p >= 0.55 {
            "The model has moderate confidence in this view."
        } else {
            "The model is not very confident; signals are mixed."
        }
        .to_string(),
    );

    parts.push(
        match prediction.trend {
            TrendLabel::Up => {
                "The price has been making higher levels recently. This often suggests positive \
                 momentum, but it does not guarantee that the price will keep going up."
            }
            TrendLabel::Down => {
                "The price has been moving lower. This can indicate selling pressure or weakness \
                 in the short term, but bounces can still happen."
            }
            TrendLabel::Sideways => {
                "The price looks range-bound, without a strong upward or downward direction. \
                 This often happens before a larger move, but the direction is uncertain."
            }
        }
        .to_string(),
    );

    parts.push(
        match risk {
            RiskProfile::Low => {
                "Since you mentioned a low risk profile, it may make sense to focus more on \
                 capital protection, diversification, and avoiding emotional decisions based \
                 purely on short-term moves."
            }
            RiskProfile::Medium => {
                "With a medium risk profile, balancing risk and reward is important. You might \
                 want to combine trend analysis with fundamentals, news, and proper risk \
                 management."
            }
            RiskProfile::High => {
                "With a high risk profile, you might be more comfortable with volatility, but \
                 it's still important to define clear entry/exit rules and position sizes."
            }
        }
        .to_string(),
    );

    parts.push(
        match horizon {
            Horizon::Short => {
                "For a short-term horizon, trends can change quickly. Short-term traders often \
                 pay attention to support/resistance levels, volume, and intraday volatility."
            }
            Horizon::Medium => {
                "For a medium-term horizon, combining this trend with weekly charts and broader \
                 market direction can give additional context."
            }
            Horizon::Long => {
                "For a long-term horizon, single chart patterns are less important than the \
                 overall business strength, earnings, and macroeconomic environment."
            }
        }
        .to_string(),
    );

    parts.push(
        "Note: This is not financial advice. Please do your own research and consider \
         consulting a qualified financial advisor before making any investment decisions."
            .to_string(),
    );

    parts.join(" ")
}
