use serde::{Deserialize, Serialize};

use crate::filters::{classify, AmountClass};

/// Change of a figure relative to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variance {
    pub dollar_delta: f64,
    /// `None` when the baseline is zero.
    pub percent_delta: Option<f64>,
}

impl Variance {
    pub fn class(&self) -> AmountClass {
        classify(self.dollar_delta)
    }
}

/// How a change in spending reads to the user: spending more is bad news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceTone {
    Favorable,
    Unfavorable,
    Unchanged,
}

impl VarianceTone {
    pub fn for_spending(dollar_delta: f64) -> Self {
        match classify(dollar_delta) {
            AmountClass::Positive => Self::Unfavorable,
            AmountClass::Negative => Self::Favorable,
            AmountClass::Neutral => Self::Unchanged,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Favorable => "text-green-600 dark:text-green-400",
            Self::Unfavorable => "text-red-600 dark:text-red-400",
            Self::Unchanged => "text-gray-500 dark:text-gray-400",
        }
    }
}
