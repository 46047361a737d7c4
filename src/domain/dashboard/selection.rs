use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::asset::TimeWindow;
use crate::domain::errors::{AppError, ValidationResult};

/// Value Object - the five mutually exclusive dashboard panels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ViewTab {
    #[default]
    #[strum(serialize = "linechart")]
    #[serde(rename = "linechart")]
    Chart,

    #[strum(serialize = "statistics")]
    #[serde(rename = "statistics")]
    Statistics,

    #[strum(serialize = "otherstats")]
    #[serde(rename = "otherstats")]
    OtherStatistics,

    #[strum(serialize = "about")]
    #[serde(rename = "about")]
    About,

    #[strum(serialize = "links")]
    #[serde(rename = "links")]
    Links,
}

impl ViewTab {
    /// Navigation order.
    pub fn all() -> Vec<ViewTab> {
        ViewTab::iter().collect()
    }

    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Chart => "Line Chart",
            ViewTab::Statistics => "Statistics",
            ViewTab::OtherStatistics => "Other Stats",
            ViewTab::About => "About",
            ViewTab::Links => "Links",
        }
    }

    /// Strict parse: unknown keys are a contract violation, not a fallback.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        ViewTab::from_str(value)
            .map_err(|_| AppError::ValidationError(format!("Unknown view tab: {}", value)))
    }
}

/// Single-value cell with replace semantics.
///
/// `select` reports whether the value actually changed so the owner can
/// decide synchronously whether anything downstream must be re-issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector<T> {
    current: T,
}

impl<T: Copy + PartialEq> Selector<T> {
    pub fn new(initial: T) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> T {
        self.current
    }

    /// Replace the current value. Returns `false` when it was already active.
    pub fn select(&mut self, value: T) -> bool {
        if self.current == value {
            return false;
        }
        self.current = value;
        true
    }

    pub fn is_selected(&self, value: T) -> bool {
        self.current == value
    }
}

pub type TimeWindowSelector = Selector<TimeWindow>;
pub type TabController = Selector<ViewTab>;
