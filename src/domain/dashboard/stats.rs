use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::asset::AssetDetail;
use crate::domain::format::{self, UNAVAILABLE};

/// Icon tag attached to a statistic; the presentation layer maps it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconKind {
    Dollar,
    Number,
    Thunderbolt,
    Trophy,
    Fund,
    MoneyCollect,
    Exclamation,
    Check,
    Stop,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Dollar => "💲",
            IconKind::Number => "#️⃣",
            IconKind::Thunderbolt => "⚡",
            IconKind::Trophy => "🏆",
            IconKind::Fund => "📈",
            IconKind::MoneyCollect => "💰",
            IconKind::Exclamation => "❗",
            IconKind::Check => "✅",
            IconKind::Stop => "⛔",
        }
    }
}

/// Display value of a statistic: text, or a two-state icon for flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatValue {
    Text(String),
    Icon(IconKind),
}

impl Display for StatValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StatValue::Text(text) => write!(f, "{}", text),
            StatValue::Icon(icon) => write!(f, "{}", icon.glyph()),
        }
    }
}

impl StatValue {
    fn unavailable() -> Self {
        StatValue::Text(UNAVAILABLE.to_string())
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StatValue::Text(text) if text == UNAVAILABLE)
    }
}

/// Display-ready statistic triple. Recomputed from the current detail on
/// every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticEntry {
    pub label: &'static str,
    pub value: StatValue,
    pub icon: IconKind,
}

impl StatisticEntry {
    fn new(label: &'static str, value: StatValue, icon: IconKind) -> Self {
        Self { label, value, icon }
    }

    fn text(label: &'static str, value: String, icon: IconKind) -> Self {
        Self::new(label, StatValue::Text(value), icon)
    }

    pub fn formatted_value(&self) -> String {
        self.value.to_string()
    }
}

pub const CORE_LABELS: [&str; 5] = [
    "Price to USD",
    "Rank",
    "24h Volume",
    "Market Cap",
    "All-time-high(daily avg.)",
];

pub const SECONDARY_LABELS: [&str; 5] = [
    "Number Of Markets",
    "Number Of Exchanges",
    "Approved Supply",
    "Total Supply",
    "Circulating Supply",
];

const CORE_ICONS: [IconKind; 5] = [
    IconKind::Dollar,
    IconKind::Number,
    IconKind::Thunderbolt,
    IconKind::Dollar,
    IconKind::Trophy,
];

const SECONDARY_ICONS: [IconKind; 5] = [
    IconKind::Fund,
    IconKind::MoneyCollect,
    IconKind::Exclamation,
    IconKind::Exclamation,
    IconKind::Exclamation,
];

fn placeholders(labels: [&'static str; 5], icons: [IconKind; 5]) -> [StatisticEntry; 5] {
    std::array::from_fn(|i| StatisticEntry::new(labels[i], StatValue::unavailable(), icons[i]))
}

/// Value statistics panel: price, rank, volume, market cap, all-time high.
pub fn derive_core(detail: Option<&AssetDetail>) -> [StatisticEntry; 5] {
    let Some(detail) = detail else {
        return placeholders(CORE_LABELS, CORE_ICONS);
    };

    [
        StatisticEntry::text(CORE_LABELS[0], format::currency(detail.price), CORE_ICONS[0]),
        StatisticEntry::text(CORE_LABELS[1], format::count(detail.rank), CORE_ICONS[1]),
        StatisticEntry::text(CORE_LABELS[2], format::currency(detail.volume_24h), CORE_ICONS[2]),
        StatisticEntry::text(CORE_LABELS[3], format::currency(detail.market_cap), CORE_ICONS[3]),
        StatisticEntry::text(
            CORE_LABELS[4],
            format::currency(detail.all_time_high_price()),
            CORE_ICONS[4],
        ),
    ]
}

/// Other statistics panel: markets, exchanges, supply.
///
/// A missing supply record counts as not confirmed; there is no third state.
pub fn derive_secondary(detail: Option<&AssetDetail>) -> [StatisticEntry; 5] {
    let Some(detail) = detail else {
        return placeholders(SECONDARY_LABELS, SECONDARY_ICONS);
    };

    let approved = if detail.supply_confirmed() {
        IconKind::Check
    } else {
        IconKind::Stop
    };
    let supply = detail.supply.as_ref();

    [
        StatisticEntry::text(
            SECONDARY_LABELS[0],
            format::count(detail.number_of_markets),
            SECONDARY_ICONS[0],
        ),
        StatisticEntry::text(
            SECONDARY_LABELS[1],
            format::count(detail.number_of_exchanges),
            SECONDARY_ICONS[1],
        ),
        StatisticEntry::new(SECONDARY_LABELS[2], StatValue::Icon(approved), SECONDARY_ICONS[2]),
        StatisticEntry::text(
            SECONDARY_LABELS[3],
            format::currency(supply.and_then(|s| s.total)),
            SECONDARY_ICONS[3],
        ),
        StatisticEntry::text(
            SECONDARY_LABELS[4],
            format::currency(supply.and_then(|s| s.circulating)),
            SECONDARY_ICONS[4],
        ),
    ]
}
