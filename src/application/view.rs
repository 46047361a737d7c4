use crate::domain::{
    asset::{AssetLink, HistorySeries, TimeWindow},
    dashboard::{HeaderSummary, StatisticEntry, ViewTab},
};

/// What the presentation layer should mount right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Dashboard(DashboardView),
}

impl Screen {
    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading)
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match self {
            Screen::Dashboard(view) => Some(view),
            Screen::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub header: HeaderSummary,
    pub tabs: Vec<TabItem>,
    pub active: ActiveView,
}

/// Entry of the tab navigation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabItem {
    pub tab: ViewTab,
    pub label: &'static str,
    pub active: bool,
}

/// Entry of the time-window control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowItem {
    pub window: TimeWindow,
    pub active: bool,
}

impl WindowItem {
    pub fn label(&self) -> &str {
        self.window.label()
    }
}

/// Exactly one renderer with exactly the data it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Chart(ChartProps),
    Statistics(StatsPanelProps),
    OtherStatistics(StatsPanelProps),
    About(AboutProps),
    Links(LinksProps),
}

impl ActiveView {
    pub fn tab(&self) -> ViewTab {
        match self {
            ActiveView::Chart(_) => ViewTab::Chart,
            ActiveView::Statistics(_) => ViewTab::Statistics,
            ActiveView::OtherStatistics(_) => ViewTab::OtherStatistics,
            ActiveView::About(_) => ViewTab::About,
            ActiveView::Links(_) => ViewTab::Links,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartProps {
    pub title: String,
    pub current_price: String,
    pub window: TimeWindow,
    pub windows: Vec<WindowItem>,
    pub series: Option<HistorySeries>,
    pub refreshing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanelProps {
    pub heading: String,
    pub summary: String,
    pub entries: [StatisticEntry; 5],
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutProps {
    pub heading: String,
    /// Markup passed through untouched; `None` when the detail is absent.
    pub description_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinksProps {
    pub heading: String,
    pub links: Vec<AssetLink>,
}
