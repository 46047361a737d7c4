use crate::application::query::{HistoryQuery, QuerySlot, RequestId};
use crate::application::view::{
    AboutProps, ActiveView, ChartProps, DashboardView, LinksProps, Screen, StatsPanelProps,
    TabItem, WindowItem,
};
use crate::domain::{
    asset::{AssetDetail, AssetId, HistorySeries, TimeWindow},
    dashboard::{
        DataAvailabilityGate, HeaderSummary, TabController, TimeWindowSelector, ViewTab,
        derive_core, derive_secondary,
    },
    format::{self, UNAVAILABLE},
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::log_debug;

const COMPONENT: LogComponent = LogComponent::Application("ViewComposer");

/// Which detail query a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTarget {
    Primary,
    Reference,
}

/// Inbox of the composer: user input and data-source resolutions.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMessage {
    SelectTab(ViewTab),
    SelectWindow(TimeWindow),
    AssetChanged(AssetId),
    DetailResolved {
        target: DetailTarget,
        request: RequestId,
        detail: Option<AssetDetail>,
    },
    HistoryResolved {
        request: RequestId,
        window: TimeWindow,
        series: Option<HistorySeries>,
    },
}

/// Outbox of the composer: queries the data source must run.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    AssetDetail {
        target: DetailTarget,
        request: RequestId,
        asset: AssetId,
    },
    AssetHistory {
        request: RequestId,
        asset: AssetId,
        window: TimeWindow,
    },
}

impl FetchCommand {
    pub fn request(&self) -> RequestId {
        match self {
            FetchCommand::AssetDetail { request, .. } | FetchCommand::AssetHistory { request, .. } => {
                *request
            }
        }
    }
}

/// Owner of the dashboard state.
///
/// Tab and window are independent axes; only the window feeds a query.
/// Every mutation goes through [`ViewComposer::update`], which returns the
/// queries to run. Results come back as messages tagged with their ticket.
#[derive(Debug, Clone)]
pub struct ViewComposer {
    asset: AssetId,
    reference: AssetId,
    tabs: TabController,
    windows: TimeWindowSelector,
    primary: QuerySlot<AssetDetail>,
    reference_detail: QuerySlot<AssetDetail>,
    history: HistoryQuery,
    next_request: RequestId,
}

impl ViewComposer {
    pub fn new(asset: AssetId, reference: AssetId) -> Self {
        Self::with_initial(asset, reference, TimeWindow::default(), ViewTab::default())
    }

    pub fn with_initial(
        asset: AssetId,
        reference: AssetId,
        window: TimeWindow,
        tab: ViewTab,
    ) -> Self {
        Self {
            asset,
            reference,
            tabs: TabController::new(tab),
            windows: TimeWindowSelector::new(window),
            primary: QuerySlot::default(),
            reference_detail: QuerySlot::default(),
            history: HistoryQuery::default(),
            next_request: 0,
        }
    }

    fn ticket(&mut self) -> RequestId {
        self.next_request += 1;
        self.next_request
    }

    /// Queries issued when the dashboard mounts.
    pub fn start(&mut self) -> Vec<FetchCommand> {
        log_debug!(COMPONENT, "mount: asset={} window={}", self.asset, self.windows.current());
        vec![
            self.issue_primary(),
            self.issue_history(),
            self.issue_reference(),
        ]
    }

    fn issue_primary(&mut self) -> FetchCommand {
        let request = self.ticket();
        self.primary.issue(request);
        FetchCommand::AssetDetail {
            target: DetailTarget::Primary,
            request,
            asset: self.asset.clone(),
        }
    }

    fn issue_reference(&mut self) -> FetchCommand {
        let request = self.ticket();
        self.reference_detail.issue(request);
        FetchCommand::AssetDetail {
            target: DetailTarget::Reference,
            request,
            asset: self.reference.clone(),
        }
    }

    fn issue_history(&mut self) -> FetchCommand {
        let request = self.ticket();
        let window = self.windows.current();
        self.history.issue(request, window);
        FetchCommand::AssetHistory {
            request,
            asset: self.asset.clone(),
            window,
        }
    }

    pub fn update(&mut self, message: DashboardMessage) -> Vec<FetchCommand> {
        match message {
            DashboardMessage::SelectTab(tab) => {
                self.on_select_tab(tab);
                Vec::new()
            }
            DashboardMessage::SelectWindow(window) => {
                self.on_select_window(window).into_iter().collect()
            }
            DashboardMessage::AssetChanged(asset) => self.on_asset_changed(asset),
            DashboardMessage::DetailResolved {
                target,
                request,
                detail,
            } => {
                self.on_detail_resolved(target, request, detail);
                Vec::new()
            }
            DashboardMessage::HistoryResolved {
                request,
                window,
                series,
            } => {
                self.on_history_resolved(request, window, series);
                Vec::new()
            }
        }
    }

    /// Pure local switch; never fetches.
    pub fn on_select_tab(&mut self, tab: ViewTab) {
        if self.tabs.select(tab) {
            log_debug!(COMPONENT, "tab -> {}", tab);
        }
    }

    /// Re-issues the history query when the window actually changes.
    pub fn on_select_window(&mut self, window: TimeWindow) -> Option<FetchCommand> {
        if !self.windows.select(window) {
            return None;
        }
        log_debug!(COMPONENT, "window -> {}", window);
        Some(self.issue_history())
    }

    fn on_asset_changed(&mut self, asset: AssetId) -> Vec<FetchCommand> {
        if asset == self.asset {
            return Vec::new();
        }
        log_debug!(COMPONENT, "asset {} -> {}", self.asset, asset);
        self.asset = asset;
        self.primary.reset();
        self.history.reset();
        vec![self.issue_primary(), self.issue_history()]
    }

    fn on_detail_resolved(
        &mut self,
        target: DetailTarget,
        request: RequestId,
        detail: Option<AssetDetail>,
    ) {
        let failed = detail.is_none();
        let slot = match target {
            DetailTarget::Primary => &mut self.primary,
            DetailTarget::Reference => &mut self.reference_detail,
        };
        if !slot.resolve(request, detail) {
            log_debug!(COMPONENT, "dropped stale {:?} detail #{}", target, request);
            return;
        }
        if failed {
            let asset = match target {
                DetailTarget::Primary => &self.asset,
                DetailTarget::Reference => &self.reference,
            };
            get_logger().log_with_metadata(
                LogLevel::Warn,
                COMPONENT,
                "detail resolved without data",
                &format!("target={:?} request={} asset={}", target, request, asset),
            );
        }
    }

    fn on_history_resolved(
        &mut self,
        request: RequestId,
        window: TimeWindow,
        series: Option<HistorySeries>,
    ) {
        let failed = series.is_none();
        if !self.history.resolve(request, window, series) {
            log_debug!(COMPONENT, "dropped stale {} history #{}", window, request);
            return;
        }
        if failed {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                COMPONENT,
                "history resolved without data",
                &format!("window={} request={} asset={}", window, request, self.asset),
            );
        }
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }

    pub fn active_tab(&self) -> ViewTab {
        self.tabs.current()
    }

    pub fn active_window(&self) -> TimeWindow {
        self.windows.current()
    }

    pub fn primary_detail(&self) -> Option<&AssetDetail> {
        self.primary.data()
    }

    pub fn reference_detail(&self) -> Option<&AssetDetail> {
        self.reference_detail.data()
    }

    /// Series for the active window only.
    pub fn displayed_history(&self) -> Option<&HistorySeries> {
        self.history.series_for(self.windows.current())
    }

    pub fn history_in_flight(&self) -> bool {
        self.history.in_flight()
    }

    pub fn should_render_loading(&self) -> bool {
        DataAvailabilityGate::should_render_loading(self.primary.awaiting_first_result())
    }

    /// Project the current state onto the single renderer to mount.
    pub fn screen(&self) -> Screen {
        if self.should_render_loading() {
            return Screen::Loading;
        }

        let tabs = ViewTab::all()
            .into_iter()
            .map(|tab| TabItem {
                tab,
                label: tab.label(),
                active: self.tabs.is_selected(tab),
            })
            .collect();

        Screen::Dashboard(DashboardView {
            header: HeaderSummary::derive(self.reference_detail(), self.displayed_history()),
            tabs,
            active: self.active_view(),
        })
    }

    fn asset_name(&self) -> String {
        self.primary_detail()
            .map(|detail| detail.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    fn active_view(&self) -> ActiveView {
        let detail = self.primary_detail();
        let name = self.asset_name();

        match self.tabs.current() {
            ViewTab::Chart => ActiveView::Chart(ChartProps {
                title: format!("{} Price Chart", name),
                current_price: format::currency(detail.and_then(|d| d.price)),
                window: self.windows.current(),
                windows: TimeWindow::all()
                    .into_iter()
                    .map(|window| WindowItem {
                        window,
                        active: self.windows.is_selected(window),
                    })
                    .collect(),
                series: self.displayed_history().cloned(),
                refreshing: self.history.in_flight(),
            }),
            ViewTab::Statistics => ActiveView::Statistics(StatsPanelProps {
                heading: format!("{} Value Statistics", name),
                summary: panel_summary(&name),
                entries: derive_core(detail),
            }),
            ViewTab::OtherStatistics => ActiveView::OtherStatistics(StatsPanelProps {
                heading: "Other Stats Info".to_string(),
                summary: panel_summary(&name),
                entries: derive_secondary(detail),
            }),
            ViewTab::About => ActiveView::About(AboutProps {
                heading: format!("What is {}?", name),
                description_html: detail.map(|d| d.description.clone()),
            }),
            ViewTab::Links => ActiveView::Links(LinksProps {
                heading: format!("{} Links", name),
                links: detail.map(|d| d.links.clone()).unwrap_or_default(),
            }),
        }
    }
}

fn panel_summary(name: &str) -> String {
    format!(
        "An overview showing the statistics of {}, such as the base and quote currency, the rank, and trading volume.",
        name
    )
}
