use futures::{
    StreamExt,
    channel::mpsc::{UnboundedSender, unbounded},
};
use leptos::*;
use std::rc::Rc;

use crate::{
    application::{
        AboutProps, ActiveView, ChartProps, DashboardMessage, DashboardView, FetchCommand,
        LinksProps, Screen, StatsPanelProps, TabItem, ViewComposer, execute,
    },
    domain::{
        asset::AssetDataSource,
        dashboard::HeaderSummary,
        format::UNAVAILABLE,
        logging::LogComponent,
    },
    infrastructure::{CoinRankingHttpClient, DashboardConfig},
    log_debug,
    presentation::line_chart::{CHART_HEIGHT, CHART_WIDTH, polyline_points},
};

/// 📮 Sender side of the composer inbox. Every user event and every query
/// result is delivered through here; nothing else writes the composer.
#[derive(Clone)]
pub struct Dispatcher {
    tx: UnboundedSender<DashboardMessage>,
}

impl Dispatcher {
    /// Messages sent after the loop has closed are dropped.
    pub fn send(&self, message: DashboardMessage) {
        if let Err(e) = self.tx.unbounded_send(message) {
            log_debug!(
                LogComponent::Presentation("Dashboard"),
                "dropped {:?}: inbox closed",
                e.into_inner()
            );
        }
    }

    pub fn close(&self) {
        self.tx.close_channel();
    }
}

/// Start the message loop for `composer`. Returned dispatcher feeds it.
pub fn spawn_dashboard_loop<S>(composer: RwSignal<ViewComposer>, source: Rc<S>) -> Dispatcher
where
    S: AssetDataSource + 'static,
{
    let (tx, mut rx) = unbounded::<DashboardMessage>();
    let dispatcher = Dispatcher { tx };
    let loop_dispatcher = dispatcher.clone();

    spawn_local(async move {
        let initial = composer.try_update(ViewComposer::start).unwrap_or_default();
        run_commands(&source, &loop_dispatcher, initial);

        while let Some(message) = rx.next().await {
            let commands = composer
                .try_update(|c| c.update(message))
                .unwrap_or_default();
            run_commands(&source, &loop_dispatcher, commands);
        }
        log_debug!(LogComponent::Presentation("Dashboard"), "message loop closed");
    });

    dispatcher
}

fn run_commands<S>(source: &Rc<S>, dispatcher: &Dispatcher, commands: Vec<FetchCommand>)
where
    S: AssetDataSource + 'static,
{
    for command in commands {
        let source = Rc::clone(source);
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            let message = execute(source.as_ref(), command).await;
            dispatcher.send(message);
        });
    }
}

/// 🦀 Single-asset dashboard
#[component]
pub fn CryptoDashboard(config: DashboardConfig) -> impl IntoView {
    let composer = create_rw_signal(ViewComposer::with_initial(
        config.asset_id.clone(),
        config.reference_asset_id.clone(),
        config.initial_window,
        config.initial_tab,
    ));
    let source = Rc::new(CoinRankingHttpClient::from_config(&config));
    let dispatcher = spawn_dashboard_loop(composer, source);

    let cleanup_dispatcher = dispatcher.clone();
    on_cleanup(move || cleanup_dispatcher.close());

    let screen = create_memo(move |_| composer.with(ViewComposer::screen));

    view! {
        <style>
            {r#"
            .coin-detail-container {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                max-width: 960px;
                margin: 0 auto;
                padding: 20px;
                display: flex;
                flex-direction: column;
                align-items: center;
            }

            .navigation, .time-period-nav {
                display: flex;
                gap: 8px;
                margin: 15px 0;
            }

            .nav-item, .time-period-button {
                background: #f0f2f5;
                border: 1px solid #d9d9d9;
                border-radius: 4px;
                padding: 5px 12px;
                cursor: pointer;
            }

            .nav-item.active, .time-period-button.active {
                background: #0071bd;
                color: white;
                border-color: #0071bd;
            }

            .coin-stats {
                display: flex;
                justify-content: space-between;
                border-bottom: 1px solid #d9d9d9;
                padding: 12px 0;
                min-width: 420px;
            }

            .coin-stats-name {
                display: flex;
                gap: 10px;
            }

            .stats {
                font-weight: 800;
            }

            .line-chart {
                width: 100%;
                height: auto;
                background: #fafafa;
                border-radius: 8px;
            }

            .loader {
                padding: 80px 0;
                text-align: center;
                color: #8c8c8c;
            }
            "#}
        </style>
        <div class="coin-detail-container">
            {move || match screen.get() {
                Screen::Loading => view! { <Loader /> }.into_view(),
                Screen::Dashboard(dashboard) => {
                    view! { <DashboardBody dashboard=dashboard dispatcher=dispatcher.clone() /> }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn Loader() -> impl IntoView {
    view! { <div class="loader">"Loading..."</div> }
}

#[component]
fn DashboardBody(dashboard: DashboardView, dispatcher: Dispatcher) -> impl IntoView {
    let DashboardView {
        header,
        tabs,
        active,
    } = dashboard;
    let nav_dispatcher = dispatcher.clone();

    // Only the active renderer is mounted
    let panel = match active {
        ActiveView::Chart(chart) => {
            view! { <ChartPanel chart=chart dispatcher=dispatcher /> }.into_view()
        }
        ActiveView::Statistics(stats) => {
            view! { <StatsView stats=stats css_class="coin-value-statistics" /> }.into_view()
        }
        ActiveView::OtherStatistics(stats) => {
            view! { <StatsView stats=stats css_class="other-stats-info" /> }.into_view()
        }
        ActiveView::About(about) => view! { <AboutPanel about=about /> }.into_view(),
        ActiveView::Links(links) => view! { <LinksPanel links=links /> }.into_view(),
    };

    view! {
        <Header header=header />
        <TabNavigation tabs=tabs dispatcher=nav_dispatcher />
        {panel}
    }
}

/// 📊 Reference price and window change
#[component]
fn Header(header: HeaderSummary) -> impl IntoView {
    let change = header.change_label();
    view! {
        <div class="coin-heading-container">
            <h2 class="coin-name">
                <div class="price-container">
                    <span class="price">{header.reference_price}</span>
                </div>
                <div class="price-change-container">{change}</div>
            </h2>
        </div>
    }
}

#[component]
fn TabNavigation(tabs: Vec<TabItem>, dispatcher: Dispatcher) -> impl IntoView {
    view! {
        <nav class="navigation">
            {tabs
                .into_iter()
                .map(|item| {
                    let dispatcher = dispatcher.clone();
                    view! {
                        <button
                            class="nav-item"
                            class:active=item.active
                            on:click=move |_| dispatcher.send(DashboardMessage::SelectTab(item.tab))
                        >
                            {item.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// 📈 Time-window bar and price line
#[component]
fn ChartPanel(chart: ChartProps, dispatcher: Dispatcher) -> impl IntoView {
    let points = chart
        .series
        .as_ref()
        .map(|series| polyline_points(series, CHART_WIDTH, CHART_HEIGHT))
        .filter(|points| !points.is_empty());
    let empty_text = if chart.refreshing {
        "Loading history..."
    } else {
        UNAVAILABLE
    };

    let buttons = chart
        .windows
        .into_iter()
        .map(|item| {
            let dispatcher = dispatcher.clone();
            view! {
                <button
                    class="time-period-button"
                    class:active=item.active
                    on:click=move |_| dispatcher.send(DashboardMessage::SelectWindow(item.window))
                >
                    {item.label().to_string()}
                </button>
            }
        })
        .collect_view();

    let plot = match points {
        Some(points) => view! {
            <svg
                class="line-chart"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="none"
            >
                <polyline points=points fill="none" stroke="#0071bd" stroke-width="2" />
            </svg>
        }
        .into_view(),
        None => view! { <p class="chart-empty">{empty_text}</p> }.into_view(),
    };

    view! {
        <div class="container">
            <div class="time-period-nav">{buttons}</div>
            <div class="chart-header">
                <h3 class="chart-title">{chart.title}</h3>
                <p class="current-price">"Current Price: " {chart.current_price}</p>
            </div>
            {plot}
        </div>
    }
}

#[component]
fn StatsView(stats: StatsPanelProps, css_class: &'static str) -> impl IntoView {
    view! {
        <div class=css_class>
            <div class="coin-value-statistics-heading">
                <h3 class="coin-details-heading">{stats.heading}</h3>
                <p>{stats.summary}</p>
            </div>
            {stats
                .entries
                .into_iter()
                .map(|entry| {
                    let value = entry.formatted_value();
                    view! {
                        <div class="coin-stats">
                            <div class="coin-stats-name">
                                <span>{entry.icon.glyph()}</span>
                                <span>{entry.label}</span>
                            </div>
                            <span class="stats">{value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AboutPanel(about: AboutProps) -> impl IntoView {
    let body = match about.description_html {
        Some(html) => view! { <div class="coin-desc-body" inner_html=html></div> }.into_view(),
        None => view! { <p class="coin-desc-body">{UNAVAILABLE}</p> }.into_view(),
    };
    view! {
        <div class="coin-desc">
            <h3 class="coin-details-heading">{about.heading}</h3>
            {body}
        </div>
    }
}

#[component]
fn LinksPanel(links: LinksProps) -> impl IntoView {
    let rows = if links.links.is_empty() {
        view! { <p class="coin-link">{UNAVAILABLE}</p> }.into_view()
    } else {
        links
            .links
            .into_iter()
            .map(|link| {
                view! {
                    <div class="coin-link">
                        <h5 class="link-name">{link.kind}</h5>
                        <a href=link.url target="_blank" rel="noreferrer">
                            {link.name}
                        </a>
                    </div>
                }
            })
            .collect_view()
    };
    view! {
        <div class="coin-links">
            <h3 class="coin-details-heading">{links.heading}</h3>
            {rows}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::ViewTab;

    #[test]
    fn send_after_close_is_dropped() {
        let (tx, mut rx) = unbounded::<DashboardMessage>();
        let dispatcher = Dispatcher { tx };

        dispatcher.send(DashboardMessage::SelectTab(ViewTab::About));
        dispatcher.close();
        dispatcher.send(DashboardMessage::SelectTab(ViewTab::Links));

        assert_eq!(
            rx.try_next().ok().flatten(),
            Some(DashboardMessage::SelectTab(ViewTab::About))
        );
        assert_eq!(rx.try_next().ok().flatten(), None);
    }
}
