use crypto_details_wasm::application::{ActiveView, DashboardMessage, DetailTarget, ViewComposer};
use crypto_details_wasm::domain::asset::{AssetDetail, AssetId, AssetLink, TimeWindow};
use crypto_details_wasm::domain::dashboard::ViewTab;

fn ready() -> ViewComposer {
    let mut composer =
        ViewComposer::new(AssetId::from("Qwsogvtv82FCd"), AssetId::from("Qwsogvtv82FCd"));
    let commands = composer.start();
    composer.update(DashboardMessage::DetailResolved {
        target: DetailTarget::Primary,
        request: commands[0].request(),
        detail: Some(AssetDetail {
            name: "Bitcoin".to_string(),
            description: "<p>Peer-to-peer cash</p>".to_string(),
            links: vec![AssetLink {
                name: "bitcoin.org".to_string(),
                kind: "website".to_string(),
                url: "https://bitcoin.org".to_string(),
            }],
            ..Default::default()
        }),
    });
    composer
}

#[test]
fn chart_is_the_default_tab() {
    let composer = ready();
    assert_eq!(composer.active_tab(), ViewTab::Chart);
}

#[test]
fn every_tab_switch_is_local() {
    let mut composer = ready();
    composer.update(DashboardMessage::SelectWindow(TimeWindow::ThirtyDays));

    for tab in ViewTab::all().into_iter().chain(ViewTab::all().into_iter().rev()) {
        assert!(composer.update(DashboardMessage::SelectTab(tab)).is_empty());
        assert_eq!(composer.active_window(), TimeWindow::ThirtyDays);
    }
}

#[test]
fn exactly_one_renderer_matches_active_tab() {
    let mut composer = ready();
    for tab in ViewTab::all() {
        composer.update(DashboardMessage::SelectTab(tab));
        let screen = composer.screen();
        let dashboard = screen.dashboard().expect("dashboard is ready");

        assert_eq!(dashboard.active.tab(), tab);
        let active: Vec<_> = dashboard.tabs.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, tab);
    }
}

#[test]
fn panels_receive_their_props() {
    let mut composer = ready();

    composer.update(DashboardMessage::SelectTab(ViewTab::About));
    match composer.screen().dashboard().map(|d| d.active.clone()) {
        Some(ActiveView::About(about)) => {
            assert_eq!(about.heading, "What is Bitcoin?");
            assert_eq!(about.description_html.as_deref(), Some("<p>Peer-to-peer cash</p>"));
        }
        other => panic!("unexpected view: {:?}", other),
    }

    composer.update(DashboardMessage::SelectTab(ViewTab::Links));
    match composer.screen().dashboard().map(|d| d.active.clone()) {
        Some(ActiveView::Links(links)) => {
            assert_eq!(links.heading, "Bitcoin Links");
            assert_eq!(links.links.len(), 1);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    composer.update(DashboardMessage::SelectTab(ViewTab::Statistics));
    match composer.screen().dashboard().map(|d| d.active.clone()) {
        Some(ActiveView::Statistics(stats)) => {
            assert_eq!(stats.heading, "Bitcoin Value Statistics");
            assert_eq!(stats.entries[0].label, "Price to USD");
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[test]
fn tab_labels_in_navigation_order() {
    let composer = ready();
    let screen = composer.screen();
    let labels: Vec<&str> = screen
        .dashboard()
        .map(|d| d.tabs.iter().map(|item| item.label).collect())
        .unwrap_or_default();
    assert_eq!(labels, ["Line Chart", "Statistics", "Other Stats", "About", "Links"]);
}

#[quickcheck_macros::quickcheck]
fn tabs_never_touch_the_window(picks: Vec<u8>) -> bool {
    let tabs = ViewTab::all();
    let mut composer = ready();
    picks.iter().all(|pick| {
        let tab = tabs[*pick as usize % tabs.len()];
        composer.update(DashboardMessage::SelectTab(tab)).is_empty()
            && composer.active_window() == TimeWindow::SevenDays
            && composer.active_tab() == tab
    })
}

#[test]
fn chart_price_has_no_prefix_when_absent() {
    let composer = ready();
    match composer.screen().dashboard().map(|d| d.active.clone()) {
        Some(ActiveView::Chart(chart)) => {
            assert_eq!(chart.title, "Bitcoin Price Chart");
            assert_eq!(chart.current_price, "unavailable");
        }
        other => panic!("unexpected view: {:?}", other),
    }

    let mut composer =
        ViewComposer::new(AssetId::from("Qwsogvtv82FCd"), AssetId::from("Qwsogvtv82FCd"));
    let commands = composer.start();
    composer.update(DashboardMessage::DetailResolved {
        target: DetailTarget::Primary,
        request: commands[0].request(),
        detail: Some(AssetDetail {
            price: Some(65_000_000.0),
            ..Default::default()
        }),
    });
    match composer.screen().dashboard().map(|d| d.active.clone()) {
        Some(ActiveView::Chart(chart)) => assert_eq!(chart.current_price, "$ 65M"),
        other => panic!("unexpected view: {:?}", other),
    }
}
