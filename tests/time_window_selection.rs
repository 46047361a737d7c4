use crypto_details_wasm::application::{
    DashboardMessage, DetailTarget, FetchCommand, ViewComposer,
};
use crypto_details_wasm::domain::asset::{
    AssetDetail, AssetId, HistorySeries, PricePoint, TimeWindow,
};

fn mounted() -> (ViewComposer, Vec<FetchCommand>) {
    let mut composer =
        ViewComposer::new(AssetId::from("Qwsogvtv82FCd"), AssetId::from("Qwsogvtv82FCd"));
    let commands = composer.start();
    (composer, commands)
}

fn history_request(commands: &[FetchCommand]) -> (u64, TimeWindow) {
    commands
        .iter()
        .find_map(|command| match command {
            FetchCommand::AssetHistory {
                request, window, ..
            } => Some((*request, *window)),
            FetchCommand::AssetDetail { .. } => None,
        })
        .expect("history command")
}

fn series(price: f64) -> HistorySeries {
    HistorySeries::new(
        vec![
            PricePoint {
                timestamp: 1,
                price: Some(price),
            },
            PricePoint {
                timestamp: 2,
                price: Some(price + 1.0),
            },
        ],
        Some(price / 100.0),
    )
}

fn resolve_history(composer: &mut ViewComposer, request: (u64, TimeWindow), price: f64) {
    composer.update(DashboardMessage::HistoryResolved {
        request: request.0,
        window: request.1,
        series: Some(series(price)),
    });
}

#[test]
fn initial_window_is_seven_days() {
    let (composer, commands) = mounted();
    assert_eq!(composer.active_window(), TimeWindow::SevenDays);
    assert_eq!(history_request(&commands).1, TimeWindow::SevenDays);
}

#[test]
fn stale_window_result_never_displays() {
    let (mut composer, commands) = mounted();
    let seven_days = history_request(&commands);

    let thirty_days =
        history_request(&composer.update(DashboardMessage::SelectWindow(TimeWindow::ThirtyDays)));
    assert_eq!(thirty_days.1, TimeWindow::ThirtyDays);
    assert!(composer.displayed_history().is_none());

    resolve_history(&mut composer, seven_days, 7.0);
    assert!(composer.displayed_history().is_none());
    assert!(composer.history_in_flight());

    resolve_history(&mut composer, thirty_days, 30.0);
    assert_eq!(composer.displayed_history(), Some(&series(30.0)));
}

#[test]
fn last_selected_window_wins() {
    let (mut composer, _) = mounted();
    let three_hours =
        history_request(&composer.update(DashboardMessage::SelectWindow(TimeWindow::ThreeHours)));
    let three_years =
        history_request(&composer.update(DashboardMessage::SelectWindow(TimeWindow::ThreeYears)));

    resolve_history(&mut composer, three_years, 3.0);
    resolve_history(&mut composer, three_hours, 0.3);

    assert_eq!(composer.active_window(), TimeWindow::ThreeYears);
    assert_eq!(composer.displayed_history(), Some(&series(3.0)));
}

#[test]
fn same_window_does_not_refetch() {
    let (mut composer, _) = mounted();
    assert!(composer.update(DashboardMessage::SelectWindow(TimeWindow::SevenDays)).is_empty());

    let commands = composer.update(DashboardMessage::SelectWindow(TimeWindow::ThirtyDays));
    assert_eq!(commands.len(), 1);
    assert!(composer.update(DashboardMessage::SelectWindow(TimeWindow::ThirtyDays)).is_empty());
}

#[test]
fn returning_to_cached_window_shows_it_at_once() {
    let (mut composer, commands) = mounted();
    resolve_history(&mut composer, history_request(&commands), 7.0);

    let thirty_days =
        history_request(&composer.update(DashboardMessage::SelectWindow(TimeWindow::ThirtyDays)));
    resolve_history(&mut composer, thirty_days, 30.0);

    let back = composer.update(DashboardMessage::SelectWindow(TimeWindow::SevenDays));
    assert_eq!(back.len(), 1);
    assert_eq!(composer.displayed_history(), Some(&series(7.0)));
}

#[test]
fn window_change_keeps_detail() {
    let (mut composer, commands) = mounted();
    composer.update(DashboardMessage::DetailResolved {
        target: DetailTarget::Primary,
        request: commands[0].request(),
        detail: Some(AssetDetail {
            name: "Bitcoin".to_string(),
            ..Default::default()
        }),
    });
    composer.update(DashboardMessage::SelectWindow(TimeWindow::ThreeMonths));
    assert_eq!(composer.primary_detail().map(|d| d.name.as_str()), Some("Bitcoin"));
    assert!(!composer.should_render_loading());
}

#[quickcheck_macros::quickcheck]
fn last_selection_wins_for_any_sequence(picks: Vec<u8>, resolve_reversed: bool) -> bool {
    let windows = TimeWindow::all();
    let (mut composer, commands) = mounted();
    let mut issued = vec![history_request(&commands)];

    for pick in &picks {
        let window = windows[*pick as usize % windows.len()];
        let reissued = composer.update(DashboardMessage::SelectWindow(window));
        if !reissued.is_empty() {
            issued.push(history_request(&reissued));
        }
    }
    if resolve_reversed {
        issued.reverse();
    }
    for request in &issued {
        resolve_history(&mut composer, *request, request.0 as f64);
    }

    let active = composer.active_window();
    let latest = issued.iter().max_by_key(|(ticket, _)| *ticket).map(|r| r.0);
    active == picks.last().map_or(TimeWindow::SevenDays, |p| windows[*p as usize % windows.len()])
        && composer.displayed_history() == latest.map(|ticket| series(ticket as f64)).as_ref()
}
