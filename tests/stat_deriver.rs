use crypto_details_wasm::domain::asset::{AllTimeHigh, AssetDetail, AssetId, Supply};
use crypto_details_wasm::domain::dashboard::{
    CORE_LABELS, IconKind, SECONDARY_LABELS, StatValue, StatisticEntry, derive_core,
    derive_secondary,
};
use crypto_details_wasm::domain::format::UNAVAILABLE;
use quickcheck_macros::quickcheck;

fn bitcoin() -> AssetDetail {
    AssetDetail {
        id: AssetId::from("Qwsogvtv82FCd"),
        name: "Bitcoin".to_string(),
        price: Some(65_000_000.0),
        rank: Some(1),
        volume_24h: None,
        market_cap: Some(1_200_000_000_000.0),
        all_time_high: Some(AllTimeHigh {
            price: Some(69_000_000.0),
        }),
        ..Default::default()
    }
}

fn render(entries: &[StatisticEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.label, entry.formatted_value()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn bitcoin_core_statistics() {
    let entries = derive_core(Some(&bitcoin()));
    insta::assert_snapshot!(render(&entries), @r"
    Price to USD: $ 65M
    Rank: 1
    24h Volume: unavailable
    Market Cap: $ 1.2T
    All-time-high(daily avg.): $ 69M
    ");
}

#[test]
fn labels_keep_fixed_order() {
    let core = derive_core(Some(&bitcoin()));
    let secondary = derive_secondary(Some(&bitcoin()));
    assert_eq!(core.iter().map(|e| e.label).collect::<Vec<_>>(), CORE_LABELS);
    assert_eq!(
        secondary.iter().map(|e| e.label).collect::<Vec<_>>(),
        SECONDARY_LABELS
    );
}

#[test]
fn absent_detail_is_all_placeholders() {
    for entry in derive_core(None).iter().chain(derive_secondary(None).iter()) {
        assert_eq!(entry.formatted_value(), UNAVAILABLE);
        assert!(entry.value.is_unavailable());
    }
}

#[test]
fn zero_is_a_value() {
    let detail = AssetDetail {
        number_of_markets: Some(0),
        ..Default::default()
    };
    let secondary = derive_secondary(Some(&detail));
    assert_eq!(secondary[0].formatted_value(), "0");
    assert!(secondary[1].value.is_unavailable());
}

#[test]
fn approved_supply_is_two_state() {
    let confirmed = AssetDetail {
        supply: Some(Supply {
            total: Some(21_000_000.0),
            circulating: Some(19_700_000.0),
            confirmed: true,
        }),
        ..Default::default()
    };
    let missing = AssetDetail::default();

    let stats = derive_secondary(Some(&confirmed));
    assert_eq!(stats[2].value, StatValue::Icon(IconKind::Check));
    assert_eq!(stats[3].formatted_value(), "$ 21M");
    assert_eq!(stats[4].formatted_value(), "$ 19.7M");
    assert_eq!(derive_secondary(Some(&missing))[2].value, StatValue::Icon(IconKind::Stop));
}

fn present(mask: u16, bit: u16) -> bool {
    mask & (1 << bit) != 0
}

/// Detail whose nine numeric fields are each present iff their bit is set.
fn masked_detail(mask: u16) -> AssetDetail {
    let keep = |bit: u16, value: f64| Some(value).filter(|_| present(mask, bit));
    AssetDetail {
        name: "Bitcoin".to_string(),
        price: keep(0, 65_000_000.0),
        rank: Some(1).filter(|_| present(mask, 1)),
        volume_24h: keep(2, 3_400_000_000.0),
        market_cap: keep(3, 1_200_000_000_000.0),
        all_time_high: Some(AllTimeHigh {
            price: keep(4, 69_000_000.0),
        }),
        number_of_markets: Some(0).filter(|_| present(mask, 5)),
        number_of_exchanges: Some(120).filter(|_| present(mask, 6)),
        supply: Some(Supply {
            total: keep(7, 21_000_000.0),
            circulating: keep(8, 19_700_000.0),
            confirmed: present(mask, 9),
        }),
        ..Default::default()
    }
}

#[quickcheck]
fn absent_fields_map_to_placeholder(mask: u16) -> bool {
    let detail = masked_detail(mask);
    let core = derive_core(Some(&detail));
    let secondary = derive_secondary(Some(&detail));

    let core_ok = (0..5).all(|i| present(mask, i as u16) != core[i].value.is_unavailable());
    let secondary_ok = [(0, 5), (1, 6), (3, 7), (4, 8)]
        .iter()
        .all(|&(i, bit)| present(mask, bit) != secondary[i].value.is_unavailable());
    let approved = if present(mask, 9) {
        IconKind::Check
    } else {
        IconKind::Stop
    };

    core_ok && secondary_ok && secondary[2].value == StatValue::Icon(approved)
}

#[quickcheck]
fn present_prices_never_render_empty(price: f64) -> bool {
    let detail = AssetDetail {
        price: Some(price),
        ..Default::default()
    };
    let value = derive_core(Some(&detail))[0].formatted_value();
    !value.is_empty() && (price.is_finite() || value == UNAVAILABLE)
}
