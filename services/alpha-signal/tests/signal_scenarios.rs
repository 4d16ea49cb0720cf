//! End-to-end signal scenarios over realistic tapes

use alpha_signal::{SignalEngine, SignalKind};

fn feed(engine: &SignalEngine, prices: impl IntoIterator<Item = f64>) {
    for price in prices {
        engine.update(price, 1000.0, price);
    }
}

#[test]
fn signal_floor_then_activation() {
    let engine = SignalEngine::default();

    feed(&engine, (0..30).map(|i| 100.0 + i as f64));
    assert_eq!(engine.history_size(), 30);

    let floor = engine.generate();
    assert_eq!(floor.signal, SignalKind::Hold);
    assert_eq!(floor.strength, 0.0);
    assert_eq!(floor.reason, "Insufficient data");

    engine.update(130.0, 1000.0, 130.0);
    let active = engine.generate();

    // On a monotone ramp the overbought RSI cancels the MA and momentum
    // contributions, so the first activated signal still holds.
    assert_eq!(active.signal, SignalKind::Hold);
    assert_eq!(active.rsi, 100.0);
    assert!(active.sma_short > active.sma_long);
    assert!(active.momentum > 0.0);
    assert!(active.volatility < 5.0);
}

#[test]
fn oversold_dip_then_strong_rally_signals_buy() {
    let engine = SignalEngine::default();

    // 20 gently declining prices, then a strong rally with pullbacks: two
    // +1.2 steps followed by a -1.1 step, five times over.
    let mut prices: Vec<f64> = (0..20).map(|i| 100.0 - 0.3 * i as f64).collect();
    let mut last = *prices.last().unwrap();
    for _ in 0..5 {
        for step in [1.2, 1.2, -1.1] {
            last += step;
            prices.push(last);
        }
    }
    assert_eq!(prices.len(), 35);
    feed(&engine, prices);

    let signal = engine.generate();
    assert!(
        matches!(signal.signal, SignalKind::Buy | SignalKind::StrongBuy),
        "expected a buy, got {:?} ({})",
        signal.signal,
        signal.reason
    );
    assert!(signal.strength > 0.0);
    assert!(signal.sma_short > signal.sma_long);
    assert!(signal.momentum > 2.0);
    assert!(signal.rsi > 60.0 && signal.rsi < 70.0);
    assert_eq!(signal.reason, "MA↑ RSI↑ Mom↑");
}

#[test]
fn overbought_rally_shows_sell_characteristics() {
    let engine = SignalEngine::default();

    // 25 rising prices then a sharp 10-step decline
    let mut prices: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let top = *prices.last().unwrap();
    prices.extend((1..=10).map(|i| top - 2.0 * i as f64));
    feed(&engine, prices);

    let signal = engine.generate();
    assert!(signal.momentum < 0.0);
    assert!(signal.signal.as_i8() <= 0);
}

#[test]
fn strength_and_rsi_stay_bounded_across_regimes() {
    let engine = SignalEngine::default();
    let regimes: Vec<f64> = (0..50)
        .map(|i| 100.0 + i as f64)
        .chain((0..50).map(|i| 150.0 - 2.0 * i as f64))
        .chain((0..50).map(|i| 50.0 + ((i * 7) % 13) as f64))
        .collect();

    for price in regimes {
        engine.update(price, 1000.0, price);
        let signal = engine.generate();
        assert!((0.0..=1.0).contains(&signal.strength));
        assert!((0.0..=100.0).contains(&signal.rsi));
        assert!(signal.volatility >= 0.0);
    }
}
