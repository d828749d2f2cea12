//! Basic example demonstrating the alarm rules
//!
//! Run with: cargo run --example basic -p alarm-facade

use alarm_facade::{
    AlarmMonitor, AlarmRule, AlarmStream, BiasRule, DriftRule, NelsonRule1, NelsonRule2,
    OutlierRule,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== alarm-facade Basic Examples ===\n");

    // A process variable sampled around 5.0, with a stuck-high tail
    let mut series = vec![
        5.02, 4.98, 5.01, 4.99, 5.03, 4.97, 5.00, 5.02, 4.98, 5.01,
    ];
    series.extend(vec![5.6; 10]);
    series[8] = 9.5; // isolated spike

    println!("Series: {:?}\n", series);

    // 1. Outlier rule (pointwise)
    println!("1. Outlier rule (limit=6.0)");
    let outlier = OutlierRule::new(6.0);
    let signal = outlier.evaluate(&series)?;
    println!("   Alarmed indices: {:?}", signal.alarm_indices());
    println!("   Alarm count: {}\n", signal.alarm_count());

    // 2. Outlier rule (aggregate)
    println!("2. Outlier rule (aggregate, limit=6.0, count_limit=0)");
    let aggregate = OutlierRule::aggregate(6.0, 0);
    let signal = aggregate.evaluate(&series)?;
    println!("   Alarmed: {}\n", signal.is_alarmed());

    // 3. Drift rule
    println!("3. Drift rule (window_size=5, threshold=0.3)");
    let drift = DriftRule::new(5, 0.3)?;
    println!("   Drift detected: {}\n", drift.detect(&series)?);

    // 4. Bias rule
    println!("4. Bias rule (expected_mean=5.0, threshold=0.25)");
    let bias = BiasRule::new(5.0, 0.25);
    println!("   Bias detected: {}\n", bias.detect(&series)?);

    // 5. Nelson rules against a baseline distribution
    println!("5. Nelson rules (mean=5.0, std_dev=0.5)");
    let nelson1 = NelsonRule1::new(5.0, 0.5);
    let nelson2 = NelsonRule2::new(5.0);
    println!("   Rule 1 (3-sigma excursion): {}", nelson1.detect(&series)?);
    println!("   Rule 2 (9 above mean): {}\n", nelson2.detect(&series)?);

    // 6. Streaming monitor
    println!("6. Streaming monitor (outlier rule, buffer=5)");
    let mut monitor = AlarmMonitor::new(OutlierRule::new(6.0), 5);
    for &value in &series {
        if let Some(event) = monitor.push(value)? {
            println!("   [{:?}] {}", event.severity, event.message);
        }
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
