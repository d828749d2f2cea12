//! End-to-end tests for the alarm engine.
//!
//! Tests complete alarm workflows using only the facade's API.

use alarm_facade::{
    AlarmError, AlarmMonitor, AlarmRule, AlarmSeverity, AlarmSignal, AlarmStream, BiasRule,
    DriftRule, NelsonRule1, NelsonRule2, OutlierRule,
};

fn normal_process() -> Vec<f64> {
    (0..100).map(|i| 50.0 + (i % 7) as f64 * 0.5).collect()
}

fn process_with_spikes() -> Vec<f64> {
    let mut data = normal_process();
    data[10] = 80.0;
    data[50] = 85.0;
    data[90] = 82.0;
    data
}

fn ramping_process() -> Vec<f64> {
    (0..100).map(|i| 50.0 + i as f64 * 0.1).collect()
}

#[test]
fn e2e_pointwise_outlier_workflow() {
    let data = process_with_spikes();

    let rule = OutlierRule::new(70.0);
    let signal = rule.evaluate(&data).unwrap();

    let flags = signal.flags().unwrap();
    assert_eq!(flags.len(), data.len());
    assert_eq!(signal.alarm_indices(), vec![10, 50, 90]);
}

#[test]
fn e2e_aggregate_outlier_workflow() {
    let data = process_with_spikes();

    // Three spikes: a count limit of 2 is exceeded, 3 is not.
    let tripped = OutlierRule::aggregate(70.0, 2);
    assert!(tripped.evaluate(&data).unwrap().is_alarmed());

    let tolerant = OutlierRule::aggregate(70.0, 3);
    assert!(!tolerant.evaluate(&data).unwrap().is_alarmed());
}

#[test]
fn e2e_drift_workflow() {
    // A 0.1/sample ramp separates adjacent 10-sample window means by 1.0.
    let ramp = ramping_process();

    let sensitive = DriftRule::new(10, 0.5).unwrap();
    assert!(sensitive.detect(&ramp).unwrap());

    let tolerant = DriftRule::new(10, 2.0).unwrap();
    assert!(!tolerant.detect(&ramp).unwrap());
}

#[test]
fn e2e_bias_workflow() {
    // Measurements centered on 102.0 against a setpoint of 100.0.
    let batch = vec![102.1, 101.9, 102.0, 102.2, 101.8];

    let tight = BiasRule::new(100.0, 1.5);
    assert!(tight.detect(&batch).unwrap());

    let loose = BiasRule::new(100.0, 2.5);
    assert!(!loose.detect(&batch).unwrap());
}

#[test]
fn e2e_nelson_rule_1_workflow() {
    let rule = NelsonRule1::new(50.0, 2.0);

    // normal_process stays within [50, 53], well inside three sigma.
    assert!(!rule.detect(&normal_process()).unwrap());

    let mut data = normal_process();
    data[42] = 57.0;
    assert!(rule.detect(&data).unwrap());
}

#[test]
fn e2e_nelson_rule_2_workflow() {
    let rule = NelsonRule2::new(50.0);

    // A stuck-high sensor reads above the mean for 12 samples straight.
    let stuck = vec![50.4; 12];
    assert!(rule.detect(&stuck).unwrap());

    // A dip on the 9th sample resets the run.
    let mut interrupted = vec![50.4; 8];
    interrupted.push(49.9);
    interrupted.extend(vec![50.4; 8]);
    assert!(!rule.detect(&interrupted).unwrap());
}

#[test]
fn e2e_monitoring_stream_raises_event() {
    let mut monitor = AlarmMonitor::new(OutlierRule::new(10.0), 5);

    // Nothing is evaluated until the buffer fills.
    for value in [5.0, 6.0, 5.5, 7.0] {
        assert!(monitor.push(value).unwrap().is_none());
    }
    assert!(monitor.push(6.5).unwrap().is_none());

    let event = monitor.push(12.0).unwrap().unwrap();
    assert_eq!(event.rule, "outlier");
    assert_eq!(event.value, 12.0);
    assert_eq!(event.severity, AlarmSeverity::Warning);
}

#[test]
fn e2e_monitor_buffer_eviction_and_reset() {
    let mut monitor = AlarmMonitor::new(OutlierRule::new(100.0), 3);

    for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
        monitor.push(value).unwrap();
    }

    // Oldest samples are evicted once the buffer is at capacity.
    assert_eq!(monitor.buffer(), &[3.0, 4.0, 5.0]);

    monitor.reset();
    assert!(monitor.buffer().is_empty());
    assert!(monitor.push(6.0).unwrap().is_none());
}

#[test]
fn e2e_monitor_with_drift_rule() {
    let rule = DriftRule::new(3, 2.0).unwrap();
    let mut monitor = AlarmMonitor::new(rule, 10);

    let mut events = Vec::new();
    for value in (1..=10).map(|v| v as f64) {
        if let Some(event) = monitor.push(value).unwrap() {
            events.push(event);
        }
    }

    // The ramp is evaluated once the buffer fills on the final push.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].rule, "drift");
    assert_eq!(events[0].value, 10.0);
}

#[test]
fn e2e_monitor_surfaces_rule_errors() {
    // Buffer too small for the drift precondition of two full windows.
    let rule = DriftRule::new(3, 1.0).unwrap();
    let mut monitor = AlarmMonitor::new(rule, 4);

    for value in [1.0, 2.0, 3.0] {
        assert!(monitor.push(value).unwrap().is_none());
    }

    let result = monitor.push(4.0);
    assert!(matches!(
        result,
        Err(AlarmError::InsufficientData { required: 6, got: 4 })
    ));
}

#[test]
fn e2e_rules_as_trait_objects() {
    let data = normal_process();

    let rules: Vec<Box<dyn AlarmRule>> = vec![
        Box::new(OutlierRule::new(70.0)),
        Box::new(DriftRule::new(5, 5.0).unwrap()),
        Box::new(BiasRule::new(51.5, 3.0)),
        Box::new(NelsonRule1::new(50.0, 2.0)),
        Box::new(NelsonRule2::new(51.5)),
    ];

    let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec!["outlier", "drift", "bias", "nelson_rule_1", "nelson_rule_2"]
    );

    // Every rule evaluates the same series independently.
    for rule in &rules {
        let signal = rule.evaluate(&data).unwrap();
        assert!(!signal.is_alarmed(), "{} alarmed on normal data", rule.name());
    }
}

#[test]
fn e2e_missing_samples_treated_as_zero() {
    let rule = OutlierRule::new(1.0);
    let signal = rule.evaluate(&[f64::NAN, 5.0]).unwrap();
    assert_eq!(signal, AlarmSignal::Pointwise(vec![false, true]));
}

#[test]
fn e2e_repeated_evaluation_is_stable() {
    let data = process_with_spikes();

    let rules: Vec<Box<dyn AlarmRule>> = vec![
        Box::new(OutlierRule::new(70.0)),
        Box::new(DriftRule::new(10, 0.5).unwrap()),
        Box::new(BiasRule::new(50.0, 0.5)),
        Box::new(NelsonRule1::new(50.0, 2.0)),
        Box::new(NelsonRule2::new(50.0)),
    ];

    for rule in &rules {
        let first = rule.evaluate(&data).unwrap();
        let second = rule.evaluate(&data).unwrap();
        assert_eq!(first, second, "{} is not stable", rule.name());
    }
}
