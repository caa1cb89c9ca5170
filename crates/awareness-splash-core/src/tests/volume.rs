use crate::{SystemVolumeOverride, tests::support::FakeResolver};

/// WHAT: Apply captures the previous level and sets the target
/// WHY: Restore needs the level from before the session
#[test]
fn given_device_when_applying_then_previous_captured_and_target_set() {
    let (resolver, log) = FakeResolver::new(0.3);
    let mut volume = SystemVolumeOverride::new(resolver);

    assert!(volume.apply(80));

    let record = volume.record();
    assert_eq!(record.previous_scalar_volume, Some(0.3));
    assert_eq!(record.target_scalar_volume, Some(0.8));
    assert_eq!(log.borrow().level, 0.8);
}

/// WHAT: Targets above 100 percent are clamped
/// WHY: Scalar levels are bounded to 1.0
#[test]
fn given_target_over_100_when_applying_then_clamped() {
    let (resolver, log) = FakeResolver::new(0.5);
    let mut volume = SystemVolumeOverride::new(resolver);

    volume.apply(250);

    assert_eq!(log.borrow().level, 1.0);
}

/// WHAT: The device is resolved once and the baseline captured once
/// WHY: A second apply must not overwrite the original level
#[test]
fn given_two_applies_when_restoring_then_original_level_returns() {
    let (resolver, log) = FakeResolver::new(0.25);
    let mut volume = SystemVolumeOverride::new(resolver);

    volume.apply(60);
    volume.apply(90);
    assert!(volume.restore());

    let log = log.borrow();
    assert_eq!(log.resolves, 1);
    assert_eq!(log.level, 0.25);
    assert_eq!(volume.record().previous_scalar_volume, Some(0.25));
}

/// WHAT: Restoring twice has the effect of restoring once
/// WHY: Teardown and drop paths may both call restore
#[test]
fn given_applied_override_when_restoring_twice_then_single_write() {
    let (resolver, log) = FakeResolver::new(0.4);
    let mut volume = SystemVolumeOverride::new(resolver);
    volume.apply(100);

    assert!(volume.restore());
    assert!(!volume.restore());

    assert_eq!(log.borrow().sets, vec![1.0, 0.4]);
    assert!(volume.record().restored);
}

/// WHAT: Restore without a prior apply does nothing
/// WHY: There is no baseline to return to
#[test]
fn given_no_apply_when_restoring_then_no_op() {
    let (resolver, log) = FakeResolver::new(0.4);
    let mut volume = SystemVolumeOverride::new(resolver);

    assert!(!volume.restore());

    assert_eq!(log.borrow().resolves, 0);
    assert!(log.borrow().sets.is_empty());
}

/// WHAT: A missing device disables volume control without error
/// WHY: Audio control is an enhancement, not a dependency
#[test]
fn given_no_device_when_applying_then_swallowed_and_not_retried() {
    let (mut resolver, log) = FakeResolver::new(0.4);
    resolver.available = false;
    let mut volume = SystemVolumeOverride::new(resolver);

    assert!(!volume.apply(50));
    assert!(!volume.apply(50));
    assert!(!volume.restore());

    assert_eq!(log.borrow().resolves, 1);
    assert_eq!(volume.record().previous_scalar_volume, None);
}
