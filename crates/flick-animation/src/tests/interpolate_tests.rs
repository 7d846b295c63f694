use super::*;

#[test]
fn maps_linearly_within_a_segment() {
    let value = interpolate(0.5, &[0.0, 1.0], &[0.0, 90.0], Extrapolate::Clamp);
    assert_eq!(value, 45.0);
}

#[test]
fn picks_the_correct_segment_of_a_partition() {
    // The swipe-card opacity table: full at rest, faded at both edges.
    let domain = [-200.0, 0.0, 200.0];
    let range = [0.5, 1.0, 0.5];

    assert_eq!(interpolate(-100.0, &domain, &range, Extrapolate::Clamp), 0.75);
    assert_eq!(interpolate(0.0, &domain, &range, Extrapolate::Clamp), 1.0);
    assert_eq!(interpolate(150.0, &domain, &range, Extrapolate::Clamp), 0.625);
}

#[test]
fn clamp_pins_to_boundary_values() {
    let domain = [0.0, 1.0];
    let range = [0.0, 10.0];
    assert_eq!(interpolate(-5.0, &domain, &range, Extrapolate::Clamp), 0.0);
    assert_eq!(interpolate(5.0, &domain, &range, Extrapolate::Clamp), 10.0);
}

#[test]
fn extend_continues_the_edge_slope() {
    let domain = [0.0, 1.0];
    let range = [0.0, 10.0];
    assert_eq!(interpolate(2.0, &domain, &range, Extrapolate::Extend), 20.0);
    assert_eq!(interpolate(-1.0, &domain, &range, Extrapolate::Extend), -10.0);
}

#[test]
fn two_phase_reveal_table_stays_flat_through_the_first_half() {
    // The action-menu opacity table: nothing shows until halfway.
    let domain = [0.0, 0.5, 1.0];
    let range = [0.0, 0.0, 1.0];

    assert_eq!(interpolate(0.25, &domain, &range, Extrapolate::Clamp), 0.0);
    assert_eq!(interpolate(0.5, &domain, &range, Extrapolate::Clamp), 0.0);
    assert_eq!(interpolate(0.75, &domain, &range, Extrapolate::Clamp), 0.5);
}

#[test]
fn degenerate_segment_returns_its_upper_value() {
    let domain = [0.0, 0.0, 1.0];
    let range = [5.0, 7.0, 9.0];
    assert_eq!(interpolate(0.0, &domain, &range, Extrapolate::Extend), 7.0);
}

#[test]
fn validated_interpolation_rejects_bad_tables() {
    assert!(Interpolation::new(vec![0.0], vec![1.0]).is_err());
    assert!(Interpolation::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(Interpolation::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
}

#[test]
fn validated_interpolation_samples_like_the_free_function() {
    let table = Interpolation::clamped(vec![0.0, 1.0], vec![0.0, 45.0]).expect("valid table");
    assert_eq!(table.sample(0.5), 22.5);
    assert_eq!(table.sample(2.0), 45.0);
}
