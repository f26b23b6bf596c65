use memgraph::{
    connection_color, connection_visual_props, similarity, ConnectionVisualProps,
    SimilarityError,
};

fn sample_vectors() -> Vec<Vec<f32>> {
    vec![
        vec![0.1, 0.2, 0.3, 0.4],
        vec![-0.5, 0.25, 0.0, 1.0],
        vec![0.9, -0.9, 0.45, -0.05],
        vec![0.0, 0.0, 0.0, 0.0],
    ]
}

#[test]
fn similarity_is_symmetric() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            let ab = similarity(Some(a.as_slice()), Some(b.as_slice())).unwrap();
            let ba = similarity(Some(b.as_slice()), Some(a.as_slice())).unwrap();
            assert_eq!(ab, ba, "asymmetric score for {a:?} / {b:?}");
        }
    }
}

#[test]
fn similarity_is_never_negative() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            assert!(similarity(Some(a.as_slice()), Some(b.as_slice())).unwrap() >= 0.0);
        }
    }
}

#[test]
fn opposed_unit_vectors_score_exactly_zero() {
    let a = [1.0_f32, 0.0];
    let b = [-1.0_f32, 0.0];
    assert_eq!(similarity(Some(&a), Some(&b)).unwrap(), 0.0);
}

#[test]
fn missing_or_empty_vectors_score_zero() {
    let v = [0.3_f32, 0.4];
    assert_eq!(similarity(None, Some(&v)).unwrap(), 0.0);
    assert_eq!(similarity(Some(&[]), Some(&[])).unwrap(), 0.0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = similarity(Some(&[1.0, 0.0]), Some(&[1.0, 0.0, 0.0])).unwrap_err();
    assert_eq!(err, SimilarityError::LengthMismatch { left: 2, right: 3 });
}

#[test]
fn visual_props_endpoints() {
    assert_eq!(
        connection_visual_props(0.0),
        ConnectionVisualProps {
            opacity: 0.0,
            thickness: 1.0,
            glow: 0.0,
            pulse_duration_ms: 5000,
        }
    );

    let strong = connection_visual_props(1.0);
    assert_eq!(strong.opacity, 1.0);
    assert_eq!(strong.thickness, 4.0);
    assert!((strong.glow - 0.6).abs() < 1e-12);
    assert_eq!(strong.pulse_duration_ms, 2000);
}

#[test]
fn color_endpoints() {
    assert_eq!(connection_color(0.0, 220), "hsl(220, 60%, 40%)");
    assert_eq!(connection_color(1.0, 220), "hsl(220, 100%, 70%)");
}

#[test]
fn mappers_clamp_out_of_range_scores() {
    assert_eq!(connection_visual_props(1.5), connection_visual_props(1.0));
    assert_eq!(connection_visual_props(-0.3), connection_visual_props(0.0));
    assert_eq!(connection_color(1.5, 220), connection_color(1.0, 220));
    assert_eq!(connection_color(-0.3, 220), connection_color(0.0, 220));
}

#[test]
fn visual_props_are_monotonic_in_score() {
    let mut previous = connection_visual_props(0.0);
    for step in 1..=20 {
        let props = connection_visual_props(step as f64 / 20.0);
        assert!(props.opacity >= previous.opacity);
        assert!(props.thickness >= previous.thickness);
        assert!(props.glow >= previous.glow);
        assert!(props.pulse_duration_ms <= previous.pulse_duration_ms);
        previous = props;
    }
}
