//! End-to-end scenarios for the sign-in -> upload -> analyze -> result flow,
//! driven entirely through the public surface of the `shared` crate.

use shared::classify::{Classifier, SimulatedClassifier};
use shared::{CredentialVerifier, DemoVerifier, Prediction, Workflow};

/// Uniform source replaying a fixed sequence of draws.
fn replay(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut iter = values.into_iter();
    move || iter.next().expect("uniform sequence exhausted")
}

#[test]
fn happy_path_from_sign_in_to_result() {
    let session = DemoVerifier
        .verify("jane.doe@example.com", "s3cret")
        .unwrap();
    assert_eq!(session.name, "Jane.doe");

    let mut workflow = Workflow::new();
    workflow.accept_image("chest.png");

    let request = workflow.begin_analysis().unwrap();
    assert!(workflow.is_analyzing());

    // 0.7 > 0.6 picks the positive class; 0.5 maps to 0.75 + 0.12 = 0.87.
    let mut classifier = SimulatedClassifier::new(replay(vec![0.7, 0.5]));
    let outcome = classifier.predict(workflow.image().unwrap());
    assert!(workflow.complete_analysis(request, outcome.into_result("2026-08-07T09:30:00.000Z".into())));

    let result = workflow.result().unwrap();
    assert_eq!(result.prediction, Prediction::Pneumonia);
    assert!((result.confidence - 0.87).abs() < 1e-12);
    assert!((result.pneumonia_probability - 0.87).abs() < 1e-12);
    assert!((result.normal_probability - 0.13).abs() < 1e-12);
    assert_eq!(result.completed_at, "2026-08-07T09:30:00.000Z");
}

#[test]
fn replacing_the_image_mid_flight_discards_the_pending_result() {
    let mut workflow = Workflow::new();
    workflow.accept_image("first.png");
    let stale = workflow.begin_analysis().unwrap();

    // A new upload lands while the analysis timer is still pending.
    workflow.accept_image("second.png");

    let mut classifier = SimulatedClassifier::new(replay(vec![0.1, 0.2]));
    let outcome = classifier.predict(&"first.png");
    assert!(!workflow.complete_analysis(stale, outcome.into_result("2026-08-07T09:30:03.000Z".into())));

    // The late completion must not attach to the replacement image.
    assert!(workflow.result().is_none());
    assert_eq!(workflow.image(), Some(&"second.png"));
    assert!(!workflow.is_analyzing());
}

#[test]
fn sign_out_resets_the_dashboard_regardless_of_prior_state() {
    let session = DemoVerifier.verify("oncall@clinic.org", "pw").unwrap();

    let mut workflow = Workflow::new();
    workflow.accept_image("chest.png");
    workflow.begin_analysis().unwrap();

    // Sign-out drops the session and cascades into the workflow.
    drop(session);
    workflow.reset();

    assert!(workflow.image().is_none());
    assert!(workflow.result().is_none());
    assert!(!workflow.is_analyzing());
}
