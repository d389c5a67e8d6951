use std::sync::Arc;

use super::common::*;
use crate::classifier::InferenceError;
use crate::decision::{
    DecisionResult, DecisionView, Education, FeatureVector, RejectionReason, RiskTier,
    SelfEmployed, Verdict,
};

#[test]
fn rejected_applications_never_reach_the_classifier() {
    let classifier = Arc::new(CountingClassifier::answering(1, 0.97));
    let engine = engine_with(classifier.clone());

    let result = engine.evaluate(&weak_application()).expect("gate result");

    match &result {
        DecisionResult::Rejected(rejection) => assert_eq!(rejection.reasons().len(), 4),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn single_failing_rule_still_skips_the_classifier() {
    let classifier = Arc::new(CountingClassifier::answering(1, 0.97));
    let engine = engine_with(classifier.clone());
    let mut application = strong_application();
    application.applicant.cibil_score = 640;

    let result = engine.evaluate(&application).expect("gate result");

    match result {
        DecisionResult::Rejected(rejection) => {
            assert_eq!(rejection.reasons(), &[RejectionReason::CibilBelowMinimum]);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn eligible_application_is_scored_once() {
    let classifier = Arc::new(CountingClassifier::answering(1, 0.8731));
    let engine = engine_with(classifier.clone());

    let result = engine.evaluate(&strong_application()).expect("evaluation");

    match result {
        DecisionResult::Evaluated {
            verdict,
            confidence_percent,
            risk_tier,
            estimated_emi,
        } => {
            assert_eq!(verdict, Verdict::Approved);
            assert_eq!(confidence_percent, 0.8731 * 100.0);
            assert_eq!(risk_tier, RiskTier::Low);
            assert_eq!(estimated_emi, 13_215);
        }
        other => panic!("expected evaluation, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 1);
}

#[test]
fn negative_label_means_manual_review_not_rejection() {
    let classifier = Arc::new(CountingClassifier::answering(0, 0.12));
    let engine = engine_with(classifier);

    let result = engine.evaluate(&strong_application()).expect("evaluation");

    assert!(!result.is_rejected());
    assert!(!result.approved());
    match result {
        DecisionResult::Evaluated {
            verdict,
            confidence_percent,
            ..
        } => {
            assert_eq!(verdict, Verdict::ManualReview);
            assert_eq!(confidence_percent, 12.0);
        }
        other => panic!("expected evaluation, got {other:?}"),
    }
}

#[test]
fn confidence_stays_within_percentage_bounds() {
    for probability in [0.0, 0.25, 0.5, 0.999, 1.0] {
        let engine = engine_with(Arc::new(CountingClassifier::answering(1, probability)));

        match engine.evaluate(&strong_application()).expect("evaluation") {
            DecisionResult::Evaluated {
                confidence_percent, ..
            } => {
                assert!((0.0..=100.0).contains(&confidence_percent));
                assert_eq!(confidence_percent, probability * 100.0);
            }
            other => panic!("expected evaluation, got {other:?}"),
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let engine = engine_with(Arc::new(CountingClassifier::answering(1, 0.66)));

    for application in [strong_application(), weak_application()] {
        let first = engine.evaluate(&application).expect("first evaluation");
        let second = engine.evaluate(&application).expect("second evaluation");
        assert_eq!(first, second);
    }
}

#[test]
fn classifier_receives_features_in_contract_order() {
    let classifier = Arc::new(RecordingClassifier::default());
    let engine = engine_with(classifier.clone());
    let mut application = strong_application();
    application.applicant.education = Education::NotGraduated;
    application.applicant.self_employed = SelfEmployed::Yes;

    engine.evaluate(&application).expect("evaluation");

    let seen = *classifier.seen.lock().expect("recording mutex poisoned");
    let seen = seen.expect("classifier invoked");
    assert_eq!(
        seen,
        FeatureVector([
            2.0,
            1.0,
            1.0,
            1_800_000.0,
            1_000_000.0,
            10.0,
            812.0,
            6_500_000.0
        ])
    );
}

#[test]
fn inference_failure_surfaces_without_fallback() {
    let engine = engine_with(Arc::new(FailingClassifier));

    match engine.evaluate(&strong_application()) {
        Err(InferenceError::Unavailable(message)) => assert!(message.contains("closed")),
        other => panic!("expected inference failure, got {other:?}"),
    }
}

#[test]
fn malformed_classifier_replies_are_inference_errors() {
    let engine = engine_with(Arc::new(CountingClassifier::answering(2, 0.5)));
    assert_eq!(
        engine.evaluate(&strong_application()),
        Err(InferenceError::UnexpectedLabel(2))
    );

    let engine = engine_with(Arc::new(CountingClassifier::answering(1, 1.5)));
    assert_eq!(
        engine.evaluate(&strong_application()),
        Err(InferenceError::InvalidProbability(1.5))
    );
}

#[test]
fn view_renders_evaluated_result_for_display() {
    let application = strong_application();
    let engine = engine_with(Arc::new(CountingClassifier::answering(1, 0.8731)));
    let result = engine.evaluate(&application).expect("evaluation");

    let view = DecisionView::render(&application, &result);

    assert_eq!(view.status, "approved");
    assert_eq!(view.headline, "Loan Approved");
    assert_eq!(view.confidence_display.as_deref(), Some("87.31%"));
    assert_eq!(view.risk_tier, Some("Low Risk"));
    assert_eq!(view.estimated_emi_display.as_deref(), Some("13,215"));
    assert_eq!(view.credit_band, "Excellent Credit");
    assert!(view.reasons.is_empty());
}

#[test]
fn view_renders_rejection_with_advice() {
    let application = weak_application();
    let engine = engine_with(Arc::new(CountingClassifier::answering(1, 0.9)));
    let result = engine.evaluate(&application).expect("gate result");

    let view = DecisionView::render(&application, &result);

    assert_eq!(view.status, "rejected");
    assert_eq!(view.reasons.len(), 4);
    assert_eq!(
        view.advice,
        Some("Improve credit score, reduce loan amount, or increase tenure")
    );
    assert!(view.confidence_percent.is_none());
    assert!(view.estimated_emi.is_none());
    assert_eq!(view.credit_band, "Fair Credit");
    assert!(view.to_lines()[0].contains("Rejected"));
}
