use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loan_approval::decision::{DecisionEngine, DecisionPolicy};
use loan_approval::{decision_router, Classifier};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_decision_routes<C>(engine: Arc<DecisionEngine<C>>) -> axum::Router
where
    C: Classifier + 'static,
{
    let policy = engine.policy().clone();

    decision_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/loans/policy",
            axum::routing::get(move || policy_endpoint(policy.clone())),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Thresholds the gate is currently applying, for form hints.
pub(crate) async fn policy_endpoint(policy: DecisionPolicy) -> Json<DecisionPolicy> {
    Json(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use loan_approval::decision::FeatureVector;
    use loan_approval::{ArtifactClassifier, InferenceError, Prediction};
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct AlwaysApprove;

    impl Classifier for AlwaysApprove {
        fn scale_and_predict(
            &self,
            _features: &FeatureVector,
        ) -> Result<Prediction, InferenceError> {
            Ok(Prediction {
                label: 1,
                probability_approved: 0.75,
            })
        }
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn policy_route_exposes_default_thresholds() {
        let engine = Arc::new(DecisionEngine::new(
            Arc::new(AlwaysApprove),
            DecisionPolicy::default(),
        ));
        let router = with_decision_routes(engine);

        let response = router
            .oneshot(
                Request::get("/api/v1/loans/policy")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["minimum_cibil_score"], 650);
        assert_eq!(body["annual_interest_rate"], 0.1);
    }

    #[tokio::test]
    async fn evaluate_route_uses_bundled_artifacts() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts");
        let classifier = ArtifactClassifier::load(dir).expect("bundled artifacts load");
        let engine = Arc::new(DecisionEngine::new(
            Arc::new(classifier),
            DecisionPolicy::default(),
        ));
        let router = with_decision_routes(engine);
        let payload = json!({
            "dependents": 2,
            "education": "Graduated",
            "self_employed": "No",
            "annual_income": 1800000.0,
            "total_assets": 6500000.0,
            "cibil_score": 812,
            "loan_amount": 1000000.0,
            "tenure_years": 10
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/loans/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "approved");
        assert_eq!(body["estimated_emi_display"], "13,215");
        assert_eq!(body["credit_band"], "Excellent Credit");
    }
}
