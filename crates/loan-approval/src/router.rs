use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::classifier::Classifier;
use crate::decision::{ApplicationForm, DecisionEngine, DecisionView};

/// Router builder exposing the decision form over HTTP.
pub fn decision_router<C>(engine: Arc<DecisionEngine<C>>) -> Router
where
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/loans/evaluate", post(evaluate_handler::<C>))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler<C>(
    State(engine): State<Arc<DecisionEngine<C>>>,
    axum::Json(form): axum::Json<ApplicationForm>,
) -> Response
where
    C: Classifier + 'static,
{
    let application = match form.validate() {
        Ok(application) => application,
        Err(violation) => {
            warn!(%violation, "application form failed validation");
            let payload = json!({
                "error": violation.to_string(),
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match engine.evaluate(&application) {
        Ok(result) => {
            debug!(decision = %result.summary(), "loan application decided");
            let view = DecisionView::render(&application, &result);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(failure) => {
            error!(%failure, "classifier inference failed");
            let payload = json!({
                "error": format!("inference failed: {failure}"),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
