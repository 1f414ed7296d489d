//! Conversions between AWS Bedrock SDK types and port types
//!
//! Maps SDK errors to [`InvocationError`] and renders model listings as JSON.

use aws_sdk_bedrock::operation::list_foundation_models::ListFoundationModelsError;
use aws_sdk_bedrock::types::FoundationModelSummary;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_smithy_types::error::display::DisplayErrorContext;
use chatbot_application::InvocationError;
use serde_json::{Value, json};

// ─── Errors ──────────────────────────────────────────────────────

/// Convert a Bedrock runtime `InvokeModel` error to an [`InvocationError`].
pub fn convert_invoke_error<R>(err: &SdkError<InvokeModelError, R>) -> InvocationError
where
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            InvokeModelError::ThrottlingException(e) => {
                InvocationError::Throttled(format!("Bedrock throttled: {}", e))
            }
            InvokeModelError::ModelNotReadyException(e) => {
                InvocationError::ModelNotReady(format!("Bedrock model not ready: {}", e))
            }
            InvokeModelError::AccessDeniedException(e) => {
                InvocationError::AccessDenied(format!("Bedrock access denied: {}", e))
            }
            InvokeModelError::ValidationException(e) => {
                InvocationError::Validation(format!("Bedrock validation error: {}", e))
            }
            InvokeModelError::ModelTimeoutException(_) => InvocationError::Timeout,
            other => InvocationError::RequestFailed(format!("Bedrock error: {}", other)),
        },
        other => convert_transport_error(other),
    }
}

/// Convert a Bedrock control-plane `ListFoundationModels` error.
pub fn convert_list_error<R>(
    err: &aws_sdk_bedrock::error::SdkError<ListFoundationModelsError, R>,
) -> InvocationError
where
    R: std::fmt::Debug,
{
    match err {
        aws_sdk_bedrock::error::SdkError::ServiceError(service_err) => match service_err.err() {
            ListFoundationModelsError::AccessDeniedException(e) => {
                InvocationError::AccessDenied(format!("Bedrock access denied: {}", e))
            }
            ListFoundationModelsError::ThrottlingException(e) => {
                InvocationError::Throttled(format!("Bedrock throttled: {}", e))
            }
            ListFoundationModelsError::ValidationException(e) => {
                InvocationError::Validation(format!("Bedrock validation error: {}", e))
            }
            other => InvocationError::RequestFailed(format!("Bedrock error: {}", other)),
        },
        other => convert_transport_error(other),
    }
}

/// Errors that never reached the service (timeouts, dispatch, construction).
fn convert_transport_error<E, R>(err: &SdkError<E, R>) -> InvocationError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::TimeoutError(_) => InvocationError::Timeout,
        other => InvocationError::ConnectionError(format!(
            "Bedrock SDK error: {}",
            DisplayErrorContext(other)
        )),
    }
}

// ─── Model listing → JSON ────────────────────────────────────────

/// Render foundation model summaries in the service's own JSON field names.
pub fn foundation_models_to_json(summaries: &[FoundationModelSummary]) -> Value {
    let models: Vec<Value> = summaries
        .iter()
        .map(|summary| {
            json!({
                "modelArn": summary.model_arn(),
                "modelId": summary.model_id(),
                "modelName": summary.model_name(),
                "providerName": summary.provider_name(),
                "inputModalities": summary
                    .input_modalities()
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>(),
                "outputModalities": summary
                    .output_modalities()
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>(),
                "responseStreamingSupported": summary.response_streaming_supported(),
                "inferenceTypesSupported": summary
                    .inference_types_supported()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({ "modelSummaries": models })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_timeout() {
        let err: SdkError<InvokeModelError, ()> = SdkError::timeout_error("deadline exceeded");
        assert!(matches!(convert_invoke_error(&err), InvocationError::Timeout));
    }

    #[test]
    fn test_construction_failure_maps_to_connection_error() {
        let err: SdkError<InvokeModelError, ()> =
            SdkError::construction_failure("missing model id");
        match convert_invoke_error(&err) {
            InvocationError::ConnectionError(msg) => {
                assert!(msg.starts_with("Bedrock SDK error"));
                assert!(msg.contains("missing model id"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_timeout_maps_to_timeout() {
        let err: aws_sdk_bedrock::error::SdkError<ListFoundationModelsError, ()> =
            aws_sdk_bedrock::error::SdkError::timeout_error("slow");
        assert!(matches!(convert_list_error(&err), InvocationError::Timeout));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(
            foundation_models_to_json(&[]),
            json!({ "modelSummaries": [] })
        );
    }
}
