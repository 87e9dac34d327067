use axum::http::StatusCode;
use axum::response::IntoResponse;

use foodstore_core::DomainError;
use foodstore_inventory::ErrorBody;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::warn!(error = err.code(), "request rejected: {err}");

    let message = err.to_string();
    match err {
        DomainError::NotFound { product, available } => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!(
                "Product '{product}' not found. Available products: {}",
                available.join(", ")
            ),
        ),
        DomainError::InvalidQuantity(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_quantity", message)
        }
        DomainError::InsufficientStock {
            requested,
            available,
            ..
        } => {
            let message = if available == 0 {
                format!("{message}; the product is out of stock")
            } else {
                format!("{message}; only {available} left")
            };
            error_response(
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "insufficient_stock".to_string(),
                    message,
                    requested: Some(requested),
                    available: Some(available),
                },
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    error_response(
        status,
        ErrorBody {
            error: code.to_string(),
            message: message.into(),
            requested: None,
            available: None,
        },
    )
}

fn error_response(status: StatusCode, body: ErrorBody) -> axum::response::Response {
    (status, axum::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_distinct_per_kind() {
        let cases = [
            (DomainError::not_found("kale", vec!["pizza".into()]), StatusCode::NOT_FOUND),
            (DomainError::invalid_quantity("zero"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::insufficient_stock("pizza", 9, 1), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }
}
