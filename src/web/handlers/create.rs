//! Mapping creation handler.

use axum::{
    Form,
    extract::{FromRequest, Multipart, Query, Request, State, rejection::QueryRejection},
    http::header,
    response::Redirect,
};
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::state::AppState;

type FormPairs = Vec<(String, String)>;

/// Fields of `POST /`, gathered from the body and the query string.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateMappingForm {
    pub shortcode: String,
    pub url: String,
}

impl CreateMappingForm {
    /// Picks the first value of each field. Body pairs come before query pairs,
    /// so a body value wins over a query value.
    pub fn from_pairs(body: &[(String, String)], query: &[(String, String)]) -> Self {
        let first = |name: &str| {
            body.iter()
                .chain(query)
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            shortcode: first("shortcode"),
            url: first("url"),
        }
    }
}

/// Reads the text fields of a multipart body; file parts are skipped.
async fn multipart_pairs(request: Request) -> Result<FormPairs, AppError> {
    let bad_body = |e: &dyn std::fmt::Display| {
        debug!(error = %e, "rejected multipart body");
        AppError::bad_request("missing parameter")
    };

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| bad_body(&e))?;

    let mut pairs = FormPairs::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| bad_body(&e))? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|e| bad_body(&e))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}

/// Reads the pairs of a urlencoded body. Any other body contributes nothing.
async fn body_pairs(request: Request) -> Result<FormPairs, AppError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if is_multipart {
        return multipart_pairs(request).await;
    }

    match Form::<FormPairs>::from_request(request, &()).await {
        Ok(Form(pairs)) => Ok(pairs),
        Err(rejection) => {
            debug!(error = %rejection, "ignoring non-form body");
            Ok(FormPairs::new())
        }
    }
}

/// Creates a new mapping from a submitted form.
///
/// # Endpoint
///
/// `POST /` with `shortcode` and `url` in an `application/x-www-form-urlencoded`
/// or `multipart/form-data` body, or in the query string.
///
/// # Errors
///
/// Returns 400 Bad Request if either field is missing or empty; nothing is
/// written in that case.
/// Returns 500 Internal Server Error if the insert fails, including when the
/// shortcode is already taken.
pub async fn create_handler(
    State(state): State<AppState>,
    query: Result<Query<FormPairs>, QueryRejection>,
    request: Request,
) -> Result<Redirect, AppError> {
    let query = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let body = body_pairs(request).await?;
    let form = CreateMappingForm::from_pairs(&body, &query);

    if form.shortcode.is_empty() || form.url.is_empty() {
        return Err(AppError::bad_request("missing parameter"));
    }

    state
        .store
        .set(&form.shortcode, &form.url)
        .await
        .map_err(|e| {
            error!(error = %e, shortcode = %form.shortcode, "could not create mapping");
            AppError::internal(format!(
                "could not set /{} -> {}: {}",
                form.shortcode, form.url, e
            ))
        })?;

    info!(shortcode = %form.shortcode, url = %form.url, "mapping created");

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> FormPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_of_repeated_field_wins() {
        let form = CreateMappingForm::from_pairs(
            &pairs(&[("shortcode", "a"), ("shortcode", "b"), ("url", "https://x.example")]),
            &[],
        );

        assert_eq!(form.shortcode, "a");
        assert_eq!(form.url, "https://x.example");
    }

    #[test]
    fn test_body_wins_over_query() {
        let form = CreateMappingForm::from_pairs(
            &pairs(&[("shortcode", "from-body")]),
            &pairs(&[("shortcode", "from-query"), ("url", "https://q.example")]),
        );

        assert_eq!(form.shortcode, "from-body");
        assert_eq!(form.url, "https://q.example");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let form = CreateMappingForm::from_pairs(&[], &[]);
        assert_eq!(form, CreateMappingForm::default());
    }
}
