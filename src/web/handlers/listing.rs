//! Mapping listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use std::fmt::Display;
use tracing::error;

use crate::domain::entities::ShortcodeMapping;
use crate::error::AppError;
use crate::state::AppState;

/// One table row of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub shortcode: String,
    pub url: String,
    /// False for a placeholder standing in for an undecodable row.
    pub readable: bool,
}

impl ListingRow {
    /// Placeholder for a stored row that could not be decoded.
    pub fn unreadable(err: &impl Display) -> Self {
        Self {
            shortcode: "could not read row".to_string(),
            url: err.to_string(),
            readable: false,
        }
    }

    /// Only http(s) targets are rendered as links; anything else is shown as text.
    pub fn is_linkable(&self) -> bool {
        self.readable
            && ["http://", "https://"].iter().any(|scheme| {
                self.url
                    .get(..scheme.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            })
    }
}

impl From<ShortcodeMapping> for ListingRow {
    fn from(mapping: ShortcodeMapping) -> Self {
        Self {
            shortcode: mapping.shortcode,
            url: mapping.url,
            readable: true,
        }
    }
}

/// Template for the admin page.
///
/// Renders `templates/admin.html` with:
/// - Every stored mapping, placeholders included
/// - The mapping creation form
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub rows: Vec<ListingRow>,
}

/// Renders every stored mapping.
///
/// # Endpoint
///
/// `GET /`
///
/// A row that fails to decode is logged and shown as a placeholder carrying
/// the error text; the remaining rows still render.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the listing query fails.
pub async fn listing_handler(State(state): State<AppState>) -> Result<AdminTemplate, AppError> {
    let entries = state.store.list().await.map_err(|e| {
        error!(error = %e, "could not load rows");
        AppError::internal(format!("could not load rows: {e}"))
    })?;

    let rows = entries
        .into_iter()
        .map(|entry| match entry {
            Ok(mapping) => ListingRow::from(mapping),
            Err(e) => {
                error!(error = %e, "could not read row");
                ListingRow::unreadable(&e)
            }
        })
        .collect();

    Ok(AdminTemplate { rows })
}
