use std::collections::HashMap;

use serde::Deserialize;
use utoipa::ToSchema;

/// The field values submitted by a client in one request.
///
/// A submission is an ephemeral mapping from field name to field value, owned by the
/// request. Fields the client did not submit read as the empty string, so validators
/// never have to distinguish a blank field from a missing one.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FormSubmission(HashMap<String, String>);

impl FormSubmission {
    /// Returns the raw value of `field`, or `""` when the field was not submitted.
    pub fn value(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FormSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(fields: [(K, V); N]) -> Self {
        Self(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
