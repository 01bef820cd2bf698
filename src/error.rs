/// Failures raised while turning a descriptor list into an error type.
///
/// None of these can occur once an error type exists: classification of an
/// unknown wire code is `None`, never an `Error`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{service}: descriptor #{index} has an empty wire code")]
    EmptyWireCode { service: String, index: usize },

    #[error("{service}: invalid variant id `{variant_id}`: {reason}")]
    InvalidVariantId {
        service: String,
        variant_id: String,
        reason: String,
    },

    #[error("{service}: duplicate wire code `{wire_code}`")]
    DuplicateWireCode { service: String, wire_code: String },

    #[error("{service}: duplicate variant id `{variant_id}`")]
    DuplicateVariantId { service: String, variant_id: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
