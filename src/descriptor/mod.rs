pub mod naming;

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::Error;

/// One row of generator input: a wire code, the accessor that constructs it,
/// and documentation text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDescriptor {
    /// Code as it appears on the wire, without the `Exception` suffix.
    pub wire_code: Cow<'static, str>,
    /// Accessor name of the generated variant (snake_case).
    pub variant_id: Cow<'static, str>,
    /// Documentation only.
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl ErrorDescriptor {
    pub const fn from_static(
        wire_code: &'static str,
        variant_id: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            wire_code: Cow::Borrowed(wire_code),
            variant_id: Cow::Borrowed(variant_id),
            description: Cow::Borrowed(description),
        }
    }

    /// Builds a descriptor from a model shape name such as
    /// `"AccessDeniedException"`, deriving both wire code and accessor name.
    pub fn from_shape_name(shape: &str, description: impl Into<String>) -> Self {
        let wire_code = naming::wire_code_for_shape(shape);
        Self {
            variant_id: Cow::Owned(naming::variant_id_for(wire_code)),
            wire_code: Cow::Owned(wire_code.to_string()),
            description: Cow::Owned(description.into()),
        }
    }
}

/// The full descriptor list for one service, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceDescriptors {
    pub service: String,
    pub errors: Vec<ErrorDescriptor>,
}

impl ServiceDescriptors {
    pub fn new(service: impl Into<String>, errors: Vec<ErrorDescriptor>) -> Self {
        Self {
            service: service.into(),
            errors,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rejects lists that cannot produce a well-formed error type.
    ///
    /// Checks run per descriptor in list order, so the first offending row is
    /// the one reported. Wire codes are compared exactly as given.
    pub fn validate(&self) -> Result<(), Error> {
        let result = self.check_rows();
        if let Err(err) = &result {
            tracing::warn!(service = %self.service, error = %err, "descriptor list rejected");
        }
        result
    }

    fn check_rows(&self) -> Result<(), Error> {
        let mut wire_codes: HashSet<&str> = HashSet::with_capacity(self.errors.len());
        let mut variant_ids: HashSet<&str> = HashSet::with_capacity(self.errors.len());

        for (index, descriptor) in self.errors.iter().enumerate() {
            if descriptor.wire_code.is_empty() {
                return Err(Error::EmptyWireCode {
                    service: self.service.clone(),
                    index,
                });
            }
            if let Err(reason) = naming::check_identifier(&descriptor.variant_id) {
                return Err(Error::InvalidVariantId {
                    service: self.service.clone(),
                    variant_id: descriptor.variant_id.to_string(),
                    reason,
                });
            }
            if !wire_codes.insert(&descriptor.wire_code) {
                return Err(Error::DuplicateWireCode {
                    service: self.service.clone(),
                    wire_code: descriptor.wire_code.to_string(),
                });
            }
            if !variant_ids.insert(&descriptor.variant_id) {
                return Err(Error::DuplicateVariantId {
                    service: self.service.clone(),
                    variant_id: descriptor.variant_id.to_string(),
                });
            }
        }
        Ok(())
    }
}
