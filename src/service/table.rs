use std::collections::HashMap;
use std::fmt;

use crate::descriptor::{ErrorDescriptor, ServiceDescriptors};
use crate::error::Error;
use crate::service::{normalize_wire_code, trace_unrecognized, write_display};
use crate::types::ErrorContext;

/// Runtime counterpart of [`service_error!`](crate::service_error): a
/// validated descriptor list with prebuilt lookup maps.
///
/// Values it classifies borrow the table, so the variant set stays closed to
/// exactly the rows the table was built from.
#[derive(Debug, Clone)]
pub struct DescriptorTable {
    service: String,
    errors: Vec<ErrorDescriptor>,
    by_wire_code: HashMap<String, usize>,
    by_variant_id: HashMap<String, usize>,
}

impl DescriptorTable {
    pub fn new(descriptors: ServiceDescriptors) -> Result<Self, Error> {
        descriptors.validate()?;
        let ServiceDescriptors { service, errors } = descriptors;

        let by_wire_code = errors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.wire_code.to_string(), i))
            .collect();
        let by_variant_id = errors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.variant_id.to_string(), i))
            .collect();

        tracing::debug!(service = %service, variants = errors.len(), "descriptor table built");
        Ok(Self {
            service,
            errors,
            by_wire_code,
            by_variant_id,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::new(ServiceDescriptors::from_json(json)?)
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn descriptors(&self) -> &[ErrorDescriptor] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Same contract as the generated `try_from_code`: one trailing
    /// `Exception` is stripped, then the code must match exactly.
    pub fn try_from_code(&self, code: &str, context: ErrorContext) -> Option<TableError<'_>> {
        match self.by_wire_code.get(normalize_wire_code(code)) {
            Some(&index) => Some(TableError {
                table: self,
                index,
                context: Some(context),
            }),
            None => {
                trace_unrecognized(&self.service, code);
                None
            }
        }
    }

    /// Named accessor: the variant whose id is `variant_id`, without context.
    pub fn accessor(&self, variant_id: &str) -> Option<TableError<'_>> {
        self.by_variant_id.get(variant_id).map(|&index| TableError {
            table: self,
            index,
            context: None,
        })
    }

    /// Every variant in declaration order, without context.
    pub fn variants(&self) -> impl Iterator<Item = TableError<'_>> {
        (0..self.errors.len()).map(move |index| TableError {
            table: self,
            index,
            context: None,
        })
    }
}

/// An error classified by a [`DescriptorTable`].
#[derive(Clone)]
pub struct TableError<'t> {
    table: &'t DescriptorTable,
    index: usize,
    context: Option<ErrorContext>,
}

impl<'t> TableError<'t> {
    fn descriptor(&self) -> &'t ErrorDescriptor {
        &self.table.errors[self.index]
    }

    pub fn service(&self) -> &'t str {
        &self.table.service
    }

    pub fn error_code(&self) -> &'t str {
        &self.descriptor().wire_code
    }

    pub fn variant_id(&self) -> &'t str {
        &self.descriptor().variant_id
    }

    pub fn description(&self) -> &'t str {
        self.descriptor().description.trim()
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        self.context.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.context.as_ref().and_then(ErrorContext::message)
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }
}

impl PartialEq for TableError<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.service() == other.service() && self.error_code() == other.error_code()
    }
}

impl Eq for TableError<'_> {}

impl fmt::Debug for TableError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableError")
            .field("service", &self.service())
            .field("code", &self.error_code())
            .field("context", &self.context)
            .finish()
    }
}

impl fmt::Display for TableError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_display(f, self.error_code(), self.context.as_ref())
    }
}

impl std::error::Error for TableError<'_> {}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    fn table() -> DescriptorTable {
        DescriptorTable::new(ServiceDescriptors::new(
            "Example",
            vec![
                ErrorDescriptor::from_static("AccessDenied", "access_denied", " No access."),
                ErrorDescriptor::from_static("Throttling", "throttling", " Slow down."),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn classifies_with_one_suffix_strip() {
        let table = table();
        let ctx = ErrorContext::new("denied");

        let err = table.try_from_code("AccessDeniedException", ctx.clone()).unwrap();
        assert_eq!(err.error_code(), "AccessDenied");
        assert_eq!(err.variant_id(), "access_denied");
        assert_eq!(err.to_string(), "AccessDenied: denied");
        assert_eq!(err, table.accessor("access_denied").unwrap());

        assert!(table.try_from_code("Unknown", ctx.clone()).is_none());
        assert!(table.try_from_code("THROTTLING", ctx.clone()).is_none());
        assert!(table.try_from_code("ThrottlingExceptionException", ctx).is_none());
    }

    #[test]
    fn accessor_has_no_context_and_empty_message() {
        let table = table();
        let err = table.accessor("throttling").unwrap();
        assert!(err.context().is_none());
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "Throttling: ");
        assert_eq!(err.description(), "Slow down.");
        assert!(table.accessor("Throttling").is_none());
    }

    #[test]
    fn equality_is_by_service_and_code() {
        let table = table();
        let a = table.try_from_code("Throttling", ErrorContext::new("a")).unwrap();
        let b = table.try_from_code("Throttling", ErrorContext::new("b")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, table.accessor("access_denied").unwrap());

        let other = DescriptorTable::new(ServiceDescriptors::new(
            "Other",
            vec![ErrorDescriptor::from_static("Throttling", "throttling", "")],
        ))
        .unwrap();
        assert_ne!(a, other.accessor("throttling").unwrap());
    }

    #[test]
    fn variants_follow_declaration_order() {
        let table = table();
        let codes: Vec<&str> = table.variants().map(|v| v.error_code()).collect();
        assert_eq!(codes, ["AccessDenied", "Throttling"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn construction_rejects_duplicates() {
        let result = DescriptorTable::new(ServiceDescriptors::new(
            "Example",
            vec![
                ErrorDescriptor::from_static("Throttling", "throttling", ""),
                ErrorDescriptor::from_static("Throttling", "throttled", ""),
            ],
        ));
        assert!(matches!(result, Err(Error::DuplicateWireCode { .. })));
    }
}
