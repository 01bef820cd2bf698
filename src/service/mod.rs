pub mod macros;
pub mod table;

use std::fmt;

use crate::types::ErrorContext;

/// Suffix some protocols append to error codes on the wire.
pub const EXCEPTION_SUFFIX: &str = "Exception";

/// Strips one trailing [`EXCEPTION_SUFFIX`], case-sensitively.
///
/// `"FooExceptionException"` becomes `"FooException"`, and `"Exception"`
/// becomes `""`. Either result is looked up as-is.
pub fn normalize_wire_code(code: &str) -> &str {
    code.strip_suffix(EXCEPTION_SUFFIX).unwrap_or(code)
}

/// Closed error type for one service, generated by
/// [`service_error!`](crate::service_error).
pub trait ServiceError: fmt::Display + fmt::Debug + Eq + Sized {
    /// Service name the descriptor list was declared for.
    const SERVICE: &'static str;

    /// Classifies a raw wire code. `None` means this service does not claim
    /// the code; it is not a parse failure.
    fn try_from_code(code: &str, context: ErrorContext) -> Option<Self>;

    /// Canonical wire code of the variant, regardless of how it was built.
    fn error_code(&self) -> &'static str;

    fn context(&self) -> Option<&ErrorContext>;

    fn message(&self) -> Option<&str> {
        self.context().and_then(ErrorContext::message)
    }
}

/// Renders `"<wire code>: <message>"`, with an empty message when the
/// context is absent or carries none.
pub fn write_display(
    f: &mut fmt::Formatter<'_>,
    wire_code: &str,
    context: Option<&ErrorContext>,
) -> fmt::Result {
    let message = context.and_then(ErrorContext::message).unwrap_or_default();
    write!(f, "{wire_code}: {message}")
}

#[doc(hidden)]
pub fn trace_unrecognized(service: &str, code: &str) {
    tracing::trace!(
        service,
        code,
        normalized = normalize_wire_code(code),
        "wire code not claimed by service"
    );
}

/// `true` when every code is non-empty and no two are equal.
///
/// Evaluated in a `const` item by [`service_error!`](crate::service_error) so
/// a bad list fails the build.
#[doc(hidden)]
pub const fn wire_codes_are_valid(codes: &[&str]) -> bool {
    let mut i = 0;
    while i < codes.len() {
        if codes[i].is_empty() {
            return false;
        }
        let mut j = i + 1;
        while j < codes.len() {
            if const_str_eq(codes[i], codes[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
