/// Generates the closed error type for one service.
///
/// Each entry maps an enum variant and an accessor function onto a wire code;
/// doc comments on an entry become its description. The invocation expands to
/// a `Copy` code enum, a wrapper struct carrying the code plus an optional
/// [`ErrorContext`](crate::ErrorContext), and an implementation of
/// [`ServiceError`](crate::ServiceError).
///
/// ```
/// service_error_codes::service_error! {
///     /// Errors returned by the Example service.
///     pub struct ExampleError(ExampleErrorCode) for "Example" {
///         /// You do not have access to the resource.
///         AccessDenied => access_denied = "AccessDenied",
///         /// Request rate exceeded.
///         Throttling => throttling = "Throttling",
///     }
/// }
///
/// use service_error_codes::ErrorContext;
///
/// let err = ExampleError::try_from_code("AccessDeniedException", ErrorContext::new("nope"));
/// assert_eq!(err, Some(ExampleError::access_denied()));
/// assert_eq!(ExampleError::throttling().error_code(), "Throttling");
/// assert!(ExampleError::try_from_code("Unknown", ErrorContext::default()).is_none());
/// ```
///
/// Duplicate variants or accessors are rejected by the compiler; duplicate or
/// empty wire codes fail a `const` assertion. Accessor names share a namespace
/// with the generated methods (`code`, `context`, `message`, ...), so a
/// descriptor named like one of them does not compile either.
#[macro_export]
macro_rules! service_error {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Error:ident($Code:ident) for $service:literal {
            $(
                $(#[doc = $doc:literal])*
                $Variant:ident => $accessor:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        const _: () = assert!(
            $crate::service::wire_codes_are_valid(&[$($wire),*]),
            "service_error!: wire codes must be unique and non-empty"
        );

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $Code {
            $(
                $(#[doc = $doc])*
                $Variant,
            )*
        }

        impl $Code {
            pub const ALL: &'static [Self] = &[$(Self::$Variant),*];

            pub const fn wire_code(self) -> &'static str {
                match self {
                    $(Self::$Variant => $wire,)*
                }
            }

            pub const fn variant_id(self) -> &'static str {
                match self {
                    $(Self::$Variant => stringify!($accessor),)*
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $(Self::$Variant => concat!($($doc),*).trim(),)*
                }
            }

            /// Exact lookup after stripping one trailing `Exception`.
            pub fn from_wire_code(code: &str) -> Option<Self> {
                match $crate::normalize_wire_code(code) {
                    $($wire => Some(Self::$Variant),)*
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $Code {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.wire_code())
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $Error {
            code: $Code,
            context: Option<$crate::ErrorContext>,
        }

        impl $Error {
            pub const SERVICE: &'static str = $service;

            pub const DESCRIPTORS: &'static [$crate::ErrorDescriptor] = &[
                $(
                    $crate::ErrorDescriptor::from_static(
                        $wire,
                        stringify!($accessor),
                        concat!($($doc),*),
                    ),
                )*
            ];

            pub fn try_from_code(code: &str, context: $crate::ErrorContext) -> Option<Self> {
                match $Code::from_wire_code(code) {
                    Some(found) => Some(Self {
                        code: found,
                        context: Some(context),
                    }),
                    None => {
                        $crate::service::trace_unrecognized($service, code);
                        None
                    }
                }
            }

            $(
                $(#[doc = $doc])*
                pub const fn $accessor() -> Self {
                    Self {
                        code: $Code::$Variant,
                        context: None,
                    }
                }
            )*

            pub fn with_context(mut self, context: $crate::ErrorContext) -> Self {
                self.context = Some(context);
                self
            }

            pub const fn code(&self) -> $Code {
                self.code
            }

            pub const fn error_code(&self) -> &'static str {
                self.code.wire_code()
            }

            pub fn description(&self) -> &'static str {
                self.code.description()
            }

            pub fn context(&self) -> Option<&$crate::ErrorContext> {
                self.context.as_ref()
            }

            pub fn message(&self) -> Option<&str> {
                self.context.as_ref().and_then($crate::ErrorContext::message)
            }
        }

        impl From<$Code> for $Error {
            fn from(code: $Code) -> Self {
                Self {
                    code,
                    context: None,
                }
            }
        }

        impl PartialEq for $Error {
            fn eq(&self, other: &Self) -> bool {
                self.code == other.code
            }
        }

        impl Eq for $Error {}

        impl PartialEq<$Code> for $Error {
            fn eq(&self, other: &$Code) -> bool {
                self.code == *other
            }
        }

        impl ::std::hash::Hash for $Error {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.code, state);
            }
        }

        impl ::std::fmt::Display for $Error {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::service::write_display(f, self.error_code(), self.context.as_ref())
            }
        }

        impl ::std::error::Error for $Error {}

        impl $crate::ServiceError for $Error {
            const SERVICE: &'static str = $service;

            fn try_from_code(code: &str, context: $crate::ErrorContext) -> Option<Self> {
                $Error::try_from_code(code, context)
            }

            fn error_code(&self) -> &'static str {
                $Error::error_code(self)
            }

            fn context(&self) -> Option<&$crate::ErrorContext> {
                $Error::context(self)
            }
        }
    };
}
