use crate::service::normalize_wire_code;

/// Words that cannot name an accessor function without `r#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Abstract,
    As,
    Async,
    Await,
    Become,
    Box,
    Break,
    Const,
    Continue,
    Crate,
    Do,
    Dyn,
    Else,
    Enum,
    Extern,
    False,
    Final,
    Fn,
    For,
    Gen,
    If,
    Impl,
    In,
    Let,
    Loop,
    Macro,
    Match,
    Mod,
    Move,
    Mut,
    Override,
    Priv,
    Pub,
    Ref,
    Return,
    #[strum(serialize = "self")]
    SelfValue,
    #[strum(serialize = "Self")]
    SelfType,
    Static,
    Struct,
    Super,
    Trait,
    True,
    Try,
    Type,
    Typeof,
    Unsafe,
    Unsized,
    Use,
    Virtual,
    Where,
    While,
    Yield,
}

impl Keyword {
    pub fn lookup(word: &str) -> Option<Self> {
        word.parse().ok()
    }
}

/// Checks that `id` can be used verbatim as a Rust function name.
pub fn check_identifier(id: &str) -> Result<(), String> {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return Err("identifier is empty".into());
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!("identifier cannot start with `{first}`"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("identifier cannot contain `{bad}`"));
    }
    if id == "_" {
        return Err("`_` is not an identifier".into());
    }
    if let Some(keyword) = Keyword::lookup(id) {
        let word: &'static str = keyword.into();
        return Err(format!("`{word}` is a reserved keyword"));
    }
    Ok(())
}

/// Converts a PascalCase shape name into snake_case, keeping acronym runs
/// together: `KMSAccessDenied` -> `kms_access_denied`.
///
/// Characters other than ASCII letters and digits act as word separators.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 && !out.is_empty() && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    while out.ends_with('_') {
        out.pop();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Wire code for a model shape name: one trailing `Exception` removed.
pub fn wire_code_for_shape(shape: &str) -> &str {
    normalize_wire_code(shape)
}

/// Accessor name for a wire code. Keywords get a trailing underscore.
pub fn variant_id_for(wire_code: &str) -> String {
    let mut id = to_snake_case(wire_code);
    if Keyword::lookup(&id).is_some() {
        id.push('_');
    }
    id
}
