//! Storage type → Java type mapping.

/// Java types the generator emits for columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JavaType {
    Long,
    String,
    Boolean,
    LocalDate,
    LocalDateTime,
}

impl JavaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::LocalDate => "LocalDate",
            Self::LocalDateTime => "LocalDateTime",
        }
    }

    /// Import needed to use the type, if any.
    pub fn import(self) -> Option<&'static str> {
        match self {
            Self::LocalDate => Some("java.time.LocalDate"),
            Self::LocalDateTime => Some("java.time.LocalDateTime"),
            Self::Long | Self::String | Self::Boolean => None,
        }
    }
}

impl std::fmt::Display for JavaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw storage type token to its Java type.
///
/// Total: unknown and empty tokens map to `String`.
pub fn map_type(raw: &str) -> JavaType {
    match normalize(raw).as_str() {
        "int" => JavaType::Long,
        "varchar" | "text" => JavaType::String,
        "boolean" => JavaType::Boolean,
        "date" => JavaType::LocalDate,
        "timestamp" => JavaType::LocalDateTime,
        _ => JavaType::String,
    }
}

/// First word of the token, without a `(size)` suffix, lower-cased.
fn normalize(raw: &str) -> String {
    let word = raw.split_whitespace().next().unwrap_or("");
    let word = word.split('(').next().unwrap_or(word);
    word.to_ascii_lowercase()
}
