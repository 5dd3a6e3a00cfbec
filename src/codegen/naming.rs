//! Java identifier helpers.

/// Reserved words that cannot be used as Java identifiers.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Turn arbitrary text into a valid Java identifier.
///
/// Characters outside Unicode XID become `_`; a leading non-start
/// character and reserved words get a `_` prefix.
pub fn java_identifier(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if unicode_ident::is_xid_continue(ch) || ch == '$' {
            out.push(ch);
        } else {
            out.push('_');
        }
    }

    match out.chars().next() {
        None => return "_".to_string(),
        Some(first) if !(unicode_ident::is_xid_start(first) || first == '_' || first == '$') => {
            out.insert(0, '_');
        }
        Some(_) => {}
    }
    if JAVA_KEYWORDS.contains(&out.as_str()) {
        out.insert(0, '_');
    }
    out
}

/// Class name for a diagram title.
pub fn type_name(title: &str) -> String {
    java_identifier(title)
}

/// Lower-cased identifier used for fields, tables and routes.
pub fn lower_name(title: &str) -> String {
    java_identifier(&title.to_lowercase())
}

/// English plural of a lower-cased name.
pub fn pluralize(word: &str) -> String {
    let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| word.ends_with(s));

    if ends_with_any(&["s", "x", "z", "ch", "sh"]) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        let vowel_before = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
        if !stem.is_empty() && !vowel_before {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

/// `nombre` → `Nombre`, for Lombok accessor names.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Foreign-key column name pointing at `title`.
pub fn join_column(title: &str) -> String {
    format!("id_{}", lower_name(title))
}
