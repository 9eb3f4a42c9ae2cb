use phf::phf_map;

use crate::consts;

/// Tags the client UI offers, mapped to the label embedded in the prompt.
/// The handler tolerates any tag; unknown ones pass through verbatim.
static LANGUAGE_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "text" => "text",
    "javascript" => "JavaScript",
    "typescript" => "TypeScript",
    "python" => "Python",
    "java" => "Java",
    "cpp" => "C++",
    "c" => "C",
    "csharp" => "C#",
    "php" => "PHP",
    "ruby" => "Ruby",
    "go" => "Go",
    "rust" => "Rust",
    "html" => "HTML",
    "css" => "CSS",
    "sql" => "SQL",
    "bash" => "Bash",
    "json" => "JSON",
    "xml" => "XML",
    "yaml" => "YAML",
};

/// Resolves the label used when composing the prompt. Absent or blank tags
/// fall back to a generic placeholder.
pub fn display_label(tag: Option<&str>) -> String {
    let tag = match tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag,
        _ => return consts::DEFAULT_LANGUAGE_LABEL.to_string(),
    };

    match LANGUAGE_LABELS.get(tag.to_ascii_lowercase().as_str()) {
        Some(label) => label.to_string(),
        None => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tag() {
        assert_eq!(display_label(Some("python")), "Python");
        assert_eq!(display_label(Some("cpp")), "C++");
    }

    #[test]
    fn test_tag_lookup_is_case_insensitive() {
        assert_eq!(display_label(Some("JavaScript")), "JavaScript");
        assert_eq!(display_label(Some("RUST")), "Rust");
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        assert_eq!(display_label(Some("brainfuck")), "brainfuck");
    }

    #[test]
    fn test_absent_tag_defaults() {
        assert_eq!(display_label(None), "code");
        assert_eq!(display_label(Some("")), "code");
        assert_eq!(display_label(Some("   ")), "code");
    }
}
