//! Row classification — one discriminator, one typed payload per row kind.
//!
//! Fields are positional. Every field is trimmed before use; the scope
//! selector of a `Scope` row is the only field allowed to contain commas.

use crate::error::{Result, ThemeError};
use crate::ident::IdGenerator;
use crate::model::{Globals, Gutter, Header, ScopeRule, Style};
use regex::Regex;
use std::sync::LazyLock;

/// Literal token meaning "leave this attribute unset".
const UNSET: &str = "nil";

// Characters that would let a theme name escape its bundle directory.
static RE_UNSAFE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\[:cntrl:]]").unwrap());

const GLOBALS_KEYS: [&str; 6] = [
    "background",
    "foreground",
    "caret",
    "selection",
    "invisibles",
    "lineHighlight",
];

/// A classified input row.
#[derive(Debug, PartialEq, Eq)]
pub enum Row {
    Header(Header),
    Main(Globals),
    Gutter(Gutter),
    Scope(ScopeRule),
    /// Blank lines and unknown discriminators.
    Unrecognized,
}

/// Classify the fields of one line by their first field.
///
/// `line` is 1-based and only used for error messages.
pub fn classify(fields: &[&str], line: usize, ids: &dyn IdGenerator) -> Result<Row> {
    match fields.first().map(|f| f.trim()) {
        Some("Header") => header(fields, line, ids).map(Row::Header),
        Some("Main") => globals(fields, line).map(Row::Main),
        Some("Gutter") => gutter(fields, line).map(Row::Gutter),
        Some("Scope") => scope(fields, line).map(Row::Scope),
        _ => Ok(Row::Unrecognized),
    }
}

/// A field is set when it is neither blank nor the `nil` sentinel.
pub fn set_value(field: &str) -> Option<String> {
    let value = field.trim();
    if value.is_empty() || value == UNSET {
        None
    } else {
        Some(value.to_string())
    }
}

/// Reject names that are unusable as a single path segment.
pub fn validate_theme_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name == "." || name == ".." {
        "must not be a relative directory reference"
    } else if RE_UNSAFE_NAME.is_match(name) {
        "must not contain path separators or control characters"
    } else {
        return Ok(());
    };
    Err(ThemeError::InvalidThemeName {
        name: name.to_string(),
        reason,
    })
}

// -- Row builders ------------------------------------------------------------

fn header(fields: &[&str], line: usize, ids: &dyn IdGenerator) -> Result<Header> {
    if fields.len() < 4 {
        return Err(ThemeError::malformed(
            line,
            "Header needs at least 'author, name, semanticClass'",
        ));
    }
    let name = fields[2].trim().to_string();

    // A blank uuid field counts as omitted.
    let uuid = match fields.get(4).map(|f| f.trim()) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => ids.generate(),
    };

    Ok(Header {
        author: fields[1].trim().to_string(),
        name,
        semantic_class: fields[3].trim().to_string(),
        uuid,
    })
}

fn globals(fields: &[&str], line: usize) -> Result<Globals> {
    if fields.len() != 7 {
        return Err(ThemeError::malformed(
            line,
            "Main must contain 6 comma-separated values",
        ));
    }
    let value = |i: usize| -> Result<String> {
        let v = fields[i].trim();
        if v.is_empty() {
            Err(ThemeError::malformed(
                line,
                format!("Main value '{}' must not be empty", GLOBALS_KEYS[i - 1]),
            ))
        } else {
            Ok(v.to_string())
        }
    };
    Ok(Globals {
        background: value(1)?,
        foreground: value(2)?,
        caret: value(3)?,
        selection: value(4)?,
        invisibles: value(5)?,
        line_highlight: value(6)?,
    })
}

fn gutter(fields: &[&str], line: usize) -> Result<Gutter> {
    if fields.len() != 6 {
        return Err(ThemeError::malformed(
            line,
            "Gutter must contain 5 comma-separated values",
        ));
    }
    Ok(Gutter {
        background: set_value(fields[1]),
        foreground: set_value(fields[2]),
        divider: set_value(fields[3]),
        selection_background: set_value(fields[4]),
        selection_foreground: set_value(fields[5]),
    })
}

fn scope(fields: &[&str], line: usize) -> Result<ScopeRule> {
    if fields.len() < 6 {
        return Err(ThemeError::malformed(
            line,
            "Scope must contain name, background, foreground, fontStyle, scopes",
        ));
    }
    Ok(ScopeRule {
        name: fields[1].trim().to_string(),
        scope: fields[5..].join(",").trim().to_string(),
        settings: Style {
            background: set_value(fields[2]),
            foreground: set_value(fields[3]),
            font_style: set_value(fields[4]),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::testing::SequenceGenerator;

    fn fields(line: &str) -> Vec<&str> {
        line.split(',').collect()
    }

    fn classify_line(line: &str) -> Result<Row> {
        classify(&fields(line), 1, &SequenceGenerator::default())
    }

    #[test]
    fn header_with_uuid() {
        let row = classify_line("Header, Jane, MyTheme, source.theme, ABC-123").unwrap();
        assert_eq!(
            row,
            Row::Header(Header {
                author: "Jane".into(),
                name: "MyTheme".into(),
                semantic_class: "source.theme".into(),
                uuid: "ABC-123".into(),
            })
        );
    }

    #[test]
    fn header_without_uuid_generates_one() {
        let Row::Header(header) = classify_line("Header, Jane, MyTheme, source.theme").unwrap()
        else {
            panic!("expected header");
        };
        assert_eq!(header.uuid, "ID-1");
    }

    #[test]
    fn header_blank_uuid_generates_one() {
        let Row::Header(header) = classify_line("Header, Jane, MyTheme, source.theme,  ").unwrap()
        else {
            panic!("expected header");
        };
        assert_eq!(header.uuid, "ID-1");
    }

    #[test]
    fn header_too_short() {
        let err = classify_line("Header, Jane, MyTheme").unwrap_err();
        assert!(matches!(err, ThemeError::MalformedRow { line: 1, .. }));
        assert!(err.to_string().contains("Header needs at least"));
    }

    #[test]
    fn path_like_names_are_rejected() {
        for name in ["", ".", "..", "a/b", "a\\b", "tab\tname"] {
            let err = validate_theme_name(name).unwrap_err();
            assert!(
                matches!(err, ThemeError::InvalidThemeName { .. }),
                "name {:?} should be rejected, got {}",
                name,
                err
            );
        }
    }

    #[test]
    fn header_row_keeps_unchecked_name() {
        // Names are checked once the effective Header is known.
        let Row::Header(header) = classify_line("Header, Jane, ../x, source.theme").unwrap()
        else {
            panic!("expected header");
        };
        assert_eq!(header.name, "../x");
    }

    #[test]
    fn header_accepts_spaces_and_dots() {
        assert!(validate_theme_name("Solarized Dark 2.0").is_ok());
    }

    #[test]
    fn main_row() {
        let row =
            classify_line("Main, #000000, #FFFFFF, #FF0000, #333333, #555555, #222222").unwrap();
        assert_eq!(
            row,
            Row::Main(Globals {
                background: "#000000".into(),
                foreground: "#FFFFFF".into(),
                caret: "#FF0000".into(),
                selection: "#333333".into(),
                invisibles: "#555555".into(),
                line_highlight: "#222222".into(),
            })
        );
    }

    #[test]
    fn main_requires_exactly_six_values() {
        let short = classify_line("Main, #000000, #FFFFFF, #FF0000, #333333, #555555").unwrap_err();
        assert!(short.to_string().contains("Main must contain 6"));
        let long = classify_line("Main, 1, 2, 3, 4, 5, 6, 7").unwrap_err();
        assert!(long.to_string().contains("Main must contain 6"));
    }

    #[test]
    fn main_rejects_blank_value() {
        let err = classify_line("Main, #000000, , #FF0000, #333333, #555555, #222222").unwrap_err();
        assert!(err.to_string().contains("'foreground'"));
    }

    #[test]
    fn gutter_row_omits_unset_values() {
        let row = classify_line("Gutter, #111111, nil, , #444444, #555555").unwrap();
        assert_eq!(
            row,
            Row::Gutter(Gutter {
                background: Some("#111111".into()),
                foreground: None,
                divider: None,
                selection_background: Some("#444444".into()),
                selection_foreground: Some("#555555".into()),
            })
        );
    }

    #[test]
    fn gutter_one_short_is_malformed() {
        let err = classify_line("Gutter, #111111, #222222, #333333, #444444").unwrap_err();
        assert!(matches!(err, ThemeError::MalformedRow { .. }));
    }

    #[test]
    fn scope_row() {
        let row = classify_line("Scope, Strings, nil, #00FF00, italic, string.quoted").unwrap();
        assert_eq!(
            row,
            Row::Scope(ScopeRule {
                name: "Strings".into(),
                scope: "string.quoted".into(),
                settings: Style {
                    background: None,
                    foreground: Some("#00FF00".into()),
                    font_style: Some("italic".into()),
                },
            })
        );
    }

    #[test]
    fn scope_selector_keeps_commas() {
        let Row::Scope(rule) =
            classify_line("Scope, Keywords, , #FF00FF, bold, keyword.control, storage.type ")
                .unwrap()
        else {
            panic!("expected scope");
        };
        assert_eq!(rule.scope, "keyword.control, storage.type");
        assert_eq!(rule.settings.background, None);
    }

    #[test]
    fn scope_too_short() {
        let err = classify_line("Scope, Strings, nil, #00FF00, italic").unwrap_err();
        assert!(err.to_string().contains("Scope must contain"));
    }

    #[test]
    fn unknown_and_blank_rows_are_unrecognized() {
        assert_eq!(classify_line("").unwrap(), Row::Unrecognized);
        assert_eq!(classify_line("   ").unwrap(), Row::Unrecognized);
        assert_eq!(classify_line("Footer, a, b").unwrap(), Row::Unrecognized);
        // Discriminators match exactly.
        assert_eq!(classify_line("header, a, b, c").unwrap(), Row::Unrecognized);
    }

    #[test]
    fn discriminator_is_trimmed() {
        assert!(matches!(
            classify_line("  Scope , A, nil, nil, nil, comment").unwrap(),
            Row::Scope(_)
        ));
    }

    #[test]
    fn set_value_rules() {
        assert_eq!(set_value(" #FFF "), Some("#FFF".to_string()));
        assert_eq!(set_value("nil"), None);
        assert_eq!(set_value(" nil "), None);
        assert_eq!(set_value("   "), None);
        assert_eq!(set_value("nill"), Some("nill".to_string()));
    }
}
