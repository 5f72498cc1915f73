//! User-facing calc diagnostics.
//!
//! The diagnostics module demarshalls [libcalc diagnostics][libcalc::Diagnostic] into a form
//! pleasant for standard output.

use libcalc::{CalcError, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Snippet},
};

/// Renders diagnostics one after another. Expressions are a single short line, so diagnostics
/// carry a title and footer notes but no source excerpt.
pub fn emit_calc_diagnostics(diagnostics: &[Diagnostic], color: bool) -> String {
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let footer = diagnostic
            .associated_diagnostics
            .iter()
            .map(|associated| Annotation {
                label: Some(&associated.msg),
                id: None,
                annotation_type: convert_diagnostic_kind(&associated.kind),
            })
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: convert_diagnostic_kind(&diagnostic.kind),
            }),
            footer,
            slices: vec![],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        if i != 0 {
            emitted_diagnostics.push('\n');
        }
        emitted_diagnostics.push_str(&format!("{}\n", DisplayList::from(snippet)));
    }
    emitted_diagnostics
}

/// Renders a single engine error.
pub fn emit_calc_error(err: &CalcError, color: bool) -> String {
    emit_calc_diagnostics(&[Diagnostic::from(err)], color)
}

/// Converts a calc DiagnosticKind to an AnnotationType.
fn convert_diagnostic_kind(diagnostic_kind: &DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_carries_code() {
        let emitted = emit_calc_error(&CalcError::DivisionByZero, false);
        assert_eq!(emitted.lines().next(), Some("error[V0001]: Division by zero"));
    }

    #[test]
    fn footer_carries_notes() {
        let emitted = emit_calc_error(&CalcError::UnboundVariable("x".into()), false);
        assert!(emitted.contains("help: bind the variable to a value before evaluating"));
    }

    #[test]
    fn nothing_to_emit() {
        assert_eq!(emit_calc_diagnostics(&[], false), "");
    }
}
