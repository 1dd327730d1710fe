//! Placeholder substitution for message templates.
//!
//! Supported placeholders are `{n}` (positional argument) and, when a reason
//! is supplied, `{reason}`. Anything else between braces is copied through
//! as literal text, as is an unterminated `{`.

use std::fmt::{Display, Write};

/// Substitute placeholders in `template`.
pub fn substitute(template: &str, args: &[&dyn Display], reason: Option<&str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match resolve(key, args, reason) {
            Some(Replacement::Arg(arg)) => {
                let _ = write!(out, "{}", arg);
            }
            Some(Replacement::Text(text)) => out.push_str(text),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

enum Replacement<'t> {
    Arg(&'t dyn Display),
    Text(&'t str),
}

fn resolve<'t>(
    key: &str,
    args: &[&'t dyn Display],
    reason: Option<&'t str>,
) -> Option<Replacement<'t>> {
    if key == "reason" {
        return reason.map(Replacement::Text);
    }
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: usize = key.parse().ok()?;
    args.get(index).copied().map(Replacement::Arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let out = substitute("{0} and {1}, then {0}", &[&"a", &2], None);
        assert_eq!(out, "a and 2, then a");
    }

    #[test]
    fn reason_placeholder() {
        let out = substitute("to be virtual{reason}, but", &[], Some(" because x"));
        assert_eq!(out, "to be virtual because x, but");
    }

    #[test]
    fn reason_left_literal_when_not_supplied() {
        assert_eq!(substitute("a{reason}b", &[], None), "a{reason}b");
    }

    #[test]
    fn unknown_and_out_of_range_placeholders_are_literal() {
        let out = substitute("{2} {name} {} {-1} {0}", &[&"x"], Some(""));
        assert_eq!(out, "{2} {name} {} {-1} x");
    }

    #[test]
    fn unterminated_brace_is_literal() {
        assert_eq!(substitute("List{T", &[&"x"], None), "List{T");
        assert_eq!(substitute("{0} {", &[&"x"], None), "x {");
    }

    #[test]
    fn arguments_are_not_rescanned() {
        // An argument containing braces is inserted verbatim.
        assert_eq!(substitute("{0}", &[&"{1}"], None), "{1}");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(substitute("é{0}ü", &[&"→"], None), "é→ü");
    }
}
