//! Line diff rendering for failed verifications.

/// Render a line-oriented diff between expected and actual text.
///
/// Lists every differing line number with the expected line prefixed `-` and
/// the actual line prefixed `+`; a side with no line at that position shows
/// `<missing>`.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    let exp: Vec<&str> = expected.lines().collect();
    let act: Vec<&str> = actual.lines().collect();
    let mut out = String::new();
    for i in 0..exp.len().max(act.len()) {
        let e = exp.get(i).copied();
        let a = act.get(i).copied();
        if e == a {
            continue;
        }
        out.push_str(&format!("line {}:\n", i + 1));
        out.push_str(&format!("  - {}\n", e.unwrap_or("<missing>")));
        out.push_str(&format!("  + {}\n", a.unwrap_or("<missing>")));
    }
    if out.is_empty() && expected != actual {
        out.push_str("texts differ only in trailing characters\n");
    }
    out
}
