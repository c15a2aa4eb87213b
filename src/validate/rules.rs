/// One parsed rule token, e.g. `min=5` or `required`.
///
/// The parameter is kept as raw text; each evaluator interprets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec<'a> {
    pub name: &'a str,
    pub param: Option<&'a str>,
}

/// Splits a `validate` annotation into rules, left to right.
///
/// Tokens are comma-separated and trimmed. A token is split on its first
/// `=` only; the name is trimmed, the parameter is kept verbatim. Empty
/// tokens are skipped.
pub fn parse_rules(annotation: &str) -> Vec<RuleSpec<'_>> {
    annotation
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((name, param)) => RuleSpec {
                name: name.trim(),
                param: Some(param),
            },
            None => RuleSpec {
                name: token,
                param: None,
            },
        })
        .collect()
}
