//! Invocation token preprocessing

/// Discard the leading run of free-form tokens.
///
/// The invoking wrapper may prepend arbitrary text (a raw commit message,
/// for instance) before the actual flags. Everything between the program
/// name and the first `-`-prefixed token is dropped so the parser never sees
/// tokens it cannot interpret. If no token starts with `-`, only the program
/// name survives.
pub fn strip_leading_text(args: &[String]) -> Vec<String> {
    let mut result: Vec<String> = args.iter().take(1).cloned().collect();

    if let Some(pos) = args.iter().skip(1).position(|t| t.starts_with('-')) {
        result.extend(args[pos + 1..].iter().cloned());
    }

    result
}
