/// Line tokenizer.
///
/// Splits a raw shell line into typed tokens (names, options, strings,
/// bracketed expressions, comments, ...). Bracketed spans stay opaque: an
/// expression token is handed to the evaluator as a whole.
///
/// # Responsibilities
/// - Whitespace separation with bracket, quote and escape awareness.
/// - Classification of each token by its leading character.
/// - Grammar errors for unbalanced or mismatched brackets.
pub mod line;
/// Expression scanner.
///
/// Breaks the text of an expression into atoms: numeric and string
/// literals, identifiers, operator symbols and parentheses. Built on
/// `logos`.
pub mod expression;
