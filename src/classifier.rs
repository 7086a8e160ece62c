/// What a raw command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Exit,
    List,
    MarkDone,
    Delete,
    Clear,
    Find,
    Todo,
    Deadline,
    Event,
    Invalid,
}

/// Checked in order; the first keyword the input starts with wins.
const KEYWORDS: [(&str, Intent); 9] = [
    ("bye", Intent::Exit),
    ("list", Intent::List),
    ("done", Intent::MarkDone),
    ("delete", Intent::Delete),
    ("nuke", Intent::Clear),
    ("find", Intent::Find),
    ("todo", Intent::Todo),
    ("deadline", Intent::Deadline),
    ("event", Intent::Event),
];

/// Classifies raw input by its leading keyword, ignoring case.
///
/// This is a prefix test, not a tokenizer: `"listing"` is a `List` and
/// `"done3"` is a `MarkDone`.
pub fn classify(input: &str) -> Intent {
    KEYWORDS
        .iter()
        .find(|(kw, _)| starts_with_keyword(input, kw))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Invalid)
}

/// ASCII case-insensitive prefix test. Keeps the keyword a byte prefix so
/// callers can strip it by length.
fn starts_with_keyword(input: &str, keyword: &str) -> bool {
    input
        .as_bytes()
        .get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword.as_bytes()))
}
