//! Input text to the ordered word list shown on screen.

use std::sync::LazyLock;

use jieba_rs::Jieba;

static JIEBA: LazyLock<Jieba> = LazyLock::new(Jieba::new);

/// Split text into display words.
///
/// A `"` opens a quoted span anywhere, even mid-token. The span stays one word with its inner
/// whitespace collapsed to single spaces, and an unclosed quote swallows the rest of the input.
/// Outside quotes, words are whitespace-delimited and Han/kana runs are segmented with a
/// dictionary. Then:
///
/// - a token made only of closing punctuation (`,` `.` `!` `?` `;` `:` and their CJK forms) is
///   glued to the previous word,
/// - a standalone `-` joins the previous word and the next token (`well - known` becomes
///   `well-known`).
///
/// Whitespace-only input yields an empty list; no returned word is empty.
pub fn split_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('"') {
        merge_run(&mut words, &rest[..open]);
        let after = &rest[open + 1..];
        match after.find('"') {
            Some(close) => {
                words.push(quoted(&after[..close], true));
                rest = &after[close + 1..];
            }
            None => {
                words.push(quoted(after, false));
                return words;
            }
        }
    }
    merge_run(&mut words, rest);
    words
}

/// Whether a word ends a sentence (`.`, `!`, `?`, including CJK forms), ignoring a trailing quote.
pub fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches('"')
        .chars()
        .next_back()
        .is_some_and(|c| matches!(c, '.' | '!' | '?' | '。' | '！' | '？'))
}

fn quoted(inner: &str, closed: bool) -> String {
    let mut word = String::from("\"");
    word.push_str(&inner.split_whitespace().collect::<Vec<_>>().join(" "));
    if closed {
        word.push('"');
    }
    word
}

/// Tokenize an unquoted run and merge its tokens into `words`.
fn merge_run(words: &mut Vec<String>, run: &str) {
    let mut tokens = run.split_whitespace().flat_map(segment);

    while let Some(token) = tokens.next() {
        if token == "-"
            && let Some(last) = words.last_mut()
            && let Some(next) = tokens.next()
        {
            last.push('-');
            last.push_str(next);
            continue;
        }

        if is_closing_punctuation(token)
            && let Some(last) = words.last_mut()
        {
            last.push_str(token);
            continue;
        }

        words.push(token.to_owned());
    }
}

/// Dictionary-segment a whitespace-free token that contains Han or kana.
fn segment(token: &str) -> Vec<&str> {
    if !token.chars().any(is_cjk) {
        return vec![token];
    }
    JIEBA
        .cut(token, true)
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{30ff}' // kana
            | '\u{3400}'..='\u{4dbf}'
            | '\u{4e00}'..='\u{9fff}'
            | '\u{f900}'..='\u{faff}'
    )
}

fn is_closing_punctuation(token: &str) -> bool {
    token.chars().all(|c| {
        matches!(
            c,
            ',' | '.' | '!' | '?' | ';' | ':' | '。' | '、' | '！' | '？'
        )
    })
}

#[cfg(test)]
#[path = "../tests/unit/text.rs"]
mod tests;
