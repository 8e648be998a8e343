//! Row tokenizer
//!
//! Splits one data row into field tokens. A token is either
//! - a `"`-quoted span, ending at the first closing quote that is followed
//!   by optional whitespace and then `,` or end of row, or
//! - a run of characters holding neither `,` nor `"`, accepted only when
//!   it runs up to a `,` or the end of the row.
//!
//! Text that starts no acceptable token is skipped. An empty field between
//! two commas yields no token; a whitespace-only field yields a blank token
//! and keeps its position. Tokens are returned raw; use [`clean_token`] to
//! unquote them.

/// Split a row into raw tokens (whitespace and quotes still attached)
pub fn tokenize_row(row: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < row.len() {
        match token_at(row, pos) {
            Ok(end) => {
                tokens.push(&row[pos..end]);
                pos = end;
            }
            Err(resume) => pos = resume,
        }
    }

    tokens
}

/// Try to match a token starting at byte `start`.
///
/// Returns the end of the token, or the position to resume scanning from.
fn token_at(row: &str, start: usize) -> Result<usize, usize> {
    let rest = &row[start..];

    if rest.starts_with('"') {
        let mut search = start + 1;
        while let Some(offset) = row[search..].find('"') {
            let end = search + offset + 1;
            if at_separator(&row[end..]) {
                return Ok(end);
            }
            search = end;
        }
        return Err(start + 1);
    }

    if rest.starts_with(',') {
        return Err(start + 1);
    }

    // Every position inside the run shares its end, so a failed run is
    // skipped as a whole.
    let end = rest
        .find(|c| c == ',' || c == '"')
        .map_or(row.len(), |offset| start + offset);
    if at_separator(&row[end..]) {
        Ok(end)
    } else {
        Err(end)
    }
}

/// Whether `rest` begins with optional whitespace followed by `,` or nothing
fn at_separator(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(',')
}

/// Trim a raw token, strip one pair of surrounding quotes and collapse
/// doubled quotes.
pub fn clean_token(raw: &str) -> String {
    let mut value = raw.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value = &value[1..value.len() - 1];
    }
    value.replace("\"\"", "\"")
}

/// Tokenize and clean a row in one step
pub fn split_row(row: &str) -> Vec<String> {
    tokenize_row(row).into_iter().map(clean_token).collect()
}
