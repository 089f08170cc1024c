//! Comment stripping for JSON term files

/// Remove `//` and `/* */` comments from JSON text.
///
/// Comments are replaced with spaces (newlines are kept) so line and column
/// numbers in parser errors still point at the original text. Comment
/// markers inside string literals are left alone.
pub fn strip_json_comments(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                chars.next();
                out.push_str("  ");
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                    blank(&mut out, next);
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                while let Some(next) = chars.next() {
                    if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        out.push_str("  ");
                        break;
                    }
                    blank(&mut out, next);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn blank(out: &mut String, ch: char) {
    match ch {
        '\n' | '\r' => out.push(ch),
        _ => out.push(' '),
    }
}
