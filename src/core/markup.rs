/// Narration markup: `*text*` is italic, everything else literal.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub italic: bool,
}

/// Split a narration line into styled spans. A `*` without a closing
/// partner, or `**` with nothing between, stays literal.
pub fn spans(line: &str) -> Vec<Span> {
    let mut out: Vec<Span> = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find('*') {
        let after = &rest[open + 1..];
        match after.find('*') {
            Some(close) if close > 0 => {
                push_literal(&mut out, &rest[..open]);
                out.push(Span {
                    text: after[..close].to_string(),
                    italic: true,
                });
                rest = &after[close + 1..];
            }
            _ => {
                push_literal(&mut out, &rest[..=open]);
                rest = after;
            }
        }
    }
    push_literal(&mut out, rest);
    out
}

/// Markup with the asterisks removed.
pub fn plain(line: &str) -> String {
    spans(line).into_iter().map(|span| span.text).collect()
}

fn push_literal(out: &mut Vec<Span>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if !last.italic => last.text.push_str(text),
        _ => out.push(Span {
            text: text.to_string(),
            italic: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> Span {
        Span {
            text: text.to_string(),
            italic: false,
        }
    }

    fn ital(text: &str) -> Span {
        Span {
            text: text.to_string(),
            italic: true,
        }
    }

    #[test]
    fn italic_runs() {
        assert_eq!(
            spans("You'll find *no* such thing here."),
            vec![lit("You'll find "), ital("no"), lit(" such thing here.")]
        );
        assert_eq!(
            spans("*I* say, *me,* I say"),
            vec![ital("I"), lit(" say, "), ital("me,"), lit(" I say")]
        );
    }

    #[test]
    fn unpaired_stars_stay_literal() {
        assert_eq!(spans("2 * 3"), vec![lit("2 * 3")]);
        assert_eq!(spans("a ** b"), vec![lit("a ** b")]);
        assert!(spans("").is_empty());
    }

    #[test]
    fn plain_strips_markup() {
        assert_eq!(plain("*loading...*"), "loading...");
    }
}
