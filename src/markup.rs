//! Splits rendered lines into plain text, clickable commands and links.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Command { name: String },
    Link { href: String, label: String },
}

impl Segment {
    fn text(text: &str) -> Self {
        Segment::Text { text: text.to_string() }
    }
}

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<cmd>(?P<cmd>.*?)</cmd>|<a\s[^>]*?href="(?P<href>[^"]*)"[^>]*>(?P<label>.*?)</a>"#)
            .expect("markup pattern is valid")
    })
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("word pattern is valid"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

/// Parses `<cmd>NAME</cmd>` markers and anchor tags. Anything else, inline
/// HTML included, stays text for the renderer.
pub fn segments(line: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in markup_regex().captures_iter(line) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        if whole.start() > last {
            out.push(Segment::text(&line[last..whole.start()]));
        }
        if let Some(name) = caps.name("cmd") {
            out.push(Segment::Command { name: name.as_str().trim().to_string() });
        } else {
            out.push(Segment::Link {
                href: caps.name("href").map(|m| m.as_str()).unwrap_or_default().to_string(),
                label: caps.name("label").map(|m| m.as_str()).unwrap_or_default().to_string(),
            });
        }
        last = whole.end();
    }
    if last < line.len() {
        out.push(Segment::text(&line[last..]));
    }
    out
}

/// Like `segments`, but bare words equal to one of `names` also become
/// clickable commands.
pub fn linkify(line: &str, names: &[String]) -> Vec<Segment> {
    let mut out = Vec::new();
    for segment in segments(line) {
        let text = match segment {
            Segment::Text { text } => text,
            other => {
                out.push(other);
                continue;
            }
        };
        // tags inside the text (rainbow spans etc.) are left untouched
        if tag_regex().is_match(&text) {
            out.push(Segment::Text { text });
            continue;
        }
        let mut last = 0;
        for word in word_regex().find_iter(&text) {
            if !names.iter().any(|n| n == word.as_str()) {
                continue;
            }
            if word.start() > last {
                out.push(Segment::text(&text[last..word.start()]));
            }
            out.push(Segment::Command { name: word.as_str().to_string() });
            last = word.end();
        }
        if last < text.len() {
            out.push(Segment::text(&text[last..]));
        }
    }
    out
}

/// Plain-text rendition: markers become their name, links their label, other
/// tags are dropped.
pub fn strip(line: &str) -> String {
    let flat: String = segments(line)
        .into_iter()
        .map(|s| match s {
            Segment::Text { text } => text,
            Segment::Command { name } => name,
            Segment::Link { label, .. } => label,
        })
        .collect();
    tag_regex().replace_all(&flat, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text { text: s.to_string() }
    }

    fn cmd(s: &str) -> Segment {
        Segment::Command { name: s.to_string() }
    }

    #[test]
    fn parses_command_markers() {
        assert_eq!(
            segments("Type '<cmd>help</cmd>' for all commands."),
            vec![text("Type '"), cmd("help"), text("' for all commands.")]
        );
    }

    #[test]
    fn parses_anchor_tags() {
        let line = r#"• GitHub: <a href="https://github.com/mrilikecoding" target="_blank" rel="noopener noreferrer">github.com/mrilikecoding</a>"#;
        assert_eq!(
            segments(line),
            vec![
                text("• GitHub: "),
                Segment::Link {
                    href: "https://github.com/mrilikecoding".to_string(),
                    label: "github.com/mrilikecoding".to_string(),
                },
            ]
        );
    }

    #[test]
    fn plain_line_is_one_text_segment() {
        assert_eq!(segments("just text"), vec![text("just text")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn linkify_marks_registered_words() {
        let names = vec!["banner".to_string(), "help".to_string()];
        assert_eq!(
            linkify("Type banner to see the banner", &names),
            vec![text("Type "), cmd("banner"), text(" to see the "), cmd("banner")]
        );
        // partial words are left alone
        assert_eq!(linkify("helpful", &names), vec![text("helpful")]);
    }

    #[test]
    fn strip_flattens_markup() {
        assert_eq!(
            strip(r#"<cmd>about</cmd> - see <a href="x">site</a> <span class="r">A</span>"#),
            "about - see site A"
        );
    }
}
