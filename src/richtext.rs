//! Lenient HTML Normalizer
//!
//! Converts the basic HTML markup used in plant descriptions
//! (line breaks, emphasis, links) into a sanitized fragment for the
//! rich-text host. Unknown tags are stripped with their text kept,
//! malformed markup is rendered as literal text.

/// Convert an HTML-formatted description into a sanitized fragment.
///
/// Deterministic for a given input; callers memoize on the input value
/// so the conversion runs at most once per description.
pub fn from_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut open_links = 0usize;
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        push_text(&rest[..lt], &mut out);
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) if is_tag_like(&after[..gt]) => {
                emit_tag(&after[..gt], &mut open_links, &mut out);
                rest = &after[gt + 1..];
            }
            _ => {
                // Not a tag: a lone '<' stays literal text
                out.push_str("&lt;");
                rest = after;
            }
        }
    }
    push_text(rest, &mut out);

    // Anchors left open by the input
    for _ in 0..open_links {
        out.push_str("</a>");
    }
    out
}

/// A tag body must start with a letter (after an optional '/')
fn is_tag_like(body: &str) -> bool {
    let body = body.trim_start();
    let body = body.strip_prefix('/').unwrap_or(body);
    body.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn emit_tag(body: &str, open_links: &mut usize, out: &mut String) {
    let body = body.trim();
    let closing = body.starts_with('/');
    let body = body.strip_prefix('/').unwrap_or(body);
    let body = body.strip_suffix('/').unwrap_or(body).trim();

    let name_end = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();
    let attrs = &body[name_end..];

    match name.as_str() {
        "br" => {
            if !closing {
                out.push_str("<br>");
            }
        }
        "b" | "strong" | "i" | "em" | "u" => {
            if closing {
                out.push_str("</");
            } else {
                out.push('<');
            }
            out.push_str(&name);
            out.push('>');
        }
        "a" => {
            if closing {
                if *open_links > 0 {
                    *open_links -= 1;
                    out.push_str("</a>");
                }
            } else if let Some(href) = find_href(attrs).filter(|h| is_safe_href(h)) {
                *open_links += 1;
                out.push_str("<a href=\"");
                push_text(&href, out);
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            }
            // An anchor without a usable href is stripped, its text stays
        }
        _ => {} // Unknown tags are stripped, their text stays
    }
}

/// Extract the href attribute value, quoted or bare
fn find_href(attrs: &str) -> Option<String> {
    let pos = attrs.to_ascii_lowercase().find("href")?;
    let rest = attrs[pos + 4..].trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    match rest.chars().next()? {
        q @ ('"' | '\'') => {
            let value = &rest[1..];
            value.find(q).map(|end| value[..end].to_string())
        }
        _ => rest.split_whitespace().next().map(|v| v.to_string()),
    }
}

/// Only plain web/mail targets and in-app fragments stay tappable
fn is_safe_href(href: &str) -> bool {
    let lower = href.trim().to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with('/')
        || lower.starts_with('#')
}

/// Escape a text run, passing through entities already present
fn push_text(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(pos) = rest.find(['&', '<', '>', '"']) {
        out.push_str(&rest[..pos]);
        match rest.as_bytes()[pos] {
            b'&' => {
                if let Some(len) = entity_len(&rest[pos..]) {
                    out.push_str(&rest[pos..pos + len]);
                    rest = &rest[pos + len..];
                    continue;
                }
                out.push_str("&amp;");
            }
            b'<' => out.push_str("&lt;"),
            b'>' => out.push_str("&gt;"),
            b'"' => out.push_str("&quot;"),
            _ => unreachable!(),
        }
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
}

/// Length of a character entity at the start of `s`, if one is there
fn entity_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let end = body.find(';')?;
    if end == 0 || end > 8 {
        return None;
    }
    let name = &body[..end];
    let valid = match name.strip_prefix('#') {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => name.chars().all(|c| c.is_ascii_alphanumeric()),
    };
    valid.then_some(end + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(from_html("water weekly"), "water weekly");
    }

    #[test]
    fn test_line_breaks_kept() {
        assert_eq!(
            from_html("HTML<br><br>description"),
            "HTML<br><br>description"
        );
    }

    #[test]
    fn test_emphasis_normalized() {
        assert_eq!(from_html("<B>Bold</B> and <i>leaf</i>"), "<b>Bold</b> and <i>leaf</i>");
        assert_eq!(from_html("<em>daily</em>"), "<em>daily</em>");
        assert_eq!(from_html("<strong>moist</strong>"), "<strong>moist</strong>");
    }

    #[test]
    fn test_self_closing_br() {
        assert_eq!(from_html("a<br/>b<br />c"), "a<br>b<br>c");
    }

    #[test]
    fn test_unknown_tags_stripped_text_kept() {
        assert_eq!(
            from_html("<p>Hello <span class=\"x\">world</span></p>"),
            "Hello world"
        );
    }

    #[test]
    fn test_script_markup_neutralized() {
        assert_eq!(from_html("<script>alert(1)</script>"), "alert(1)");
    }

    #[test]
    fn test_lone_angle_brackets_are_literal() {
        assert_eq!(from_html("5 > 3 & 2 < 1"), "5 &gt; 3 &amp; 2 &lt; 1");
        assert_eq!(from_html("trailing <"), "trailing &lt;");
        assert_eq!(from_html("<oops"), "&lt;oops");
    }

    #[test]
    fn test_existing_entities_pass_through() {
        assert_eq!(from_html("Tom &amp; Jerry"), "Tom &amp; Jerry");
        assert_eq!(from_html("&#233;t&#233;"), "&#233;t&#233;");
    }

    #[test]
    fn test_links_stay_tappable() {
        assert_eq!(
            from_html("<a href=\"https://example.org/care\">care guide</a>"),
            "<a href=\"https://example.org/care\" target=\"_blank\" rel=\"noopener noreferrer\">care guide</a>"
        );
    }

    #[test]
    fn test_unsafe_link_scheme_dropped() {
        assert_eq!(from_html("<a href='javascript:alert(1)'>tap</a>"), "tap");
    }

    #[test]
    fn test_stray_anchor_close_dropped() {
        assert_eq!(from_html("no link</a> here"), "no link here");
    }

    #[test]
    fn test_unclosed_anchor_closed_at_end() {
        assert_eq!(
            from_html("<a href=\"/zones\">zone map"),
            "<a href=\"/zones\" target=\"_blank\" rel=\"noopener noreferrer\">zone map</a>"
        );
    }
}
