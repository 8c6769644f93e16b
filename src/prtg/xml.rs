//! PRTG SSH Advanced Sensor XML output. The schema is small enough that the
//! document is written directly, no XML library involved.

use crate::prtg::{ChannelKind, ChannelResult};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_tag(doc: &mut String, tag: &str, text: &str) {
    doc.push_str("    <");
    doc.push_str(tag);
    doc.push('>');
    doc.push_str(&escape(text));
    doc.push_str("</");
    doc.push_str(tag);
    doc.push_str(">\n");
}

/// Render the success document: one `<result>` block per channel.
pub fn render_document(results: &[ChannelResult]) -> String {
    let mut doc = String::from("<prtg>\n");
    for result in results {
        doc.push_str("  <result>\n");
        push_tag(&mut doc, "channel", result.name);
        push_tag(&mut doc, "value", &result.value);
        match result.kind {
            ChannelKind::Speed => {
                push_tag(&mut doc, "float", "1");
                push_tag(&mut doc, "unit", "Custom");
                push_tag(&mut doc, "customunit", "Mbps");
            }
            ChannelKind::Count => {
                push_tag(&mut doc, "float", "0");
                push_tag(&mut doc, "unit", "Count");
            }
        }
        doc.push_str("  </result>\n");
    }
    doc.push_str("</prtg>");
    doc
}

/// Render the failure document the agent expects when no numeric channels
/// are available.
pub fn error_document(text: &str) -> String {
    format!(
        "<prtg>\n  <error>1</error>\n  <text>{}</text>\n</prtg>",
        escape(text)
    )
}
