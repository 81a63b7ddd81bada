use crate::domain::model::FenceStyle;

pub const FENCE: &str = "```";

/// Wraps `body` in a code fence after `intro`. The body is copied verbatim,
/// so output without a trailing newline puts the closing fence on its last line.
pub fn render_document(intro: &str, body: &str, style: FenceStyle) -> String {
    let opening = match style {
        FenceStyle::Standard => format!("\n{}\n", FENCE),
        FenceStyle::Inline => format!("\n{}", FENCE),
        FenceStyle::Compact => format!("{}\n", FENCE),
    };

    let mut document = String::with_capacity(intro.len() + body.len() + 2 * FENCE.len() + 3);
    document.push_str(intro);
    document.push_str(&opening);
    document.push_str(body);
    document.push_str(FENCE);
    document.push('\n');
    document
}
