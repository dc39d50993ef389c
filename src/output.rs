use crate::Segment;

/// Format an offset in seconds as `[MM:SS]`.
///
/// There is no hours field; minutes keep counting past 59.
pub fn format_timestamp(start: f64) -> String {
    let minutes = (start / 60.0).floor() as u64;
    let seconds = (start % 60.0).floor() as u64;
    format!("[{minutes:02}:{seconds:02}]")
}

/// Join a caption's wrapped lines with single spaces
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render segments as `[MM:SS] text`, exactly one line per segment
pub fn render_timestamped(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| format!("{} {}", format_timestamp(s.start), single_line(&s.text)))
        .collect::<Vec<_>>()
        .join("\n")
}
