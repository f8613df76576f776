use url::Url;

const VIDEO_ID_LEN: usize = 11;

fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Extract a video id from one line of input.
///
/// Recognizes watch URLs, youtu.be short links, embed/shorts/live paths and
/// bare 11-character ids. Returns `None` for blank lines and anything that
/// does not resemble a known form, so callers can report those separately
/// from validation failures.
pub fn extract_video_id(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if is_video_id(line) {
        return Some(line.to_string());
    }

    // Hand-written lists often omit the scheme.
    let url = Url::parse(line)
        .or_else(|_| Url::parse(&format!("https://{line}")))
        .ok()?;

    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let candidate = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "m.youtube.com" | "music.youtube.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("shorts") | Some("live") | Some("v") => {
                    segments.next().map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    };

    candidate.filter(|id| is_video_id(id))
}
