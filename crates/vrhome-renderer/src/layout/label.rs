use url::Url;
use vrhome_config::schema::SampleDefinition;

/// Longest detail label shown before it is cut with an ellipsis.
pub const MAX_LABEL_CHARS: usize = 35;

/// Text under a sample: its description, or `host - lastSegment` of its URL.
///
/// Relative URLs have no host, so they are shown as written.
pub fn detail_label(sample: &SampleDefinition) -> String {
    let text = match sample.description.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => url_label(&sample.url),
    };
    truncate_label(&text)
}

fn url_label(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => {
            let path = url.path();
            let last = path.rsplit('/').next().unwrap_or(path);
            format!("{} - {}", url.host_str().unwrap_or_default(), last)
        }
        Err(_) => raw.to_string(),
    }
}

pub fn truncate_label(text: &str) -> String {
    if text.chars().count() > MAX_LABEL_CHARS {
        let head: String = text.chars().take(MAX_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
