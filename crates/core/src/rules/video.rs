use std::fmt;

/// A YouTube video identifier extracted from a share or watch URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from the two URL shapes the page uses:
///
/// - `https://youtu.be/<id>[?...]`
/// - `https://www.youtube.com/watch?v=<id>[&...]`
///
/// Anything else, or an empty id, yields `None`.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let id = if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next()
    } else if url.contains("youtube.com/watch?v=") {
        url.split_once("v=")
            .and_then(|(_, rest)| rest.split('&').next())
    } else {
        None
    }?;
    (!id.is_empty()).then(|| VideoId(id.to_string()))
}

/// Thumbnail URL for `id`. `template` carries an `{id}` placeholder.
pub fn thumbnail_url(template: &str, id: &VideoId) -> String {
    template.replace("{id}", id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> String {
        extract_video_id(url)
            .map(|v| v.as_str().to_owned())
            .unwrap_or_default()
    }

    #[test]
    fn short_links() {
        assert_eq!(id("https://youtu.be/ABC123?t=5"), "ABC123");
        assert_eq!(id("https://youtu.be/ABC123"), "ABC123");
    }

    #[test]
    fn watch_links() {
        assert_eq!(id("https://www.youtube.com/watch?v=XYZ987&list=1"), "XYZ987");
        assert_eq!(id("youtube.com/watch?v=q"), "q");
    }

    #[test]
    fn unrecognised_shapes() {
        assert_eq!(id("https://example.com/video"), "");
        assert_eq!(id("https://www.youtube.com/embed/XYZ"), "");
        assert_eq!(extract_video_id("https://youtu.be/?t=5"), None);
    }

    #[test]
    fn thumbnail_uses_fixed_tier() {
        let vid = extract_video_id("https://youtu.be/abc").unwrap_or(VideoId(String::new()));
        assert_eq!(
            thumbnail_url("https://img.youtube.com/vi/{id}/hqdefault.jpg", &vid),
            "https://img.youtube.com/vi/abc/hqdefault.jpg"
        );
    }
}
