//! YouTube thumbnail URLs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, Tool};

use crate::core::{ToolConfig, invalid_input};

pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|v/|u/\w/|embed/|shorts/|watch\?v=|&v=)([^#&?/]*)")
        .expect("valid regex")
});
static BARE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid regex"));

/// Extract the 11-character video id from a URL or a bare id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if BARE_ID.is_match(input) {
        return Some(input.to_string());
    }
    VIDEO_URL
        .captures(input)
        .map(|caps| caps[1].to_string())
        .filter(|id| id.len() == VIDEO_ID_LEN)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub quality: &'static str,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

const QUALITIES: [(&str, &str, u32, u32); 5] = [
    ("Max Resolution", "maxresdefault.jpg", 1280, 720),
    ("High Quality (HD)", "sddefault.jpg", 640, 480),
    ("Medium Quality", "hqdefault.jpg", 480, 360),
    ("Standard Quality", "mqdefault.jpg", 320, 180),
    ("Default", "default.jpg", 120, 90),
];

/// Thumbnail links for a video, largest first.
pub fn thumbnails(video_id: &str) -> Vec<Thumbnail> {
    QUALITIES
        .iter()
        .map(|(quality, file, width, height)| Thumbnail {
            quality,
            url: format!("https://img.youtube.com/vi/{}/{}", video_id, file),
            width: *width,
            height: *height,
        })
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoInput {
    pub url: String,
}

impl ToolConfig for VideoInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { url: input })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YoutubeThumbnailTool;

impl Tool for YoutubeThumbnailTool {
    fn name(&self) -> &str {
        "youtube-thumbnail-downloader"
    }

    fn call(&self, input: String) -> ExecutionResult {
        VideoInput::parse(input)
            .and_then(|config| {
                let id = extract_video_id(&config.url).ok_or_else(|| {
                    invalid_input("Could not extract a video ID. Please check the YouTube URL")
                })?;
                Ok(serde_json::json!({ "video_id": id, "thumbnails": thumbnails(&id) }))
            })
            .into()
    }
}
