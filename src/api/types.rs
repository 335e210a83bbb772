//! API request and response type definitions.

use serde::{Deserialize, Serialize};

/// Login credentials, taken from the configuration and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authenticated session returned by the login endpoint.
///
/// Read-only for the rest of the run; a session is never refreshed, so an
/// expiry during listing or download is terminal for that run.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

/// Login response wrapper: `{"result": {"token": ..., "userId": ...}}`.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub result: SessionResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub token: String,
    pub user_id: String,
}

/// Listing response wrapper: `{"result": [...]}`.
#[derive(Debug, Deserialize)]
pub struct ChatsResponse {
    pub result: Vec<Chat>,
}

/// One raw entry from the chats listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    #[serde(default)]
    pub has_video_url: bool,
    #[serde(rename = "videoURL")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub start_time: i64,
}

impl Chat {
    /// Convert a chat entry into a downloadable lesson.
    ///
    /// Returns `None` for entries without a recording, so every lesson
    /// reaching the download stage carries a non-empty video URL.
    pub fn into_lesson(self) -> Option<Lesson> {
        if !self.has_video_url {
            return None;
        }
        self.video_url
            .filter(|url| !url.is_empty())
            .map(|video_url| Lesson {
                video_url,
                start_time: self.start_time,
            })
    }
}

/// A downloadable lesson recording.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub video_url: String,
    pub start_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_with_video_becomes_lesson() {
        let chat = Chat {
            has_video_url: true,
            video_url: Some("https://cdn.example.com/lesson.mp4".into()),
            start_time: 1700000000,
        };

        let lesson = chat.into_lesson().unwrap();
        assert_eq!(lesson.video_url, "https://cdn.example.com/lesson.mp4");
        assert_eq!(lesson.start_time, 1700000000);
    }

    #[test]
    fn test_chat_without_video_is_skipped() {
        let chat = Chat {
            has_video_url: false,
            video_url: Some("https://cdn.example.com/lesson.mp4".into()),
            start_time: 1700000000,
        };
        assert!(chat.into_lesson().is_none());
    }

    #[test]
    fn test_chat_with_empty_url_is_skipped() {
        let chat = Chat {
            has_video_url: true,
            video_url: Some(String::new()),
            start_time: 1700000000,
        };
        assert!(chat.into_lesson().is_none());

        let chat = Chat {
            has_video_url: true,
            video_url: None,
            start_time: 1700000000,
        };
        assert!(chat.into_lesson().is_none());
    }
}
