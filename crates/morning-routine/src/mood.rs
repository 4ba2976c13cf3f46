//! Mood-based motivation videos.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RoutineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Video {
    pub title: &'static str,
    pub url: &'static str,
}

/// The moods offered by the selector, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energize,
    Focus,
    Relax,
    Stylish,
    Princess,
}

static ENERGIZE: &[Video] = &[Video {
    title: "【洋楽】ハッピーな気持ちのスイッチが入るポップで可愛い洋楽プレイリスト",
    url: "https://www.youtube.com/watch?v=1O3o_c4a-J4",
}];

static FOCUS: &[Video] = &[Video {
    title: "Lo-fi作業用BGM",
    url: "https://www.youtube.com/watch?v=5qap5aO4i9A",
}];

static RELAX: &[Video] = &[Video {
    title: "おはようジブリ＆ディズニー",
    url: "https://www.youtube.com/watch?v=5GM1UrRGX3c&t=39s",
}];

static STYLISH: &[Video] = &[Video {
    title: "朝準備する時にかけ流したいお洒落でテンション上がる曲集",
    url: "https://www.youtube.com/watch?v=ZC9hcDNaZBc&t=29s",
}];

static PRINCESS: &[Video] = &[Video {
    title: "朝プリンセスになれるPlaylist",
    url: "https://www.youtube.com/watch?v=9IBUcS4SGQ0",
}];

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Energize,
        Mood::Focus,
        Mood::Relax,
        Mood::Stylish,
        Mood::Princess,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Energize => "energize",
            Self::Focus => "focus",
            Self::Relax => "relax",
            Self::Stylish => "stylish",
            Self::Princess => "princess",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Energize => "元気が欲しい",
            Self::Focus => "集中したい",
            Self::Relax => "リラックスしたい",
            Self::Stylish => "おしゃな雰囲気に浸りたい",
            Self::Princess => "プリンセスになりたい",
        }
    }

    pub fn videos(&self) -> &'static [Video] {
        match self {
            Self::Energize => ENERGIZE,
            Self::Focus => FOCUS,
            Self::Relax => RELAX,
            Self::Stylish => STYLISH,
            Self::Princess => PRINCESS,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = RoutineError;

    /// Accepts a mood key (case-insensitive) or its label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.label() == s || m.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| RoutineError::UnknownMood(s.to_string()))
    }
}

/// Videos for a mood, in catalog order
pub fn videos_for_mood(mood: Mood) -> &'static [Video] {
    mood.videos()
}
