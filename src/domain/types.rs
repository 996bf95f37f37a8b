use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Result, ToolError};

// Closed-set input fields. Serde carries the exact wire literal, and
// `Display` renders the same literal into prompts. Anything outside the
// set fails deserialization at the caller boundary.

// ── MainGoal ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainGoal {
    #[serde(rename = "grow audience")]
    GrowAudience,
    #[serde(rename = "build trust")]
    BuildTrust,
    #[serde(rename = "sell softly")]
    SellSoftly,
    #[serde(rename = "stay consistent")]
    StayConsistent,
}

impl MainGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrowAudience => "grow audience",
            Self::BuildTrust => "build trust",
            Self::SellSoftly => "sell softly",
            Self::StayConsistent => "stay consistent",
        }
    }
}

impl fmt::Display for MainGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EnergyLevel ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tone ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Calm,
    Direct,
    Playful,
    Premium,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Direct => "direct",
            Self::Playful => "playful",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Platforms ─────────────────────────────────────────────────────────────────
//
// Each tool addresses a slightly different platform set; they stay
// separate so an impossible combination cannot be constructed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortFormPlatform {
    #[serde(rename = "IG Reels")]
    IgReels,
    #[serde(rename = "TikTok")]
    TikTok,
    #[serde(rename = "YouTube Shorts")]
    YoutubeShorts,
}

impl ShortFormPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IgReels => "IG Reels",
            Self::TikTok => "TikTok",
            Self::YoutubeShorts => "YouTube Shorts",
        }
    }
}

impl fmt::Display for ShortFormPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookPlatform {
    #[serde(rename = "IG Reels")]
    IgReels,
    #[serde(rename = "TikTok")]
    TikTok,
    #[serde(rename = "YT Shorts")]
    YtShorts,
}

impl HookPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IgReels => "IG Reels",
            Self::TikTok => "TikTok",
            Self::YtShorts => "YT Shorts",
        }
    }
}

impl fmt::Display for HookPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectionPlatform {
    #[serde(rename = "IG")]
    Instagram,
    #[serde(rename = "TikTok")]
    TikTok,
    #[serde(rename = "YouTube")]
    Youtube,
}

impl ReflectionPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "IG",
            Self::TikTok => "TikTok",
            Self::Youtube => "YouTube",
        }
    }
}

impl fmt::Display for ReflectionPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositioningPlatform {
    #[serde(rename = "IG")]
    Instagram,
    #[serde(rename = "TikTok")]
    TikTok,
    #[serde(rename = "YouTube")]
    Youtube,
    #[serde(rename = "Website")]
    Website,
}

impl PositioningPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "IG",
            Self::TikTok => "TikTok",
            Self::Youtube => "YouTube",
            Self::Website => "Website",
        }
    }
}

impl fmt::Display for PositioningPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PostingDays ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingDays {
    #[serde(rename = "1–2 days")]
    OneToTwo,
    #[serde(rename = "3–4 days")]
    ThreeToFour,
    #[serde(rename = "5+ days")]
    FivePlus,
}

impl PostingDays {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToTwo => "1–2 days",
            Self::ThreeToFour => "3–4 days",
            Self::FivePlus => "5+ days",
        }
    }
}

impl fmt::Display for PostingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ContentType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Reel/Short")]
    ReelShort,
    #[serde(rename = "Carousel")]
    Carousel,
    #[serde(rename = "Static Post")]
    StaticPost,
    #[serde(rename = "Story")]
    Story,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReelShort => "Reel/Short",
            Self::Carousel => "Carousel",
            Self::StaticPost => "Static Post",
            Self::Story => "Story",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AudienceFit ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudienceFit {
    #[serde(rename = "right audience")]
    RightAudience,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "not sure")]
    NotSure,
}

impl AudienceFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RightAudience => "right audience",
            Self::Mixed => "mixed",
            Self::NotSure => "not sure",
        }
    }
}

impl fmt::Display for AudienceFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WeekFeel ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekFeel {
    Great,
    Okay,
    Rough,
}

impl WeekFeel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Okay => "okay",
            Self::Rough => "rough",
        }
    }
}

impl fmt::Display for WeekFeel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Output enums ──────────────────────────────────────────────────────────────
//
// These arrive inside model output, so a bad spelling is a contract
// violation rather than invalid input. Matching is case-sensitive:
// "Low" and "MEDIUM" are rejected.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effort {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            _ => Err(ToolError::UnexpectedFormat(format!(
                "'effort' must be 'low' or 'medium', got '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ToolError::UnexpectedFormat(format!(
                "'confidence' must be 'low', 'medium' or 'high', got '{}'",
                s
            ))),
        }
    }
}

// ── DebugId ───────────────────────────────────────────────────────────────────

/// Opaque correlation token logged alongside a failure: a short tool
/// prefix plus the current unix-millis timestamp in base 36. Used only
/// for log lookup, never for authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebugId(String);

impl DebugId {
    pub fn new(prefix: &str) -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        Self::from_millis(prefix, millis)
    }

    pub fn from_millis(prefix: &str, millis: u64) -> Self {
        Self(format!("{}-{}", prefix, base36(millis)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DebugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    // u64::MAX needs 13 base-36 digits.
    let mut buf = [0u8; 13];
    let mut idx = buf.len();
    while value > 0 {
        idx -= 1;
        buf[idx] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&buf[idx..]).into_owned()
}

// ── tests ─────────────────────────────────────────────────────────────────────
