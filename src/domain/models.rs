use serde::{Deserialize, Serialize};

use super::{
    errors::{Result, ToolError},
    types::{
        AudienceFit, Confidence, ContentType, Effort, EnergyLevel, HookPlatform, MainGoal,
        PositioningPlatform, PostingDays, ReflectionPlatform, ShortFormPlatform, Tone, WeekFeel,
    },
};

// Request-scoped value types. Inputs are built from caller-supplied data
// and discarded once the call completes; results only exist after every
// contract check passed.

// ── Content direction planner ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDirectionInput {
    pub niche: Option<String>,
    pub main_goal: MainGoal,
    pub energy_level: EnergyLevel,
    pub platform: ShortFormPlatform,
    pub posting_days: PostingDays,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRhythm {
    pub posts: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub title: String,
    pub format: String,
    pub effort: Effort,
}

/// A gentle weekly plan: always exactly five ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDirectionPlan {
    pub weekly_direction: String,
    pub posting_rhythm: PostingRhythm,
    pub ideas: Vec<ContentIdea>,
    pub one_post_fallback: String,
    pub encouragement: String,
}

// ── Engagement signal interpreter ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSignalInput {
    pub platform: ShortFormPlatform,
    pub content_type: ContentType,
    pub goal: MainGoal,
    pub views: Option<u64>,
    pub avg_watch_time_seconds: Option<f64>,
    pub retention_percent: Option<f64>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub shares: Option<u64>,
    pub saves: Option<u64>,
    pub profile_visits: Option<u64>,
    pub follows_from_post: Option<u64>,
    pub post_topic: Option<String>,
    pub audience_fit: Option<AudienceFit>,
    pub energy_level: Option<EnergyLevel>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_name: String,
    pub what_it_means: String,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextAction {
    pub action: String,
    pub why: String,
    pub effort: Effort,
}

/// Calm read of one post's metrics: 3 to 5 signals, exactly 3 next
/// actions, exactly 2 things to avoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSignalReport {
    pub overall_read: String,
    pub signals: Vec<Signal>,
    pub next_actions: Vec<NextAction>,
    pub avoid: Vec<String>,
    pub simple_experiment: String,
    pub encouragement: String,
}

// ── Hook clarity analyzer ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookClarityInput {
    pub hook_text: String,
    pub niche: Option<String>,
    pub audience: Option<String>,
    pub platform: HookPlatform,
    pub tone: Tone,
}

impl HookClarityInput {
    pub fn validate(&self) -> Result<()> {
        if self.hook_text.trim().is_empty() {
            return Err(ToolError::InvalidInput("Hook text is required.".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookRewrite {
    pub rewritten_hook: String,
    pub approach: String,
    pub why: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPick {
    pub rewritten_hook: String,
    pub approach: String,
    pub why: String,
    pub variations: Vec<String>,
}

/// Clarity verdict with a 0..=100 score, up to 3 issues, a best pick
/// carrying exactly 2 variations, and exactly 5 rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookClarityReport {
    pub score: u8,
    pub verdict: String,
    pub issues: Vec<String>,
    pub best_pick: BestPick,
    pub rewrites: Vec<HookRewrite>,
}

// ── Message positioning builder ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePositioningInput {
    pub what_you_do: String,
    /// May be empty; rendered into the prompt either way.
    pub who_you_help: String,
    pub problem_you_solve: Option<String>,
    pub platform: PositioningPlatform,
    pub tone: Tone,
}

impl MessagePositioningInput {
    pub fn validate(&self) -> Result<()> {
        if self.what_you_do.trim().is_empty() {
            return Err(ToolError::InvalidInput(
                "Please describe what you do first.".into(),
            ));
        }
        Ok(())
    }
}

/// Parsed from labeled plain-text sections, not JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePositioning {
    pub main_message: String,
    pub supporting_ideas: Vec<String>,
    pub reassurance: String,
}

// ── Weekly content reflection ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReflectionInput {
    pub platform: ReflectionPlatform,
    pub how_the_week_felt: WeekFeel,
    pub energy_level: EnergyLevel,
    pub posts_published: Option<u32>,
    pub what_worked: String,
    pub what_felt_hard: String,
    pub surprises: String,
    pub confidence_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReflection {
    pub week_summary: String,
    pub did_well: Vec<String>,
    pub adjustments: Vec<String>,
    pub next_week_focus: String,
    pub momentum_check: String,
    pub encouragement: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_input_requires_text() {
        let input = HookClarityInput {
            hook_text: "   ".into(),
            niche: None,
            audience: None,
            platform: HookPlatform::IgReels,
            tone: Tone::Calm,
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Hook text is required.");
    }

    #[test]
    fn test_positioning_input_requires_what_you_do() {
        let input = MessagePositioningInput {
            what_you_do: "".into(),
            who_you_help: "".into(),
            problem_you_solve: None,
            platform: PositioningPlatform::Instagram,
            tone: Tone::Calm,
        };
        assert!(input.validate().is_err());

        let filled = MessagePositioningInput {
            what_you_do: "I teach watercolor basics".into(),
            ..input
        };
        assert!(filled.validate().is_ok());
    }

    #[test]
    fn test_input_deserializes_from_wire_shape() {
        let input: ContentDirectionInput = serde_json::from_str(
            r#"{
                "niche": "quiet gardening",
                "main_goal": "stay consistent",
                "energy_level": "low",
                "platform": "IG Reels",
                "posting_days": "3–4 days",
                "tone": "calm"
            }"#,
        )
        .unwrap();
        assert_eq!(input.main_goal, MainGoal::StayConsistent);
        assert_eq!(input.platform, ShortFormPlatform::IgReels);
        assert_eq!(input.posting_days, PostingDays::ThreeToFour);
    }
}
