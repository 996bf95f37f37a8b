//! Use-case tests driving every tool through an in-memory fake port.
//! No network access; completion responses are scripted per test.

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use calm_content_tools::app::outcome::{ToolOutcome, NOT_CONNECTED_MESSAGE, TRY_AGAIN_MESSAGE};
use calm_content_tools::app::ports::{CompletionPort, CompletionRequest};
use calm_content_tools::app::usecases::ToolUseCases;
use calm_content_tools::domain::errors::{Result, ToolError};
use calm_content_tools::domain::models::{
    ContentDirectionInput, EngagementSignalInput, HookClarityInput, MessagePositioningInput,
    WeeklyReflectionInput,
};
use calm_content_tools::domain::types::{
    ContentType, EnergyLevel, HookPlatform, MainGoal, PositioningPlatform, PostingDays,
    ReflectionPlatform, ShortFormPlatform, Tone, WeekFeel,
};

// ── FakeCompletionPort ───────────────────────────────────────────────────────

struct FakeCompletionPort {
    reply: Mutex<Option<Result<String>>>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletionPort {
    fn replying(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(Some(Ok(raw.to_string()))),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: ToolError) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(Some(Err(err))),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionPort for FakeCompletionPort {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.seen.lock().unwrap().push(request);
        self.reply
            .lock()
            .unwrap()
            .take()
            .expect("fake port called more than once")
    }
}

// ── fixtures ─────────────────────────────────────────────────────────────────

fn content_direction_input() -> ContentDirectionInput {
    ContentDirectionInput {
        niche: None,
        main_goal: MainGoal::StayConsistent,
        energy_level: EnergyLevel::Low,
        platform: ShortFormPlatform::IgReels,
        posting_days: PostingDays::ThreeToFour,
        tone: Tone::Calm,
    }
}

fn content_direction_response() -> String {
    json!({
        "weekly_direction": "Keep it light this week.",
        "posting_rhythm": { "posts": "3", "note": "Three short posts is plenty." },
        "ideas": [
            { "title": "One tip", "format": "talking head", "effort": "low" },
            { "title": "One myth", "format": "text on screen", "effort": "low" },
            { "title": "One moment", "format": "b-roll", "effort": "low" },
            { "title": "One answer", "format": "talking head", "effort": "medium" },
            { "title": "One recap", "format": "carousel", "effort": "medium" }
        ],
        "one_post_fallback": "Post the tip.",
        "encouragement": "Slow weeks still count."
    })
    .to_string()
}

// ── content direction ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_content_direction_end_to_end() {
    let port = FakeCompletionPort::replying(&format!(
        "Here is your plan:\n{}",
        content_direction_response()
    ));
    let tools = ToolUseCases::new(port.clone());

    let plan = tools
        .content_direction(&content_direction_input())
        .await
        .unwrap();

    // Numeric-as-string posts is coerced to an integer.
    assert_eq!(plan.posting_rhythm.posts, 3);
    assert_eq!(plan.ideas.len(), 5);

    let requests = port.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.json_response);
    assert_eq!(request.temperature, 0.4);
    assert!(request.system.contains("calm, practical content strategist"));
    assert!(request.user.contains("Main goal: stay consistent"));
    assert!(request.user.contains("Energy level: low"));
    assert!(request.user.contains("Platform: IG Reels"));
    assert!(request.user.contains("Posting days: 3–4 days"));
    assert!(request.user.contains("Tone: calm"));
    assert!(request.user.contains("Return JSON exactly in this shape:"));
}

#[tokio::test]
async fn test_content_direction_contract_violation_is_generic_to_caller() -> anyhow::Result<()> {
    // Four ideas instead of five.
    let mut value: serde_json::Value = serde_json::from_str(&content_direction_response())?;
    value["ideas"]
        .as_array_mut()
        .ok_or_else(|| anyhow::anyhow!("fixture 'ideas' must be an array"))?
        .pop();
    let port = FakeCompletionPort::replying(&value.to_string());
    let tools = ToolUseCases::new(port);

    let outcome = tools
        .content_direction_outcome(&content_direction_input())
        .await;
    match outcome {
        ToolOutcome::Failure { message, debug_id } => {
            assert_eq!(message, TRY_AGAIN_MESSAGE);
            assert!(debug_id.as_str().starts_with("CDP-"));
        }
        ToolOutcome::Success(_) => panic!("expected contract violation"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_maps_to_not_connected() {
    let port = FakeCompletionPort::failing(ToolError::MissingCredential(
        "OPENAI_API_KEY is not set".into(),
    ));
    let tools = ToolUseCases::new(port);

    let outcome = tools
        .content_direction_outcome(&content_direction_input())
        .await;
    match outcome {
        ToolOutcome::Failure { message, .. } => assert_eq!(message, NOT_CONNECTED_MESSAGE),
        ToolOutcome::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_empty_response_maps_to_generic_retry() {
    let port = FakeCompletionPort::failing(ToolError::EmptyResponse);
    let tools = ToolUseCases::new(port);

    let outcome = tools
        .content_direction_outcome(&content_direction_input())
        .await;
    match outcome {
        ToolOutcome::Failure { message, .. } => assert_eq!(message, TRY_AGAIN_MESSAGE),
        ToolOutcome::Success(_) => panic!("expected failure"),
    }
}

// ── engagement signals ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_engagement_signal_end_to_end() {
    let response = json!({
        "overall_read": "Quiet post, strong saves.",
        "signals": [
            { "signal_name": "Saves", "what_it_means": "Keep-worthy.", "confidence": "high" },
            { "signal_name": "Watch time", "what_it_means": "Held attention.", "confidence": "medium" },
            { "signal_name": "Comments", "what_it_means": "Normal for the topic.", "confidence": "low" }
        ],
        "next_actions": [
            { "action": "Repost as a carousel.", "why": "Saves show demand.", "effort": "low" },
            { "action": "Reply to comments.", "why": "Small audiences notice.", "effort": "low" },
            { "action": "Film a follow-up.", "why": "Keeps the thread going.", "effort": "medium" }
        ],
        "avoid": ["Posting three times tomorrow.", "Deleting the post."],
        "simple_experiment": "Pin a question.",
        "encouragement": "This is working."
    })
    .to_string();

    let port = FakeCompletionPort::replying(&response);
    let tools = ToolUseCases::new(port.clone());

    let input = EngagementSignalInput {
        platform: ShortFormPlatform::YoutubeShorts,
        content_type: ContentType::Carousel,
        goal: MainGoal::GrowAudience,
        views: None,
        avg_watch_time_seconds: None,
        retention_percent: None,
        likes: Some(12),
        comments: None,
        shares: None,
        saves: None,
        profile_visits: None,
        follows_from_post: None,
        post_topic: None,
        audience_fit: None,
        energy_level: None,
        notes: None,
    };
    let report = tools.engagement_signal(&input).await.unwrap();
    assert_eq!(report.signals.len(), 3);
    assert_eq!(report.avoid.len(), 2);

    let request = &port.requests()[0];
    assert!(request.json_response);
    assert!(request.user.contains("Platform: YouTube Shorts"));
    assert!(request.user.contains("Views: not provided"));
    assert!(request.user.contains("Likes: 12"));
}

// ── hook clarity ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_hook_clarity_rejects_empty_input_before_calling_upstream() {
    let port = FakeCompletionPort::replying("never used");
    let tools = ToolUseCases::new(port.clone());

    let input = HookClarityInput {
        hook_text: "  ".into(),
        niche: None,
        audience: None,
        platform: HookPlatform::TikTok,
        tone: Tone::Playful,
    };

    let err = tools.hook_clarity(&input).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert!(port.requests().is_empty(), "no completion call for bad input");

    // The outcome keeps the actionable message instead of the generic one.
    let outcome = tools.hook_clarity_outcome(&input).await;
    match outcome {
        ToolOutcome::Failure { message, debug_id } => {
            assert_eq!(message, "Hook text is required.");
            assert!(debug_id.as_str().starts_with("HCA-"));
        }
        ToolOutcome::Success(_) => panic!("expected failure"),
    }
}

// ── message positioning ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_message_positioning_parses_text_sections() {
    let reply = "MAIN MESSAGE\nYou help quiet beginners paint.\n\nSUPPORTING IDEAS\n- Small daily exercises\n- No gear obsession\n\nREASSURANCE\nStarting late is still starting.";
    let port = FakeCompletionPort::replying(reply);
    let tools = ToolUseCases::new(port.clone());

    let input = MessagePositioningInput {
        what_you_do: "I teach watercolor basics".into(),
        who_you_help: "retired beginners".into(),
        problem_you_solve: Some("blank-page fear".into()),
        platform: PositioningPlatform::Website,
        tone: Tone::Premium,
    };

    let positioning = tools.message_positioning(&input).await.unwrap();
    assert_eq!(positioning.main_message, "You help quiet beginners paint.");
    assert_eq!(
        positioning.supporting_ideas,
        vec!["Small daily exercises", "No gear obsession"]
    );
    assert_eq!(positioning.reassurance, "Starting late is still starting.");

    let request = &port.requests()[0];
    assert!(!request.json_response, "text tool never asks for JSON mode");
    assert!(request.user.contains("Problem you solve: blank-page fear"));
    assert!(request.user.contains("Platform: Website"));
}

#[tokio::test]
async fn test_message_positioning_missing_section_is_contract_violation() {
    let reply = "MAIN MESSAGE\nYou help quiet beginners paint.\n\nSUPPORTING IDEAS\n- Small daily exercises\n- No gear obsession";
    let port = FakeCompletionPort::replying(reply);
    let tools = ToolUseCases::new(port);

    let input = MessagePositioningInput {
        what_you_do: "I teach watercolor basics".into(),
        who_you_help: String::new(),
        problem_you_solve: None,
        platform: PositioningPlatform::Instagram,
        tone: Tone::Calm,
    };

    let outcome = tools.message_positioning_outcome(&input).await;
    match outcome {
        ToolOutcome::Failure { message, debug_id } => {
            assert_eq!(message, TRY_AGAIN_MESSAGE);
            assert!(debug_id.as_str().starts_with("MPB-"));
        }
        ToolOutcome::Success(_) => panic!("expected failure"),
    }
}

// ── weekly reflection ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_weekly_reflection_end_to_end() {
    let response = json!({
        "week_summary": "A slow week that still moved forward.",
        "did_well": ["Posted twice.", "Kept captions short.", "Rested on purpose."],
        "adjustments": ["Batch film Monday.", "Pick topics tonight."],
        "next_week_focus": "Two posts, both simple.",
        "momentum_check": "Still moving.",
        "encouragement": "Rough weeks count double."
    })
    .to_string();

    let port = FakeCompletionPort::replying(&response);
    let tools = ToolUseCases::new(port.clone());

    let input = WeeklyReflectionInput {
        platform: ReflectionPlatform::TikTok,
        how_the_week_felt: WeekFeel::Okay,
        energy_level: EnergyLevel::Medium,
        posts_published: None,
        what_worked: String::new(),
        what_felt_hard: "Editing".into(),
        surprises: String::new(),
        confidence_level: Some("growing".into()),
    };

    let reflection = tools.weekly_reflection(&input).await.unwrap();
    assert_eq!(reflection.did_well.len(), 3);
    assert_eq!(reflection.adjustments.len(), 2);

    let request = &port.requests()[0];
    assert!(request.user.contains("How the week felt: okay"));
    assert!(request.user.contains("What felt hard: Editing"));
    assert!(request.user.contains("Confidence level: growing"));
    assert!(!request.user.contains("What worked:"));
    assert!(!request.user.contains("Posts published:"));
}

// ── outcome wire shape ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_success_outcome_wire_shape() {
    let port = FakeCompletionPort::replying(&content_direction_response());
    let tools = ToolUseCases::new(port);

    let outcome = tools
        .content_direction_outcome(&content_direction_input())
        .await;
    assert!(outcome.is_success());
    let value = outcome.to_json();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["posting_rhythm"]["posts"], 3);
    assert!(value.get("message").is_none());
}
