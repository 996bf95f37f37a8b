use std::sync::Arc;

use crate::{
    app::{
        outcome::{outcome, ToolOutcome},
        ports::{CompletionPort, CompletionRequest},
    },
    domain::{
        contract::{
            content_direction, engagement_signal, hook_clarity, message_positioning,
            weekly_reflection,
        },
        errors::Result,
        models::{
            ContentDirectionInput, ContentDirectionPlan, EngagementSignalInput,
            EngagementSignalReport, HookClarityInput, HookClarityReport, MessagePositioning,
            MessagePositioningInput, WeeklyReflection, WeeklyReflectionInput,
        },
    },
};

/// One method per tool: validate input, render the prompt pair, call the
/// completion port, validate the response. Stateless apart from the
/// injected port; concurrent invocations share nothing mutable.
pub struct ToolUseCases {
    completion: Arc<dyn CompletionPort>,
}

impl ToolUseCases {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }

    async fn complete(
        &self,
        system: &str,
        user: String,
        temperature: f32,
        json_response: bool,
    ) -> Result<String> {
        self.completion
            .complete(CompletionRequest {
                system: system.to_string(),
                user,
                temperature,
                json_response,
            })
            .await
    }

    // ── typed runs ────────────────────────────────────────────────────────────

    pub async fn content_direction(
        &self,
        input: &ContentDirectionInput,
    ) -> Result<ContentDirectionPlan> {
        let raw = self
            .complete(
                content_direction::system_prompt(),
                content_direction::user_prompt(input),
                content_direction::TEMPERATURE,
                true,
            )
            .await?;
        content_direction::validate(&raw)
    }

    pub async fn engagement_signal(
        &self,
        input: &EngagementSignalInput,
    ) -> Result<EngagementSignalReport> {
        let raw = self
            .complete(
                engagement_signal::system_prompt(),
                engagement_signal::user_prompt(input),
                engagement_signal::TEMPERATURE,
                true,
            )
            .await?;
        engagement_signal::validate(&raw)
    }

    pub async fn hook_clarity(&self, input: &HookClarityInput) -> Result<HookClarityReport> {
        input.validate()?;
        let raw = self
            .complete(
                hook_clarity::system_prompt(),
                hook_clarity::user_prompt(input),
                hook_clarity::TEMPERATURE,
                true,
            )
            .await?;
        hook_clarity::validate(&raw)
    }

    /// The one tool that replies in labeled plain text instead of JSON.
    pub async fn message_positioning(
        &self,
        input: &MessagePositioningInput,
    ) -> Result<MessagePositioning> {
        input.validate()?;
        let raw = self
            .complete(
                message_positioning::system_prompt(),
                message_positioning::user_prompt(input),
                message_positioning::TEMPERATURE,
                false,
            )
            .await?;
        message_positioning::validate(&raw)
    }

    pub async fn weekly_reflection(
        &self,
        input: &WeeklyReflectionInput,
    ) -> Result<WeeklyReflection> {
        let raw = self
            .complete(
                weekly_reflection::system_prompt(),
                weekly_reflection::user_prompt(input),
                weekly_reflection::TEMPERATURE,
                true,
            )
            .await?;
        weekly_reflection::validate(&raw)
    }

    // ── caller-facing outcomes ────────────────────────────────────────────────
    //
    // Same runs, mapped to the stable `{ok, data | message, debugId}`
    // object the route layer returns verbatim.

    pub async fn content_direction_outcome(
        &self,
        input: &ContentDirectionInput,
    ) -> ToolOutcome<ContentDirectionPlan> {
        outcome(
            "content_direction_planner",
            content_direction::DEBUG_PREFIX,
            self.content_direction(input).await,
        )
    }

    pub async fn engagement_signal_outcome(
        &self,
        input: &EngagementSignalInput,
    ) -> ToolOutcome<EngagementSignalReport> {
        outcome(
            "engagement_signal_interpreter",
            engagement_signal::DEBUG_PREFIX,
            self.engagement_signal(input).await,
        )
    }

    pub async fn hook_clarity_outcome(
        &self,
        input: &HookClarityInput,
    ) -> ToolOutcome<HookClarityReport> {
        outcome(
            "hook_clarity_analyzer",
            hook_clarity::DEBUG_PREFIX,
            self.hook_clarity(input).await,
        )
    }

    pub async fn message_positioning_outcome(
        &self,
        input: &MessagePositioningInput,
    ) -> ToolOutcome<MessagePositioning> {
        outcome(
            "message_positioning_builder",
            message_positioning::DEBUG_PREFIX,
            self.message_positioning(input).await,
        )
    }

    pub async fn weekly_reflection_outcome(
        &self,
        input: &WeeklyReflectionInput,
    ) -> ToolOutcome<WeeklyReflection> {
        outcome(
            "weekly_content_reflection",
            weekly_reflection::DEBUG_PREFIX,
            self.weekly_reflection(input).await,
        )
    }
}
