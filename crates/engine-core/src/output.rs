//! Structured outputs produced by the two model roles.

use serde::{Deserialize, Serialize};

/// The Interviewer's self-reported next step for the current exchange.
///
/// Drives the orchestration branch for the current exchange only; it is
/// never persisted as session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Keep gathering information.
    #[serde(rename = "CONTINUE")]
    Continue,
    /// Pause the interview and run pattern analysis.
    #[serde(rename = "ANALYZE")]
    Analyze,
}

impl Intent {
    /// Wire literal for this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::Analyze => "ANALYZE",
        }
    }
}

/// Structured output of one Interviewer invocation.
///
/// The shape is strict: exactly these two fields, with `intent` limited to
/// the `CONTINUE`/`ANALYZE` literals. Anything else fails at the parse
/// boundary as [`EngineError::Malformed`](crate::EngineError::Malformed)
/// rather than being coerced into a partially populated value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterviewerReply {
    /// Text to surface to the user.
    pub assistant_message: String,
    /// Self-reported orchestration intent.
    pub intent: Intent,
}

/// Pattern analysis extracted by the Reasoner.
///
/// Every category defaults to empty. An empty category is itself meaningful
/// (it signals an information gap) and is distinct from "not yet computed",
/// which is represented by the absence of the whole value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReasonerFindings {
    /// Predominant feelings and mood states.
    #[serde(default)]
    pub emotional_themes: Vec<String>,
    /// Cognitive styles, thought content, and processes.
    #[serde(default)]
    pub thinking_patterns: Vec<String>,
    /// Actions, habits, and behavioral tendencies.
    #[serde(default)]
    pub behavioral_patterns: Vec<String>,
    /// Relationship patterns and social functioning.
    #[serde(default)]
    pub interpersonal_dynamics: Vec<String>,
    /// Identified triggers and life challenges.
    #[serde(default)]
    pub stressors: Vec<String>,
    /// Gaps in information needing further exploration.
    #[serde(default)]
    pub unclear_areas: Vec<String>,
}

impl ReasonerFindings {
    /// Check whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.emotional_themes.is_empty()
            && self.thinking_patterns.is_empty()
            && self.behavioral_patterns.is_empty()
            && self.interpersonal_dynamics.is_empty()
            && self.stressors.is_empty()
            && self.unclear_areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interviewer_reply() {
        let reply: InterviewerReply = serde_json::from_str(
            r#"{"assistant_message": "How long has this been going on?", "intent": "CONTINUE"}"#,
        )
        .unwrap();

        assert_eq!(reply.assistant_message, "How long has this been going on?");
        assert_eq!(reply.intent, Intent::Continue);
    }

    #[test]
    fn test_parse_rejects_invalid_intent_literal() {
        let result: Result<InterviewerReply, _> = serde_json::from_str(
            r#"{"assistant_message": "hm", "intent": "PONDER"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let result: Result<InterviewerReply, _> =
            serde_json::from_str(r#"{"assistant_message": "hm"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_extra_field() {
        let result: Result<InterviewerReply, _> = serde_json::from_str(
            r#"{"assistant_message": "hm", "intent": "ANALYZE", "confidence": 0.9}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_findings_categories_default_to_empty() {
        let findings: ReasonerFindings =
            serde_json::from_str(r#"{"stressors": ["Recent job loss"]}"#).unwrap();

        assert_eq!(findings.stressors, vec!["Recent job loss".to_string()]);
        assert!(findings.emotional_themes.is_empty());
        assert!(findings.unclear_areas.is_empty());
        assert!(!findings.is_empty());
    }

    #[test]
    fn test_findings_is_empty() {
        assert!(ReasonerFindings::default().is_empty());
    }

    #[test]
    fn test_intent_serializes_as_literal() {
        assert_eq!(serde_json::to_string(&Intent::Continue).unwrap(), "\"CONTINUE\"");
        assert_eq!(serde_json::to_string(&Intent::Analyze).unwrap(), "\"ANALYZE\"");
    }
}
