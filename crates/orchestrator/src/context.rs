//! Analysis context assembly.
//!
//! Pure text-assembly helpers with no side effects: the bounded history
//! tail that feeds retrieval and the Reasoner, and the rendering of
//! Reasoner findings back into a resumption prompt for the Interviewer.

use engine_core::{ReasonerFindings, Turn};

/// Number of most-recent turns fed to retrieval and the Reasoner.
///
/// The bounded tail, not the full history, is what analysis sees - trading
/// recall of older context for bounded cost.
pub const ANALYSIS_TAIL_TURNS: usize = 10;

/// The most recent [`ANALYSIS_TAIL_TURNS`] turns, oldest first.
pub fn analysis_tail(history: &[Turn]) -> &[Turn] {
    let start = history.len().saturating_sub(ANALYSIS_TAIL_TURNS);
    &history[start..]
}

/// Retrieval query text for a history tail: turn contents joined by
/// newlines, without role labels.
pub fn retrieval_query(tail: &[Turn]) -> String {
    tail.iter()
        .map(|turn| turn.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the Reasoner prompt from the history tail and retrieved
/// reference text, under clearly delimited headings.
pub fn build_reasoner_prompt(tail: &[Turn], reference: &str) -> String {
    let transcript = tail
        .iter()
        .map(|turn| format!("{}: {}", turn.role.as_str().to_uppercase(), turn.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the following conversation and provide pattern analysis.\n\
         \n\
         [Recent Conversation History]\n\
         {transcript}\n\
         \n\
         [Retrieved Clinical Context from Knowledge Base]\n\
         {reference}\n\
         \n\
         Based on the conversation and clinical context above, identify patterns across all six domains."
    )
}

/// Render one findings category as a bulleted block, or the explicit
/// placeholder when the category is empty.
fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "None identified yet".to_string();
    }
    format!("\n  • {}", items.join("\n  • "))
}

/// Build the resumption prompt handed back to the Interviewer after an
/// analysis cycle.
///
/// All six category headings always appear; empty categories render the
/// "None identified yet" placeholder rather than being omitted, so the
/// Interviewer can reason about gaps.
pub fn build_resumption_prompt(findings: &ReasonerFindings) -> String {
    format!(
        "[Internal Clinical Analysis - For Treatment Planning]\n\
         \n\
         Emotional Themes:\n\
         {}\n\
         \n\
         Thinking Patterns:\n\
         {}\n\
         \n\
         Behavioral Patterns:\n\
         {}\n\
         \n\
         Interpersonal Dynamics:\n\
         {}\n\
         \n\
         Identified Stressors:\n\
         {}\n\
         \n\
         Areas Requiring Further Exploration:\n\
         {}\n\
         \n\
         Based on this analysis, provide your next therapeutic response to the patient.",
        format_list(&findings.emotional_themes),
        format_list(&findings.thinking_patterns),
        format_list(&findings.behavioral_patterns),
        format_list(&findings.interpersonal_dynamics),
        format_list(&findings.stressors),
        format_list(&findings.unclear_areas),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADINGS: [&str; 6] = [
        "Emotional Themes:",
        "Thinking Patterns:",
        "Behavioral Patterns:",
        "Interpersonal Dynamics:",
        "Identified Stressors:",
        "Areas Requiring Further Exploration:",
    ];

    fn turns(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Turn::user(format!("user {}", i))
                } else {
                    Turn::assistant(format!("assistant {}", i))
                }
            })
            .collect()
    }

    #[test]
    fn test_tail_bounds_to_ten_turns() {
        let history = turns(25);
        let tail = analysis_tail(&history);

        assert_eq!(tail.len(), ANALYSIS_TAIL_TURNS);
        assert_eq!(tail[0].content, "user 15"); // original chronological order
        assert_eq!(tail[9].content, "user 24");
    }

    #[test]
    fn test_tail_of_short_history_is_whole_history() {
        let history = turns(3);
        assert_eq!(analysis_tail(&history).len(), 3);
    }

    #[test]
    fn test_retrieval_query_has_no_role_labels() {
        let history = turns(2);
        let query = retrieval_query(&history);

        assert_eq!(query, "user 0\nassistant 1");
        assert!(!query.contains("USER:"));
    }

    #[test]
    fn test_reasoner_prompt_labels_and_headings() {
        let history = turns(2);
        let prompt = build_reasoner_prompt(&history, "reference excerpt");

        assert!(prompt.contains("[Recent Conversation History]"));
        assert!(prompt.contains("[Retrieved Clinical Context from Knowledge Base]"));
        assert!(prompt.contains("USER: user 0"));
        assert!(prompt.contains("ASSISTANT: assistant 1"));
        assert!(prompt.contains("reference excerpt"));
    }

    #[test]
    fn test_resumption_prompt_all_empty_renders_six_placeholders() {
        let prompt = build_resumption_prompt(&ReasonerFindings::default());

        for heading in HEADINGS {
            assert!(prompt.contains(heading), "missing heading: {}", heading);
        }
        assert_eq!(prompt.matches("None identified yet").count(), 6);
    }

    #[test]
    fn test_resumption_prompt_renders_bullets() {
        let findings = ReasonerFindings {
            stressors: vec![
                "Recent job loss".to_string(),
                "Ongoing financial strain".to_string(),
            ],
            ..Default::default()
        };
        let prompt = build_resumption_prompt(&findings);

        assert!(prompt.contains("  • Recent job loss"));
        assert!(prompt.contains("  • Ongoing financial strain"));
        // The other five categories still render, as placeholders.
        assert_eq!(prompt.matches("None identified yet").count(), 5);
        for heading in HEADINGS {
            assert!(prompt.contains(heading));
        }
    }
}
