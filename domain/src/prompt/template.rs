//! Prompt templates

/// Templates for the two kinds of prompts sent to the model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction appended when an explanation is requested
    pub fn explanation_suffix() -> &'static str {
        "Begin your response with 'yes' or 'no', and then provide an explanation."
    }

    /// Instruction appended when only a bare answer is wanted
    pub fn terse_suffix() -> &'static str {
        "Do not reply with anything other than 'yes' or 'no'."
    }

    /// Prompt for one sample query
    pub fn binary_question(question: &str, request_explanation: bool) -> String {
        let suffix = if request_explanation {
            Self::explanation_suffix()
        } else {
            Self::terse_suffix()
        };
        format!("{} {}", question, suffix)
    }

    /// Prompt asking for a synthesis of the accepted explanations
    pub fn summary_prompt(explanations: &[String]) -> String {
        format!(
            "Please provide a concise summary of the main points from the following explanations:\n\n{}",
            explanations.join("\n")
        )
    }
}
