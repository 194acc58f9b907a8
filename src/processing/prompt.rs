use crate::types::document::SummaryStyle;

/// System instruction used for every summarization call.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are an assistant specialized in document summarization.";

/// System instruction used for the language-detection call.
pub const DETECTION_SYSTEM_PROMPT: &str = "You are a language detection expert. \
    Reply only with the ISO 639-1 language code (fr, en, es, etc.).";

/// Number of leading characters of the document sampled for detection.
const DETECTION_SAMPLE_CHARS: usize = 500;

/// Map an ISO 639-1 code to the language name used inside prompts.
///
/// Unknown codes pass through unchanged so the model still receives an
/// explicit target.
pub fn language_name(code: &str) -> &str {
    match code {
        "fr" => "French",
        "en" => "English",
        "es" => "Spanish",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "nl" => "Dutch",
        "ru" => "Russian",
        "zh" => "Chinese",
        "ja" => "Japanese",
        other => other,
    }
}

/// Render the prompt for one summarization request.
///
/// Each style has a fixed instruction template parameterized by the target
/// language and the length budget (`max_length` is a word budget, or a
/// bullet count for [`SummaryStyle::Bullets`]). When `translate` is set,
/// an explicit translation instruction is prefixed. The extracted text is
/// appended verbatim as the final bytes of the prompt; no truncation is
/// applied, so documents that exceed the model's input budget fail at the
/// API layer.
pub fn build_prompt(
    text: &str,
    style: SummaryStyle,
    target_language: &str,
    max_length: usize,
    translate: bool,
) -> String {
    let lang_instruction = if translate {
        format!("Translate into {}. ", target_language)
    } else {
        String::new()
    };

    let instruction = match style {
        SummaryStyle::Vulgarized => format!(
            "{}Summarize the following text in {} using simple, \
             accessible language for a general audience. \
             Approximate length: {} words.",
            lang_instruction, target_language, max_length
        ),
        SummaryStyle::Technical => format!(
            "{}Write a technical summary of the following text in {}, \
             focusing on the important technical and methodological aspects. \
             Approximate length: {} words.",
            lang_instruction, target_language, max_length
        ),
        SummaryStyle::Bullets => format!(
            "{}Summarize the key points of the following text in {} \
             as a bulleted list. Maximum {} key points.",
            lang_instruction, target_language, max_length
        ),
        SummaryStyle::Executive => format!(
            "{}Write an executive summary of the following text in {}, \
             focused on the strategic points and main conclusions. \
             Approximate length: {} words.",
            lang_instruction, target_language, max_length
        ),
    };

    format!("{}\n\nText:\n{}", instruction, text)
}

/// Render the deterministic classification prompt for language detection.
///
/// Only the first 500 characters of the text are sampled.
pub fn build_language_detection_prompt(text: &str) -> String {
    let sample: String = text.chars().take(DETECTION_SAMPLE_CHARS).collect();
    format!(
        "What language is this text written in? Reply only with the language code.\n\nText: {}",
        sample
    )
}
