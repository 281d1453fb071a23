//! Prompt construction for the generation provider. Two generation
//! templates (context-driven and foundational) plus a single-term
//! translation template; all of them demand short keyword-style output,
//! one term per line, so parsing stays trivial.

use lexia_core::constants::MAX_TERMS_PER_GENERATION;
use lexia_core::Language;

/// Generation prompt; the context-driven variant is used when topic context
/// snippets are available.
pub fn generation_prompt(
    topic_description: &str,
    language: Language,
    context: Option<&str>,
) -> String {
    match context {
        Some(context) => format!(
            "You are a keyword strategist for a public health surveillance project.\n\
             The current public health focus area is: {topic_description}\n\n\
             Analyze the following snippet(s) of recent online content:\n\
             --- START CONTEXT ---\n\
             {context}\n\
             --- END CONTEXT ---\n\n\
             Based specifically on this context, generate a list of up to \
             {max_terms} distinct keywords or keyphrases in {name} ({code}).\n\
             Each keyword must be 1 to 4 words long, directly reflect the \
             concepts, symptoms, or concerns in the context, and be practical \
             as a search query.\n\n\
             List ONLY the keywords, each on a new line. No explanations, \
             numbers, or bullet points.\n\n\
             Keywords in {name} ({code}):\n",
            max_terms = MAX_TERMS_PER_GENERATION,
            name = language.display_name(),
            code = language.code(),
        ),
        None => format!(
            "You are a keyword strategist for a public health surveillance project.\n\
             The current public health focus area is: {topic_description}\n\n\
             Generate a list of up to {max_terms} distinct, foundational \
             keywords or keyphrases in {name} ({code}).\n\
             Think about terms likely to appear in news articles, social \
             media posts, and search queries about this topic.\n\
             Each keyword must be 1 to 4 words long, directly related to \
             '{topic_description}', and practical as a search query. Mix \
             formal and informal usage; avoid overly generic terms.\n\n\
             List ONLY the keywords, each on a new line. No explanations, \
             numbers, or bullet points.\n\n\
             Keywords in {name} ({code}):\n",
            max_terms = MAX_TERMS_PER_GENERATION,
            name = language.display_name(),
            code = language.code(),
        ),
    }
}

/// Translation prompt for a single term.
pub fn translation_prompt(term: &str, source: Language, target: Language) -> String {
    format!(
        "Translate the following health-related term accurately from \
         {source_name} to {target_name}.\n\
         Provide ONLY the most common and concise translation suitable as a \
         search keyword (typically 1-4 words). Do not add explanations or \
         multiple alternatives.\n\n\
         Term: \"{term}\"\n\n\
         Translation in {target_name}:\n",
        source_name = source.display_name(),
        target_name = target.display_name(),
    )
}
