//! Context and prompt rendering.
//!
//! Retrieved documents are rendered into a bounded textual context, then
//! interpolated with the question into the fixed instruction template.

use faqbot_core::{AppError, AppResult};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Instruction template sent to the chat model.
///
/// The model is constrained to answer only from the supplied context and
/// must output the literal `NONE` when the context does not contain the
/// answer (see [`crate::refine`]).
pub const PROMPT_TEMPLATE: &str = "
You're a course teaching assistant.
Answer the QUESTION based on the CONTEXT from the FAQ database.
Use only the facts from the CONTEXT when answering the question.
If the CONTEXT doesn't contain the answer, output NONE.

Question: {{question}}

CONTEXT:
{{context}}
";

/// Borrowed view of one retrieved document, in context order.
#[derive(Debug, Clone, Copy)]
pub struct ContextDocument<'a> {
    pub section: &'a str,
    pub question: &'a str,
    pub text: &'a str,
}

/// Render retrieved documents into the context string.
///
/// Each document contributes the block
/// `"section: {section}\nquestion: {question}\nanswer: {text}\n\n"`,
/// concatenated in retrieval order. An empty slice yields an empty string;
/// the refiner handles that by echoing an empty context.
pub fn build_context(results: &[ContextDocument<'_>]) -> String {
    let mut context = String::new();
    for doc in results {
        context.push_str(&format!(
            "section: {}\nquestion: {}\nanswer: {}\n\n",
            doc.section, doc.question, doc.text
        ));
    }
    context
}

/// Substitute question and context into the instruction template.
///
/// Pure function: renders the template and trims leading/trailing
/// whitespace. No other mutation of either input.
pub fn build_prompt(question: &str, context: &str) -> AppResult<String> {
    tracing::debug!("Building prompt ({} bytes of context)", context.len());

    let mut variables = HashMap::new();
    variables.insert("question", question);
    variables.insert("context", context);

    let rendered = render_template(PROMPT_TEMPLATE, &variables)?;
    Ok(rendered.trim().to_string())
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<&str, &str>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Plain text output, no HTML escaping
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Config(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", &variables)
        .map_err(|e| AppError::Config(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_docs() -> Vec<ContextDocument<'static>> {
        vec![
            ContextDocument {
                section: "General",
                question: "Can I still join after it started?",
                text: "Yes, you can still submit homework.",
            },
            ContextDocument {
                section: "Setup",
                question: "How do I install the tools?",
                text: "Follow the setup guide.",
            },
        ]
    }

    #[test]
    fn test_build_context_block_layout() {
        let docs = sample_docs();
        let context = build_context(&docs);

        assert_eq!(
            context,
            "section: General\n\
             question: Can I still join after it started?\n\
             answer: Yes, you can still submit homework.\n\
             \n\
             section: Setup\n\
             question: How do I install the tools?\n\
             answer: Follow the setup guide.\n\
             \n"
        );
    }

    #[test]
    fn test_build_context_one_triple_per_document() {
        let docs = sample_docs();
        let context = build_context(&docs);

        assert_eq!(context.matches("section: ").count(), docs.len());
        assert_eq!(context.matches("question: ").count(), docs.len());
        assert_eq!(context.matches("answer: ").count(), docs.len());
        // Documents appear in retrieval order
        assert!(context.find("General").unwrap() < context.find("Setup").unwrap());
    }

    #[test]
    fn test_build_context_empty() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn test_build_prompt_exact_rendering() {
        let prompt = build_prompt("Can I still join?", "section: General\n").unwrap();

        assert_eq!(
            prompt,
            "You're a course teaching assistant.\n\
             Answer the QUESTION based on the CONTEXT from the FAQ database.\n\
             Use only the facts from the CONTEXT when answering the question.\n\
             If the CONTEXT doesn't contain the answer, output NONE.\n\
             \n\
             Question: Can I still join?\n\
             \n\
             CONTEXT:\n\
             section: General"
        );
    }

    #[test]
    fn test_build_prompt_empty_context() {
        let prompt = build_prompt("Can I still join?", "").unwrap();

        // Still substitutes correctly, trimmed of the trailing blank context
        assert!(prompt.starts_with("You're a course teaching assistant."));
        assert!(prompt.ends_with("CONTEXT:"));
        assert!(prompt.contains("Question: Can I still join?"));
    }

    #[test]
    fn test_build_prompt_is_trimmed() {
        let prompt = build_prompt("q", "ctx").unwrap();
        assert_eq!(prompt, prompt.trim());
    }
}
