use super::types::{Prompt, PromptStyle, RewriteRequest};

/// Fixed instructions sent with every rewrite.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are an assistant that safely refactors source code.

Rules you must always follow:
1. Do not break existing behavior: keep function names, route URLs, data structures, and return types.
2. Handle code that is prone to runtime errors (null, undefined, wrong types) defensively.
3. Output only the complete modified code.
   - No explanations, no summaries, no markdown, no ``` code blocks, no text before or after the code.
4. Always output the entire file again (no partial edits, no diffs).";

/// Build the prompt for a rewrite request.
///
/// The user message carries the purpose, the file path, and the full original
/// code between fixed start/end markers. With [`PromptStyle::Inline`] the
/// instructions move to the top of the user message and there is no system part.
pub fn build_prompt(request: &RewriteRequest, style: PromptStyle) -> Prompt {
    let body = format!(
        "Purpose: {purpose}\n\
         \n\
         Below is the full code of the file {path}.\n\
         Improve it for the purpose above while following the rules.\n\
         \n\
         Important:\n\
         - Do not write explanations. Your answer must contain only the complete modified code.\n\
         - Never wrap the answer in ``` markdown code blocks.\n\
         \n\
         === ORIGINAL CODE START ===\n\
         {code}\n\
         === ORIGINAL CODE END ===\n",
        purpose = request.purpose,
        path = request.file_path,
        code = request.original_content,
    );

    match style {
        PromptStyle::Split => Prompt {
            system: Some(SYSTEM_INSTRUCTIONS.to_string()),
            user: body,
        },
        PromptStyle::Inline => Prompt {
            system: None,
            user: format!("{}\n\n{}", SYSTEM_INSTRUCTIONS, body),
        },
    }
}
