use crate::error::RewriteError;

/// Remove a single markdown fence wrapping the whole response.
///
/// Handles both ```` ```lang ```` and bare ```` ``` ```` openers. Text that is not
/// fenced from start to end is returned unchanged, byte for byte.
pub fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") || !trimmed.ends_with("```") || trimmed.len() < 6 {
        return response.to_string();
    }

    // The opening fence must sit on its own line, info string included.
    let Some(newline) = trimmed.find('\n') else {
        return response.to_string();
    };

    let inner = &trimmed[newline + 1..trimmed.len() - "```".len()];

    // Only one block: a closing fence in the middle means several blocks.
    if inner.lines().any(|line| line.trim_start().starts_with("```")) {
        return response.to_string();
    }

    inner.to_string()
}

/// Turn the raw model output into the content that will be written.
///
/// Output is taken verbatim unless `strip_fences` is set. Empty output is
/// rejected so the live file is never overwritten with nothing.
pub fn accept_response(raw: &str, strip_fences: bool) -> Result<String, RewriteError> {
    let content = if strip_fences {
        strip_code_fence(raw)
    } else {
        raw.to_string()
    };

    if content.is_empty() {
        return Err(RewriteError::EmptyResponse);
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfenced_code_passes_through() {
        let code = "function add(a, b) {\n  return a + b;\n}\n";
        assert_eq!(strip_code_fence(code), code);
    }

    #[test]
    fn test_code_wrapped_in_language_fence() {
        let response = "```javascript\nconst a = 1;\nconst b = 2;\n```";
        assert_eq!(strip_code_fence(response), "const a = 1;\nconst b = 2;\n");
    }

    #[test]
    fn test_code_wrapped_in_plain_fence() {
        let response = "```\nlet x = 1;\n```\n";
        assert_eq!(strip_code_fence(response), "let x = 1;\n");
    }

    #[test]
    fn test_multiple_blocks_are_left_alone() {
        let response = "```js\na();\n```\nand\n```js\nb();\n```";
        assert_eq!(strip_code_fence(response), response);
    }

    #[test]
    fn test_single_line_fence_is_left_alone() {
        assert_eq!(strip_code_fence("```x```"), "```x```");
    }

    #[test]
    fn test_accept_is_verbatim_by_default() {
        let raw = "```js\n// ok\n```";
        assert_eq!(accept_response(raw, false).unwrap(), raw);
        assert_eq!(accept_response("// ok", false).unwrap(), "// ok");
    }

    #[test]
    fn test_accept_strips_when_asked() {
        let raw = "```js\n// ok\n```";
        assert_eq!(accept_response(raw, true).unwrap(), "// ok\n");
    }

    #[test]
    fn test_empty_response_is_rejected() {
        assert_eq!(accept_response("", false), Err(RewriteError::EmptyResponse));
        assert_eq!(accept_response("", true), Err(RewriteError::EmptyResponse));
    }

    #[test]
    fn test_whitespace_response_is_not_empty() {
        assert_eq!(accept_response("  \n\t", false).unwrap(), "  \n\t");
    }

    #[test]
    fn test_empty_fence_is_rejected_after_stripping() {
        assert_eq!(
            accept_response("```\n```", true),
            Err(RewriteError::EmptyResponse)
        );
    }
}
