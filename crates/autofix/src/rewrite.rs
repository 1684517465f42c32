use crate::backend::TextGenerationBackend;
use crate::prelude::f;
use crate::report;
use autofix_core::rewrite::{
    accept_response, backup_path, build_prompt, PromptStyle, RewriteOutcome, RewriteRequest,
};
use autofix_core::RewriteError;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct RewriteOptions {
    pub style: PromptStyle,
    pub strip_fences: bool,
    pub dry_run: bool,
}

/// Fail unless `path` is an existing regular file.
pub fn ensure_target(path: &Path) -> Result<(), RewriteError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(RewriteError::FileNotFound(path.to_path_buf()))
    }
}

/// Rewrite one file through `backend`.
///
/// The original content goes to `<path>.bak` right before the file itself is
/// overwritten. Nothing is written if the remote call fails or returns no text.
pub async fn rewrite_file<B: TextGenerationBackend>(
    backend: &B,
    path: &Path,
    purpose: Option<String>,
    options: &RewriteOptions,
) -> Result<RewriteOutcome, RewriteError> {
    ensure_target(path)?;

    let original = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RewriteError::io(path, e))?;

    let request = RewriteRequest::new(path.display().to_string(), purpose, original);
    let prompt = build_prompt(&request, options.style);

    log::debug!("Purpose: {}", request.purpose);
    log::debug!(
        "Prompt length: {} chars",
        prompt.system.as_ref().map_or(0, String::len) + prompt.user.len()
    );

    report::info(f!(
        "Sending {} to {} for auto-fix...",
        path.display(),
        backend.label()
    ));

    let raw = backend.generate(&prompt).await?;
    let rewritten = accept_response(&raw, options.strip_fences)?;

    log::debug!(
        "Received {} bytes for {} bytes of original code",
        rewritten.len(),
        request.original_content.len()
    );

    if options.dry_run {
        report::rewritten(&rewritten);
        return Ok(RewriteOutcome {
            file_path: path.to_path_buf(),
            backup_path: None,
            original_bytes: request.original_content.len(),
            rewritten_bytes: rewritten.len(),
        });
    }

    let backup = backup_path(path);
    tokio::fs::write(&backup, &request.original_content)
        .await
        .map_err(|e| RewriteError::io(&backup, e))?;
    report::info(f!("Backup saved: {}", backup.display()));

    tokio::fs::write(path, &rewritten)
        .await
        .map_err(|e| RewriteError::io(path, e))?;
    report::info(f!("File updated: {}", path.display()));
    report::info("Check 'git diff' to review changes before commit.");

    Ok(RewriteOutcome {
        file_path: path.to_path_buf(),
        backup_path: Some(backup),
        original_bytes: request.original_content.len(),
        rewritten_bytes: rewritten.len(),
    })
}
