use crate::errors::AppError;

pub fn copy(text: &str) -> Result<(), AppError> {
    let mut context = copypasta_ext::try_context()
        .ok_or_else(|| AppError::Clipboard(String::from("no clipboard provider available")))?;

    context
        .set_contents(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    log::info!("password copied to clipboard");
    Ok(())
}
