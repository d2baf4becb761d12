//! Document Root
//!
//! Reflects the presentation state onto `<html>`: the `dark` class for the
//! theme, plus the `lang` attribute and page title for the language.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::i18n::Language;
use crate::theme::Theme;

/// Class toggled on `<html>` while the dark theme is active
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document root element is not available")]
    NoRootElement,
    #[error("failed to update document root: {0}")]
    Dom(String),
}

impl From<JsValue> for DocumentError {
    fn from(err: JsValue) -> Self {
        DocumentError::Dom(format!("{:?}", err))
    }
}

fn document() -> Result<Document, DocumentError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DocumentError::NoRootElement)
}

fn root_element() -> Result<Element, DocumentError> {
    document()?
        .document_element()
        .ok_or(DocumentError::NoRootElement)
}

/// Apply `theme` to the document's root styling scope
pub fn apply_theme(theme: Theme) -> Result<(), DocumentError> {
    root_element()?
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())?;
    Ok(())
}

/// Set `<html lang>` and the page title for `language`
pub fn apply_language(language: Language) -> Result<(), DocumentError> {
    root_element()?.set_attribute("lang", language.code())?;
    document()?.set_title(language.labels().title);
    Ok(())
}
