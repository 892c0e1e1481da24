//! Splitting raw text into tags.
use crate::constants::TAG_SEPARATORS;
use crate::error::{Error, Result};
use serde_json::Value as JsValue;

/// Splits raw editor text into tokens.
/// Splits on whitespace and on `,`, `;` and their full-width forms.
///
/// # Returns
/// Every token, including empty ones between adjacent separators.
pub fn split_raw(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c.is_whitespace() || TAG_SEPARATORS.contains(&c))
        .collect()
}

/// Trims each entry and drops the ones left empty, preserving order.
pub fn normalize_tags<I, S>(content: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    content
        .into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                None
            } else {
                Some(tag.to_string())
            }
        })
        .collect()
}

/// Extracts tags from a host supplied value.
///
/// # Returns
/// The normalized string elements of the array.
/// Elements that are not strings are skipped.
///
/// # Errors
/// + [`Error::Value`] if the value is not an array.
pub fn tags_from_value(value: &JsValue) -> Result<Vec<String>> {
    let JsValue::Array(content) = value else {
        return Err(Error::value(format!("expected an array of tags, found `{value}`")));
    };

    Ok(normalize_tags(content.iter().filter_map(|tag| tag.as_str())))
}

#[cfg(test)]
#[path = "./tokenize_test.rs"]
mod tokenize_test;
