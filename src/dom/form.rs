//! Search form field extraction

use web_sys::{FormData, HtmlFormElement};
use crate::errors::DomError;

/// Name of the text input holding the query
pub const QUERY_FIELD: &str = "searchQuery";

/// Raw value of the `searchQuery` field; empty when the field is missing
pub fn read_search_query(form: &HtmlFormElement) -> Result<String, DomError> {
    let data = FormData::new_with_form(form)?;
    Ok(data.get(QUERY_FIELD).as_string().unwrap_or_default())
}
