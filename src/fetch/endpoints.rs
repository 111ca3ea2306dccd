//! Endpoint URL construction.

/// The list URL and the detail URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub list_url: String,
    /// Contains [`Endpoints::ID_PLACEHOLDER`], replaced by the movie id.
    pub detail_url: String,
}

impl Endpoints {
    pub const ID_PLACEHOLDER: &'static str = "{id}";

    pub fn new(list_url: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            list_url: list_url.into(),
            detail_url: detail_url.into(),
        }
    }

    /// The list URL, narrowed by `query_term` when searching.
    pub fn list_for(&self, term: Option<&str>) -> String {
        match term {
            Some(term) => append_query(&self.list_url, "query_term", term),
            None => self.list_url.clone(),
        }
    }

    pub fn detail_for(&self, id: u64) -> String {
        detail_url(&self.detail_url, id)
    }
}

/// Substitute `id` into a detail URL template.
pub fn detail_url(template: &str, id: u64) -> String {
    template.replace(Endpoints::ID_PLACEHOLDER, &id.to_string())
}

fn append_query(url: &str, key: &str, value: &str) -> String {
    let separator = if !url.contains('?') {
        "?"
    } else if url.ends_with('?') || url.ends_with('&') {
        ""
    } else {
        "&"
    };
    format!("{}{}{}={}", url, separator, key, urlencoding::encode(value))
}
