use serde::{Deserialize, Serialize};

/// Pagination pointers returned alongside a page of results.
///
/// `next` is an opaque absolute URL; its absence marks the last page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Paging {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// One page of a paginated listing endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Missing entirely on single-page responses.
    #[serde(default)]
    pub paging: Option<Paging>,
    /// Display name of the listed collection, when the endpoint provides one.
    pub name: Option<String>,
}

impl<T> Page<T> {
    /// The `next` pointer, if this is not the last page.
    pub fn next_url(&self) -> Option<&str> {
        self.paging.as_ref().and_then(|p| p.next.as_deref())
    }
}
