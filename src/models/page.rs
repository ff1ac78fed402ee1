use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated list endpoint.
///
/// `next_cursor` is an opaque continuation token: it is threaded verbatim
/// from one response into the next request and never inspected or built on
/// this side. An absent cursor means the stream is exhausted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}
