use serde::{Deserialize, Serialize};

/// One attached photo of a site.
/// `path` is the blob-store relative path (`<uid>/<site-id>/<file-name>`),
/// `url` the resolved public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub name: String,
    pub url: String,
    pub path: String,
}
