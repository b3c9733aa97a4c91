use serde::{Deserialize, Serialize};

/// Author embedded in a blog or comment.
///
/// Every embed is an independent copy; nothing links two embeds of the same
/// person together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
}

impl Author {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}
