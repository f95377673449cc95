use libris_core::domain::value_objects::BookInput;
use serde::{Deserialize, Deserializer, Serialize};

/// Create/update body for books
///
/// `desc` keeps three states apart: key absent (`None`), explicit `null`
/// (`Some(None)`) and a value (`Some(Some(_))`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookRequest {
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub desc: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<BookRequest> for BookInput {
    fn from(request: BookRequest) -> Self {
        BookInput::new(request.name, request.desc)
    }
}
