//! Book create/update payload.

use validator::Validate;

use super::rules::normalize;

/// Validated fields accepted by book create and update
///
/// `desc` distinguishes an absent key (`None`) from an explicit null
/// (`Some(None)`), so updates only touch the description when asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BookInput {
    #[validate(required, length(max = 255, code = "max"))]
    pub name: Option<String>,

    pub desc: Option<Option<String>>,
}

impl BookInput {
    pub fn new(name: Option<String>, desc: Option<Option<String>>) -> Self {
        Self {
            name: normalize(name),
            desc: desc.map(normalize),
        }
    }
}
