
use crate::{PatchResolver, PatchSchema, Patchable, SchemaRegistry, ValidatorRules};

use serde_json::Value;
use validator::Validate;

/// Update object with a required name and a numeric age.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub(crate) struct PersonUpdate {
    #[validate(required(message = "name is required"), length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150))]
    pub age: Option<u32>,

    #[validate(required, email)]
    pub email: Option<String>,
}

impl Patchable for PersonUpdate {
    fn patch_schema() -> PatchSchema<Self> {
        PatchSchema::new()
            .field("name", |t: &mut Self, v| t.name = v)
            .field("age", |t: &mut Self, v| t.age = v)
            .field("email", |t: &mut Self, v| t.email = v)
            .rules(ValidatorRules)
    }
}

pub(crate) fn person_resolver() -> PatchResolver {
    PatchResolver::new(SchemaRegistry::new().with_type::<PersonUpdate>())
}

pub(crate) fn payload(json: Value) -> Vec<u8> {
    serde_json::to_vec(&json).unwrap()
}
