use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct InsertDemoDto {
    #[serde(default, deserialize_with = "crate::model::api::deserialize_optional_number")]
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDemoNameDto {
    pub old_name: Option<String>,
    pub new_name: Option<String>,
}

/// `[id, name]`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemoRowDto(pub i32, pub Option<String>);
