use crate::{
    model::demo::{DemoRowDto, InsertDemoDto, UpdateDemoNameDto},
    server::{
        error::AppError,
        util::parse::{require, require_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct DemoRecord {
    pub id: i32,
    pub name: Option<String>,
}

impl DemoRecord {
    pub fn from_entity(entity: entity::demo::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> DemoRowDto {
        DemoRowDto(self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertDemoParams {
    pub id: i32,
    pub name: Option<String>,
}

impl TryFrom<InsertDemoDto> for InsertDemoParams {
    type Error = AppError;

    fn try_from(dto: InsertDemoDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require(dto.id, "id")?,
            name: dto.name,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameDemoParams {
    pub old_name: String,
    pub new_name: String,
}

impl TryFrom<UpdateDemoNameDto> for RenameDemoParams {
    type Error = AppError;

    fn try_from(dto: UpdateDemoNameDto) -> Result<Self, Self::Error> {
        Ok(Self {
            old_name: require_text(dto.old_name, "oldName")?,
            new_name: require_text(dto.new_name, "newName")?,
        })
    }
}
