use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, Statement,
};

use crate::server::model::crew::{
    CreateCrewParams, Crew, CrewRow, RoleCountRow, UpdateRankParams, VeteranRow,
};

/// Crew joined with their flights and aircraft assignments. A member with F flights and
/// A assignments yields up to F×A rows.
const CREW_ROWS_SQL: &str = r#"
SELECT c.crew_id, c.name, c.role, c.rank, f.squadron_id, f.mission_id, o.aircraft_id
FROM crew c
LEFT JOIN fly f ON f.crew_id = c.crew_id
LEFT JOIN operate o ON o.crew_id = c.crew_id
ORDER BY c.crew_id, f.id, o.id
"#;

/// Relational division: crew for whom {all missions} minus {missions they flew} is empty.
const VETERANS_SQL: &str = r#"
SELECT pc.crew_id, pc.name, pc.role, pc.rank
FROM crew pc
WHERE NOT EXISTS (
    SELECT m.mission_id FROM mission m
    EXCEPT
    SELECT f.mission_id FROM fly f WHERE f.crew_id = pc.crew_id
)
ORDER BY pc.crew_id
"#;

const EXCESS_ROLES_SQL: &str = r#"
SELECT c.role, COUNT(*) AS crew_count
FROM crew c
GROUP BY c.role
HAVING COUNT(*) > 5
ORDER BY c.role
"#;

pub struct CrewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCrewParams) -> Result<Crew, DbErr> {
        let crew = entity::crew::ActiveModel {
            crew_id: ActiveValue::Set(params.crew_id),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role),
            rank: ActiveValue::Set(params.rank),
        }
        .insert(self.db)
        .await?;

        Ok(Crew::from_entity(crew))
    }

    pub async fn get_by_id(&self, crew_id: i32) -> Result<Option<Crew>, DbErr> {
        let crew = entity::prelude::Crew::find_by_id(crew_id).one(self.db).await?;

        Ok(crew.map(Crew::from_entity))
    }

    /// Sets a crew member's rank.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated, 0 when the crew member does not exist
    pub async fn update_rank(&self, params: UpdateRankParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Crew::update_many()
            .col_expr(entity::crew::Column::Rank, Expr::value(params.rank))
            .filter(entity::crew::Column::CrewId.eq(params.crew_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_rows(&self) -> Result<Vec<CrewRow>, DbErr> {
        let backend = self.db.get_database_backend();

        CrewRow::find_by_statement(Statement::from_string(backend, CREW_ROWS_SQL))
            .all(self.db)
            .await
    }

    /// Gets crew members who have flown every recorded mission.
    ///
    /// With no missions recorded every crew member qualifies.
    pub async fn get_veterans(&self) -> Result<Vec<VeteranRow>, DbErr> {
        let backend = self.db.get_database_backend();

        VeteranRow::find_by_statement(Statement::from_string(backend, VETERANS_SQL))
            .all(self.db)
            .await
    }

    /// Gets roles held by more than five crew members.
    pub async fn get_excess_roles(&self) -> Result<Vec<RoleCountRow>, DbErr> {
        let backend = self.db.get_database_backend();

        RoleCountRow::find_by_statement(Statement::from_string(backend, EXCESS_ROLES_SQL))
            .all(self.db)
            .await
    }
}
