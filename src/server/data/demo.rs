use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::demo::{DemoRecord, InsertDemoParams, RenameDemoParams};

pub struct DemoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DemoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<DemoRecord>, DbErr> {
        let records = entity::prelude::Demo::find()
            .order_by_asc(entity::demo::Column::Id)
            .all(self.db)
            .await?;

        Ok(records.into_iter().map(DemoRecord::from_entity).collect())
    }

    /// Drops the demo table if present and creates it empty.
    pub async fn reset(&self) -> Result<(), DbErr> {
        let backend = self.db.get_database_backend();

        self.db
            .execute(&entity::schema::drop_demo_table_statement())
            .await?;
        self.db
            .execute(&entity::schema::create_table_statement(
                backend,
                entity::prelude::Demo,
            ))
            .await?;

        Ok(())
    }

    pub async fn insert(&self, params: InsertDemoParams) -> Result<DemoRecord, DbErr> {
        let record = entity::demo::ActiveModel {
            id: ActiveValue::Set(params.id),
            name: ActiveValue::Set(params.name),
        }
        .insert(self.db)
        .await?;

        Ok(DemoRecord::from_entity(record))
    }

    /// Renames every row carrying `old_name`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated, 0 when no row carries `old_name`
    pub async fn rename(&self, params: RenameDemoParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Demo::update_many()
            .col_expr(entity::demo::Column::Name, Expr::value(params.new_name))
            .filter(entity::demo::Column::Name.eq(params.old_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Demo::find().count(self.db).await
    }
}
