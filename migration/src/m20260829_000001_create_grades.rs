use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Grades::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Grades::ClassName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Grades::StudentName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Grades::Score).integer().not_null())
                    // 时间戳统一使用 epoch 毫秒
                    .col(ColumnDef::new(Grades::Date).big_integer().not_null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 列表查询按 created_at 排序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_created_at")
                    .table(Grades::Table)
                    .col(Grades::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Grades {
    Table,
    Id,
    ClassName,
    StudentName,
    Score,
    Date,
    CreatedAt,
    UpdatedAt,
}
