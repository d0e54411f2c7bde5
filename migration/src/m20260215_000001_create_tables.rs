use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建院系表
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::Description).text().null())
                    .col(ColumnDef::new(Departments::AdminId).big_integer().null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Departments::Table, Departments::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户档案表（随用户创建，一对一）
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::PhoneNumber)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::Birthdate).string().null())
                    .col(
                        ColumnDef::new(UserProfiles::DepartmentId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfiles::Table, UserProfiles::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建工作类别表
        manager
            .create_table(
                Table::create()
                    .table(WorkCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkCategories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(WorkCategories::Description).text().null())
                    .col(
                        ColumnDef::new(WorkCategories::MaxPercentage)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkCategories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkCategories::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建要求表（每个工作类别下的证明条件）
        manager
            .create_table(
                Table::create()
                    .table(Requirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requirements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Requirements::WorkCategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Requirements::Name).string().not_null())
                    .col(ColumnDef::new(Requirements::Description).text().null())
                    .col(
                        ColumnDef::new(Requirements::MaxPercentageIncrease)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Requirements::Table, Requirements::WorkCategoryId)
                            .to(WorkCategories::Table, WorkCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::WorkCategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmissionDescription)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(Submissions::ActionDescription).text().null())
                    .col(
                        ColumnDef::new(Submissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::ProfessorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::WorkCategoryId)
                            .to(WorkCategories::Table, WorkCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交-要求关联表（一次提交可满足类别要求的子集）
        manager
            .create_table(
                Table::create()
                    .table(SubmissionRequirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubmissionRequirements::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubmissionRequirements::RequirementId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SubmissionRequirements::SubmissionId)
                            .col(SubmissionRequirements::RequirementId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                SubmissionRequirements::Table,
                                SubmissionRequirements::SubmissionId,
                            )
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                SubmissionRequirements::Table,
                                SubmissionRequirements::RequirementId,
                            )
                            .to(Requirements::Table, Requirements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交文件表（每个满足的要求对应一份证明文件）
        manager
            .create_table(
                Table::create()
                    .table(FileSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FileSubmissions::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileSubmissions::RequirementId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileSubmissions::OriginalName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileSubmissions::StoredName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileSubmissions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileSubmissions::Table, FileSubmissions::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileSubmissions::Table, FileSubmissions::RequirementId)
                            .to(Requirements::Table, Requirements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 提交表索引（审核队列按状态查询、列表按创建时间排序）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_status")
                    .table(Submissions::Table)
                    .col(Submissions::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_professor_id")
                    .table(Submissions::Table)
                    .col(Submissions::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_requirements_work_category_id")
                    .table(Requirements::Table)
                    .col(Requirements::WorkCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_file_submissions_submission_id")
                    .table(FileSubmissions::Table)
                    .col(FileSubmissions::SubmissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(FileSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SubmissionRequirements::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Requirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Name,
    Description,
    AdminId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserProfiles {
    #[sea_orm(iden = "user_profiles")]
    Table,
    Id,
    UserId,
    PhoneNumber,
    Birthdate,
    DepartmentId,
}

#[derive(DeriveIden)]
enum WorkCategories {
    #[sea_orm(iden = "work_categories")]
    Table,
    Id,
    Name,
    Description,
    MaxPercentage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Requirements {
    #[sea_orm(iden = "requirements")]
    Table,
    Id,
    WorkCategoryId,
    Name,
    Description,
    MaxPercentageIncrease,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    ProfessorId,
    WorkCategoryId,
    Status,
    SubmissionDescription,
    ActionDescription,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SubmissionRequirements {
    #[sea_orm(iden = "submission_requirements")]
    Table,
    SubmissionId,
    RequirementId,
}

#[derive(DeriveIden)]
enum FileSubmissions {
    #[sea_orm(iden = "file_submissions")]
    Table,
    Id,
    SubmissionId,
    RequirementId,
    OriginalName,
    StoredName,
    CreatedAt,
}
