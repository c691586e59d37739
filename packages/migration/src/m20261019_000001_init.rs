use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Nickname,
    ProfileType,
    Title,
    AvatarUrl,
    Bio,
    Philosophy,
    Quotes,
    PersonaStats,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
    ContentType,
    Title,
    Creator,
    ThumbnailUrl,
    CreatedAt,
}

#[derive(Iden)]
enum UserContents {
    Table,
    Id,
    ProfileId,
    ContentId,
    Status,
    Rating,
    Review,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TrackerHighScores {
    Table,
    PlayerKey,
    HighScore,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // profiles (both members and celebs; profile_type tells them apart)
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Profiles::Nickname).string().not_null())
                    .col(
                        ColumnDef::new(Profiles::ProfileType)
                            .string()
                            .not_null()
                            .default("USER"),
                    )
                    .col(ColumnDef::new(Profiles::Title).string().null())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string().null())
                    .col(ColumnDef::new(Profiles::Bio).text().null())
                    .col(ColumnDef::new(Profiles::Philosophy).text().null())
                    .col(ColumnDef::new(Profiles::Quotes).text().null())
                    .col(ColumnDef::new(Profiles::PersonaStats).text().null())
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_profiles_type_nickname")
                    .table(Profiles::Table)
                    .col(Profiles::ProfileType)
                    .col(Profiles::Nickname)
                    .to_owned(),
            )
            .await?;

        // contents
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contents::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Contents::ContentType).string().not_null())
                    .col(ColumnDef::new(Contents::Title).string().not_null())
                    .col(ColumnDef::new(Contents::Creator).string().null())
                    .col(ColumnDef::new(Contents::ThumbnailUrl).string().null())
                    .col(
                        ColumnDef::new(Contents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // user_contents (profile <-> content join with record metadata)
        manager
            .create_table(
                Table::create()
                    .table(UserContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserContents::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(UserContents::ProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserContents::ContentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserContents::Status)
                            .string()
                            .not_null()
                            .default("WANT"),
                    )
                    .col(ColumnDef::new(UserContents::Rating).double().null())
                    .col(ColumnDef::new(UserContents::Review).text().null())
                    .col(
                        ColumnDef::new(UserContents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserContents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_contents_profile_id")
                            .from(UserContents::Table, UserContents::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_contents_content_id")
                            .from(UserContents::Table, UserContents::ContentId)
                            .to(Contents::Table, Contents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_user_contents_profile_content")
                    .table(UserContents::Table)
                    .col(UserContents::ProfileId)
                    .col(UserContents::ContentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_user_contents_profile_updated")
                    .table(UserContents::Table)
                    .col(UserContents::ProfileId)
                    .col(UserContents::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        // tracker_high_scores
        manager
            .create_table(
                Table::create()
                    .table(TrackerHighScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackerHighScores::PlayerKey)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrackerHighScores::HighScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrackerHighScores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_table(Table::drop().table(TrackerHighScores::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_user_contents_profile_updated")
                    .table(UserContents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_user_contents_profile_content")
                    .table(UserContents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserContents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_profiles_type_nickname")
                    .table(Profiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;

        Ok(())
    }
}
