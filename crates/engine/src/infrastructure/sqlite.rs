//! SQLite-backed player storage.

use async_trait::async_trait;
use questlog_domain::{
    birthday_from_millis, Condition, NewPlayer, Page, PageSpec, Player, PlayerFilter, PlayerId,
    PlayerName, PlayerOrder, PlayerTitle, Progress,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const PLAYER_COLUMNS: &str =
    "id, name, title, race, profession, birthday, banned, experience, level, until_next_level";

/// SQLite implementation of [`PlayerRepo`].
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    /// Open (or create) the database file and make sure the schema exists.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("players.connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL,
                experience INTEGER NOT NULL,
                level INTEGER NOT NULL,
                until_next_level INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("players.schema", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn create(&self, player: &NewPlayer) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players
                (name, title, race, profession, birthday, banned, experience, level, until_next_level)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.name.as_str())
        .bind(player.title.as_str())
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday.timestamp_millis())
        .bind(player.banned)
        .bind(i64::from(player.progress.experience()))
        .bind(i64::from(player.progress.level()))
        .bind(i64::from(player.progress.until_next_level()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.create", e))?;

        let id = PlayerId::new(result.last_insert_rowid())
            .map_err(RepoError::serialization)?;
        Ok(player.clone().with_id(id))
    }

    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE players SET
                name = ?, title = ?, race = ?, profession = ?, birthday = ?,
                banned = ?, experience = ?, level = ?, until_next_level = ?
            WHERE id = ?
            "#,
        )
        .bind(player.name.as_str())
        .bind(player.title.as_str())
        .bind(player.race.as_str())
        .bind(player.profession.as_str())
        .bind(player.birthday.timestamp_millis())
        .bind(player.banned)
        .bind(i64::from(player.experience()))
        .bind(i64::from(player.level()))
        .bind(i64::from(player.until_next_level()))
        .bind(player.id.get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("players.save", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", player.id));
        }
        Ok(player.clone())
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.get", e))?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", id));
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: &PlayerFilter,
        page: &PageSpec,
    ) -> Result<Page<Player>, RepoError> {
        // Page and total must come from the same snapshot
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("players.list", e))?;

        let mut select = QueryBuilder::<Sqlite>::new(format!("SELECT {PLAYER_COLUMNS} FROM players"));
        push_where(&mut select, filter);
        select.push(format!(
            " ORDER BY {} {}, id ASC",
            order_column(page.order()),
            page.direction().as_sql()
        ));
        select
            .push(" LIMIT ")
            .push_bind(i64::from(page.page_size()))
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| RepoError::database("players.list", e))?;

        let mut count = count_query(filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepoError::database("players.list", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("players.list", e))?;

        let items = rows
            .iter()
            .map(row_to_player)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn count(&self, filter: &PlayerFilter) -> Result<u64, RepoError> {
        let mut count = count_query(filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("players.count", e))?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

fn count_query(filter: &PlayerFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new("SELECT COUNT(*) FROM players");
    push_where(&mut query, filter);
    query
}

/// Render the filter as a parameterised WHERE clause.
///
/// `instr` is used for substring tests because SQLite's LIKE ignores ASCII
/// case.
fn push_where(query: &mut QueryBuilder<'static, Sqlite>, filter: &PlayerFilter) {
    for (index, condition) in filter.conditions().iter().enumerate() {
        query.push(if index == 0 { " WHERE " } else { " AND " });
        match condition {
            Condition::NameContains(needle) => {
                query.push("instr(name, ").push_bind(needle.clone()).push(") > 0");
            }
            Condition::TitleContains(needle) => {
                query.push("instr(title, ").push_bind(needle.clone()).push(") > 0");
            }
            Condition::RaceIs(race) => {
                query.push("race = ").push_bind(race.as_str());
            }
            Condition::ProfessionIs(profession) => {
                query.push("profession = ").push_bind(profession.as_str());
            }
            Condition::BornOnOrAfter(after) => {
                query.push("birthday >= ").push_bind(after.timestamp_millis());
            }
            Condition::BornOnOrBefore(before) => {
                query.push("birthday <= ").push_bind(before.timestamp_millis());
            }
            Condition::BannedIs(banned) => {
                query.push("banned = ").push_bind(*banned);
            }
            Condition::ExperienceAtLeast(min) => {
                query.push("experience >= ").push_bind(*min);
            }
            Condition::ExperienceAtMost(max) => {
                query.push("experience <= ").push_bind(*max);
            }
            Condition::LevelAtLeast(min) => {
                query.push("level >= ").push_bind(*min);
            }
            Condition::LevelAtMost(max) => {
                query.push("level <= ").push_bind(*max);
            }
        }
    }
}

fn order_column(order: PlayerOrder) -> &'static str {
    match order {
        PlayerOrder::Id => "id",
        PlayerOrder::Name => "name",
        PlayerOrder::Title => "title",
        PlayerOrder::Race => "race",
        PlayerOrder::Profession => "profession",
        PlayerOrder::Birthday => "birthday",
        PlayerOrder::Banned => "banned",
        PlayerOrder::Experience => "experience",
        PlayerOrder::Level => "level",
        PlayerOrder::UntilNextLevel => "until_next_level",
    }
}

fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
    fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepoError>
    where
        T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
    {
        row.try_get(name)
            .map_err(|e| RepoError::serialization(format!("players.{name}: {e}")))
    }

    let id = PlayerId::new(column(row, "id")?).map_err(RepoError::serialization)?;
    let name = PlayerName::new(column::<String>(row, "name")?).map_err(RepoError::serialization)?;
    let title =
        PlayerTitle::new(column::<String>(row, "title")?).map_err(RepoError::serialization)?;
    let race = column::<String>(row, "race")?
        .parse()
        .map_err(RepoError::serialization)?;
    let profession = column::<String>(row, "profession")?
        .parse()
        .map_err(RepoError::serialization)?;
    let birthday = birthday_from_millis(column(row, "birthday")?).map_err(RepoError::serialization)?;
    let progress =
        Progress::from_experience(column(row, "experience")?).map_err(RepoError::serialization)?;

    Ok(Player {
        id,
        name,
        title,
        race,
        profession,
        birthday,
        banned: column(row, "banned")?,
        progress,
    })
}
