//! SQLite engine. Predicates are translated with [`crate::sql::translate`]
//! and run against an `articles` table ordered by `rowid`.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, Row};
use tracing::debug;

use super::ArticleRepository;
use crate::error::Result;
use crate::page::PageRequest;
use crate::predicate::{fold_case, Predicate};
use crate::sql::{self, FOLD_CASE_FN};
use crate::types::{Article, NewArticle};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS articles (
    id          TEXT PRIMARY KEY NOT NULL,
    title       TEXT NOT NULL,
    slug        TEXT NOT NULL,
    content     TEXT NOT NULL,
    author      TEXT NOT NULL,
    publish_at  TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";

const COLUMNS: &str = "id, title, slug, content, author, publish_at, created_at, updated_at";

pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A private in-memory database; gone when dropped.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.create_scalar_function(
            FOLD_CASE_FN,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value = ctx.get::<String>(0)?;
                Ok(fold_case(&value))
            },
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl ArticleRepository for SqliteRepository {
    fn insert(&self, article: NewArticle) -> Result<Article> {
        let article = article.into_article(Utc::now())?;
        let conn = self.conn.lock()?;
        conn.execute(
            &format!("INSERT INTO articles ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
            params![
                article.id,
                article.title,
                article.slug,
                article.content,
                article.author,
                article.publish,
                article.created_at.to_rfc3339(),
                article.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(article)
    }

    fn count(&self, predicate: &Predicate) -> Result<u64> {
        let filter = sql::translate(predicate);
        let conn = self.conn.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM articles{}", filter.where_sql()),
            params_from_iter(filter.params.iter()),
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn find_page(&self, predicate: &Predicate, page: PageRequest) -> Result<(Vec<Article>, u64)> {
        let filter = sql::translate(predicate);
        let where_sql = filter.where_sql();
        let conn = self.conn.lock()?;

        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM articles{where_sql}"),
            params_from_iter(filter.params.iter()),
            |row| row.get(0),
        )?;

        let query = format!(
            "SELECT {COLUMNS} FROM articles{where_sql} ORDER BY rowid LIMIT {} OFFSET {}",
            page.size(),
            page.offset()
        );
        debug!(sql = %query, params = ?filter.params, "sqlite page query");

        let mut stmt = conn.prepare(&query)?;
        let items = stmt
            .query_map(params_from_iter(filter.params.iter()), row_to_article)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok((items, total as u64))
    }
}

fn row_to_article(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        content: row.get(3)?,
        author: row.get(4)?,
        publish: row.get(5)?,
        created_at: timestamp(row, 6)?,
        updated_at: timestamp(row, 7)?,
    })
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
