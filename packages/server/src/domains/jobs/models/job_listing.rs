use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};
use utoipa::ToSchema;

use crate::domains::jobs::data::{JobChanges, JobFilter, NewJobListing};

/// Job listing - one row of the `jobs` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: i32,
    pub title: String,
    pub company_name: String,
    pub work_type: String,
    pub locations: String,
    pub salary: String,
    pub bullet_points: Vec<String>,
    pub listing_date: DateTime<Utc>,
    /// Hyphenated search keyword of the scrape that produced this listing
    pub tag: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

const INSERT_JOB: &str = r#"
    INSERT INTO jobs (
        title,
        company_name,
        work_type,
        locations,
        salary,
        bullet_points,
        listing_date,
        tag
    ) VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), $8)
    RETURNING *
"#;

impl JobListing {
    /// Find listing by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        let listing = sqlx::query_as::<_, JobListing>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(listing)
    }

    /// Find all listings, optionally restricted to one tag
    pub async fn find_all(filter: &JobFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let listings = match filter.normalized_tag() {
            Some(tag) => {
                sqlx::query_as::<_, JobListing>("SELECT * FROM jobs WHERE tag = $1 ORDER BY id")
                    .bind(tag)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, JobListing>("SELECT * FROM jobs ORDER BY id")
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(listings)
    }

    /// Create a single listing (returns inserted record with defaults applied)
    pub async fn create(listing: &NewJobListing, pool: &PgPool) -> Result<Self> {
        let mut conn = pool.acquire().await?;
        Self::insert(listing, &mut *conn).await
    }

    /// Insert a batch of listings in one transaction.
    ///
    /// Either every listing is stored or none is. Returned rows keep the
    /// input order.
    pub async fn insert_batch(listings: &[NewJobListing], pool: &PgPool) -> Result<Vec<Self>> {
        let mut tx = pool.begin().await.context("Failed to begin transaction")?;

        let mut inserted = Vec::with_capacity(listings.len());
        for listing in listings {
            inserted.push(Self::insert(listing, &mut *tx).await?);
        }

        tx.commit().await.context("Failed to commit job batch")?;
        Ok(inserted)
    }

    async fn insert(listing: &NewJobListing, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query_as::<_, JobListing>(INSERT_JOB)
            .bind(&listing.title)
            .bind(&listing.company_name)
            .bind(&listing.work_type)
            .bind(&listing.locations)
            .bind(&listing.salary)
            .bind(&listing.bullet_points)
            .bind(listing.listing_date)
            .bind(&listing.tag)
            .fetch_one(conn)
            .await
            .with_context(|| format!("Failed to insert job '{}'", listing.title))?;
        Ok(row)
    }

    /// Apply a partial update. Returns `None` when no listing has this ID.
    pub async fn update(id: i32, changes: &JobChanges, pool: &PgPool) -> Result<Option<Self>> {
        let (replace_tag, tag) = match &changes.tag {
            Some(tag) => (true, tag.clone()),
            None => (false, None),
        };

        let listing = sqlx::query_as::<_, JobListing>(
            r#"
            UPDATE jobs
            SET title = COALESCE($2, title),
                company_name = COALESCE($3, company_name),
                work_type = COALESCE($4, work_type),
                locations = COALESCE($5, locations),
                salary = COALESCE($6, salary),
                bullet_points = COALESCE($7, bullet_points),
                listing_date = COALESCE($8, listing_date),
                tag = CASE WHEN $9 THEN $10 ELSE tag END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.company_name)
        .bind(&changes.work_type)
        .bind(&changes.locations)
        .bind(&changes.salary)
        .bind(&changes.bullet_points)
        .bind(changes.listing_date)
        .bind(replace_tag)
        .bind(tag)
        .fetch_optional(pool)
        .await?;
        Ok(listing)
    }

    /// Delete listing. Returns `false` when no listing has this ID.
    pub async fn delete(id: i32, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
