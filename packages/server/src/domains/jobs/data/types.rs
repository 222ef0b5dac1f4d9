use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::common::datetime;
use crate::domains::jobs::tag::normalize_tag;

/// A job record that failed the required-field check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A normalized listing, ready to be inserted.
///
/// `listing_date` of `None` means "use the insert time".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobListing {
    pub title: String,
    pub company_name: String,
    pub work_type: String,
    pub locations: String,
    pub salary: String,
    pub bullet_points: Vec<String>,
    pub listing_date: Option<DateTime<Utc>>,
    pub tag: Option<String>,
}

/// Body of `POST /jobs`.
///
/// Every field is optional at the parsing layer so that a missing one turns
/// into a validation message instead of a serde rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub work_type: Option<String>,
    pub locations: Option<String>,
    pub salary: Option<String>,
    pub bullet_points: Option<Vec<String>>,
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    #[schema(value_type = Option<String>, example = "2024-05-01")]
    pub listing_date: Option<DateTime<Utc>>,
    pub tag: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, JobValidationError> {
    value.ok_or(JobValidationError::MissingField(field))
}

impl TryFrom<CreateJobInput> for NewJobListing {
    type Error = JobValidationError;

    fn try_from(input: CreateJobInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(input.title, "title")?,
            company_name: required(input.company_name, "companyName")?,
            work_type: required(input.work_type, "workType")?,
            locations: required(input.locations, "locations")?,
            salary: required(input.salary, "salary")?,
            bullet_points: required(input.bullet_points, "bulletPoints")?,
            listing_date: input.listing_date,
            tag: input.tag.as_deref().map(normalize_tag),
        })
    }
}

/// Missing field is `None`, explicit `null` is `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `PUT /jobs/{id}`; any subset of fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobInput {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub company_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub work_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub locations: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub salary: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Vec<String>>)]
    pub bullet_points: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "datetime::deserialize_nullable")]
    #[schema(value_type = Option<String>, example = "2024-05-01")]
    pub listing_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub tag: Option<Option<String>>,
}

/// Validated partial update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobChanges {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub work_type: Option<String>,
    pub locations: Option<String>,
    pub salary: Option<String>,
    pub bullet_points: Option<Vec<String>>,
    pub listing_date: Option<DateTime<Utc>>,
    /// `Some(None)` clears the tag.
    pub tag: Option<Option<String>>,
}

fn not_null<T>(
    value: Option<Option<T>>,
    field: &'static str,
) -> Result<Option<T>, JobValidationError> {
    match value {
        Some(None) => Err(JobValidationError::MissingField(field)),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

impl TryFrom<UpdateJobInput> for JobChanges {
    type Error = JobValidationError;

    fn try_from(input: UpdateJobInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: not_null(input.title, "title")?,
            company_name: not_null(input.company_name, "companyName")?,
            work_type: not_null(input.work_type, "workType")?,
            locations: not_null(input.locations, "locations")?,
            salary: not_null(input.salary, "salary")?,
            bullet_points: not_null(input.bullet_points, "bulletPoints")?,
            listing_date: not_null(input.listing_date, "listingDate")?,
            tag: input.tag.map(|tag| tag.as_deref().map(normalize_tag)),
        })
    }
}

/// Query string of `GET /jobs` and `POST /jobs/export`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobFilter {
    /// Only listings with this tag; spaces are read as hyphens
    pub tag: Option<String>,
}

impl JobFilter {
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    /// The tag to match on, normalized. An empty tag means no filter.
    pub fn normalized_tag(&self) -> Option<String> {
        self.tag
            .as_deref()
            .filter(|tag| !tag.is_empty())
            .map(normalize_tag)
    }
}
