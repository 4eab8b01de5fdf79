use chrono::{DateTime, NaiveDate, Utc};

/// Process-wide unique entity identifier. Positive, strictly increasing,
/// never reused — see [`IdGenerator`](crate::store::ids::IdGenerator).
pub type EntityId = u64;

/// Identity shared by every domain entity: an id and a creation timestamp,
/// both assigned once at construction and immutable afterwards.
///
/// Embedded by value in each model instead of inherited.
#[derive(Debug, Clone, Copy)]
pub struct EntityMeta {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl EntityMeta {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            created_at: Utc::now(),
        }
    }
}

/// Name and birth date shared by students and teachers.
#[derive(Debug, Clone)]
pub struct PersonDetails {
    pub name: String,
    pub birthdate: NaiveDate,
}

impl PersonDetails {
    pub fn new(name: String, birthdate: NaiveDate) -> Self {
        Self { name, birthdate }
    }

    /// Age in whole years: `floor(days_since_birthdate / 365)`.
    pub fn age(&self) -> i64 {
        let today = Utc::now().date_naive();
        (today - self.birthdate).num_days() / 365
    }
}
