//! Helpers for classifying PostgreSQL unique-constraint violations.

/// Unique constraint of the `shortened_links` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    LongUrl,
    ShortCode,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::LongUrl => "long_url",
            UniqueField::ShortCode => "short_code",
        }
    }

    fn from_constraint(constraint: &str) -> Option<Self> {
        match constraint {
            "shortened_links_long_url_key" => Some(UniqueField::LongUrl),
            "shortened_links_short_code_key" => Some(UniqueField::ShortCode),
            _ => None,
        }
    }
}

/// Returns which unique column an error violated, if it is a unique violation
/// on one of the known constraints.
pub fn unique_violation_field(e: &sqlx::Error) -> Option<UniqueField> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint().and_then(UniqueField::from_constraint)
}
