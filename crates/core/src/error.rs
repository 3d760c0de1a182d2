use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity, or an entity referenced by id or name in a
    /// payload, does not exist. `key` is a display form such as `id 42`
    /// or `name 'Drama'`.
    #[error("{entity} with {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid pagination parameters: {0}")]
    InvalidPagination(String),

    /// A guarded delete was blocked by live associations. `count` is the
    /// number of blocking join facts.
    #[error("Cannot delete {entity} {id} because it has {count} associated record(s); use force=true to detach first")]
    RelationshipConflict {
        entity: &'static str,
        id: DbId,
        count: i64,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// `NotFound` for an entity looked up by primary key.
    pub fn not_found_id(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("id {id}"),
        }
    }

    /// `NotFound` for an entity looked up by exact name.
    pub fn not_found_name(entity: &'static str, name: &str) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("name '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_lookup_key() {
        let by_id = CoreError::not_found_id("Genre", 42);
        assert_eq!(by_id.to_string(), "Genre with id 42 not found");

        let by_name = CoreError::not_found_name("Actor", "Jane Doe");
        assert_eq!(by_name.to_string(), "Actor with name 'Jane Doe' not found");
    }

    #[test]
    fn relationship_conflict_names_the_count() {
        let err = CoreError::RelationshipConflict {
            entity: "Movie",
            id: 7,
            count: 3,
        };
        assert!(err.to_string().contains("3 associated record(s)"));
    }
}
