use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) = result
                .unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz"
            );
        }
    }
}

/// Each join table's primary key must be the composite of its two
/// reference columns, so a pair can exist at most once.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_join_tables_have_composite_pks(pool: PgPool) {
    for (table, expected) in [
        ("movie_genres", vec!["movie_id", "genre_id"]),
        ("movie_actors", vec!["movie_id", "actor_id"]),
    ] {
        let columns: Vec<(String,)> = sqlx::query_as(
            "SELECT kcu.column_name
             FROM information_schema.table_constraints tc
             JOIN information_schema.key_column_usage kcu
               ON kcu.constraint_name = tc.constraint_name
              AND kcu.table_schema = tc.table_schema
             WHERE tc.table_schema = 'public'
               AND tc.table_name = $1
               AND tc.constraint_type = 'PRIMARY KEY'
             ORDER BY kcu.ordinal_position",
        )
        .bind(table)
        .fetch_all(&pool)
        .await
        .unwrap();

        let columns: Vec<&str> = columns.iter().map(|(c,)| c.as_str()).collect();
        assert_eq!(columns, expected, "Unexpected PK for {table}");
    }
}

/// Join tables must not cascade on delete; detachment is the deletion
/// guard's job, inside an explicit transaction.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_join_table_fks_do_not_cascade(pool: PgPool) {
    let rules: Vec<(String,)> = sqlx::query_as(
        "SELECT rc.delete_rule
         FROM information_schema.referential_constraints rc
         JOIN information_schema.table_constraints tc
           ON tc.constraint_name = rc.constraint_name
          AND tc.table_schema = rc.constraint_schema
         WHERE tc.table_schema = 'public'
           AND tc.table_name IN ('movie_genres', 'movie_actors')",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rules.len(), 4, "Expected two FKs per join table");
    for (rule,) in &rules {
        assert_eq!(rule, "NO ACTION", "Join table FKs must not cascade");
    }
}
