//! Schema bootstrap from a batch script
//!
//! Scripts are split on lines that contain only `GO` (any case). Each batch
//! is sent as one simple-protocol query, so a batch may hold several
//! statements. A failing batch is logged and skipped; the rest still run.

use sqlx::PgPool;

/// Schema shipped with the server
pub const DEFAULT_SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Outcome of applying a schema script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub executed: usize,
    pub failed: usize,
}

/// Split a script into trimmed, non-empty batches.
pub fn split_batches(script: &str) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for line in script.lines() {
        if line.trim().eq_ignore_ascii_case("go") {
            push_batch(&mut batches, &current);
            current.clear();
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_batch(&mut batches, &current);

    batches
}

fn push_batch(batches: &mut Vec<String>, raw: &str) {
    let batch = raw.trim();
    if !batch.is_empty() && !is_comment_only(batch) {
        batches.push(batch.to_owned());
    }
}

fn is_comment_only(batch: &str) -> bool {
    batch
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with("--"))
}

/// Execute every batch of `script`, continuing past failures.
pub async fn apply(pool: &PgPool, script: &str) -> BatchReport {
    let mut report = BatchReport::default();

    for batch in split_batches(script) {
        match sqlx::raw_sql(&batch).execute(pool).await {
            Ok(_) => {
                tracing::info!("Executed schema batch.");
                report.executed += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Warning executing batch");
                report.failed += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_go_lines() {
        let script = "CREATE TABLE a (id INT);\nGO\nCREATE TABLE b (id INT);\ngo\n";
        assert_eq!(
            split_batches(script),
            vec!["CREATE TABLE a (id INT);", "CREATE TABLE b (id INT);"]
        );
    }

    #[test]
    fn go_inside_a_line_does_not_split() {
        let script = "INSERT INTO bins (location) VALUES ('GOLF COURSE');\nGO";
        let batches = split_batches(script);
        assert_eq!(batches.len(), 1);
        assert!(batches[0].contains("GOLF COURSE"));
    }

    #[test]
    fn skips_empty_and_comment_batches() {
        let script = "-- header\nGO\n\n  \nGO\nSELECT 1;\n";
        assert_eq!(split_batches(script), vec!["SELECT 1;"]);
    }

    #[test]
    fn shipped_schema_has_all_tables() {
        let batches = split_batches(DEFAULT_SCHEMA);
        for table in ["users", "bins", "requests", "waste_logs"] {
            let ddl = format!("CREATE TABLE IF NOT EXISTS {} ", table);
            assert!(
                batches.iter().any(|b| b.contains(&ddl)),
                "missing table {}",
                table
            );
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn failing_batch_does_not_stop_the_rest() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        let report = apply(&pool, "SELECT 1;\nGO\nSELEC broken;\nGO\nSELECT 2;").await;
        assert_eq!(report, BatchReport { executed: 2, failed: 1 });
    }
}
