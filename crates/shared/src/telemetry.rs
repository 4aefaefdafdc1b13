use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, error};

/// ストレージ操作をトレース
///
/// 所要時間と成否を構造化ログとして出力し、結果はそのまま返す。
pub async fn trace_storage_operation<T, E, F, Fut>(
    table_name: &str,
    operation_name: &str,
    operation: F,
) -> Result<T, E>
where
    E: Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start_time = Instant::now();
    let result = operation().await;
    let duration = start_time.elapsed();

    match &result {
        Ok(_) => {
            debug!(
                table = table_name,
                operation = operation_name,
                duration_ms = duration.as_millis() as u64,
                "Storage operation completed"
            );
        }
        Err(e) => {
            error!(
                table = table_name,
                operation = operation_name,
                duration_ms = duration.as_millis() as u64,
                error = %e,
                "Storage operation failed"
            );
        }
    }

    result
}
