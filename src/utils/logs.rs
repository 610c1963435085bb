// Installs a json formatter for tracing events. Later calls are no-ops, so tests and
// embedding applications can call it freely. Returns whether this call installed it.
pub fn setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // the host log pipeline stamps its own ingestion time.
        .without_time()
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use crate::utils::logs::setup_tracing;

    #[tokio::test]
    async fn test_should_setup_tracing_once() {
        setup_tracing();
        assert!(!setup_tracing());
    }
}
