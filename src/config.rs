use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError};

/// Runtime settings, read from RON. Every field is optional in the source.
///
/// ```ron
/// (
///     settlement_url: "http://127.0.0.1:5000/process_manual",
///     export_filename: "combined_transactions.csv",
///     request_timeout_secs: 30,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct SplitUpConfig {
    pub settlement_url: String,
    pub export_filename: String,
    pub request_timeout_secs: u64,
}

impl Default for SplitUpConfig {
    fn default() -> Self {
        Self {
            settlement_url: "http://127.0.0.1:5000/process_manual".to_string(),
            export_filename: "combined_transactions.csv".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl SplitUpConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("SplitUpConfig", &e))
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(
            &tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SplitUpConfig::from_ron_str(r#"(settlement_url: "http://example.test/settle")"#)
            .unwrap();
        assert_eq!(config.settlement_url, "http://example.test/settle");
        assert_eq!(config.export_filename, "combined_transactions.csv");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn empty_struct_is_default() {
        assert_eq!(
            SplitUpConfig::from_ron_str("()").unwrap(),
            SplitUpConfig::default()
        );
    }

    #[test]
    fn invalid_ron_is_rejected() {
        assert!(SplitUpConfig::from_ron_str("(request_timeout_secs: \"soon\")").is_err());
        assert!(SplitUpConfig::from_ron_str("not ron at all").is_err());
    }

    #[tokio::test]
    async fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("splitup.ron");
        tokio::fs::write(&path, "(request_timeout_secs: 5)")
            .await
            .unwrap();
        let config = SplitUpConfig::from_file(&path).await.unwrap();
        assert_eq!(config.request_timeout_secs, 5);
    }
}
