use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::{CriticalError, ServerError};

use crate::{
    data::models::obligation_amount_model::ObligationAmountModel,
    entities::{Obligation, ObligationSource, Participant},
    errors::{InvalidCsv, ReadError, WriteError},
    presentation::utils::fixed,
};

/// Line-oriented `creditor,debtor,amount` files. Lines that don't describe a
/// valid obligation are skipped rather than failing the whole file.
#[async_trait]
pub(crate) trait ObligationsCsvDatasource: Send + Sync {
    fn from_string(&self, filename: &str, s: &str) -> Result<Vec<Obligation>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Obligation>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn to_string(&self, obligations: &[Obligation]) -> Result<String, ServerError>;

    async fn to_file<P>(&self, path: P, obligations: &[Obligation]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ObligationsCsvDatasourceImpl;

impl ObligationsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// The name an import is registered under: the path's final component.
pub(crate) fn import_filename(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[async_trait]
impl ObligationsCsvDatasource for ObligationsCsvDatasourceImpl {
    fn from_string(&self, filename: &str, s: &str) -> Result<Vec<Obligation>, ServerError> {
        let mut obligations = Vec::new();
        for r in csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
        {
            let r = r.map_err(|e| InvalidCsv::with_debug(&e))?;
            if r.len() != 3 {
                continue;
            }

            // Extract from CSV record.
            let raw_creditor = r.get(0).unwrap_or("");
            let raw_debtor = r.get(1).unwrap_or("");
            let raw_amount = r.get(2).unwrap_or("");

            // Parse.
            let (Ok(creditor), Ok(debtor), Ok(amount)) = (
                Participant::parse(raw_creditor),
                Participant::parse(raw_debtor),
                ObligationAmountModel::from_str(raw_amount),
            ) else {
                tracing::debug!(
                    filename,
                    line = ?r.position().map(|p| p.line()),
                    "skipping invalid line"
                );
                continue;
            };

            // Build.
            obligations.push(Obligation {
                creditor,
                debtor,
                amount: amount.into(),
                source: ObligationSource::File {
                    filename: filename.to_string(),
                },
            });
        }
        Ok(obligations)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Obligation>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&import_filename(path.as_ref()), &contents)
    }

    fn to_string(&self, obligations: &[Obligation]) -> Result<String, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(Vec::new());
        for o in obligations {
            writer
                .write_record([o.creditor.as_str(), o.debtor.as_str(), fixed(o.amount, 2).as_str()])
                .map_err(|e| CriticalError::with_debug("failed to write CSV record", &e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CriticalError::with_debug("failed to flush CSV writer", &e))?;
        String::from_utf8(bytes)
            .map_err(|e| CriticalError::with_debug("CSV output is not valid UTF-8", &e))
    }

    async fn to_file<P>(&self, path: P, obligations: &[Obligation]) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = self.to_string(obligations)?;
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| WriteError::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<Obligation> {
        ObligationsCsvDatasourceImpl::new()
            .from_string("test.csv", s)
            .unwrap()
    }

    fn triples(obligations: &[Obligation]) -> Vec<(String, String, f64)> {
        obligations
            .iter()
            .map(|o| (o.creditor.to_string(), o.debtor.to_string(), o.amount))
            .collect()
    }

    #[test]
    fn skips_invalid_lines() {
        let obligations = parse("X,Y,10\n,Y,5\nX,Y,-3\nX,Y,two\nX,Z,7\n");
        assert_eq!(
            triples(&obligations),
            vec![
                ("X".to_string(), "Y".to_string(), 10.0),
                ("X".to_string(), "Z".to_string(), 7.0),
            ]
        );
        assert!(obligations
            .iter()
            .all(|o| o.filename() == Some("test.csv")));
    }

    #[test]
    fn trims_fields_and_ignores_blank_lines() {
        let obligations = parse("\n  Alice , Bob ,  12.50 \n\n");
        assert_eq!(
            triples(&obligations),
            vec![("Alice".to_string(), "Bob".to_string(), 12.5)]
        );
    }

    #[test]
    fn quotes_do_not_span_lines() {
        let obligations = parse("\"X,Y,1\nA,B,2\nC,D,3\n");
        assert_eq!(
            triples(&obligations),
            vec![
                ("\"X".to_string(), "Y".to_string(), 1.0),
                ("A".to_string(), "B".to_string(), 2.0),
                ("C".to_string(), "D".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn export_writes_names_verbatim() {
        let datasource = ObligationsCsvDatasourceImpl::new();
        let obligations = parse("Al \"Bo\",Cy,4\n");
        assert_eq!(triples(&obligations)[0].0, "Al \"Bo\"");
        assert_eq!(
            datasource.to_string(&obligations).unwrap(),
            "Al \"Bo\",Cy,4.00\n"
        );
    }

    #[test]
    fn requires_exactly_three_fields() {
        assert!(parse("A,B\nA,B,1,extra\nA\n").is_empty());
    }

    #[test]
    fn export_uses_two_decimals_without_header() {
        let datasource = ObligationsCsvDatasourceImpl::new();
        let obligations = parse("X,Y,10\nX,Z,7.125\n");
        assert_eq!(
            datasource.to_string(&obligations).unwrap(),
            "X,Y,10.00\nX,Z,7.13\n"
        );
    }

    #[test]
    fn export_then_import_round_trips() {
        let datasource = ObligationsCsvDatasourceImpl::new();
        let original = parse("A,B,1.50\nC,D,20\n");
        let exported = datasource.to_string(&original).unwrap();
        let reimported = datasource.from_string("test.csv", &exported).unwrap();
        assert_eq!(triples(&original), triples(&reimported));
    }

    #[test]
    fn import_filename_is_last_component() {
        assert_eq!(
            import_filename(std::path::Path::new("/tmp/data/trip.csv")),
            "trip.csv"
        );
    }

    #[tokio::test]
    async fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let datasource = ObligationsCsvDatasourceImpl::new();
        let obligations = parse("A,B,3\n");
        datasource.to_file(&path, &obligations).await.unwrap();
        let read_back = datasource.from_file(&path).await.unwrap();
        assert_eq!(triples(&read_back), triples(&obligations));
        assert_eq!(read_back[0].filename(), Some("ledger.csv"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let datasource = ObligationsCsvDatasourceImpl::new();
        assert!(datasource
            .from_file("/definitely/not/here.csv")
            .await
            .is_err());
    }
}
