pub mod calculate;
pub mod expense;
pub mod history;
pub mod income;
pub mod login;
pub mod report;
pub mod tax_type;
pub mod taxpayer;

use anyhow::bail;
use fiscal_core::models::DeclarationStatus;

/// Parses a status argument the way the store spells it.
pub fn parse_status(s: &str) -> anyhow::Result<DeclarationStatus> {
    match s {
        "pending" => Ok(DeclarationStatus::Pending),
        "completed" => Ok(DeclarationStatus::Completed),
        "draft" => Ok(DeclarationStatus::Draft),
        "processing" => Ok(DeclarationStatus::Processing),
        other => bail!("unknown status '{other}' (expected pending, completed, draft or processing)"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_every_known_status() {
        assert_eq!(parse_status("pending").unwrap(), DeclarationStatus::Pending);
        assert_eq!(parse_status("completed").unwrap(), DeclarationStatus::Completed);
        assert_eq!(parse_status("draft").unwrap(), DeclarationStatus::Draft);
        assert_eq!(parse_status("processing").unwrap(), DeclarationStatus::Processing);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(parse_status("archived").is_err());
    }
}
