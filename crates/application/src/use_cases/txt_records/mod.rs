mod add_txt_record;
mod remove_txt_record;

pub use add_txt_record::{AddTxtOutcome, AddTxtRecordUseCase};
pub use remove_txt_record::RemoveTxtRecordUseCase;

use ferrous_acme_dns_domain::DomainError;

fn validate_txt_value(value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidTxtValue(
            "TXT value cannot be empty".to_string(),
        ));
    }
    if value.len() > 255 {
        return Err(DomainError::InvalidTxtValue(
            "TXT value cannot exceed 255 characters".to_string(),
        ));
    }
    Ok(())
}
