pub mod txt_records;
pub mod zones;

pub use txt_records::{AddTxtOutcome, AddTxtRecordUseCase, RemoveTxtRecordUseCase};
pub use zones::ResolveZoneUseCase;
