mod account_directory;
mod txt_record_repository;
mod zone_directory;

pub use account_directory::AccountDirectory;
pub use txt_record_repository::TxtRecordRepository;
pub use zone_directory::ZoneDirectory;
