mod account_directory;
mod client;
mod txt_record_repository;
mod types;
mod zone_directory;

pub use client::DnsimpleClient;
