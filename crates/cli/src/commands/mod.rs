use ferrous_acme_dns_application::use_cases::AddTxtOutcome;
use ferrous_acme_dns_domain::RecordName;

use crate::di::Services;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Publish a TXT record (no-op when the value is already there)
    Add {
        /// Fully qualified record name, e.g. _acme-challenge.www.example.com
        record: String,
        /// TXT value
        value: String,
    },

    /// Delete TXT records holding a value (no-op when absent)
    Remove {
        record: String,
        value: String,
    },

    /// Show which hosted zone owns a record name
    Zone {
        record: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the account bound to the API token
    Whoami,
}

pub async fn run(command: Command, services: &Services) -> anyhow::Result<()> {
    match command {
        Command::Add { record, value } => {
            let record = RecordName::parse(&record)?;
            match services.add_txt.execute(&record, &value).await? {
                AddTxtOutcome::Created(txt) => {
                    println!("created {} (id {})", record, txt.id)
                }
                AddTxtOutcome::AlreadyPresent(txt) => {
                    println!("unchanged {} (id {})", record, txt.id)
                }
            }
        }
        Command::Remove { record, value } => {
            let record = RecordName::parse(&record)?;
            let removed = services.remove_txt.execute(&record, &value).await?;
            println!("removed {} record(s) at {}", removed, record);
        }
        Command::Zone { record, json } => {
            let record = RecordName::parse(&record)?;
            let location = services.resolve_zone.execute(&record).await?;
            if json {
                let out = serde_json::json!({
                    "record": record.as_str(),
                    "account": location.account.as_str(),
                    "zone": location.zone,
                    "relative_name": location.relative_name,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", location.zone);
            }
        }
        Command::Whoami => {
            let account = services.session.account().await?;
            println!("{}", account);
        }
    }

    Ok(())
}
