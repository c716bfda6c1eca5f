use anyhow::{Context, bail};
use clap::Parser;
use findmyip_core::{IpInfo, IpInfoViewModel, IpapiService};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "findmyip", version, about = "Look up your public IP geolocation")]
pub struct Cli {
    /// Print the raw record as JSON instead of the formatted summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut view_model = IpInfoViewModel::new(Box::new(IpapiService::new()));
        view_model.fetch_ip_info().await;

        if let Some(message) = view_model.error_message() {
            bail!("{message}");
        }

        // The view model guarantees one of the two fields is set after a fetch.
        let info = view_model
            .ip_info()
            .context("Fetch completed without a record or an error message")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(info)?);
        } else {
            print_summary(info);
        }

        Ok(())
    }
}

fn print_summary(info: &IpInfo) {
    println!("IP:        {} ({})", info.ip, info.version);
    println!("Network:   {}", info.network);
    println!("Location:  {}, {}, {}", info.city, info.region, info.country_name);
    println!("Position:  {}, {}", info.latitude, info.longitude);
    println!("Timezone:  {} (UTC{})", info.timezone, info.utc_offset);
    println!("Currency:  {} ({})", info.currency_name, info.currency);
    println!("ASN/Org:   {} / {}", info.asn, info.org);
}
