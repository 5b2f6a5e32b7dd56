//! CareNet kiosk — fetches portal config, initializes the map view, and
//! submits care requests.
//!
//! # Usage
//!
//! ```bash
//! # Fetch config and bring up the map
//! kiosk --base-url http://localhost:3001 map
//!
//! # Submit one care request
//! kiosk submit --requester-name "Li Wei" --patient-name "Li Na" \
//!     --address "12 Changjiang Rd, Hefei" --service-type "Medical Checkup" \
//!     --urgency Normal --description "Routine checkup"
//! ```

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};

use carenet_domain::care_request::{ServiceType, Urgency};
use carenet_kiosk::bootstrap::{MapBootstrap, MapPhase};
use carenet_kiosk::config_api::ConfigApi;
use carenet_kiosk::form::{CareRequestForm, SubmitOutcome};
use carenet_kiosk::map::EsriSdk;

#[derive(Parser)]
#[command(about = "CareNet kiosk client")]
struct Cli {
    /// Base URL of the portal service
    #[arg(long, default_value = "http://localhost:3001")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the config and initialize the map view
    Map,
    /// Fill in and submit one care request
    Submit(SubmitArgs),
}

#[derive(clap::Args)]
struct SubmitArgs {
    #[arg(long)]
    requester_name: String,
    #[arg(long)]
    patient_name: String,
    #[arg(long)]
    address: String,
    /// One of the form's service options
    #[arg(long, value_parser = PossibleValuesParser::new(ServiceType::LABELS))]
    service_type: String,
    /// One of the form's urgency options
    #[arg(long, value_parser = PossibleValuesParser::new(Urgency::LABELS))]
    urgency: String,
    #[arg(long, default_value = "")]
    description: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Map => {
            let api = ConfigApi::new(&cli.base_url);
            let mut bootstrap = MapBootstrap::new();
            bootstrap.run(&api, &EsriSdk).await;

            match bootstrap.phase() {
                MapPhase::MapReady(view) => {
                    println!(
                        "map ready: basemap {} center [{}, {}] zoom {}",
                        view.basemap, view.center[0], view.center[1], view.zoom
                    );
                }
                MapPhase::ConfigLoaded(_) => {
                    eprintln!("config loaded, but it carries no usable API key — map not initialized");
                    std::process::exit(1);
                }
                MapPhase::Failed(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
                MapPhase::Loading => unreachable!("run() always leaves Loading"),
            }
        }
        Command::Submit(args) => {
            let mut form = CareRequestForm::default();
            form.set("requester_name", args.requester_name);
            form.set("patient_name", args.patient_name);
            form.set("address", args.address);
            form.set("service_type", args.service_type);
            form.set("urgency", args.urgency);
            form.set("description", args.description);

            let client = reqwest::Client::new();
            let outcome = form.submit(&client, &cli.base_url).await;
            println!("{}", outcome.notice());
            if outcome != SubmitOutcome::Submitted {
                std::process::exit(1);
            }
        }
    }
}
