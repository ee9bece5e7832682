use staffdir::{employees::FetchOptions, Client};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
enum Opt {
    /// Fetch employees from the random-user API.
    Employees {
        /// How many employees to fetch.
        #[structopt(long, short)]
        results: Option<u32>,
        /// Fetch the same employees every time.
        #[structopt(long, short)]
        seed: Option<String>,
        /// Restrict to nationalities, e.g. `--nat gb --nat us`.
        #[structopt(long)]
        nat: Vec<String>,
    },
    /// Add notes to an employee and list them. Notes only live for the
    /// duration of the command.
    Notes {
        employee_id: String,
        /// The notes to add, oldest first.
        notes: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opt = Opt::from_args();
    let client = Client::new()?;

    match opt {
        Opt::Employees { results, seed, nat } => {
            let defaults = client.employees().defaults();
            let opts = FetchOptions {
                results: results.unwrap_or(defaults.results),
                seed: seed.or_else(|| defaults.seed.clone()),
                nationalities: if nat.is_empty() {
                    defaults.nationalities.clone()
                } else {
                    nat
                },
            };
            match client.employees().fetch_with(&opts).await {
                Ok(employees) => println!("{}", serde_json::to_string_pretty(&employees)?),
                Err(e) => {
                    eprintln!("{} {}", e.status_code(), e.public_message());
                    std::process::exit(1);
                }
            }
        }
        Opt::Notes { employee_id, notes } => {
            for content in notes {
                if let Err(e) = client.notes().add(employee_id.as_str(), content) {
                    eprintln!("{} {}", e.status_code(), e.public_message());
                    std::process::exit(1);
                }
            }
            let notes = client.notes().list(&employee_id);
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
    }

    Ok(())
}
