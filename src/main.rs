use bank::prelude::*;

#[tokio::main]
async fn main() {
    init_logging();

    let config = match CliConfig::from_args(std::env::args()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    CliApp::new("bank")
        .run(|writer| run_ledger(config, writer))
        .await
}
