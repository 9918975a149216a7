use clap::Parser;
use tracing::error;

use oobmigration::cli::Cli;
use oobmigration::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = cli.load_config();
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    let _guard = init_logging(&log)?;
    let config = cli.report_config(loaded)?;

    match cli.execute(&config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}
