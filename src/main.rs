use anyhow::Result;
use mdtoc::{cli::parse_args, run_mdtoc};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = parse_args()?;
    run_mdtoc(config).await
}
