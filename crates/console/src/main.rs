use anyhow::Context;

use stockroom_console::Console;
use stockroom_infra::{CatalogConfig, InMemoryProductRepository, ProductCatalogService};

fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::from_env().context("failed to load configuration")?;
    stockroom_observability::init_with(&config.tracing);

    let service = ProductCatalogService::new(InMemoryProductRepository::new());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), service);

    tracing::info!("catalog console started");
    console.run()
}
