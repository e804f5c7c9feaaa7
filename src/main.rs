use anyhow::Context;
use clap::Parser;
use heartlist::cli::Cli;
use heartlist::store::ListStore;
use heartlist::ui::list::ListState;
use heartlist::ui::render::row_line;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    heartlist::logging::init_tracing();

    let config = cli.resolve_config().context("failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    if cli.print {
        print_list(&ListState::seeded(config.store.seed_count));
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let store = ListStore::with_handle(config.store_settings(), runtime.handle().clone());
    heartlist::ui::runtime::run(store, config.tick_rate(), runtime.handle())
        .context("terminal UI failed")?;
    Ok(())
}

fn print_list(state: &ListState) {
    for item in &state.items {
        let line: String = row_line(item)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        println!("{}", line);
    }
}
