//! `stocklist`: interactive inventory list editor.

use std::io;

use clap::Parser;

use stocklist_shell::{Cli, Shell, ShellConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stocklist_observability::init_with(cli.log_filter(), cli.log_format.into());

    let config = ShellConfig::from(&cli);
    tracing::info!(
        seed_demo = config.seed_demo,
        sort = config.sort.as_str(),
        category = ?config.category,
        "starting editor session"
    );

    let mut shell = Shell::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    shell.run(stdin.lock(), &mut stdout)?;

    tracing::info!("session ended");
    Ok(())
}
