use clap::Parser;
use run_report::cli::commands::cmd_render;
use run_report::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_report::logging::init(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render {
            events,
            output_dir,
            title,
            console,
        } => {
            let all_passed = cmd_render(
                &events,
                &output_dir,
                title.as_deref(),
                console,
                &config.report,
            )?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
