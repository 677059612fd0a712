use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use qr_form::cli::{self, Args, Command};
use qr_form::config::Config;
use qr_form::encoder::QrEncoder;
use qr_form::event_loop;
use qr_form::session::FormSession;
use qr_form::terminal::{StatusBar, Tui};

/// Run the interactive form until the user quits.
fn run_form(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(form_main(args, config))
}

async fn form_main(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (mut session, mut outcomes) = FormSession::new(Arc::new(QrEncoder::new()));
    if let Some(ref code) = args.code {
        session.input(code);
    }

    let mut status_bar = StatusBar::with_visibility(config.ui.status_bar && !args.no_status);
    let export_dir = config.export.directory();

    let mut tui = Tui::new()?;
    let result = event_loop::run(
        &mut tui,
        &mut session,
        &mut outcomes,
        &mut status_bar,
        &export_dir,
    )
    .await;
    tui.restore()?;
    result
}

/// Run the generate subcommand and report the written file.
fn run_generate(
    code: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = tokio::runtime::Runtime::new()?;
    let path = rt.block_on(cli::generate(
        code,
        output,
        &config.export.directory(),
        &QrEncoder::new(),
    ))?;
    println!("QR code written to {}", path.display());
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Some(Command::Generate {
            ref code,
            ref output,
        }) => run_generate(code, output.as_deref(), &config),
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref(), &config)
                .map_err(Into::into)
        }
        None => run_form(&args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
