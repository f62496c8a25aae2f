//! inventario-client CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use inventario_client::cli::{Cli, Commands, OutputFormat};
use inventario_client::client::InventarioClient;
use inventario_client::output::{format_output, pretty};
use inventario_client::ClientError;
use inventario_core::routes;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventario_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "command failed");
            match cli.format {
                OutputFormat::Json => match error.as_http() {
                    Some(http) => eprintln!("{}", format_output(http, cli.format)),
                    None => eprintln!(
                        "{}",
                        format_output(
                            &serde_json::json!({ "message": error.to_string() }),
                            cli.format
                        )
                    ),
                },
                OutputFormat::Pretty => {}
            }
            eprintln!("{}", error.user_message(cli.locale));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ClientError> {
    let client = InventarioClient::from_config(&cli.config());

    match &cli.command {
        Commands::Users(users_cmd) => {
            use inventario_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List => {
                    let users = client.list_users().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&users, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_records("USERS", &users))
                        }
                    }
                }
            }
        }
        Commands::Devices(devices_cmd) => {
            use inventario_client::cli::devices::DevicesAction;
            match devices_cmd.action {
                DevicesAction::List => {
                    let devices = client.list_devices().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&devices, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_records("DEVICES", &devices))
                        }
                    }
                }
            }
        }
        Commands::Upload { file } => {
            let summary = client.upload_csv_file(file).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&summary, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Uploaded {}:", file.display());
                    }
                    println!("{}", format_output(&summary, cli.format))
                }
            }
        }
        Commands::Get { path } => {
            if !path.starts_with('/') {
                return Err(ClientError::InvalidInput(format!(
                    "path must start with '/': {path}"
                )));
            }
            let value: serde_json::Value = client.get_json(path).await?;
            println!("{}", format_output(&value, cli.format));
        }
        Commands::Routes(routes_cmd) => {
            use inventario_client::cli::routes::RoutesAction;
            match &routes_cmd.action {
                RoutesAction::List => {
                    let entries = routes().sorted();
                    match cli.format {
                        OutputFormat::Json => {
                            let map: serde_json::Map<String, serde_json::Value> = entries
                                .iter()
                                .map(|(path, page)| (path.to_string(), serde_json::json!(page)))
                                .collect();
                            println!("{}", format_output(&map, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_routes(&entries, cli.locale))
                        }
                    }
                }
                RoutesAction::Resolve { path } => match routes().lookup(path) {
                    Some(page) => match cli.format {
                        OutputFormat::Json => println!(
                            "{}",
                            format_output(
                                &serde_json::json!({
                                    "path": path,
                                    "page": page,
                                    "title": page.title(cli.locale),
                                }),
                                cli.format
                            )
                        ),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_route(path, page, cli.locale))
                        }
                    },
                    None => {
                        return Err(ClientError::InvalidInput(format!(
                            "no page is mounted at {path}"
                        )));
                    }
                },
            }
        }
    }

    Ok(())
}
