//! Subcommand handlers.

use std::process::ExitCode;

use gatekeeper_application::{AuthClient, BootstrapOutcome};
use gatekeeper_domain::request::RequestSpec;
use gatekeeper_infrastructure::ConsoleNavigator;

use crate::cli::Commands;

type CommandResult = Result<ExitCode, Box<dyn std::error::Error>>;

pub async fn run(
    client: &AuthClient,
    navigator: &ConsoleNavigator,
    command: Commands,
) -> CommandResult {
    match command {
        Commands::Recommend { login } => {
            let rec = client.smart_login().await?;
            println!("Recommended: {}", rec.recommended_method);
            if !rec.message.is_empty() {
                println!("{}", rec.message);
            }
            if !rec.location_info.is_empty() {
                println!("{}", serde_json::to_string_pretty(&rec.location_info)?);
            }
            if login {
                client.follow_recommendation(&rec).await?;
            }
        }

        Commands::Login { provider } => {
            let redirect = client.login(provider).await?;
            if let Some(state) = redirect.state {
                println!("Login state: {state}");
            }
        }

        Commands::Complete { url } => {
            navigator.set_location(url);
            match client.bootstrap().await? {
                BootstrapOutcome::RedirectCompleted => {
                    if let Some(user) = client.current_user() {
                        println!("Signed in as {}", user.display_name());
                    }
                }
                BootstrapOutcome::SessionValid => {
                    println!("No login in URL; existing session is valid");
                }
                BootstrapOutcome::Anonymous => {
                    eprintln!("No token in URL and no valid session");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Status { provider, state } => {
            let status = client.login_status(provider, &state).await?;
            println!("{}: {}", status.status, status.message);
            if !status.is_finished() {
                println!("Login not finished yet; run again to poll");
                return Ok(ExitCode::from(2));
            }
            if let Some(user) = status.user {
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
        }

        Commands::Validate => {
            if client.validate_token().await {
                println!("Session is valid");
            } else {
                eprintln!("Not logged in");
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Whoami => match client.current_user() {
            Some(user) if client.is_logged_in() => {
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            _ => {
                eprintln!("Not logged in");
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Logout => {
            client.logout();
            println!("Logged out");
        }

        Commands::Request {
            url,
            method,
            headers,
            body,
        } => {
            let mut request = RequestSpec::new(method, url);
            request.headers = headers.into_iter().collect();
            request.body = body;

            let response = client.authenticated_request(request).await?;
            eprintln!(
                "{} ({} ms, {})",
                response.status,
                response.duration.as_millis(),
                response.header("content-type").unwrap_or("no content type")
            );
            println!("{}", response.text());
            if !response.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
