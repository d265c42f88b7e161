//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gatekeeper_domain::LoginProvider;
use gatekeeper_domain::request::{Header, HttpMethod};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "gatekeeper")]
#[command(about = "Sign in to the authentication API and make authenticated calls")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./gatekeeper.toml if present)
    #[arg(long, global = true, env = "GATEKEEPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session storage file (default: <config dir>/gatekeeper/storage.json)
    #[arg(long, global = true, env = "GATEKEEPER_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Keep the session in memory only; overrides --storage
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask the backend which login provider suits this client
    Recommend {
        /// Start a login with the recommended provider
        #[arg(long)]
        login: bool,
    },

    /// Start a login with a provider (auth0, google, wechat)
    Login {
        provider: LoginProvider,
    },

    /// Finish a login from the URL the provider redirected to
    Complete {
        /// Redirect URL carrying `token` and profile parameters
        url: Url,
    },

    /// Poll the state of a pending provider login
    Status {
        provider: LoginProvider,
        state: String,
    },

    /// Check the stored token with the backend
    Validate,

    /// Show the signed-in user
    Whoami,

    /// Forget the stored session
    Logout,

    /// Send a request with the session's credentials
    Request {
        /// Absolute URL or path relative to the API base URL
        url: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: HttpMethod,

        /// Extra header as 'Name: value' (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<Header>,

        /// Request body
        #[arg(short = 'd', long = "data")]
        body: Option<String>,
    },
}
