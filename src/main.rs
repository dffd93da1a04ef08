mod cli;
mod constant;
mod default_config;
mod jenkins;
mod pretty_log;
mod verifier_error;
mod verify;

use crate::cli::{cli_do_verify, resolve_connection};
use crate::verifier_error::VerifierError;
use crate::verify::harness_config::HarnessConfig;
use clap::Parser;
use std::io::stdout;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(name = "Jenkins Verifier",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about = None
)]
struct Cli {
    /// Jenkins Server URL.
    #[arg(long, env = "JENKINS_URL")]
    url: Option<String>,

    /// Jenkins User ID.
    #[arg(long, env = "JENKINS_USER")]
    user: Option<String>,

    /// Jenkins API Token.
    /// See also: https://www.jenkins.io/doc/book/using/remote-access-api/
    #[arg(long, env = "JENKINS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Job Name.
    #[arg(long)]
    job: String,

    /// give up waiting for a build number after this many queue checks.
    #[arg(long, value_name = "COUNT")]
    queue_poll_limit: Option<u32>,

    /// give up waiting for the build after this many status checks.
    #[arg(long, value_name = "COUNT")]
    build_poll_limit: Option<u32>,

    /// poll until Jenkins reports a terminal state, however long it takes.
    #[arg(long, conflicts_with_all = ["queue_poll_limit", "build_poll_limit"])]
    no_poll_limit: bool,
}

impl Cli {
    fn harness_config(&self) -> HarnessConfig {
        let config = HarnessConfig::default();
        if self.no_poll_limit {
            config.without_poll_limit()
        } else {
            config.with_poll_limits(self.queue_poll_limit, self.build_poll_limit)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = stdout();

    match main_cli(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            err.colored_println(&mut stdout);
            ExitCode::from(1)
        }
    }
}

async fn main_cli(cli: Cli) -> Result<(), VerifierError> {
    let mut stdout = stdout();
    let config = cli.harness_config();
    let connection = resolve_connection(cli.url, cli.user, cli.token)?;

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    cli_do_verify(&mut stdout, connection, &cli.job, config, cancel).await
}
