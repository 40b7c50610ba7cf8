//! Runs two suggestion servers side by side for comparison.
//!
//! The servers may be different programs; each is started with the
//! `--word_list_path <path> --port <port>` flags they all accept.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{error, info};

/// How to start one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSpec {
    pub binary: PathBuf,
    pub port: u16,
    pub word_list_path: PathBuf,
    /// Inserted before the flags, for programs like this one that serve from a subcommand.
    pub subcommand: Option<String>,
}

impl ServerSpec {
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        if let Some(subcommand) = &self.subcommand {
            command.arg(subcommand);
        }
        command
            .arg("--word_list_path")
            .arg(&self.word_list_path)
            .arg("--port")
            .arg(self.port.to_string());
        command
    }

    /// Start the server and block until it exits, echoing its stdout.
    pub fn run(&self) -> Result<()> {
        let name = self.binary.display().to_string();
        info!(binary = %name, port = self.port, "starting server");

        let mut child = self
            .command()
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start {name} on port {}", self.port))?;

        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                println!("{}", line?);
            }
        }

        let status = child
            .wait()
            .with_context(|| format!("failed to wait for {name}"))?;
        if !status.success() {
            bail!("{name} on port {} exited with {status}", self.port);
        }
        Ok(())
    }
}

/// Start both servers and wait for both to exit.
///
/// A server that fails is logged as soon as it stops, while the other keeps running.
pub fn launch_both(first: ServerSpec, second: ServerSpec) -> Result<()> {
    let (first_result, second_result) = thread::scope(|scope| {
        let first_handle = scope.spawn(|| report(&first, first.run()));
        let second_handle = scope.spawn(|| report(&second, second.run()));
        (join(first_handle), join(second_handle))
    });
    first_result.and(second_result)
}

fn report(spec: &ServerSpec, result: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        error!(binary = %spec.binary.display(), port = spec.port, error = %format!("{err:#}"), "server failed");
    }
    result
}

fn join(handle: thread::ScopedJoinHandle<'_, Result<()>>) -> Result<()> {
    handle
        .join()
        .unwrap_or_else(|_| Err(anyhow!("server thread panicked")))
}
