//! `ryze` command-line entry point

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use ryze_core::{derive_title, render_standalone, UiGenerator};
use ryze_server::{app, app_state, init_tracing, RyzeConfig};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("ryze")
        .version(ryze_server::VERSION)
        .about("Deterministic prompt-to-UI generator")
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write logs as JSON lines"),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to a TOML config file (default: ./ryze.toml if present)"),
                )
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("Bind address"),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .value_parser(value_parser!(u16))
                        .help("Bind port"),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a component from a description")
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .required(true)
                        .help("What to build"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full response as JSON"),
                ),
        )
        .subcommand(
            Command::new("modify")
                .about("Apply a follow-up instruction to a component file")
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .required(true)
                        .help("What to change"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Component source to modify"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full response as JSON"),
                ),
        )
        .subcommand(
            Command::new("package")
                .about("Write a component as a standalone HTML page")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Component source to package"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output HTML path"),
                )
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .help("Prompt used for the page title"),
                ),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));

    match matches.subcommand() {
        Some(("serve", args)) => serve(args).await,
        Some(("generate", args)) => {
            let prompt = required::<String>(args, "prompt")?;
            let resp = UiGenerator::default().generate(prompt)?;
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!("{}", resp.code);
            }
            Ok(())
        }
        Some(("modify", args)) => {
            let prompt = required::<String>(args, "prompt")?;
            let file = required::<PathBuf>(args, "file")?;
            let code = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let resp = UiGenerator::default().modify(prompt, &code)?;
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!("{}", resp.code);
            }
            Ok(())
        }
        Some(("package", args)) => {
            let file = required::<PathBuf>(args, "file")?;
            let out = required::<PathBuf>(args, "out")?;
            let code = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            anyhow::ensure!(!code.trim().is_empty(), "{} is empty", file.display());

            let title = derive_title(args.get_one::<String>("prompt").map(String::as_str));
            let link = out
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let html = render_standalone(&code, &title, &link, &link);
            std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;

            tracing::info!(out = %out.display(), %title, "standalone page written");
            Ok(())
        }
        _ => anyhow::bail!("no command given; see --help"),
    }
}

async fn serve(args: &ArgMatches) -> anyhow::Result<()> {
    let mut config = RyzeConfig::load(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?
        .with_process_env()?;
    if let Some(host) = args.get_one::<String>("host") {
        config = config.with_host(host.clone());
    }
    if let Some(port) = args.get_one::<u16>("port") {
        config = config.with_port(*port);
    }

    let addr = config.bind_addr()?;
    let filter = app(app_state(&config), &config.server);
    let (bound, server) = warp::serve(filter)
        .try_bind_with_graceful_shutdown(addr, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for shutdown signal");
            }
        })
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        addr = %bound,
        public_url = %config.public_base_url(),
        storage = ?config.deployments,
        "ryze server listening"
    );
    server.await;
    tracing::info!("ryze server stopped");
    Ok(())
}

fn required<'a, T>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(name)
        .with_context(|| format!("--{name} is required"))
}
