use codat::areas::repository::Repository;
use codat::artifacts::core::settings::{LOG_ENV, Settings};
use codat::errors::CodatError;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "codat",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny delta-based version control system",
    long_about = "codat keeps the history of a directory as chains of per-file text deltas. \
    It supports a single linear branch and can exchange files with a codat server.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}

OPTIONS:
    {options}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates an empty .codat repository in the current directory."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command records the current fingerprint of a file in the index. \
        Staged files stay tracked by every later commit."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staged files",
        long_about = "This command stores, for every staged file, the delta from its content \
        at HEAD to its current content."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists modified, missing, untracked and unchanged files."
    )]
    Status,
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command prints every commit from HEAD back to the root commit."
    )]
    Log,
    #[command(
        name = "show",
        about = "Print a file as of a given commit",
        long_about = "This command rebuilds a file from its delta chain. \
        The commit may be HEAD, a full hash or a unique prefix of at least four characters."
    )]
    Show {
        #[arg(index = 1, help = "The commit to read from")]
        commit: String,
        #[arg(index = 2, help = "The file to print")]
        file: String,
    },
    #[command(
        name = "clone",
        about = "Clone a codat",
        long_about = "This command downloads a codat into a directory named after the file."
    )]
    Clone {
        #[arg(index = 1, help = "The codat link")]
        link: String,
    },
    #[command(
        name = "set-origin",
        about = "Set the remote codat origin",
        long_about = "This command stores the codat link that push uploads to."
    )]
    SetOrigin {
        #[arg(index = 1, help = "The codat link")]
        link: String,
    },
    #[command(
        name = "set-token",
        about = "Set the codat config token",
        long_about = "This command stores the token used to authenticate pushes."
    )]
    SetToken {
        #[arg(index = 1, help = "The authentication token")]
        token: String,
    },
    #[command(
        name = "push",
        about = "Push a file to the origin codat",
        long_about = "This command uploads a file and its detected language to the origin codat."
    )]
    Push {
        #[arg(index = 1, help = "The file to push")]
        file: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error);

            let code = error
                .downcast_ref::<CodatError>()
                .map(CodatError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load_from_env()?;
    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(
        &pwd.to_string_lossy(),
        Box::new(std::io::stdout()),
        settings,
    )?;

    match &cli.command {
        Commands::Init => repository.init().await,
        Commands::Add { file } => repository.add(file).await,
        Commands::Commit { message } => repository.commit(message).await,
        Commands::Status => repository.status().await,
        Commands::Log => repository.log().await,
        Commands::Show { commit, file } => repository.show(commit, file).await,
        Commands::Clone { link } => repository.clone_codat(link).await,
        Commands::SetOrigin { link } => repository.set_origin(link).await,
        Commands::SetToken { token } => repository.set_token(token).await,
        Commands::Push { file } => repository.push(file).await,
    }
}
