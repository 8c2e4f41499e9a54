//! `peerpoint` command-line client.
//!
//! Drives the same session store, REST client and view-models the browser
//! client uses. The session is persisted in a JSON file so successive
//! invocations stay signed in.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use peerpoint::config::{ClientConfig, DEFAULT_API_BASE_URL, normalize_base_url};
use peerpoint::forum::format::{initials, relative_time, reply_count_label};
use peerpoint::forum::{CommunityFeed, QuestionDraft, QuestionThread};
use peerpoint::session::FileStorage;
use peerpoint::{ApiClient, ApiError, ForumError, RefreshBus, SessionStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `peerpoint login --email <EMAIL> --password <PASSWORD>` first")]
    LoginRequired,
    #[error("no session file location; pass --session-file or set PEERPOINT_SESSION_FILE")]
    NoSessionFile,
    #[error("{}", .0.message())]
    Api(#[from] ApiError),
    #[error("{}", .0.message())]
    Forum(ForumError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ForumError> for CliError {
    fn from(err: ForumError) -> Self {
        if err.needs_login() { Self::LoginRequired } else { Self::Forum(err) }
    }
}

#[derive(Parser, Debug)]
#[command(name = "peerpoint", about = "PeerPoint student Q&A forum CLI")]
struct Cli {
    #[arg(long, env = "PEERPOINT_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Where the signed-in session is kept. Defaults to the user config dir.
    #[arg(long, env = "PEERPOINT_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    Pages(PagesCommand),
    Questions(QuestionsCommand),
    Replies(RepliesCommand),
    /// Print a question and its replies.
    Thread {
        question_id: String,
    },
}

#[derive(Args, Debug)]
struct PagesCommand {
    #[command(subcommand)]
    command: PagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum PagesSubcommand {
    List,
    Get { name: String },
    GetId { id: String },
}

#[derive(Args, Debug)]
struct QuestionsCommand {
    #[command(subcommand)]
    command: QuestionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuestionsSubcommand {
    List {
        page_name: String,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
    },
    Get {
        id: String,
    },
    Create {
        page_name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        page_id: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct RepliesCommand {
    #[command(subcommand)]
    command: RepliesSubcommand,
}

#[derive(Subcommand, Debug)]
enum RepliesSubcommand {
    List {
        question_id: String,
    },
    Create {
        question_id: String,
        #[arg(long)]
        content: String,
    },
    Update {
        id: String,
        #[arg(long)]
        content: String,
    },
    Delete {
        id: String,
    },
}

struct CliContext {
    session: SessionStore<FileStorage>,
    bus: RefreshBus,
}

impl CliContext {
    fn api(&self) -> &ApiClient {
        self.session.api()
    }

    fn require_login(&self) -> Result<(), CliError> {
        if self.session.is_authenticated() { Ok(()) } else { Err(CliError::LoginRequired) }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session_file = cli
        .session_file
        .or_else(default_session_file)
        .ok_or(CliError::NoSessionFile)?;
    let config = ClientConfig { base_url: normalize_base_url(&cli.base_url), ..ClientConfig::from_env() };
    let api = ApiClient::new(&config)?;
    let ctx = CliContext { session: SessionStore::restore(api, FileStorage::new(session_file)), bus: RefreshBus::new() };

    match cli.command {
        Command::Login { email, password } => {
            let auth = ctx.session.login(&email, &password).await?;
            println!("signed in as {} <{}>", auth.name, auth.email);
            Ok(())
        }
        Command::Register { name, email, password } => {
            let auth = ctx.session.register(&name, &email, &password).await?;
            println!("registered and signed in as {} <{}>", auth.name, auth.email);
            Ok(())
        }
        Command::Logout => {
            ctx.session.logout();
            println!("signed out");
            Ok(())
        }
        Command::Whoami => match ctx.session.current_user() {
            Some(user) => print_json(&user),
            None => Err(CliError::LoginRequired),
        },
        Command::Pages(pages) => run_pages(&ctx, pages).await,
        Command::Questions(questions) => run_questions(&ctx, questions).await,
        Command::Replies(replies) => run_replies(&ctx, replies).await,
        Command::Thread { question_id } => run_thread(&ctx, &question_id).await,
    }
}

async fn run_pages(ctx: &CliContext, pages: PagesCommand) -> Result<(), CliError> {
    match pages.command {
        PagesSubcommand::List => print_json(&ctx.api().pages().list().await?),
        PagesSubcommand::Get { name } => print_json(&ctx.api().pages().by_name(&name).await?),
        PagesSubcommand::GetId { id } => print_json(&ctx.api().pages().by_id(&id).await?),
    }
}

async fn run_questions(ctx: &CliContext, questions: QuestionsCommand) -> Result<(), CliError> {
    match questions.command {
        QuestionsSubcommand::List { page_name, page, size } => {
            let size = size.unwrap_or_else(|| ctx.api().page_size());
            print_json(&ctx.api().questions().by_page_paged(&page_name, page, size).await?)
        }
        QuestionsSubcommand::Get { id } => print_json(&ctx.api().questions().get(&id).await?),
        QuestionsSubcommand::Create { page_name, title, description } => {
            ctx.require_login()?;
            let mut feed = CommunityFeed::load(ctx.api(), &page_name).await?;
            let created = feed
                .post_question(&ctx.session, &ctx.bus, &QuestionDraft::new(title, description))
                .await?;
            print_json(&created)
        }
        QuestionsSubcommand::Update { id, title, description, page_id } => {
            ctx.require_login()?;
            print_json(&ctx.api().questions().update(&id, &title, &description, &page_id).await?)
        }
        QuestionsSubcommand::Delete { id } => {
            ctx.require_login()?;
            let thread = QuestionThread::load(ctx.api(), &id).await?;
            thread.delete_question(&ctx.session, &ctx.bus).await?;
            println!("deleted question {id}");
            Ok(())
        }
    }
}

async fn run_replies(ctx: &CliContext, replies: RepliesCommand) -> Result<(), CliError> {
    match replies.command {
        RepliesSubcommand::List { question_id } => print_json(&ctx.api().replies().by_question(&question_id).await?),
        RepliesSubcommand::Create { question_id, content } => {
            ctx.require_login()?;
            let mut thread = QuestionThread::load(ctx.api(), &question_id).await?;
            let reply = thread.post_reply(&ctx.session, &ctx.bus, &content).await?;
            print_json(&reply)
        }
        RepliesSubcommand::Update { id, content } => {
            ctx.require_login()?;
            print_json(&ctx.api().replies().update(&id, &content).await?)
        }
        RepliesSubcommand::Delete { id } => {
            ctx.require_login()?;
            ctx.api().replies().delete(&id).await?;
            println!("deleted reply {id}");
            Ok(())
        }
    }
}

async fn run_thread(ctx: &CliContext, question_id: &str) -> Result<(), CliError> {
    let thread = QuestionThread::load(ctx.api(), question_id).await?;
    let now = OffsetDateTime::now_utc();
    let me = ctx.session.session();
    let q = &thread.question;

    println!("[{}] {}", q.page_name, q.title);
    println!("  {} ({}) · {}", q.user_name, initials(&q.user_name), relative_time(&q.created_at, now));
    if thread.can_delete_question(me.as_ref()) {
        println!("  (yours)");
    }
    println!();
    for line in q.description.lines() {
        println!("  {line}");
    }
    println!();
    println!("{}", reply_count_label(thread.replies.len()));
    if thread.replies.is_empty() {
        println!("  No replies yet. Be the first to answer!");
    }
    for reply in &thread.replies {
        let mine = if QuestionThread::can_delete_reply(reply, me.as_ref()) { " (yours)" } else { "" };
        println!(
            "  - {} ({}) · {}{mine} [{}]",
            reply.user_name,
            initials(&reply.user_name),
            relative_time(&reply.created_at, now),
            reply.id
        );
        for line in reply.content.lines() {
            println!("    {line}");
        }
    }
    Ok(())
}

fn default_session_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("peerpoint").join("session.json"))
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
