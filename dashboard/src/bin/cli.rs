//! Headless dashboard client.
//!
//! Runs the dashboard flows from a terminal against the configured backend.

use anyhow::{Context, bail};
use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dashboard_client::{DEFAULT_ANALYTICS_DAYS, FONT_OPTIONS, WidgetPosition};
use support_dashboard_lib::config::SettingsManager;
use support_dashboard_lib::notification::Notifier;
use support_dashboard_lib::signup::{SignupForm, SignupView};
use support_dashboard_lib::widget::input::{cap_welcome_message, font_choice, is_picker_color};
use support_dashboard_lib::widget::WidgetField;
use support_dashboard_lib::{AppContext, auth, init_foundation};

#[derive(Parser)]
#[command(name = "support-dashboard", version, about = "Customer-support dashboard client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chat widget settings and installation
    #[command(subcommand)]
    Widget(WidgetCommand),
    /// Create a new dashboard account
    Signup(SignupArgs),
    /// Start a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the signed-in user
    Whoami,
    #[command(subcommand)]
    Documents(ListCommand),
    #[command(subcommand)]
    Sessions(ListCommand),
    #[command(subcommand)]
    Visitors(ListCommand),
    #[command(subcommand)]
    Tickets(ListCommand),
    /// Dashboard overview metrics
    Analytics {
        #[arg(long, default_value_t = DEFAULT_ANALYTICS_DAYS)]
        days: u32,
    },
    /// Local client settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum WidgetCommand {
    /// Print the current configuration
    Show,
    /// Print the installation script tag
    Snippet,
    /// Edit fields and save
    Set(WidgetSetArgs),
    /// Issue a new bot token (the old one stops working immediately)
    RegenerateToken,
}

#[derive(Args)]
struct WidgetSetArgs {
    #[arg(long)]
    primary_color: Option<String>,
    #[arg(long)]
    text_color: Option<String>,
    /// Font label (e.g. "Georgia") or font stack
    #[arg(long)]
    font: Option<String>,
    #[arg(long)]
    position: Option<WidgetPosition>,
    #[arg(long)]
    welcome_message: Option<String>,
}

#[derive(Args)]
struct SignupArgs {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    company_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

#[derive(Subcommand)]
enum ListCommand {
    List,
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    Set { key: String, value: String },
    /// Remove a stored value so the default applies again
    Unset { key: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (db, config, dir) = init_foundation()?;
    let (notifier, worker) = Notifier::spawn();
    let ctx = AppContext::new(db, config, dir, notifier)?;

    let outcome = run(&ctx, cli.command).await;

    // Let queued toasts render before exiting.
    drop(ctx);
    let _ = worker.await;
    outcome
}

async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Widget(cmd) => run_widget(ctx, cmd).await,
        Command::Signup(args) => {
            let mut view = SignupView::new(SignupForm {
                full_name: args.full_name,
                company_name: args.company_name,
                email: args.email,
                password: args.password,
                confirm_password: args.confirm_password,
            });
            let route = view.submit(ctx).await?;
            println!("Next: {}", route.path());
            Ok(())
        }
        Command::Login { email, password } => {
            match auth::login(ctx, &email, &password).await {
                Ok(Some(user)) => println!("Logged in as {} <{}>", user.name, user.email),
                Ok(None) => println!("Logged in"),
                Err(e) => {
                    ctx.notifier().error(e.user_message("Login failed"));
                    return Err(e.into());
                }
            }
            Ok(())
        }
        Command::Logout => {
            auth::logout(ctx).await?;
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => {
            match ctx.store().user() {
                Some(user) => println!("{} <{}> ({})", user.name, user.email, user.id),
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Command::Documents(ListCommand::List) => {
            for doc in ctx.client().list_documents().await? {
                println!(
                    "{}\t{}\t{} bytes\t{}",
                    doc.id,
                    doc.name,
                    doc.size,
                    format_timestamp(&doc.uploaded_at)
                );
            }
            Ok(())
        }
        Command::Sessions(ListCommand::List) => {
            for s in ctx.client().list_sessions().await? {
                println!(
                    "{}\t{}\t{} messages\tlast {}",
                    s.id,
                    s.visitor_name,
                    s.message_count,
                    format_timestamp(&s.last_message_at)
                );
            }
            Ok(())
        }
        Command::Visitors(ListCommand::List) => {
            for v in ctx.client().list_visitors().await? {
                println!(
                    "{}\t{}\t{}\t{} messages\tactive {}",
                    v.id,
                    v.name,
                    v.email.as_deref().unwrap_or("-"),
                    v.total_messages,
                    format_timestamp(&v.last_active)
                );
            }
            Ok(())
        }
        Command::Tickets(ListCommand::List) => {
            print_json(&ctx.client().list_tickets().await?)
        }
        Command::Analytics { days } => print_json(&ctx.client().analytics_dashboard(days).await?),
        Command::Config(ConfigCommand::Show) => {
            let sm = SettingsManager::new(ctx.db().clone());
            for s in sm.get_all_settings()? {
                println!("{} = {:?}\t# {}", s.key, s.value, s.description);
            }
            Ok(())
        }
        Command::Config(ConfigCommand::Set { key, value }) => {
            SettingsManager::new(ctx.db().clone()).set_setting(&key, &value)?;
            println!("{key} updated");
            Ok(())
        }
        Command::Config(ConfigCommand::Unset { key }) => {
            if SettingsManager::new(ctx.db().clone()).reset_setting(&key)? {
                println!("{key} reset to default");
            } else {
                println!("{key} was not set");
            }
            Ok(())
        }
    }
}

async fn run_widget(ctx: &AppContext, cmd: WidgetCommand) -> anyhow::Result<()> {
    let mut view = ctx.widget_settings()?;

    // Failures are toasted by the view; the CLI only turns them into an exit code.
    match cmd {
        WidgetCommand::Show => {
            view.load().await?;
            let s = view.draft();
            println!("Bot token:        {}", s.bot_token);
            println!("Primary color:    {}", s.primary_color);
            println!("Text color:       {}", s.text_color);
            println!("Font family:      {}", s.font_family);
            println!("Position:         {}", s.position.label());
            println!("Welcome message:  {}", s.welcome_message);
            println!("                  {}", view.welcome_counter());
        }
        WidgetCommand::Snippet => {
            view.load().await?;
            println!("{}", view.install_snippet());
        }
        WidgetCommand::Set(args) => {
            view.load()
                .await
                .context("refusing to save without the current settings")?;
            for field in fields_from_args(args)? {
                view.update_field(field);
            }
            if !view.is_dirty() {
                tracing::info!("No changes; saving anyway");
            }
            view.save().await?;
        }
        WidgetCommand::RegenerateToken => {
            view.regenerate_token().await?;
            println!("{}", view.draft().bot_token);
            println!("Replace the installed snippet with:");
            println!("{}", view.install_snippet());
        }
    }
    Ok(())
}

/// Apply the same affordances as the customization form.
fn fields_from_args(args: WidgetSetArgs) -> anyhow::Result<Vec<WidgetField>> {
    let mut fields = Vec::new();

    if let Some(color) = args.primary_color {
        warn_unless_picker_color("primary", &color);
        fields.push(WidgetField::PrimaryColor(color));
    }
    if let Some(color) = args.text_color {
        warn_unless_picker_color("text", &color);
        fields.push(WidgetField::TextColor(color));
    }

    if let Some(font) = args.font {
        let Some(value) = font_choice(&font) else {
            let labels: Vec<_> = FONT_OPTIONS.iter().map(|(label, _)| *label).collect();
            bail!("unknown font '{font}'; choose one of: {}", labels.join(", "));
        };
        fields.push(WidgetField::FontFamily(value.to_string()));
    }

    if let Some(position) = args.position {
        fields.push(WidgetField::Position(position));
    }

    if let Some(message) = args.welcome_message {
        let accepted = cap_welcome_message(&message);
        if accepted.len() < message.len() {
            tracing::warn!("Welcome message truncated to 500 characters");
        }
        fields.push(WidgetField::WelcomeMessage(accepted));
    }

    Ok(fields)
}

fn warn_unless_picker_color(name: &str, color: &str) {
    if !is_picker_color(color) {
        tracing::warn!("{name} color '{color}' is not in #RRGGBB form");
    }
}

fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
