pub mod commands;

use crate::api::ApiClient;
use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "absenofc", version, about = "Admin console for the AbsenOfc attendance backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Per-office headcount and today's activity
    Dashboard,
    /// Attendance log listing and CSV exports
    #[command(subcommand)]
    Log(LogCommand),
    /// User management
    #[command(subcommand)]
    User(UserCommand),
    /// Office management
    #[command(subcommand)]
    Kantor(KantorCommand),
    /// Role listing
    #[command(subcommand)]
    Role(RoleCommand),
}

#[derive(Subcommand)]
pub enum LogCommand {
    /// Show the transaction log grouped by date
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        kantor: Option<String>,
        /// Match against user name or NIK
        #[arg(long)]
        search: Option<String>,
    },
    /// Export the filtered log as a CSV document
    Export {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        kantor: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Output file name, without the .csv suffix
        #[arg(long, default_value = "log_activity")]
        output: String,
    },
    /// Export one CSV document per known user
    ExportBulk {
        /// Base file name; without one the export is aborted
        #[arg(long)]
        base: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    List {
        #[arg(long)]
        kantor: Option<String>,
        /// Match against name, NIK, email or phone number
        #[arg(long)]
        search: Option<String>,
    },
    /// Profile and attendance log of a single user
    Show { nik: String },
    Add {
        #[arg(long)]
        nik: String,
        #[arg(long)]
        nama: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        tanggallahir: String,
        #[arg(long)]
        nohp: String,
        /// Role id
        #[arg(long)]
        role: String,
        /// Office id
        #[arg(long)]
        kantor: String,
    },
    /// Update profile fields; omitted flags keep their current value
    Update {
        nik: String,
        #[arg(long)]
        nama: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        nohp: Option<String>,
        #[arg(long)]
        tanggallahir: Option<String>,
        /// Role id
        #[arg(long)]
        role: Option<String>,
        /// Office id
        #[arg(long)]
        kantor: Option<String>,
    },
    Delete { nik: String },
}

#[derive(Subcommand)]
pub enum KantorCommand {
    List,
    Add {
        #[arg(long)]
        nama: String,
    },
    Update {
        id: String,
        #[arg(long)]
        nama: String,
    },
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum RoleCommand {
    List,
}

pub async fn run(command: Command, api: &ApiClient, config: &Config) -> Result<()> {
    match command {
        Command::Dashboard => commands::dashboard::run(api).await,
        Command::Log(log) => match log {
            LogCommand::List {
                status,
                kantor,
                search,
            } => commands::logactivity::list(api, status, kantor, search).await,
            LogCommand::Export {
                status,
                kantor,
                search,
                output,
            } => commands::logactivity::export(api, config, status, kantor, search, output).await,
            LogCommand::ExportBulk { base } => {
                commands::logactivity::export_bulk(api, config, base).await
            }
        },
        Command::User(user) => match user {
            UserCommand::List { kantor, search } => {
                commands::users::list(api, kantor, search).await
            }
            UserCommand::Show { nik } => commands::users::show(api, &nik).await,
            UserCommand::Add {
                nik,
                nama,
                email,
                password,
                tanggallahir,
                nohp,
                role,
                kantor,
            } => {
                commands::users::add(
                    api,
                    commands::users::AddUserArgs {
                        nik,
                        nama,
                        email,
                        password,
                        tanggallahir,
                        nohp,
                        role,
                        kantor,
                    },
                )
                .await
            }
            UserCommand::Update {
                nik,
                nama,
                email,
                nohp,
                tanggallahir,
                role,
                kantor,
            } => {
                commands::users::update(
                    api,
                    &nik,
                    commands::users::UpdateUserArgs {
                        nama,
                        email,
                        nohp,
                        tanggallahir,
                        role,
                        kantor,
                    },
                )
                .await
            }
            UserCommand::Delete { nik } => commands::users::delete(api, &nik).await,
        },
        Command::Kantor(kantor) => match kantor {
            KantorCommand::List => commands::kantor::list(api).await,
            KantorCommand::Add { nama } => commands::kantor::add(api, &nama).await,
            KantorCommand::Update { id, nama } => commands::kantor::update(api, &id, &nama).await,
            KantorCommand::Delete { id } => commands::kantor::delete(api, &id).await,
        },
        Command::Role(role) => match role {
            RoleCommand::List => commands::roles::list(api).await,
        },
    }
}
