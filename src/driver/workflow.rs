//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use base64::Engine as _;
use chrono::Local;
use log::info;

use std::sync::Arc;
use std::time::Duration;

use crate::adapter::config::Config;
use crate::adapter::gemini::client::RealGeminiClient;
use crate::adapter::notifier::LogNotifier;
use crate::adapter::repositories::gemini_intake_repository::GeminiIntakeRepository;
use crate::adapter::repositories::gemini_objective_repository::GeminiObjectiveRepository;
use crate::adapter::repositories::json_state_repository::JsonStateRepository;
use crate::application::dto::app_config::AppSettings;
use crate::application::notification_log::NotificationLog;
use crate::application::session_store::SessionStore;
use crate::application::use_cases::ingest_convention::IngestConventionUseCase;
use crate::application::use_cases::issue_certificate::IssueCertificateUseCase;
use crate::application::use_cases::poll_notifications::PollNotificationsUseCase;
use crate::domain::entities::training_session::{TrainingSession, TrainingStatus};
use crate::domain::repositories::state_repository::{AppState, StateRepository};

use super::cli::{Args, Command, NotificationCommand};

/// Guess the MIME type of an uploaded document from its extension
pub fn guess_mime_type(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Wrap raw signature bytes into the data-URL form stored on sessions
pub fn signature_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// French status label for listings
pub fn status_label(status: TrainingStatus) -> &'static str {
    match status {
        TrainingStatus::Scheduled => "Planifiée",
        TrainingStatus::InProgress => "En cours",
        TrainingStatus::Completed => "Clôturée",
        TrainingStatus::Archived => "Archivée",
    }
}

/// Training Session Workflow
pub struct TrainingWorkflow {
    settings: AppSettings,
    config: Config,
    state_repository: Arc<JsonStateRepository>,
}

impl TrainingWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let settings = AppSettings::new(
            config.state_path.clone(),
            config.default_trainer.clone(),
            config.poll_interval_secs,
        );

        Self {
            settings,
            config,
            state_repository: Arc::new(JsonStateRepository::new()),
        }
    }

    /// Execute the requested command
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting formtrack...");

        // Load persisted state and hand ownership to the store / log
        let state = self.state_repository.load(&self.settings.state_path).await?;
        let store = Arc::new(SessionStore::from_sessions(state.sessions));
        let log = Arc::new(NotificationLog::from_entries(state.notifications));

        match args.command {
            Command::Ingest { file, mime } => {
                self.run_ingest(&store, &log, &file, mime.as_deref()).await?;
            }
            Command::List { trainer, date } => {
                let sessions = match (trainer, date) {
                    (Some(name), _) => store.list_by_trainer(&name),
                    (None, Some(date)) => store.sessions_on(date),
                    (None, None) => store.list(),
                };

                if sessions.is_empty() {
                    println!("No sessions found.");
                } else {
                    for session in &sessions {
                        print_session_line(session);
                    }
                }
            }
            Command::Show { session_id } => {
                let session = store.get(&session_id)?;
                print_session_detail(&session);
            }
            Command::Sign {
                session_id,
                participant_id,
                signature_file,
            } => {
                let signature = read_signature(&signature_file)?;
                let updated = store.sign_participant(&session_id, &participant_id, signature)?;
                println!(
                    "✓ Signature recorded ({}% signed)",
                    updated.signature_progress()
                );
                self.save_state(&store, &log).await?;
            }
            Command::Finalize {
                session_id,
                signature_file,
            } => {
                let signature = read_signature(&signature_file)?;
                let updated = store.finalize(&session_id, signature)?;
                println!(
                    "✓ Session closed: {} ({})",
                    updated.training_name,
                    status_label(updated.status)
                );
                self.save_state(&store, &log).await?;
            }
            Command::RenameTrainer { session_id, name } => {
                let updated = store.rename_trainer(&session_id, &name)?;
                println!(
                    "✓ Trainer set to {} (status: {})",
                    updated.trainer_name,
                    status_label(updated.status)
                );
                self.save_state(&store, &log).await?;
            }
            Command::RenameCompany { session_id, name } => {
                let updated = store.rename_company(&session_id, &name)?;
                println!("✓ Company set to {}", updated.company_name);
                self.save_state(&store, &log).await?;
            }
            Command::AddParticipant { session_id, name } => {
                let updated = store.add_participant(&session_id, &name)?;
                println!(
                    "✓ Participant added ({} on the roster)",
                    updated.participants.len()
                );
                self.save_state(&store, &log).await?;
            }
            Command::Certificate {
                session_id,
                participant_id,
            } => {
                let objective_repo = Arc::new(GeminiObjectiveRepository::new(Arc::new(
                    self.gemini_client(),
                )));
                let use_case = IssueCertificateUseCase::new(store.clone(), objective_repo);
                let cert = use_case.execute(&session_id, &participant_id).await?;

                println!("✓ Attestation — {}", cert.participant_name);
                println!("  Formation : {}", cert.training_name);
                println!("  Société   : {}", cert.company_name);
                println!("  Date      : {} ({})", cert.date.format("%d/%m/%Y"), cert.duration);
                println!("  Objectifs pédagogiques :");
                for objective in &cert.objectives {
                    println!("    - {}", objective);
                }
            }
            Command::Notifications { action } => {
                match action.unwrap_or(NotificationCommand::List) {
                    NotificationCommand::List => {
                        let entries = log.snapshot();
                        if entries.is_empty() {
                            println!("Aucune nouvelle notification");
                        } else {
                            println!("{} unread", log.unread_count());
                            for entry in &entries {
                                let marker = if entry.read { " " } else { "●" };
                                println!("{} [{}] {} — {}", marker, entry.id, entry.title, entry.message);
                            }
                        }
                    }
                    NotificationCommand::MarkRead { notification_id } => {
                        log.mark_read(&notification_id)?;
                        println!("✓ Marked {} as read", notification_id);
                        self.save_state(&store, &log).await?;
                    }
                    NotificationCommand::Clear => {
                        log.clear_all();
                        println!("✓ Notifications cleared");
                        self.save_state(&store, &log).await?;
                    }
                }
            }
            Command::Watch => {
                self.run_watch(&store, &log).await?;
            }
        }

        Ok(())
    }

    /// Import a convention document and create its sessions
    async fn run_ingest(
        &self,
        store: &Arc<SessionStore>,
        log: &Arc<NotificationLog>,
        file: &str,
        mime_override: Option<&str>,
    ) -> Result<()> {
        if self.config.gemini_api_key.is_empty() {
            anyhow::bail!("Gemini API key is not configured (set gemini_api_key in the config file)");
        }

        let document = std::fs::read(file)?;
        let mime_type = mime_override.unwrap_or_else(|| guess_mime_type(file));
        println!("✓ Read {} ({} bytes, {})", file, document.len(), mime_type);

        let intake_repo = Arc::new(GeminiIntakeRepository::new(Arc::new(self.gemini_client())));
        let use_case = IngestConventionUseCase::new(intake_repo, store.clone());

        let today = Local::now().date_naive();
        let created = use_case
            .execute(&document, mime_type, &self.settings.default_trainer, today)
            .await?;

        println!("✓ Created {} session(s):", created.len());
        for session in &created {
            print_session_line(session);
        }

        self.save_state(store, log).await
    }

    /// Run the notification poll loop for the lifetime of the process
    async fn run_watch(
        &self,
        store: &Arc<SessionStore>,
        log: &Arc<NotificationLog>,
    ) -> Result<()> {
        let notifier = Arc::new(LogNotifier::new());
        let use_case = PollNotificationsUseCase::new(store.clone(), log.clone(), notifier);

        println!(
            "✓ Watching {} session(s), checking every {} s",
            store.list().len(),
            self.settings.poll_interval_secs
        );

        let mut interval =
            tokio::time::interval(Duration::from_secs(self.settings.poll_interval_secs.max(1)));

        // First tick fires immediately: the startup check
        loop {
            interval.tick().await;

            let now = Local::now().naive_local();
            let new_notifications = use_case.execute(now).await?;

            if !new_notifications.is_empty() {
                info!("Derived {} new notification(s)", new_notifications.len());
                self.save_state(store, log).await?;
            }
        }
    }

    fn gemini_client(&self) -> RealGeminiClient {
        RealGeminiClient::new(
            self.config.gemini_api_key.clone(),
            self.config.gemini_model.clone(),
            self.config.gemini_base_url.clone(),
        )
    }

    /// Persist the current store and notification log
    async fn save_state(
        &self,
        store: &Arc<SessionStore>,
        log: &Arc<NotificationLog>,
    ) -> Result<()> {
        let state = AppState {
            sessions: store.list(),
            notifications: log.snapshot(),
        };
        self.state_repository
            .save(&self.settings.state_path, &state)
            .await
    }
}

/// Read a signature image file as a data URL
fn read_signature(path: &str) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(signature_data_url(guess_mime_type(path), &bytes))
}

fn print_session_line(session: &TrainingSession) {
    println!(
        "  - {} | {} | {} | {} | {}",
        session.id,
        session.date.format("%d/%m/%Y"),
        session.training_name,
        session.company_name,
        status_label(session.status)
    );
}

fn print_session_detail(session: &TrainingSession) {
    println!("{}", session.training_name);
    println!("  Société   : {}", session.company_name);
    println!(
        "  Date      : {} à {}",
        session.date.format("%d/%m/%Y"),
        session.starts_at().format("%H:%M")
    );
    println!("  Formateur : {}", session.trainer_name);
    println!("  Statut    : {}", status_label(session.status));
    println!(
        "  Émargement: {}% ({}/{})",
        session.signature_progress(),
        session.signed_count(),
        session.participants.len()
    );
    for participant in &session.participants {
        let marker = if participant.has_signed { "✓" } else { "✗" };
        println!("    {} {} [{}]", marker, participant.name, participant.id);
    }
}
