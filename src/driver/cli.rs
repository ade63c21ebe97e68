//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// 研修セッションの出欠・署名・通知を管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "formtrack")]
#[command(about = "Track training sessions, signatures and operator notifications", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.formtrack/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Import a convention document and create the sessions it describes
    Ingest {
        /// Path to the convention document (PDF, JPG, PNG)
        file: String,

        /// Override the MIME type guessed from the file extension
        #[arg(long)]
        mime: Option<String>,
    },

    /// List sessions
    List {
        /// Only sessions assigned to this trainer
        #[arg(long)]
        trainer: Option<String>,

        /// Only sessions on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show one session with its participants
    Show {
        /// Session id
        session_id: String,
    },

    /// Record a participant signature
    Sign {
        /// Session id
        session_id: String,
        /// Participant id
        participant_id: String,
        /// Path to the signature image file
        signature_file: String,
    },

    /// Close a session with the trainer signature
    Finalize {
        /// Session id
        session_id: String,
        /// Path to the trainer signature image file
        signature_file: String,
    },

    /// Change the trainer assigned to a session
    RenameTrainer {
        /// Session id
        session_id: String,
        /// New trainer name
        name: String,
    },

    /// Change the company name of a session
    RenameCompany {
        /// Session id
        session_id: String,
        /// New company name
        name: String,
    },

    /// Add a participant to a session
    AddParticipant {
        /// Session id
        session_id: String,
        /// Participant name
        name: String,
    },

    /// Build certificate data for a signed participant
    Certificate {
        /// Session id
        session_id: String,
        /// Participant id
        participant_id: String,
    },

    /// Manage the notification log
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationCommand>,
    },

    /// Run the notification poll loop (check at startup, then periodically)
    Watch,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotificationCommand {
    /// List notifications, newest first
    List,

    /// Mark a notification as read
    MarkRead {
        /// Notification id
        notification_id: String,
    },

    /// Clear all notifications
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["formtrack", "list"]);
        assert_eq!(args.config, "./.formtrack/config.json");
        assert!(matches!(
            args.command,
            Command::List {
                trainer: None,
                date: None
            }
        ));
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["formtrack", "-c", "/custom/config.json", "watch"]);
        assert_eq!(args.config, "/custom/config.json");
        assert!(matches!(args.command, Command::Watch));
    }

    #[test]
    fn test_args_list_filters() {
        let args = Args::parse_from([
            "formtrack",
            "list",
            "--trainer",
            "Rali El kohen",
            "--date",
            "2024-01-10",
        ]);

        match args.command {
            Command::List { trainer, date } => {
                assert_eq!(trainer.as_deref(), Some("Rali El kohen"));
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 10));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_sign() {
        let args = Args::parse_from(["formtrack", "sign", "s1", "p1", "/tmp/sig.png"]);

        match args.command {
            Command::Sign {
                session_id,
                participant_id,
                signature_file,
            } => {
                assert_eq!(session_id, "s1");
                assert_eq!(participant_id, "p1");
                assert_eq!(signature_file, "/tmp/sig.png");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_ingest_with_mime() {
        let args = Args::parse_from([
            "formtrack",
            "ingest",
            "convention.pdf",
            "--mime",
            "application/pdf",
        ]);

        match args.command {
            Command::Ingest { file, mime } => {
                assert_eq!(file, "convention.pdf");
                assert_eq!(mime.as_deref(), Some("application/pdf"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_notifications_default_action() {
        let args = Args::parse_from(["formtrack", "notifications"]);

        match args.command {
            Command::Notifications { action } => assert!(action.is_none()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_notifications_mark_read() {
        let args = Args::parse_from(["formtrack", "notifications", "mark-read", "pre-s1"]);

        match args.command {
            Command::Notifications {
                action: Some(NotificationCommand::MarkRead { notification_id }),
            } => assert_eq!(notification_id, "pre-s1"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
