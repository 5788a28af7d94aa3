//! Startup registration table for the automated routes.
//!
//! Cron jobs are triggered by the scheduler under `/cron/`; task-queue workers
//! are triggered by queued tasks under `/worker/`. Two legacy `/auto/` workers
//! are still recognized but no longer wired to an implementation.

use crate::actions::{
    AdminPrepareEmailWorkerHandler, AdminSendEmailWorkerHandler, CompileLogsHandler,
    CourseJoinRemindEmailWorkerHandler, FeedbackSessionClosedRemindersHandler,
    FeedbackSessionClosingRemindersHandler, FeedbackSessionOpeningRemindersHandler,
    FeedbackSessionPublishedRemindersHandler, FeedbackSessionRemindEmailWorkerHandler,
    FeedbackSessionRemindParticularUsersEmailWorkerHandler, SendEmailWorkerHandler,
};
use crate::registry::{Registry, RegistryBuilder};

// Cron jobs
pub const LOG_COMPILATION: &str = "/cron/logCompilation";
pub const FEEDBACK_OPENING_REMINDERS: &str = "/cron/feedbackSessionOpeningReminders";
pub const FEEDBACK_CLOSED_REMINDERS: &str = "/cron/feedbackSessionClosedReminders";
pub const FEEDBACK_CLOSING_REMINDERS: &str = "/cron/feedbackSessionClosingReminders";
pub const FEEDBACK_PUBLISHED_REMINDERS: &str = "/cron/feedbackSessionPublishedReminders";

// Task queue workers
pub const ADMIN_PREPARE_EMAIL_WORKER: &str = "/worker/adminPrepareEmail";
pub const ADMIN_SEND_EMAIL_WORKER: &str = "/worker/adminSendEmail";
pub const COURSE_JOIN_REMIND_EMAIL_WORKER: &str = "/worker/courseJoinRemindEmail";
pub const EMAIL_WORKER: &str = "/auto/emailWorker";
pub const FEEDBACK_SESSION_REMIND_EMAIL_WORKER: &str = "/worker/feedbackSessionRemindEmail";
pub const FEEDBACK_SESSION_REMIND_PARTICULAR_USERS_EMAIL_WORKER: &str =
    "/worker/feedbackSessionRemindParticularUsersEmail";
pub const FEEDBACK_SUBMISSION_ADJUSTMENT_WORKER: &str = "/auto/feedbackSubmissionAdjustmentWorker";
pub const SEND_EMAIL_WORKER: &str = "/worker/sendEmail";

/// Add every automated route to `builder`.
pub fn register_defaults(builder: &mut RegistryBuilder) -> &mut RegistryBuilder {
    builder
        .map::<CompileLogsHandler>(LOG_COMPILATION)
        .map::<FeedbackSessionOpeningRemindersHandler>(FEEDBACK_OPENING_REMINDERS)
        .map::<FeedbackSessionClosedRemindersHandler>(FEEDBACK_CLOSED_REMINDERS)
        .map::<FeedbackSessionClosingRemindersHandler>(FEEDBACK_CLOSING_REMINDERS)
        .map::<FeedbackSessionPublishedRemindersHandler>(FEEDBACK_PUBLISHED_REMINDERS);

    builder
        .map::<AdminPrepareEmailWorkerHandler>(ADMIN_PREPARE_EMAIL_WORKER)
        .map::<AdminSendEmailWorkerHandler>(ADMIN_SEND_EMAIL_WORKER)
        .map::<CourseJoinRemindEmailWorkerHandler>(COURSE_JOIN_REMIND_EMAIL_WORKER)
        .unmapped(EMAIL_WORKER)
        .map::<FeedbackSessionRemindEmailWorkerHandler>(FEEDBACK_SESSION_REMIND_EMAIL_WORKER)
        .map::<FeedbackSessionRemindParticularUsersEmailWorkerHandler>(
            FEEDBACK_SESSION_REMIND_PARTICULAR_USERS_EMAIL_WORKER,
        )
        .unmapped(FEEDBACK_SUBMISSION_ADJUSTMENT_WORKER)
        .map::<SendEmailWorkerHandler>(SEND_EMAIL_WORKER)
}

/// The registry the service runs with.
pub fn default_registry() -> Registry {
    let mut builder = Registry::builder();
    register_defaults(&mut builder);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        assert_eq!(registry.len(), 13);

        let unmapped: Vec<&str> = registry
            .routes()
            .into_iter()
            .filter(|(_, d)| d.is_unmapped())
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(unmapped, vec![EMAIL_WORKER, FEEDBACK_SUBMISSION_ADJUSTMENT_WORKER]);
    }

    #[test]
    fn test_every_mapped_route_instantiates() {
        let registry = default_registry();
        for (identifier, descriptor) in registry.iter() {
            if descriptor.is_unmapped() {
                continue;
            }
            let action = registry.instantiate(identifier).unwrap();
            assert_eq!(Some(action.name()), descriptor.name(), "{identifier}");
        }
    }

    #[test]
    fn test_log_compilation_route() {
        let registry = default_registry();
        assert_eq!(
            registry.resolve(LOG_COMPILATION).and_then(|d| d.name()),
            Some("CompileLogsHandler")
        );
    }
}
