//! Task-queue workers.

use crate::actions::params::{
    ADMIN_EMAIL_ID, COURSE_ID, EMAIL_CONTENT, EMAIL_RECEIVER, EMAIL_SUBJECT,
    FEEDBACK_SESSION_NAME, USERS_TO_REMIND,
};

automated_action!(
    /// Expands an admin email into per-receiver send tasks.
    AdminPrepareEmailWorkerHandler,
    required = [ADMIN_EMAIL_ID]
);

automated_action!(
    /// Sends one admin email to one receiver.
    AdminSendEmailWorkerHandler,
    required = [ADMIN_EMAIL_ID, EMAIL_RECEIVER]
);

automated_action!(
    /// Reminds unregistered students of a course to join.
    CourseJoinRemindEmailWorkerHandler,
    required = [COURSE_ID]
);

automated_action!(
    /// Reminds everyone who has not submitted to a feedback session.
    FeedbackSessionRemindEmailWorkerHandler,
    required = [COURSE_ID, FEEDBACK_SESSION_NAME]
);

automated_action!(
    /// Reminds a chosen set of users about a feedback session.
    FeedbackSessionRemindParticularUsersEmailWorkerHandler,
    required = [COURSE_ID, FEEDBACK_SESSION_NAME, USERS_TO_REMIND]
);

automated_action!(
    SendEmailWorkerHandler,
    required = [EMAIL_SUBJECT, EMAIL_CONTENT, EMAIL_RECEIVER]
);
