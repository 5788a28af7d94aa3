//! Request parameter names used by the task-queue workers.

pub const COURSE_ID: &str = "courseid";
pub const FEEDBACK_SESSION_NAME: &str = "fsname";
pub const USERS_TO_REMIND: &str = "usersToRemind";

pub const ADMIN_EMAIL_ID: &str = "emailid";
pub const EMAIL_SUBJECT: &str = "emailsubject";
pub const EMAIL_CONTENT: &str = "emailcontent";
pub const EMAIL_RECEIVER: &str = "emailreceiver";
