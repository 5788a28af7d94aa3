//! Automated actions behind the cron and task-queue routes.
//!
//! # Responsibilities
//! - Provide one handler type per automated route
//! - Check the parameters each job is enqueued with
//! - Acknowledge the job in the response
//!
//! # Design Decisions
//! - Handlers are unit-like structs around `ActionAttributes`, built by `Default`
//! - Job bodies (email delivery, reminders, log compilation) live outside this crate;
//!   a handler here validates its input and reports acceptance

use std::collections::BTreeMap;

use serde::Serialize;

use crate::action::{ActionAttributes, ActionError};

/// Declare an automated action that requires the listed request parameters.
macro_rules! automated_action {
    ($(#[$meta:meta])* $name:ident, required = [$($param:expr),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            attributes: $crate::action::ActionAttributes,
        }

        impl $crate::action::AutomatedAction for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn attributes(&self) -> &$crate::action::ActionAttributes {
                &self.attributes
            }

            fn attributes_mut(&mut self) -> &mut $crate::action::ActionAttributes {
                &mut self.attributes
            }

            fn execute(&mut self) -> Result<(), $crate::action::ActionError> {
                $crate::actions::acknowledge(&mut self.attributes, stringify!($name), &[$($param),*])
            }
        }
    };
}

pub mod cron;
pub mod params;
pub mod worker;

pub use cron::{
    CompileLogsHandler, FeedbackSessionClosedRemindersHandler,
    FeedbackSessionClosingRemindersHandler, FeedbackSessionOpeningRemindersHandler,
    FeedbackSessionPublishedRemindersHandler,
};
pub use worker::{
    AdminPrepareEmailWorkerHandler, AdminSendEmailWorkerHandler,
    CourseJoinRemindEmailWorkerHandler, FeedbackSessionRemindEmailWorkerHandler,
    FeedbackSessionRemindParticularUsersEmailWorkerHandler, SendEmailWorkerHandler,
};

/// Body written for an accepted job.
#[derive(Debug, Serialize)]
struct Acknowledgement<'a> {
    action: &'a str,
    status: &'a str,
    request_id: &'a str,
    parameters: BTreeMap<&'a str, String>,
}

/// Validate `required` parameters and write the acceptance body.
pub(crate) fn acknowledge(
    attributes: &mut ActionAttributes,
    action: &'static str,
    required: &[&'static str],
) -> Result<(), ActionError> {
    let mut parameters = BTreeMap::new();
    for name in required {
        let value = attributes.required_param(name)?;
        parameters.insert(*name, value.to_string());
    }
    let request_id = attributes.request()?.request_id().to_string();

    tracing::info!(
        action,
        request_id = %request_id,
        parameters = ?parameters,
        "Automated action accepted"
    );

    let body = Acknowledgement {
        action,
        status: "accepted",
        request_id: &request_id,
        parameters,
    };
    attributes
        .response_mut()
        .write_json(&body)
        .map_err(|e| ActionError::Failed(e.to_string()))
}
