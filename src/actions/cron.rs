//! Scheduled (cron) jobs. None of them take parameters.

automated_action!(
    /// Compiles the previous interval's application logs.
    CompileLogsHandler,
    required = []
);

automated_action!(
    /// Reminds participants of feedback sessions that just opened.
    FeedbackSessionOpeningRemindersHandler,
    required = []
);

automated_action!(
    /// Reminds participants of feedback sessions that just closed.
    FeedbackSessionClosedRemindersHandler,
    required = []
);

automated_action!(
    /// Reminds participants of feedback sessions that are about to close.
    FeedbackSessionClosingRemindersHandler,
    required = []
);

automated_action!(
    /// Announces feedback sessions whose results were published.
    FeedbackSessionPublishedRemindersHandler,
    required = []
);
