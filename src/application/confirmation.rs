use error_stack::Report;

use crate::domain::error::UploadError;
use crate::domain::prompt::{Button, Prompt};
use crate::domain::source::ActiveSource;
use crate::domain::transport::HttpTransport;

use super::upload_routine::UploadRoutine;

pub const CONFIRM_TITLE: &str = "Confirm Upload Data";
pub const CONFIRM_MESSAGE: &str = "Confirm that you want to upload/update the data to the cloud.";
pub const SUCCESS_TITLE: &str = "Deployment Success!";
pub const SUCCESS_MESSAGE: &str = "Data is now updated on the cloud!";

#[derive(Debug)]
pub enum ButtonOutcome {
    /// The user did not answer yes. Nothing was read or sent.
    Declined,
    Uploaded { response: String },
    Failed(Report<UploadError>),
}

/// Asks for confirmation and runs the upload only on a yes.
pub fn react_to_button<P, S, T>(prompt: &mut P, routine: &UploadRoutine<S, T>) -> ButtonOutcome
where
    P: Prompt,
    S: ActiveSource,
    T: HttpTransport,
{
    match prompt.confirm(CONFIRM_TITLE, CONFIRM_MESSAGE) {
        Button::Yes => upload(prompt, routine),
        answer => {
            log::info!("Upload not confirmed ({})", answer);
            ButtonOutcome::Declined
        }
    }
}

/// Runs the upload and shows its result: the success message, or the error
/// text for any failure.
pub fn upload<P, S, T>(prompt: &mut P, routine: &UploadRoutine<S, T>) -> ButtonOutcome
where
    P: Prompt,
    S: ActiveSource,
    T: HttpTransport,
{
    match routine.run() {
        Ok(response) => {
            prompt.alert(Some(SUCCESS_TITLE), SUCCESS_MESSAGE);
            ButtonOutcome::Uploaded { response }
        }
        Err(report) => {
            log::error!("Error! {:?}", report);
            prompt.alert(None, &report.current_context().to_string());
            ButtonOutcome::Failed(report)
        }
    }
}
