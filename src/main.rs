use std::process::ExitCode;

use sheet_upload::application::confirmation::{react_to_button, ButtonOutcome};
use sheet_upload::application::upload_routine::UploadRoutine;
use sheet_upload::domain::source::ActiveSource;
use sheet_upload::infrastructure::config::app_config::AppConfig;
use sheet_upload::infrastructure::http::reqwest_transport::ReqwestTransport;
use sheet_upload::infrastructure::prompt::terminal_prompt::TerminalPrompt;
use sheet_upload::infrastructure::sheets::csv_workbook::CsvWorkbook;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().map_err(|report| anyhow::anyhow!("{report:?}"))?;

    let workbook = CsvWorkbook::from_config(&config.workbook);
    log::info!(
        "Using workbook {} ({})",
        workbook.directory().display(),
        workbook.document_id()
    );

    let routine = UploadRoutine::new(workbook, ReqwestTransport::new(), config.upload);
    let mut prompt = TerminalPrompt::stdio();

    match react_to_button(&mut prompt, &routine) {
        ButtonOutcome::Failed(_) => Ok(ExitCode::FAILURE),
        ButtonOutcome::Declined | ButtonOutcome::Uploaded { .. } => Ok(ExitCode::SUCCESS),
    }
}
