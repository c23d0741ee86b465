use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use error_stack::{report, Result};

use crate::domain::error::UploadError;
use crate::domain::prompt::{Button, Prompt};
use crate::domain::source::{ActiveSource, Sheet};
use crate::domain::table::Table;
use crate::domain::transport::HttpTransport;

pub struct FakeSource {
    id: String,
    sheets: HashMap<String, Table>,
    reads: Cell<usize>,
}

impl FakeSource {
    pub fn with_sheet(id: &str, name: &str, table: Table) -> Self {
        FakeSource {
            id: id.to_string(),
            sheets: HashMap::from([(name.to_string(), table)]),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

pub struct FakeSheet {
    name: String,
    table: Table,
}

impl Sheet for FakeSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn data_range(&self) -> Result<Table, UploadError> {
        Ok(self.table.clone())
    }
}

impl ActiveSource for FakeSource {
    type Sheet = FakeSheet;

    fn sheet_by_name(&self, name: &str) -> Option<FakeSheet> {
        self.reads.set(self.reads.get() + 1);
        self.sheets.get(name).map(|table| FakeSheet {
            name: name.to_string(),
            table: table.clone(),
        })
    }

    fn document_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Records every post. Answers with `response`, or fails when it is `None`.
pub struct RecordingTransport {
    response: Option<String>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn responding(response: &str) -> Self {
        RecordingTransport {
            response: Some(response.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        RecordingTransport {
            response: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<String, UploadError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body,
        });
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(report!(UploadError::transport(url))
                .attach_printable("connection reset by peer")),
        }
    }
}

/// Gives a fixed answer to every confirmation and keeps the alerts shown.
pub struct ScriptedPrompt {
    answer: Button,
    pub confirmations: usize,
    pub alerts: Vec<(Option<String>, String)>,
}

impl ScriptedPrompt {
    pub fn answering(answer: Button) -> Self {
        ScriptedPrompt {
            answer,
            confirmations: 0,
            alerts: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, _title: &str, _message: &str) -> Button {
        self.confirmations += 1;
        self.answer
    }

    fn alert(&mut self, title: Option<&str>, message: &str) {
        self.alerts
            .push((title.map(str::to_string), message.to_string()));
    }
}
