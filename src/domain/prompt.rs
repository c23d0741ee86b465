use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Button {
    #[strum(to_string = "Yes", serialize = "y")]
    Yes,
    #[strum(to_string = "No", serialize = "n")]
    No,
    #[strum(to_string = "Cancel")]
    Cancel,
}

/// The dialogs the user sees around an upload.
pub trait Prompt {
    fn confirm(&mut self, title: &str, message: &str) -> Button;

    fn alert(&mut self, title: Option<&str>, message: &str);
}
