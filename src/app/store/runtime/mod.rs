pub mod clipboard;
pub mod credential;
pub mod generate;


use super::super::ReplyApp;
use super::command::Command;

pub fn run(app: &mut ReplyApp, command: Command) {
    match command {
        Command::PersistCredential {
            credential,
            previous,
        } => credential::persist_credential(app, credential, previous),
        Command::DeleteCredential { previous } => credential::delete_credential(app, previous),
        Command::StartGeneration { request } => generate::start_generation(app, *request),
        Command::CopyToClipboard { text } => clipboard::copy_to_clipboard(app, &text),
        Command::ScheduleCopiedReset { ticket, after } => {
            clipboard::schedule_copied_reset(app, ticket, after)
        }
    }
}
