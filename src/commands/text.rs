//! Text command - encoding helpers.

use common::AppResult;
use domain::TextExt;

use crate::cli::args::{TextAction, TextArgs};

/// Execute the text command
pub fn execute(args: TextArgs) -> AppResult<()> {
    println!("{}", render(&args));
    Ok(())
}

pub fn render(args: &TextArgs) -> String {
    match &args.action {
        TextAction::Base64 { text } => text.to_base64(),
    }
}
