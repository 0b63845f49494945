//! The read-eval loop driving a chat session from input lines.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use noid_ai::{Attachment, ChatSession, ChatView, CompletionClient, RenderRequest, SendOutcome};
use noid_common::NoidError;

use crate::command::{self, Command, HELP};

/// Read lines from `input` until `/quit` or end of input.
///
/// `prompt` is called before each line is read. Send failures are already
/// shown by the session and do not stop the loop.
pub async fn run<C, V, R>(
    session: &ChatSession<C, V>,
    input: R,
    prompt: impl Fn(),
) -> Result<(), NoidError>
where
    C: CompletionClient,
    V: ChatView,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            debug!("end of input");
            break;
        };

        match command::parse(&line) {
            Command::Send(text) => match session.send(&text).await {
                Ok(SendOutcome::Replied { .. }) => {
                    debug!(turns = session.turn_count(), "exchange recorded")
                }
                Ok(outcome) => debug!(?outcome, "nothing recorded"),
                Err(e) => debug!(error = %e, "send failed"),
            },
            Command::Attach(path) => {
                if !path.is_file() {
                    session
                        .view()
                        .alert(&format!("No such file: {}", path.display()));
                    continue;
                }
                if let Err(e) = session.attach_image(Attachment::from_path(path)) {
                    debug!(error = %e, "attachment rejected");
                }
            }
            Command::Detach => session.detach_image(),
            Command::Reset => session.reset(),
            Command::Help => {
                session.view().render_message(RenderRequest::model(HELP));
            }
            Command::Quit => break,
            Command::Invalid(message) => session.view().alert(&message),
        }
    }

    info!(session = %session.id(), "chat loop finished");
    Ok(())
}
