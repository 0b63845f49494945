//! Line-oriented terminal implementation of `ChatView`.

mod markdown;

pub use markdown::render_markdown;

use std::io::Write;

use parking_lot::Mutex;

use noid_ai::{Attachment, ChatView, MessageHandle, RenderRequest, Role};

use markdown::{BOLD, DIM, RESET};

const YELLOW: &str = "\x1b[33m";
/// Cursor up one line, then erase it.
const ERASE_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

struct TerminalState<W> {
    out: W,
    next_handle: u64,
    /// The loading line, while it is still the last thing printed.
    transient: Option<MessageHandle>,
    input_enabled: bool,
    preview: Option<String>,
}

/// Prints the conversation to a terminal.
///
/// Scrollback cannot be edited, so only a loading indicator that is still
/// the last printed line can be removed, and only when `color` (ANSI
/// control) is on.
pub struct TerminalView<W> {
    state: Mutex<TerminalState<W>>,
    color: bool,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                out,
                next_handle: 0,
                transient: None,
                input_enabled: true,
                preview: None,
            }),
            color,
        }
    }

    /// Print the input prompt, marking a pending attachment.
    pub fn prompt(&self) {
        let mut state = self.state.lock();
        let prompt = match &state.preview {
            Some(name) => format!("[{name}] > "),
            None => "> ".to_string(),
        };
        emit(&mut state, &prompt);
        state.transient = None;
    }

    pub fn input_enabled(&self) -> bool {
        self.state.lock().input_enabled
    }

    fn style(&self, style: &'static str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_message(&self, request: &RenderRequest<'_>) -> String {
        match request.role {
            Role::User => {
                let mut line = format!("{} {}", self.style(BOLD, "you ›"), request.text);
                if let Some(image) = request.image {
                    if !request.text.is_empty() {
                        line.push(' ');
                    }
                    let label = format!("[image: {}]", image.display_name());
                    line.push_str(&self.style(DIM, &label));
                }
                line
            }
            Role::Model => format!(
                "{} {}",
                self.style(BOLD, "noid ›"),
                render_markdown(request.text, self.color)
            ),
        }
    }
}

#[cfg(test)]
impl<W: AsRef<[u8]>> TerminalView<W> {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.state.lock().out.as_ref()).into_owned()
    }
}

fn emit<W: Write>(state: &mut TerminalState<W>, text: &str) {
    let result = state
        .out
        .write_all(text.as_bytes())
        .and_then(|()| state.out.flush());
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to write to terminal");
    }
}

impl<W: Write + Send> ChatView for TerminalView<W> {
    fn render_message(&self, request: RenderRequest<'_>) -> MessageHandle {
        let text = if request.loading {
            self.style(DIM, &format!("{}…", request.text))
        } else {
            self.format_message(&request)
        };

        let mut state = self.state.lock();
        state.next_handle += 1;
        let handle = MessageHandle(state.next_handle);
        emit(&mut state, &format!("{text}\n"));
        state.transient = request.loading.then_some(handle);
        handle
    }

    fn remove_message(&self, handle: MessageHandle) {
        let mut state = self.state.lock();
        if state.transient == Some(handle) {
            if self.color {
                emit(&mut state, ERASE_PREVIOUS_LINE);
            }
            state.transient = None;
        }
    }

    fn clear_all(&self) {
        let mut state = self.state.lock();
        let clear = if self.color { CLEAR_SCREEN } else { "\n" };
        emit(&mut state, clear);
        state.transient = None;
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.state.lock().input_enabled = enabled;
    }

    // The line was consumed when it was read.
    fn clear_input(&self) {}

    fn show_attachment_preview(&self, attachment: &Attachment) {
        let name = attachment.display_name().to_string();
        let line = self.style(
            DIM,
            &format!("attached {name}; it will be sent with your next message"),
        );
        let mut state = self.state.lock();
        emit(&mut state, &format!("{line}\n"));
        state.transient = None;
        state.preview = Some(name);
    }

    fn clear_attachment_preview(&self) {
        self.state.lock().preview = None;
    }

    fn alert(&self, message: &str) {
        let line = self.style(YELLOW, &format!("! {message}"));
        let mut state = self.state.lock();
        emit(&mut state, &format!("{line}\n"));
        state.transient = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TerminalView<Vec<u8>> {
        TerminalView::new(Vec::new(), false)
    }

    #[test]
    fn user_message_shows_attachment_name() {
        let view = plain();
        let image = Attachment::from_bytes("image/png", vec![1]).with_name("sofa.png");
        view.render_message(RenderRequest::user("what is this?", Some(&image)));
        assert_eq!(view.contents(), "you › what is this? [image: sofa.png]\n");
    }

    #[test]
    fn model_reply_is_rendered_as_markdown() {
        let view = plain();
        view.render_message(RenderRequest::model("**Sofa** options:\n\n- leather\n- fabric"));
        assert_eq!(
            view.contents(),
            "noid › Sofa options:\n\n• leather\n• fabric\n"
        );
    }

    #[test]
    fn loading_line_is_erased_when_last() {
        let view = TerminalView::new(Vec::new(), true);
        let handle = view.render_message(RenderRequest::loading("Processing"));
        view.remove_message(handle);
        assert!(view.contents().ends_with(ERASE_PREVIOUS_LINE));
    }

    #[test]
    fn loading_line_is_kept_once_something_follows() {
        let view = TerminalView::new(Vec::new(), true);
        let handle = view.render_message(RenderRequest::loading("Processing"));
        view.alert("careful");
        view.remove_message(handle);
        assert!(!view.contents().contains(ERASE_PREVIOUS_LINE));
    }

    #[test]
    fn prompt_marks_pending_attachment() {
        let view = plain();
        let image = Attachment::from_bytes("image/png", vec![1]).with_name("sofa.png");
        view.show_attachment_preview(&image);
        view.prompt();
        assert!(view.contents().ends_with("[sofa.png] > "));

        view.clear_attachment_preview();
        view.prompt();
        assert_eq!(
            view.contents(),
            "attached sofa.png; it will be sent with your next message\n[sofa.png] > > "
        );
    }

    #[test]
    fn alert_and_input_state() {
        let view = plain();
        view.alert("The uploaded file must be an image.");
        view.set_input_enabled(false);
        assert_eq!(view.contents(), "! The uploaded file must be an image.\n");
        assert!(!view.input_enabled());
    }
}
