//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# NOID Configuration
# Only override what you want to change -- missing fields use defaults.

[endpoint]
url = "http://127.0.0.1:8001/generate"
# connect_timeout_secs = 10     # 1-300
# request_timeout_secs = 0      # 0 = wait indefinitely, max 3600

[messages]
# greeting = "Hi! I'm the AI-NOID Assistant. How can I help you today?"
# reset_greeting = "A new chat session has started. Ask away!"
# loading = "Processing"
# no_reply = "⚠️ No text response from the proxy."
# error_prefix = "⚠️ An error occurred: "
# attachment_failed = "⚠️ Failed to process the image."
# invalid_attachment = "The uploaded file must be an image."

[proxy]
bind = "127.0.0.1:8001"
model = "gemini-2.5-flash-lite"
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# system_prompt = "..."
# max_output_tokens = 4096      # 1-65536
# temperature = 0.7             # 0.0-2.0
# upstream_timeout_secs = 120   # 1-600
# The API key is read from the GEMINI_API_KEY environment variable.

[logging]
level = "info"                  # trace, debug, info, warn, error
"##
    .to_string()
}
