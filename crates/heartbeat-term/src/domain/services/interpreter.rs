#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;

use std::sync::Arc;

use crate::domain::models::parse_entry_id;
use crate::domain::models::ApiEntry;
use crate::domain::models::ApisUpdate;
use crate::domain::models::Command;
use crate::domain::models::CommandError;
use crate::domain::models::SessionState;
use crate::domain::models::SharedIdentity;
use crate::domain::models::SharedRecordStore;
use crate::domain::models::Transcript;
use crate::domain::models::MAX_APIS;

pub const DEFAULT_PROMPT: &str = "APIHeartbeat:~$";
pub const NO_APIS_MESSAGE: &str = "No APIs registered yet";

/// Source of entry ids. Millisecond wall-clock time by default.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

pub fn available_commands(logged_in: bool) -> Vec<String> {
    let lines: &[&str] = if logged_in {
        &[
            "API Management Commands:",
            "- \"AddApi <http(s)://url>\" - Add API endpoint to ping",
            "- \"RemoveApi <id>\" - Remove API endpoint",
            "- \"ListApis\" - View all registered APIs",
            "- \"Logout\" - Sign out from your account",
            "",
        ]
    } else {
        &["Available Commands:", "- \"google\" - Login with Google", ""]
    };

    return lines.iter().map(|e| e.to_string()).collect();
}

fn report(result: Result<String, CommandError>) -> String {
    match result {
        Ok(line) => line,
        Err(err) => {
            if err.log_level() == tracing::Level::WARN {
                tracing::warn!(kind = ?err.kind(), error = %err, "command failed");
            } else {
                tracing::debug!(kind = ?err.kind(), error = %err, "command rejected");
            }
            err.to_string()
        }
    }
}

fn require_login(session: &SessionState) -> Result<(), CommandError> {
    if !session.is_logged_in {
        return Err(CommandError::NotLoggedIn);
    }

    return Ok(());
}

fn require_argument(arg: &str, missing: CommandError) -> Result<(), CommandError> {
    if arg.is_empty() {
        return Err(missing);
    }

    return Ok(());
}

/// Turns one input line into transcript output, talking to the identity and
/// record-store collaborators as needed. Holds no session state of its own:
/// each call takes the current state and hands back the next one.
pub struct CommandInterpreter {
    identity: SharedIdentity,
    store: SharedRecordStore,
    prompt: String,
    clock: Clock,
}

impl CommandInterpreter {
    pub fn new(identity: SharedIdentity, store: SharedRecordStore) -> CommandInterpreter {
        return CommandInterpreter {
            identity,
            store,
            prompt: DEFAULT_PROMPT.to_string(),
            clock: Arc::new(|| chrono::Utc::now().timestamp_millis()),
        };
    }

    pub fn with_prompt(mut self, prompt: &str) -> CommandInterpreter {
        self.prompt = prompt.to_string();
        return self;
    }

    pub fn with_clock(mut self, clock: Clock) -> CommandInterpreter {
        self.clock = clock;
        return self;
    }

    pub fn prompt(&self) -> &str {
        return &self.prompt;
    }

    pub async fn execute(
        &self,
        session: SessionState,
        transcript: Transcript,
        input: &str,
    ) -> (SessionState, Transcript) {
        let mut session = session;
        let mut transcript = transcript;
        let command = Command::parse(input);

        tracing::debug!(
            verb = ?command.verb(),
            logged_in = session.is_logged_in,
            "dispatching command"
        );

        transcript.push(&format!("{} {}", self.prompt, input));

        match command {
            Command::Start => {
                transcript.extend(available_commands(session.is_logged_in));
            }
            Command::Clear => {
                transcript.clear();
            }
            Command::AddApi(url) => {
                let result = match self.precheck(&session, &url, CommandError::MissingUrl) {
                    Ok(()) => self.add_api(&mut session, &url).await,
                    Err(err) => Err(err),
                };
                transcript.push(&report(result));
                transcript.extend(available_commands(session.is_logged_in));
            }
            Command::RemoveApi(id) => {
                let result = match self.precheck(&session, &id, CommandError::MissingId) {
                    Ok(()) => self.remove_api(&mut session, &id).await,
                    Err(err) => Err(err),
                };
                transcript.push(&report(result));
                transcript.extend(available_commands(session.is_logged_in));
            }
            Command::ListApis => {
                let result = match require_login(&session) {
                    Ok(()) => self.list_apis(&mut session).await,
                    Err(err) => Err(err),
                };
                transcript.push(&report(result));
                transcript.extend(available_commands(session.is_logged_in));
            }
            Command::Google => {
                if session.is_logged_in {
                    transcript.push(&report(Err(CommandError::AlreadyLoggedIn)));
                } else if let Err(err) = self.identity.sign_in_interactive().await {
                    tracing::warn!(error = %err, "sign-in failed");
                    transcript.push(&report(Err(CommandError::SignInFailed(err.to_string()))));
                }
            }
            Command::Logout => {
                if !session.is_logged_in {
                    transcript.push(&report(Err(CommandError::NotLoggedInForLogout)));
                } else if let Err(err) = self.identity.sign_out().await {
                    tracing::warn!(error = %err, "sign-out failed");
                    transcript.push(&report(Err(CommandError::SignOutFailed(err.to_string()))));
                }
                transcript.extend(available_commands(false));
            }
            Command::Unknown => {
                transcript.push(&format!("❓ Unknown command: {input}"));
                transcript.push("Type \"start\" to see available commands");
            }
        }

        return (session, transcript);
    }

    fn precheck(
        &self,
        session: &SessionState,
        arg: &str,
        missing: CommandError,
    ) -> Result<(), CommandError> {
        require_login(session)?;
        return require_argument(arg, missing);
    }

    async fn add_api(&self, session: &mut SessionState, url: &str) -> Result<String, CommandError> {
        if !ApiEntry::has_valid_scheme(url) {
            return Err(CommandError::InvalidUrl);
        }

        let record = self
            .store
            .get(&session.user_email)
            .await
            .map_err(CommandError::store)?
            .unwrap_or_default();

        if record.apis.len() >= MAX_APIS {
            return Err(CommandError::LimitReached(MAX_APIS));
        }

        let entry = ApiEntry::new((self.clock)(), url);
        self.store
            .set_merge(&session.user_email, ApisUpdate::Union(vec![entry.clone()]))
            .await
            .map_err(CommandError::store)?;

        tracing::info!(id = entry.id, "api added");

        let mut apis = record.apis;
        apis.push(entry.clone());
        session.apis = apis;

        return Ok(format!("✅ API added: {} (ID: {})", entry.url, entry.id));
    }

    async fn remove_api(&self, session: &mut SessionState, id: &str) -> Result<String, CommandError> {
        let record = self
            .store
            .get(&session.user_email)
            .await
            .map_err(CommandError::store)?
            .ok_or(CommandError::NoRecord)?;

        let target = parse_entry_id(id)
            .and_then(|parsed| record.find(parsed))
            .cloned()
            .ok_or_else(|| CommandError::EntryNotFound(id.to_string()))?;

        self.store
            .update(&session.user_email, ApisUpdate::Remove(vec![target.clone()]))
            .await
            .map_err(CommandError::store)?;

        tracing::info!(id = target.id, "api removed");

        session.apis = record
            .apis
            .into_iter()
            .filter(|api| api.id != target.id)
            .collect();

        return Ok(format!("✅ API removed: {}", target.url));
    }

    async fn list_apis(&self, session: &mut SessionState) -> Result<String, CommandError> {
        let record = match self
            .store
            .get(&session.user_email)
            .await
            .map_err(CommandError::store)?
        {
            Some(record) => record,
            None => return Ok(NO_APIS_MESSAGE.to_string()),
        };

        session.apis = record.apis.clone();

        if record.apis.is_empty() {
            return Ok(NO_APIS_MESSAGE.to_string());
        }

        return Ok(record
            .apis
            .iter()
            .map(|api| api.format())
            .collect::<Vec<String>>()
            .join("\n"));
    }
}
