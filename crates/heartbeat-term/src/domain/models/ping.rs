use chrono::DateTime;
use chrono::Local;

/// Outcome of a single probe, as a future pinger would report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PingStatus {
    Up,
    Http(u16),
    Down(String),
}

impl std::fmt::Display for PingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PingStatus::Up => write!(f, "✅ UP"),
            PingStatus::Http(code) => write!(f, "⚠️ {code}"),
            PingStatus::Down(reason) => write!(f, "❌ DOWN ({reason})"),
        }
    }
}

impl PingStatus {
    pub fn from_http_status(code: u16) -> PingStatus {
        if code == 200 {
            return PingStatus::Up;
        }

        return PingStatus::Http(code);
    }
}

#[derive(Clone, Debug)]
pub struct PingReport {
    pub id: i64,
    pub status: PingStatus,
    pub at: DateTime<Local>,
}

impl PingReport {
    pub fn new(id: i64, status: PingStatus) -> PingReport {
        return PingReport {
            id,
            status,
            at: Local::now(),
        };
    }

    pub fn last_ping(&self) -> String {
        return self.at.format("%Y-%m-%d %H:%M:%S").to_string();
    }
}
