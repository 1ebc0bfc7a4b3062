/// Subsystem tags attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Lock,
    Api,
    Normalize,
    Filtering,
    Scoring,
    Funnel,
    Report,
}

impl LogTag {
    /// Key used by `--debug <tag>` (lower-case)
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Lock => "lock",
            LogTag::Api => "api",
            LogTag::Normalize => "normalize",
            LogTag::Filtering => "filtering",
            LogTag::Scoring => "scoring",
            LogTag::Funnel => "funnel",
            LogTag::Report => "report",
        }
    }

    /// Upper-case label used in console and file output
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Lock => "LOCK",
            LogTag::Api => "API",
            LogTag::Normalize => "NORMALIZE",
            LogTag::Filtering => "FILTER",
            LogTag::Scoring => "SCORING",
            LogTag::Funnel => "FUNNEL",
            LogTag::Report => "REPORT",
        }
    }

    pub fn all() -> &'static [LogTag] {
        &[
            LogTag::System,
            LogTag::Config,
            LogTag::Lock,
            LogTag::Api,
            LogTag::Normalize,
            LogTag::Filtering,
            LogTag::Scoring,
            LogTag::Funnel,
            LogTag::Report,
        ]
    }

    pub fn from_debug_key(key: &str) -> Option<LogTag> {
        let key = key.trim().to_lowercase();
        LogTag::all()
            .iter()
            .copied()
            .find(|tag| tag.to_debug_key() == key)
    }
}
