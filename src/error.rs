pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the assignment pipeline.
///
/// The first group are precondition violations on caller input. `NoZeroMatching`
/// and `CoverStalled` mean the engine reached a state its reductions should
/// have made impossible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no slots configured")]
    NoSlots,

    #[error("agent pool is empty")]
    EmptyPool,

    #[error("agent {agent} has {actual} scores, expected one per slot ({expected})")]
    ScoreCount {
        agent: String,
        expected: usize,
        actual: usize,
    },

    #[error("{configured} slots configured, but the pool scores {scored}")]
    SlotMismatch { configured: usize, scored: usize },

    #[error("agent {0} appears more than once in the pool")]
    DuplicateAgent(String),

    #[error("{agents} agents cannot fill {slots} slots")]
    TooFewAgents { agents: usize, slots: usize },

    #[error("reduced {side}x{side} cost matrix has no zero-cost perfect matching")]
    NoZeroMatching { side: usize },

    #[error("zero generation made no progress with {lines} of {side} lines")]
    CoverStalled { lines: usize, side: usize },

    #[error("invalid solver configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid roster: {0}")]
    Roster(#[from] serde_json::Error),
}
