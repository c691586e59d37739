use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Default.
    CommitOnOk,
    /// Test suites that share one database and must leave it untouched.
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// `CommitOnOk` until `set_txn_policy` is called.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// First call wins; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}

/// Reads `ARCHIVE_TXN_POLICY` (`commit` | `rollback`).
pub fn from_env() -> Option<TxnPolicy> {
    match std::env::var("ARCHIVE_TXN_POLICY").ok()?.to_ascii_lowercase().as_str() {
        "commit" => Some(TxnPolicy::CommitOnOk),
        "rollback" => Some(TxnPolicy::RollbackOnOk),
        _ => None,
    }
}
