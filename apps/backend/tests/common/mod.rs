#![allow(dead_code)]

use archive_backend::db::txn_policy::{self, TxnPolicy};

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Every test builds its own in-memory database, so committing is the default.
// `ARCHIVE_TXN_POLICY=rollback` flips a binary to rollback-on-ok.
#[ctor::ctor]
fn init_txn_policy() {
    txn_policy::set_txn_policy(txn_policy::from_env().unwrap_or(TxnPolicy::CommitOnOk));
}
