pub mod art;
pub mod executor;
pub mod repl;
pub mod statement;
pub mod storage;
pub mod types;
