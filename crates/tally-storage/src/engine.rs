//! StorageEngine — owns the ConnectionPool and implements the core storage
//! traits by delegating to the query modules.

use std::path::Path;

use tally_core::errors::TallyResult;
use tally_core::models::{
    Answer, Contributor, FlagStatus, FlaggedAnswer, Question, Rating, Reward, ValidationEvent,
    ValidationOutcome,
};
use tally_core::score::Score;
use tally_core::traits::{IAnswerStorage, IReviewStorage, IRewardStorage, ITrustStorage};

use crate::migrations;
use crate::pool::ConnectionPool;

/// The main storage engine. Owns the connection pool and provides the full
/// pipeline storage interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed mode).
    /// When false, route all reads through the writer (in-memory mode,
    /// because in-memory read pool connections are isolated databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> TallyResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TallyResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> TallyResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> TallyResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }
}

impl IAnswerStorage for StorageEngine {
    fn insert_question(&self, question: &Question) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::answer_crud::insert_question(conn, question))
    }

    fn get_question(&self, id: &str) -> TallyResult<Option<Question>> {
        self.with_reader(|conn| crate::queries::answer_crud::get_question(conn, id))
    }

    fn insert_answer(&self, answer: &Answer) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::answer_crud::insert_answer(conn, answer))
    }

    fn get_answer(&self, id: &str) -> TallyResult<Option<Answer>> {
        self.with_reader(|conn| crate::queries::answer_crud::get_answer(conn, id))
    }

    fn sibling_answers(
        &self,
        question_id: &str,
        exclude_answer_id: &str,
    ) -> TallyResult<Vec<Answer>> {
        self.with_reader(|conn| {
            crate::queries::answer_query::sibling_answers(conn, question_id, exclude_answer_id)
        })
    }

    fn record_verdict(&self, answer_id: &str, outcome: &ValidationOutcome) -> TallyResult<bool> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::answer_query::record_verdict(conn, answer_id, outcome)
        })
    }

    fn events_for_answer(&self, answer_id: &str) -> TallyResult<Vec<ValidationEvent>> {
        self.with_reader(|conn| {
            crate::queries::validation_events::events_for_answer(conn, answer_id)
        })
    }
}

impl ITrustStorage for StorageEngine {
    fn insert_contributor(&self, contributor: &Contributor) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::trust_ops::insert_contributor(conn, contributor))
    }

    fn get_contributor(&self, id: &str) -> TallyResult<Option<Contributor>> {
        self.with_reader(|conn| crate::queries::trust_ops::get_contributor(conn, id))
    }

    fn apply_trust_delta(
        &self,
        contributor_id: &str,
        question_id: &str,
        delta: f64,
        reason: &str,
    ) -> TallyResult<Score> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::trust_ops::apply_trust_delta(
                conn,
                contributor_id,
                question_id,
                delta,
                reason,
            )
        })
    }

    fn ratings_for(&self, contributor_id: &str) -> TallyResult<Vec<Rating>> {
        self.with_reader(|conn| crate::queries::trust_ops::ratings_for(conn, contributor_id))
    }
}

impl IRewardStorage for StorageEngine {
    fn insert_reward(&self, reward: &Reward) -> TallyResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::reward_ops::insert_reward(conn, reward))
    }

    fn rewards_for(&self, contributor_id: &str) -> TallyResult<Vec<Reward>> {
        self.with_reader(|conn| crate::queries::reward_ops::rewards_for(conn, contributor_id))
    }
}

impl IReviewStorage for StorageEngine {
    fn create_flag(&self, answer_id: &str, reason: &str) -> TallyResult<Option<FlaggedAnswer>> {
        self.pool
            .writer
            .with_conn_sync(|conn| crate::queries::review_ops::create_flag(conn, answer_id, reason))
    }

    fn get_flag(&self, id: &str) -> TallyResult<Option<FlaggedAnswer>> {
        self.with_reader(|conn| crate::queries::review_ops::get_flag(conn, id))
    }

    fn flag_for_answer(&self, answer_id: &str) -> TallyResult<Option<FlaggedAnswer>> {
        self.with_reader(|conn| crate::queries::review_ops::flag_for_answer(conn, answer_id))
    }

    fn list_flags(
        &self,
        status: Option<FlagStatus>,
        limit: usize,
        offset: usize,
    ) -> TallyResult<Vec<FlaggedAnswer>> {
        self.with_reader(|conn| {
            crate::queries::review_ops::list_flags(conn, status, limit, offset)
        })
    }

    fn resolve_flag(
        &self,
        flag_id: &str,
        status: FlagStatus,
        resolved_by: &str,
        notes: Option<&str>,
    ) -> TallyResult<bool> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::review_ops::resolve_flag(conn, flag_id, status, resolved_by, notes)
        })
    }

    fn force_verdict(
        &self,
        answer_id: &str,
        is_valid: bool,
        confidence: Score,
        metadata: serde_json::Value,
    ) -> TallyResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            crate::queries::review_ops::force_verdict(conn, answer_id, is_valid, confidence, metadata)
        })
    }
}
