/**
 * PostgreSQL Store
 *
 * Runtime-checked `sqlx` queries against the tables created by the
 * migrations in `migrations/`.
 */
use super::models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionStatus, User};
use super::{QaStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

const QUESTION_COLUMNS: &str = "question_id, user_id, message, status, created_at";
const ANSWER_COLUMNS: &str = "answer_id, question_id, user_id, answer, created_at";

#[derive(sqlx::FromRow)]
struct QuestionWithAuthor {
    #[sqlx(flatten)]
    question: Question,
    username: Option<String>,
}

#[derive(sqlx::FromRow)]
struct AnswerWithAuthor {
    #[sqlx(flatten)]
    answer: Answer,
    username: Option<String>,
}

/// Store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;
        tracing::info!("Database connected");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

fn map_unique_email(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl QaStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_username(&self, user_id: Uuid) -> Result<Option<String>, StoreError> {
        let username = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(username)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id, username, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_email)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let query = format!(
            "INSERT INTO questions ({QUESTION_COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {QUESTION_COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(Uuid::new_v4())
            .bind(question.user_id)
            .bind(&question.message)
            .bind(QuestionStatus::Pending.as_str())
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(question)
    }

    async fn list_questions(&self) -> Result<Vec<(Question, Option<String>)>, StoreError> {
        let rows = sqlx::query_as::<_, QuestionWithAuthor>(
            r#"
            SELECT q.question_id, q.user_id, q.message, q.status, q.created_at, u.username
            FROM questions q
            LEFT JOIN users u ON u.user_id = q.user_id
            ORDER BY q.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| (row.question, row.username)).collect())
    }

    async fn find_question(&self, question_id: Uuid) -> Result<Option<Question>, StoreError> {
        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE question_id = $1");
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(question)
    }

    async fn update_question_status(
        &self,
        question_id: Uuid,
        status: QuestionStatus,
    ) -> Result<Option<Question>, StoreError> {
        let query =
            format!("UPDATE questions SET status = $1 WHERE question_id = $2 RETURNING {QUESTION_COLUMNS}");
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(status.as_str())
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(question)
    }

    async fn insert_answer(&self, answer: NewAnswer) -> Result<Answer, StoreError> {
        let query = format!(
            "INSERT INTO answers ({ANSWER_COLUMNS}) VALUES ($1, $2, $3, $4, $5) RETURNING {ANSWER_COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(Uuid::new_v4())
            .bind(answer.question_id)
            .bind(answer.user_id)
            .bind(&answer.answer)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    StoreError::UnknownQuestion(answer.question_id)
                }
                _ => StoreError::Database(err),
            })
    }

    async fn list_answers(&self, question_id: Uuid) -> Result<Vec<(Answer, Option<String>)>, StoreError> {
        let rows = sqlx::query_as::<_, AnswerWithAuthor>(
            r#"
            SELECT a.answer_id, a.question_id, a.user_id, a.answer, a.created_at, u.username
            FROM answers a
            LEFT JOIN users u ON u.user_id = a.user_id
            WHERE a.question_id = $1
            ORDER BY a.created_at ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| (row.answer, row.username)).collect())
    }
}
