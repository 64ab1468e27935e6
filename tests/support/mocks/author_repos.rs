use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use article_listing::domain::author::{Author, AuthorId, AuthorRepository};
use article_listing::domain::errors::{DomainError, DomainResult};

/// 呼び出し回数の記録
#[derive(Default)]
pub struct LookupCounters {
    pub point_lookups: AtomicUsize,
    pub batch_lookups: AtomicUsize,
    pub batch_ids: Mutex<Vec<Vec<AuthorId>>>,
}

impl LookupCounters {
    pub fn point(&self) -> usize {
        self.point_lookups.load(Ordering::SeqCst)
    }

    pub fn batch(&self) -> usize {
        self.batch_lookups.load(Ordering::SeqCst)
    }
}

/* -------------------------------- AuthorRepository -------------------------------- */

/// インメモリの著者リポジトリ。著者ごとに応答遅延を設定できる。
pub struct InMemoryAuthorRepo {
    authors: HashMap<AuthorId, Author>,
    delays: HashMap<AuthorId, Duration>,
    pub counters: Arc<LookupCounters>,
}

impl InMemoryAuthorRepo {
    pub fn new(authors: &[(&str, &str)]) -> Self {
        Self {
            authors: authors
                .iter()
                .map(|(id, name)| (AuthorId::new(*id), Author::resolved(AuthorId::new(*id), *name)))
                .collect(),
            delays: HashMap::new(),
            counters: Arc::new(LookupCounters::default()),
        }
    }

    pub fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(AuthorId::new(id), delay);
        self
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        self.counters.point_lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self.authors.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[AuthorId]) -> DomainResult<HashMap<AuthorId, Author>> {
        self.counters.batch_lookups.fetch_add(1, Ordering::SeqCst);
        self.counters
            .batch_ids
            .lock()
            .unwrap()
            .push(ids.to_vec());
        Ok(ids
            .iter()
            .filter_map(|id| self.authors.get(id).map(|a| (id.clone(), a.clone())))
            .collect())
    }
}

/// 指定した著者の検索だけ失敗するリポジトリ（一括検索は常に失敗）
pub struct FailingAuthorRepo {
    pub fail_on: AuthorId,
}

impl FailingAuthorRepo {
    pub fn new(fail_on: &str) -> Self {
        Self {
            fail_on: AuthorId::new(fail_on),
        }
    }
}

#[async_trait]
impl AuthorRepository for FailingAuthorRepo {
    async fn find_by_id(&self, id: &AuthorId) -> DomainResult<Option<Author>> {
        if *id == self.fail_on {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        Ok(Some(Author::resolved(id.clone(), format!("author {id}"))))
    }

    async fn find_by_ids(&self, _ids: &[AuthorId]) -> DomainResult<HashMap<AuthorId, Author>> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }
}

/// 応答を返さない著者リポジトリ。実行中の検索数を数える。
#[derive(Default)]
pub struct PendingAuthorRepo {
    pub in_flight: Arc<AtomicUsize>,
    pub started: Arc<AtomicUsize>,
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthorRepository for PendingAuthorRepo {
    async fn find_by_id(&self, _id: &AuthorId) -> DomainResult<Option<Author>> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));
        std::future::pending::<()>().await;
        Ok(None)
    }

    async fn find_by_ids(&self, _ids: &[AuthorId]) -> DomainResult<HashMap<AuthorId, Author>> {
        std::future::pending::<()>().await;
        Ok(HashMap::new())
    }
}
