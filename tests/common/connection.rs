use serde_json::{Value, json};
use std::collections::{BTreeMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use surql::core::helpers;
use surql::{Action, Connection, LiveCallback, LiveHandle, Notification, Strategy, SurqlError};
use uuid::Uuid;

/// In-memory stand-in for a SurrealDB client.
///
/// Records every submitted query. Answers `INFO FOR TABLE` from the indexes
/// it has seen defined, replays queued responses, and otherwise returns an
/// empty result per statement.
#[derive(Debug)]
pub struct FakeConnection {
    strategy: Strategy,
    queries: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<Vec<Value>, String>>>,
    indexes: Mutex<BTreeMap<String, String>>,
    live_calls: AtomicUsize,
}

impl FakeConnection {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            queries: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            indexes: Mutex::new(BTreeMap::new()),
            live_calls: AtomicUsize::new(0),
        }
    }

    /// Queue the results for the next query
    pub fn respond(&self, results: Vec<Value>) {
        self.responses.lock().unwrap().push_back(Ok(results));
    }

    /// Make the next query fail
    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_owned()));
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn live_calls(&self) -> usize {
        self.live_calls.load(Ordering::SeqCst)
    }

    fn answer(&self, sql: &str) -> Result<Vec<Value>, SurqlError> {
        self.queries.lock().unwrap().push(sql.to_owned());
        if let Some(queued) = self.responses.lock().unwrap().pop_front() {
            return queued.map_err(SurqlError::Execution);
        }

        let statements: Vec<&str> = sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let mut indexes = self.indexes.lock().unwrap();
        let mut results = Vec::with_capacity(statements.len());
        for statement in statements {
            if let Some(rest) = statement.strip_prefix("DEFINE INDEX ") {
                let name = rest.split_whitespace().next().unwrap_or_default();
                indexes.insert(name.to_owned(), statement.to_owned());
                results.push(json!([]));
            } else if statement.starts_with("INFO FOR TABLE") {
                results.push(json!({
                    "events": {},
                    "fields": {},
                    "indexes": indexes.clone(),
                    "lives": {},
                    "tables": {},
                }));
            } else {
                results.push(json!([]));
            }
        }
        Ok(results)
    }
}

impl Connection for FakeConnection {
    fn strategy(&self) -> Strategy {
        self.strategy
    }

    fn query(&self, sql: &str) -> impl Future<Output = surql::Result<Vec<Value>>> + Send {
        let result = self.answer(sql);
        async move { result }
    }

    fn live(
        &self,
        table: &str,
        diff: bool,
        callback: LiveCallback,
    ) -> impl Future<Output = surql::Result<LiveHandle>> + Send {
        self.live_calls.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        callback(Notification {
            id,
            action: Action::Create,
            result: json!({
                "table": table,
                "diff": diff,
                "statement": helpers::live_select(table, diff).sql(),
            }),
        });
        async move { Ok(LiveHandle(id)) }
    }
}
