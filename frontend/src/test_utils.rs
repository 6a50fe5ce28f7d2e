//! In-memory `ResourceApi` used by the controller tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::{FilterSet, Record, RecordId, ResourceFields};

use crate::services::{ApiError, ResourceApi};

/// A request the fake received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(Vec<(String, String)>),
    Get(RecordId),
    Create,
    Update(RecordId),
    Delete(RecordId),
}

struct FakeState<F> {
    records: Vec<Record<F>>,
    next_id: RecordId,
    calls: Vec<Call>,
    fail_next: Option<ApiError>,
    fail_lists: bool,
}

/// Cloneable fake server; clones share the same records and call log
pub struct FakeApi<F> {
    state: Arc<Mutex<FakeState<F>>>,
}

impl<F> Clone for FakeApi<F> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<F: ResourceFields> FakeApi<F> {
    pub fn with_records(seed: Vec<F>) -> Self {
        let records: Vec<Record<F>> = seed
            .into_iter()
            .enumerate()
            .map(|(i, fields)| Record::new(i as RecordId + 1, fields))
            .collect();
        let next_id = records.len() as RecordId + 1;
        Self {
            state: Arc::new(Mutex::new(FakeState {
                records,
                next_id,
                calls: Vec::new(),
                fail_next: None,
                fail_lists: false,
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::List(_)))
            .count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Make the next non-list request fail with `err`
    pub fn fail_next(&self, err: ApiError) {
        self.state.lock().unwrap().fail_next = Some(err);
    }

    /// Make every list request fail with a transport error until reset
    pub fn fail_lists(&self, fail: bool) {
        self.state.lock().unwrap().fail_lists = fail;
    }

    pub fn stored(&self) -> Vec<Record<F>> {
        self.state.lock().unwrap().records.clone()
    }
}

fn record_call<F>(state: &mut FakeState<F>, call: Call) -> Result<(), ApiError> {
    state.calls.push(call);
    match state.fail_next.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[async_trait]
impl<F: ResourceFields> ResourceApi<F> for FakeApi<F> {
    async fn list(&self, filters: &FilterSet) -> Result<Vec<Record<F>>, ApiError> {
        let mut state = self.state.lock().unwrap();
        let query: Vec<(String, String)> = filters
            .active()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        state.calls.push(Call::List(query.clone()));
        if state.fail_lists {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(state
            .records
            .iter()
            .filter(|r| {
                query
                    .iter()
                    .all(|(k, v)| r.fields.field(k).map_or(true, |f| f.contains(v.as_str())))
            })
            .cloned()
            .collect())
    }

    async fn get(&self, id: RecordId) -> Result<Record<F>, ApiError> {
        let mut state = self.state.lock().unwrap();
        record_call(&mut state, Call::Get(id))?;
        state
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("{} not found: {}", F::LABEL, id)))
    }

    async fn create(&self, draft: &F) -> Result<Record<F>, ApiError> {
        let mut state = self.state.lock().unwrap();
        record_call(&mut state, Call::Create)?;
        let record = Record::new(state.next_id, draft.clone());
        state.next_id += 1;
        state.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: RecordId, draft: &F) -> Result<Record<F>, ApiError> {
        let mut state = self.state.lock().unwrap();
        record_call(&mut state, Call::Update(id))?;
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("{} not found: {}", F::LABEL, id)))?;
        record.fields = draft.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        record_call(&mut state, Call::Delete(id))?;
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        if state.records.len() == before {
            return Err(ApiError::NotFound(format!("{} not found: {}", F::LABEL, id)));
        }
        Ok(())
    }
}
