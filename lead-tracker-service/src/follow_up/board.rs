//! Local state of the follow-up screen.
//!
//! The board mirrors the `clients` collection and applies note submissions optimistically.
//! Every submission is tracked until the store confirms or rejects it; a rejected submission
//! restores the record as it was before. Settled submissions stay readable until the next
//! one begins.

use lead_tracker_api::domain::report::StatusFilter;
use lead_tracker_api::error::{ApiError, ApiResult};
use lead_tracker_db::models::client::client_record::{ClientRecordModel, ClientUpdate};
use tracing::{debug, warn};
use uuid::Uuid;

pub type MutationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationState {
    Pending,
    Committed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TrackedMutation {
    pub id: MutationId,
    pub record_id: Uuid,
    pub state: MutationState,
    previous: ClientRecordModel,
    optimistic: ClientRecordModel,
}

#[derive(Debug, Default)]
pub struct FollowUpBoard {
    records: Vec<ClientRecordModel>,
    mutations: Vec<TrackedMutation>,
    next_mutation: MutationId,
}

impl FollowUpBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ClientRecordModel] {
        &self.records
    }

    pub fn record(&self, id: Uuid) -> Option<&ClientRecordModel> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn mutations(&self) -> &[TrackedMutation] {
        &self.mutations
    }

    pub fn mutation(&self, id: MutationId) -> Option<&TrackedMutation> {
        self.mutations.iter().find(|m| m.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.mutations
            .iter()
            .filter(|m| m.state == MutationState::Pending)
            .count()
    }

    /// Drops committed and failed mutations, returning how many were removed.
    pub fn clear_settled(&mut self) -> usize {
        let before = self.mutations.len();
        self.mutations.retain(|m| m.state == MutationState::Pending);
        before - self.mutations.len()
    }

    /// Replaces the local records with a snapshot delivered by the store.
    pub fn apply_snapshot(&mut self, records: Vec<ClientRecordModel>) {
        debug!(records = records.len(), "follow-up board refreshed");
        self.records = records;
    }

    /// Applies `update` locally and starts tracking it as `Pending`.
    pub fn begin(&mut self, record_id: Uuid, update: &ClientUpdate) -> ApiResult<MutationId> {
        self.clear_settled();
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| ApiError::NotFound(format!("Client {record_id}")))?;

        let previous = record.clone();
        update.apply_to(record);
        let optimistic = record.clone();

        let id = self.next_mutation;
        self.next_mutation += 1;
        self.mutations.push(TrackedMutation {
            id,
            record_id,
            state: MutationState::Pending,
            previous,
            optimistic,
        });
        Ok(id)
    }

    /// Adopts the record as persisted by the store.
    pub fn commit(&mut self, id: MutationId, persisted: ClientRecordModel) {
        let Some(mutation) = self.mutations.iter_mut().find(|m| m.id == id) else {
            return;
        };
        mutation.state = MutationState::Committed;

        if let Some(record) = self.records.iter_mut().find(|r| r.id == persisted.id) {
            *record = persisted;
        }
    }

    /// Marks the mutation as failed and undoes its local effect.
    ///
    /// The record is only restored while it still shows the optimistic state; a snapshot
    /// that arrived in between is newer than anything the mutation knew about.
    pub fn fail(&mut self, id: MutationId, reason: impl Into<String>) {
        let Some(mutation) = self.mutations.iter_mut().find(|m| m.id == id) else {
            return;
        };
        let reason = reason.into();
        warn!(mutation = id, record_id = %mutation.record_id, %reason, "follow-up rolled back");
        mutation.state = MutationState::Failed(reason);

        if let Some(record) = self.records.iter_mut().find(|r| r.id == mutation.record_id) {
            if *record == mutation.optimistic {
                *record = mutation.previous.clone();
            }
        }
    }

    /// Records whose company or contact contains `query` (case-insensitive) and whose
    /// status passes `filter`, in collection order.
    pub fn visible(&self, query: &str, filter: StatusFilter) -> Vec<&ClientRecordModel> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.status.matches(filter))
            .filter(|r| {
                query.is_empty()
                    || r.company.to_lowercase().contains(&query)
                    || r.contact_name.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_tracker_api::domain::client_fields::NewClientFields;
    use lead_tracker_db::models::client::common_enums::ClientStatus;
    use lead_tracker_db::models::client::follow_up_note::FollowUpNote;

    fn record(company: &str, contact: &str, status: ClientStatus) -> ClientRecordModel {
        let fields = NewClientFields::new(company, contact, "x@example.com");
        let mut record =
            ClientRecordModel::from_fields(&fields, "ana@example.com", "2024-05-02 10:00:00".into())
                .unwrap();
        record.id = Uuid::new_v4();
        record.status = status;
        record
    }

    fn note(text: &str) -> ClientUpdate {
        ClientUpdate::note(
            FollowUpNote {
                timestamp: "2024-05-03 09:00:00".into(),
                text: text.into(),
            },
            None,
        )
    }

    #[test]
    fn test_commit_adopts_persisted_record() {
        let mut board = FollowUpBoard::new();
        let acme = record("Acme", "Jo", ClientStatus::Pending);
        board.apply_snapshot(vec![acme.clone()]);

        let update = ClientUpdate::note(FollowUpNote::now("called"), Some(ClientStatus::Closed));
        let id = board.begin(acme.id, &update).unwrap();
        assert_eq!(board.pending_count(), 1);
        assert_eq!(board.record(acme.id).unwrap().status, ClientStatus::Closed);

        let mut persisted = acme.clone();
        update.apply_to(&mut persisted);
        board.commit(id, persisted.clone());

        assert_eq!(board.mutation(id).unwrap().state, MutationState::Committed);
        assert_eq!(board.record(acme.id), Some(&persisted));
        assert_eq!(board.pending_count(), 0);
    }

    #[test]
    fn test_fail_rolls_back() {
        let mut board = FollowUpBoard::new();
        let acme = record("Acme", "Jo", ClientStatus::Pending);
        board.apply_snapshot(vec![acme.clone()]);

        let id = board.begin(acme.id, &note("called")).unwrap();
        assert_eq!(board.record(acme.id).unwrap().notes.len(), 1);

        board.fail(id, "store unavailable");
        assert_eq!(
            board.mutation(id).unwrap().state,
            MutationState::Failed("store unavailable".into())
        );
        assert_eq!(board.record(acme.id), Some(&acme));
    }

    #[test]
    fn test_fail_keeps_newer_snapshot() {
        let mut board = FollowUpBoard::new();
        let acme = record("Acme", "Jo", ClientStatus::Pending);
        board.apply_snapshot(vec![acme.clone()]);

        let id = board.begin(acme.id, &note("called")).unwrap();
        let mut newer = acme.clone();
        newer.status = ClientStatus::Closed;
        board.apply_snapshot(vec![newer.clone()]);

        board.fail(id, "timeout");
        assert_eq!(board.record(acme.id), Some(&newer));
    }

    #[test]
    fn test_settled_mutations_are_dropped() {
        let mut board = FollowUpBoard::new();
        let acme = record("Acme", "Jo", ClientStatus::Pending);
        let globex = record("Globex", "Hank", ClientStatus::Pending);
        board.apply_snapshot(vec![acme.clone(), globex.clone()]);

        let committed = board.begin(acme.id, &note("first")).unwrap();
        let failed = board.begin(globex.id, &note("second")).unwrap();
        let persisted = board.record(acme.id).cloned().unwrap();
        board.commit(committed, persisted);
        board.fail(failed, "timeout");
        assert_eq!(board.mutations().len(), 2);

        let pending = board.begin(acme.id, &note("third")).unwrap();
        assert_eq!(board.mutations().len(), 1);
        assert_eq!(board.mutations()[0].id, pending);
        assert!(board.mutation(committed).is_none());

        let persisted = board.record(acme.id).cloned().unwrap();
        board.commit(pending, persisted);
        assert_eq!(board.clear_settled(), 1);
        assert!(board.mutations().is_empty());
        assert_eq!(board.clear_settled(), 0);
    }

    #[test]
    fn test_begin_on_unknown_record() {
        let mut board = FollowUpBoard::new();
        assert!(matches!(
            board.begin(Uuid::new_v4(), &note("x")),
            Err(ApiError::NotFound(_))
        ));
        assert!(board.mutations().is_empty());
    }

    #[test]
    fn test_visible_filters_by_query_and_status() {
        let mut board = FollowUpBoard::new();
        board.apply_snapshot(vec![
            record("Acme Corp", "Jo", ClientStatus::Pending),
            record("Globex", "Hank Acme", ClientStatus::Closed),
            record("Initech", "Bill", ClientStatus::Pending),
        ]);

        let names = |records: Vec<&ClientRecordModel>| -> Vec<String> {
            records.iter().map(|r| r.company.to_string()).collect()
        };
        assert_eq!(names(board.visible("acme", StatusFilter::All)), ["Acme Corp", "Globex"]);
        assert_eq!(names(board.visible("ACME", StatusFilter::Closed)), ["Globex"]);
        assert_eq!(names(board.visible("", StatusFilter::Pending)), ["Acme Corp", "Initech"]);
        assert!(board.visible("umbrella", StatusFilter::All).is_empty());
    }
}
