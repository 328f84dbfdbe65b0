//! In-memory ticket store.
//!
//! [`InMemoryTicketStore`] keeps tickets in a `BTreeMap` keyed by row id
//! behind a single [`tokio::sync::RwLock`]. Reads run concurrently; inserts
//! and deletes are serialized. Ids start at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TicketStore;
use crate::domain::{NewTicket, Ticket};
use crate::error::ApiError;

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Ticket>,
}

/// Process-local ticket storage, ordered by id.
#[derive(Debug)]
pub struct InMemoryTicketStore {
    table: RwLock<Table>,
}

impl InMemoryTicketStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Returns the number of stored tickets.
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if no tickets are stored.
    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }

    async fn find_first<F>(&self, predicate: F) -> Option<Ticket>
    where
        F: Fn(&Ticket) -> bool + Send,
    {
        let table = self.table.read().await;
        table.rows.values().find(|t| predicate(t)).cloned()
    }
}

impl Default for InMemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list(&self) -> Result<Vec<Ticket>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Ticket>, ApiError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_name_and_booking(
        &self,
        first_name: &str,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError> {
        Ok(self
            .find_first(|t| {
                t.first_name == first_name && t.last_name == last_name && t.booking_id == booking_id
            })
            .await)
    }

    async fn find_by_booking(
        &self,
        last_name: &str,
        booking_id: &str,
    ) -> Result<Option<Ticket>, ApiError> {
        Ok(self
            .find_first(|t| t.last_name == last_name && t.booking_id == booking_id)
            .await)
    }

    async fn insert(&self, ticket: &NewTicket) -> Result<i64, ApiError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| ApiError::Storage("ticket id sequence exhausted".to_string()))?;
        table.rows.insert(id, ticket.clone().into_ticket(id));
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn delete_all(&self) -> Result<u64, ApiError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn search(
        &self,
        first_name: &str,
        last_name: &str,
        iin: &str,
    ) -> Result<Vec<Ticket>, ApiError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|t| t.first_name == first_name && t.last_name == last_name && t.iin.as_str() == iin)
            .cloned()
            .collect())
    }
}
