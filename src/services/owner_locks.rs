use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

struct Entry {
    lock: Arc<AsyncMutex<()>>,
    /// Holders plus waiters, including `acquire` calls still pending.
    users: usize,
}

type LockTable = Arc<Mutex<HashMap<String, Entry>>>;

/// Keyed async mutex serializing mutations of a single owner's record.
///
/// Entries live only while someone holds or waits for them.
#[derive(Clone, Default)]
pub struct OwnerLocks {
    table: LockTable,
}

/// Counts one user of an owner's entry and releases it on drop, so an
/// `acquire` future dropped while waiting does not leave its entry behind.
struct Registration {
    owner_id: String,
    table: LockTable,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = table.get_mut(&self.owner_id) {
            entry.users -= 1;
            if entry.users == 0 {
                table.remove(&self.owner_id);
            }
        }
    }
}

/// Held for the duration of one owner-scoped mutation.
pub struct OwnerGuard {
    // Field order matters: the mutex is released before the entry is unregistered.
    _guard: OwnedMutexGuard<()>,
    _registration: Registration,
}

impl OwnerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, owner_id: &str) -> OwnerGuard {
        let (lock, registration) = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = table.entry(owner_id.to_owned()).or_insert_with(|| Entry {
                lock: Arc::new(AsyncMutex::new(())),
                users: 0,
            });
            entry.users += 1;
            (
                entry.lock.clone(),
                Registration {
                    owner_id: owner_id.to_owned(),
                    table: self.table.clone(),
                },
            )
        };
        let guard = lock.lock_owned().await;
        OwnerGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of owners with a live lock entry.
    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
