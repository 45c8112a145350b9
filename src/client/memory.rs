use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::repository::models::{
    AdminUser, Gateway, Generation, Payment, Plan, SiteSettings, User, UserUsage,
};
use crate::repository::seed;

/// Every collection the application owns. Payments and generations are kept
/// newest first, plans in catalog order.
#[derive(Debug)]
pub struct Tables {
    pub users: Vec<User>,
    pub payments: Vec<Payment>,
    pub plans: Vec<Plan>,
    pub gateways: Vec<Gateway>,
    pub admins: Vec<AdminUser>,
    pub settings: SiteSettings,
    pub generations: Vec<Generation>,
    pub usages: HashMap<i64, UserUsage>,
    sequence: i64,
}

impl Tables {
    pub fn empty(settings: SiteSettings) -> Self {
        Tables {
            users: Vec::new(),
            payments: Vec::new(),
            plans: Vec::new(),
            gateways: Vec::new(),
            admins: Vec::new(),
            settings,
            generations: Vec::new(),
            usages: HashMap::new(),
            sequence: 0,
        }
    }

    /// Ids are shared across tables and never reused.
    pub fn next_id(&mut self) -> i64 {
        self.sequence += 1;
        self.sequence
    }
}

/// Handle to the process-wide store. Cloning shares the same tables.
///
/// `acquire` hands out a shared read guard, `begin` an exclusive write guard.
/// Whatever is changed through one write guard becomes visible all at once.
#[derive(Clone)]
pub struct MemoryDb {
    tables: Arc<RwLock<Tables>>,
}

pub type Tx<'a> = RwLockWriteGuard<'a, Tables>;

impl MemoryDb {
    pub fn new(tables: Tables) -> Self {
        MemoryDb {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub async fn acquire(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn begin(&self) -> Tx<'_> {
        self.tables.write().await
    }
}

/// Store pre-filled with the default plan catalog, gateways and settings.
pub fn new_memory_db() -> MemoryDb {
    let mut tables = Tables::empty(seed::default_settings());
    for args in seed::default_plans() {
        let id = tables.next_id();
        tables.plans.push(Plan {
            id,
            name: args.name,
            price: args.price,
            limits: args.limits,
            description: args.description,
        });
    }
    for (name, number) in seed::default_gateways() {
        let id = tables.next_id();
        tables.gateways.push(Gateway {
            id,
            name: name.to_string(),
            number: number.to_string(),
        });
    }
    MemoryDb::new(tables)
}
