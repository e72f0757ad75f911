//! ActorEntity trait implementation for the TableLock domain type.

use crate::model::{TableId, TableLock, TableLockCreate};
use crate::table_actor::TableError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for TableLock {
    type Id = TableId;
    type Create = TableLockCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = TableError;

    fn id(&self) -> &TableId {
        &self.table
    }

    fn from_create_params(id: TableId, _params: TableLockCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            table: id,
            locked_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
