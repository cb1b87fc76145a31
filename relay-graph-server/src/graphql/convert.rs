use async_graphql::{Result, ID};

use crate::{app::RelayApp, store::*};

pub(super) trait ToGlobalId {
    fn to_global_id(&self, app: &RelayApp) -> Result<ID>;
}

impl ToGlobalId for ViewerValues {
    fn to_global_id(&self, app: &RelayApp) -> Result<ID> {
        Ok(ID::from(app.global_id::<Self>(&self.id)?.into_inner()))
    }
}

impl ToGlobalId for UserValues {
    fn to_global_id(&self, app: &RelayApp) -> Result<ID> {
        Ok(ID::from(app.global_id::<Self>(self.id)?.into_inner()))
    }
}

impl ToGlobalId for TaskValues {
    fn to_global_id(&self, app: &RelayApp) -> Result<ID> {
        Ok(ID::from(app.global_id::<Self>(self.id)?.into_inner()))
    }
}

impl ToGlobalId for ProjectValues {
    fn to_global_id(&self, app: &RelayApp) -> Result<ID> {
        Ok(ID::from(app.global_id::<Self>(self.id)?.into_inner()))
    }
}
